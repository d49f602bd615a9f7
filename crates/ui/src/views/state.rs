use dioxus::prelude::*;

use services::ApiError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    Forbidden,
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ViewError::Forbidden => "접근 권한이 없습니다.",
            ViewError::Unknown => "데이터를 불러오지 못했습니다.",
        }
    }

    /// Collapse a transport failure into what the view can say about it.
    #[must_use]
    pub fn from_api(err: &ApiError) -> Self {
        if err.is_forbidden() {
            ViewError::Forbidden
        } else {
            ViewError::Unknown
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Ready(T),
    Error(ViewError),
}

#[must_use]
pub fn view_state_from_resource<T: Clone>(
    resource: &Resource<Result<T, ViewError>>,
) -> ViewState<T> {
    match resource.state().cloned() {
        UseResourceState::Pending => ViewState::Loading,
        UseResourceState::Ready => match resource.value().read().as_ref() {
            Some(Ok(data)) => ViewState::Ready(data.clone()),
            Some(Err(err)) => ViewState::Error(*err),
            None => ViewState::Error(ViewError::Unknown),
        },
        UseResourceState::Paused | UseResourceState::Stopped => ViewState::Idle,
    }
}
