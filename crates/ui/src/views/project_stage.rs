use dioxus::prelude::*;

use services::StageOverview;
use workstage_core::model::{ProgressStatus, ProjectId, ProjectRole, Stage, UserSession};

use crate::context::AppContext;
use crate::views::modal::ConfirmModal;
use crate::views::{view_state_from_resource, ViewError, ViewState};
use crate::vm::{approval_percent, can_offer_advance, StageStatus, StageTimelineVm};

#[derive(Clone, Debug, PartialEq)]
struct StageData {
    overview: StageOverview,
    status: ProgressStatus,
    role: Option<ProjectRole>,
}

/// Stage timeline for one project: completion markers, viewed-stage
/// navigation, the approval panel, and the confirm-gated stage advance.
#[component]
pub fn ProjectStageView(project_id: i64) -> Element {
    let ctx = use_context::<AppContext>();
    let project = ProjectId::new(project_id);
    let session = ctx.session().clone();

    // Bumped after a successful advance to force a full refetch of every
    // dependent resource; there is no optimistic local mutation.
    let mut reload = use_signal(|| 0u32);
    let mut vm = use_signal(|| None::<StageTimelineVm>);
    let mut show_confirm = use_signal(|| false);
    let mut in_flight = use_signal(|| false);
    let mut advance_failed = use_signal(|| false);

    let resource = {
        let projects = ctx.projects();
        let session = session.clone();
        use_resource(move || {
            let projects = projects.clone();
            let session = session.clone();
            let _reload = reload();
            async move {
                let overview = projects
                    .stage_overview(project)
                    .await
                    .map_err(|err| ViewError::from_api(&err))?;
                let status = projects
                    .progress_status(project)
                    .await
                    .map_err(|err| ViewError::from_api(&err))?;
                // Role lookup failures only hide the advance affordance.
                let role = projects
                    .role_on(project, session.user_id())
                    .await
                    .ok()
                    .flatten();
                Ok(StageData {
                    overview,
                    status,
                    role,
                })
            }
        })
    };

    // Rebuild the view-model whenever fresh data lands. The viewed stage
    // snaps back to the current one, exactly like a page reload would.
    use_effect(move || {
        if let Some(Ok(data)) = resource.value().read().as_ref() {
            vm.set(Some(StageTimelineVm::new(
                data.overview.progress_list.clone(),
                data.overview.current_progress,
            )));
        }
    });

    let state = view_state_from_resource(&resource);

    let on_confirm_advance = {
        let projects = ctx.projects();
        move |_: ()| {
            show_confirm.set(false);
            in_flight.set(true);
            let projects = projects.clone();
            spawn(async move {
                match projects.advance_stage(project).await {
                    Ok(()) => reload += 1,
                    Err(_) => advance_failed.set(true),
                }
                in_flight.set(false);
            });
        }
    };

    rsx! {
        div { class: "page",
            h2 { "프로젝트 진행 단계" }

            match state {
                ViewState::Idle => rsx! {
                    p { "대기" }
                },
                ViewState::Loading => rsx! {
                    p { class: "loading", "데이터를 불러오는 중..." }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "error", "{err.message()}" }
                },
                ViewState::Ready(data) => rsx! {
                    if vm.read().as_ref().is_none_or(|vm| vm.is_empty()) {
                        p { class: "loading", "데이터를 불러오는 중..." }
                    } else {
                        StageTimeline { vm }
                        StagePanel {
                            vm,
                            data: data.clone(),
                            session: session.clone(),
                            in_flight: in_flight(),
                            on_advance: move |_| show_confirm.set(true),
                        }
                    }
                },
            }

            if show_confirm() {
                ConfirmModal {
                    title: "단계 승급 확인",
                    message: "현재 단계를 다음 단계로 승급하시겠습니까?",
                    confirm_text: "승급",
                    cancel_text: "취소",
                    confirm_disabled: in_flight(),
                    on_confirm: on_confirm_advance,
                    on_close: move |_| show_confirm.set(false),
                }
            }
            if advance_failed() {
                ConfirmModal {
                    title: "알림",
                    message: "단계 승급에 실패했습니다.",
                    confirm_text: "확인",
                    cancel_text: "닫기",
                    on_confirm: move |_| advance_failed.set(false),
                    on_close: move |_| advance_failed.set(false),
                }
            }
        }
    }
}

#[component]
fn StageTimeline(vm: Signal<Option<StageTimelineVm>>) -> Element {
    let Some(timeline) = vm() else {
        return rsx! {};
    };
    let viewed = timeline.viewed_index();
    let len = timeline.len();
    let rate = timeline.overall_progress_rate();

    rsx! {
        div { class: "stage-timeline",
            div { class: "stage-nav",
                button {
                    class: "btn nav-btn",
                    r#type: "button",
                    disabled: viewed == 0,
                    onclick: move |_| {
                        if let Some(vm) = vm.write().as_mut() {
                            vm.retreat();
                        }
                    },
                    "←"
                }
                span { class: "stage-indicator", "{viewed + 1} / {len}" }
                button {
                    class: "btn nav-btn",
                    r#type: "button",
                    disabled: viewed + 1 >= len,
                    onclick: move |_| {
                        if let Some(vm) = vm.write().as_mut() {
                            vm.advance();
                        }
                    },
                    "→"
                }
            }
            div { class: "timeline-bar",
                div { class: "timeline-fill", style: "width: {rate}%" }
            }
            ul { class: "stage-list",
                for (index, stage) in timeline.stages().iter().cloned().enumerate() {
                    StageItem {
                        stage: stage.clone(),
                        status: timeline.status(&stage),
                        viewing: index == viewed,
                        on_select: move |_| {
                            if let Some(vm) = vm.write().as_mut() {
                                vm.select(index);
                            }
                        },
                    }
                }
            }
        }
    }
}

#[component]
fn StageItem(
    stage: Stage,
    status: StageStatus,
    viewing: bool,
    on_select: Callback<()>,
) -> Element {
    let marker_class = match status {
        StageStatus::Completed => "stage-marker completed",
        StageStatus::Current => "stage-marker current",
        StageStatus::Pending => "stage-marker pending",
    };

    rsx! {
        li {
            class: if viewing { "stage-item viewing" } else { "stage-item" },
            onclick: move |_| on_select.call(()),
            span { class: "{marker_class}", "{stage.position + 1}" }
            span { class: "stage-name", "{stage.name}" }
            span { class: "stage-status", "{status.label()}" }
        }
    }
}

#[component]
fn StagePanel(
    vm: Signal<Option<StageTimelineVm>>,
    data: StageData,
    session: UserSession,
    in_flight: bool,
    on_advance: Callback<()>,
) -> Element {
    let Some(timeline) = vm() else {
        return rsx! {};
    };
    let Some(viewed) = timeline.viewed_stage().cloned() else {
        return rsx! {};
    };

    let viewed_status = timeline.status(&viewed);
    let rate = data.status.rate_for(viewed.id);
    let percent = approval_percent(rate);
    let offer_advance = can_offer_advance(&timeline, rate, &session, data.role);

    let completed = timeline.completed_count();
    let total = timeline.len();
    let overall = timeline.overall_progress_rate();

    rsx! {
        div { class: "stage-panel",
            div { class: "panel-item",
                span { class: "panel-label", "현재 단계" }
                span { class: "panel-value", "{viewed.name}" }
                small { class: "panel-sub", "{viewed_status.label()}" }
            }
            div { class: "panel-item",
                span { class: "panel-label", "현재 단계 승인 비율" }
                match (percent, rate) {
                    (Some(percent), Some(rate)) => rsx! {
                        div { class: "progress-bar",
                            div { class: "progress-fill", style: "width: {percent}%" }
                        }
                        span { class: "panel-value", "{percent}%" }
                        small { class: "panel-sub", "{rate.approved()}/{rate.total()}" }
                        if offer_advance {
                            button {
                                class: "btn btn-advance",
                                r#type: "button",
                                disabled: in_flight,
                                onclick: move |_| on_advance.call(()),
                                if in_flight { "승급 중..." } else { "단계 승급" }
                            }
                        }
                    },
                    _ => rsx! {
                        span { class: "panel-value", "승인요청 없음" }
                    },
                }
            }
            div { class: "panel-item",
                span { class: "panel-label", "전체 진행률" }
                div { class: "progress-bar",
                    div { class: "progress-fill", style: "width: {overall}%" }
                }
                span { class: "panel-value", "{overall}%" }
                small { class: "panel-sub", "{completed}/{total} 단계 완료" }
            }
        }
    }
}
