//! In-memory transport for service and view tests.

use std::collections::HashMap;
use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::ApiError;
use crate::transport::ApiTransport;

#[derive(Debug, Clone)]
enum CannedOutcome {
    Ok(Value),
    Status(u16),
}

/// One observed transport call, for asserting query construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub method: &'static str,
    pub path: String,
    pub query: Vec<(String, String)>,
}

impl RecordedCall {
    /// The value of a query parameter, if present.
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Canned-response transport keyed by request path.
///
/// Responses queued with [`push_response`](Self::push_response) are consumed
/// one per call; [`respond_with`](Self::respond_with) installs a sticky
/// fallback that answers every remaining call. Unmatched paths answer 404.
#[derive(Default)]
pub struct FakeTransport {
    queued: Mutex<HashMap<String, VecDeque<CannedOutcome>>>,
    sticky: Mutex<HashMap<String, CannedOutcome>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl FakeTransport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a one-shot successful response for a path.
    pub fn push_response(&self, path: &str, value: Value) {
        self.queued
            .lock()
            .expect("fake transport lock")
            .entry(path.to_string())
            .or_default()
            .push_back(CannedOutcome::Ok(value));
    }

    /// Queue a one-shot failure status for a path.
    pub fn push_status(&self, path: &str, status: u16) {
        self.queued
            .lock()
            .expect("fake transport lock")
            .entry(path.to_string())
            .or_default()
            .push_back(CannedOutcome::Status(status));
    }

    /// Install a sticky response answering every call to a path.
    pub fn respond_with(&self, path: &str, value: Value) {
        self.sticky
            .lock()
            .expect("fake transport lock")
            .insert(path.to_string(), CannedOutcome::Ok(value));
    }

    /// Install a sticky failure status for a path.
    pub fn fail_with(&self, path: &str, status: u16) {
        self.sticky
            .lock()
            .expect("fake transport lock")
            .insert(path.to_string(), CannedOutcome::Status(status));
    }

    /// Every call observed so far, in order.
    #[must_use]
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().expect("fake transport lock").clone()
    }

    /// The most recent call to the given path.
    #[must_use]
    pub fn last_call_to(&self, path: &str) -> Option<RecordedCall> {
        self.calls()
            .into_iter()
            .rev()
            .find(|call| call.path == path)
    }

    fn answer(&self, method: &'static str, path: &str, query: &[(String, String)]) -> CannedOutcome {
        self.calls.lock().expect("fake transport lock").push(RecordedCall {
            method,
            path: path.to_string(),
            query: query.to_vec(),
        });

        if let Some(queue) = self
            .queued
            .lock()
            .expect("fake transport lock")
            .get_mut(path)
        {
            if let Some(outcome) = queue.pop_front() {
                return outcome;
            }
        }
        self.sticky
            .lock()
            .expect("fake transport lock")
            .get(path)
            .cloned()
            .unwrap_or(CannedOutcome::Status(404))
    }
}

fn into_result(outcome: CannedOutcome) -> Result<Value, ApiError> {
    match outcome {
        CannedOutcome::Ok(value) => Ok(value),
        CannedOutcome::Status(code) => Err(ApiError::Status(
            reqwest::StatusCode::from_u16(code).unwrap_or(reqwest::StatusCode::INTERNAL_SERVER_ERROR),
        )),
    }
}

#[async_trait]
impl ApiTransport for FakeTransport {
    async fn get(&self, path: &str, query: &[(String, String)]) -> Result<Value, ApiError> {
        into_result(self.answer("GET", path, query))
    }

    async fn patch(&self, path: &str) -> Result<Value, ApiError> {
        into_result(self.answer("PATCH", path, &[]))
    }
}
