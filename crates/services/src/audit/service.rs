use std::sync::Arc;

use serde::Deserialize;
use tracing::debug;

use workstage_core::model::{AuditLog, LogCursor};

use crate::audit::filter::LogFilter;
use crate::error::ApiError;
use crate::transport::ApiTransport;

/// Cursor-based log search endpoint.
const SEARCH_PATH: &str = "/auditLog/searchCursor";

/// Rows per page of the audit log.
pub const LOG_PAGE_SIZE: u32 = 10;

/// One page of log search results.
///
/// `cursor` identifies the start of this page; `next_cursor` is present while
/// more pages exist.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LogSearchPage {
    pub logs: Vec<AuditLog>,
    pub total_pages: u32,
    pub current_page: u32,
    pub next_cursor: Option<LogCursor>,
    pub cursor: Option<LogCursor>,
}

/// Backend gateway for the audit-log search.
#[derive(Clone)]
pub struct AuditLogService {
    transport: Arc<dyn ApiTransport>,
}

impl AuditLogService {
    #[must_use]
    pub fn new(transport: Arc<dyn ApiTransport>) -> Self {
        Self { transport }
    }

    /// Fetch one page of logs, optionally resuming from a cursor.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure or an undecodable body.
    pub async fn search(
        &self,
        filter: &LogFilter,
        cursor: Option<&LogCursor>,
        size: u32,
    ) -> Result<LogSearchPage, ApiError> {
        let mut query = filter.to_query();
        query.push(("size".to_string(), size.to_string()));
        if let Some(cursor) = cursor {
            query.push((
                "cursorLoggedAt".to_string(),
                cursor.logged_at.to_rfc3339(),
            ));
            query.push(("cursorId".to_string(), cursor.id.to_string()));
        }

        debug!(cursor = ?cursor, "searching audit logs");
        let value = self.transport.get(SEARCH_PATH, &query).await?;
        Ok(serde_json::from_value(value)?)
    }
}
