use tracing::warn;

use workstage_core::model::{AuditLog, LogCursor};

use crate::audit::filter::LogFilter;
use crate::audit::service::{AuditLogService, LogSearchPage, LOG_PAGE_SIZE};
use crate::error::{ApiError, FilterError};

/// A dispatched-but-unapplied search.
///
/// Captures the filter and cursor the request was built from plus the pager
/// epoch at dispatch time. [`LogPager::apply`] refuses to apply an outcome
/// whose epoch has been superseded, so a slow response can never overwrite
/// state produced by a newer request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSearch {
    epoch: u64,
    filter: LogFilter,
    cursor: Option<LogCursor>,
}

impl PendingSearch {
    #[must_use]
    pub fn filter(&self) -> &LogFilter {
        &self.filter
    }

    #[must_use]
    pub fn cursor(&self) -> Option<&LogCursor> {
        self.cursor.as_ref()
    }
}

/// Forward/backward pager over the cursor-based log search.
///
/// The backend only pages forward; "previous page" is reconstructed from a
/// stack of cursors seen on the way in. The stack and cursors are only valid
/// for one filter set, so starting a fresh search drops them.
pub struct LogPager {
    service: AuditLogService,
    filter: LogFilter,

    logs: Vec<AuditLog>,
    total_pages: u32,
    current_page: u32,
    cursor: Option<LogCursor>,
    next_cursor: Option<LogCursor>,
    stack: Vec<Option<LogCursor>>,

    epoch: u64,
}

impl LogPager {
    #[must_use]
    pub fn new(service: AuditLogService) -> Self {
        Self {
            service,
            filter: LogFilter::default(),
            logs: Vec::new(),
            total_pages: 0,
            current_page: 1,
            cursor: None,
            next_cursor: None,
            stack: Vec::new(),
            epoch: 0,
        }
    }

    #[must_use]
    pub fn service(&self) -> AuditLogService {
        self.service.clone()
    }

    #[must_use]
    pub fn filter(&self) -> &LogFilter {
        &self.filter
    }

    #[must_use]
    pub fn logs(&self) -> &[AuditLog] {
        &self.logs
    }

    #[must_use]
    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    #[must_use]
    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    /// True while the backend reports another page after this one.
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.next_cursor.is_some()
    }

    /// True while at least one earlier page can be returned to.
    #[must_use]
    pub fn has_previous(&self) -> bool {
        !self.stack.is_empty()
    }

    /// Begin a fresh search with a new filter set.
    ///
    /// Resets paging to the first page and clears the cursor stack; prior
    /// cursors are meaningless under the new filters.
    ///
    /// # Errors
    ///
    /// Returns `FilterError` when the filter fails client-side validation.
    /// Nothing is dispatched and no pager state changes in that case.
    pub fn begin_search(&mut self, filter: LogFilter) -> Result<PendingSearch, FilterError> {
        filter.validate()?;
        self.filter = filter.clone();
        self.stack.clear();
        self.cursor = None;
        self.next_cursor = None;
        self.current_page = 1;
        Ok(self.pending(filter, None))
    }

    /// Begin fetching the next page, if the backend reported one.
    ///
    /// The current page's cursor is pushed so `previous` can return to it.
    #[must_use]
    pub fn begin_next(&mut self) -> Option<PendingSearch> {
        let next = self.next_cursor?;
        self.stack.push(self.cursor);
        Some(self.pending(self.filter.clone(), Some(next)))
    }

    /// Begin returning to the previous page, if there is one.
    #[must_use]
    pub fn begin_previous(&mut self) -> Option<PendingSearch> {
        let cursor = self.stack.pop()?;
        Some(self.pending(self.filter.clone(), cursor))
    }

    /// Apply a completed search, unless it has been superseded.
    ///
    /// A failed request resets to an empty result set rather than keeping
    /// stale rows on screen.
    pub fn apply(&mut self, pending: PendingSearch, outcome: Result<LogSearchPage, ApiError>) {
        if pending.epoch != self.epoch {
            // A newer search started while this one was in flight.
            return;
        }
        match outcome {
            Ok(page) => {
                self.logs = page.logs;
                self.total_pages = page.total_pages;
                self.current_page = page.current_page.max(1);
                self.cursor = page.cursor;
                self.next_cursor = page.next_cursor;
            }
            Err(err) => {
                warn!(error = %err, "log search failed; clearing results");
                self.reset_results();
            }
        }
    }

    /// Run a fresh search to completion.
    ///
    /// # Errors
    ///
    /// Returns `FilterError` when the filter is rejected client-side; request
    /// failures are absorbed into the empty-result state instead.
    pub async fn search(&mut self, filter: LogFilter) -> Result<(), FilterError> {
        let pending = self.begin_search(filter)?;
        self.run(pending).await;
        Ok(())
    }

    /// Fetch the next page, if any.
    pub async fn next(&mut self) {
        if let Some(pending) = self.begin_next() {
            self.run(pending).await;
        }
    }

    /// Return to the previous page, if any.
    pub async fn previous(&mut self) {
        if let Some(pending) = self.begin_previous() {
            self.run(pending).await;
        }
    }

    async fn run(&mut self, pending: PendingSearch) {
        let outcome = self
            .service
            .search(pending.filter(), pending.cursor(), LOG_PAGE_SIZE)
            .await;
        self.apply(pending, outcome);
    }

    fn pending(&mut self, filter: LogFilter, cursor: Option<LogCursor>) -> PendingSearch {
        self.epoch += 1;
        PendingSearch {
            epoch: self.epoch,
            filter,
            cursor,
        }
    }

    fn reset_results(&mut self) {
        self.logs.clear();
        self.total_pages = 0;
        self.current_page = 1;
        self.cursor = None;
        self.next_cursor = None;
        self.stack.clear();
    }
}
