pub mod filter;
pub mod pager;
pub mod service;

pub use filter::LogFilter;
pub use pager::{LogPager, PendingSearch};
pub use service::{AuditLogService, LogSearchPage, LOG_PAGE_SIZE};
