#![forbid(unsafe_code)]

pub mod audit;
pub mod error;
pub mod inquiry_service;
pub mod project_service;
pub mod testing;
pub mod transport;

pub use workstage_core::Clock;

pub use error::{ApiError, FilterError};

pub use audit::{AuditLogService, LogFilter, LogPager, LogSearchPage, PendingSearch, LOG_PAGE_SIZE};
pub use inquiry_service::{InquiryFilter, InquiryPage, InquiryService, INQUIRY_PAGE_SIZE};
pub use project_service::{ProjectService, StageOverview};
pub use transport::{ApiTransport, HttpTransport};
