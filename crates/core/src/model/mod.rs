mod approval;
mod ids;
mod inquiry;
mod log;
mod progress;
mod project;
mod stage;
mod user;

pub use ids::{InquiryId, LogId, ProjectId, StageId, UserId};

pub use approval::{ApprovalError, ApprovalRate, ProgressStatus};
pub use inquiry::{Inquiry, InquiryStatus};
pub use log::{ActionType, AuditLog, LogCodeError, LogCursor, LogDetail, TargetType};
pub use progress::{ProgressMarker, ProgressMarkerError, StageCode};
pub use project::{ProjectProgress, ProjectRole, ProjectStatus, ProjectSummary};
pub use stage::{Stage, StageError, StageList};
pub use user::{CompanyRole, UserSession};
