mod audit_log;
mod inquiries;
mod modal;
mod project_stage;
mod projects;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use audit_log::AuditLogView;
pub use inquiries::InquiryListView;
pub use modal::ConfirmModal;
pub use project_stage::ProjectStageView;
pub use projects::ProjectListView;
pub use state::{view_state_from_resource, ViewError, ViewState};
