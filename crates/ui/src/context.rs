use std::sync::Arc;

use services::{AuditLogService, InquiryService, ProjectService};
use workstage_core::model::UserSession;

/// What the composition root (e.g. `crates/app`) provides to the views.
pub trait UiApp: Send + Sync {
    fn session(&self) -> UserSession;

    fn projects(&self) -> Arc<ProjectService>;
    fn inquiries(&self) -> Arc<InquiryService>;
    fn audit_logs(&self) -> Arc<AuditLogService>;
}

#[derive(Clone)]
pub struct AppContext {
    session: UserSession,

    projects: Arc<ProjectService>,
    inquiries: Arc<InquiryService>,
    audit_logs: Arc<AuditLogService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            session: app.session(),
            projects: app.projects(),
            inquiries: app.inquiries(),
            audit_logs: app.audit_logs(),
        }
    }

    /// The signed-in session. Views read it, never write it.
    #[must_use]
    pub fn session(&self) -> &UserSession {
        &self.session
    }

    #[must_use]
    pub fn projects(&self) -> Arc<ProjectService> {
        Arc::clone(&self.projects)
    }

    #[must_use]
    pub fn inquiries(&self) -> Arc<InquiryService> {
        Arc::clone(&self.inquiries)
    }

    #[must_use]
    pub fn audit_logs(&self) -> Arc<AuditLogService> {
        Arc::clone(&self.audit_logs)
    }
}

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
