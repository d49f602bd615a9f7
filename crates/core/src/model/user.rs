use serde::{Deserialize, Serialize};

use crate::model::ids::UserId;

/// Company-wide role of the signed-in user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CompanyRole {
    Admin,
    User,
}

/// Read-only snapshot of the signed-in session.
///
/// Injected into view-models at construction; nothing in this client mutates
/// it. Project-level roles are resolved per project, not carried here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSession {
    user_id: UserId,
    name: String,
    company_role: CompanyRole,
}

impl UserSession {
    #[must_use]
    pub fn new(user_id: UserId, name: impl Into<String>, company_role: CompanyRole) -> Self {
        Self {
            user_id,
            name: name.into(),
            company_role,
        }
    }

    #[must_use]
    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn company_role(&self) -> CompanyRole {
        self.company_role
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.company_role == CompanyRole::Admin
    }
}
