use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use thiserror::Error;

use crate::model::ids::LogId;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

/// Errors raised when decoding audit-log enumeration codes.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LogCodeError {
    #[error("unknown action type: {0}")]
    UnknownAction(String),
    #[error("unknown target type: {0}")]
    UnknownTarget(String),
}

//
// ─── ACTION / TARGET TYPES ────────────────────────────────────────────────────
//

/// What kind of mutation an audit-log entry records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionType {
    Create,
    Modify,
    Delete,
}

impl ActionType {
    pub const ALL: [ActionType; 3] = [ActionType::Create, ActionType::Modify, ActionType::Delete];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ActionType::Create => "CREATE",
            ActionType::Modify => "MODIFY",
            ActionType::Delete => "DELETE",
        }
    }

    /// Decode a wire code.
    ///
    /// # Errors
    ///
    /// Returns `LogCodeError::UnknownAction` for codes outside the fixed set.
    pub fn from_code(raw: &str) -> Result<Self, LogCodeError> {
        match raw {
            "CREATE" => Ok(ActionType::Create),
            "MODIFY" | "UPDATE" => Ok(ActionType::Modify),
            "DELETE" => Ok(ActionType::Delete),
            other => Err(LogCodeError::UnknownAction(other.to_string())),
        }
    }
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which entity kind an audit-log entry touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetType {
    User,
    Company,
    Project,
    Post,
    Comment,
    Link,
}

impl TargetType {
    pub const ALL: [TargetType; 6] = [
        TargetType::User,
        TargetType::Company,
        TargetType::Project,
        TargetType::Post,
        TargetType::Comment,
        TargetType::Link,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            TargetType::User => "USER",
            TargetType::Company => "COMPANY",
            TargetType::Project => "PROJECT",
            TargetType::Post => "POST",
            TargetType::Comment => "COMMENT",
            TargetType::Link => "LINK",
        }
    }

    /// Decode a wire code.
    ///
    /// # Errors
    ///
    /// Returns `LogCodeError::UnknownTarget` for codes outside the fixed set.
    pub fn from_code(raw: &str) -> Result<Self, LogCodeError> {
        match raw {
            "USER" => Ok(TargetType::User),
            "COMPANY" => Ok(TargetType::Company),
            "PROJECT" => Ok(TargetType::Project),
            "POST" => Ok(TargetType::Post),
            "COMMENT" => Ok(TargetType::Comment),
            "LINK" => Ok(TargetType::Link),
            other => Err(LogCodeError::UnknownTarget(other.to_string())),
        }
    }
}

impl fmt::Display for TargetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ActionType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ActionType {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::from_code(&raw).map_err(serde::de::Error::custom)
    }
}

impl Serialize for TargetType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TargetType {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::from_code(&raw).map_err(serde::de::Error::custom)
    }
}

//
// ─── LOG ENTRIES ──────────────────────────────────────────────────────────────
//

/// One field-level change recorded inside an audit-log entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogDetail {
    pub field_name: String,
    #[serde(default)]
    pub old_value: Option<String>,
    #[serde(default)]
    pub new_value: Option<String>,
}

/// A single audit-log entry as the search endpoint returns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditLog {
    pub id: LogId,
    pub logged_at: DateTime<Utc>,
    pub actor_id: String,
    pub action_type: ActionType,
    pub target_type: TargetType,
    pub target_id: String,
    #[serde(default)]
    pub details: Vec<LogDetail>,
}

impl AuditLog {
    /// Whether the entry carries field-level change details worth a modal.
    #[must_use]
    pub fn has_details(&self) -> bool {
        !self.details.is_empty()
    }
}

//
// ─── CURSOR ───────────────────────────────────────────────────────────────────
//

/// Forward-pagination token over the sorted log stream.
///
/// The client treats it as opaque, but `(logged_at, id)` ordering is defined
/// so monotonicity across pages is checkable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogCursor {
    pub logged_at: DateTime<Utc>,
    pub id: LogId,
}

impl LogCursor {
    #[must_use]
    pub fn new(logged_at: DateTime<Utc>, id: LogId) -> Self {
        Self { logged_at, id }
    }
}

impl Ord for LogCursor {
    fn cmp(&self, other: &Self) -> Ordering {
        self.logged_at
            .cmp(&other.logged_at)
            .then_with(|| self.id.cmp(&other.id))
    }
}

impl PartialOrd for LogCursor {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
