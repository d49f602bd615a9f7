use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::StageId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ApprovalError {
    #[error("approved count ({approved}) exceeds total count ({total})")]
    CountExceedsTotal { approved: u32, total: u32 },
}

/// Per-stage approval aggregate as the backend reports it.
///
/// `approved ≤ total` is enforced at construction; the ratio itself is only
/// derived on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawApprovalRate", into = "RawApprovalRate")]
pub struct ApprovalRate {
    progress_id: StageId,
    approved: u32,
    total: u32,
    is_completed: bool,
}

impl ApprovalRate {
    /// Build an approval rate from backend counts.
    ///
    /// # Errors
    ///
    /// Returns `ApprovalError::CountExceedsTotal` when `approved > total`.
    pub fn from_counts(
        progress_id: StageId,
        approved: u32,
        total: u32,
        is_completed: bool,
    ) -> Result<Self, ApprovalError> {
        if approved > total {
            return Err(ApprovalError::CountExceedsTotal { approved, total });
        }
        Ok(Self {
            progress_id,
            approved,
            total,
            is_completed,
        })
    }

    #[must_use]
    pub fn progress_id(&self) -> StageId {
        self.progress_id
    }

    #[must_use]
    pub fn approved(&self) -> u32 {
        self.approved
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.total
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.is_completed
    }

    /// Approval ratio as a rounded integer percentage.
    ///
    /// `None` means no approval requests have been filed against the stage,
    /// which the UI renders as its own state rather than as 0%.
    #[must_use]
    pub fn percent(&self) -> Option<u8> {
        if self.total == 0 {
            return None;
        }
        let ratio = f64::from(self.approved) / f64::from(self.total);
        Some((ratio * 100.0).round() as u8)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawApprovalRate {
    progress_id: StageId,
    approved_approval_count: u32,
    total_approval_count: u32,
    #[serde(default)]
    is_completed: bool,
}

impl TryFrom<RawApprovalRate> for ApprovalRate {
    type Error = ApprovalError;

    fn try_from(raw: RawApprovalRate) -> Result<Self, Self::Error> {
        Self::from_counts(
            raw.progress_id,
            raw.approved_approval_count,
            raw.total_approval_count,
            raw.is_completed,
        )
    }
}

impl From<ApprovalRate> for RawApprovalRate {
    fn from(rate: ApprovalRate) -> Self {
        Self {
            progress_id: rate.progress_id,
            approved_approval_count: rate.approved,
            total_approval_count: rate.total,
            is_completed: rate.is_completed,
        }
    }
}

/// The backend's per-stage aggregates for a whole project.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressStatus {
    #[serde(default)]
    pub progress_list: Vec<ApprovalRate>,
}

impl ProgressStatus {
    /// The aggregate for one stage, if the backend reported it.
    #[must_use]
    pub fn rate_for(&self, stage_id: StageId) -> Option<&ApprovalRate> {
        self.progress_list
            .iter()
            .find(|rate| rate.progress_id() == stage_id)
    }
}
