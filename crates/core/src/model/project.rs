use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::ids::ProjectId;

/// Backend lifecycle status of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProjectStatus {
    Pending,
    Progress,
    Inspection,
    Completed,
}

impl ProjectStatus {
    /// Display label for the status badge.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ProjectStatus::Pending => "대기중",
            ProjectStatus::Progress => "진행중",
            ProjectStatus::Inspection => "검수중",
            ProjectStatus::Completed => "완료",
        }
    }
}

/// The caller's role on one project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProjectRole {
    ClientManager,
    DeveloperManager,
    Member,
}

impl ProjectRole {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ProjectRole::ClientManager => "고객사 담당자",
            ProjectRole::DeveloperManager => "개발 담당자",
            ProjectRole::Member => "일반 참여자",
        }
    }
}

/// One row of a user's (or the admin's) project list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSummary {
    pub project_id: ProjectId,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub project_status: ProjectStatus,
    #[serde(default)]
    pub my_role: Option<ProjectRole>,
    #[serde(default)]
    pub deleted: bool,
}

impl ProjectSummary {
    /// Status label shown in lists. Deletion wins over lifecycle status.
    #[must_use]
    pub fn status_label(&self) -> &'static str {
        if self.deleted {
            return "삭제됨";
        }
        self.project_status.label()
    }
}

/// Server-side progress aggregate for a project, displayed as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectProgress {
    pub total_stage_count: u32,
    pub completed_stage_count: u32,
    pub current_stage_progress_rate: u32,
    pub overall_progress_rate: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(status: ProjectStatus, deleted: bool) -> ProjectSummary {
        ProjectSummary {
            project_id: ProjectId::new(1),
            name: "디자인 리뉴얼".to_string(),
            start_date: NaiveDate::from_ymd_opt(2024, 1, 8).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 6, 28).unwrap(),
            project_status: status,
            my_role: Some(ProjectRole::ClientManager),
            deleted,
        }
    }

    #[test]
    fn status_labels_match_badges() {
        assert_eq!(summary(ProjectStatus::Progress, false).status_label(), "진행중");
        assert_eq!(
            summary(ProjectStatus::Inspection, false).status_label(),
            "검수중"
        );
        assert_eq!(summary(ProjectStatus::Pending, false).status_label(), "대기중");
    }

    #[test]
    fn deleted_overrides_lifecycle_status() {
        assert_eq!(summary(ProjectStatus::Completed, true).status_label(), "삭제됨");
    }

    #[test]
    fn summary_decodes_backend_shape() {
        let json = r#"{
            "projectId": 3,
            "name": "포털 구축",
            "startDate": "2024-02-01",
            "endDate": "2024-09-30",
            "projectStatus": "PROGRESS",
            "myRole": "CLIENT_MANAGER"
        }"#;
        let row: ProjectSummary = serde_json::from_str(json).unwrap();
        assert_eq!(row.project_status, ProjectStatus::Progress);
        assert_eq!(row.my_role, Some(ProjectRole::ClientManager));
        assert!(!row.deleted);
    }
}
