use std::sync::Arc;

use serde::Deserialize;
use tracing::debug;

use workstage_core::model::{
    ProgressMarker, ProgressStatus, ProjectId, ProjectProgress, ProjectRole, ProjectSummary,
    StageList, UserId,
};

use crate::error::ApiError;
use crate::transport::ApiTransport;

/// Stage timeline data for one project: the ordered stages, the backend's
/// current-progress marker, and the server-side progress aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageOverview {
    pub progress_list: StageList,
    pub current_progress: ProgressMarker,
    #[serde(default)]
    pub project_progress: ProjectProgress,
}

/// Backend gateway for project, stage, and approval data.
#[derive(Clone)]
pub struct ProjectService {
    transport: Arc<dyn ApiTransport>,
}

impl ProjectService {
    #[must_use]
    pub fn new(transport: Arc<dyn ApiTransport>) -> Self {
        Self { transport }
    }

    /// Load the stage timeline for a project.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure or an undecodable body.
    pub async fn stage_overview(&self, project: ProjectId) -> Result<StageOverview, ApiError> {
        let value = self
            .transport
            .get(&format!("/projects/{project}/progress"), &[])
            .await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Load the per-stage approval aggregates for a project.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure or an undecodable body.
    pub async fn progress_status(&self, project: ProjectId) -> Result<ProgressStatus, ApiError> {
        let value = self
            .transport
            .get(&format!("/projects/{project}/progress/status"), &[])
            .await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Promote the project's current stage to the next one.
    ///
    /// Sent once, with no body and no client-side retry; the server owns
    /// idempotency and ordering of stage transitions.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure or a non-2xx status.
    pub async fn advance_stage(&self, project: ProjectId) -> Result<(), ApiError> {
        debug!(%project, "advancing current stage");
        self.transport
            .patch(&format!(
                "/projects/{project}/progress/increase_current_progress"
            ))
            .await?;
        Ok(())
    }

    /// Projects the given user participates in, with their role on each.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure or an undecodable body.
    pub async fn list_user_projects(
        &self,
        user: UserId,
    ) -> Result<Vec<ProjectSummary>, ApiError> {
        let query = vec![("userId".to_string(), user.to_string())];
        let value = self.transport.get("/projects", &query).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Every project on the platform (admin only).
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure or an undecodable body.
    pub async fn list_all_projects(&self) -> Result<Vec<ProjectSummary>, ApiError> {
        let value = self.transport.get("/admin/projects", &[]).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// The user's role on one project, if they participate in it.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` when the project list cannot be fetched.
    pub async fn role_on(
        &self,
        project: ProjectId,
        user: UserId,
    ) -> Result<Option<ProjectRole>, ApiError> {
        let projects = self.list_user_projects(user).await?;
        Ok(projects
            .into_iter()
            .find(|row| row.project_id == project)
            .and_then(|row| row.my_role))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeTransport;
    use serde_json::json;

    fn service(fake: Arc<FakeTransport>) -> ProjectService {
        ProjectService::new(fake)
    }

    #[tokio::test]
    async fn stage_overview_decodes_stages_and_marker() {
        let fake = Arc::new(FakeTransport::new());
        fake.respond_with(
            "/projects/3/progress",
            json!({
                "progressList": [
                    {"id": 1, "name": "요구사항 정의", "position": 0},
                    {"id": 2, "name": "디자인", "position": 1},
                    {"id": 3, "name": "완료", "position": 2}
                ],
                "currentProgress": "디자인",
                "projectProgress": {
                    "totalStageCount": 3,
                    "completedStageCount": 1,
                    "currentStageProgressRate": 50,
                    "overallProgressRate": 33
                }
            }),
        );

        let overview = service(Arc::clone(&fake))
            .stage_overview(ProjectId::new(3))
            .await
            .unwrap();
        assert_eq!(overview.progress_list.len(), 3);
        assert!(overview.current_progress.matches("디자인"));
        assert_eq!(overview.project_progress.overall_progress_rate, 33);
    }

    #[tokio::test]
    async fn stage_overview_rejects_unordered_positions() {
        let fake = Arc::new(FakeTransport::new());
        fake.respond_with(
            "/projects/3/progress",
            json!({
                "progressList": [
                    {"id": 1, "name": "디자인", "position": 2},
                    {"id": 2, "name": "개발", "position": 1}
                ],
                "currentProgress": "디자인"
            }),
        );

        let err = service(fake).stage_overview(ProjectId::new(3)).await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[tokio::test]
    async fn advance_stage_hits_the_promote_endpoint() {
        let fake = Arc::new(FakeTransport::new());
        fake.respond_with("/projects/3/progress/increase_current_progress", json!(null));

        service(Arc::clone(&fake))
            .advance_stage(ProjectId::new(3))
            .await
            .unwrap();

        let call = fake
            .last_call_to("/projects/3/progress/increase_current_progress")
            .unwrap();
        assert_eq!(call.method, "PATCH");
    }

    #[tokio::test]
    async fn role_on_finds_the_matching_project() {
        let fake = Arc::new(FakeTransport::new());
        fake.respond_with(
            "/projects",
            json!([
                {
                    "projectId": 3,
                    "name": "포털 구축",
                    "startDate": "2024-02-01",
                    "endDate": "2024-09-30",
                    "projectStatus": "PROGRESS",
                    "myRole": "CLIENT_MANAGER"
                }
            ]),
        );

        let svc = service(Arc::clone(&fake));
        let role = svc
            .role_on(ProjectId::new(3), UserId::new(7))
            .await
            .unwrap();
        assert_eq!(role, Some(ProjectRole::ClientManager));

        let none = svc.role_on(ProjectId::new(99), UserId::new(7)).await.unwrap();
        assert_eq!(none, None);

        let call = fake.last_call_to("/projects").unwrap();
        assert_eq!(call.param("userId"), Some("7"));
    }
}
