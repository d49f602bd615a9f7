use std::sync::Arc;

use serde_json::{json, Value};
use services::testing::FakeTransport;
use workstage_core::model::CompanyRole;

use super::test_harness::{setup_view_harness, ViewKind};

fn stage_overview_json(marker: &str) -> Value {
    json!({
        "progressList": [
            {"id": 1, "name": "요구사항 정의", "position": 0},
            {"id": 2, "name": "디자인", "position": 1},
            {"id": 3, "name": "완료", "position": 2}
        ],
        "currentProgress": marker,
        "projectProgress": {
            "totalStageCount": 3,
            "completedStageCount": 1,
            "currentStageProgressRate": 50,
            "overallProgressRate": 33
        }
    })
}

fn progress_status_json(approved: u32, total: u32) -> Value {
    json!({
        "progressList": [
            {"progressId": 1, "approvedApprovalCount": 1, "totalApprovalCount": 1, "isCompleted": true},
            {"progressId": 2, "approvedApprovalCount": approved, "totalApprovalCount": total, "isCompleted": false}
        ]
    })
}

fn user_projects_json(role: &str) -> Value {
    json!([
        {
            "projectId": 3,
            "name": "포털 구축",
            "startDate": "2024-02-01",
            "endDate": "2024-09-30",
            "projectStatus": "PROGRESS",
            "myRole": role
        }
    ])
}

#[tokio::test(flavor = "current_thread")]
async fn stage_view_smoke_renders_timeline_statuses() {
    let transport = Arc::new(FakeTransport::new());
    transport.respond_with("/projects/3/progress", stage_overview_json("디자인"));
    transport.respond_with("/projects/3/progress/status", progress_status_json(1, 2));
    transport.respond_with("/projects", user_projects_json("MEMBER"));

    let mut harness = setup_view_harness(
        ViewKind::Project(3),
        CompanyRole::User,
        Arc::clone(&transport),
    );
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("완료"), "missing completed badge in {html}");
    assert!(html.contains("진행중"), "missing current badge in {html}");
    assert!(html.contains("대기"), "missing pending badge in {html}");
    assert!(html.contains("33%"), "missing overall rate in {html}");
    assert!(html.contains("1/3 단계 완료"), "missing completed count in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn stage_view_smoke_offers_advance_only_at_full_approval_for_admin() {
    let transport = Arc::new(FakeTransport::new());
    transport.respond_with("/projects/3/progress", stage_overview_json("디자인"));
    transport.respond_with("/projects/3/progress/status", progress_status_json(2, 2));
    transport.respond_with("/projects", user_projects_json("MEMBER"));

    let mut harness = setup_view_harness(
        ViewKind::Project(3),
        CompanyRole::Admin,
        Arc::clone(&transport),
    );
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("100%"), "missing approval percent in {html}");
    assert!(html.contains("단계 승급"), "missing advance button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn stage_view_smoke_hides_advance_from_plain_members() {
    let transport = Arc::new(FakeTransport::new());
    transport.respond_with("/projects/3/progress", stage_overview_json("디자인"));
    transport.respond_with("/projects/3/progress/status", progress_status_json(2, 2));
    transport.respond_with("/projects", user_projects_json("MEMBER"));

    let mut harness = setup_view_harness(
        ViewKind::Project(3),
        CompanyRole::User,
        Arc::clone(&transport),
    );
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("100%"), "missing approval percent in {html}");
    assert!(!html.contains("단계 승급"), "advance button leaked in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn stage_view_smoke_reports_missing_approvals() {
    let transport = Arc::new(FakeTransport::new());
    transport.respond_with("/projects/3/progress", stage_overview_json("디자인"));
    transport.respond_with(
        "/projects/3/progress/status",
        json!({
            "progressList": [
                {"progressId": 2, "approvedApprovalCount": 0, "totalApprovalCount": 0}
            ]
        }),
    );
    transport.respond_with("/projects", user_projects_json("MEMBER"));

    let mut harness = setup_view_harness(
        ViewKind::Project(3),
        CompanyRole::Admin,
        Arc::clone(&transport),
    );
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("승인요청 없음"), "missing empty-approval state in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn audit_log_smoke_renders_rows_and_badges() {
    let transport = Arc::new(FakeTransport::new());
    transport.respond_with(
        "/auditLog/searchCursor",
        json!({
            "logs": [
                {
                    "id": 31,
                    "loggedAt": "2024-05-02T09:30:00Z",
                    "actorId": "admin01",
                    "actionType": "CREATE",
                    "targetType": "PROJECT",
                    "targetId": "12",
                    "details": [{"fieldName": "name", "oldValue": "a", "newValue": "b"}]
                },
                {
                    "id": 30,
                    "loggedAt": "2024-05-02T09:29:00Z",
                    "actorId": "admin02",
                    "actionType": "DELETE",
                    "targetType": "COMMENT",
                    "targetId": "44"
                }
            ],
            "totalPages": 2,
            "currentPage": 1,
            "nextCursor": {"loggedAt": "2024-05-02T09:29:00Z", "id": 30},
            "cursor": null
        }),
    );

    let mut harness = setup_view_harness(
        ViewKind::AuditLog,
        CompanyRole::Admin,
        Arc::clone(&transport),
    );
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("admin01"), "missing actor in {html}");
    assert!(html.contains("CREATE"), "missing action badge in {html}");
    assert!(html.contains("상세보기"), "missing detail button in {html}");
    assert!(html.contains("1 / 2"), "missing page indicator in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn audit_log_smoke_renders_empty_state_on_failure() {
    let transport = Arc::new(FakeTransport::new());
    transport.fail_with("/auditLog/searchCursor", 500);

    let mut harness = setup_view_harness(
        ViewKind::AuditLog,
        CompanyRole::Admin,
        Arc::clone(&transport),
    );
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("데이터가 없습니다."), "missing empty state in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn project_list_smoke_renders_status_badges() {
    let transport = Arc::new(FakeTransport::new());
    transport.respond_with("/projects", user_projects_json("CLIENT_MANAGER"));

    let mut harness = setup_view_harness(
        ViewKind::Projects,
        CompanyRole::User,
        Arc::clone(&transport),
    );
    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("포털 구축"), "missing project name in {html}");
    assert!(html.contains("진행중"), "missing status badge in {html}");
    assert!(html.contains("고객사 담당자"), "missing role label in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn project_list_smoke_renders_forbidden_message() {
    let transport = Arc::new(FakeTransport::new());
    transport.fail_with("/projects", 403);

    let mut harness = setup_view_harness(
        ViewKind::Projects,
        CompanyRole::User,
        Arc::clone(&transport),
    );
    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("접근 권한이 없습니다."), "missing forbidden message in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn inquiry_list_smoke_renders_rows_for_admin() {
    let transport = Arc::new(FakeTransport::new());
    transport.respond_with(
        "/admin/inquiries/search",
        json!({
            "content": [{
                "id": 11,
                "title": "견적 문의드립니다",
                "creatorName": "김민수",
                "status": "PENDING",
                "createdAt": "2024-04-01T02:00:00Z"
            }],
            "totalElements": 1
        }),
    );

    let mut harness = setup_view_harness(
        ViewKind::Inquiries,
        CompanyRole::Admin,
        Arc::clone(&transport),
    );
    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("견적 문의드립니다"), "missing inquiry title in {html}");
    assert!(html.contains("답변 대기"), "missing status badge in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn inquiry_list_smoke_blocks_non_admins_without_a_request() {
    let transport = Arc::new(FakeTransport::new());

    let mut harness = setup_view_harness(
        ViewKind::Inquiries,
        CompanyRole::User,
        Arc::clone(&transport),
    );
    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("접근 권한이 없습니다."), "missing forbidden message in {html}");
    assert!(
        harness.transport.calls().is_empty(),
        "no request should be sent for non-admins"
    );
}
