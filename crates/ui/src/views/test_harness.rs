use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use services::testing::FakeTransport;
use services::{ApiTransport, AuditLogService, InquiryService, ProjectService};
use workstage_core::model::{CompanyRole, UserId, UserSession};

use crate::context::{build_app_context, UiApp};
use crate::views::{AuditLogView, InquiryListView, ProjectListView, ProjectStageView};

#[derive(Clone)]
struct TestApp {
    session: UserSession,
    projects: Arc<ProjectService>,
    inquiries: Arc<InquiryService>,
    audit_logs: Arc<AuditLogService>,
}

impl UiApp for TestApp {
    fn session(&self) -> UserSession {
        self.session.clone()
    }

    fn projects(&self) -> Arc<ProjectService> {
        Arc::clone(&self.projects)
    }

    fn inquiries(&self) -> Arc<InquiryService> {
        Arc::clone(&self.inquiries)
    }

    fn audit_logs(&self) -> Arc<AuditLogService> {
        Arc::clone(&self.audit_logs)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Projects,
    Project(i64),
    Inquiries,
    AuditLog,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Projects => rsx! { ProjectListView {} },
        ViewKind::Project(project_id) => rsx! { ProjectStageView { project_id } },
        ViewKind::Inquiries => rsx! { InquiryListView {} },
        ViewKind::AuditLog => rsx! { AuditLogView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub transport: Arc<FakeTransport>,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(
    view: ViewKind,
    role: CompanyRole,
    transport: Arc<FakeTransport>,
) -> ViewHarness {
    let session = UserSession::new(UserId::new(7), "테스트 사용자", role);
    let shared: Arc<dyn ApiTransport> = Arc::clone(&transport) as Arc<dyn ApiTransport>;
    let app = Arc::new(TestApp {
        session,
        projects: Arc::new(ProjectService::new(Arc::clone(&shared))),
        inquiries: Arc::new(InquiryService::new(Arc::clone(&shared))),
        audit_logs: Arc::new(AuditLogService::new(Arc::clone(&shared))),
    });

    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view });

    ViewHarness { dom, transport }
}
