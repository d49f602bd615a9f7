use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::context::AppContext;
use crate::views::{AuditLogView, InquiryListView, ProjectListView, ProjectStageView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", ProjectListView)] Projects {},
        #[route("/project/:project_id", ProjectStageView)] Project { project_id: i64 },
        #[route("/inquiries", InquiryListView)] Inquiries {},
        #[route("/audit-log", AuditLogView)] AuditLog {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            Sidebar {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Sidebar() -> Element {
    let ctx = use_context::<AppContext>();
    let is_admin = ctx.session().is_admin();

    rsx! {
        nav { class: "sidebar",
            h1 { "Workstage" }
            ul {
                li { Link { to: Route::Projects {}, "내 프로젝트" } }
                // Admin-only pages get no affordance for everyone else.
                if is_admin {
                    li { Link { to: Route::Inquiries {}, "문의사항 관리" } }
                    li { Link { to: Route::AuditLog {}, "로그 기록" } }
                }
            }
        }
    }
}
