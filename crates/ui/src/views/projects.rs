use dioxus::prelude::*;
use dioxus_router::use_navigator;

use workstage_core::model::ProjectSummary;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{view_state_from_resource, ViewError, ViewState};
use crate::vm::{filter_by_name, format_date, page_of, total_pages};

/// The signed-in user's project list; admins see every project.
///
/// Filtering and paging happen client-side over the fetched list.
#[component]
pub fn ProjectListView() -> Element {
    let ctx = use_context::<AppContext>();

    let mut search_term = use_signal(String::new);
    let mut submitted_term = use_signal(String::new);
    let mut page = use_signal(|| 1usize);

    let resource = {
        let projects = ctx.projects();
        let session = ctx.session().clone();
        use_resource(move || {
            let projects = projects.clone();
            let session = session.clone();
            async move {
                let result = if session.is_admin() {
                    projects.list_all_projects().await
                } else {
                    projects.list_user_projects(session.user_id()).await
                };
                result.map_err(|err| ViewError::from_api(&err))
            }
        })
    };
    let state = view_state_from_resource(&resource);

    let on_search = move |_| {
        page.set(1);
        submitted_term.set(search_term());
    };

    rsx! {
        div { class: "page",
            h2 { "내 프로젝트" }

            div { class: "filter-row",
                input {
                    r#type: "text",
                    value: "{search_term}",
                    placeholder: "프로젝트명 검색",
                    oninput: move |evt| search_term.set(evt.value()),
                    onkeydown: move |evt| {
                        if evt.key() == Key::Enter {
                            page.set(1);
                            submitted_term.set(search_term());
                        }
                    },
                }
                button { class: "btn btn-search", r#type: "button", onclick: on_search, "검색" }
            }

            match state {
                ViewState::Idle => rsx! {
                    p { "대기" }
                },
                ViewState::Loading => rsx! {
                    p { class: "loading", "로딩 중..." }
                },
                ViewState::Error(ViewError::Forbidden) => rsx! {
                    p { class: "error", "접근 권한이 없습니다." }
                },
                ViewState::Error(_) => rsx! {
                    p { class: "error", "프로젝트 목록을 불러오는데 실패했습니다." }
                },
                ViewState::Ready(data) => rsx! {
                    ProjectTable {
                        projects: data.clone(),
                        term: submitted_term(),
                        page,
                    }
                },
            }
        }
    }
}

#[component]
fn ProjectTable(projects: Vec<ProjectSummary>, term: String, page: Signal<usize>) -> Element {
    let navigator = use_navigator();

    let filtered = filter_by_name(&projects, &term);
    let pages = total_pages(filtered.len());
    let rows = page_of(&filtered, page());

    if rows.is_empty() {
        return rsx! {
            p { class: "empty", "데이터가 없습니다." }
        };
    }

    rsx! {
        table { class: "data-table",
            thead {
                tr {
                    th { "프로젝트명" }
                    th { "시작일" }
                    th { "종료일" }
                    th { "상태" }
                    th { "역할" }
                }
            }
            tbody {
                for project in rows {
                    ProjectRow {
                        project: project.clone(),
                        on_open: move |project_id| {
                            navigator.push(Route::Project { project_id });
                        },
                    }
                }
            }
        }
        div { class: "pager-row",
            button {
                class: "btn nav-btn",
                r#type: "button",
                disabled: page() <= 1,
                onclick: move |_| page.set(page().saturating_sub(1).max(1)),
                "이전"
            }
            span { class: "stage-indicator", "{page()} / {pages}" }
            button {
                class: "btn nav-btn",
                r#type: "button",
                disabled: page() >= pages,
                onclick: move |_| page.set(page() + 1),
                "다음"
            }
        }
    }
}

#[component]
fn ProjectRow(project: ProjectSummary, on_open: Callback<i64>) -> Element {
    let status_badge = if project.deleted {
        "badge badge-danger"
    } else {
        "badge badge-secondary"
    };
    let role_label = project.my_role.map_or("-", |role| role.label());
    let project_id = project.project_id.value();

    rsx! {
        tr {
            class: "row-clickable",
            onclick: move |_| on_open.call(project_id),
            td { "{project.name}" }
            td { "{format_date(project.start_date)}" }
            td { "{format_date(project.end_date)}" }
            td {
                span { class: "{status_badge}", "{project.status_label()}" }
            }
            td { "{role_label}" }
        }
    }
}
