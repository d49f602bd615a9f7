use chrono::NaiveDate;
use dioxus::prelude::*;

use services::{LogFilter, LogPager, PendingSearch, LOG_PAGE_SIZE};
use workstage_core::model::{ActionType, AuditLog, TargetType};

use crate::context::AppContext;
use crate::views::modal::ConfirmModal;
use crate::vm::format_datetime;

/// Audit-log viewer: filter row, cursor-paged table, and the field-level
/// change detail modal.
#[component]
pub fn AuditLogView() -> Element {
    let ctx = use_context::<AppContext>();
    let mut pager = use_signal(|| LogPager::new((*ctx.audit_logs()).clone()));

    // Draft filter fields; they only take effect when 검색 is pressed.
    let mut action_type = use_signal(String::new);
    let mut target_type = use_signal(String::new);
    let mut start_date = use_signal(String::new);
    let mut end_date = use_signal(String::new);
    let mut user_id = use_signal(String::new);

    let mut alert = use_signal(|| None::<String>);
    let mut selected = use_signal(|| None::<AuditLog>);

    // Initial page load with the unfiltered search.
    use_future(move || async move {
        let pending = pager.write().begin_search(LogFilter::default());
        if let Ok(pending) = pending {
            run_search(pager, pending).await;
        }
    });

    let on_search = move |_| {
        let filter = LogFilter {
            action_type: ActionType::from_code(&action_type()).ok(),
            target_type: TargetType::from_code(&target_type()).ok(),
            start_date: NaiveDate::parse_from_str(&start_date(), "%Y-%m-%d").ok(),
            end_date: NaiveDate::parse_from_str(&end_date(), "%Y-%m-%d").ok(),
            user_id: user_id(),
        };
        let begun = pager.write().begin_search(filter);
        match begun {
            Ok(pending) => {
                spawn(async move {
                    run_search(pager, pending).await;
                });
            }
            Err(err) => alert.set(Some(err.to_string())),
        }
    };

    let on_next = move |_| {
        let pending = pager.write().begin_next();
        if let Some(pending) = pending {
            spawn(async move {
                run_search(pager, pending).await;
            });
        }
    };

    let on_previous = move |_| {
        let pending = pager.write().begin_previous();
        if let Some(pending) = pending {
            spawn(async move {
                run_search(pager, pending).await;
            });
        }
    };

    let logs: Vec<AuditLog> = pager.read().logs().to_vec();
    let total_pages = pager.read().total_pages();
    let current_page = pager.read().current_page();
    let has_next = pager.read().has_next();
    let has_previous = pager.read().has_previous();

    rsx! {
        div { class: "page",
            h2 { "로그 기록" }

            div { class: "filter-row",
                select {
                    value: "{action_type}",
                    onchange: move |evt| action_type.set(evt.value()),
                    option { value: "", "--" }
                    for action in ActionType::ALL {
                        option { value: "{action.as_str()}", "{action.as_str()}" }
                    }
                }
                select {
                    value: "{target_type}",
                    onchange: move |evt| target_type.set(evt.value()),
                    option { value: "", "--" }
                    for target in TargetType::ALL {
                        option { value: "{target.as_str()}", "{target.as_str()}" }
                    }
                }
                input {
                    r#type: "date",
                    value: "{start_date}",
                    placeholder: "시작일",
                    oninput: move |evt| start_date.set(evt.value()),
                }
                input {
                    r#type: "date",
                    value: "{end_date}",
                    placeholder: "종료일",
                    oninput: move |evt| end_date.set(evt.value()),
                }
                input {
                    r#type: "text",
                    value: "{user_id}",
                    placeholder: "사용자 ID",
                    oninput: move |evt| user_id.set(evt.value()),
                }
                button { class: "btn btn-search", r#type: "button", onclick: on_search, "검색" }
            }

            if logs.is_empty() {
                p { class: "empty", "데이터가 없습니다." }
            } else {
                table { class: "data-table",
                    thead {
                        tr {
                            th { "시간" }
                            th { "사용자 ID" }
                            th { "액션" }
                            th { "대상 타입" }
                            th { "대상 ID" }
                            th { "상세 정보" }
                        }
                    }
                    tbody {
                        for log in logs {
                            LogRow {
                                log: log.clone(),
                                on_detail: move |log| selected.set(Some(log)),
                            }
                        }
                    }
                }
                div { class: "pager-row",
                    button {
                        class: "btn nav-btn",
                        r#type: "button",
                        disabled: !has_previous,
                        onclick: on_previous,
                        "이전"
                    }
                    span { class: "stage-indicator", "{current_page} / {total_pages}" }
                    button {
                        class: "btn nav-btn",
                        r#type: "button",
                        disabled: !has_next,
                        onclick: on_next,
                        "다음"
                    }
                }
            }

            if let Some(log) = selected() {
                LogDetailModal { log, on_close: move |_| selected.set(None) }
            }
            if let Some(message) = alert() {
                ConfirmModal {
                    title: "알림",
                    message,
                    confirm_text: "확인",
                    cancel_text: "취소",
                    on_confirm: move |_| alert.set(None),
                    on_close: move |_| alert.set(None),
                }
            }
        }
    }
}

async fn run_search(mut pager: Signal<LogPager>, pending: PendingSearch) {
    let service = pager.peek().service();
    let outcome = service
        .search(pending.filter(), pending.cursor(), LOG_PAGE_SIZE)
        .await;
    pager.write().apply(pending, outcome);
}

#[component]
fn LogRow(log: AuditLog, on_detail: Callback<AuditLog>) -> Element {
    let detail_log = log.clone();

    rsx! {
        tr {
            td { "{format_datetime(log.logged_at)}" }
            td { "{log.actor_id}" }
            td {
                span { class: "{action_badge_class(log.action_type)}", "{log.action_type}" }
            }
            td {
                span { class: "{target_badge_class(log.target_type)}", "{log.target_type}" }
            }
            td { "{log.target_id}" }
            td {
                if log.has_details() {
                    button {
                        class: "btn btn-detail",
                        r#type: "button",
                        onclick: move |_| on_detail.call(detail_log.clone()),
                        "상세보기"
                    }
                } else {
                    "-"
                }
            }
        }
    }
}

#[component]
fn LogDetailModal(log: AuditLog, on_close: Callback<()>) -> Element {
    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal modal-wide",
                onclick: move |evt| evt.stop_propagation(),
                h3 { class: "modal-title", "변경 상세 정보" }
                div { class: "detail-list",
                    for detail in log.details.iter() {
                        div { class: "detail-item",
                            span { class: "detail-field", "{detail.field_name}" }
                            div { class: "detail-values",
                                div {
                                    span { class: "value-label", "이전 값:" }
                                    span { {detail.old_value.clone().unwrap_or_else(|| "-".to_string())} }
                                }
                                div {
                                    span { class: "value-label", "새로운 값:" }
                                    span { {detail.new_value.clone().unwrap_or_else(|| "-".to_string())} }
                                }
                            }
                        }
                    }
                }
                div { class: "modal-actions",
                    button {
                        class: "btn modal-cancel",
                        r#type: "button",
                        onclick: move |_| on_close.call(()),
                        "닫기"
                    }
                }
            }
        }
    }
}

fn action_badge_class(action: ActionType) -> &'static str {
    match action {
        ActionType::Create => "badge badge-success",
        ActionType::Modify => "badge badge-primary",
        ActionType::Delete => "badge badge-danger",
    }
}

fn target_badge_class(target: TargetType) -> &'static str {
    match target {
        TargetType::Company => "badge badge-info",
        TargetType::Project => "badge badge-success",
        TargetType::Link => "badge badge-warning",
        TargetType::Post => "badge badge-dark",
        TargetType::User => "badge badge-primary",
        TargetType::Comment => "badge badge-danger",
    }
}
