use chrono::NaiveDate;
use dioxus::prelude::*;

use services::{InquiryFilter, INQUIRY_PAGE_SIZE};
use workstage_core::model::{Inquiry, InquiryStatus};

use crate::context::AppContext;
use crate::views::{view_state_from_resource, ViewError, ViewState};
use crate::vm::format_datetime;

/// Admin inquiry list: filter fields plus offset pagination.
#[component]
pub fn InquiryListView() -> Element {
    let ctx = use_context::<AppContext>();

    // Authorization failures are not rendered-then-rejected: anyone who is
    // not an admin gets the message and no request is ever dispatched.
    if !ctx.session().is_admin() {
        return rsx! {
            div { class: "page",
                h2 { "문의사항 관리" }
                p { class: "error", "{ViewError::Forbidden.message()}" }
            }
        };
    }

    // Draft fields; applied to `submitted` when 검색 is pressed.
    let mut title = use_signal(String::new);
    let mut creator_name = use_signal(String::new);
    let mut status = use_signal(String::new);
    let mut start_date = use_signal(String::new);
    let mut end_date = use_signal(String::new);

    let mut submitted = use_signal(InquiryFilter::default);
    let mut page = use_signal(|| 0u32);

    let resource = {
        let inquiries = ctx.inquiries();
        use_resource(move || {
            let inquiries = inquiries.clone();
            let filter = submitted();
            let page = page();
            async move {
                inquiries
                    .search(&filter, page)
                    .await
                    .map_err(|err| ViewError::from_api(&err))
            }
        })
    };
    let state = view_state_from_resource(&resource);

    let on_search = move |_| {
        page.set(0);
        submitted.set(InquiryFilter {
            title: title(),
            creator_name: creator_name(),
            status: match status().as_str() {
                "PENDING" => Some(InquiryStatus::Pending),
                "COMPLETED" => Some(InquiryStatus::Completed),
                _ => None,
            },
            start_date: NaiveDate::parse_from_str(&start_date(), "%Y-%m-%d").ok(),
            end_date: NaiveDate::parse_from_str(&end_date(), "%Y-%m-%d").ok(),
        });
    };

    rsx! {
        div { class: "page",
            h2 { "문의사항 관리" }

            div { class: "filter-row",
                input {
                    r#type: "text",
                    value: "{title}",
                    placeholder: "제목",
                    oninput: move |evt| title.set(evt.value()),
                }
                input {
                    r#type: "text",
                    value: "{creator_name}",
                    placeholder: "작성자",
                    oninput: move |evt| creator_name.set(evt.value()),
                }
                select {
                    value: "{status}",
                    onchange: move |evt| status.set(evt.value()),
                    option { value: "", "전체" }
                    option { value: "PENDING", "답변 대기" }
                    option { value: "COMPLETED", "답변 완료" }
                }
                input {
                    r#type: "date",
                    value: "{start_date}",
                    oninput: move |evt| start_date.set(evt.value()),
                }
                input {
                    r#type: "date",
                    value: "{end_date}",
                    oninput: move |evt| end_date.set(evt.value()),
                }
                button { class: "btn btn-search", r#type: "button", onclick: on_search, "검색" }
            }

            match state {
                ViewState::Idle => rsx! {
                    p { "대기" }
                },
                ViewState::Loading => rsx! {
                    p { class: "loading", "로딩중..." }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "error", "{err.message()}" }
                },
                ViewState::Ready(data) => rsx! {
                    if data.content.is_empty() {
                        p { class: "empty", "데이터가 없습니다." }
                    } else {
                        table { class: "data-table",
                            thead {
                                tr {
                                    th { "제목" }
                                    th { "작성자" }
                                    th { "상태" }
                                    th { "작성일" }
                                }
                            }
                            tbody {
                                for inquiry in data.content.iter() {
                                    InquiryRow { inquiry: inquiry.clone() }
                                }
                            }
                        }
                        PageControls {
                            page: page(),
                            total_elements: data.total_elements,
                            on_change: move |next| page.set(next),
                        }
                    }
                },
            }
        }
    }
}

#[component]
fn InquiryRow(inquiry: Inquiry) -> Element {
    let badge = match inquiry.status {
        InquiryStatus::Pending => "badge badge-danger",
        InquiryStatus::Completed => "badge badge-secondary",
    };

    rsx! {
        tr {
            td { "{inquiry.title}" }
            td { "{inquiry.creator_name}" }
            td {
                span { class: "{badge}", "{inquiry.status.label()}" }
            }
            td { "{format_datetime(inquiry.created_at)}" }
        }
    }
}

#[component]
fn PageControls(page: u32, total_elements: u64, on_change: Callback<u32>) -> Element {
    let total_pages = total_elements.div_ceil(u64::from(INQUIRY_PAGE_SIZE)).max(1) as u32;

    rsx! {
        div { class: "pager-row",
            button {
                class: "btn nav-btn",
                r#type: "button",
                disabled: page == 0,
                onclick: move |_| on_change.call(page.saturating_sub(1)),
                "이전"
            }
            span { class: "stage-indicator", "{page + 1} / {total_pages}" }
            button {
                class: "btn nav-btn",
                r#type: "button",
                disabled: page + 1 >= total_pages,
                onclick: move |_| on_change.call(page + 1),
                "다음"
            }
        }
    }
}
