use dioxus::prelude::*;

/// Blocking confirmation dialog.
///
/// Mount it conditionally; clicking the overlay cancels, clicking the dialog
/// itself does not.
#[component]
pub fn ConfirmModal(
    title: String,
    message: String,
    confirm_text: String,
    cancel_text: String,
    confirm_disabled: Option<bool>,
    on_confirm: Callback<()>,
    on_close: Callback<()>,
) -> Element {
    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal",
                onclick: move |evt| evt.stop_propagation(),
                h3 { class: "modal-title", "{title}" }
                p { class: "modal-body", "{message}" }
                div { class: "modal-actions",
                    button {
                        class: "btn modal-cancel",
                        r#type: "button",
                        onclick: move |_| on_close.call(()),
                        "{cancel_text}"
                    }
                    button {
                        class: "btn modal-confirm",
                        r#type: "button",
                        disabled: confirm_disabled.unwrap_or(false),
                        onclick: move |_| on_confirm.call(()),
                        "{confirm_text}"
                    }
                }
            }
        }
    }
}
