//! Back navigation control.

use dioxus::document;
use dioxus::prelude::*;

/// Back control with the given label.
///
/// Activation steps the browser history back by one entry.
#[component]
pub fn BackButton(label: String) -> Element {
    rsx! {
        button {
            r#type: "button",
            class: "btn",
            "data-action": "back",
            onclick: move |_| {
                let _ = spawn(async move {
                    if let Err(e) = document::eval("history.back();").await {
                        tracing::warn!(error = %e, "history.back failed");
                    }
                });
            },
            "{label}"
        }
    }
}
