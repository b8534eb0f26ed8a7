//! Error display component

use dioxus::prelude::*;

/// Error panel with an optional retry button
#[component]
pub fn ErrorDisplay(
    message: String,
    #[props(default)] on_retry: Option<EventHandler<()>>,
) -> Element {
    rsx! {
        div {
            class: "bg-red-900 border border-red-700 text-red-100 px-4 py-3 rounded mb-4",
            "data-testid": "error-display",
            p { "{message}" }
            if let Some(on_retry) = on_retry {
                button {
                    class: "mt-3 px-4 py-1.5 rounded bg-red-700 hover:bg-red-600 text-sm",
                    onclick: move |_| on_retry.call(()),
                    "Try again"
                }
            }
        }
    }
}
