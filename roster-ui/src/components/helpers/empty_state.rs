use crate::components::icons::ImageIcon;
use dioxus::prelude::*;

/// "No results" panel
#[component]
pub fn EmptyState(title: String, message: String) -> Element {
    rsx! {
        div { class: "text-center py-12", "data-testid": "empty-state",
            div { class: "text-gray-400 mb-4",
                ImageIcon { class: "w-16 h-16 mx-auto" }
            }
            h2 { class: "text-2xl font-bold text-gray-300 mb-2", "{title}" }
            p { class: "text-gray-500", "{message}" }
        }
    }
}
