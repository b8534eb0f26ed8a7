use crate::{use_active_section, Route};
use dioxus::prelude::*;
use roster_ui::EmptyState;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    use_active_section(None);
    let path = format!("/{}", segments.join("/"));

    rsx! {
        div { class: "container mx-auto py-16 px-4 text-center",
            EmptyState {
                title: "Page not found".to_string(),
                message: format!("Nothing lives at {path}."),
            }
            Link {
                class: "text-amber-400 hover:text-amber-300",
                to: Route::Home {},
                "Back to the homepage"
            }
        }
    }
}
