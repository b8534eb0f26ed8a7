//! Sort / filter / search controls shared by the list views

use dioxus::prelude::*;

/// Filter bar view (pure, props-based)
#[component]
pub fn FilterBarView(
    sort_options: Vec<String>,
    filter_options: Vec<String>,
    sort_by: String,
    filter_by: String,
    search_query: String,
    #[props(default = "Search...".to_string())] search_placeholder: String,
    on_sort_change: EventHandler<String>,
    on_filter_change: EventHandler<String>,
    on_search_change: EventHandler<String>,
    on_reset: EventHandler<()>,
) -> Element {
    let select_class = "bg-gray-800 border border-gray-700 text-white rounded px-3 py-2 text-sm";

    rsx! {
        div { class: "flex flex-wrap items-center gap-3 mb-8",
            input {
                r#type: "search",
                class: "flex-1 min-w-[200px] bg-gray-800 border border-gray-700 text-white rounded px-3 py-2 text-sm placeholder-gray-500",
                placeholder: "{search_placeholder}",
                value: "{search_query}",
                oninput: move |evt| on_search_change.call(evt.value()),
            }
            label { class: "text-sm text-gray-400", "Sort" }
            select {
                class: "{select_class}",
                value: "{sort_by}",
                onchange: move |evt| on_sort_change.call(evt.value()),
                for choice in sort_options {
                    option {
                        key: "{choice}",
                        value: "{choice}",
                        selected: choice == sort_by,
                        "{choice}"
                    }
                }
            }
            label { class: "text-sm text-gray-400", "Show" }
            select {
                class: "{select_class}",
                value: "{filter_by}",
                onchange: move |evt| on_filter_change.call(evt.value()),
                for choice in filter_options {
                    option {
                        key: "{choice}",
                        value: "{choice}",
                        selected: choice == filter_by,
                        "{choice}"
                    }
                }
            }
            button {
                class: "text-sm text-gray-400 hover:text-white transition-colors",
                onclick: move |_| on_reset.call(()),
                "Reset"
            }
        }
    }
}
