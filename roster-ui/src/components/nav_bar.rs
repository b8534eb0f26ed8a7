//! Site navigation bar with a mobile menu and scroll progress indicator

use crate::components::icons::{MenuIcon, XIcon};
use dioxus::prelude::*;

/// Navigation item for the nav bar
#[derive(Clone, PartialEq)]
pub struct NavItem {
    pub id: String,
    pub label: String,
    pub is_active: bool,
}

/// Nav bar view (pure, props-based)
///
/// `scroll_progress` is a percentage in 0..=100 and drives the thin bar
/// along the bottom edge.
#[component]
pub fn NavBarView(
    site_title: String,
    nav_items: Vec<NavItem>,
    is_menu_open: bool,
    scroll_progress: f64,
    on_nav_click: EventHandler<String>,
    on_toggle_menu: EventHandler<()>,
    on_close_menu: EventHandler<()>,
) -> Element {
    rsx! {
        header {
            id: "nav-bar",
            class: "shrink-0 sticky top-0 z-20 bg-gray-900 border-b border-gray-800",
            div { class: "container mx-auto flex items-center justify-between h-14 px-4",
                button {
                    class: "text-lg font-bold text-white",
                    onclick: move |_| on_nav_click.call("home".to_string()),
                    "{site_title}"
                }
                nav { class: "hidden md:flex gap-2",
                    for item in nav_items.iter() {
                        NavButton {
                            key: "{item.id}",
                            is_active: item.is_active,
                            on_click: {
                                let id = item.id.clone();
                                move |_| on_nav_click.call(id.clone())
                            },
                            "{item.label}"
                        }
                    }
                }
                button {
                    class: "md:hidden text-gray-300 hover:text-white",
                    "aria-label": "Toggle menu",
                    onclick: move |_| on_toggle_menu.call(()),
                    if is_menu_open {
                        XIcon { class: "w-6 h-6" }
                    } else {
                        MenuIcon { class: "w-6 h-6" }
                    }
                }
            }
            if is_menu_open {
                nav {
                    class: "md:hidden flex flex-col gap-1 px-4 pb-4",
                    "data-testid": "mobile-menu",
                    for item in nav_items.iter() {
                        NavButton {
                            key: "mobile-{item.id}",
                            is_active: item.is_active,
                            on_click: {
                                let id = item.id.clone();
                                move |_| {
                                    on_close_menu.call(());
                                    on_nav_click.call(id.clone());
                                }
                            },
                            "{item.label}"
                        }
                    }
                }
            }
            div { class: "h-0.5 bg-gray-800",
                div {
                    class: "h-full bg-amber-400 transition-[width] duration-100",
                    style: "width: {scroll_progress}%;",
                }
            }
        }
    }
}

#[component]
fn NavButton(is_active: bool, on_click: EventHandler<()>, children: Element) -> Element {
    rsx! {
        button {
            class: if is_active { "px-3 py-1.5 rounded text-sm bg-gray-800 text-white" } else { "px-3 py-1.5 rounded text-sm text-gray-400 hover:text-white hover:bg-gray-800" },
            onclick: move |_| on_click.call(()),
            {children}
        }
    }
}
