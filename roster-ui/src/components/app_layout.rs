//! App layout view component
//!
//! Provides the overall page structure with slots for the nav bar, main
//! content and playback bar.

use dioxus::prelude::*;

/// App layout view (pure, props-based)
#[component]
pub fn AppLayoutView(
    /// Main content (typically the router outlet)
    children: Element,
    #[props(default)] nav_bar: Option<Element>,
    #[props(default)] playback_bar: Option<Element>,
    /// Fired once the scrolling content element mounts
    #[props(default)]
    on_content_mounted: Option<EventHandler<MountedEvent>>,
    #[props(default)] on_content_scroll: Option<EventHandler<()>>,
) -> Element {
    rsx! {
        div { class: "h-screen flex flex-col bg-gray-950 text-gray-100",
            if let Some(nb) = nav_bar {
                {nb}
            }
            main {
                class: "flex-1 overflow-y-auto pb-24",
                onmounted: move |evt| {
                    if let Some(handler) = &on_content_mounted {
                        handler.call(evt);
                    }
                },
                onscroll: move |_| {
                    if let Some(handler) = &on_content_scroll {
                        handler.call(());
                    }
                },
                {children}
            }
            if let Some(pb) = playback_bar {
                {pb}
            }
        }
    }
}
