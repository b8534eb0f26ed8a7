use crate::api;
use crate::{use_active_section, use_app_state, Route};
use dioxus::prelude::*;
use roster_core::ListedArtist;
use roster_ui::stores::AppStateStoreExt;
use roster_ui::ArtistRosterView;

/// Landing page: the featured part of the roster
#[component]
pub fn Home() -> Element {
    use_active_section(Some("home"));
    let app = use_app_state();
    let mut data = use_resource(api::fetch_featured_artists);

    let (artists, loading, error): (Vec<ListedArtist>, bool, Option<String>) = match &*data.read() {
        Some(Ok(artists)) => (
            artists.iter().cloned().map(ListedArtist::from).collect(),
            false,
            None,
        ),
        Some(Err(e)) => (Vec::new(), false, Some(e.clone())),
        None => (Vec::new(), true, None),
    };

    let config = app.config().read().clone();

    rsx! {
        section { class: "container mx-auto py-16 px-4",
            h1 { class: "text-5xl font-bold text-white mb-4", "{config.site_title}" }
            p { class: "text-xl text-gray-400 mb-8", "Independent artists, released with care." }
            button {
                class: "px-5 py-2 rounded-full bg-amber-500 hover:bg-amber-400 text-gray-900 font-semibold",
                onclick: move |_| {
                    navigator().push(Route::Artists {});
                },
                "Browse the roster"
            }
        }
        section { class: "container mx-auto px-4 pb-16",
            h2 { class: "text-2xl font-bold text-white mb-6", "Featured artists" }
            ArtistRosterView {
                artists,
                loading,
                error,
                skeleton_count: config.skeleton_count,
                on_artist_click: move |id: String| {
                    navigator().push(Route::ArtistDetail { id });
                },
                on_retry: move |_| data.restart(),
            }
        }
    }
}
