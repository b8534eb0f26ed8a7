//! Artist card component - pure view with callbacks

use crate::components::icons::StarIcon;
use dioxus::prelude::*;
use roster_core::{unless_failed, ListedArtist, ARTIST_PLACEHOLDER};
use tracing::warn;

/// Individual artist card
///
/// A broken image swaps to the placeholder through a local flag; it never
/// reaches the caller.
#[component]
pub fn ArtistCard(
    artist: ListedArtist,
    // Navigation callback - called with artist_id when card is clicked
    on_click: EventHandler<String>,
) -> Element {
    let mut broken_url = use_signal(|| None::<String>);

    let artist_id = artist.id().to_string();
    let name = artist.name().to_string();
    let genre = artist.genre().map(str::to_string);
    let is_featured = artist.is_featured();
    let image_url = unless_failed(
        artist.image_url(),
        broken_url.read().as_deref(),
        ARTIST_PLACEHOLDER,
    );

    let card_class = "bg-gray-800 rounded-lg overflow-hidden shadow-lg hover:shadow-xl transition-shadow duration-300 cursor-pointer group relative";

    rsx! {
        div {
            class: "{card_class}",
            "data-testid": "artist-card",
            onclick: move |_| on_click.call(artist_id.clone()),
            div { class: "aspect-square bg-gray-700 relative",
                img {
                    src: "{image_url}",
                    alt: "Photo of {name}",
                    class: "w-full h-full object-cover group-hover:scale-105 transition-transform duration-300",
                    onerror: {
                        let failed_url = image_url.clone();
                        move |_| {
                            if failed_url != ARTIST_PLACEHOLDER {
                                warn!("Artist image failed to load: {failed_url}");
                                broken_url.set(Some(failed_url.clone()));
                            }
                        }
                    },
                }
                if is_featured {
                    span { class: "absolute top-2 left-2 inline-flex items-center gap-1 bg-amber-400 text-gray-900 text-xs font-semibold px-2 py-1 rounded-full",
                        StarIcon { class: "w-3 h-3" }
                        "Featured"
                    }
                }
            }
            div { class: "p-4",
                h3 {
                    class: "font-bold text-white text-lg mb-1 truncate",
                    title: "{name}",
                    "{name}"
                }
                if let Some(genre) = genre {
                    p { class: "text-gray-400 text-sm truncate", "{genre}" }
                }
            }
        }
    }
}

/// Placeholder card shown while artists load
#[component]
pub fn ArtistCardSkeleton() -> Element {
    rsx! {
        div {
            class: "bg-gray-800 rounded-lg overflow-hidden animate-pulse",
            "data-testid": "artist-card-skeleton",
            div { class: "aspect-square bg-gray-700" }
            div { class: "p-4",
                div { class: "h-5 bg-gray-700 rounded w-3/4 mb-2" }
                div { class: "h-4 bg-gray-700 rounded w-1/2" }
            }
        }
    }
}
