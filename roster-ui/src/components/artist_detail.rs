//! Artist detail view component - profile, links and releases

use crate::components::helpers::{BackButton, ErrorDisplay, LoadingSpinner};
use crate::components::icons::{LinkIcon, StarIcon};
use crate::components::release_list::ReleaseCard;
use crate::stores::artists::{ArtistDetailState, ArtistDetailStateStoreExt};
use dioxus::prelude::*;
use roster_core::{
    best_artist_image_url, filter_releases, social_platform_icon, unless_failed, ReleaseFilters,
    ARTIST_PLACEHOLDER,
};

/// Artist detail view component
///
/// Accepts `ReadStore<ArtistDetailState>` and uses lenses for granular reactivity.
#[component]
pub fn ArtistDetailView(
    state: ReadStore<ArtistDetailState>,
    on_release_click: EventHandler<String>,
    on_back: EventHandler<()>,
    on_retry: EventHandler<()>,
) -> Element {
    let loading = *state.loading().read();
    let error = state.error().read().clone();
    let artist = state.artist().read().clone();

    // Keyed by URL so a different artist starts with a fresh image
    let mut failed_url = use_signal(|| None::<String>);

    rsx! {
        div { class: "container mx-auto flex flex-col py-10 px-4",
            BackButton { on_click: on_back }
            if loading {
                LoadingSpinner { message: "Loading artist...".to_string() }
            } else if let Some(err) = error {
                ErrorDisplay { message: err, on_retry: Some(on_retry) }
            } else if let Some(artist) = artist {
                {
                    let image_url = unless_failed(
                        best_artist_image_url(&artist.images, artist.image_url.as_deref(), "profile"),
                        failed_url.read().as_deref(),
                        ARTIST_PLACEHOLDER,
                    );
                    // Newest first
                    let releases = filter_releases(&artist.releases, &ReleaseFilters::default());
                    let social_links: Vec<(String, String)> = artist
                        .social_links
                        .iter()
                        .map(|(platform, url)| (platform.clone(), url.clone()))
                        .collect();

                    rsx! {
                        div { class: "flex flex-col md:flex-row items-start gap-8 mb-10",
                            img {
                                class: "w-48 h-48 rounded-full object-cover bg-gray-700",
                                src: "{image_url}",
                                alt: "Photo of {artist.name}",
                                onerror: {
                                    let url = image_url.clone();
                                    move |_| {
                                        if url != ARTIST_PLACEHOLDER {
                                            failed_url.set(Some(url.clone()));
                                        }
                                    }
                                },
                            }
                            div { class: "flex-1",
                                div { class: "flex items-center gap-3 mb-2",
                                    h1 { class: "text-4xl font-bold text-white", "{artist.name}" }
                                    if artist.is_featured {
                                        span { class: "inline-flex items-center gap-1 bg-amber-400 text-gray-900 text-xs font-semibold px-2 py-1 rounded-full",
                                            StarIcon { class: "w-3 h-3" }
                                            "Featured"
                                        }
                                    }
                                }
                                p { class: "text-amber-300 mb-4", "{artist.genre}" }
                                if let Some(ref bio) = artist.bio {
                                    p { class: "text-gray-300 leading-relaxed mb-4 max-w-2xl", "{bio}" }
                                }
                                if !social_links.is_empty() {
                                    ul { class: "flex flex-wrap gap-3",
                                        for (platform, url) in social_links {
                                            li { key: "{platform}",
                                                a {
                                                    class: "inline-flex items-center gap-2 text-sm text-gray-300 hover:text-white bg-gray-800 px-3 py-1.5 rounded-full",
                                                    href: "{url}",
                                                    target: "_blank",
                                                    rel: "noopener noreferrer",
                                                    "data-icon": social_platform_icon(&platform),
                                                    LinkIcon { class: "w-3 h-3" }
                                                    "{platform}"
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }

                        h2 { class: "text-2xl font-bold text-white mb-4", "Releases" }
                        if releases.is_empty() {
                            p { class: "text-gray-500", "No releases yet." }
                        } else {
                            div { class: "grid grid-cols-2 md:grid-cols-3 lg:grid-cols-4 gap-6",
                                for release in releases {
                                    ReleaseCard {
                                        key: "{release.id}",
                                        release: release.clone(),
                                        on_click: on_release_click,
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
