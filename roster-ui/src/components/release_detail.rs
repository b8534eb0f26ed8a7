//! Release detail view - cover, links and a playable track list

use crate::components::helpers::{BackButton, ErrorDisplay, LoadingSpinner};
use crate::components::icons::{LinkIcon, PauseIcon, PlayIcon};
use crate::stores::releases::{ReleaseDetailState, ReleaseDetailStateStoreExt};
use dioxus::prelude::*;
use roster_core::{
    best_cover_url, format_date, format_duration, streaming_platform_label, unless_failed,
    ReleaseTrack, RELEASE_PLACEHOLDER,
};

/// Release detail view
///
/// `playing_track_id` is the player's current track, used to mark the
/// matching row.
#[component]
pub fn ReleaseDetailView(
    state: ReadStore<ReleaseDetailState>,
    playing_track_id: Option<String>,
    is_playing: bool,
    // Called with the track's index on the release
    on_play_track: EventHandler<usize>,
    on_pause: EventHandler<()>,
    on_artist_click: EventHandler<String>,
    on_back: EventHandler<()>,
    on_retry: EventHandler<()>,
) -> Element {
    let loading = *state.loading().read();
    let error = state.error().read().clone();
    let release = state.release().read().clone();
    let artist = state.artist().read().clone();

    let mut failed_url = use_signal(|| None::<String>);

    rsx! {
        div { class: "container mx-auto flex flex-col py-10 px-4",
            BackButton { text: "Back to Releases".to_string(), on_click: on_back }
            if loading {
                LoadingSpinner { message: "Loading release...".to_string() }
            } else if let Some(err) = error {
                ErrorDisplay { message: err, on_retry: Some(on_retry) }
            } else if let Some(release) = release {
                {
                    let cover_url = unless_failed(
                        best_cover_url(&release.cover_art, "large"),
                        failed_url.read().as_deref(),
                        RELEASE_PLACEHOLDER,
                    );
                    let date = format_date(&release.release_date);
                    let streaming_links: Vec<(String, String)> = release
                        .streaming_links
                        .clone()
                        .unwrap_or_default()
                        .into_iter()
                        .collect();
                    let rows: Vec<(usize, ReleaseTrack, bool)> = release
                        .tracks
                        .iter()
                        .enumerate()
                        .map(|(index, track)| {
                            let is_current = playing_track_id.as_deref()
                                == Some(release.track_id(track.number).as_str());
                            (index, track.clone(), is_current)
                        })
                        .collect();

                    rsx! {
                        div { class: "flex flex-col md:flex-row gap-8 mb-10",
                            img {
                                class: "w-64 h-64 rounded-lg object-cover bg-gray-700 shadow-xl",
                                src: "{cover_url}",
                                alt: "Cover art for {release.title}",
                                onerror: {
                                    let url = cover_url.clone();
                                    move |_| {
                                        if url != RELEASE_PLACEHOLDER {
                                            failed_url.set(Some(url.clone()));
                                        }
                                    }
                                },
                            }
                            div { class: "flex-1",
                                p { class: "text-sm uppercase tracking-wide text-amber-300 mb-1",
                                    "{release.release_type.label()}"
                                }
                                h1 { class: "text-4xl font-bold text-white mb-2", "{release.title}" }
                                if let Some(artist) = artist {
                                    button {
                                        class: "text-lg text-gray-300 hover:text-white mb-2",
                                        onclick: {
                                            let artist_id = artist.id.clone();
                                            move |_| on_artist_click.call(artist_id.clone())
                                        },
                                        "{artist.name}"
                                    }
                                }
                                p { class: "text-gray-400 mb-4", "Released {date}" }
                                if let Some(ref description) = release.description {
                                    p { class: "text-gray-300 leading-relaxed mb-4 max-w-2xl", "{description}" }
                                }
                                if !streaming_links.is_empty() {
                                    div { class: "flex flex-wrap gap-3",
                                        for (platform, url) in streaming_links {
                                            a {
                                                key: "{platform}",
                                                class: "inline-flex items-center gap-2 text-sm text-white bg-gray-800 hover:bg-gray-700 px-3 py-1.5 rounded-full",
                                                href: "{url}",
                                                target: "_blank",
                                                rel: "noopener noreferrer",
                                                LinkIcon { class: "w-3 h-3" }
                                                "{streaming_platform_label(&platform)}"
                                            }
                                        }
                                    }
                                }
                            }
                        }

                        if !rows.is_empty() {
                            h2 { class: "text-2xl font-bold text-white mb-4", "Tracks" }
                            div { class: "flex flex-col divide-y divide-gray-800",
                                for (index, track, is_current) in rows {
                                    TrackRow {
                                        key: "{track.number}",
                                        track: track.clone(),
                                        is_current,
                                        is_playing: is_current && is_playing,
                                        on_play: move |_| on_play_track.call(index),
                                        on_pause,
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

#[component]
fn TrackRow(
    track: ReleaseTrack,
    is_current: bool,
    is_playing: bool,
    on_play: EventHandler<()>,
    on_pause: EventHandler<()>,
) -> Element {
    let duration = track
        .duration_secs
        .map(|secs| format_duration(f64::from(secs)))
        .unwrap_or_else(|| "--:--".to_string());
    let row_class = if is_current {
        "flex items-center gap-4 px-3 py-2 rounded bg-gray-800 text-amber-300"
    } else {
        "flex items-center gap-4 px-3 py-2 rounded hover:bg-gray-800 text-gray-200"
    };

    rsx! {
        div { class: "{row_class}", "data-testid": "track-row",
            button {
                class: "w-8 h-8 flex items-center justify-center rounded-full hover:bg-gray-700",
                onclick: move |_| {
                    if is_playing {
                        on_pause.call(());
                    } else {
                        on_play.call(());
                    }
                },
                if is_playing {
                    PauseIcon { class: "w-4 h-4" }
                } else {
                    PlayIcon { class: "w-4 h-4" }
                }
            }
            span { class: "w-6 text-right text-gray-500", "{track.number}" }
            span { class: "flex-1 truncate", "{track.title}" }
            span { class: "text-sm text-gray-500", "{duration}" }
        }
    }
}
