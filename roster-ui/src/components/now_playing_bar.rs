//! Now Playing Bar view component
//!
//! Pure, props-based component for the player's current track and controls.

use crate::components::icons::{PauseIcon, PlayIcon, StopIcon, VolumeIcon, XIcon};
use dioxus::prelude::*;
use roster_core::{format_duration, Track};

/// Now playing bar view (pure, props-based)
/// Renders nothing when there is no current track and no error to show.
#[component]
pub fn NowPlayingBarView(
    track: Option<Track>,
    is_playing: bool,
    // Seconds
    progress: f64,
    duration: f64,
    volume: f32,
    #[props(default)] error: Option<String>,
    on_toggle_play: EventHandler<()>,
    on_stop: EventHandler<()>,
    on_seek: EventHandler<f64>,
    on_volume_change: EventHandler<f32>,
    on_dismiss_error: EventHandler<()>,
) -> Element {
    if track.is_none() && error.is_none() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "fixed bottom-0 left-0 right-0 bg-gray-900 text-white border-t border-gray-700",
            "data-testid": "now-playing-bar",
            if let Some(message) = error {
                div { class: "flex items-center justify-between bg-red-900 text-red-100 px-4 py-2 text-sm",
                    span { "{message}" }
                    button {
                        class: "hover:text-white",
                        onclick: move |_| on_dismiss_error.call(()),
                        XIcon {}
                    }
                }
            }
            if let Some(track) = track {
                div { class: "flex items-center gap-4 p-4",
                    div { class: "flex items-center gap-2",
                        button {
                            class: "w-10 h-10 rounded-full flex items-center justify-center bg-amber-500 hover:bg-amber-400 text-gray-900",
                            onclick: move |_| on_toggle_play.call(()),
                            if is_playing {
                                PauseIcon { class: "w-5 h-5" }
                            } else {
                                PlayIcon { class: "w-5 h-5" }
                            }
                        }
                        button {
                            class: "w-8 h-8 rounded-full flex items-center justify-center bg-gray-700 hover:bg-gray-600",
                            onclick: move |_| on_stop.call(()),
                            StopIcon {}
                        }
                    }
                    CoverThumbnail { cover_url: track.cover_url.clone() }
                    div { class: "flex-1 min-w-0",
                        div { class: "font-semibold truncate", "{track.title}" }
                        div { class: "text-sm text-gray-400 truncate", "{track.artist_name}" }
                    }
                    ProgressView { progress, duration, on_seek }
                    VolumeView { volume, on_volume_change }
                }
            }
        }
    }
}

#[component]
fn CoverThumbnail(cover_url: Option<String>) -> Element {
    rsx! {
        div { class: "w-10 h-10 bg-gray-700 rounded-sm overflow-hidden flex-shrink-0",
            if let Some(ref url) = cover_url {
                img {
                    src: "{url}",
                    alt: "Cover art",
                    class: "w-full h-full object-cover",
                }
            }
        }
    }
}

#[component]
fn ProgressView(progress: f64, duration: f64, on_seek: EventHandler<f64>) -> Element {
    let percent = if duration > 0.0 {
        (progress / duration * 100.0).clamp(0.0, 100.0)
    } else {
        0.0
    };

    rsx! {
        div { class: "hidden md:flex items-center gap-2 text-sm text-gray-400",
            span { class: "w-12 text-right", "{format_duration(progress)}" }
            input {
                r#type: "range",
                class: "w-64 h-2 bg-gray-700 rounded-lg appearance-none cursor-pointer",
                style: "background: linear-gradient(to right, #f59e0b 0%, #f59e0b {percent}%, #374151 {percent}%, #374151 100%);",
                min: "0",
                max: "{duration}",
                step: "1",
                value: "{progress}",
                disabled: duration <= 0.0,
                onchange: move |evt| {
                    if let Ok(secs) = evt.value().parse::<f64>() {
                        on_seek.call(secs);
                    }
                },
            }
            span { class: "w-12",
                if duration > 0.0 {
                    "{format_duration(duration)}"
                } else {
                    "--:--"
                }
            }
        }
    }
}

#[component]
fn VolumeView(volume: f32, on_volume_change: EventHandler<f32>) -> Element {
    rsx! {
        div { class: "hidden lg:flex items-center gap-2 text-gray-400",
            VolumeIcon {}
            input {
                r#type: "range",
                class: "w-24 h-2 bg-gray-700 rounded-lg appearance-none cursor-pointer",
                min: "0",
                max: "1",
                step: "0.05",
                value: "{volume}",
                oninput: move |evt| {
                    if let Ok(level) = evt.value().parse::<f32>() {
                        on_volume_change.call(level);
                    }
                },
            }
        }
    }
}
