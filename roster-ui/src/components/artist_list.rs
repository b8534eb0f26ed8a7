//! Artist list views - pure rendering, no data fetching
//!
//! ## Reactive State Pattern
//! `ArtistListView` accepts `ReadStore<ArtistListState>` and uses lenses so it
//! only subscribes to the fields it routes on. Exactly one of loading, error,
//! empty or the grid is rendered, decided by [`ListView::derive`].

use crate::components::artist_card::{ArtistCard, ArtistCardSkeleton};
use crate::components::filter_bar::FilterBarView;
use crate::components::helpers::{EmptyState, ErrorDisplay};
use crate::stores::artists::{ArtistListState, ArtistListStateStoreExt};
use dioxus::prelude::*;
use roster_core::filters::ARTIST_SORT_OPTIONS;
use roster_core::{filter_artists, genres, order_artists, ArtistFilters, ListView, ListedArtist};

/// Artists page body: filter bar plus the filtered grid
#[component]
pub fn ArtistListView(
    state: ReadStore<ArtistListState>,
    filters: ArtistFilters,
    #[props(default = roster_core::SKELETON_COUNT)] skeleton_count: usize,
    on_artist_click: EventHandler<String>,
    // Reloads the data source
    on_retry: EventHandler<()>,
    on_sort_change: EventHandler<String>,
    on_filter_change: EventHandler<String>,
    on_search_change: EventHandler<String>,
    on_reset: EventHandler<()>,
) -> Element {
    let loading = *state.loading().read();
    let error = state.error().read().clone();
    let artists = state.artists().read().clone();

    let filter_options: Vec<String> = ["All", "Featured"]
        .into_iter()
        .map(str::to_string)
        .chain(genres(&artists))
        .collect();

    let visible: Vec<ListedArtist> = filter_artists(&artists, &filters)
        .into_iter()
        .map(ListedArtist::from)
        .collect();

    rsx! {
        div { class: "container mx-auto flex flex-col py-10 px-4",
            h1 { class: "text-3xl font-bold text-white mb-6", "Artists" }
            FilterBarView {
                sort_options: ARTIST_SORT_OPTIONS.iter().map(|s| s.to_string()).collect::<Vec<_>>(),
                filter_options,
                sort_by: filters.sort_by.clone(),
                filter_by: filters.filter_by.clone(),
                search_query: filters.search_query.clone(),
                search_placeholder: "Search artists or genres".to_string(),
                on_sort_change,
                on_filter_change,
                on_search_change,
                on_reset,
            }
            ArtistListBody {
                view: ListView::derive(loading, error, visible),
                skeleton_count,
                on_artist_click,
                on_retry,
            }
        }
    }
}

/// Featured-first roster, used on the home page and for legacy
/// `SimpleArtist` feeds
#[component]
pub fn ArtistRosterView(
    artists: Vec<ListedArtist>,
    loading: bool,
    error: Option<String>,
    #[props(default = roster_core::SKELETON_COUNT)] skeleton_count: usize,
    on_artist_click: EventHandler<String>,
    on_retry: EventHandler<()>,
) -> Element {
    rsx! {
        ArtistListBody {
            view: ListView::derive(loading, error, order_artists(artists)),
            skeleton_count,
            on_artist_click,
            on_retry,
        }
    }
}

#[component]
fn ArtistListBody(
    view: ListView<ListedArtist>,
    skeleton_count: usize,
    on_artist_click: EventHandler<String>,
    on_retry: EventHandler<()>,
) -> Element {
    match view {
        ListView::Loading => rsx! {
            div { class: "grid grid-cols-2 md:grid-cols-3 lg:grid-cols-4 gap-6",
                for i in 0..skeleton_count {
                    ArtistCardSkeleton { key: "{i}" }
                }
            }
        },
        ListView::Error(message) => rsx! {
            ErrorDisplay { message, on_retry: Some(on_retry) }
            p { class: "text-sm mt-2 text-gray-400",
                "An error occurred while loading the artist roster."
            }
        },
        ListView::Empty => rsx! {
            EmptyState {
                title: "No artists found".to_string(),
                message: "Try a different search or reset the filters.".to_string(),
            }
        },
        ListView::Populated(artists) => rsx! {
            div { class: "grid grid-cols-2 md:grid-cols-3 lg:grid-cols-4 gap-6",
                for artist in artists {
                    ArtistCard {
                        key: "{artist.id()}",
                        artist: artist.clone(),
                        on_click: on_artist_click,
                    }
                }
            }
        },
    }
}
