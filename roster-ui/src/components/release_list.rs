//! Release list view and release card

use crate::components::filter_bar::FilterBarView;
use crate::components::helpers::{EmptyState, ErrorDisplay};
use crate::stores::releases::{ReleaseListState, ReleaseListStateStoreExt};
use dioxus::prelude::*;
use roster_core::filters::{RELEASE_FILTER_OPTIONS, RELEASE_SORT_OPTIONS};
use roster_core::{
    best_cover_url, filter_releases, format_date, unless_failed, ListView, ReleaseDisplay,
    ReleaseFilters, RELEASE_PLACEHOLDER,
};

/// Cover, title, type and date for one release
#[component]
pub fn ReleaseCard(release: ReleaseDisplay, on_click: EventHandler<String>) -> Element {
    let mut failed_url = use_signal(|| None::<String>);

    let release_id = release.id.clone();
    let cover_url = unless_failed(
        best_cover_url(&release.cover_art, "medium"),
        failed_url.read().as_deref(),
        RELEASE_PLACEHOLDER,
    );
    let date = format_date(&release.release_date);
    let type_label = release.release_type.label();

    rsx! {
        div {
            class: "bg-gray-800 rounded-lg overflow-hidden shadow-lg hover:shadow-xl transition-shadow cursor-pointer",
            "data-testid": "release-card",
            onclick: move |_| on_click.call(release_id.clone()),
            img {
                class: "aspect-square w-full object-cover bg-gray-700",
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
            div { class: "p-4",
                h3 {
                    class: "font-bold text-white truncate",
                    title: "{release.title}",
                    "{release.title}"
                }
                p { class: "text-gray-400 text-sm", "{type_label} · {date}" }
            }
        }
    }
}

/// Releases page body: filter bar plus the filtered grid
#[component]
pub fn ReleaseListView(
    state: ReadStore<ReleaseListState>,
    filters: ReleaseFilters,
    #[props(default = roster_core::SKELETON_COUNT)] skeleton_count: usize,
    on_release_click: EventHandler<String>,
    on_retry: EventHandler<()>,
    on_sort_change: EventHandler<String>,
    on_filter_change: EventHandler<String>,
    on_search_change: EventHandler<String>,
    on_reset: EventHandler<()>,
) -> Element {
    let loading = *state.loading().read();
    let error = state.error().read().clone();
    let releases = state.releases().read().clone();

    let view = ListView::derive(loading, error, filter_releases(&releases, &filters));

    rsx! {
        div { class: "container mx-auto flex flex-col py-10 px-4",
            h1 { class: "text-3xl font-bold text-white mb-6", "Releases" }
            FilterBarView {
                sort_options: RELEASE_SORT_OPTIONS.iter().map(|s| s.to_string()).collect::<Vec<_>>(),
                filter_options: RELEASE_FILTER_OPTIONS.iter().map(|s| s.to_string()).collect::<Vec<_>>(),
                sort_by: filters.sort_by.clone(),
                filter_by: filters.filter_by.clone(),
                search_query: filters.search_query.clone(),
                search_placeholder: "Search releases".to_string(),
                on_sort_change,
                on_filter_change,
                on_search_change,
                on_reset,
            }
            {
                match view {
                    ListView::Loading => rsx! {
                        div { class: "grid grid-cols-2 md:grid-cols-3 lg:grid-cols-4 gap-6",
                            for i in 0..skeleton_count {
                                div {
                                    key: "{i}",
                                    class: "aspect-square bg-gray-800 rounded-lg animate-pulse",
                                }
                            }
                        }
                    },
                    ListView::Error(message) => rsx! {
                        ErrorDisplay { message, on_retry: Some(on_retry) }
                    },
                    ListView::Empty => rsx! {
                        EmptyState {
                            title: "No releases found".to_string(),
                            message: "Try a different search or reset the filters.".to_string(),
                        }
                    },
                    ListView::Populated(releases) => rsx! {
                        div { class: "grid grid-cols-2 md:grid-cols-3 lg:grid-cols-4 gap-6",
                            for release in releases {
                                ReleaseCard {
                                    key: "{release.id}",
                                    release: release.clone(),
                                    on_click: on_release_click,
                                }
                            }
                        }
                    },
                }
            }
        }
    }
}
