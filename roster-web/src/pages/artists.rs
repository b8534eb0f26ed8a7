use crate::api;
use crate::{use_active_section, use_app_state, Route};
use dioxus::prelude::*;
use roster_ui::stores::{AppStateStoreExt, ArtistListStateStoreExt};
use roster_ui::ArtistListView;

#[component]
pub fn Artists() -> Element {
    use_active_section(Some("artists"));
    let app = use_app_state();
    let mut data = use_resource(api::fetch_artists);

    // Mirror the resource into the list store
    use_effect(move || {
        let list = app.artist_list();
        match &*data.read() {
            Some(Ok(artists)) => {
                list.artists().set(artists.clone());
                list.error().set(None);
                list.loading().set(false);
            }
            Some(Err(e)) => {
                list.error().set(Some(e.clone()));
                list.loading().set(false);
            }
            None => {
                list.error().set(None);
                list.loading().set(true);
            }
        }
    });

    let filters = app.filters().read().artists.clone();
    let skeleton_count = app.config().read().skeleton_count;

    rsx! {
        ArtistListView {
            state: app.artist_list(),
            filters,
            skeleton_count,
            on_artist_click: move |id: String| {
                navigator().push(Route::ArtistDetail { id });
            },
            on_retry: move |_| data.restart(),
            on_sort_change: move |value: String| app.filters().write().set_artists_sort_by(value),
            on_filter_change: move |value: String| app.filters().write().set_artists_filter_by(value),
            on_search_change: move |value: String| app.filters().write().set_artists_search_query(value),
            on_reset: move |_| app.filters().write().reset_artists_filters(),
        }
    }
}
