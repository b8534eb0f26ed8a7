use crate::api;
use crate::{use_active_section, use_app_state, Route};
use dioxus::prelude::*;
use roster_ui::stores::{AppStateStoreExt, ReleaseListStateStoreExt};
use roster_ui::ReleaseListView;

#[component]
pub fn Releases() -> Element {
    use_active_section(Some("releases"));
    let app = use_app_state();
    let mut data = use_resource(api::fetch_releases);

    use_effect(move || {
        let list = app.release_list();
        match &*data.read() {
            Some(Ok(releases)) => {
                list.releases().set(releases.clone());
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

    let filters = app.filters().read().releases.clone();
    let skeleton_count = app.config().read().skeleton_count;

    rsx! {
        ReleaseListView {
            state: app.release_list(),
            filters,
            skeleton_count,
            on_release_click: move |id: String| {
                navigator().push(Route::ReleaseDetail { id });
            },
            on_retry: move |_| data.restart(),
            on_sort_change: move |value: String| app.filters().write().set_releases_sort_by(value),
            on_filter_change: move |value: String| app.filters().write().set_releases_filter_by(value),
            on_search_change: move |value: String| app.filters().write().set_releases_search_query(value),
            on_reset: move |_| app.filters().write().reset_releases_filters(),
        }
    }
}
