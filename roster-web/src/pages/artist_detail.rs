use crate::api;
use crate::{use_active_section, use_app_state, Route};
use dioxus::prelude::*;
use roster_ui::stores::{AppStateStoreExt, ArtistDetailStateStoreExt};
use roster_ui::ArtistDetailView;

#[component]
pub fn ArtistDetail(id: String) -> Element {
    use_active_section(Some("artists"));
    let app = use_app_state();
    let mut data = use_resource(move || {
        let id = id.clone();
        async move { api::fetch_artist(&id).await }
    });

    use_effect(move || {
        let detail = app.artist_detail();
        match &*data.read() {
            Some(Ok(artist)) => {
                detail.artist().set(Some(artist.clone()));
                detail.error().set(None);
                detail.loading().set(false);
            }
            Some(Err(e)) => {
                detail.artist().set(None);
                detail.error().set(Some(e.clone()));
                detail.loading().set(false);
            }
            None => {
                detail.error().set(None);
                detail.loading().set(true);
            }
        }
    });

    rsx! {
        ArtistDetailView {
            state: app.artist_detail(),
            on_release_click: move |id: String| {
                navigator().push(Route::ReleaseDetail { id });
            },
            on_back: move |_| {
                navigator().push(Route::Artists {});
            },
            on_retry: move |_| data.restart(),
        }
    }
}
