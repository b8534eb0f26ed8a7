use crate::api;
use crate::{use_active_section, use_app_state, use_player, Route};
use dioxus::prelude::*;
use roster_ui::stores::{AppStateStoreExt, ReleaseDetailStateStoreExt};
use roster_ui::ReleaseDetailView;

#[component]
pub fn ReleaseDetail(id: String) -> Element {
    use_active_section(Some("releases"));
    let app = use_app_state();
    let mut player = use_player();
    let mut data = use_resource(move || {
        let id = id.clone();
        async move { api::fetch_release(&id).await }
    });

    use_effect(move || {
        let detail = app.release_detail();
        match &*data.read() {
            Some(Ok((release, artist))) => {
                detail.release().set(Some(release.clone()));
                detail.artist().set(Some(artist.clone()));
                detail.error().set(None);
                detail.loading().set(false);
            }
            Some(Err(e)) => {
                detail.release().set(None);
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

    let (playing_track_id, is_playing) = {
        let p = player.read();
        (p.current_track().map(|t| t.id.clone()), p.is_playing())
    };

    rsx! {
        ReleaseDetailView {
            state: app.release_detail(),
            playing_track_id,
            is_playing,
            on_play_track: move |index: usize| {
                let detail = app.release_detail().read().clone();
                let (Some(release), Some(artist)) = (detail.release, detail.artist) else {
                    return;
                };
                if let Some(track) = release.playable_track(index, &artist.name) {
                    player.write().play(Some(track));
                }
            },
            on_pause: move |_| player.write().pause(),
            on_artist_click: move |id: String| {
                navigator().push(Route::ArtistDetail { id });
            },
            on_back: move |_| {
                navigator().push(Route::Releases {});
            },
            on_retry: move |_| data.restart(),
        }
    }
}
