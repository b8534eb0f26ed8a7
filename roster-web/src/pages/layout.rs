use crate::audio::{sleep_ms, watch_errors};
use crate::{use_app_state, use_player, Route};
use dioxus::core::Task;
use dioxus::prelude::*;
use roster_core::{scroll_percentage, PollOutcome};
use roster_ui::stores::AppStateStoreExt;
use roster_ui::{AppLayoutView, NavBarView, NavItem, NowPlayingBarView};
use std::rc::Rc;
use tracing::debug;

fn route_for(section: &str) -> Option<Route> {
    match section {
        "home" => Some(Route::Home {}),
        "artists" => Some(Route::Artists {}),
        "releases" => Some(Route::Releases {}),
        _ => None,
    }
}

#[component]
pub fn AppLayout() -> Element {
    let app = use_app_state();
    let player = use_player();

    let navigation = app.navigation().read().clone();
    let nav_items = [("artists", "Artists"), ("releases", "Releases")]
        .into_iter()
        .map(|(id, label)| NavItem {
            id: id.to_string(),
            label: label.to_string(),
            is_active: navigation.is_active(id),
        })
        .collect::<Vec<_>>();

    // Load errors arrive even while paused, when no polling task runs
    let session = use_memo(move || player.read().session());
    use_effect(move || {
        if let Some(session) = session() {
            watch_errors(player, session);
        }
    });

    // One polling task per playback session, restarted on track switch
    let mut poll_task = use_signal(|| None::<Task>);
    let playback_key = use_memo(move || {
        let player = player.read();
        (player.session(), player.is_playing())
    });
    let poll_interval = app.config().read().progress_poll_interval_ms;
    use_effect(move || {
        let (session, is_playing) = playback_key();
        if let Some(task) = poll_task.write().take() {
            task.cancel();
        }
        let Some(session) = session.filter(|_| is_playing) else {
            return;
        };
        let mut player = player;
        let task = spawn(async move {
            loop {
                sleep_ms(poll_interval).await;
                if player.write().poll(session) == PollOutcome::Stopped {
                    debug!("Progress polling ended for {session:?}");
                    break;
                }
            }
        });
        poll_task.set(Some(task));
    });

    let mut content = use_signal(|| None::<Rc<MountedData>>);

    let site_title = app.config().read().site_title.clone();

    rsx! {
        AppLayoutView {
            nav_bar: rsx! {
                NavBarView {
                    site_title,
                    nav_items,
                    is_menu_open: navigation.is_mobile_menu_open,
                    scroll_progress: navigation.scroll_progress,
                    on_nav_click: move |id: String| {
                        if let Some(route) = route_for(&id) {
                            navigator().push(route);
                        }
                    },
                    on_toggle_menu: move |_| app.navigation().write().toggle_mobile_menu(),
                    on_close_menu: move |_| app.navigation().write().close_mobile_menu(),
                }
            },
            playback_bar: rsx! {
                NowPlayingBar {}
            },
            on_content_mounted: Some(EventHandler::new(move |evt: MountedEvent| content.set(Some(evt.data())))),
            on_content_scroll: Some(EventHandler::new(move |_| {
                let Some(element) = content() else {
                    return;
                };
                spawn(async move {
                    let (Ok(offset), Ok(size), Ok(rect)) = (
                        element.get_scroll_offset().await,
                        element.get_scroll_size().await,
                        element.get_client_rect().await,
                    ) else {
                        return;
                    };
                    let progress = scroll_percentage(offset.y, size.height, rect.height());
                    app.navigation().write().set_scroll_progress(progress);
                });
            })),
            Outlet::<Route> {}
        }
    }
}

/// Now playing bar bound to the shared player
#[component]
fn NowPlayingBar() -> Element {
    let mut player = use_player();

    let (track, is_playing, progress, duration, volume, error) = {
        let p = player.read();
        (
            p.current_track().cloned(),
            p.is_playing(),
            p.progress(),
            p.duration(),
            p.volume(),
            p.last_error().map(str::to_string),
        )
    };

    rsx! {
        NowPlayingBarView {
            track,
            is_playing,
            progress,
            duration,
            volume,
            error,
            on_toggle_play: move |_| player.write().toggle_play(),
            on_stop: move |_| player.write().stop(),
            on_seek: move |secs: f64| player.write().seek(secs),
            on_volume_change: move |level: f32| player.write().set_volume(level),
            on_dismiss_error: move |_| player.write().dismiss_error(),
        }
    }
}
