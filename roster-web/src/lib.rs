pub mod api;
pub mod audio;
pub mod pages;

use audio::{Player, WebAudioBackend};
use dioxus::prelude::*;
use pages::{AppLayout, ArtistDetail, Artists, Home, NotFound, ReleaseDetail, Releases};
use roster_core::{MusicPlayer, SiteConfig};
use roster_ui::stores::{AppState, AppStateStoreExt};

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppLayout)]
    #[route("/")]
    Home {},
    #[route("/artists")]
    Artists {},
    #[route("/artists/:id")]
    ArtistDetail { id: String },
    #[route("/releases")]
    Releases {},
    #[route("/releases/:id")]
    ReleaseDetail { id: String },
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

/// Root application state, shared through context
pub fn use_app_state() -> Store<AppState> {
    use_context::<Store<AppState>>()
}

/// The music player, shared through context
pub fn use_player() -> Signal<Player> {
    use_context::<Signal<Player>>()
}

/// Marks `section` active in the navigation store when the calling page
/// mounts, whatever route led there.
pub fn use_active_section(section: Option<&'static str>) {
    let app = use_app_state();
    use_effect(move || app.navigation().write().enter_section(section));
}

#[component]
pub fn App() -> Element {
    let app = use_store(|| AppState::new(SiteConfig::load_embedded()));
    use_context_provider(|| app);

    let volume = app.config().peek().default_volume;
    use_context_provider(|| Signal::new(MusicPlayer::new(WebAudioBackend::default(), volume)));

    let site_title = app.config().read().site_title.clone();

    rsx! {
        document::Title { "{site_title}" }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        div { class: "min-h-screen", Router::<Route> {} }
    }
}
