//! Top-level application state store
//!
//! Components reach sub-states through lenses:
//! `app.filters().write().reset_artists_filters()`

use super::artists::{ArtistDetailState, ArtistListState};
use super::releases::{ReleaseDetailState, ReleaseListState};
use dioxus::prelude::*;
use roster_core::{FilterState, NavigationState, SiteConfig};

/// Top-level application state combining all sub-states
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct AppState {
    /// Sort/filter/search selections for both list views
    pub filters: FilterState,
    /// Mobile menu, active section, scroll progress
    pub navigation: NavigationState,
    /// Artists list view
    pub artist_list: ArtistListState,
    /// Artist profile view
    pub artist_detail: ArtistDetailState,
    /// Releases list view
    pub release_list: ReleaseListState,
    /// Release page
    pub release_detail: ReleaseDetailState,
    pub config: SiteConfig,
}

impl AppState {
    pub fn new(config: SiteConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }
}
