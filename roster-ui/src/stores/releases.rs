//! Release list and detail state

use dioxus::prelude::*;
use roster_core::{ArtistDisplay, ReleaseDisplay};

/// State for the releases list view
#[derive(Clone, Debug, PartialEq, Store)]
pub struct ReleaseListState {
    pub releases: Vec<ReleaseDisplay>,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for ReleaseListState {
    fn default() -> Self {
        Self {
            releases: Vec::new(),
            loading: true,
            error: None,
        }
    }
}

/// State for the release page
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct ReleaseDetailState {
    pub release: Option<ReleaseDisplay>,
    /// The artist who put the release out
    pub artist: Option<ArtistDisplay>,
    pub loading: bool,
    pub error: Option<String>,
}
