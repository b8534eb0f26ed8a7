//! Artist list and detail state

use dioxus::prelude::*;
use roster_core::ArtistDisplay;

/// State for the artists list view
#[derive(Clone, Debug, PartialEq, Store)]
pub struct ArtistListState {
    pub artists: Vec<ArtistDisplay>,
    pub loading: bool,
    /// Error message if loading failed
    pub error: Option<String>,
}

impl Default for ArtistListState {
    fn default() -> Self {
        Self {
            artists: Vec::new(),
            loading: true,
            error: None,
        }
    }
}

/// State for the artist profile view
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct ArtistDetailState {
    pub artist: Option<ArtistDisplay>,
    pub loading: bool,
    pub error: Option<String>,
}
