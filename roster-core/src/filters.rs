//! Filter selections for the artist and release list views
//!
//! Values are plain strings and are not validated against the option lists;
//! the list derivation in [`crate::listing`] treats unknown values like the
//! defaults.

use tracing::debug;

pub const ARTIST_SORT_OPTIONS: &[&str] = &["A-Z", "Z-A", "Genre"];
pub const RELEASE_SORT_OPTIONS: &[&str] = &["Recent", "Oldest", "A-Z"];
pub const RELEASE_FILTER_OPTIONS: &[&str] = &["All", "Album", "Single", "EP"];

/// Selections for the artists list
#[derive(Clone, Debug, PartialEq)]
pub struct ArtistFilters {
    pub sort_by: String,
    /// "All", "Featured", or a genre name
    pub filter_by: String,
    pub search_query: String,
}

impl Default for ArtistFilters {
    fn default() -> Self {
        Self {
            sort_by: "A-Z".to_string(),
            filter_by: "All".to_string(),
            search_query: String::new(),
        }
    }
}

/// Selections for the releases list
#[derive(Clone, Debug, PartialEq)]
pub struct ReleaseFilters {
    pub sort_by: String,
    pub filter_by: String,
    pub search_query: String,
}

impl Default for ReleaseFilters {
    fn default() -> Self {
        Self {
            sort_by: "Recent".to_string(),
            filter_by: "All".to_string(),
            search_query: String::new(),
        }
    }
}

/// Both filter groups. The groups never touch each other.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FilterState {
    pub artists: ArtistFilters,
    pub releases: ReleaseFilters,
}

impl FilterState {
    pub fn set_artists_sort_by(&mut self, sort_by: impl Into<String>) {
        self.artists.sort_by = sort_by.into();
    }

    pub fn set_artists_filter_by(&mut self, filter_by: impl Into<String>) {
        self.artists.filter_by = filter_by.into();
    }

    pub fn set_artists_search_query(&mut self, query: impl Into<String>) {
        self.artists.search_query = query.into();
    }

    pub fn reset_artists_filters(&mut self) {
        debug!("Resetting artist filters");
        self.artists = ArtistFilters::default();
    }

    pub fn set_releases_sort_by(&mut self, sort_by: impl Into<String>) {
        self.releases.sort_by = sort_by.into();
    }

    pub fn set_releases_filter_by(&mut self, filter_by: impl Into<String>) {
        self.releases.filter_by = filter_by.into();
    }

    pub fn set_releases_search_query(&mut self, query: impl Into<String>) {
        self.releases.search_query = query.into();
    }

    pub fn reset_releases_filters(&mut self) {
        debug!("Resetting release filters");
        self.releases = ReleaseFilters::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let state = FilterState::default();
        assert_eq!(state.artists.sort_by, "A-Z");
        assert_eq!(state.artists.filter_by, "All");
        assert_eq!(state.artists.search_query, "");
        assert_eq!(state.releases.sort_by, "Recent");
        assert_eq!(state.releases.filter_by, "All");
        assert_eq!(state.releases.search_query, "");
    }

    #[test]
    fn test_setters_replace_without_validation() {
        let mut state = FilterState::default();
        state.set_artists_sort_by("Nonsense");
        state.set_releases_filter_by("LP");
        assert_eq!(state.artists.sort_by, "Nonsense");
        assert_eq!(state.releases.filter_by, "LP");
    }

    #[test]
    fn test_reset_artists_leaves_releases() {
        let mut state = FilterState::default();
        state.set_artists_sort_by("Genre");
        state.set_artists_search_query("nova");
        state.set_releases_sort_by("Oldest");
        state.set_releases_search_query("night");

        state.reset_artists_filters();

        assert_eq!(state.artists, ArtistFilters::default());
        assert_eq!(state.releases.sort_by, "Oldest");
        assert_eq!(state.releases.search_query, "night");
    }

    #[test]
    fn test_reset_releases_leaves_artists() {
        let mut state = FilterState::default();
        state.set_artists_filter_by("Featured");
        state.set_releases_filter_by("EP");

        state.reset_releases_filters();

        assert_eq!(state.releases, ReleaseFilters::default());
        assert_eq!(state.artists.filter_by, "Featured");
    }
}
