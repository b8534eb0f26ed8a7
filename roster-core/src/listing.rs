//! List derivation for the artist and release views
//!
//! Pure functions: views hand in what they hold and render what comes out.

use crate::display_types::{ArtistDisplay, ListedArtist, ReleaseDisplay};
use crate::filters::{ArtistFilters, ReleaseFilters};
use crate::records::ReleaseType;
use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Number of placeholder cards shown while the list loads
pub const SKELETON_COUNT: usize = 6;

/// Which of the four list states a render shows
#[derive(Clone, Debug, PartialEq)]
pub enum ListView<T> {
    Loading,
    Error(String),
    Empty,
    Populated(Vec<T>),
}

impl<T> ListView<T> {
    /// Loading wins over error, error wins over data.
    pub fn derive(loading: bool, error: Option<String>, items: Vec<T>) -> Self {
        if loading {
            ListView::Loading
        } else if let Some(error) = error {
            ListView::Error(error)
        } else if items.is_empty() {
            ListView::Empty
        } else {
            ListView::Populated(items)
        }
    }
}

/// Lowercased with diacritics stripped, so "Émile" files under E
fn collation_key(s: &str) -> String {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Name order ignoring case and accents.
///
/// Ties fall back to the lowercased and then the raw strings, so the order
/// is total and "Emile" lands before "Émile".
pub fn compare_names(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| a.cmp(b))
}

/// Featured artists first, then by name.
pub fn order_artists(mut artists: Vec<ListedArtist>) -> Vec<ListedArtist> {
    artists.sort_by(|a, b| {
        b.is_featured()
            .cmp(&a.is_featured())
            .then_with(|| compare_names(a.name(), b.name()))
    });
    artists
}

/// `query` must already be a collation key
fn matches_query(haystack: &str, query: &str) -> bool {
    collation_key(haystack).contains(query)
}

/// Apply the artist filter selections: search, filter, then sort.
///
/// Featured artists lead every sort order.
pub fn filter_artists(artists: &[ArtistDisplay], filters: &ArtistFilters) -> Vec<ArtistDisplay> {
    let query = collation_key(filters.search_query.trim());

    let mut result: Vec<ArtistDisplay> = artists
        .iter()
        .filter(|a| {
            query.is_empty() || matches_query(&a.name, &query) || matches_query(&a.genre, &query)
        })
        .filter(|a| match filters.filter_by.as_str() {
            "" | "All" => true,
            "Featured" => a.is_featured,
            genre => a.genre == genre,
        })
        .cloned()
        .collect();

    result.sort_by(|a, b| {
        let featured = b.is_featured.cmp(&a.is_featured);
        let rest = match filters.sort_by.as_str() {
            "Z-A" => compare_names(&b.name, &a.name),
            "Genre" => compare_names(&a.genre, &b.genre).then_with(|| compare_names(&a.name, &b.name)),
            _ => compare_names(&a.name, &b.name),
        };
        featured.then(rest)
    });
    result
}

fn release_type_matches(release_type: ReleaseType, filter: &str) -> bool {
    match filter {
        "" | "All" => true,
        other => release_type.label().eq_ignore_ascii_case(other),
    }
}

/// Apply the release filter selections: search, type filter, then sort.
pub fn filter_releases(
    releases: &[ReleaseDisplay],
    filters: &ReleaseFilters,
) -> Vec<ReleaseDisplay> {
    let query = collation_key(filters.search_query.trim());

    let mut result: Vec<ReleaseDisplay> = releases
        .iter()
        .filter(|r| query.is_empty() || matches_query(&r.title, &query))
        .filter(|r| release_type_matches(r.release_type, &filters.filter_by))
        .cloned()
        .collect();

    // ISO dates order correctly as strings
    match filters.sort_by.as_str() {
        "Oldest" => result.sort_by(|a, b| a.release_date.cmp(&b.release_date)),
        "A-Z" => result.sort_by(|a, b| compare_names(&a.title, &b.title)),
        _ => result.sort_by(|a, b| b.release_date.cmp(&a.release_date)),
    }
    result
}

/// Sorted distinct genres, for the artist filter dropdown
pub fn genres(artists: &[ArtistDisplay]) -> Vec<String> {
    let mut genres: Vec<String> = artists.iter().map(|a| a.genre.clone()).collect();
    genres.sort_by(|a, b| compare_names(a, b));
    genres.dedup();
    genres
}
