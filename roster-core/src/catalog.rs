//! Embedded mock catalog
//!
//! Stands in for a data-fetching backend. The fixture is compiled into the
//! binary and parsed on demand; callers get display types only.

use crate::convert::{to_display_artist, to_display_artists};
use crate::display_types::{ArtistDisplay, ReleaseDisplay};
use crate::records::ArtistRecord;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

const CATALOG_JSON: &str = include_str!("../fixtures/catalog.json");

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    #[error("Failed to parse catalog: {0}")]
    Parse(String),
    #[error("Artist not found: {0}")]
    ArtistNotFound(String),
    #[error("Release not found: {0}")]
    ReleaseNotFound(String),
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    artists: Vec<ArtistRecord>,
}

/// The artist catalog as record-shaped data
#[derive(Clone, Debug, PartialEq)]
pub struct Catalog {
    artists: Vec<ArtistRecord>,
}

impl Catalog {
    /// Parse the embedded fixture
    pub fn load() -> Result<Self, CatalogError> {
        Self::from_json(CATALOG_JSON)
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile =
            serde_json::from_str(json).map_err(|e| CatalogError::Parse(e.to_string()))?;
        debug!("Loaded catalog with {} artists", file.artists.len());
        Ok(Self {
            artists: file.artists,
        })
    }

    pub fn from_records(artists: Vec<ArtistRecord>) -> Self {
        Self { artists }
    }

    pub fn records(&self) -> &[ArtistRecord] {
        &self.artists
    }

    pub fn artists(&self) -> Vec<ArtistDisplay> {
        to_display_artists(&self.artists)
    }

    pub fn featured_artists(&self) -> Vec<ArtistDisplay> {
        self.artists()
            .into_iter()
            .filter(|a| a.is_featured)
            .collect()
    }

    pub fn artist(&self, id: &str) -> Result<ArtistDisplay, CatalogError> {
        self.artists
            .iter()
            .find(|a| a.id.to_string() == id)
            .map(to_display_artist)
            .ok_or_else(|| CatalogError::ArtistNotFound(id.to_string()))
    }

    /// Every release across all artists, in catalog order
    pub fn releases(&self) -> Vec<ReleaseDisplay> {
        self.artists()
            .into_iter()
            .flat_map(|a| a.releases)
            .collect()
    }

    /// A release together with the artist who put it out
    pub fn release(&self, id: &str) -> Result<(ReleaseDisplay, ArtistDisplay), CatalogError> {
        self.artists()
            .into_iter()
            .find_map(|artist| {
                artist
                    .releases
                    .iter()
                    .find(|r| r.id == id)
                    .cloned()
                    .map(|release| (release, artist.clone()))
            })
            .ok_or_else(|| CatalogError::ReleaseNotFound(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::{ALBUM_ARTIST_GENRE, INDEPENDENT_ARTIST_GENRE};

    #[test]
    fn test_fixture_loads() {
        let catalog = Catalog::load().unwrap();
        assert_eq!(catalog.records().len(), 5);
    }

    #[test]
    fn test_every_display_artist_has_id_and_genre() {
        let catalog = Catalog::load().unwrap();
        for (record, display) in catalog.records().iter().zip(catalog.artists()) {
            assert_eq!(display.id, record.id.to_string());
            assert!(!display.genre.is_empty());
        }
    }

    #[test]
    fn test_derived_genres_in_fixture() {
        let catalog = Catalog::load().unwrap();
        assert_eq!(catalog.artist("2").unwrap().genre, ALBUM_ARTIST_GENRE);
        assert_eq!(catalog.artist("4").unwrap().genre, INDEPENDENT_ARTIST_GENRE);
    }

    #[test]
    fn test_featured_artists() {
        let catalog = Catalog::load().unwrap();
        let names: Vec<_> = catalog
            .featured_artists()
            .into_iter()
            .map(|a| a.name)
            .collect();
        assert_eq!(names, vec!["Nova Static", "Marrow"]);
    }

    #[test]
    fn test_release_lookup() {
        let catalog = Catalog::load().unwrap();
        let (release, artist) = catalog.release("301").unwrap();
        assert_eq!(release.title, "Neon Rain");
        assert_eq!(artist.name, "Static Bloom");
        assert_eq!(release.artist_id, artist.id);
    }

    #[test]
    fn test_missing_ids() {
        let catalog = Catalog::load().unwrap();
        assert_eq!(
            catalog.artist("999"),
            Err(CatalogError::ArtistNotFound("999".to_string()))
        );
        assert!(matches!(
            catalog.release("nope"),
            Err(CatalogError::ReleaseNotFound(_))
        ));
    }

    #[test]
    fn test_bad_json() {
        assert!(matches!(
            Catalog::from_json("{\"artists\": 3}"),
            Err(CatalogError::Parse(_))
        ));
    }
}
