//! Source-of-truth record shapes
//!
//! These mirror what a backend would hand us: numeric ids, optional fields
//! left absent. They deserialize from camelCase JSON so the embedded fixture
//! and any future data source share one shape.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Image variants keyed by size class (e.g. "thumbnail", "profile", "small").
///
/// A sorted map keeps "any remaining variant" lookups deterministic.
pub type ImageSet = BTreeMap<String, String>;

/// Platform name → URL
pub type LinkMap = BTreeMap<String, String>;

/// Closed set of release types
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReleaseType {
    Album,
    Single,
    Ep,
}

impl ReleaseType {
    pub fn label(&self) -> &'static str {
        match self {
            ReleaseType::Album => "Album",
            ReleaseType::Single => "Single",
            ReleaseType::Ep => "EP",
        }
    }
}

/// A single track on a release
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackRecord {
    pub number: u32,
    pub title: String,
    #[serde(default)]
    pub duration_secs: Option<u32>,
    pub audio_url: String,
}

/// Release as supplied by the data source
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseRecord {
    pub id: u64,
    pub artist_id: u64,
    #[serde(rename = "type")]
    pub release_type: ReleaseType,
    pub title: String,
    /// ISO date, `YYYY-MM-DD`
    pub release_date: String,
    #[serde(default)]
    pub cover_art: ImageSet,
    #[serde(default)]
    pub streaming_links: Option<LinkMap>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub tracks: Option<Vec<TrackRecord>>,
}

/// Artist as supplied by the data source
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistRecord {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub images: ImageSet,
    #[serde(default)]
    pub social_links: Option<LinkMap>,
    #[serde(default)]
    pub is_featured: Option<bool>,
    #[serde(default)]
    pub releases: Option<Vec<ReleaseRecord>>,
}

/// Legacy minimal artist shape, kept for older call sites
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleArtist {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub genre: Option<String>,
    pub image_url: String,
}
