//! Data access for the pages
//!
//! Backed by the embedded catalog. The async signatures keep pages written
//! against `use_resource` so a network source can replace the fixture
//! without touching them.

use roster_core::{ArtistDisplay, Catalog, ReleaseDisplay};

fn catalog() -> Result<Catalog, String> {
    Catalog::load().map_err(|e| e.to_string())
}

pub async fn fetch_artists() -> Result<Vec<ArtistDisplay>, String> {
    Ok(catalog()?.artists())
}

pub async fn fetch_featured_artists() -> Result<Vec<ArtistDisplay>, String> {
    Ok(catalog()?.featured_artists())
}

pub async fn fetch_artist(id: &str) -> Result<ArtistDisplay, String> {
    catalog()?.artist(id).map_err(|e| e.to_string())
}

pub async fn fetch_releases() -> Result<Vec<ReleaseDisplay>, String> {
    Ok(catalog()?.releases())
}

pub async fn fetch_release(id: &str) -> Result<(ReleaseDisplay, ArtistDisplay), String> {
    catalog()?.release(id).map_err(|e| e.to_string())
}
