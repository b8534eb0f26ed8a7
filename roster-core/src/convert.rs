//! Conversions from source records to display types
//!
//! All conversions borrow their input and never fail.

use crate::display_types::{ArtistDisplay, ReleaseDisplay, ReleaseTrack};
use crate::records::{ArtistRecord, ReleaseRecord, ReleaseType, SimpleArtist, TrackRecord};

pub const ALBUM_ARTIST_GENRE: &str = "Album Artist";
pub const INDEPENDENT_ARTIST_GENRE: &str = "Independent Artist";

/// Derive a genre from an artist's releases.
fn derive_genre(releases: &[ReleaseRecord]) -> &'static str {
    if releases
        .iter()
        .any(|r| r.release_type == ReleaseType::Album)
    {
        ALBUM_ARTIST_GENRE
    } else {
        INDEPENDENT_ARTIST_GENRE
    }
}

pub fn to_display_artist(record: &ArtistRecord) -> ArtistDisplay {
    let releases = record.releases.as_deref().unwrap_or_default();
    let genre = match record.genre.as_deref().map(str::trim) {
        Some(genre) if !genre.is_empty() => genre.to_string(),
        _ => derive_genre(releases).to_string(),
    };

    ArtistDisplay {
        id: record.id.to_string(),
        name: record.name.clone(),
        bio: record.bio.clone(),
        genre,
        images: record.images.clone(),
        image_url: None,
        social_links: record.social_links.clone().unwrap_or_default(),
        is_featured: record.is_featured.unwrap_or(false),
        releases: releases.iter().map(to_display_release).collect(),
    }
}

pub fn to_display_artists(records: &[ArtistRecord]) -> Vec<ArtistDisplay> {
    records.iter().map(to_display_artist).collect()
}

/// Lift a legacy [`SimpleArtist`] into the full display shape.
pub fn from_simple_artist(simple: &SimpleArtist) -> ArtistDisplay {
    let genre = match simple.genre.as_deref().map(str::trim) {
        Some(genre) if !genre.is_empty() => genre.to_string(),
        _ => INDEPENDENT_ARTIST_GENRE.to_string(),
    };

    ArtistDisplay {
        id: simple.id.clone(),
        name: simple.name.clone(),
        bio: None,
        genre,
        images: Default::default(),
        image_url: Some(simple.image_url.clone()),
        social_links: Default::default(),
        is_featured: false,
        releases: Vec::new(),
    }
}

fn to_release_track(track: &TrackRecord) -> ReleaseTrack {
    ReleaseTrack {
        number: track.number,
        title: track.title.clone(),
        duration_secs: track.duration_secs,
        audio_url: track.audio_url.clone(),
    }
}

pub fn to_display_release(record: &ReleaseRecord) -> ReleaseDisplay {
    ReleaseDisplay {
        id: record.id.to_string(),
        artist_id: record.artist_id.to_string(),
        release_type: record.release_type,
        title: record.title.clone(),
        release_date: record.release_date.clone(),
        cover_art: record.cover_art.clone(),
        streaming_links: record.streaming_links.clone(),
        description: record.description.clone(),
        tracks: record
            .tracks
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(to_release_track)
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn release(id: u64, release_type: ReleaseType) -> ReleaseRecord {
        ReleaseRecord {
            id,
            artist_id: 7,
            release_type,
            title: format!("Release {id}"),
            release_date: "2024-03-15".to_string(),
            cover_art: BTreeMap::new(),
            streaming_links: None,
            description: None,
            tracks: None,
        }
    }

    fn artist(genre: Option<&str>, releases: Option<Vec<ReleaseRecord>>) -> ArtistRecord {
        ArtistRecord {
            id: 7,
            name: "Nova Static".to_string(),
            bio: None,
            genre: genre.map(str::to_string),
            images: BTreeMap::new(),
            social_links: None,
            is_featured: None,
            releases,
        }
    }

    #[test]
    fn test_id_is_stringified() {
        let display = to_display_artist(&artist(Some("Synthwave"), None));
        assert_eq!(display.id, "7");
        assert_eq!(display.genre, "Synthwave");
    }

    #[test]
    fn test_genre_derived_from_album() {
        let record = artist(
            None,
            Some(vec![
                release(1, ReleaseType::Single),
                release(2, ReleaseType::Album),
            ]),
        );
        assert_eq!(to_display_artist(&record).genre, ALBUM_ARTIST_GENRE);
    }

    #[test]
    fn test_genre_derived_without_album() {
        let record = artist(None, Some(vec![release(1, ReleaseType::Ep)]));
        assert_eq!(to_display_artist(&record).genre, INDEPENDENT_ARTIST_GENRE);
    }

    #[test]
    fn test_zero_releases_and_blank_genre() {
        let display = to_display_artist(&artist(Some("  "), None));
        assert_eq!(display.genre, INDEPENDENT_ARTIST_GENRE);
        assert!(display.releases.is_empty());
        assert!(display.social_links.is_empty());
        assert!(display.bio.is_none());
        assert!(!display.is_featured);
    }

    #[test]
    fn test_conversion_does_not_mutate_input() {
        let record = artist(None, Some(vec![release(3, ReleaseType::Album)]));
        let before = record.clone();
        let _ = to_display_artist(&record);
        assert_eq!(record, before);
    }

    #[test]
    fn test_to_display_artists_preserves_order() {
        let mut a = artist(None, None);
        a.id = 2;
        a.name = "Zed".to_string();
        let mut b = artist(None, None);
        b.id = 1;
        b.name = "Amy".to_string();
        let names: Vec<_> = to_display_artists(&[a, b])
            .into_iter()
            .map(|d| d.name)
            .collect();
        assert_eq!(names, vec!["Zed", "Amy"]);
    }

    #[test]
    fn test_from_simple_artist_defaults() {
        let simple = SimpleArtist {
            id: "42".to_string(),
            name: "Halo Drift".to_string(),
            genre: None,
            image_url: "/images/halo.jpg".to_string(),
        };
        let display = from_simple_artist(&simple);
        assert!(display.releases.is_empty());
        assert!(display.social_links.is_empty());
        assert!(display.bio.is_none());
        assert!(!display.is_featured);
        assert_eq!(display.image_url.as_deref(), Some("/images/halo.jpg"));
        assert!(!display.genre.is_empty());
    }

    #[test]
    fn test_release_ids_stringified() {
        let mut record = release(11, ReleaseType::Ep);
        record.tracks = Some(vec![TrackRecord {
            number: 1,
            title: "Opening".to_string(),
            duration_secs: Some(200),
            audio_url: "/audio/opening.mp3".to_string(),
        }]);
        let display = to_display_release(&record);
        assert_eq!(display.id, "11");
        assert_eq!(display.artist_id, "7");
        assert_eq!(display.release_type, ReleaseType::Ep);
        assert_eq!(display.tracks.len(), 1);
    }
}
