//! Display types for UI components
//!
//! View-side shapes produced by [`crate::convert`]. Ids are always strings
//! and optional collections are always present (possibly empty), so views
//! never branch on "absent vs empty".

use crate::records::{ImageSet, LinkMap, ReleaseType};

/// Artist display info
#[derive(Clone, Debug, PartialEq)]
pub struct ArtistDisplay {
    pub id: String,
    pub name: String,
    pub bio: Option<String>,
    /// Never empty; derived from releases when the source has none
    pub genre: String,
    pub images: ImageSet,
    /// Single legacy URL, set when converted from a [`crate::SimpleArtist`]
    pub image_url: Option<String>,
    pub social_links: LinkMap,
    pub is_featured: bool,
    pub releases: Vec<ReleaseDisplay>,
}

/// Track on a release, as listed on the release page
#[derive(Clone, Debug, PartialEq)]
pub struct ReleaseTrack {
    pub number: u32,
    pub title: String,
    pub duration_secs: Option<u32>,
    pub audio_url: String,
}

/// Release display info
#[derive(Clone, Debug, PartialEq)]
pub struct ReleaseDisplay {
    pub id: String,
    pub artist_id: String,
    pub release_type: ReleaseType,
    pub title: String,
    pub release_date: String,
    pub cover_art: ImageSet,
    pub streaming_links: Option<LinkMap>,
    pub description: Option<String>,
    pub tracks: Vec<ReleaseTrack>,
}

impl ReleaseDisplay {
    /// Player id for the track numbered `number` on this release
    pub fn track_id(&self, number: u32) -> String {
        format!("{}-{}", self.id, number)
    }

    /// Build a playable [`Track`] for the track at `index`.
    pub fn playable_track(&self, index: usize, artist_name: &str) -> Option<Track> {
        let track = self.tracks.get(index)?;
        Some(Track {
            id: self.track_id(track.number),
            title: track.title.clone(),
            artist_name: artist_name.to_string(),
            src: track.audio_url.clone(),
            duration_secs: track.duration_secs.map(f64::from),
            cover_url: Some(crate::images::best_cover_url(&self.cover_art, "small")),
        })
    }
}

/// Something the music player can load
#[derive(Clone, Debug, PartialEq)]
pub struct Track {
    pub id: String,
    pub title: String,
    pub artist_name: String,
    /// Audio source URL
    pub src: String,
    pub duration_secs: Option<f64>,
    pub cover_url: Option<String>,
}

impl Track {
    /// Whether `other` refers to the same underlying audio
    pub fn is_same(&self, other: &Track) -> bool {
        self.id == other.id
    }
}

/// An artist in a list view, either the legacy minimal shape or the full
/// display shape. Views ask capabilities through the accessors instead of
/// probing fields.
#[derive(Clone, Debug, PartialEq)]
pub enum ListedArtist {
    Simple(crate::records::SimpleArtist),
    Enhanced(ArtistDisplay),
}

impl ListedArtist {
    pub fn id(&self) -> &str {
        match self {
            ListedArtist::Simple(a) => &a.id,
            ListedArtist::Enhanced(a) => &a.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            ListedArtist::Simple(a) => &a.name,
            ListedArtist::Enhanced(a) => &a.name,
        }
    }

    pub fn genre(&self) -> Option<&str> {
        match self {
            ListedArtist::Simple(a) => a.genre.as_deref(),
            ListedArtist::Enhanced(a) => Some(&a.genre),
        }
    }

    /// Only enhanced artists carry the featured capability
    pub fn is_featured(&self) -> bool {
        match self {
            ListedArtist::Simple(_) => false,
            ListedArtist::Enhanced(a) => a.is_featured,
        }
    }

    /// Card image for the list grid
    pub fn image_url(&self) -> String {
        match self {
            ListedArtist::Simple(a) => a.image_url.clone(),
            ListedArtist::Enhanced(a) => crate::images::best_artist_image_url(
                &a.images,
                a.image_url.as_deref(),
                "thumbnail",
            ),
        }
    }
}

impl From<ArtistDisplay> for ListedArtist {
    fn from(artist: ArtistDisplay) -> Self {
        ListedArtist::Enhanced(artist)
    }
}

impl From<crate::records::SimpleArtist> for ListedArtist {
    fn from(artist: crate::records::SimpleArtist) -> Self {
        ListedArtist::Simple(artist)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::SimpleArtist;

    fn release() -> ReleaseDisplay {
        ReleaseDisplay {
            id: "101".to_string(),
            artist_id: "1".to_string(),
            release_type: ReleaseType::Album,
            title: "Afterglow".to_string(),
            release_date: "2023-09-01".to_string(),
            cover_art: [("small".to_string(), "/covers/101-s.jpg".to_string())]
                .into_iter()
                .collect(),
            streaming_links: None,
            description: None,
            tracks: vec![ReleaseTrack {
                number: 2,
                title: "Night Drive".to_string(),
                duration_secs: Some(201),
                audio_url: "/audio/101-2.mp3".to_string(),
            }],
        }
    }

    #[test]
    fn test_playable_track() {
        let track = release().playable_track(0, "Nova Static").unwrap();
        assert_eq!(track.id, "101-2");
        assert_eq!(track.artist_name, "Nova Static");
        assert_eq!(track.src, "/audio/101-2.mp3");
        assert_eq!(track.duration_secs, Some(201.0));
        assert_eq!(track.cover_url.as_deref(), Some("/covers/101-s.jpg"));
    }

    #[test]
    fn test_playable_track_out_of_range() {
        assert!(release().playable_track(1, "Nova Static").is_none());
    }

    #[test]
    fn test_simple_artist_is_never_featured() {
        let listed = ListedArtist::from(SimpleArtist {
            id: "9".to_string(),
            name: "Lo Fidelity".to_string(),
            genre: None,
            image_url: "/img/lo.jpg".to_string(),
        });
        assert!(!listed.is_featured());
        assert_eq!(listed.genre(), None);
        assert_eq!(listed.image_url(), "/img/lo.jpg");
    }
}
