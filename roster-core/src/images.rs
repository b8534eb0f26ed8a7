//! Image variant selection

use crate::records::ImageSet;

pub const ARTIST_PLACEHOLDER: &str = "/images/placeholder-artist.jpg";
pub const RELEASE_PLACEHOLDER: &str = "/images/placeholder-release.jpg";

/// Fallback order for artist photos
pub const ARTIST_IMAGE_PRIORITY: &[&str] = &["thumbnail", "profile", "featured"];
/// Fallback order for cover art
pub const COVER_IMAGE_PRIORITY: &[&str] = &["small", "medium", "large"];

/// Pick the best image URL for `preferred`.
///
/// Order: the preferred variant, then the first variant present in
/// `priority`, then any other variant (sorted by size name), then
/// `fallback`, then `placeholder`. Empty URLs count as missing, so the
/// result is never empty.
pub fn best_image_url(
    images: &ImageSet,
    fallback: Option<&str>,
    preferred: &str,
    priority: &[&str],
    placeholder: &str,
) -> String {
    let usable = |size: &str| images.get(size).filter(|url| !url.is_empty());

    if let Some(url) = usable(preferred) {
        return url.clone();
    }

    priority
        .iter()
        .find_map(|size| usable(*size))
        .or_else(|| images.values().find(|url| !url.is_empty()))
        .cloned()
        .or_else(|| {
            fallback
                .filter(|url| !url.is_empty())
                .map(str::to_string)
        })
        .unwrap_or_else(|| placeholder.to_string())
}

/// [`best_image_url`] with the artist vocabulary and placeholder
pub fn best_artist_image_url(images: &ImageSet, fallback: Option<&str>, preferred: &str) -> String {
    best_image_url(
        images,
        fallback,
        preferred,
        ARTIST_IMAGE_PRIORITY,
        ARTIST_PLACEHOLDER,
    )
}

/// [`best_image_url`] with the cover-art vocabulary and placeholder
pub fn best_cover_url(images: &ImageSet, preferred: &str) -> String {
    best_image_url(
        images,
        None,
        preferred,
        COVER_IMAGE_PRIORITY,
        RELEASE_PLACEHOLDER,
    )
}

/// `url`, or `placeholder` when `url` is the one that already failed to load.
///
/// Views remember the failing URL rather than a flag, so a view reused for
/// another artist or release tries its real image again.
pub fn unless_failed(url: String, failed: Option<&str>, placeholder: &str) -> String {
    if failed == Some(url.as_str()) {
        placeholder.to_string()
    } else {
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(entries: &[(&str, &str)]) -> ImageSet {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_empty_set_without_fallback_is_placeholder() {
        assert_eq!(
            best_artist_image_url(&ImageSet::new(), None, "profile"),
            "/images/placeholder-artist.jpg"
        );
    }

    #[test]
    fn test_preferred_size_wins() {
        let images = set(&[("profile", "/p.jpg"), ("thumbnail", "/t.jpg")]);
        assert_eq!(
            best_artist_image_url(&images, Some("/d.jpg"), "profile"),
            "/p.jpg"
        );
    }

    #[test]
    fn test_any_available_size_beats_fallback() {
        let images = set(&[("thumbnail", "/t.jpg")]);
        assert_eq!(
            best_artist_image_url(&images, Some("/d.jpg"), "profile"),
            "/t.jpg"
        );
    }

    #[test]
    fn test_priority_order_is_per_call_site() {
        let images = set(&[("large", "/l.jpg"), ("medium", "/m.jpg")]);
        assert_eq!(best_cover_url(&images, "small"), "/m.jpg");
        assert_eq!(
            best_image_url(&images, None, "small", &["large"], RELEASE_PLACEHOLDER),
            "/l.jpg"
        );
    }

    #[test]
    fn test_unknown_vocabulary_still_used() {
        let images = set(&[("banner", "/b.jpg")]);
        assert_eq!(best_artist_image_url(&images, None, "profile"), "/b.jpg");
    }

    #[test]
    fn test_fallback_used_when_set_empty() {
        assert_eq!(
            best_artist_image_url(&ImageSet::new(), Some("/d.jpg"), "profile"),
            "/d.jpg"
        );
        assert_eq!(best_cover_url(&ImageSet::new(), "large"), RELEASE_PLACEHOLDER);
    }

    #[test]
    fn test_empty_urls_are_skipped() {
        assert_eq!(
            best_artist_image_url(&set(&[("profile", "")]), None, "profile"),
            ARTIST_PLACEHOLDER
        );
        assert_eq!(
            best_artist_image_url(&ImageSet::new(), Some(""), "profile"),
            ARTIST_PLACEHOLDER
        );
        let images = set(&[("profile", ""), ("thumbnail", ""), ("featured", "/f.jpg")]);
        assert_eq!(best_artist_image_url(&images, None, "profile"), "/f.jpg");
        assert_eq!(
            best_cover_url(&set(&[("large", "")]), "large"),
            RELEASE_PLACEHOLDER
        );
    }

    #[test]
    fn test_failed_image_only_masks_its_own_url() {
        let first = best_artist_image_url(&set(&[("profile", "/a.jpg")]), None, "profile");
        assert_eq!(
            unless_failed(first, Some("/a.jpg"), ARTIST_PLACEHOLDER),
            ARTIST_PLACEHOLDER
        );

        // Same view, next artist: the earlier failure no longer applies
        let next = best_artist_image_url(&set(&[("profile", "/b.jpg")]), None, "profile");
        assert_eq!(unless_failed(next, Some("/a.jpg"), ARTIST_PLACEHOLDER), "/b.jpg");
        assert_eq!(
            unless_failed("/c.jpg".to_string(), None, RELEASE_PLACEHOLDER),
            "/c.jpg"
        );
    }
}
