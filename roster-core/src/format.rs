//! Formatting helpers for dates, durations and link icons

use chrono::{DateTime, Datelike, NaiveDate};

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Anything [`format_date`] accepts
#[derive(Clone, Debug, PartialEq)]
pub enum DateInput<'a> {
    Date(NaiveDate),
    Text(&'a str),
}

impl From<NaiveDate> for DateInput<'_> {
    fn from(date: NaiveDate) -> Self {
        DateInput::Date(date)
    }
}

impl<'a> From<&'a str> for DateInput<'a> {
    fn from(text: &'a str) -> Self {
        DateInput::Text(text)
    }
}

impl<'a> From<&'a String> for DateInput<'a> {
    fn from(text: &'a String) -> Self {
        DateInput::Text(text.as_str())
    }
}

fn parse_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(text).ok().map(|dt| dt.date_naive()))
}

/// Render a date as "March 15, 2024".
///
/// Month names are always English. Text that is not an ISO date or an
/// RFC 3339 timestamp comes back unchanged.
pub fn format_date<'a>(input: impl Into<DateInput<'a>>) -> String {
    let date = match input.into() {
        DateInput::Date(date) => date,
        DateInput::Text(text) => match parse_date(text) {
            Some(date) => date,
            None => return text.to_string(),
        },
    };
    format!(
        "{} {}, {}",
        MONTHS[date.month0() as usize],
        date.day(),
        date.year()
    )
}

/// Format seconds as M:SS
pub fn format_duration(seconds: f64) -> String {
    let total_seconds = if seconds.is_finite() && seconds > 0.0 {
        seconds as u64
    } else {
        0
    };
    format!("{}:{:02}", total_seconds / 60, total_seconds % 60)
}

/// Icon name for a social platform key. Exact, case-sensitive match.
pub fn social_platform_icon(platform: &str) -> &'static str {
    match platform {
        "instagram" => "instagram",
        "twitter" => "twitter",
        "facebook" => "facebook",
        "youtube" => "youtube",
        "spotify" => "spotify",
        "soundcloud" => "soundcloud",
        "bandcamp" => "bandcamp",
        "tiktok" => "tiktok",
        _ => "link",
    }
}

/// Button label for a streaming link key
pub fn streaming_platform_label(platform: &str) -> &'static str {
    match platform {
        "spotify" => "Spotify",
        "appleMusic" => "Apple Music",
        "youtubeMusic" => "YouTube Music",
        "bandcamp" => "Bandcamp",
        "soundcloud" => "SoundCloud",
        "tidal" => "Tidal",
        "deezer" => "Deezer",
        _ => "Listen",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_iso_string() {
        assert_eq!(format_date("2024-03-15"), "March 15, 2024");
    }

    #[test]
    fn test_format_date_value() {
        let date = NaiveDate::from_ymd_opt(2023, 12, 1).unwrap();
        assert_eq!(format_date(date), "December 1, 2023");
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_date("2022-07-04T10:30:00Z"), "July 4, 2022");
    }

    #[test]
    fn test_unparseable_passes_through() {
        assert_eq!(format_date("soon"), "soon");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0.0), "0:00");
        assert_eq!(format_duration(65.9), "1:05");
        assert_eq!(format_duration(f64::NAN), "0:00");
    }

    #[test]
    fn test_social_icons() {
        assert_eq!(social_platform_icon("instagram"), "instagram");
        assert_eq!(social_platform_icon("Instagram"), "link");
        assert_eq!(social_platform_icon("myspace"), "link");
    }

    #[test]
    fn test_streaming_labels() {
        assert_eq!(streaming_platform_label("appleMusic"), "Apple Music");
        assert_eq!(streaming_platform_label("napster"), "Listen");
    }
}
