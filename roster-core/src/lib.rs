//! roster-core - Data shaping and client state for the roster catalog site
//!
//! Holds the record and display types, the conversions between them, and the
//! state containers (filters, navigation, music player) that the UI crate
//! wraps in reactive stores. Nothing in here depends on the rendering
//! framework, so all of it is testable natively.

pub mod catalog;
pub mod config;
pub mod convert;
pub mod display_types;
pub mod filters;
pub mod format;
pub mod images;
pub mod listing;
pub mod navigation;
pub mod player;
pub mod records;

pub use catalog::{Catalog, CatalogError};
pub use config::{ConfigError, SiteConfig};
pub use convert::*;
pub use display_types::*;
pub use filters::{ArtistFilters, FilterState, ReleaseFilters};
pub use format::{format_date, format_duration, social_platform_icon, streaming_platform_label};
pub use images::*;
pub use listing::*;
pub use navigation::{scroll_percentage, NavigationState};
pub use player::{AudioBackend, AudioHandle, MusicPlayer, PlayerError, PollOutcome, SessionId};
pub use records::*;
