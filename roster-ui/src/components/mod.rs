//! Shared UI components

pub mod app_layout;
pub mod artist_card;
pub mod artist_detail;
pub mod artist_list;
pub mod filter_bar;
pub mod helpers;
pub mod icons;
pub mod nav_bar;
pub mod now_playing_bar;
pub mod release_detail;
pub mod release_list;

pub use app_layout::AppLayoutView;
pub use artist_card::{ArtistCard, ArtistCardSkeleton};
pub use artist_detail::ArtistDetailView;
pub use artist_list::{ArtistListView, ArtistRosterView};
pub use filter_bar::FilterBarView;
pub use helpers::{BackButton, EmptyState, ErrorDisplay, LoadingSpinner};
pub use icons::{
    ArrowLeftIcon, ImageIcon, LinkIcon, MenuIcon, PauseIcon, PlayIcon, StarIcon, StopIcon,
    VolumeIcon, XIcon,
};
pub use nav_bar::{NavBarView, NavItem};
pub use now_playing_bar::NowPlayingBarView;
pub use release_detail::ReleaseDetailView;
pub use release_list::{ReleaseCard, ReleaseListView};
