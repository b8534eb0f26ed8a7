mod artist_detail;
mod artists;
mod home;
mod layout;
mod not_found;
mod release_detail;
mod releases;

pub use artist_detail::ArtistDetail;
pub use artists::Artists;
pub use home::Home;
pub use layout::AppLayout;
pub use not_found::NotFound;
pub use release_detail::ReleaseDetail;
pub use releases::Releases;
