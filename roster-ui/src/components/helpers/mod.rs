//! Common helper UI components

mod back_button;
mod empty_state;
mod error_display;
mod loading_spinner;

pub use back_button::BackButton;
pub use empty_state::EmptyState;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
