//! roster-ui - View components and reactive stores for the roster site
//!
//! Components are pure: they render what they are given and report
//! interactions through callbacks. Data loading and audio live in the web
//! crate.

pub mod components;
pub mod stores;

pub use components::*;
