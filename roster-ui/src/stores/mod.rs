//! Store types for UI state management
//!
//! `AppState` is created once at the root with `use_store` and shared
//! through context. The state containers themselves come from roster-core;
//! these stores only add fine-grained reactivity via lensing.

pub mod app;
pub mod artists;
pub mod releases;

pub use app::*;
pub use artists::*;
pub use releases::*;
