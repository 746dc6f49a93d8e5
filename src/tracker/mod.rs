//! Bounded numeric game state.

mod status;

pub use status::{StatusSnapshot, StatusTracker, TrackerConfig};
