//! Core types shared by both games: errors, observer plumbing, RNG.
//!
//! Nothing here knows about applicants or cards.

pub mod error;
pub mod events;
pub mod rng;

pub use error::GameError;
pub use events::{EventBus, EventQueue, ListenerId};
pub use rng::GameRng;
