//! Guess-the-card game: narrow the deck with yes/no questions until one
//! card remains, before the guesses run out.

mod config;
mod game;

pub use config::DeductionConfig;
pub use game::{DeductionEvent, DeductionGame, DeductionState};
