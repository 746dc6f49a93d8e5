//! # pocket-games
//!
//! Turn and deduction state machines for two small games, with no
//! presentation layer attached:
//!
//! - **Interview**: draw one applicant per turn, ask a few interview
//!   questions, recruit or reject. The company's head count and status score
//!   decide whether the game is cleared when it ends.
//! - **Deduction**: a hidden card is picked from the deck; each yes/no
//!   question removes the cards that answer differently. One card left wins.
//!
//! ## Design Principles
//!
//! 1. **Explicit composition**: every manager is a plain value owned by its
//!    game. No globals; tests build isolated instances.
//!
//! 2. **Observer events**: games publish notifications through an
//!    `EventBus`. A UI either subscribes callbacks or drains an `EventQueue`.
//!
//! 3. **Refuse, don't fail**: a command issued in the wrong state returns a
//!    `GameError`, logs a warning and changes nothing.
//!
//! 4. **Reproducible**: all randomness comes from a seeded `GameRng`.
//!
//! ## Modules
//!
//! - `core`: errors, events, RNG
//! - `pool`: master/available candidate pools and predicates
//! - `tracker`: bounded company status
//! - `applicants`: applicant records
//! - `cards`: cards and card questions
//! - `games`: the interview and deduction state machines
//!
//! ## Example
//!
//! ```
//! use pocket_games::{Choice, InterviewConfig, InterviewGame, InterviewState};
//! use pocket_games::applicants::Applicant;
//!
//! let applicants = vec![Applicant::new("Ada", 36).with_impact(5.0)];
//! let config = InterviewConfig::new().with_clear_score(1.0);
//!
//! let mut game = InterviewGame::new(config, applicants, 42).unwrap();
//! game.start().unwrap();
//! game.make_choice(Choice::Recruit).unwrap();
//!
//! assert_eq!(game.state(), InterviewState::GameCleared);
//! ```

pub mod core;
pub mod pool;
pub mod tracker;
pub mod applicants;
pub mod cards;
pub mod games;

// Re-export commonly used types
pub use crate::core::{EventBus, EventQueue, GameError, GameRng, ListenerId};

pub use crate::pool::{CandidatePool, Predicate};

pub use crate::tracker::{StatusSnapshot, StatusTracker, TrackerConfig};

pub use crate::applicants::{Applicant, InterviewQuestion};

pub use crate::cards::{Card, CardColor, CardQuestion, QuestionId, QuestionKind, Rank, Suit};

pub use crate::games::interview::{Choice, InterviewConfig, InterviewEvent, InterviewGame, InterviewState};

pub use crate::games::deduction::{DeductionConfig, DeductionEvent, DeductionGame, DeductionState};
