//! Error type shared by every manager and game.
//!
//! Commands never abort a session: a refused command logs a warning,
//! leaves state untouched, and hands one of these back to the caller.

use thiserror::Error;

/// Why a command was refused.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum GameError {
    /// The command is not accepted in the current state.
    #[error("cannot {command} while the game is {state}")]
    InvalidTransition {
        command: &'static str,
        state: &'static str,
    },

    /// A draw or answer pick was requested from an empty master pool.
    #[error("the master pool is empty")]
    EmptyPool,

    /// A recruit was attempted with every seat already filled.
    #[error("capacity of {capacity} employees already reached")]
    CapacityExceeded { capacity: u32 },

    /// An effect delta that is NaN or infinite.
    #[error("impact {0} is not a finite number")]
    NonFiniteImpact(f32),

    /// No applicant is currently being interviewed.
    #[error("no candidate is in play this turn")]
    NoCandidate,

    /// The per-turn interview question budget is spent.
    #[error("no interview questions remaining this turn")]
    NoQuestionsRemaining,

    #[error("interview question {0} was already asked this turn")]
    QuestionAlreadyAsked(usize),

    #[error("unknown question: {0}")]
    UnknownQuestion(String),

    /// Rejected at construction time.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
