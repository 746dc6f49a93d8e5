//! Hiring game: interview applicants one per turn and build a company.
//!
//! Ends when the company is full, the applicant pool runs out, or the turn
//! limit is reached. Clears if employees x status reaches the clear score.

mod config;
mod game;

pub use config::InterviewConfig;
pub use game::{Choice, InterviewEvent, InterviewGame, InterviewState};
