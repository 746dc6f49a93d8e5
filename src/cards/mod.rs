//! Playing cards and the questions asked about them.

mod card;
mod question;

pub use card::{Card, CardColor, Rank, Suit};
pub use question::{CardQuestion, QuestionId, QuestionKind};
