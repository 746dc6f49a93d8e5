//! Job applicant records.
//!
//! Applicants are design-time data: built once, read-only during play.
//! Only `impact` feeds the game logic; the rest is for display and the
//! interview questions.

use serde::{Deserialize, Serialize};

/// One question the player can put to an applicant, with their answer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterviewQuestion {
    pub question: String,
    pub answer: String,
}

impl InterviewQuestion {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// A job applicant.
///
/// ## Example
///
/// ```
/// use pocket_games::applicants::Applicant;
///
/// let ada = Applicant::new("Ada", 36)
///     .with_impact(4.0)
///     .with_career("Analytical Engine, 1843")
///     .with_question("Why this company?", "The engines here are bigger.");
///
/// assert_eq!(ada.impact, 4.0);
/// assert_eq!(ada.interview.len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Applicant {
    pub name: String,
    pub age: u32,

    /// Asset key of the portrait, resolved by the presentation layer.
    #[serde(default)]
    pub portrait: Option<String>,

    #[serde(default)]
    pub career_history: Vec<String>,

    /// Questions in display order.
    #[serde(default)]
    pub interview: Vec<InterviewQuestion>,

    /// Change to the company status score when recruited.
    #[serde(default)]
    pub impact: f32,
}

impl Applicant {
    #[must_use]
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            age,
            portrait: None,
            career_history: Vec::new(),
            interview: Vec::new(),
            impact: 0.0,
        }
    }

    #[must_use]
    pub fn with_impact(mut self, impact: f32) -> Self {
        self.impact = impact;
        self
    }

    #[must_use]
    pub fn with_portrait(mut self, portrait: impl Into<String>) -> Self {
        self.portrait = Some(portrait.into());
        self
    }

    #[must_use]
    pub fn with_career(mut self, entry: impl Into<String>) -> Self {
        self.career_history.push(entry.into());
        self
    }

    #[must_use]
    pub fn with_question(mut self, question: impl Into<String>, answer: impl Into<String>) -> Self {
        self.interview.push(InterviewQuestion::new(question, answer));
        self
    }

    /// Get an interview question by index.
    #[must_use]
    pub fn question(&self, index: usize) -> Option<&InterviewQuestion> {
        self.interview.get(index)
    }
}
