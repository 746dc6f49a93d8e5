//! Interview game configuration.

use serde::{Deserialize, Serialize};

use crate::core::GameError;
use crate::tracker::TrackerConfig;

/// Rules for an interview game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InterviewConfig {
    /// Company limits and starting values.
    pub tracker: TrackerConfig,

    /// Interview questions the player may ask per applicant.
    pub questions_per_turn: u32,

    /// Turn after which the game ends regardless. `None` for no limit.
    pub max_turns: Option<u32>,

    /// Final score needed to clear the game.
    pub clear_score: f32,
}

impl Default for InterviewConfig {
    fn default() -> Self {
        Self {
            tracker: TrackerConfig::default(),
            questions_per_turn: 2,
            max_turns: None,
            clear_score: 80.0,
        }
    }
}

impl InterviewConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_tracker(mut self, tracker: TrackerConfig) -> Self {
        self.tracker = tracker;
        self
    }

    #[must_use]
    pub fn with_questions_per_turn(mut self, count: u32) -> Self {
        self.questions_per_turn = count;
        self
    }

    #[must_use]
    pub fn with_max_turns(mut self, turns: u32) -> Self {
        self.max_turns = Some(turns);
        self
    }

    #[must_use]
    pub fn without_turn_limit(mut self) -> Self {
        self.max_turns = None;
        self
    }

    #[must_use]
    pub fn with_clear_score(mut self, score: f32) -> Self {
        self.clear_score = score;
        self
    }

    /// Check the configuration is usable.
    ///
    /// # Errors
    ///
    /// `GameError::InvalidConfig` describing the first problem found.
    pub fn validate(&self) -> Result<(), GameError> {
        self.tracker.validate()?;
        if self.max_turns == Some(0) {
            return Err(GameError::InvalidConfig("max turns must be at least 1".into()));
        }
        if self.clear_score.is_nan() {
            return Err(GameError::InvalidConfig("clear score is not a number".into()));
        }
        Ok(())
    }
}
