//! Deduction game configuration.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::cards::CardQuestion;
use crate::core::GameError;

/// Rules for a deduction game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeductionConfig {
    /// Questions the player may ask before losing.
    pub max_guesses: u32,

    /// Built-in questions offered to the player.
    pub questions: Vec<CardQuestion>,
}

impl Default for DeductionConfig {
    fn default() -> Self {
        Self {
            max_guesses: 6,
            questions: CardQuestion::standard_set(),
        }
    }
}

impl DeductionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_max_guesses(mut self, guesses: u32) -> Self {
        self.max_guesses = guesses;
        self
    }

    /// Replace the question set.
    #[must_use]
    pub fn with_questions(mut self, questions: Vec<CardQuestion>) -> Self {
        self.questions = questions;
        self
    }

    /// Check the configuration is usable.
    ///
    /// # Errors
    ///
    /// `GameError::InvalidConfig` describing the first problem found.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.max_guesses == 0 {
            return Err(GameError::InvalidConfig("max guesses must be at least 1".into()));
        }

        let mut seen = HashSet::new();
        for question in &self.questions {
            if !seen.insert(question.id) {
                return Err(GameError::InvalidConfig(format!("duplicate {}", question.id)));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardColor, QuestionId, QuestionKind};

    #[test]
    fn test_defaults() {
        let config = DeductionConfig::default();
        assert_eq!(config.max_guesses, 6);
        assert_eq!(config.questions.len(), CardQuestion::standard_set().len());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate() {
        assert!(DeductionConfig::new().with_max_guesses(0).validate().is_err());

        let red = CardQuestion::new(QuestionId::new(1), "Red?", QuestionKind::Color(CardColor::Red));
        let config = DeductionConfig::new().with_questions(vec![red.clone(), red]);
        assert_eq!(
            config.validate(),
            Err(GameError::InvalidConfig("duplicate Question(1)".into()))
        );
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "max_guesses": 3,
            "questions": [
                { "id": 10, "text": "Is it red?", "kind": { "Color": "Red" } },
                { "id": 11, "text": "Is it a face card?", "kind": "FaceCard" }
            ]
        }"#;
        let config: DeductionConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.max_guesses, 3);
        assert_eq!(config.questions[0].kind, QuestionKind::Color(CardColor::Red));
        assert_eq!(config.questions[1].id, QuestionId::new(11));
    }
}
