//! Yes/no questions about a card.
//!
//! `CardQuestion` covers the built-in question kinds and can be loaded from
//! configuration. Anything else implementing `Predicate<Card>` can be
//! registered with a deduction game alongside them.

use serde::{Deserialize, Serialize};

use crate::pool::Predicate;

use super::card::{Card, CardColor, Rank, Suit};

/// Question identifier, chosen by whoever defines the question set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QuestionId(pub u32);

impl QuestionId {
    /// Create a new question ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for QuestionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Question({})", self.0)
    }
}

/// What a built-in question tests.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuestionKind {
    /// Is the card this color?
    Color(CardColor),
    /// Is the card this suit?
    Suit(Suit),
    /// Is the card a Jack, Queen or King?
    FaceCard,
    /// Is the rank at least this high?
    RankAtLeast(Rank),
    /// Is the card exactly this rank?
    RankEquals(Rank),
}

impl Predicate<Card> for QuestionKind {
    fn evaluate(&self, card: &Card) -> bool {
        match *self {
            QuestionKind::Color(color) => card.color() == color,
            QuestionKind::Suit(suit) => card.suit == suit,
            QuestionKind::FaceCard => card.is_face_card(),
            QuestionKind::RankAtLeast(rank) => card.rank >= rank,
            QuestionKind::RankEquals(rank) => card.rank == rank,
        }
    }
}

/// A built-in question with its display text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardQuestion {
    pub id: QuestionId,
    pub text: String,
    pub kind: QuestionKind,
}

impl CardQuestion {
    pub fn new(id: QuestionId, text: impl Into<String>, kind: QuestionKind) -> Self {
        Self {
            id,
            text: text.into(),
            kind,
        }
    }

    /// The default question set offered by a deduction game.
    #[must_use]
    pub fn standard_set() -> Vec<CardQuestion> {
        vec![
            CardQuestion::new(QuestionId::new(1), "Is it red?", QuestionKind::Color(CardColor::Red)),
            CardQuestion::new(QuestionId::new(2), "Is it black?", QuestionKind::Color(CardColor::Black)),
            CardQuestion::new(QuestionId::new(3), "Is it a face card?", QuestionKind::FaceCard),
            CardQuestion::new(QuestionId::new(4), "Is it a spade?", QuestionKind::Suit(Suit::Spade)),
            CardQuestion::new(QuestionId::new(5), "Is it a diamond?", QuestionKind::Suit(Suit::Diamond)),
            CardQuestion::new(QuestionId::new(6), "Is it a heart?", QuestionKind::Suit(Suit::Heart)),
            CardQuestion::new(QuestionId::new(7), "Is it a club?", QuestionKind::Suit(Suit::Club)),
            CardQuestion::new(QuestionId::new(8), "Is it an eight or higher?", QuestionKind::RankAtLeast(Rank::Eight)),
            CardQuestion::new(QuestionId::new(9), "Is it an ace?", QuestionKind::RankEquals(Rank::Ace)),
        ]
    }
}

impl Predicate<Card> for CardQuestion {
    fn evaluate(&self, card: &Card) -> bool {
        self.kind.evaluate(card)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_question() {
        let red = QuestionKind::Color(CardColor::Red);
        assert!(red.evaluate(&Card::new(Suit::Heart, Rank::Five)));
        assert!(!red.evaluate(&Card::new(Suit::Spade, Rank::Five)));

        let black = QuestionKind::Color(CardColor::Black);
        assert!(black.evaluate(&Card::new(Suit::Club, Rank::Five)));
    }

    #[test]
    fn test_rank_questions() {
        let high = QuestionKind::RankAtLeast(Rank::Eight);
        assert!(high.evaluate(&Card::new(Suit::Heart, Rank::Eight)));
        assert!(high.evaluate(&Card::new(Suit::Heart, Rank::King)));
        assert!(!high.evaluate(&Card::new(Suit::Heart, Rank::Seven)));

        let ace = QuestionKind::RankEquals(Rank::Ace);
        assert!(ace.evaluate(&Card::new(Suit::Club, Rank::Ace)));
        assert!(!ace.evaluate(&Card::new(Suit::Club, Rank::Two)));
    }

    #[test]
    fn test_standard_set_splits_deck() {
        let deck = Card::standard_deck();

        for question in CardQuestion::standard_set() {
            let yes = deck.iter().filter(|c| question.evaluate(c)).count();
            assert!(yes > 0 && yes < deck.len(), "{} never narrows the deck", question.text);
        }
    }

    #[test]
    fn test_standard_set_ids_unique() {
        let set = CardQuestion::standard_set();
        let ids: std::collections::HashSet<_> = set.iter().map(|q| q.id).collect();
        assert_eq!(ids.len(), set.len());

        let raw: Vec<_> = set.iter().map(|q| q.id.raw()).collect();
        assert_eq!(raw, (1..=9u32).collect::<Vec<_>>());
    }

    #[test]
    fn test_question_serde() {
        let question = CardQuestion::new(QuestionId::new(5), "Red?", QuestionKind::Color(CardColor::Red));
        let json = serde_json::to_string(&question).unwrap();
        let back: CardQuestion = serde_json::from_str(&json).unwrap();
        assert_eq!(question, back);
    }
}
