//! Playing cards.
//!
//! Cards are immutable records. `Card::standard_deck` builds the usual
//! 52-card deck in suit-major order.

use serde::{Deserialize, Serialize};

/// Card suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Spade,
    Diamond,
    Heart,
    Club,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Spade, Suit::Diamond, Suit::Heart, Suit::Club];

    #[must_use]
    pub const fn color(self) -> CardColor {
        match self {
            Suit::Diamond | Suit::Heart => CardColor::Red,
            Suit::Spade | Suit::Club => CardColor::Black,
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Suit::Spade => "Spade",
            Suit::Diamond => "Diamond",
            Suit::Heart => "Heart",
            Suit::Club => "Club",
        };
        f.write_str(name)
    }
}

/// Suit color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardColor {
    Red,
    Black,
}

/// Card rank. Ace is low.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Ace = 1,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Numeric value, Ace = 1 through King = 13.
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub const fn is_face(self) -> bool {
        matches!(self, Rank::Jack | Rank::Queen | Rank::King)
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rank::Ace => f.write_str("A"),
            Rank::Jack => f.write_str("J"),
            Rank::Queen => f.write_str("Q"),
            Rank::King => f.write_str("K"),
            other => write!(f, "{}", other.value()),
        }
    }
}

/// A playing card.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,

    /// Asset key of the card face, resolved by the presentation layer.
    #[serde(default)]
    pub image: Option<String>,
}

impl Card {
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self {
            suit,
            rank,
            image: None,
        }
    }

    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    #[must_use]
    pub const fn color(&self) -> CardColor {
        self.suit.color()
    }

    #[must_use]
    pub fn is_red(&self) -> bool {
        self.color() == CardColor::Red
    }

    #[must_use]
    pub fn is_black(&self) -> bool {
        self.color() == CardColor::Black
    }

    /// Jack, Queen or King.
    #[must_use]
    pub const fn is_face_card(&self) -> bool {
        self.rank.is_face()
    }

    #[must_use]
    pub const fn value(&self) -> u8 {
        self.rank.value()
    }

    /// All 52 cards, grouped by suit.
    #[must_use]
    pub fn standard_deck() -> Vec<Card> {
        Suit::ALL
            .iter()
            .flat_map(|&suit| Rank::ALL.iter().map(move |&rank| Card::new(suit, rank)))
            .collect()
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.suit, self.rank)
    }
}
