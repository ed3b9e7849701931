//! Card value types: rank, suit, color.
//!
//! `Card` is an immutable value. The numeric point value is carried on the
//! card itself (assigned at deck construction) because the ruleset's
//! adjacency checks work on values, not ranks. Name strings are stable
//! lowercase identifiers so a shell can derive image keys like
//! `"acespades"` without the engine knowing anything about rendering.

use serde::{Deserialize, Serialize};

/// Card rank, ace low.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rank {
    Ace,
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
    /// All ranks in ascending order.
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

    /// Stable lowercase name, e.g. `"ace"`, `"2"`, `"jack"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Rank::Ace => "ace",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "jack",
            Rank::Queen => "queen",
            Rank::King => "king",
        }
    }
}

/// Card suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Spades,
    Hearts,
    Diamonds,
    Clubs,
}

impl Suit {
    /// All suits, in deck-construction order.
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

    /// Stable lowercase name, e.g. `"spades"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Suit::Spades => "spades",
            Suit::Hearts => "hearts",
            Suit::Diamonds => "diamonds",
            Suit::Clubs => "clubs",
        }
    }

    /// The suit's color.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Suit::Hearts | Suit::Diamonds => Color::Red,
            Suit::Spades | Suit::Clubs => Color::Black,
        }
    }
}

/// Suit color, the unit the stacking rule alternates on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Black,
}

/// The point value a foundation pile starts from.
pub const ACE_VALUE: u8 = 1;

/// An immutable playing card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    rank: Rank,
    suit: Suit,
    point_value: u8,
}

impl Card {
    /// Create a card with an explicit point value.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit, point_value: u8) -> Self {
        Self {
            rank,
            suit,
            point_value,
        }
    }

    /// The card's rank.
    #[must_use]
    pub const fn rank(self) -> Rank {
        self.rank
    }

    /// The card's suit.
    #[must_use]
    pub const fn suit(self) -> Suit {
        self.suit
    }

    /// The numeric value used by adjacency rules (ace = 1 ... king = 13).
    #[must_use]
    pub const fn point_value(self) -> u8 {
        self.point_value
    }

    /// The card's color.
    #[must_use]
    pub const fn color(self) -> Color {
        self.suit.color()
    }

    /// True iff the two cards have different colors.
    #[must_use]
    pub fn is_opposite_color(self, other: Card) -> bool {
        self.color() != other.color()
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} of {}", self.rank.name(), self.suit.name())
    }
}
