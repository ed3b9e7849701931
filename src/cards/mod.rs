//! Card and deck types.

pub mod card;
pub mod deck;

pub use card::{Card, Color, Rank, Suit, ACE_VALUE};
pub use deck::{Deck, EmptyDeckError, STANDARD_POINT_VALUES};
