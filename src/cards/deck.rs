//! The draw deck: cross-product construction, shuffling, sequential deal.
//!
//! The deck is generic over the rank/suit/value tables supplied at
//! construction; the standard 52-card game is just one configuration.
//! Dealing advances a cursor rather than removing cards, so a shuffle can
//! return every dealt card to the pool and permute the whole deck - that
//! is what lets a restart start from a full deck.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::rng::GameRng;

use super::card::{Card, Rank, Suit};

/// Point values for the standard ace-low game.
pub const STANDARD_POINT_VALUES: [u8; 13] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13];

/// Error returned when dealing from an exhausted deck.
///
/// Callers at the board layer recover by treating the result as a vacant
/// cell; nothing propagates this further.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EmptyDeckError;

impl std::fmt::Display for EmptyDeckError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "deal attempted on an empty deck")
    }
}

impl std::error::Error for EmptyDeckError {}

/// An ordered deck of cards with a deal cursor.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Deck {
    /// Every card in the deck, dealt and undealt.
    cards: Vec<Card>,
    /// Index of the next card to deal; `cards[..next]` are already out.
    next: usize,
}

impl Deck {
    /// Build the full cross-product deck in ranks-major order: all ranks
    /// of suit 0, then all ranks of suit 1, and so on. Each rank maps 1:1
    /// to a point value by position.
    ///
    /// Panics if the rank and value tables differ in length or the cross
    /// product would contain duplicate cards; both are construction-time
    /// programmer errors.
    #[must_use]
    pub fn new(ranks: &[Rank], suits: &[Suit], point_values: &[u8]) -> Self {
        assert_eq!(
            ranks.len(),
            point_values.len(),
            "each rank needs exactly one point value"
        );

        let mut seen = FxHashSet::default();
        let mut cards = Vec::with_capacity(ranks.len() * suits.len());
        for &suit in suits {
            for (i, &rank) in ranks.iter().enumerate() {
                if !seen.insert((rank, suit)) {
                    panic!("duplicate card {} of {} in deck tables", rank.name(), suit.name());
                }
                cards.push(Card::new(rank, suit, point_values[i]));
            }
        }

        Self { cards, next: 0 }
    }

    /// The standard 52-card deck for the concrete game.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(&Rank::ALL, &Suit::ALL, &STANDARD_POINT_VALUES)
    }

    /// Uniformly permute the deck, returning every dealt card to the pool.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.cards);
        self.next = 0;
    }

    /// Remove and return the front card.
    pub fn deal(&mut self) -> Result<Card, EmptyDeckError> {
        let card = self.cards.get(self.next).copied().ok_or(EmptyDeckError)?;
        self.next += 1;
        Ok(card)
    }

    /// Number of undealt cards.
    #[must_use]
    pub fn size(&self) -> usize {
        self.cards.len() - self.next
    }

    /// True iff no cards remain to deal.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Total number of cards in the deck, dealt or not.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.cards.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_deck_size() {
        let deck = Deck::standard();
        assert_eq!(deck.size(), 52);
        assert_eq!(deck.total_cards(), 52);
        assert!(!deck.is_empty());
    }

    #[test]
    fn test_no_duplicates() {
        let mut deck = Deck::standard();
        let mut seen = FxHashSet::default();
        while let Ok(card) = deck.deal() {
            assert!(seen.insert((card.rank(), card.suit())));
        }
        assert_eq!(seen.len(), 52);
    }

    #[test]
    fn test_ranks_major_order() {
        let mut deck = Deck::standard();
        // First thirteen cards: every rank of the first suit, ace first.
        let first = deck.deal().unwrap();
        assert_eq!(first.rank(), Rank::Ace);
        assert_eq!(first.suit(), Suit::Spades);
        assert_eq!(first.point_value(), 1);

        for expected in &Rank::ALL[1..] {
            let card = deck.deal().unwrap();
            assert_eq!(card.rank(), *expected);
            assert_eq!(card.suit(), Suit::Spades);
        }

        // Fourteenth card starts the second suit.
        let card = deck.deal().unwrap();
        assert_eq!(card.rank(), Rank::Ace);
        assert_eq!(card.suit(), Suit::Hearts);
    }

    #[test]
    fn test_deal_decrements_size() {
        let mut deck = Deck::standard();
        deck.deal().unwrap();
        deck.deal().unwrap();
        assert_eq!(deck.size(), 50);
    }

    #[test]
    fn test_deal_from_empty_fails() {
        let mut deck = Deck::new(&[Rank::Ace], &[Suit::Spades], &[1]);
        assert_eq!(deck.size(), 1);
        deck.deal().unwrap();
        assert!(deck.is_empty());
        assert_eq!(deck.deal(), Err(EmptyDeckError));
        // Failing deals never consume anything.
        assert_eq!(deck.deal(), Err(EmptyDeckError));
    }

    #[test]
    fn test_shuffle_restores_dealt_cards() {
        let mut deck = Deck::standard();
        let mut rng = GameRng::new(42);

        for _ in 0..20 {
            deck.deal().unwrap();
        }
        assert_eq!(deck.size(), 32);

        deck.shuffle(&mut rng);
        assert_eq!(deck.size(), 52);
    }

    #[test]
    fn test_shuffle_is_seed_deterministic() {
        let mut a = Deck::standard();
        let mut b = Deck::standard();
        a.shuffle(&mut GameRng::new(7));
        b.shuffle(&mut GameRng::new(7));

        for _ in 0..52 {
            assert_eq!(a.deal().unwrap(), b.deal().unwrap());
        }
    }

    #[test]
    #[should_panic(expected = "point value")]
    fn test_mismatched_tables_panic() {
        let _ = Deck::new(&[Rank::Ace, Rank::Two], &[Suit::Spades], &[1]);
    }

    #[test]
    #[should_panic(expected = "duplicate card")]
    fn test_duplicate_cards_panic() {
        let _ = Deck::new(&[Rank::Ace, Rank::Ace], &[Suit::Spades], &[1, 1]);
    }

    #[test]
    fn test_serialization() {
        let mut deck = Deck::standard();
        deck.deal().unwrap();

        let json = serde_json::to_string(&deck).unwrap();
        let mut deserialized: Deck = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.size(), deck.size());
        assert_eq!(deserialized.deal(), deck.deal());
    }
}
