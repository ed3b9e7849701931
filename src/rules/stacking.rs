//! The concrete legality engine: suit-alternating stacking pairs plus
//! suit-building foundation moves.
//!
//! A stacking pair is two cards of opposite color in different columns
//! whose point values differ by exactly one, where the higher card is
//! exposed (the cell one row past it is vacant; off-grid counts as
//! vacant). The resolved move names the lower card as the source and
//! `(higher.row + 1, higher.col)` as the stated target - executing it
//! lands the source one row under that, on the higher card's cell,
//! which removes the higher card from play.

use log::debug;

use crate::board::Board;
use crate::cards::ACE_VALUE;
use crate::core::{Coord, StackingMove, FOUNDATION_PILES};

use super::engine::Ruleset;

/// Legality engine for the stacking solitaire variant.
#[derive(Clone, Copy, Debug, Default)]
pub struct StackingRules;

impl StackingRules {
    /// Create the ruleset.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Check one unordered pair of cells for a legal stacking move.
    ///
    /// Returns the resolved move, or `None` when the pair doesn't qualify.
    /// Both directions are tried; since the values must differ by exactly
    /// one, at most one direction can succeed.
    #[must_use]
    pub fn can_move(&self, board: &Board, a: Coord, b: Coord) -> Option<StackingMove> {
        let card_a = board.card_at(a)?;
        let card_b = board.card_at(b)?;

        if !card_a.is_opposite_color(card_b) || a.col == b.col {
            return None;
        }

        if card_a.point_value() == card_b.point_value() + 1
            && !board.has_card(Coord::new(a.row + 1, a.col))
        {
            Some(StackingMove {
                source: b,
                target: Coord::new(a.row + 1, a.col),
            })
        } else if card_b.point_value() == card_a.point_value() + 1
            && !board.has_card(Coord::new(b.row + 1, b.col))
        {
            Some(StackingMove {
                source: a,
                target: Coord::new(b.row + 1, b.col),
            })
        } else {
            None
        }
    }

    /// Scan all unordered pairs among the candidates, in candidate-list
    /// order, and return the first legal stacking move.
    ///
    /// First match wins; when several pairs are legal the earliest
    /// candidates decide.
    #[must_use]
    pub fn find_stacking_move(&self, board: &Board, candidates: &[Coord]) -> Option<StackingMove> {
        for (i, &a) in candidates.iter().enumerate() {
            for &b in &candidates[i + 1..] {
                if let Some(mv) = self.can_move(board, a, b) {
                    return Some(mv);
                }
            }
        }
        None
    }

    /// First candidate cell whose card may move to any foundation pile.
    #[must_use]
    pub fn find_foundation_move(&self, board: &Board, candidates: &[Coord]) -> Option<Coord> {
        candidates.iter().copied().find(|&coord| {
            (0..FOUNDATION_PILES).any(|pile| self.can_move_to_foundation(board, coord, pile))
        })
    }

    /// Find and execute one stacking move, if any is available.
    ///
    /// The automation/simulation entry point. Returns whether a move was
    /// made.
    pub fn play_if_possible(&self, board: &mut Board) -> bool {
        let occupied = board.occupied_cells();
        match self.find_stacking_move(board, &occupied) {
            Some(mv) => {
                debug!("auto play: move {} onto {}", mv.source, mv.target);
                board.move_selected_tab_card(&mv.selection());
                true
            }
            None => false,
        }
    }
}

impl Ruleset for StackingRules {
    fn is_legal(&self, board: &Board, selection: &[Coord]) -> bool {
        selection.len() == 2 && self.find_stacking_move(board, selection).is_some()
    }

    fn another_play_is_possible(&self, board: &Board) -> bool {
        let occupied = board.occupied_cells();
        self.find_stacking_move(board, &occupied).is_some()
            || self.find_foundation_move(board, &occupied).is_some()
    }

    fn can_move_to_foundation(&self, board: &Board, coord: Coord, pile: usize) -> bool {
        if pile >= FOUNDATION_PILES {
            return false;
        }
        let Some(card) = board.card_at(coord) else {
            return false;
        };
        match board.foundation_top(pile) {
            None => card.point_value() == ACE_VALUE,
            Some(top) => {
                top.suit() == card.suit() && card.point_value() == top.point_value() + 1
            }
        }
    }

    fn can_deal(&self, board: &Board) -> bool {
        board.deck_size() > 0
    }

    fn deal_move_is_possible(&self, board: &Board) -> bool {
        let Some(top) = board.deck_pile_top() else {
            return false;
        };
        board.occupied_cells().into_iter().any(|coord| {
            let Some(card) = board.card_at(coord) else {
                return false;
            };
            let Some(landing_row) = coord.row.checked_sub(1) else {
                return false;
            };
            card.is_opposite_color(top)
                && card.point_value() == top.point_value() + 1
                && !board.has_card(Coord::new(landing_row, coord.col))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, Deck, Rank, Suit};
    use crate::core::{BoardConfig, GameRng};

    fn bare_board() -> Board {
        Board::new(BoardConfig::default(), Deck::standard(), GameRng::new(0))
    }

    fn put(board: &mut Board, row: usize, col: usize, rank: Rank, suit: Suit, value: u8) {
        board.set_card(row, col, Some(Card::new(rank, suit, value)));
    }

    #[test]
    fn test_can_move_basic_pair() {
        let mut board = bare_board();
        put(&mut board, 11, 0, Rank::Five, Suit::Spades, 5);
        put(&mut board, 11, 1, Rank::Six, Suit::Hearts, 6);

        let rules = StackingRules::new();
        let mv = rules
            .can_move(&board, Coord::new(11, 0), Coord::new(11, 1))
            .expect("pair is legal");

        // Source is the lower card; target is one row past the higher.
        assert_eq!(mv.source, Coord::new(11, 0));
        assert_eq!(mv.target, Coord::new(12, 1));
    }

    #[test]
    fn test_can_move_direction_flips_with_arguments() {
        let mut board = bare_board();
        put(&mut board, 11, 0, Rank::Six, Suit::Hearts, 6);
        put(&mut board, 11, 1, Rank::Five, Suit::Spades, 5);

        let rules = StackingRules::new();
        let mv = rules
            .can_move(&board, Coord::new(11, 0), Coord::new(11, 1))
            .expect("pair is legal");

        assert_eq!(mv.source, Coord::new(11, 1));
        assert_eq!(mv.target, Coord::new(12, 0));
    }

    #[test]
    fn test_can_move_rejects_same_color() {
        let mut board = bare_board();
        put(&mut board, 11, 0, Rank::Five, Suit::Spades, 5);
        put(&mut board, 11, 1, Rank::Six, Suit::Clubs, 6);

        let rules = StackingRules::new();
        assert!(rules
            .can_move(&board, Coord::new(11, 0), Coord::new(11, 1))
            .is_none());
    }

    #[test]
    fn test_can_move_rejects_same_column() {
        let mut board = bare_board();
        put(&mut board, 11, 0, Rank::Five, Suit::Spades, 5);
        put(&mut board, 10, 0, Rank::Six, Suit::Hearts, 6);

        let rules = StackingRules::new();
        assert!(rules
            .can_move(&board, Coord::new(11, 0), Coord::new(10, 0))
            .is_none());
    }

    #[test]
    fn test_can_move_rejects_value_gap() {
        let mut board = bare_board();
        put(&mut board, 11, 0, Rank::Five, Suit::Spades, 5);
        put(&mut board, 11, 1, Rank::Seven, Suit::Hearts, 7);

        let rules = StackingRules::new();
        assert!(rules
            .can_move(&board, Coord::new(11, 0), Coord::new(11, 1))
            .is_none());
    }

    #[test]
    fn test_can_move_requires_exposed_higher_card() {
        let mut board = bare_board();
        put(&mut board, 10, 0, Rank::Five, Suit::Spades, 5);
        put(&mut board, 10, 1, Rank::Six, Suit::Hearts, 6);
        // A card one row past the higher six blocks the move.
        put(&mut board, 11, 1, Rank::King, Suit::Clubs, 13);

        let rules = StackingRules::new();
        assert!(rules
            .can_move(&board, Coord::new(10, 0), Coord::new(10, 1))
            .is_none());

        // Off the deal row the blocking cell may be out of bounds, which
        // reads as vacant.
        put(&mut board, 11, 2, Rank::Six, Suit::Diamonds, 6);
        assert!(rules
            .can_move(&board, Coord::new(10, 0), Coord::new(11, 2))
            .is_some());
    }

    #[test]
    fn test_can_move_rejects_vacant_cells() {
        let mut board = bare_board();
        put(&mut board, 11, 0, Rank::Five, Suit::Spades, 5);

        let rules = StackingRules::new();
        assert!(rules
            .can_move(&board, Coord::new(11, 0), Coord::new(11, 1))
            .is_none());
        assert!(rules
            .can_move(&board, Coord::new(11, 3), Coord::new(11, 0))
            .is_none());
    }

    #[test]
    fn test_find_stacking_move_first_match_wins() {
        let mut board = bare_board();
        // Two legal pairs; the scan starts from the earliest candidates.
        put(&mut board, 11, 0, Rank::Five, Suit::Spades, 5);
        put(&mut board, 11, 1, Rank::Six, Suit::Hearts, 6);
        put(&mut board, 11, 2, Rank::Nine, Suit::Diamonds, 9);
        put(&mut board, 11, 3, Rank::Ten, Suit::Clubs, 10);

        let rules = StackingRules::new();
        let mv = rules
            .find_stacking_move(&board, &board.occupied_cells())
            .unwrap();

        assert_eq!(mv.source, Coord::new(11, 0));
        assert_eq!(mv.target, Coord::new(12, 1));
    }

    #[test]
    fn test_is_legal_needs_exactly_two() {
        let mut board = bare_board();
        put(&mut board, 11, 0, Rank::Five, Suit::Spades, 5);
        put(&mut board, 11, 1, Rank::Six, Suit::Hearts, 6);
        put(&mut board, 11, 2, Rank::Nine, Suit::Diamonds, 9);

        let rules = StackingRules::new();
        let pair = [Coord::new(11, 0), Coord::new(11, 1)];
        let triple = [Coord::new(11, 0), Coord::new(11, 1), Coord::new(11, 2)];

        assert!(rules.is_legal(&board, &pair));
        assert!(!rules.is_legal(&board, &triple));
        assert!(!rules.is_legal(&board, &pair[..1]));
        assert!(!rules.is_legal(&board, &[]));
    }

    #[test]
    fn test_foundation_start_needs_ace_value() {
        let mut board = bare_board();
        put(&mut board, 11, 0, Rank::Ace, Suit::Spades, 1);
        put(&mut board, 11, 1, Rank::Two, Suit::Spades, 2);

        let rules = StackingRules::new();
        assert!(rules.can_move_to_foundation(&board, Coord::new(11, 0), 0));
        assert!(!rules.can_move_to_foundation(&board, Coord::new(11, 1), 0));
        // An ace may start any empty pile.
        assert!(rules.can_move_to_foundation(&board, Coord::new(11, 0), 3));
    }

    #[test]
    fn test_foundation_build_same_suit_ascending() {
        let mut board = bare_board();
        put(&mut board, 11, 0, Rank::Ace, Suit::Spades, 1);
        board.move_card_to_foundation(11, 0, 0);

        put(&mut board, 11, 1, Rank::Two, Suit::Spades, 2);
        put(&mut board, 11, 2, Rank::Two, Suit::Hearts, 2);
        put(&mut board, 11, 3, Rank::Three, Suit::Spades, 3);

        let rules = StackingRules::new();
        // Same suit, one above the top: legal.
        assert!(rules.can_move_to_foundation(&board, Coord::new(11, 1), 0));
        // Wrong suit.
        assert!(!rules.can_move_to_foundation(&board, Coord::new(11, 2), 0));
        // Right suit, gap of two.
        assert!(!rules.can_move_to_foundation(&board, Coord::new(11, 3), 0));
    }

    #[test]
    fn test_foundation_rejects_vacant_and_bad_pile() {
        let mut board = bare_board();
        put(&mut board, 11, 0, Rank::Ace, Suit::Spades, 1);

        let rules = StackingRules::new();
        assert!(!rules.can_move_to_foundation(&board, Coord::new(5, 5), 0));
        assert!(!rules.can_move_to_foundation(&board, Coord::new(11, 0), FOUNDATION_PILES));
    }

    #[test]
    fn test_find_foundation_move() {
        let mut board = bare_board();
        put(&mut board, 11, 0, Rank::Seven, Suit::Spades, 7);
        put(&mut board, 11, 4, Rank::Ace, Suit::Diamonds, 1);

        let rules = StackingRules::new();
        let found = rules.find_foundation_move(&board, &board.occupied_cells());
        assert_eq!(found, Some(Coord::new(11, 4)));

        let mut deadlocked = bare_board();
        put(&mut deadlocked, 11, 0, Rank::Seven, Suit::Spades, 7);
        assert_eq!(
            rules.find_foundation_move(&deadlocked, &deadlocked.occupied_cells()),
            None
        );
    }

    #[test]
    fn test_another_play_is_possible_deadlock() {
        // All same color, no adjacent values, no aces: nothing to do.
        let mut board = bare_board();
        put(&mut board, 11, 0, Rank::Three, Suit::Spades, 3);
        put(&mut board, 11, 1, Rank::Five, Suit::Clubs, 5);
        put(&mut board, 11, 2, Rank::Seven, Suit::Spades, 7);
        put(&mut board, 11, 3, Rank::Nine, Suit::Clubs, 9);

        let rules = StackingRules::new();
        assert!(!rules.another_play_is_possible(&board));

        // One opposite-colored neighbor flips the answer.
        put(&mut board, 11, 4, Rank::Four, Suit::Hearts, 4);
        assert!(rules.another_play_is_possible(&board));
    }

    #[test]
    fn test_another_play_counts_foundation_moves() {
        let mut board = bare_board();
        put(&mut board, 11, 0, Rank::Ace, Suit::Spades, 1);

        let rules = StackingRules::new();
        assert!(rules.another_play_is_possible(&board));
    }

    #[test]
    fn test_can_deal_tracks_deck() {
        let mut board = bare_board();
        let rules = StackingRules::new();
        assert!(rules.can_deal(&board));

        while board.deck_size() > 0 {
            board.deal_to_pile();
        }
        assert!(!rules.can_deal(&board));
    }

    #[test]
    fn test_deal_move_is_possible() {
        let rules = StackingRules::new();

        let mut board = bare_board();
        // No deck pile card yet.
        assert!(!rules.deal_move_is_possible(&board));

        // Deck pile top is the ace of spades (value 1) of the unshuffled
        // standard deck; a red two with a vacant cell under it anchors it.
        board.deal_to_pile();
        put(&mut board, 11, 3, Rank::Two, Suit::Hearts, 2);
        assert!(rules.deal_move_is_possible(&board));

        // Occupying the landing cell blocks the anchor.
        put(&mut board, 10, 3, Rank::King, Suit::Clubs, 13);
        assert!(!rules.deal_move_is_possible(&board));
    }

    #[test]
    fn test_play_if_possible_executes_first_move() {
        let mut board = bare_board();
        let five = Card::new(Rank::Five, Suit::Spades, 5);
        put(&mut board, 11, 0, Rank::Five, Suit::Spades, 5);
        put(&mut board, 11, 1, Rank::Six, Suit::Hearts, 6);

        let rules = StackingRules::new();
        assert!(rules.play_if_possible(&mut board));

        // The five landed on the six's cell; the six is out of play.
        assert_eq!(board.card_at(Coord::new(11, 1)), Some(five));
        assert_eq!(board.captured_count(), 1);

        // Nothing left to pair on a board of one suit color.
        let mut stuck = bare_board();
        put(&mut stuck, 11, 0, Rank::Three, Suit::Spades, 3);
        assert!(!rules.play_if_possible(&mut stuck));
    }
}
