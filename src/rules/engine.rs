//! Ruleset trait: the capability set a concrete game supplies.
//!
//! The board owns data and mechanics; a ruleset decides what is allowed.
//! Composing the two (rather than subclassing a board) keeps the
//! mechanics reusable and lets tests drive a board with a bare ruleset.

use crate::board::Board;
use crate::core::Coord;

/// Legality and liveness decisions for one game variant.
///
/// All methods are pure queries over the board; mutation stays on
/// [`Board`] and is performed by callers only after the ruleset approves.
pub trait Ruleset {
    /// Is the submitted selection a legal move?
    ///
    /// Illegality is an answer, not an error: shells signal it to the
    /// user and nothing else happens.
    fn is_legal(&self, board: &Board, selection: &[Coord]) -> bool;

    /// Is any play still available (stacking or foundation)?
    fn another_play_is_possible(&self, board: &Board) -> bool;

    /// May the card at `coord` move onto foundation pile `pile`?
    fn can_move_to_foundation(&self, board: &Board, coord: Coord, pile: usize) -> bool;

    /// May a card be dealt onto the deck pile?
    fn can_deal(&self, board: &Board) -> bool;

    /// Can the deck pile's top card be placed anywhere on the tableau?
    fn deal_move_is_possible(&self, board: &Board) -> bool;
}
