//! Grid coordinates and move intents.
//!
//! A move is described by an ordered list of coordinates submitted by the
//! shell: the list's length and positions carry its meaning, not an
//! explicit tag. Selection bookkeeping (which card is primary/secondary)
//! stays in the shell; the engine only ever sees the submitted list.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A tableau cell position.
///
/// Row indices grow toward the deal row (the deal row has the highest
/// index); column indices grow left to right. Coordinates are plain data:
/// they may name cells outside the grid (move targets one past the deal
/// row do), and all board reads bounds-check.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    /// Row index.
    pub row: usize,
    /// Column index.
    pub col: usize,
}

impl Coord {
    /// Create a coordinate.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// An ordered list of coordinates submitted for a move attempt.
///
/// SmallVec keeps the common case (a pair) off the heap, the same way the
/// engine this is modeled on stores action pointers inline.
pub type Selection = SmallVec<[Coord; 3]>;

/// A resolved stacking move: where the lower card comes from and the
/// stated target it should be submitted with.
///
/// The target names the cell one row past the higher card; executing the
/// move lands the source card at `(target.row - 1, target.col)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackingMove {
    /// Coordinates of the lower-valued card to move.
    pub source: Coord,
    /// Stated target (one row past the higher card, in its column).
    pub target: Coord,
}

impl StackingMove {
    /// The selection list that executes this move.
    #[must_use]
    pub fn selection(&self) -> Selection {
        let mut sel = Selection::new();
        sel.push(self.source);
        sel.push(self.target);
        sel
    }
}
