//! Board configuration.
//!
//! The engine hardcodes no dimensions: the concrete game supplies them at
//! construction, and a different layout is a different config, not a
//! different engine.

use serde::{Deserialize, Serialize};

/// Number of foundation piles (one per suit).
pub const FOUNDATION_PILES: usize = 4;

/// Tableau dimensions for a board.
///
/// Cards are dealt into the deal row (row index `rows - 1`); every other
/// row starts vacant and fills only as a side effect of moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Number of tableau rows.
    pub rows: usize,
    /// Number of tableau columns.
    pub columns: usize,
}

impl BoardConfig {
    /// Create a config with explicit dimensions.
    #[must_use]
    pub const fn new(rows: usize, columns: usize) -> Self {
        Self { rows, columns }
    }

    /// Row index cards are dealt into.
    #[must_use]
    pub const fn deal_row(&self) -> usize {
        self.rows - 1
    }
}

impl Default for BoardConfig {
    /// The concrete game's 12 x 7 layout.
    fn default() -> Self {
        Self {
            rows: 12,
            columns: 7,
        }
    }
}
