//! The data-owning board: tableau grid, foundation piles, deck pile, draw
//! deck.
//!
//! The board implements the generic move mechanics and exposes
//! bounds-checked accessors; what counts as a *legal* move is the
//! ruleset's business (`crate::rules`). Every read outside the grid
//! reports "no card there" instead of failing, and no operation here can
//! end the process - bad input degrades to a refusal or a no-op.
//!
//! ## Card accounting
//!
//! Every card is in exactly one place: a tableau cell, a foundation pile,
//! the deck pile, the undealt deck, or the captured pile. A stacking move
//! lands the moved card on the higher card's cell; the covered card is
//! out of play and goes to `captured`, which is what keeps the total
//! countable at all times.

use log::debug;

use crate::cards::{Card, Deck};
use crate::core::{BoardConfig, Coord, GameRng, FOUNDATION_PILES};

/// Board state for one game session.
///
/// Constructed once; [`Board::new_game`] reshuffles and re-deals in place.
/// Restart resets of the foundation piles, deck pile and captured pile are
/// the caller's job, mirroring the shell contract this engine serves (see
/// the reset methods).
#[derive(Clone, Debug)]
pub struct Board {
    config: BoardConfig,
    /// `tableau[row][col]`; a cell holds a card or is vacant.
    tableau: Vec<Vec<Option<Card>>>,
    /// Four suit-building piles, append-only during play.
    foundation: [Vec<Card>; FOUNDATION_PILES],
    /// Cards dealt off the deck onto the side pile.
    deck_pile: Vec<Card>,
    /// Cards removed from play by a covering landing.
    captured: Vec<Card>,
    deck: Deck,
    rng: GameRng,
}

impl Board {
    /// Create a board with an empty tableau.
    ///
    /// Call [`Board::new_game`] to shuffle and deal.
    #[must_use]
    pub fn new(config: BoardConfig, deck: Deck, rng: GameRng) -> Self {
        let tableau = vec![vec![None; config.columns]; config.rows];
        Self {
            config,
            tableau,
            foundation: Default::default(),
            deck_pile: Vec::new(),
            captured: Vec::new(),
            deck,
            rng,
        }
    }

    /// Reshuffle the deck (returning all cards to it) and deal the deal
    /// row; every other cell is vacated.
    ///
    /// Foundation piles, the deck pile and the captured pile are *not*
    /// cleared here - a full restart calls the reset methods as separate
    /// steps.
    pub fn new_game(&mut self) {
        self.deck.shuffle(&mut self.rng);
        let deal_row = self.config.deal_row();
        for r in 0..self.config.rows {
            for c in 0..self.config.columns {
                self.tableau[r][c] = if r == deal_row {
                    self.deck.deal().ok()
                } else {
                    None
                };
            }
        }
        debug!(
            "new game dealt, {} cards remain in the deck",
            self.deck.size()
        );
    }

    // === Dimensions ===

    /// Number of tableau rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.config.rows
    }

    /// Number of tableau columns.
    #[must_use]
    pub fn columns(&self) -> usize {
        self.config.columns
    }

    /// The board's configuration.
    #[must_use]
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    // === Reads (all bounds-checked; out of range reads as vacant) ===

    /// The card at a cell, if any.
    #[must_use]
    pub fn card_at(&self, coord: Coord) -> Option<Card> {
        self.tableau
            .get(coord.row)
            .and_then(|row| row.get(coord.col))
            .copied()
            .flatten()
    }

    /// True iff the cell holds a card.
    #[must_use]
    pub fn has_card(&self, coord: Coord) -> bool {
        self.card_at(coord).is_some()
    }

    /// Top card of a foundation pile, if any.
    #[must_use]
    pub fn foundation_top(&self, pile: usize) -> Option<Card> {
        self.foundation.get(pile).and_then(|p| p.last()).copied()
    }

    /// Number of cards in a foundation pile (0 for an invalid index).
    #[must_use]
    pub fn foundation_size(&self, pile: usize) -> usize {
        self.foundation.get(pile).map_or(0, Vec::len)
    }

    /// Top card of the deck pile, if any.
    #[must_use]
    pub fn deck_pile_top(&self) -> Option<Card> {
        self.deck_pile.last().copied()
    }

    /// Number of cards on the deck pile.
    #[must_use]
    pub fn deck_pile_size(&self) -> usize {
        self.deck_pile.len()
    }

    /// Number of undealt cards in the draw deck.
    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.deck.size()
    }

    /// Number of cards removed from play by covering landings.
    #[must_use]
    pub fn captured_count(&self) -> usize {
        self.captured.len()
    }

    /// True iff every tableau cell is vacant.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tableau
            .iter()
            .all(|row| row.iter().all(Option::is_none))
    }

    /// Win check: the deck is exhausted and no row holds a card in column
    /// index 1.
    ///
    /// The check really does consult a single column rather than the whole
    /// grid. Shells must not read a stronger guarantee into a `true`
    /// answer.
    #[must_use]
    pub fn game_is_won(&self) -> bool {
        self.deck.is_empty() && (0..self.config.rows).all(|r| !self.has_card(Coord::new(r, 1)))
    }

    /// Coordinates of every occupied cell, in row-major order.
    #[must_use]
    pub fn occupied_cells(&self) -> Vec<Coord> {
        let mut cells = Vec::new();
        for r in 0..self.config.rows {
            for c in 0..self.config.columns {
                if self.tableau[r][c].is_some() {
                    cells.push(Coord::new(r, c));
                }
            }
        }
        cells
    }

    // === Writes ===

    /// Place a card (or vacancy) at a cell.
    ///
    /// A covered occupant moves to the captured pile. Writes outside the
    /// grid don't fail: a card that cannot land anywhere is captured
    /// instead.
    pub fn set_card(&mut self, row: usize, col: usize, card: Option<Card>) {
        if row < self.config.rows && col < self.config.columns {
            if let Some(prev) = self.tableau[row][col].take() {
                self.captured.push(prev);
            }
            self.tableau[row][col] = card;
        } else if let Some(card) = card {
            self.captured.push(card);
        }
    }

    /// Deal to a cell: on the deal row (or when `force` is set) the cell
    /// receives the deck's next card, vacant when the deck is exhausted;
    /// anywhere else the cell is simply vacated.
    pub fn deal_to_cell(&mut self, row: usize, col: usize, force: bool) {
        if row >= self.config.rows || col >= self.config.columns {
            return;
        }
        let replacement = if row == self.config.deal_row() || force {
            self.deck.deal().ok()
        } else {
            None
        };
        if let Some(prev) = self.tableau[row][col].take() {
            self.captured.push(prev);
        }
        self.tableau[row][col] = replacement;
    }

    /// Deal one card from the deck onto the deck pile.
    ///
    /// No-op when the deck is exhausted.
    pub fn deal_to_pile(&mut self) {
        if let Ok(card) = self.deck.deal() {
            self.deck_pile.push(card);
        }
    }

    /// Execute a stacking move described by an ordered selection.
    ///
    /// `selected[0]` is the source cell; `selected[1]` states the target,
    /// and the card lands one row under it: at
    /// `(target.row - 1, target.col)`. The source cell is then refilled
    /// per the [`Board::deal_to_cell`] rule, and any cards stacked on the
    /// source column (rows below the source index) are relayed to the
    /// target column at the same offsets, each vacated cell refilled the
    /// same way.
    ///
    /// Selections shorter than two coordinates are ignored. Legality is
    /// not checked here; callers gate on the ruleset first.
    pub fn move_selected_tab_card(&mut self, selected: &[Coord]) {
        let (Some(&src), Some(&tgt)) = (selected.first(), selected.get(1)) else {
            return;
        };
        let moved = self.take_card(src);
        self.land(tgt, 0, moved);
        self.deal_to_cell(src.row, src.col, false);

        for step in 1..=src.row {
            let from = Coord::new(src.row - step, src.col);
            if let Some(relay) = self.take_card(from) {
                self.land(tgt, step, Some(relay));
                self.deal_to_cell(from.row, from.col, false);
            }
        }
    }

    /// Move the card at a cell onto a foundation pile, then refill the
    /// cell per the deal rule.
    ///
    /// No-op for a vacant cell or an out-of-range pile index.
    pub fn move_card_to_foundation(&mut self, row: usize, col: usize, pile: usize) {
        if pile >= FOUNDATION_PILES {
            return;
        }
        if let Some(card) = self.take_card(Coord::new(row, col)) {
            self.foundation[pile].push(card);
        }
        self.deal_to_cell(row, col, false);
    }

    /// Move the deck pile's top card into a tableau cell, then deal a new
    /// card onto the deck pile.
    pub fn move_deck_card_to_tableau(&mut self, row: usize, col: usize) {
        let moved = self.deck_pile.pop();
        self.set_card(row, col, moved);
        self.deal_to_pile();
    }

    // === Restart resets (caller-driven, see `new_game`) ===

    /// Clear one foundation pile.
    pub fn reset_foundation(&mut self, pile: usize) {
        if let Some(p) = self.foundation.get_mut(pile) {
            p.clear();
        }
    }

    /// Clear the deck pile.
    pub fn reset_deck_pile(&mut self) {
        self.deck_pile.clear();
    }

    /// Clear the captured pile.
    pub fn reset_captured(&mut self) {
        self.captured.clear();
    }

    // === Internals ===

    /// Remove and return the card at a cell, if any.
    fn take_card(&mut self, coord: Coord) -> Option<Card> {
        self.tableau
            .get_mut(coord.row)?
            .get_mut(coord.col)?
            .take()
    }

    /// Land a card relative to a stated target: at
    /// `(stated.row - 1 - offset, stated.col)`. A landing that would fall
    /// off the grid captures the card instead.
    fn land(&mut self, stated: Coord, offset: usize, card: Option<Card>) {
        match stated.row.checked_sub(1 + offset) {
            Some(row) => self.set_card(row, stated.col, card),
            None => {
                if let Some(card) = card {
                    self.captured.push(card);
                }
            }
        }
    }
}
