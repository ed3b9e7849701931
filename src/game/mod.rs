//! The composed game: a [`Board`] plus a [`Ruleset`], exposing the whole
//! shell-facing surface.
//!
//! Shells query state for rendering and submit move attempts; every
//! attempt is gated on the ruleset and answered with a boolean - a refusal
//! leaves the board untouched and is the shell's cue to signal the user.
//!
//! ```
//! use solitaire_engine::game::SolitaireGameBuilder;
//!
//! let mut game = SolitaireGameBuilder::new().build(42);
//! assert_eq!(game.deck_size(), 45);
//! while game.play_if_possible() {}
//! ```

use log::debug;

use crate::board::Board;
use crate::cards::{Card, Deck};
use crate::core::{BoardConfig, Coord, GameRng, FOUNDATION_PILES};
use crate::rules::{Ruleset, StackingRules};

/// A board composed with a ruleset chosen at construction.
#[derive(Clone, Debug)]
pub struct SolitaireGame<R: Ruleset = StackingRules> {
    board: Board,
    rules: R,
}

/// Builder for the standard game.
///
/// Dimensions default to the concrete 12 x 7 layout over a 52-card deck.
#[derive(Clone, Copy, Debug)]
pub struct SolitaireGameBuilder {
    rows: usize,
    columns: usize,
}

impl Default for SolitaireGameBuilder {
    fn default() -> Self {
        let config = BoardConfig::default();
        Self {
            rows: config.rows,
            columns: config.columns,
        }
    }
}

impl SolitaireGameBuilder {
    /// Create a builder with the default layout.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the number of tableau rows.
    #[must_use]
    pub fn rows(mut self, rows: usize) -> Self {
        assert!(rows > 0, "the tableau needs at least one row");
        self.rows = rows;
        self
    }

    /// Override the number of tableau columns.
    #[must_use]
    pub fn columns(mut self, columns: usize) -> Self {
        assert!(columns > 0, "the tableau needs at least one column");
        self.columns = columns;
        self
    }

    /// Build a dealt game with a fixed seed (deterministic).
    #[must_use]
    pub fn build(self, seed: u64) -> SolitaireGame {
        self.build_with_rng(GameRng::new(seed))
    }

    /// Build a dealt game seeded from OS entropy.
    #[must_use]
    pub fn build_random(self) -> SolitaireGame {
        self.build_with_rng(GameRng::from_entropy())
    }

    fn build_with_rng(self, rng: GameRng) -> SolitaireGame {
        let config = BoardConfig::new(self.rows, self.columns);
        let mut board = Board::new(config, Deck::standard(), rng);
        board.new_game();
        SolitaireGame {
            board,
            rules: StackingRules::new(),
        }
    }
}

impl<R: Ruleset> SolitaireGame<R> {
    /// Compose an arbitrary board with an arbitrary ruleset.
    #[must_use]
    pub fn with_rules(board: Board, rules: R) -> Self {
        Self { board, rules }
    }

    // === Query surface ===

    /// Number of tableau rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.board.rows()
    }

    /// Number of tableau columns.
    #[must_use]
    pub fn columns(&self) -> usize {
        self.board.columns()
    }

    /// The card at a cell, if any.
    #[must_use]
    pub fn card_at(&self, coord: Coord) -> Option<Card> {
        self.board.card_at(coord)
    }

    /// Top card of a foundation pile, if any.
    #[must_use]
    pub fn foundation_top(&self, pile: usize) -> Option<Card> {
        self.board.foundation_top(pile)
    }

    /// Number of cards on a foundation pile.
    #[must_use]
    pub fn foundation_size(&self, pile: usize) -> usize {
        self.board.foundation_size(pile)
    }

    /// Top card of the deck pile, if any.
    #[must_use]
    pub fn deck_pile_top(&self) -> Option<Card> {
        self.board.deck_pile_top()
    }

    /// Number of undealt cards in the draw deck.
    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.board.deck_size()
    }

    /// Number of cards removed from play by covering landings.
    #[must_use]
    pub fn captured_count(&self) -> usize {
        self.board.captured_count()
    }

    /// True iff every tableau cell is vacant.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.board.is_empty()
    }

    /// The win check (deck exhausted, column 1 clear in every row).
    #[must_use]
    pub fn game_is_won(&self) -> bool {
        self.board.game_is_won()
    }

    /// Is any play still available?
    #[must_use]
    pub fn another_play_is_possible(&self) -> bool {
        self.rules.another_play_is_possible(&self.board)
    }

    /// Would this selection be accepted as a stacking move?
    #[must_use]
    pub fn is_legal(&self, selection: &[Coord]) -> bool {
        self.rules.is_legal(&self.board, selection)
    }

    /// May the card at `coord` move onto foundation pile `pile`?
    #[must_use]
    pub fn can_move_to_foundation(&self, coord: Coord, pile: usize) -> bool {
        self.rules.can_move_to_foundation(&self.board, coord, pile)
    }

    /// May a card be dealt onto the deck pile?
    #[must_use]
    pub fn can_deal(&self) -> bool {
        self.rules.can_deal(&self.board)
    }

    /// Can the deck pile's top card be placed on the tableau?
    #[must_use]
    pub fn deal_move_is_possible(&self) -> bool {
        self.rules.deal_move_is_possible(&self.board)
    }

    /// The underlying board, for shells that render directly from state.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The ruleset in play.
    #[must_use]
    pub fn rules(&self) -> &R {
        &self.rules
    }

    // === Command surface (boolean refusals) ===

    /// Attempt the stacking move described by an ordered selection.
    ///
    /// Returns `false` (and changes nothing) when the ruleset refuses.
    pub fn attempt_stacking_move(&mut self, selection: &[Coord]) -> bool {
        if !self.rules.is_legal(&self.board, selection) {
            debug!("refused stacking move: {selection:?}");
            return false;
        }
        self.board.move_selected_tab_card(selection);
        true
    }

    /// Attempt to move the card at `coord` onto foundation pile `pile`.
    pub fn attempt_foundation_move(&mut self, coord: Coord, pile: usize) -> bool {
        if !self.rules.can_move_to_foundation(&self.board, coord, pile) {
            debug!("refused foundation move: {coord} to pile {pile}");
            return false;
        }
        self.board.move_card_to_foundation(coord.row, coord.col, pile);
        true
    }

    /// Attempt to place the deck pile's top card at `target`.
    pub fn attempt_deck_to_tableau(&mut self, target: Coord) -> bool {
        if !self.rules.deal_move_is_possible(&self.board) {
            debug!("refused deck-to-tableau move to {target}");
            return false;
        }
        self.board.move_deck_card_to_tableau(target.row, target.col);
        true
    }

    /// Deal one card from the deck onto the deck pile.
    pub fn deal_to_pile(&mut self) {
        self.board.deal_to_pile();
    }

    /// Reshuffle and re-deal without clearing the piles.
    ///
    /// Shells performing a full restart follow this with the pile resets,
    /// or call [`SolitaireGame::restart`] which does the whole sequence.
    pub fn new_game(&mut self) {
        self.board.new_game();
    }

    /// Clear one foundation pile.
    pub fn reset_foundation(&mut self, pile: usize) {
        self.board.reset_foundation(pile);
    }

    /// Clear the deck pile.
    pub fn reset_deck_pile(&mut self) {
        self.board.reset_deck_pile();
    }

    /// Full restart: re-deal and clear every pile.
    pub fn restart(&mut self) {
        self.board.new_game();
        for pile in 0..FOUNDATION_PILES {
            self.board.reset_foundation(pile);
        }
        self.board.reset_deck_pile();
        self.board.reset_captured();
    }
}

impl SolitaireGame<StackingRules> {
    /// Find and execute one stacking move, if any is available.
    pub fn play_if_possible(&mut self) -> bool {
        let rules = self.rules;
        rules.play_if_possible(&mut self.board)
    }
}
