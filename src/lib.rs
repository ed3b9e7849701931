//! # solitaire-engine
//!
//! Board and rules engine for a single-player tableau-stacking solitaire
//! game: a rows x columns tableau, four suit-building foundation piles, a
//! side deck pile, and a draw deck.
//!
//! ## Design Principles
//!
//! 1. **Engine only**: rendering, input and selection bookkeeping live in
//!    an external shell. The shell queries state and submits coordinate
//!    lists; the engine answers and mutates.
//!
//! 2. **Composition over inheritance**: [`board::Board`] owns data and
//!    mechanics; a [`rules::Ruleset`] value chosen at construction decides
//!    legality. [`game::SolitaireGame`] composes the two.
//!
//! 3. **Refusals, not failures**: an illegal selection is answered with
//!    `false`, an out-of-range read with `None`, an exhausted deck with a
//!    vacant cell. No input can take the engine down.
//!
//! 4. **Deterministic when asked**: all randomness flows through a
//!    seedable [`core::GameRng`], so fixed-seed games replay identically.
//!
//! ## Modules
//!
//! - `core`: coordinates, configuration, RNG
//! - `cards`: ranks, suits, cards, the draw deck
//! - `board`: tableau/foundation/deck-pile state and move mechanics
//! - `rules`: the `Ruleset` capability and the stacking legality engine
//! - `game`: the composed game facade shells talk to
//!
//! ## Quick start
//!
//! ```
//! use solitaire_engine::game::SolitaireGameBuilder;
//! use solitaire_engine::core::Coord;
//!
//! let mut game = SolitaireGameBuilder::new().build(42);
//!
//! // The deal row is populated, everything else is vacant.
//! assert!(game.card_at(Coord::new(11, 0)).is_some());
//! assert!(game.card_at(Coord::new(0, 0)).is_none());
//!
//! // Drive the game with automated play until it sticks.
//! while game.play_if_possible() {}
//! ```

pub mod board;
pub mod cards;
pub mod core;
pub mod game;
pub mod rules;

// Re-export commonly used types
pub use crate::board::Board;
pub use crate::cards::{Card, Color, Deck, EmptyDeckError, Rank, Suit};
pub use crate::core::{BoardConfig, Coord, GameRng, Selection, StackingMove, FOUNDATION_PILES};
pub use crate::game::{SolitaireGame, SolitaireGameBuilder};
pub use crate::rules::{Ruleset, StackingRules};
