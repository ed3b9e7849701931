//! Core engine types: coordinates, configuration, RNG.
//!
//! These are the game-agnostic building blocks; the concrete ruleset
//! configures them rather than the other way around.

pub mod config;
pub mod coord;
pub mod rng;

pub use config::{BoardConfig, FOUNDATION_PILES};
pub use coord::{Coord, Selection, StackingMove};
pub use rng::GameRng;
