//! Core engine types: tiles, grid, directions, RNG, configuration, errors.
//!
//! This module holds the data model. The rules that transform it live in
//! `rules`; the lifecycle that drives it lives in `session`.

pub mod tile;
pub mod grid;
pub mod direction;
pub mod error;
pub mod rng;
pub mod config;

pub use tile::{Position, Tile};
pub use grid::{EmptyPositions, Grid};
pub use direction::Direction;
pub use error::GameError;
pub use rng::{GameRng, GameRngState};
pub use config::{CandidateSet, GameConfig};
