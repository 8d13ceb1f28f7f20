//! # tile-merge
//!
//! Rule engine for a sliding-tile merge puzzle played on a square grid.
//!
//! ## Design Principles
//!
//! 1. **UI-Agnostic**: The engine exposes state and moves only. Renderers
//!    hold a `GameSession` and read it through accessors.
//!
//! 2. **Deterministic**: Randomness is an injected, seedable `GameRng`.
//!    The same seed and the same moves replay the same game.
//!
//! 3. **Configuration Over Convention**: Grid size, seed and spawn values,
//!    and the initial tile count come from an immutable `GameConfig`.
//!
//! ## Rules
//!
//! A move slides every tile toward one edge, merges equal neighbours at
//! most once each, adds merged values to the score and, only if the grid
//! changed, spawns one random tile. A spawn that finds no empty cell is the
//! game-over signal, `GameError::GridFull`.
//!
//! ## Modules
//!
//! - `core`: Tiles, grid, directions, RNG, configuration, errors
//! - `rules`: Slide-and-merge and random spawns
//! - `session`: Reset/move lifecycle and status
//! - `render`: Text front end (board, frames, key mapping)
//!
//! ## Example
//!
//! ```
//! use tile_merge::{Direction, GameConfig, GameError, GameSession};
//!
//! let mut session = GameSession::new(GameConfig::default().with_seed(7)).unwrap();
//!
//! for direction in Direction::ALL.iter().cycle().take(40) {
//!     match session.make_move(*direction) {
//!         Ok(_) => {}
//!         Err(GameError::GridFull) => break,
//!         Err(other) => panic!("{other}"),
//!     }
//! }
//! assert!(session.score() % 2 == 0);
//! ```

pub mod core;
pub mod rules;
pub mod session;
pub mod render;

// Re-export commonly used types
pub use crate::core::{
    CandidateSet, Direction, GameConfig, GameError, GameRng, GameRngState, Grid, Position, Tile,
};

pub use crate::rules::{can_slide, has_legal_moves, slide, SlideOutcome, Spawner};

pub use crate::session::{GameSession, MoveOutcome, SessionStatus};
