//! Error type shared by every fallible engine operation.
//!
//! Two of the variants are part of normal play:
//! - `GridFull` is the game-over signal raised when a required spawn finds
//!   no empty cell.
//! - `InvalidDirection` is a caller error at the text boundary (input
//!   mapping handed the engine something that is not a direction).
//!
//! Neither is swallowed inside the engine; both reach the immediate caller.

use thiserror::Error;

/// Errors returned by the grid engine and game session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// The text does not name one of the four directions.
    #[error("invalid direction: {0:?}")]
    InvalidDirection(String),

    /// No empty cell is left for a required spawn.
    #[error("no free cell left on the grid")]
    GridFull,

    /// A caller-supplied grid or tile value is not valid.
    #[error("malformed grid: {0}")]
    MalformedGrid(&'static str),
}

impl GameError {
    /// True if this error is the end-of-game signal rather than misuse.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        matches!(self, GameError::GridFull)
    }
}
