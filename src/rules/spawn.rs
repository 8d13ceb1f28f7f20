//! Random tile placement.
//!
//! The spawner owns the session's random source. Each placement draws twice
//! from it, in this order: the empty cell, then the value.

use log::debug;

use crate::core::{CandidateSet, GameError, GameRng, Grid, Position};

/// Places random tiles on empty cells.
#[derive(Clone, Debug)]
pub struct Spawner {
    rng: GameRng,
}

impl Spawner {
    /// Create a spawner drawing from `rng`.
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self { rng }
    }

    /// The underlying random source.
    #[must_use]
    pub fn rng(&self) -> &GameRng {
        &self.rng
    }

    /// Write a value from `candidates` onto a uniformly chosen empty cell.
    ///
    /// Returns the position written, or `GridFull` if no cell is empty.
    pub fn place(&mut self, grid: &mut Grid, candidates: &CandidateSet) -> Result<Position, GameError> {
        let empty = grid.empty_positions();
        let Some(&position) = self.rng.choose(&empty) else {
            return Err(GameError::GridFull);
        };

        let tile = candidates.pick(&mut self.rng);
        grid.set(position, Some(tile));
        debug!("spawned {} at {} ({} empty before)", tile, position, empty.len());

        Ok(position)
    }
}
