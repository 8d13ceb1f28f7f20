//! Game session implementation.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::core::{Direction, GameConfig, GameError, GameRng, Grid, Position};
use crate::rules::{self, Spawner};

/// Whether the session still accepts moves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionStatus {
    /// Moves are accepted.
    #[default]
    Playable,
    /// A required spawn found no empty cell. Only `reset` leaves this state.
    Over,
}

/// Result of a move that did not end the game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MoveOutcome {
    /// True iff the slide changed the grid.
    pub changed: bool,
    /// Score gained by merges in this move.
    pub score_delta: u64,
    /// Where the post-move tile landed. `None` when the grid did not change.
    pub spawned: Option<Position>,
}

/// One game: grid, score, highest merged value, status and spawner.
///
/// ## Example
///
/// ```
/// use tile_merge::{Direction, GameConfig, GameSession};
///
/// let mut session = GameSession::new(GameConfig::default().with_seed(42)).unwrap();
/// assert_eq!(session.grid().empty_count(), 14);
///
/// let outcome = session.make_move(Direction::Left).unwrap();
/// if outcome.changed {
///     assert!(outcome.spawned.is_some());
/// }
/// ```
#[derive(Clone, Debug)]
pub struct GameSession {
    config: GameConfig,
    grid: Grid,
    score: u64,
    highest_value: u32,
    status: SessionStatus,
    moves_made: u32,
    spawner: Spawner,
}

impl GameSession {
    /// Create a session and seed it with `config.initial_tiles` tiles.
    ///
    /// The RNG comes from `config.seed`, or from entropy if unset.
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        let rng = config.make_rng();
        Self::with_rng(config, rng)
    }

    /// Create a session with an explicit random source.
    pub fn with_rng(config: GameConfig, rng: GameRng) -> Result<Self, GameError> {
        debug!("new {0}x{0} session, rng seed {1}", config.grid_size, rng.seed());
        let grid = Grid::new(config.grid_size);
        let mut session = Self::unseeded(config, grid, rng);
        session.restart()?;
        Ok(session)
    }

    /// Adopt a prepared grid. Score and highest value start at zero.
    ///
    /// Fails with `MalformedGrid` if the grid size differs from the config.
    pub fn from_grid(config: GameConfig, grid: Grid, rng: GameRng) -> Result<Self, GameError> {
        if grid.size() != config.grid_size {
            return Err(GameError::MalformedGrid("grid size does not match configuration"));
        }
        Ok(Self::unseeded(config, grid, rng))
    }

    fn unseeded(config: GameConfig, grid: Grid, rng: GameRng) -> Self {
        Self {
            config,
            grid,
            score: 0,
            highest_value: 0,
            status: SessionStatus::Playable,
            moves_made: 0,
            spawner: Spawner::new(rng),
        }
    }

    // === Lifecycle ===

    /// Clear the grid, zero the counters and seed `initial_count` tiles.
    ///
    /// Fails with `GridFull` if `initial_count` exceeds the number of cells;
    /// the session is then `Over` with a full grid.
    pub fn reset(&mut self, initial_count: usize) -> Result<(), GameError> {
        self.grid.clear();
        self.score = 0;
        self.highest_value = 0;
        self.moves_made = 0;
        self.status = SessionStatus::Playable;

        for _ in 0..initial_count {
            if let Err(err) = self.spawner.place(&mut self.grid, &self.config.seed_values) {
                self.status = SessionStatus::Over;
                return Err(err);
            }
        }

        debug!("reset with {} tiles", initial_count);
        Ok(())
    }

    /// `reset` with the configured initial tile count.
    pub fn restart(&mut self) -> Result<(), GameError> {
        self.reset(self.config.initial_tiles)
    }

    // === Moves ===

    /// Slide toward `direction`, then spawn one tile if the grid changed.
    ///
    /// Returns `GridFull` when the spawn finds no empty cell; the session is
    /// then `Over` and every further call returns `GridFull` untouched until
    /// `reset`. An unchanged grid spawns nothing and is not an error.
    pub fn make_move(&mut self, direction: Direction) -> Result<MoveOutcome, GameError> {
        if self.is_over() {
            return Err(GameError::GridFull);
        }

        let slid = rules::slide(&mut self.grid, direction);
        self.score += slid.score_delta;
        if let Some(merged) = slid.highest_merge {
            self.highest_value = self.highest_value.max(merged.value());
        }

        let mut outcome = MoveOutcome {
            changed: slid.changed,
            score_delta: slid.score_delta,
            spawned: None,
        };

        if !slid.changed {
            debug!("move {} left the grid unchanged", direction);
            return Ok(outcome);
        }

        self.moves_made += 1;
        match self.spawner.place(&mut self.grid, &self.config.spawn_values) {
            Ok(position) => outcome.spawned = Some(position),
            Err(err) => {
                info!("game over after {} moves, score {}", self.moves_made, self.score);
                self.status = SessionStatus::Over;
                return Err(err);
            }
        }

        debug!("move {} scored {} (total {})", direction, slid.score_delta, self.score);
        Ok(outcome)
    }

    /// Parse `name` as a direction, then `make_move`.
    pub fn make_move_named(&mut self, name: &str) -> Result<MoveOutcome, GameError> {
        let direction = name.parse::<Direction>()?;
        self.make_move(direction)
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Read-only view of the grid, row-major.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.grid.size()
    }

    #[must_use]
    pub fn score(&self) -> u64 {
        self.score
    }

    /// Largest value produced by a merge since the last reset. Seeded tiles
    /// do not count.
    #[must_use]
    pub fn highest_value(&self) -> u32 {
        self.highest_value
    }

    #[must_use]
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status == SessionStatus::Over
    }

    /// Moves that changed the grid since the last reset.
    #[must_use]
    pub fn moves_made(&self) -> u32 {
        self.moves_made
    }

    /// True if some direction would still change the grid.
    ///
    /// Distinct from `is_over`: a stuck board is reported here before any
    /// spawn fails.
    #[must_use]
    pub fn has_legal_moves(&self) -> bool {
        !self.is_over() && rules::has_legal_moves(&self.grid)
    }

    /// The spawner's random source, e.g. to checkpoint it.
    #[must_use]
    pub fn rng(&self) -> &GameRng {
        self.spawner.rng()
    }
}
