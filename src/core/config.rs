//! Session configuration.
//!
//! A `GameConfig` is built once and handed to `GameSession` at construction:
//! - grid size
//! - how many tiles a reset seeds, and from which values
//! - which values a post-move spawn draws from
//! - optional RNG seed for reproducible games
//! - the first highest-tile milestone a front end celebrates
//!
//! Nothing here is mutated after the session starts.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::rng::GameRng;
use super::tile::Tile;

/// A non-empty set of tile values a spawn draws from, uniformly.
///
/// ```
/// use tile_merge::core::CandidateSet;
///
/// let set = CandidateSet::new(&[2, 4]);
/// assert_eq!(set.len(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Tile>", into = "Vec<Tile>")]
pub struct CandidateSet(SmallVec<[Tile; 2]>);

impl CandidateSet {
    /// Create a candidate set.
    ///
    /// Panics if `values` is empty or holds a value that is not a power of two.
    pub fn new(values: &[u32]) -> Self {
        assert!(!values.is_empty(), "Candidate set must not be empty");

        Self(
            values
                .iter()
                .map(|&v| Tile::new(v).unwrap_or_else(|| panic!("Candidate value {v} is not a power of two")))
                .collect(),
        )
    }

    /// A set holding one value.
    pub fn single(value: u32) -> Self {
        Self::new(&[value])
    }

    /// The candidate tiles.
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Never true for a constructed set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn contains(&self, tile: Tile) -> bool {
        self.0.contains(&tile)
    }

    /// Smallest candidate.
    #[must_use]
    pub fn min(&self) -> Tile {
        self.0.iter().copied().fold(self.0[0], Tile::min)
    }

    /// Draw one candidate uniformly.
    pub fn pick(&self, rng: &mut GameRng) -> Tile {
        self.0[rng.gen_range_usize(0..self.0.len())]
    }
}

impl Default for CandidateSet {
    fn default() -> Self {
        Self::new(&[2, 4])
    }
}

impl TryFrom<Vec<Tile>> for CandidateSet {
    type Error = &'static str;

    fn try_from(tiles: Vec<Tile>) -> Result<Self, Self::Error> {
        if tiles.is_empty() {
            return Err("candidate set must not be empty");
        }
        Ok(Self(SmallVec::from_vec(tiles)))
    }
}

impl From<CandidateSet> for Vec<Tile> {
    fn from(set: CandidateSet) -> Self {
        set.0.into_vec()
    }
}

/// Complete session configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Side length of the square grid.
    pub grid_size: usize,

    /// Tiles placed by `GameSession::restart`.
    pub initial_tiles: usize,

    /// Values seeded on reset.
    pub seed_values: CandidateSet,

    /// Values spawned after a move that changed the grid.
    pub spawn_values: CandidateSet,

    /// RNG seed. `None` draws one from entropy.
    pub seed: Option<u64>,

    /// First highest-tile threshold the front end celebrates.
    pub milestone: u32,
}

impl GameConfig {
    pub const DEFAULT_GRID_SIZE: usize = 4;
    pub const DEFAULT_INITIAL_TILES: usize = 2;
    pub const DEFAULT_MILESTONE: u32 = 2048;

    /// Create a configuration for a `grid_size × grid_size` board.
    pub fn new(grid_size: usize) -> Self {
        assert!(grid_size > 0, "Grid size must be at least 1");

        Self {
            grid_size,
            initial_tiles: Self::DEFAULT_INITIAL_TILES,
            seed_values: CandidateSet::single(2),
            spawn_values: CandidateSet::default(),
            seed: None,
            milestone: Self::DEFAULT_MILESTONE,
        }
    }

    /// Set the number of tiles seeded on restart.
    #[must_use]
    pub fn with_initial_tiles(mut self, count: usize) -> Self {
        self.initial_tiles = count;
        self
    }

    /// Set the values used when seeding a reset.
    #[must_use]
    pub fn with_seed_values(mut self, values: &[u32]) -> Self {
        self.seed_values = CandidateSet::new(values);
        self
    }

    /// Set the values used for post-move spawns.
    #[must_use]
    pub fn with_spawn_values(mut self, values: &[u32]) -> Self {
        self.spawn_values = CandidateSet::new(values);
        self
    }

    /// Fix the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the first milestone.
    #[must_use]
    pub fn with_milestone(mut self, milestone: u32) -> Self {
        assert!(milestone > 0, "Milestone must be positive");
        self.milestone = milestone;
        self
    }

    /// Number of cells on the board.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.grid_size * self.grid_size
    }

    /// The RNG this configuration asks for.
    #[must_use]
    pub fn make_rng(&self) -> GameRng {
        match self.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_GRID_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();

        assert_eq!(config.grid_size, 4);
        assert_eq!(config.cell_count(), 16);
        assert_eq!(config.initial_tiles, 2);
        assert_eq!(config.seed_values.tiles(), &[Tile::new(2).unwrap()]);
        assert_eq!(config.spawn_values, CandidateSet::new(&[2, 4]));
        assert_eq!(config.seed, None);
        assert_eq!(config.milestone, 2048);
    }

    #[test]
    fn test_builder() {
        let config = GameConfig::new(5)
            .with_initial_tiles(3)
            .with_seed_values(&[4])
            .with_spawn_values(&[2, 4, 8])
            .with_seed(7)
            .with_milestone(512);

        assert_eq!(config.grid_size, 5);
        assert_eq!(config.initial_tiles, 3);
        assert_eq!(config.seed_values.min().value(), 4);
        assert_eq!(config.spawn_values.len(), 3);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.milestone, 512);
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let config = GameConfig::default().with_seed(99);
        let mut a = config.make_rng();
        let mut b = config.make_rng();

        assert_eq!(a.gen_range_usize(0..1000), b.gen_range_usize(0..1000));
    }

    #[test]
    #[should_panic(expected = "Grid size must be at least 1")]
    fn test_zero_grid_size() {
        GameConfig::new(0);
    }

    #[test]
    #[should_panic(expected = "Candidate set must not be empty")]
    fn test_empty_candidates() {
        CandidateSet::new(&[]);
    }

    #[test]
    #[should_panic(expected = "Candidate value 3 is not a power of two")]
    fn test_invalid_candidate() {
        let _ = GameConfig::default().with_spawn_values(&[2, 3]);
    }

    #[test]
    fn test_candidate_min_and_contains() {
        let set = CandidateSet::new(&[8, 2, 4]);

        assert_eq!(set.min().value(), 2);
        assert!(set.contains(Tile::new(8).unwrap()));
        assert!(!set.contains(Tile::new(16).unwrap()));
        assert!(!set.is_empty());
    }

    #[test]
    fn test_pick_stays_in_set() {
        let set = CandidateSet::default();
        let mut rng = GameRng::new(3);

        for _ in 0..200 {
            assert!(set.contains(set.pick(&mut rng)));
        }
    }

    #[test]
    fn test_config_serde() {
        let config = GameConfig::new(6).with_seed(11).with_spawn_values(&[2, 4]);
        let json = serde_json::to_string(&config).unwrap();
        let back: GameConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(config, back);
    }

    #[test]
    fn test_candidate_serde_rejects_empty() {
        assert!(serde_json::from_str::<CandidateSet>("[]").is_err());
        assert!(serde_json::from_str::<CandidateSet>("[2, 6]").is_err());
    }
}
