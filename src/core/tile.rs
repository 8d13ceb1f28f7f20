//! Tile values and grid positions.

use serde::{Deserialize, Serialize};

use super::error::GameError;

/// A non-empty cell value. Always a power of two, at most [`Tile::MAX`].
///
/// A cell is `Option<Tile>`: `None` is empty, `Some(tile)` is occupied.
/// No other cell states are representable.
///
/// ```
/// use tile_merge::core::Tile;
///
/// let two = Tile::new(2).unwrap();
/// assert_eq!(two.doubled().map(Tile::value), Some(4));
/// assert!(Tile::new(3).is_none());
/// assert!(Tile::new(0).is_none());
///
/// // The largest tile has no merge result.
/// assert_eq!(Tile::MAX.doubled(), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Tile(u32);

impl Tile {
    /// The largest representable tile, `2^31`.
    pub const MAX: Tile = Tile(1 << 31);

    /// Create a tile. Returns `None` unless `value` is a power of two.
    #[must_use]
    pub const fn new(value: u32) -> Option<Self> {
        if value.is_power_of_two() {
            Some(Self(value))
        } else {
            None
        }
    }

    /// The numeric value of this tile.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// The tile produced by merging two tiles of this value.
    ///
    /// `None` for [`Tile::MAX`]: two maximal tiles do not merge.
    #[must_use]
    pub const fn doubled(self) -> Option<Self> {
        match self.0.checked_mul(2) {
            Some(value) => Some(Self(value)),
            None => None,
        }
    }
}

impl TryFrom<u32> for Tile {
    type Error = GameError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Tile::new(value).ok_or(GameError::MalformedGrid("tile value must be a power of two"))
    }
}

impl From<Tile> for u32 {
    fn from(tile: Tile) -> Self {
        tile.0
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Forward so width/alignment flags apply to the number.
        std::fmt::Display::fmt(&self.0, f)
    }
}

/// A cell coordinate, row-major.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
