//! Move directions.
//!
//! Directions partition two ways, and the slide algorithm depends on both:
//! - vertical {Up, Down} vs horizontal {Left, Right} picks whether lines are
//!   columns or rows;
//! - reversed {Right, Down} vs forward {Left, Up} picks the traversal order
//!   along each line.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::GameError;

/// A direction to slide tiles toward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions.
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    /// Up or down: lines are columns.
    #[must_use]
    pub const fn is_vertical(self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }

    /// Left or right: lines are rows.
    #[must_use]
    pub const fn is_horizontal(self) -> bool {
        !self.is_vertical()
    }

    /// Right or down: lines are traversed from the highest index.
    #[must_use]
    pub const fn is_reversed(self) -> bool {
        matches!(self, Direction::Right | Direction::Down)
    }

    /// Lowercase name, as accepted by `FromStr`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

impl FromStr for Direction {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Direction::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| GameError::InvalidDirection(s.to_string()))
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
