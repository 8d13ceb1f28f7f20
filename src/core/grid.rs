//! The square tile grid.
//!
//! Cells are stored row-major in a flat vector. The grid's dimensions are
//! fixed at construction; every operation keeps every cell either empty or
//! a valid `Tile`.

use smallvec::SmallVec;

use super::error::GameError;
use super::tile::{Position, Tile};

/// Empty positions of a grid. Inline for the default 4x4 grid.
pub type EmptyPositions = SmallVec<[Position; 16]>;

/// A `size × size` matrix of cells.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    size: usize,
    cells: Vec<Option<Tile>>,
}

impl Grid {
    /// Create an empty grid.
    #[must_use]
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "Grid size must be at least 1");

        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    /// Build a grid from rows of raw values, `0` meaning empty.
    ///
    /// ```
    /// use tile_merge::core::{Grid, Position};
    ///
    /// let grid = Grid::from_rows(&[vec![2, 0], vec![0, 4]]).unwrap();
    /// assert_eq!(grid.get(Position::new(1, 1)).map(|t| t.value()), Some(4));
    /// assert!(Grid::from_rows(&[vec![2, 0]]).is_err());
    /// ```
    pub fn from_rows(rows: &[Vec<u32>]) -> Result<Self, GameError> {
        let size = rows.len();
        if size == 0 {
            return Err(GameError::MalformedGrid("grid has no rows"));
        }

        let mut cells = Vec::with_capacity(size * size);
        for row in rows {
            if row.len() != size {
                return Err(GameError::MalformedGrid("grid is not square"));
            }
            for &value in row {
                cells.push(match value {
                    0 => None,
                    v => Some(Tile::try_from(v)?),
                });
            }
        }

        Ok(Self { size, cells })
    }

    /// Side length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Get the cell at `position`.
    ///
    /// Panics if `position` is outside the grid.
    #[must_use]
    pub fn get(&self, position: Position) -> Option<Tile> {
        self.cells[self.index(position)]
    }

    /// Set the cell at `position`.
    ///
    /// Panics if `position` is outside the grid.
    pub fn set(&mut self, position: Position, cell: Option<Tile>) {
        let index = self.index(position);
        self.cells[index] = cell;
    }

    /// Empty every cell.
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Iterate over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Option<Tile>]> {
        self.cells.chunks(self.size)
    }

    /// All empty positions in row-major order.
    #[must_use]
    pub fn empty_positions(&self) -> EmptyPositions {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(i, _)| Position::new(i / self.size, i % self.size))
            .collect()
    }

    /// Number of empty cells.
    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_none()).count()
    }

    /// True if no cell is empty.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Sum of all tile values.
    #[must_use]
    pub fn sum(&self) -> u64 {
        self.cells.iter().flatten().map(|t| u64::from(t.value())).sum()
    }

    /// Largest tile on the grid, if any.
    #[must_use]
    pub fn max_tile(&self) -> Option<Tile> {
        self.cells.iter().flatten().copied().max()
    }

    /// Raw values by row, `0` for empty.
    #[must_use]
    pub fn to_values(&self) -> Vec<Vec<u32>> {
        self.rows()
            .map(|row| row.iter().map(|c| c.map_or(0, Tile::value)).collect())
            .collect()
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Option<Tile>] {
        &mut self.cells
    }

    fn index(&self, position: Position) -> usize {
        assert!(
            position.row < self.size && position.col < self.size,
            "Position {} outside {}x{} grid",
            position,
            self.size,
            self.size
        );
        position.row * self.size + position.col
    }
}
