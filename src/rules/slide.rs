//! Slide-and-merge: the per-direction grid transformation.
//!
//! Each line orthogonal to the motion (a row for left/right, a column for
//! up/down) is processed independently with a cursor walk:
//!
//! - traversal starts at the edge tiles move toward (index 0 for left/up,
//!   the last index for right/down);
//! - the cursor marks the next position that may receive a tile, either
//!   as a plain shift into an empty slot or as a merge target;
//! - a cursor that absorbed a merge advances immediately, so a merged tile
//!   never merges again in the same slide.
//!
//! ```
//! use tile_merge::core::{Direction, Grid};
//! use tile_merge::rules::slide;
//!
//! let mut grid = Grid::from_rows(&[vec![2, 2, 2, 0], vec![0; 4], vec![0; 4], vec![0; 4]]).unwrap();
//! let outcome = slide(&mut grid, Direction::Left);
//!
//! assert!(outcome.changed);
//! assert_eq!(outcome.score_delta, 4);
//! assert_eq!(grid.to_values()[0], vec![4, 2, 0, 0]);
//! ```

use smallvec::SmallVec;

use crate::core::{Direction, Grid, Tile};

/// What a slide did to the grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SlideOutcome {
    /// True iff at least one cell changed.
    pub changed: bool,

    /// Sum of the values produced by merges.
    pub score_delta: u64,

    /// Largest value produced by a merge, if any merge happened.
    pub highest_merge: Option<Tile>,
}

impl SlideOutcome {
    /// True if at least one merge happened.
    #[must_use]
    pub fn merged(&self) -> bool {
        self.highest_merge.is_some()
    }

    fn record_merge(&mut self, merged: Tile) {
        self.changed = true;
        self.score_delta += u64::from(merged.value());
        self.highest_merge = self.highest_merge.max(Some(merged));
    }
}

/// Slide and merge every line of `grid` toward `direction`, in place.
pub fn slide(grid: &mut Grid, direction: Direction) -> SlideOutcome {
    let size = grid.size();
    let cells = grid.cells_mut();
    let mut outcome = SlideOutcome::default();
    let mut line: SmallVec<[usize; 8]> = SmallVec::with_capacity(size);

    for primary in 0..size {
        line.clear();
        line.extend((0..size).map(|step| cell_index(size, direction, primary, step)));
        slide_line(cells, &line, &mut outcome);
    }

    outcome
}

/// True if sliding toward `direction` would change the grid.
#[must_use]
pub fn can_slide(grid: &Grid, direction: Direction) -> bool {
    let mut scratch = grid.clone();
    slide(&mut scratch, direction).changed
}

/// True if any direction would change the grid.
///
/// A full grid with no equal neighbours has no legal moves even though no
/// spawn has failed yet.
#[must_use]
pub fn has_legal_moves(grid: &Grid) -> bool {
    Direction::ALL.into_iter().any(|d| can_slide(grid, d))
}

/// Flat index of the `step`-th cell visited on line `primary`.
fn cell_index(size: usize, direction: Direction, primary: usize, step: usize) -> usize {
    let secondary = if direction.is_reversed() { size - 1 - step } else { step };

    if direction.is_vertical() {
        secondary * size + primary
    } else {
        primary * size + secondary
    }
}

/// Cursor walk over one line. `line` lists flat indices in traversal order.
fn slide_line(cells: &mut [Option<Tile>], line: &[usize], outcome: &mut SlideOutcome) {
    // Invariant: cursor < step on entry to each iteration, and every
    // position strictly between them is empty.
    let mut cursor = 0;

    for step in 1..line.len() {
        let Some(value) = cells[line[step]] else {
            continue;
        };

        let target = cells[line[cursor]];
        let merged = target.filter(|&current| current == value).and_then(Tile::doubled);

        match (target, merged) {
            (None, _) => {
                cells[line[cursor]] = Some(value);
                cells[line[step]] = None;
                outcome.changed = true;
            }
            (Some(_), Some(merged)) => {
                cells[line[cursor]] = Some(merged);
                cells[line[step]] = None;
                outcome.record_merge(merged);
                cursor += 1;
            }
            // Different values, or a pair of maximal tiles.
            (Some(_), None) => {
                cursor += 1;
                if cursor != step {
                    cells[line[cursor]] = Some(value);
                    cells[line[step]] = None;
                    outcome.changed = true;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: &[[u32; 4]]) -> Grid {
        let rows: Vec<Vec<u32>> = rows.iter().map(|r| r.to_vec()).collect();
        Grid::from_rows(&rows).unwrap()
    }

    fn row_after(values: [u32; 4], direction: Direction) -> (Vec<u32>, SlideOutcome) {
        let mut g = grid(&[values, [0; 4], [0; 4], [0; 4]]);
        let outcome = slide(&mut g, direction);
        (g.to_values().remove(0), outcome)
    }

    #[test]
    fn test_compaction_without_merge() {
        let (row, outcome) = row_after([0, 2, 0, 4], Direction::Left);

        assert_eq!(row, vec![2, 4, 0, 0]);
        assert!(outcome.changed);
        assert_eq!(outcome.score_delta, 0);
        assert_eq!(outcome.highest_merge, None);
        assert!(!outcome.merged());
    }

    #[test]
    fn test_pairs_merge_once_each() {
        let (row, outcome) = row_after([2, 2, 2, 2], Direction::Left);

        assert_eq!(row, vec![4, 4, 0, 0]);
        assert_eq!(outcome.score_delta, 8);
        assert_eq!(outcome.highest_merge, Tile::new(4));
    }

    #[test]
    fn test_merged_tile_does_not_merge_again() {
        let (row, outcome) = row_after([4, 2, 2, 0], Direction::Left);

        assert_eq!(row, vec![4, 4, 0, 0]);
        assert_eq!(outcome.score_delta, 4);
    }

    #[test]
    fn test_merge_nearest_to_edge_first() {
        let (row, _) = row_after([2, 2, 2, 0], Direction::Right);
        assert_eq!(row, vec![0, 0, 2, 4]);

        let (row, _) = row_after([2, 2, 2, 0], Direction::Left);
        assert_eq!(row, vec![4, 2, 0, 0]);
    }

    #[test]
    fn test_merge_across_gap() {
        let (row, outcome) = row_after([8, 0, 0, 8], Direction::Right);

        assert_eq!(row, vec![0, 0, 0, 16]);
        assert_eq!(outcome.highest_merge, Tile::new(16));
    }

    #[test]
    fn test_blocked_tile_stays_in_place() {
        let (row, outcome) = row_after([2, 4, 8, 16], Direction::Left);

        assert_eq!(row, vec![2, 4, 8, 16]);
        assert!(!outcome.changed);
    }

    #[test]
    fn test_empty_grid_is_unchanged() {
        let mut g = Grid::new(4);
        for direction in Direction::ALL {
            assert_eq!(slide(&mut g, direction), SlideOutcome::default());
        }
    }

    #[test]
    fn test_highest_merge_is_maximum() {
        let mut g = grid(&[[2, 2, 0, 0], [32, 32, 0, 0], [8, 8, 0, 0], [0; 4]]);
        let outcome = slide(&mut g, Direction::Left);

        assert_eq!(outcome.highest_merge, Tile::new(64));
        assert_eq!(outcome.score_delta, 4 + 64 + 16);
    }

    #[test]
    fn test_single_cell_grid() {
        let mut g = Grid::from_rows(&[vec![2]]).unwrap();
        for direction in Direction::ALL {
            assert!(!slide(&mut g, direction).changed);
        }
        assert!(!has_legal_moves(&g));
    }

    #[test]
    fn test_can_slide_does_not_mutate() {
        let g = grid(&[[0, 0, 0, 2], [0; 4], [0; 4], [0; 4]]);

        assert!(can_slide(&g, Direction::Left));
        assert!(can_slide(&g, Direction::Down));
        assert!(!can_slide(&g, Direction::Right));
        assert!(!can_slide(&g, Direction::Up));
        assert_eq!(g.to_values()[0], vec![0, 0, 0, 2]);
    }

    #[test]
    fn test_maximal_tiles_do_not_merge() {
        let max = Tile::MAX.value();
        let mut g = Grid::from_rows(&[vec![max, max], vec![0, 0]]).unwrap();

        let outcome = slide(&mut g, Direction::Left);

        assert!(!outcome.changed);
        assert_eq!(outcome.score_delta, 0);
        assert_eq!(g.to_values(), vec![vec![max, max], vec![0, 0]]);
        assert!(!can_slide(&g, Direction::Right));
        assert!(can_slide(&g, Direction::Down));
    }

    #[test]
    fn test_merge_up_to_maximal_tile() {
        let half = 1 << 30;
        let max = Tile::MAX.value();
        let mut g = Grid::from_rows(&[vec![half, half, max], vec![0, 0, 0], vec![0, 0, 0]]).unwrap();

        let outcome = slide(&mut g, Direction::Left);

        assert_eq!(g.to_values()[0], vec![max, max, 0]);
        assert_eq!(outcome.highest_merge, Some(Tile::MAX));
        assert_eq!(outcome.score_delta, u64::from(max));

        // The two maximal tiles now sit side by side and stay apart.
        let outcome = slide(&mut g, Direction::Left);
        assert!(!outcome.changed);
    }

    #[test]
    fn test_maximal_pair_slides_without_merging() {
        let max = Tile::MAX.value();
        let (row, outcome) = row_after([0, max, 0, max], Direction::Left);

        assert_eq!(row, vec![max, max, 0, 0]);
        assert!(outcome.changed);
        assert!(!outcome.merged());
    }

    #[test]
    fn test_has_legal_moves() {
        let stuck = grid(&[[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);
        assert!(!has_legal_moves(&stuck));

        let mergeable = grid(&[[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 4]]);
        assert!(has_legal_moves(&mergeable));
    }
}
