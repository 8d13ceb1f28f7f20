//! Plain-text board rendering.

use std::fmt;

use crate::core::Grid;

/// Width of the field a cell value is centred in.
const CELL_WIDTH: usize = 6;
/// Dashes per column in a horizontal rule.
const RULE_PER_COLUMN: usize = 8;

/// `Display` adapter drawing a grid as a table.
///
/// ```
/// use tile_merge::core::Grid;
/// use tile_merge::render::TextBoard;
///
/// let grid = Grid::from_rows(&[vec![2, 0], vec![0, 16]]).unwrap();
/// let text = TextBoard::new(&grid).to_string();
///
/// assert_eq!(
///     text,
///     "----------------\n  2    |       |\n----------------\n       |  16   |\n----------------\n"
/// );
/// ```
#[derive(Clone, Copy, Debug)]
pub struct TextBoard<'a> {
    grid: &'a Grid,
}

impl<'a> TextBoard<'a> {
    #[must_use]
    pub fn new(grid: &'a Grid) -> Self {
        Self { grid }
    }

    /// The horizontal rule printed between rows.
    #[must_use]
    pub fn rule(&self) -> String {
        "-".repeat(RULE_PER_COLUMN * self.grid.size())
    }
}

impl fmt::Display for TextBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = self.rule();
        writeln!(f, "{rule}")?;

        for row in self.grid.rows() {
            for cell in row {
                match cell {
                    Some(tile) => write!(f, "{:^width$} |", tile, width = CELL_WIDTH)?,
                    None => write!(f, "{:^width$} |", "", width = CELL_WIDTH)?,
                }
            }
            writeln!(f)?;
            writeln!(f, "{rule}")?;
        }

        Ok(())
    }
}
