use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// The geometry of a crossword puzzle: a rectangular mask of fillable and
/// blocked cells.
///
/// A `Grid` knows nothing about words or constraints; it is the raw input from
/// which [`crate::model::Model`] derives variables and overlaps. Parsing of
/// structure files is a caller concern — a `Grid` is always built
/// programmatically, either from a row-major mask via [`Grid::new`] or from
/// string rows via [`Grid::from_pattern`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    height: usize,
    width: usize,
    /// Row-major fillable mask, `height * width` entries.
    cells: Vec<bool>,
}

impl Grid {
    /// Creates a grid from a row-major fillable mask.
    ///
    /// Returns an error if either dimension is zero or the mask length does
    /// not match `height * width`.
    pub fn new(height: usize, width: usize, cells: Vec<bool>) -> Result<Self> {
        if height == 0 || width == 0 {
            return Err(Error::EmptyGrid);
        }
        if cells.len() != height * width {
            return Err(Error::GridShape {
                height,
                width,
                cells: cells.len(),
            });
        }
        Ok(Self {
            height,
            width,
            cells,
        })
    }

    /// Creates a grid from string rows, where `'_'` marks a fillable cell and
    /// any other character a blocked one.
    ///
    /// All rows must have the same length.
    pub fn from_pattern<S: AsRef<str>>(rows: &[S]) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map(|r| r.as_ref().chars().count()).unwrap_or(0);
        if height == 0 || width == 0 {
            return Err(Error::EmptyGrid);
        }

        let mut cells = Vec::with_capacity(height * width);
        for (row, line) in rows.iter().enumerate() {
            let line = line.as_ref();
            let found = line.chars().count();
            if found != width {
                return Err(Error::RaggedPattern {
                    row,
                    expected: width,
                    found,
                });
            }
            cells.extend(line.chars().map(|c| c == '_'));
        }

        Self::new(height, width, cells)
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns `true` if the cell at `(row, col)` accepts a letter.
    ///
    /// # Panics
    ///
    /// Panics if `(row, col)` is outside the grid.
    pub fn is_fillable(&self, row: usize, col: usize) -> bool {
        assert!(row < self.height && col < self.width, "cell out of bounds");
        self.cells[row * self.width + col]
    }
}
