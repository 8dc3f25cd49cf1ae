use crate::spreadsheet::reference::{index_to_reference, reference_to_index};
use std::fmt::Display;
use thiserror::Error;

/// Errors related to range construction and A1-style address parsing.
#[derive(Error, Debug, PartialEq)]
pub enum RangeError {
    #[error("Invalid range format '{0}'")]
    FormatError(String),

    #[error("Range must span at least one row and one column, got {rows}x{columns}")]
    EmptyExtent { rows: usize, columns: usize },

    #[error("Range of {rows}x{columns} cells at row {row}, column {col} runs past the last addressable index")]
    Overflow {
        row: usize,
        col: usize,
        rows: usize,
        columns: usize,
    },

    #[error("Range '{range}' is outside the {rows}x{columns} grid")]
    OutOfBounds {
        range: String,
        rows: usize,
        columns: usize,
    },
}

/// A rectangular block of cells addressed by its top-left corner and extent.
///
/// All coordinates are 0-based and absolute within the grid. A `Range` always
/// spans at least one row and one column; constructors reject empty extents.
/// A range with a single row or a single column is a strip.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Range {
    row: usize,
    col: usize,
    row_count: usize,
    col_count: usize,
}

impl Range {
    /// Creates a range, rejecting zero row or column counts and corners past `usize::MAX`.
    pub fn new(row: usize, col: usize, row_count: usize, col_count: usize) -> Result<Self, RangeError> {
        if row_count == 0 || col_count == 0 {
            return Err(RangeError::EmptyExtent {
                rows: row_count,
                columns: col_count,
            });
        }
        if row.checked_add(row_count - 1).is_none() || col.checked_add(col_count - 1).is_none() {
            return Err(RangeError::Overflow {
                row,
                col,
                rows: row_count,
                columns: col_count,
            });
        }
        Ok(Self {
            row,
            col,
            row_count,
            col_count,
        })
    }

    /// Creates a single-cell range.
    pub const fn cell(row: usize, col: usize) -> Self {
        Self {
            row,
            col,
            row_count: 1,
            col_count: 1,
        }
    }

    pub const fn row_index(&self) -> usize {
        self.row
    }

    pub const fn column_index(&self) -> usize {
        self.col
    }

    pub const fn row_count(&self) -> usize {
        self.row_count
    }

    pub const fn column_count(&self) -> usize {
        self.col_count
    }

    /// Index of the bottom row (inclusive).
    pub const fn last_row_index(&self) -> usize {
        self.row + (self.row_count - 1)
    }

    /// Index of the rightmost column (inclusive).
    pub const fn last_column_index(&self) -> usize {
        self.col + (self.col_count - 1)
    }

    /// Checks if the absolute cell (row, col) lies inside this range.
    pub const fn contains(&self, row: usize, col: usize) -> bool {
        self.row <= row && row <= self.last_row_index() && self.col <= col && col <= self.last_column_index()
    }

    /// Returns the top row strip.
    pub fn first_row(&self) -> Range {
        Range {
            row_count: 1,
            ..*self
        }
    }

    /// Returns the leftmost column strip.
    pub fn first_column(&self) -> Range {
        Range {
            col_count: 1,
            ..*self
        }
    }

    /// Returns the row strip at `offset` rows below the top of this range.
    pub fn row_at(&self, offset: usize) -> Option<Range> {
        (offset < self.row_count).then(|| Range {
            row: self.row + offset,
            col: self.col,
            row_count: 1,
            col_count: self.col_count,
        })
    }

    /// Returns the column strip at `offset` columns right of the left edge of this range.
    pub fn column_at(&self, offset: usize) -> Option<Range> {
        (offset < self.col_count).then(|| Range {
            row: self.row,
            col: self.col + offset,
            row_count: self.row_count,
            col_count: 1,
        })
    }

    /// Iterates over the row strips of this range from top to bottom.
    pub fn rows(&self) -> impl DoubleEndedIterator<Item = Range> + ExactSizeIterator {
        let range = *self;
        (0..range.row_count).map(move |offset| Range {
            row: range.row + offset,
            col: range.col,
            row_count: 1,
            col_count: range.col_count,
        })
    }

    /// Re-bases this range so the absolute cell (row, col) becomes its top-left corner.
    ///
    /// Rows above and columns left of the new corner are dropped; everything
    /// at or after it is kept. Returns None if the cell is outside the range.
    pub fn rebase(&self, row: usize, col: usize) -> Option<Range> {
        self.contains(row, col).then(|| Range {
            row,
            col,
            row_count: self.row_count - (row - self.row),
            col_count: self.col_count - (col - self.col),
        })
    }

    /// Returns this range with `count` fewer rows at the bottom.
    pub fn shrink_rows(&self, count: usize) -> Result<Range, RangeError> {
        Range::new(
            self.row,
            self.col,
            self.row_count.saturating_sub(count),
            self.col_count,
        )
    }
}

impl Display for Range {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let start = index_to_reference(self.row, self.col);
        if self.row_count == 1 && self.col_count == 1 {
            write!(f, "{start}")
        } else {
            let end = index_to_reference(self.last_row_index(), self.last_column_index());
            write!(f, "{start}:{end}")
        }
    }
}

impl TryFrom<&str> for Range {
    type Error = RangeError;

    /// Parses an A1-style address ("B2" or "B2:D5", optionally with `$` markers).
    /// Corners given in any order are normalized to top-left and bottom-right.
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let format_error = || RangeError::FormatError(value.to_owned());
        let mut corners = value.split(':');
        let (first_row, first_col) = corners
            .next()
            .and_then(reference_to_index)
            .ok_or_else(format_error)?;
        let (second_row, second_col) = match corners.next() {
            Some(corner) => reference_to_index(corner).ok_or_else(format_error)?,
            None => (first_row, first_col),
        };
        if corners.next().is_some() {
            return Err(format_error());
        }
        let (row_lower, row_upper) = (first_row.min(second_row), first_row.max(second_row));
        let (col_lower, col_upper) = (first_col.min(second_col), first_col.max(second_col));
        Range::new(
            row_lower,
            col_lower,
            row_upper - row_lower + 1,
            col_upper - col_lower + 1,
        )
    }
}
