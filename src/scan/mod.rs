//! # Range Inference Engine
//!
//! Threshold-based scanning that finds where the data in a grid ends, the
//! compatibility-mode reconstruction of the used range, anchoring a range to
//! a known cell, and compaction of empty rows.
//!
//! Every operation is a sequence of blocking calls on a [`Grid`](crate::spreadsheet::Grid).
//! Scans are linear in the number of strips visited, so they are meant for
//! hosts that cannot report their used range directly.
use crate::spreadsheet::{Grid, Range, RangeError};
use std::fmt::Display;
use thiserror::Error;

pub mod anchor;
pub mod boundary;
pub mod compact;
pub mod extract;
pub mod probe;
pub mod used_region;

/// Errors raised by the scanning and anchoring operations.
#[derive(Error, Debug, PartialEq)]
pub enum ScanError {
    /// Threshold of zero consecutive empty strips
    #[error("Invalid threshold {0}: at least one empty strip must be tolerated")]
    InvalidThreshold(usize),

    /// Scan exhausted its tolerance without seeing any data
    #[error("No {direction} with data found before {threshold} empty {direction}s")]
    NoDataFound { direction: Direction, threshold: usize },

    /// Anchor address does not resolve to a cell inside the range
    #[error("Could not retrieve the cell with address {0}")]
    AddressNotFound(String),

    /// No cell inside the range holds the anchor value
    #[error("Could not retrieve the cell with value {0}")]
    ValueNotFound(String),

    /// Every row of the range is empty, so nothing would remain after compaction
    #[error("Range '{0}' contains no rows with data")]
    EmptyRange(String),
}

/// Axis along which a boundary scan walks away from the origin.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Walk rows downward
    Rows,
    /// Walk columns rightward
    Columns,
}

impl Direction {
    /// Number of strips the grid has along this axis.
    ///
    /// A grid with no cells across the axis has no strips along it either.
    pub fn extent<G: Grid + ?Sized>(&self, grid: &G) -> usize {
        match self {
            Direction::Rows if grid.column_count() == 0 => 0,
            Direction::Columns if grid.row_count() == 0 => 0,
            Direction::Rows => grid.row_count(),
            Direction::Columns => grid.column_count(),
        }
    }

    /// Full-length strip at `index` along this axis.
    pub fn strip<G: Grid + ?Sized>(&self, grid: &G, index: usize) -> Result<Range, RangeError> {
        match self {
            Direction::Rows => grid.entire_row(index),
            Direction::Columns => grid.entire_column(index),
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Rows => write!(f, "row"),
            Direction::Columns => write!(f, "column"),
        }
    }
}
