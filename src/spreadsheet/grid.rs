use crate::spreadsheet::range::{Range, RangeError};
use crate::spreadsheet::table::Table;
use anyhow::Result;
use thiserror::Error;

/// Failure of the host's native used-range query.
///
/// Kept apart from ordinary host errors because it is the one failure the
/// engine recovers from, by reconstructing the used region with a scan.
#[derive(Error, Debug, PartialEq)]
pub enum HostAccessError {
    #[error("Used range query is not supported by this host")]
    Unsupported,

    #[error("Used range query failed: {0}")]
    QueryFailed(String),
}

/// Capability interface a host exposes over its 2-D worksheet grid.
///
/// Adapters implement the four required methods; the remaining methods have
/// default implementations built on top of them. Indexes are 0-based. Any
/// adapter failure is reported as an `anyhow::Error` and is propagated to the
/// caller unchanged.
pub trait Grid {
    /// Number of addressable rows.
    fn row_count(&self) -> usize;

    /// Number of addressable columns.
    fn column_count(&self) -> usize;

    /// Reads the display text of every cell in `range`, row by row.
    fn texts(&self, range: &Range) -> Result<Vec<Vec<String>>>;

    /// Deletes the cells of `range` and shifts the cells below it up.
    fn delete_rows(&mut self, range: &Range) -> Result<()>;

    /// Finds the first cell in `range` whose text equals `value` exactly
    /// (case-sensitive, whole cell), searching row by row.
    fn find(&self, range: &Range, value: &str) -> Result<Option<Range>> {
        let texts = self.texts(range)?;
        for (row_offset, record) in texts.iter().enumerate() {
            if let Some(col_offset) = record.iter().position(|text| text == value) {
                return Ok(Some(Range::cell(
                    range.row_index() + row_offset,
                    range.column_index() + col_offset,
                )));
            }
        }
        Ok(None)
    }

    /// The host's own idea of the used range. Hosts without one keep the default.
    fn used_range(&self) -> Result<Range, HostAccessError> {
        Err(HostAccessError::Unsupported)
    }

    /// Tables defined on this grid, in host order.
    fn tables(&self) -> Result<Vec<Table>> {
        Ok(Vec::new())
    }

    /// Builds a range by indexes, checking it fits inside the grid.
    fn range_by_indexes(
        &self,
        row: usize,
        col: usize,
        row_count: usize,
        col_count: usize,
    ) -> Result<Range, RangeError> {
        let range = Range::new(row, col, row_count, col_count)?;
        if range.last_row_index() >= self.row_count() || range.last_column_index() >= self.column_count() {
            return Err(RangeError::OutOfBounds {
                range: range.to_string(),
                rows: self.row_count(),
                columns: self.column_count(),
            });
        }
        Ok(range)
    }

    /// Single cell at (row, col).
    fn cell(&self, row: usize, col: usize) -> Result<Range, RangeError> {
        self.range_by_indexes(row, col, 1, 1)
    }

    /// Full-width row strip.
    fn entire_row(&self, row: usize) -> Result<Range, RangeError> {
        self.range_by_indexes(row, 0, 1, self.column_count())
    }

    /// Full-height column strip.
    fn entire_column(&self, col: usize) -> Result<Range, RangeError> {
        self.range_by_indexes(0, col, self.row_count(), 1)
    }
}
