use crate::error::RustyRangeError;
use crate::scan::boundary::scan_boundary;
use crate::scan::Direction;
use crate::spreadsheet::{Criteria, Grid, Range};
use log::warn;

/// Range anchored at the first cell spanning `row_count` rows and `column_count` columns.
pub fn worksheet_range<G: Grid + ?Sized>(
    grid: &G,
    row_count: usize,
    column_count: usize,
) -> Result<Range, RustyRangeError> {
    Ok(grid.range_by_indexes(0, 0, row_count, column_count)?)
}

/// Rebuilds the used range by scanning, for hosts whose native query is
/// unavailable. Rows and columns are scanned independently with the same
/// threshold; the result spans from the origin to both last indexes inclusive.
pub fn reconstruct_used_region<G: Grid + ?Sized>(grid: &G, threshold: usize) -> Result<Range, RustyRangeError> {
    let last_row = scan_boundary(grid, Direction::Rows, threshold)?;
    let last_column = scan_boundary(grid, Direction::Columns, threshold)?;
    worksheet_range(grid, last_row + 1, last_column + 1)
}

/// Returns the block of the grid that holds its data.
///
/// 1. The range of the first table, if the grid has any tables.
/// 2. Otherwise the host's native used range.
/// 3. If the host cannot answer that query, the range rebuilt by
///    [`reconstruct_used_region`] with `criteria.threshold`.
///
/// Only the used-range query failure is recovered from; every other error is returned.
pub fn data_range<G: Grid + ?Sized>(grid: &G, criteria: &Criteria) -> Result<Range, RustyRangeError> {
    criteria.validate()?;
    if let Some(table) = grid.tables()?.into_iter().next() {
        return Ok(table.range);
    }
    match grid.used_range() {
        Ok(range) => Ok(range),
        Err(error) => {
            warn!("Could not retrieve the used range: {error}. Scanning with threshold {}", criteria.threshold);
            reconstruct_used_region(grid, criteria.threshold)
        }
    }
}
