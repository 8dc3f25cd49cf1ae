use crate::error::RustyRangeError;
use crate::scan::probe::probe_density;
use crate::scan::ScanError;
use crate::spreadsheet::{Grid, Range};
use log::debug;

/// Deletes every empty row of `range` from the grid and returns the range
/// shrunk by the number of rows removed.
///
/// Rows are checked from the bottom of the range up to and including its first
/// row, and deleted only after the whole range has been checked. Deleting in
/// that bottom-up order keeps the positions of the remaining collected rows valid.
///
/// This mutates the grid: cells below each deleted row shift up.
///
/// # Errors
///
/// Returns `ScanError::EmptyRange`, without touching the grid, when every row of
/// the range is empty. Host errors are propagated.
pub fn compact_rows<G: Grid + ?Sized>(grid: &mut G, range: &Range) -> Result<Range, RustyRangeError> {
    let mut empty_rows = Vec::new();
    for row in range.rows().rev() {
        if probe_density(&*grid, &row)? == 0 {
            empty_rows.push(row);
        }
    }
    if empty_rows.len() == range.row_count() {
        return Err(ScanError::EmptyRange(range.to_string()).into());
    }

    for row in &empty_rows {
        grid.delete_rows(row)?;
    }
    debug!("Removed {} empty rows from {range}", empty_rows.len());
    Ok(range.shrink_rows(empty_rows.len())?)
}
