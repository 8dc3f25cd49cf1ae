use crate::error::RustyRangeError;
use crate::scan::probe::probe_density;
use crate::scan::{Direction, ScanError};
use crate::spreadsheet::criteria::check_threshold;
use crate::spreadsheet::Grid;
use log::debug;

/// Finds the index of the last row or column that contains data.
///
/// Walks strips outward from the origin. Every empty strip uses up one unit of
/// `threshold`; strips with data do not. The walk stops once the tolerance is
/// used up or the edge of the grid is reached, and the index of the last strip
/// that had data is returned. Trailing empty strips are never part of the result.
///
/// # Errors
///
/// - `ScanError::InvalidThreshold` when `threshold` is 0
/// - `ScanError::NoDataFound` when no strip with data is seen before the walk stops
/// - any host error raised while reading strip texts
pub fn scan_boundary<G: Grid + ?Sized>(
    grid: &G,
    direction: Direction,
    threshold: usize,
) -> Result<usize, RustyRangeError> {
    check_threshold(threshold)?;
    let extent = direction.extent(grid);
    let mut tolerance = threshold;
    let mut last_with_data = None;
    let mut index = 0;
    while tolerance > 0 && index < extent {
        let strip = direction.strip(grid, index)?;
        if probe_density(grid, &strip)? == 0 {
            tolerance -= 1;
        } else {
            last_with_data = Some(index);
        }
        index += 1;
    }
    debug!("{direction} scan visited {index} strips, last with data: {last_with_data:?}");
    last_with_data.ok_or_else(|| ScanError::NoDataFound { direction, threshold }.into())
}
