use crate::error::RustyRangeError;
use crate::spreadsheet::{Grid, Range};

/// Counts the cells in `strip` whose text is not blank after trimming.
/// Zero means the strip is empty.
pub fn probe_density<G: Grid + ?Sized>(grid: &G, strip: &Range) -> Result<usize, RustyRangeError> {
    let count = grid
        .texts(strip)?
        .iter()
        .flatten()
        .filter(|text| !text.trim().is_empty())
        .count();
    Ok(count)
}
