use crate::error::RustyRangeError;
use crate::scan::compact::compact_rows;
use crate::scan::ScanError;
use crate::spreadsheet::reference::index_to_reference;
use crate::spreadsheet::{Criteria, Grid, Range};

/// The cell a range is re-based on.
#[derive(Clone, Debug, PartialEq)]
pub enum AnchorTarget {
    /// A1-style address, e.g. "B3". For a multi-cell address the top-left cell is used.
    Address(String),
    /// Exact, case-sensitive cell text.
    Value(String),
    /// Absolute 0-based cell position.
    Cell { row: usize, col: usize },
}

impl AnchorTarget {
    /// Resolves the target to an absolute (row, col) inside `range`.
    fn locate<G: Grid + ?Sized>(&self, grid: &G, range: &Range) -> Result<(usize, usize), RustyRangeError> {
        match self {
            AnchorTarget::Address(address) => {
                let cell = Range::try_from(address.as_str())?;
                if range.contains(cell.row_index(), cell.column_index()) {
                    Ok((cell.row_index(), cell.column_index()))
                } else {
                    Err(ScanError::AddressNotFound(address.to_owned()).into())
                }
            }
            AnchorTarget::Value(value) => grid
                .find(range, value)?
                .map(|cell| (cell.row_index(), cell.column_index()))
                .ok_or_else(|| ScanError::ValueNotFound(value.to_owned()).into()),
            AnchorTarget::Cell { row, col } => {
                if range.contains(*row, *col) {
                    Ok((*row, *col))
                } else {
                    Err(ScanError::AddressNotFound(index_to_reference(*row, *col)).into())
                }
            }
        }
    }
}

/// Returns `range` re-based so the target cell becomes its top-left corner.
///
/// Rows above and columns left of the target are dropped. With `compact` set,
/// empty rows of the re-based range are then deleted from the grid
/// (see [`compact_rows`]).
///
/// # Errors
///
/// - `ScanError::AddressNotFound` / `ScanError::ValueNotFound` when the target is not in `range`;
///   a cell position outside `range` reports its A1 address
/// - `RangeError::FormatError` for a malformed address
pub fn anchor_range<G: Grid + ?Sized>(
    grid: &mut G,
    range: &Range,
    target: &AnchorTarget,
    compact: bool,
) -> Result<Range, RustyRangeError> {
    let (row, col) = target.locate(&*grid, range)?;
    let anchored = range
        .rebase(row, col)
        .ok_or_else(|| ScanError::AddressNotFound(Range::cell(row, col).to_string()))?;
    if compact {
        compact_rows(grid, &anchored)
    } else {
        Ok(anchored)
    }
}

/// [`anchor_range`] on a cell address, compacting when `criteria.remove_empty_rows` is set.
pub fn anchor_range_by_address<G: Grid + ?Sized>(
    grid: &mut G,
    range: &Range,
    address: &str,
    criteria: &Criteria,
) -> Result<Range, RustyRangeError> {
    anchor_range(
        grid,
        range,
        &AnchorTarget::Address(address.to_owned()),
        criteria.remove_empty_rows,
    )
}

/// [`anchor_range`] on a cell value, compacting when `criteria.remove_empty_rows` is set.
pub fn anchor_range_by_value<G: Grid + ?Sized>(
    grid: &mut G,
    range: &Range,
    value: &str,
    criteria: &Criteria,
) -> Result<Range, RustyRangeError> {
    anchor_range(
        grid,
        range,
        &AnchorTarget::Value(value.to_owned()),
        criteria.remove_empty_rows,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spreadsheet::{MemoryGrid, RangeError};
    use pretty_assertions::assert_eq;

    fn report() -> MemoryGrid {
        MemoryGrid::from_rows(10, 4, vec![
            vec!["Report", "", "", ""],
            vec!["", "", "", ""],
            vec!["", "Name", "Total", ""],
            vec!["", "ann", "3", ""],
            vec!["", "", "", ""],
            vec!["", "bob", "4", ""],
        ]).unwrap()
    }

    #[test]
    fn anchor_by_value() {
        let mut grid = report();
        let range = Range::new(0, 0, 6, 4).unwrap();
        let anchored = anchor_range(&mut grid, &range, &AnchorTarget::Value("Name".to_owned()), false).unwrap();

        assert_eq!(anchored, Range::new(2, 1, 4, 3).unwrap());
        assert_eq!(grid.value(4, 1), "");
    }

    #[test]
    fn anchor_by_value_is_exact_and_case_sensitive() {
        let mut grid = report();
        let range = Range::new(0, 0, 6, 4).unwrap();

        assert!(matches!(
            anchor_range(&mut grid, &range, &AnchorTarget::Value("name".to_owned()), false),
            Err(RustyRangeError::ScanError(ScanError::ValueNotFound(ref value))) if value == "name"
        ));
        assert!(matches!(
            anchor_range(&mut grid, &range, &AnchorTarget::Value("Nam".to_owned()), false),
            Err(RustyRangeError::ScanError(ScanError::ValueNotFound(_)))
        ));
    }

    #[test]
    fn anchor_by_value_not_found() {
        let mut grid = report();
        let range = Range::new(0, 0, 6, 4).unwrap();
        let error = anchor_range_by_value(&mut grid, &range, "TOTAL", &Criteria::default()).unwrap_err();

        assert!(matches!(error, RustyRangeError::ScanError(ScanError::ValueNotFound(ref value)) if value == "TOTAL"));
        assert_eq!(error.to_string(), "Could not retrieve the cell with value TOTAL");
    }

    #[test]
    fn anchor_by_address() {
        let mut grid = report();
        let range = Range::new(0, 0, 6, 4).unwrap();

        assert_eq!(
            anchor_range_by_address(&mut grid, &range, "C3", &Criteria::default()).unwrap(),
            Range::new(2, 2, 4, 2).unwrap()
        );
        assert_eq!(
            anchor_range_by_address(&mut grid, &range, "$b$3:c4", &Criteria::default()).unwrap(),
            Range::new(2, 1, 4, 3).unwrap()
        );
    }

    #[test]
    fn anchor_by_address_outside_range() {
        let mut grid = report();
        let range = Range::new(2, 1, 4, 2).unwrap();

        assert!(matches!(
            anchor_range_by_address(&mut grid, &range, "A1", &Criteria::default()),
            Err(RustyRangeError::ScanError(ScanError::AddressNotFound(ref address))) if address == "A1"
        ));
        assert!(matches!(
            anchor_range_by_address(&mut grid, &range, "not an address", &Criteria::default()),
            Err(RustyRangeError::RangeError(RangeError::FormatError(_)))
        ));
    }

    #[test]
    fn anchor_by_cell_position() {
        let mut grid = report();
        let range = Range::new(0, 0, 6, 4).unwrap();
        let anchored = anchor_range(&mut grid, &range, &AnchorTarget::Cell { row: 2, col: 1 }, false).unwrap();

        assert_eq!(anchored, Range::new(2, 1, 4, 3).unwrap());
    }

    #[test]
    fn anchor_by_cell_position_outside_range() {
        let mut grid = report();
        let range = Range::new(2, 1, 4, 2).unwrap();
        let error = anchor_range(&mut grid, &range, &AnchorTarget::Cell { row: 0, col: 0 }, false).unwrap_err();

        assert!(matches!(error, RustyRangeError::ScanError(ScanError::AddressNotFound(ref address)) if address == "A1"));
        assert!(matches!(
            anchor_range(&mut grid, &range, &AnchorTarget::Cell { row: 5, col: 3 }, true),
            Err(RustyRangeError::ScanError(ScanError::AddressNotFound(ref address))) if address == "D6"
        ));
        assert_eq!(grid.value(5, 1), "bob");
    }

    #[test]
    fn anchor_and_compact() {
        let mut grid = MemoryGrid::from_rows(8, 2, vec![
            vec!["row0", "x"],
            vec!["", ""],
            vec!["row2", ""],
            vec!["", ""],
            vec!["row4", ""],
            vec!["row5", "y"],
        ]).unwrap();
        let range = Range::new(0, 0, 6, 2).unwrap();
        let criteria = Criteria::default().with_remove_empty_rows(true);
        let anchored = anchor_range_by_value(&mut grid, &range, "row0", &criteria).unwrap();

        assert_eq!(anchored, Range::new(0, 0, 4, 2).unwrap());
        let rows: Vec<&str> = (0..6).map(|row| grid.value(row, 0)).collect();
        assert_eq!(rows, vec!["row0", "row2", "row4", "row5", "", ""]);
        assert_eq!(grid.value(3, 1), "y");
    }

    #[test]
    fn anchor_compacts_only_anchored_rows() {
        let mut grid = report();
        let range = Range::new(0, 0, 6, 4).unwrap();
        let anchored = anchor_range(&mut grid, &range, &AnchorTarget::Value("Name".to_owned()), true).unwrap();

        assert_eq!(anchored, Range::new(2, 1, 3, 3).unwrap());
        assert_eq!(grid.value(1, 0), "");
        assert_eq!(grid.value(4, 1), "bob");
        assert_eq!(grid.value(4, 0), "");
    }
}
