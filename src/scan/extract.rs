use crate::error::RustyRangeError;
use crate::spreadsheet::{Grid, Range, Table};

/// Texts of a column strip in row order.
fn column_texts<G: Grid + ?Sized>(grid: &G, column: &Range) -> Result<Vec<String>, RustyRangeError> {
    Ok(grid
        .texts(column)?
        .into_iter()
        .map(|record| record.into_iter().next().unwrap_or_default())
        .collect())
}

/// Texts of the first column of `range`, top to bottom.
pub fn first_column_values<G: Grid + ?Sized>(grid: &G, range: &Range) -> Result<Vec<String>, RustyRangeError> {
    column_texts(grid, &range.first_column())
}

/// Texts of the named table column between its header and totals rows.
///
/// # Errors
///
/// `TableError::ColumnNotFound` when the table has no column with that exact name,
/// or the name sits past the width of the table range.
pub fn table_column_values<G: Grid + ?Sized>(
    grid: &G,
    table: &Table,
    name: &str,
) -> Result<Vec<String>, RustyRangeError> {
    match table.column_body(name)? {
        Some(column) => column_texts(grid, &column),
        None => Ok(Vec::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spreadsheet::{MemoryGrid, TableError};
    use pretty_assertions::assert_eq;

    fn sales() -> (MemoryGrid, Table) {
        let grid = MemoryGrid::from_rows(6, 3, vec![
            vec!["Date", "Amount"],
            vec!["2024-01-01", "10"],
            vec!["2024-01-02", ""],
            vec!["2024-01-03", "7"],
            vec!["Total", "17"],
        ]).unwrap();
        let table = Table::from_header(&grid, "Sales", Range::new(0, 0, 5, 2).unwrap(), true).unwrap();
        (grid, table)
    }

    #[test]
    fn first_column() {
        let (grid, _) = sales();
        let values = first_column_values(&grid, &Range::new(1, 0, 3, 2).unwrap()).unwrap();

        assert_eq!(values, vec!["2024-01-01", "2024-01-02", "2024-01-03"]);
    }

    #[test]
    fn table_column_between_header_and_totals() {
        let (grid, table) = sales();

        assert_eq!(table_column_values(&grid, &table, "Amount").unwrap(), vec!["10", "", "7"]);
        assert_eq!(
            table_column_values(&grid, &table, "Date").unwrap(),
            vec!["2024-01-01", "2024-01-02", "2024-01-03"]
        );
    }

    #[test]
    fn table_column_not_found() {
        let (grid, table) = sales();
        let error = table_column_values(&grid, &table, "Revenue").unwrap_err();

        assert!(matches!(
            error,
            RustyRangeError::TableError(TableError::ColumnNotFound(ref name)) if name == "Revenue"
        ));
        assert_eq!(error.to_string(), "Could not retrieve Revenue column");
    }

    #[test]
    fn table_column_past_range_width() {
        let (grid, mut table) = sales();
        table.columns.push("Extra".to_owned());

        assert!(matches!(
            table_column_values(&grid, &table, "Extra"),
            Err(RustyRangeError::TableError(TableError::ColumnNotFound(ref name))) if name == "Extra"
        ));
        assert_eq!(table_column_values(&grid, &table, "Amount").unwrap(), vec!["10", "", "7"]);
    }

    #[test]
    fn table_without_body() {
        let (grid, _) = sales();
        let table = Table::from_header(&grid, "Header", Range::new(0, 0, 1, 2).unwrap(), false).unwrap();

        assert_eq!(table_column_values(&grid, &table, "Amount").unwrap(), Vec::<String>::new());
    }
}
