use crate::spreadsheet::grid::{Grid, HostAccessError};
use crate::spreadsheet::range::{Range, RangeError};
use crate::spreadsheet::table::Table;
use anyhow::{bail, Result};

/// In-memory grid of text cells with fixed dimensions.
///
/// Deleting rows shifts the cells below up and refills the bottom with blanks,
/// so the grid keeps its dimensions like a worksheet does.
#[derive(Clone, Debug)]
pub struct MemoryGrid {
    cells: Vec<Vec<String>>,
    rows: usize,
    columns: usize,
    tables: Vec<Table>,
    native_used_range: bool,
}

impl MemoryGrid {
    /// Creates an empty grid of `rows` x `columns` blank cells.
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            cells: vec![vec![String::new(); columns]; rows],
            rows,
            columns,
            tables: Vec::new(),
            native_used_range: false,
        }
    }

    /// Creates a grid and fills it from the origin with `data`, one vector per row.
    /// Rows may be ragged; missing cells stay blank.
    pub fn from_rows(rows: usize, columns: usize, data: Vec<Vec<&str>>) -> Result<Self, RangeError> {
        let mut grid = Self::new(rows, columns);
        for (row, record) in data.into_iter().enumerate() {
            for (col, value) in record.into_iter().enumerate() {
                grid.set(row, col, value)?;
            }
        }
        Ok(grid)
    }

    /// Writes `value` into cell (row, col).
    pub fn set(&mut self, row: usize, col: usize, value: &str) -> Result<(), RangeError> {
        let range = self.cell(row, col)?;
        self.cells[range.row_index()][range.column_index()] = value.to_owned();
        Ok(())
    }

    /// Text of cell (row, col); blank outside the grid.
    pub fn value(&self, row: usize, col: usize) -> &str {
        self.cells
            .get(row)
            .and_then(|record| record.get(col))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Registers a table on this grid.
    pub fn add_table(&mut self, table: Table) {
        self.tables.push(table);
    }

    /// Enables or disables the native used-range query.
    /// When disabled the grid behaves like a host without one.
    pub fn with_native_used_range(mut self, enabled: bool) -> Self {
        self.native_used_range = enabled;
        self
    }

    fn check(&self, range: &Range) -> Result<()> {
        if range.last_row_index() >= self.rows || range.last_column_index() >= self.columns {
            bail!(RangeError::OutOfBounds {
                range: range.to_string(),
                rows: self.rows,
                columns: self.columns,
            });
        }
        Ok(())
    }
}

impl Grid for MemoryGrid {
    fn row_count(&self) -> usize {
        self.rows
    }

    fn column_count(&self) -> usize {
        self.columns
    }

    fn texts(&self, range: &Range) -> Result<Vec<Vec<String>>> {
        self.check(range)?;
        let cols = range.column_index()..=range.last_column_index();
        Ok(self.cells[range.row_index()..=range.last_row_index()]
            .iter()
            .map(|record| record[cols.clone()].to_vec())
            .collect())
    }

    fn delete_rows(&mut self, range: &Range) -> Result<()> {
        self.check(range)?;
        let count = range.row_count();
        for col in range.column_index()..=range.last_column_index() {
            for row in range.row_index()..self.rows {
                let value = if row + count < self.rows {
                    std::mem::take(&mut self.cells[row + count][col])
                } else {
                    String::new()
                };
                self.cells[row][col] = value;
            }
        }
        Ok(())
    }

    fn used_range(&self) -> Result<Range, HostAccessError> {
        if !self.native_used_range {
            return Err(HostAccessError::Unsupported);
        }
        let mut bounds: Option<(usize, usize, usize, usize)> = None;
        for (row, record) in self.cells.iter().enumerate() {
            for (col, value) in record.iter().enumerate() {
                if value.is_empty() {
                    continue;
                }
                bounds = Some(match bounds {
                    None => (row, col, row, col),
                    Some((row_lower, col_lower, _, col_upper)) => {
                        (row_lower, col_lower.min(col), row, col_upper.max(col))
                    }
                });
            }
        }
        match bounds {
            Some((row_lower, col_lower, row_upper, col_upper)) => Range::new(
                row_lower,
                col_lower,
                row_upper - row_lower + 1,
                col_upper - col_lower + 1,
            )
            .map_err(|error| HostAccessError::QueryFailed(error.to_string())),
            None => Ok(Range::cell(0, 0)),
        }
    }

    fn tables(&self) -> Result<Vec<Table>> {
        Ok(self.tables.clone())
    }
}
