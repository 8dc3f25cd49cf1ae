use crate::error::{ResultMessage, RustyRangeError};
use crate::spreadsheet::grid::Grid;
use crate::spreadsheet::range::Range;
use thiserror::Error;

/// Errors related to table column lookup.
#[derive(Error, Debug, PartialEq)]
pub enum TableError {
    #[error("Could not retrieve {0} column")]
    ColumnNotFound(String),
}

/// A host table laid over a block of the grid.
///
/// The first row of `range` is the header row. When `has_totals` is set, the
/// last row is a totals row. Everything in between is the body.
#[derive(Clone, Debug, PartialEq)]
pub struct Table {
    /// Table name
    pub name: String,
    /// Full table range including header and totals rows
    pub range: Range,
    /// Header names, one per column of `range`
    pub columns: Vec<String>,
    /// Whether the last row is a totals row
    pub has_totals: bool,
}

impl Table {
    /// Describes a table over `range`, taking column names from its first row.
    pub fn from_header<G: Grid + ?Sized>(
        grid: &G,
        name: &str,
        range: Range,
        has_totals: bool,
    ) -> Result<Self, RustyRangeError> {
        let header = range.first_row();
        let columns = grid
            .texts(&header)
            .map_err(RustyRangeError::from)
            .with_prefix(&format!("Read header of table '{name}'"))?
            .into_iter()
            .next()
            .unwrap_or_default();
        Ok(Self {
            name: name.to_owned(),
            range,
            columns,
            has_totals,
        })
    }

    /// Position of the column named `name` (exact match).
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    /// Rows between the header and the totals row, None when there are none.
    pub fn body(&self) -> Option<Range> {
        let footer = usize::from(self.has_totals);
        let rows = self.range.row_count().checked_sub(1 + footer)?;
        Range::new(
            self.range.row_index() + 1,
            self.range.column_index(),
            rows,
            self.range.column_count(),
        )
        .ok()
    }

    /// Body strip of the named column, None when the table has no body rows.
    ///
    /// A header name positioned past the width of the table range is not a column.
    pub fn column_body(&self, name: &str) -> Result<Option<Range>, TableError> {
        let index = self
            .column_index(name)
            .filter(|index| *index < self.range.column_count())
            .ok_or_else(|| TableError::ColumnNotFound(name.to_owned()))?;
        Ok(self.body().and_then(|body| body.column_at(index)))
    }
}
