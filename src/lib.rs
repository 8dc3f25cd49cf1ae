//! # Rusty Range
//!
//! Range inference and normalization for spreadsheet grids whose host cannot
//! reliably report the block of cells that holds data.
//!
//! ## Features
//!
//! - **Boundary scanning**: find the last row or column with data, tolerating
//!   a configurable number of empty rows or columns
//! - **Used range reconstruction**: rebuild the used range from two boundary
//!   scans when the host's own query is unavailable
//! - **Anchoring**: re-base a range on a cell found by address or by value
//! - **Row compaction**: delete the empty rows of a range from the grid
//! - **Column extraction**: read the values of a range's first column or of a
//!   named table column
//!
//! The engine talks to the host through the [`Grid`] trait only. Everything is
//! synchronous and single-threaded; callers must not run overlapping
//! operations against the same grid.
//!
//! Diagnostics go through the `log` facade. Install any logger to see them.
pub mod error;
pub mod scan;
pub mod spreadsheet;

pub use crate::error::RustyRangeError;
pub use crate::scan::anchor::{anchor_range, anchor_range_by_address, anchor_range_by_value, AnchorTarget};
pub use crate::scan::boundary::scan_boundary;
pub use crate::scan::compact::compact_rows;
pub use crate::scan::extract::{first_column_values, table_column_values};
pub use crate::scan::probe::probe_density;
pub use crate::scan::used_region::{data_range, reconstruct_used_region, worksheet_range};
pub use crate::scan::{Direction, ScanError};
pub use crate::spreadsheet::{
    Criteria, Grid, HostAccessError, MemoryGrid, Range, RangeError, Table, TableError, DEFAULT_THRESHOLD,
};
