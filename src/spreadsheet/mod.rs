//! # Grid Model
//!
//! Ranges, A1 references, the [`Grid`] capability a host implements, tables
//! laid over a grid, and the per-call [`Criteria`]. [`MemoryGrid`] is a plain
//! in-memory implementation of [`Grid`].
pub mod criteria;
pub mod grid;
pub mod memory;
pub mod range;
pub mod reference;
pub mod table;

pub use criteria::{Criteria, DEFAULT_THRESHOLD};
pub use grid::{Grid, HostAccessError};
pub use memory::MemoryGrid;
pub use range::{Range, RangeError};
pub use table::{Table, TableError};
