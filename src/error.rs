use thiserror::Error;

/// Main error type for the Rusty Range library.
/// Aggregates host errors and the errors of the internal modules.
#[derive(Error, Debug)]
pub enum RustyRangeError {
    #[error("{0}")]
    WithContextError(String),

    // Host adapter errors, propagated unchanged
    #[error("{0}")]
    AnyhowError(#[from] anyhow::Error),

    // Spreadsheet module errors
    #[error("{0}")]
    RangeError(#[from] crate::spreadsheet::range::RangeError),

    #[error("{0}")]
    HostAccessError(#[from] crate::spreadsheet::grid::HostAccessError),

    #[error("{0}")]
    TableError(#[from] crate::spreadsheet::table::TableError),

    // Scan module errors
    #[error("{0}")]
    ScanError(#[from] crate::scan::ScanError),
}

pub trait ResultMessage {
    fn with_prefix(self, message: &str) -> Self;
}

impl<T> ResultMessage for Result<T, RustyRangeError> {
    fn with_prefix(self, message: &str) -> Self {
        self.map_err(|e| RustyRangeError::WithContextError(format!("{}: {}", message, e)))
    }
}
