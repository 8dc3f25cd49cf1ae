use crate::scan::ScanError;

/// Default tolerance of consecutive empty rows or columns used when the host
/// cannot report its used range.
pub const DEFAULT_THRESHOLD: usize = 10;

/// Options for inferring and normalizing a data range.
#[derive(Clone, Debug, PartialEq)]
pub struct Criteria {
    /// Consecutive empty strips tolerated before a boundary scan stops.
    pub threshold: usize,

    /// Remove empty rows from an anchored range before returning it.
    pub remove_empty_rows: bool,
}

impl Default for Criteria {
    fn default() -> Self {
        Criteria {
            threshold: DEFAULT_THRESHOLD,
            remove_empty_rows: false,
        }
    }
}

impl Criteria {
    pub fn with_threshold(mut self, threshold: usize) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_remove_empty_rows(mut self, remove_empty_rows: bool) -> Self {
        self.remove_empty_rows = remove_empty_rows;
        self
    }

    /// Checks the options before any grid access happens.
    pub fn validate(&self) -> Result<(), ScanError> {
        check_threshold(self.threshold)
    }
}

/// A zero threshold would end a scan before it visits anything.
pub(crate) fn check_threshold(threshold: usize) -> Result<(), ScanError> {
    if threshold == 0 {
        Err(ScanError::InvalidThreshold(threshold))
    } else {
        Ok(())
    }
}
