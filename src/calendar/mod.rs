//! Conversion of the government office calendar: CSV source, normalized JSON
//! records and the holiday iCalendar file.

use std::path::PathBuf;

mod calendar_ics;
mod calendar_normalize;
mod calendar_source;
mod calendar_types;

pub use calendar_ics::*;
pub use calendar_normalize::*;
pub use calendar_source::*;
pub use calendar_types::*;

/// Custom error type for calendar conversion
#[derive(Debug, thiserror::Error)]
pub enum CalendarError {
    #[error("No CSV file starting with '{prefix}' found in {}", .dir.display())]
    SourceNotFound { prefix: String, dir: PathBuf },
    #[error("CSV file not found: {}", .0.display())]
    SourceFileNotFound(PathBuf),
    #[error("Holiday records not found: {} (run the CSV to JSON conversion first)", .0.display())]
    RecordsNotFound(PathBuf),
    #[error("Malformed CSV: {0}")]
    Malformed(#[from] csv::Error),
    #[error("Invalid holiday records: {0}")]
    InvalidRecords(#[from] serde_json::Error),
}

impl CalendarError {
    /// True for the variants raised when an input file is missing
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            CalendarError::SourceNotFound { .. }
                | CalendarError::SourceFileNotFound(_)
                | CalendarError::RecordsNotFound(_)
        )
    }
}
