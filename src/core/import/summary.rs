//! Import summary and row-level error reporting

use crate::core::csv::RowRejection;
use serde::Serialize;
use serde_with::SerializeDisplay;
use std::fmt;
use std::time::Duration;

/// Why a row was skipped
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowErrorKind {
    /// Rejected by the codec before reaching the store
    Rejected(RowRejection),
    /// Email already belongs to a stored lead
    DuplicateEmail(String),
    /// Any other failure while storing the row
    Failed(String),
}

/// A skipped row and the reason it was skipped
///
/// Serialises as its user-facing message, e.g. `Row 3: Invalid email format`.
#[derive(Debug, Clone, PartialEq, Eq, SerializeDisplay)]
pub struct RowError {
    /// 1-based line number, header included
    pub row: usize,
    pub kind: RowErrorKind,
}

impl fmt::Display for RowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            RowErrorKind::Rejected(rejection) => write!(f, "Row {}: {}", self.row, rejection),
            RowErrorKind::DuplicateEmail(email) => {
                write!(f, "Row {}: Email {} already exists", self.row, email)
            }
            RowErrorKind::Failed(message) => write!(f, "Row {}: {}", self.row, message),
        }
    }
}

/// Result of one import run
///
/// `skipped == errors.len()` always holds: every skipped row has exactly one
/// message.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ImportSummary {
    /// Rows stored as new leads
    pub imported: usize,

    /// Rows not stored
    pub skipped: usize,

    /// One message per skipped row, in file order
    pub errors: Vec<RowError>,

    #[serde(skip)]
    pub duration: Duration,
}

impl ImportSummary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Count one stored row
    pub fn record_imported(&mut self) {
        self.imported += 1;
    }

    /// Count one skipped row with its reason
    pub fn record_skipped(&mut self, row: usize, kind: RowErrorKind) {
        self.skipped += 1;
        self.errors.push(RowError { row, kind });
    }

    /// Total data rows seen
    pub fn total_rows(&self) -> usize {
        self.imported + self.skipped
    }

    /// Returns true when no row was skipped
    pub fn is_complete(&self) -> bool {
        self.skipped == 0
    }

    /// Error messages as shown to users
    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    /// Log the summary
    pub fn log_summary(&self) {
        crate::log_import_complete!(self.imported, self.skipped, self.duration);

        if !self.errors.is_empty() {
            tracing::warn!(
                error_count = self.errors.len(),
                "Lead import completed with skipped rows"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_counts() {
        let mut summary = ImportSummary::new();
        summary.record_imported();
        summary.record_imported();
        summary.record_skipped(4, RowErrorKind::Rejected(RowRejection::InvalidEmail));

        assert_eq!(summary.imported, 2);
        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.total_rows(), 3);
        assert!(!summary.is_complete());
        assert_eq!(summary.errors.len(), summary.skipped);
    }

    #[test]
    fn test_row_error_messages() {
        let missing = RowError {
            row: 2,
            kind: RowErrorKind::Rejected(RowRejection::MissingRequiredFields),
        };
        assert_eq!(missing.to_string(), "Row 2: Missing required fields");

        let duplicate = RowError {
            row: 5,
            kind: RowErrorKind::DuplicateEmail("jane@example.com".to_string()),
        };
        assert_eq!(
            duplicate.to_string(),
            "Row 5: Email jane@example.com already exists"
        );

        let failed = RowError {
            row: 9,
            kind: RowErrorKind::Failed("Database error: timeout".to_string()),
        };
        assert_eq!(failed.to_string(), "Row 9: Database error: timeout");
    }

    #[test]
    fn test_summary_serializes_messages() {
        let mut summary = ImportSummary::new().with_duration(Duration::from_millis(12));
        summary.record_imported();
        summary.record_skipped(3, RowErrorKind::Rejected(RowRejection::InvalidEmail));

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "imported": 1,
                "skipped": 1,
                "errors": ["Row 3: Invalid email format"]
            })
        );
    }
}
