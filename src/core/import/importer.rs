//! Import pipeline
//!
//! Rows are handled one at a time in file order. For each accepted row the
//! email lookup finishes before the insert is issued; the store's unique
//! constraint still decides when two writers race on the same email.

use super::summary::{ImportSummary, RowErrorKind};
use crate::adapters::database::LeadStore;
use crate::core::csv::CsvDocument;
use crate::domain::lead::NewLead;
use crate::domain::{LeadbookError, Result};
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

/// Imports CSV payloads into a lead store
pub struct LeadImporter {
    store: Arc<dyn LeadStore>,
}

impl LeadImporter {
    pub fn new(store: Arc<dyn LeadStore>) -> Self {
        Self { store }
    }

    /// Import a CSV payload
    ///
    /// # Errors
    ///
    /// Returns `LeadbookError::Import` when the payload is rejected as a
    /// whole (too few lines, missing required columns). Row-level problems
    /// never fail the call; they are reported in the summary.
    pub async fn import_csv(&self, csv: &str) -> Result<ImportSummary> {
        let started = Instant::now();
        let document = CsvDocument::parse(csv)?;

        crate::log_import_start!(self.store.backend_name(), document.row_count());

        let mut summary = ImportSummary::new();
        for row in document.rows() {
            let lead = match row.outcome {
                Ok(lead) => lead,
                Err(rejection) => {
                    crate::log_row_skipped!(row.row_number, rejection);
                    summary.record_skipped(row.row_number, RowErrorKind::Rejected(rejection));
                    continue;
                }
            };

            match self.store_row(lead).await {
                Ok(()) => summary.record_imported(),
                Err(kind) => {
                    if let RowErrorKind::Failed(message) = &kind {
                        tracing::warn!(row = row.row_number, error = %message, "Failed to import row");
                    } else {
                        crate::log_row_skipped!(row.row_number, "duplicate email");
                    }
                    summary.record_skipped(row.row_number, kind);
                }
            }
        }

        let summary = summary.with_duration(started.elapsed());
        summary.log_summary();
        Ok(summary)
    }

    /// Import a CSV file from disk
    ///
    /// # Errors
    ///
    /// Returns `Io` if the file cannot be read, otherwise as
    /// [`import_csv`](Self::import_csv).
    pub async fn import_file(&self, path: impl AsRef<Path>) -> Result<ImportSummary> {
        let path = path.as_ref();
        let csv = tokio::fs::read_to_string(path).await.map_err(|e| {
            LeadbookError::Io(format!("Failed to read {}: {}", path.display(), e))
        })?;

        self.import_csv(&csv).await
    }

    async fn store_row(&self, lead: NewLead) -> std::result::Result<(), RowErrorKind> {
        let email = lead.email.clone();

        match self.store.find_by_email(&email).await {
            Ok(Some(_)) => return Err(RowErrorKind::DuplicateEmail(email)),
            Ok(None) => {}
            Err(e) => return Err(RowErrorKind::Failed(e.to_string())),
        }

        match self.store.insert(lead).await {
            Ok(_) => Ok(()),
            Err(LeadbookError::Conflict(_)) => Err(RowErrorKind::DuplicateEmail(email)),
            Err(e) => Err(RowErrorKind::Failed(e.to_string())),
        }
    }
}
