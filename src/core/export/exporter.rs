//! Lead export

use crate::adapters::database::LeadStore;
use crate::core::csv::encode_leads;
use crate::domain::{LeadFilter, Result};
use chrono::{NaiveDate, Utc};
use std::sync::Arc;
use std::time::Instant;

/// Download file name for an export produced on `date`
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use leadbook::core::export::export_filename;
///
/// let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
/// assert_eq!(export_filename(date), "buyer-leads-2024-03-09.csv");
/// ```
pub fn export_filename(date: NaiveDate) -> String {
    format!("buyer-leads-{}.csv", date.format("%Y-%m-%d"))
}

/// An encoded export ready to be written or served
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvExport {
    pub filename: String,
    pub body: String,
    pub row_count: usize,
}

impl CsvExport {
    /// `Content-Disposition` value for serving the export as a download
    pub fn content_disposition(&self) -> String {
        format!("attachment; filename=\"{}\"", self.filename)
    }
}

/// Produces CSV exports from a lead store
pub struct LeadExporter {
    store: Arc<dyn LeadStore>,
}

impl LeadExporter {
    pub fn new(store: Arc<dyn LeadStore>) -> Self {
        Self { store }
    }

    /// Export every lead matching `filter`, newest first
    pub async fn export(&self, filter: &LeadFilter) -> Result<CsvExport> {
        let started = Instant::now();
        let leads = self.store.query(filter, None).await?;

        let export = CsvExport {
            filename: export_filename(Utc::now().date_naive()),
            body: encode_leads(&leads),
            row_count: leads.len(),
        };

        tracing::info!(
            rows = export.row_count,
            bytes = export.body.len(),
            duration_ms = started.elapsed().as_millis() as u64,
            "Lead export completed"
        );

        Ok(export)
    }
}
