//! CSV export pipeline
//!
//! Filtered fetch from the store, encoding via [`crate::core::csv`], and the
//! download file name.

pub mod exporter;

pub use exporter::{export_filename, CsvExport, LeadExporter};
