//! CSV import pipeline

pub mod importer;
pub mod summary;

pub use importer::LeadImporter;
pub use summary::{ImportSummary, RowError, RowErrorKind};
