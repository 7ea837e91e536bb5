//! Import command implementation
//!
//! Runs the CSV import pipeline on a local file against the configured
//! store.

use super::{connect_store, exit_code, load_or_report};
use crate::core::import::{ImportSummary, LeadImporter};
use crate::domain::LeadbookError;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the import command
#[derive(Args, Debug)]
pub struct ImportArgs {
    /// CSV file to import
    pub file: PathBuf,

    /// Print every skipped row instead of the first 20
    #[arg(long)]
    pub all_errors: bool,
}

const ERROR_PREVIEW: usize = 20;

impl ImportArgs {
    /// Execute the import command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(file = %self.file.display(), "Starting import command");

        let config = match load_or_report(config_path) {
            Ok(c) => c,
            Err(code) => return Ok(code),
        };
        let store = match connect_store(&config).await {
            Ok(s) => s,
            Err(code) => return Ok(code),
        };

        println!("🚀 Importing leads from {}", self.file.display());
        println!();

        let importer = LeadImporter::new(store);
        let summary = match importer.import_file(&self.file).await {
            Ok(s) => s,
            Err(LeadbookError::Import(e)) => {
                tracing::error!(error = %e, "Import rejected");
                eprintln!("❌ Import rejected: {e}");
                return Ok(exit_code::IMPORT);
            }
            Err(LeadbookError::Io(e)) => {
                eprintln!("❌ {e}");
                return Ok(exit_code::IMPORT);
            }
            Err(e) => {
                tracing::error!(error = %e, "Import failed");
                eprintln!("❌ Import failed: {e}");
                return Ok(exit_code::FATAL);
            }
        };

        self.print_summary(&summary);

        if summary.is_complete() {
            println!("✅ Import completed successfully!");
            Ok(exit_code::SUCCESS)
        } else {
            println!("⚠️  Import completed with skipped rows");
            Ok(exit_code::PARTIAL)
        }
    }

    fn print_summary(&self, summary: &ImportSummary) {
        println!("📊 Import Summary:");
        println!("  Rows: {}", summary.total_rows());
        println!("  Imported: {}", summary.imported);
        println!("  Skipped: {}", summary.skipped);
        println!("  Duration: {:.2}s", summary.duration.as_secs_f64());
        println!();

        if summary.errors.is_empty() {
            return;
        }

        println!("⚠️  Skipped rows:");
        let shown = if self.all_errors {
            summary.errors.len()
        } else {
            ERROR_PREVIEW
        };
        for error in summary.errors.iter().take(shown) {
            println!("  - {error}");
        }
        if summary.errors.len() > shown {
            println!("  ... and {} more", summary.errors.len() - shown);
        }
        println!();
    }
}
