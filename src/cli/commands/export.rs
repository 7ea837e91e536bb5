//! Export command implementation

use super::{connect_store, exit_code, load_or_report};
use crate::core::export::LeadExporter;
use crate::domain::LeadFilter;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the export command
#[derive(Args, Debug, Default)]
pub struct ExportArgs {
    /// Output file (defaults to buyer-leads-<date>.csv in the current directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Case-insensitive text search over name, email, company and location
    #[arg(long)]
    pub search: Option<String>,

    /// Only leads with this status
    #[arg(long)]
    pub status: Option<String>,

    /// Only leads with this property type
    #[arg(long)]
    pub property_type: Option<String>,

    /// Only leads with this timeline
    #[arg(long)]
    pub timeline: Option<String>,
}

impl ExportArgs {
    pub fn filter(&self) -> LeadFilter {
        LeadFilter {
            search: self.search.clone(),
            status: self.status.clone(),
            property_type: self.property_type.clone(),
            timeline: self.timeline.clone(),
        }
        .normalized()
    }

    /// Execute the export command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!("Starting export command");

        let config = match load_or_report(config_path) {
            Ok(c) => c,
            Err(code) => return Ok(code),
        };
        let store = match connect_store(&config).await {
            Ok(s) => s,
            Err(code) => return Ok(code),
        };

        let export = match LeadExporter::new(store).export(&self.filter()).await {
            Ok(e) => e,
            Err(e) => {
                tracing::error!(error = %e, "Export failed");
                eprintln!("❌ Export failed: {e}");
                return Ok(exit_code::FATAL);
            }
        };

        let path = self
            .output
            .clone()
            .unwrap_or_else(|| PathBuf::from(&export.filename));

        if let Err(e) = tokio::fs::write(&path, &export.body).await {
            tracing::error!(error = %e, path = %path.display(), "Failed to write export");
            eprintln!("❌ Failed to write {}: {e}", path.display());
            return Ok(exit_code::FATAL);
        }

        println!("✅ Exported {} leads to {}", export.row_count, path.display());
        Ok(exit_code::SUCCESS)
    }
}
