//! CLI command implementations

pub mod export;
pub mod import;
pub mod init;
pub mod serve;
pub mod validate;

use crate::adapters::database::{create_lead_store, LeadStore};
use crate::config::{load_config, LeadbookConfig};
use crate::domain::LeadbookError;
use std::sync::Arc;

/// Exit codes shared by every command
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const PARTIAL: i32 = 1;
    pub const CONFIG: i32 = 2;
    pub const IMPORT: i32 = 3;
    pub const CONNECTION: i32 = 4;
    pub const FATAL: i32 = 5;
}

/// Load and validate configuration, printing the failure if any
pub(crate) fn load_or_report(config_path: &str) -> Result<LeadbookConfig, i32> {
    load_config(config_path).map_err(|e| {
        tracing::error!(error = %e, config_path = %config_path, "Failed to load configuration");
        eprintln!("❌ Failed to load configuration: {e}");
        exit_code::CONFIG
    })
}

/// Open the configured store, check connectivity and apply the schema
pub(crate) async fn connect_store(config: &LeadbookConfig) -> Result<Arc<dyn LeadStore>, i32> {
    let store = create_lead_store(config).await.map_err(|e| {
        tracing::error!(error = %e, "Failed to create lead store");
        eprintln!("❌ Failed to initialize lead store: {e}");
        match e {
            LeadbookError::Configuration(_) => exit_code::CONFIG,
            _ => exit_code::CONNECTION,
        }
    })?;

    if let Err(e) = store.test_connection().await {
        tracing::error!(error = %e, store = store.backend_name(), "Store connection failed");
        eprintln!("❌ Could not connect to {} store: {e}", store.backend_name());
        return Err(exit_code::CONNECTION);
    }

    if let Err(e) = store.ensure_schema().await {
        tracing::error!(error = %e, "Schema migration failed");
        eprintln!("❌ Failed to apply database schema: {e}");
        return Err(exit_code::CONNECTION);
    }

    Ok(store)
}
