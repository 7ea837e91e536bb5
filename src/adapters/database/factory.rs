//! Lead store factory

use crate::adapters::database::traits::LeadStore;
use crate::adapters::memory::MemoryLeadStore;
use crate::adapters::postgresql::adapter::PostgreSQLAdapter;
use crate::adapters::postgresql::client::PostgreSQLClient;
use crate::config::schema::{DatabaseTarget, LeadbookConfig};
use crate::domain::{LeadbookError, Result};
use std::sync::Arc;

/// Create the lead store selected by `database_target`
///
/// The store's schema is not touched here; callers run
/// [`LeadStore::ensure_schema`] once at start-up.
///
/// # Errors
///
/// Returns an error if the selected backend cannot be configured.
pub async fn create_lead_store(config: &LeadbookConfig) -> Result<Arc<dyn LeadStore>> {
    match config.database_target {
        DatabaseTarget::PostgreSQL => {
            let pg_config = config.postgresql.as_ref().ok_or_else(|| {
                LeadbookError::Configuration(
                    "postgresql configuration is required when database_target = 'postgresql'"
                        .to_string(),
                )
            })?;

            tracing::info!("Creating PostgreSQL lead store");
            let client = PostgreSQLClient::new(pg_config.clone()).await?;
            Ok(Arc::new(PostgreSQLAdapter::new(client)))
        }
        DatabaseTarget::Memory => {
            tracing::warn!("Using in-memory lead store; data will not survive a restart");
            Ok(Arc::new(MemoryLeadStore::new()))
        }
    }
}
