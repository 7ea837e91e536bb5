//! Validate config command implementation

use super::exit_code;
use crate::config::load_config;
use crate::config::schema::DatabaseTarget;
use clap::Args;
use secrecy::ExposeSecret;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    ///
    /// Loading already validates, so a loaded file is a valid file.
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Configuration validation failed");
                println!("   Error: {e}");
                println!();
                return Ok(exit_code::CONFIG);
            }
        };

        println!("✅ Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!("  Database Target: {}", config.database_target.as_str());

        if config.database_target == DatabaseTarget::PostgreSQL {
            if let Some(ref pg) = config.postgresql {
                println!(
                    "  PostgreSQL Connection: {}",
                    pg.connection_string
                        .expose_secret()
                        .after_credentials()
                        .unwrap_or("***")
                );
                println!("  Max Connections: {}", pg.max_connections);
                println!(
                    "  Statement Timeout: {}s",
                    pg.statement_timeout_seconds
                );
            }
        }

        println!("  Listen Address: {}", config.server.listen_addr);
        println!(
            "  CORS Origins: {}",
            config.server.cors_allowed_origins.join(", ")
        );
        println!(
            "  Request Timeout: {}s",
            config.server.request_timeout_seconds
        );
        println!("  Max Body Size: {} MB", config.server.max_body_size_mb);
        println!(
            "  Page Size: {} (max {})",
            config.server.default_page_size, config.server.max_page_size
        );
        println!(
            "  File Logging: {}",
            if config.logging.local_enabled {
                config.logging.local_path.as_str()
            } else {
                "disabled"
            }
        );
        println!();
        Ok(exit_code::SUCCESS)
    }
}
