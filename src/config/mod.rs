//! Configuration management for Leadbook.
//!
//! Leadbook reads a TOML file (default `leadbook.toml`) with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `LEADBOOK_<SECTION>_<KEY>` environment overrides
//! - Default values for optional settings
//! - Validation on load
//!
//! # Example Configuration
//!
//! ```toml
//! database_target = "postgresql"
//!
//! [application]
//! log_level = "info"
//!
//! [postgresql]
//! connection_string = "${LEADBOOK_DATABASE_URL}"
//! max_connections = 10
//!
//! [server]
//! listen_addr = "0.0.0.0:8080"
//! cors_allowed_origins = ["http://localhost:3000"]
//!
//! [logging]
//! local_enabled = true
//! local_path = "/var/log/leadbook"
//! local_rotation = "daily"
//! ```
//!
//! # Loading
//!
//! ```rust,no_run
//! use leadbook::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("leadbook.toml")?;
//! println!("Listening on {}", config.server.listen_addr);
//! # Ok(())
//! # }
//! ```

pub mod loader;
pub mod schema;
pub mod secret;

pub use loader::{load_config, parse_config};
pub use schema::{
    ApplicationConfig, DatabaseTarget, LeadbookConfig, LoggingConfig, PostgreSQLConfig,
    ServerConfig,
};
pub use secret::{secret_string, SecretString, SecretValue};
