//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::{DatabaseTarget, LeadbookConfig, PostgreSQLConfig};
use super::secret::secret_string;
use crate::domain::errors::LeadbookError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Prefix for configuration override variables
pub const ENV_PREFIX: &str = "LEADBOOK_";

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into LeadbookConfig
/// 4. Applies environment variable overrides (LEADBOOK_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, a referenced
/// environment variable is not set, or validation fails.
///
/// # Examples
///
/// ```no_run
/// use leadbook::config::loader::load_config;
///
/// let config = load_config("leadbook.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<LeadbookConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(LeadbookError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        LeadbookError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    parse_config(&contents)
}

/// Parses, overrides and validates configuration text.
///
/// # Errors
///
/// Same as [`load_config`], minus file access.
pub fn parse_config(contents: &str) -> Result<LeadbookConfig> {
    let contents = substitute_env_vars(contents)?;

    let mut config: LeadbookConfig = toml::from_str(&contents)
        .map_err(|e| LeadbookError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    apply_env_overrides(&mut config)?;

    config.validate().map_err(|e| {
        LeadbookError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are left untouched. All unset variables are reported in a
/// single error.
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| LeadbookError::Configuration(format!("Invalid substitution pattern: {e}")))?;
    let mut lines = Vec::new();
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            lines.push(line.to_string());
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    processed_line = processed_line.replace(&format!("${{{var_name}}}"), &value);
                }
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        lines.push(processed_line);
    }

    if !missing_vars.is_empty() {
        return Err(LeadbookError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(lines.join("\n"))
}

fn env_var(key: &str) -> Option<String> {
    std::env::var(format!("{ENV_PREFIX}{key}")).ok()
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Result<Option<T>> {
    match env_var(key) {
        Some(raw) => raw.trim().parse().map(Some).map_err(|_| {
            LeadbookError::Configuration(format!(
                "Invalid value '{raw}' for environment variable {ENV_PREFIX}{key}"
            ))
        }),
        None => Ok(None),
    }
}

/// Applies environment variable overrides using LEADBOOK_* prefix
///
/// Environment variables follow the pattern: LEADBOOK_<SECTION>_<KEY>
/// For example: LEADBOOK_SERVER_LISTEN_ADDR, LEADBOOK_POSTGRESQL_MAX_CONNECTIONS
fn apply_env_overrides(config: &mut LeadbookConfig) -> Result<()> {
    // Application overrides
    if let Some(val) = env_var("APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    if let Some(val) = env_var("DATABASE_TARGET") {
        config.database_target = match val.to_lowercase().as_str() {
            "postgresql" => DatabaseTarget::PostgreSQL,
            "memory" => DatabaseTarget::Memory,
            other => {
                return Err(LeadbookError::Configuration(format!(
                    "Invalid {ENV_PREFIX}DATABASE_TARGET '{other}'. Must be one of: postgresql, memory"
                )))
            }
        };
    }

    // PostgreSQL overrides; a connection string alone is enough to create the section
    if let Some(val) = env_var("POSTGRESQL_CONNECTION_STRING") {
        match config.postgresql {
            Some(ref mut pg) => pg.connection_string = secret_string(val),
            None => config.postgresql = Some(PostgreSQLConfig::new(secret_string(val))),
        }
    }
    if let Some(ref mut pg) = config.postgresql {
        if let Some(val) = env_parse("POSTGRESQL_MAX_CONNECTIONS")? {
            pg.max_connections = val;
        }
        if let Some(val) = env_parse("POSTGRESQL_CONNECTION_TIMEOUT_SECONDS")? {
            pg.connection_timeout_seconds = val;
        }
        if let Some(val) = env_parse("POSTGRESQL_STATEMENT_TIMEOUT_SECONDS")? {
            pg.statement_timeout_seconds = val;
        }
    }

    // Server overrides
    if let Some(val) = env_var("SERVER_LISTEN_ADDR") {
        config.server.listen_addr = val;
    }
    if let Some(val) = env_var("SERVER_CORS_ALLOWED_ORIGINS") {
        config.server.cors_allowed_origins = val
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
    }
    if let Some(val) = env_parse("SERVER_REQUEST_TIMEOUT_SECONDS")? {
        config.server.request_timeout_seconds = val;
    }
    if let Some(val) = env_parse("SERVER_MAX_BODY_SIZE_MB")? {
        config.server.max_body_size_mb = val;
    }
    if let Some(val) = env_parse("SERVER_DEFAULT_PAGE_SIZE")? {
        config.server.default_page_size = val;
    }
    if let Some(val) = env_parse("SERVER_MAX_PAGE_SIZE")? {
        config.server.max_page_size = val;
    }

    // Logging overrides
    if let Some(val) = env_parse("LOGGING_LOCAL_ENABLED")? {
        config.logging.local_enabled = val;
    }
    if let Some(val) = env_var("LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
    if let Some(val) = env_var("LOGGING_LOCAL_ROTATION") {
        config.logging.local_rotation = val;
    }
    if let Some(val) = env_parse("LOGGING_JSON_CONSOLE")? {
        config.logging.json_console = val;
    }

    Ok(())
}
