//! Logging and observability
//!
//! Structured logging via `tracing`, plus a few macros that keep the field
//! names of recurring events consistent across the CLI and the HTTP API.
//!
//! # Example
//!
//! ```no_run
//! use leadbook::logging::init_logging;
//! use leadbook::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

pub use structured::{init_logging, parse_log_level, LoggingGuard};

/// Log the start of a CSV import
///
/// # Example
///
/// ```
/// use leadbook::log_import_start;
///
/// log_import_start!("api", 250);
/// ```
#[macro_export]
macro_rules! log_import_start {
    ($origin:expr, $rows:expr) => {
        tracing::info!(origin = $origin, rows = $rows, "Starting lead import");
    };
}

/// Log the completion of a CSV import
///
/// # Example
///
/// ```
/// use leadbook::log_import_complete;
/// use std::time::Duration;
///
/// log_import_complete!(40, 2, Duration::from_millis(85));
/// ```
#[macro_export]
macro_rules! log_import_complete {
    ($imported:expr, $skipped:expr, $duration:expr) => {
        tracing::info!(
            imported = $imported,
            skipped = $skipped,
            duration_ms = $duration.as_millis() as u64,
            "Lead import completed"
        );
    };
}

/// Log a skipped import row
///
/// # Example
///
/// ```
/// use leadbook::log_row_skipped;
///
/// log_row_skipped!(7, "Invalid email format");
/// ```
#[macro_export]
macro_rules! log_row_skipped {
    ($row:expr, $reason:expr) => {
        tracing::debug!(row = $row, reason = %$reason, "Skipped import row");
    };
}

/// Log an error with context
///
/// # Example
///
/// ```
/// use leadbook::log_error_with_context;
/// use leadbook::domain::LeadbookError;
///
/// let error = LeadbookError::Database("connection reset".to_string());
/// log_error_with_context!(&error, "Failed to fetch leads");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred"
        );
    };
}
