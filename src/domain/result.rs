//! Result type alias for Leadbook

use super::errors::LeadbookError;

/// Result type alias for Leadbook operations
///
/// # Examples
///
/// ```
/// use leadbook::domain::result::Result;
/// use leadbook::domain::errors::LeadbookError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(LeadbookError::Validation("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, LeadbookError>;
