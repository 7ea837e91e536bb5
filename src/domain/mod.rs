//! Domain models and types for Leadbook.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Identifiers** ([`LeadId`])
//! - **Lead models** ([`Lead`], [`NewLead`], [`LeadUpdate`], [`LeadFilter`])
//! - **Error types** ([`LeadbookError`], [`ImportError`])
//! - **Result type alias** ([`Result`])
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, LeadbookError>`]:
//!
//! ```rust
//! use leadbook::domain::{LeadbookError, Result};
//!
//! fn require_email(email: &str) -> Result<()> {
//!     if !leadbook::domain::is_valid_email(email) {
//!         return Err(LeadbookError::Validation("Invalid email format".to_string()));
//!     }
//!     Ok(())
//! }
//!
//! assert!(require_email("jane@example.com").is_ok());
//! assert!(require_email("jane").is_err());
//! ```

pub mod errors;
pub mod ids;
pub mod lead;
pub mod result;

// Re-export commonly used types for convenience
pub use errors::{ImportError, LeadbookError};
pub use ids::LeadId;
pub use lead::{
    is_valid_email, Lead, LeadFilter, LeadPage, LeadUpdate, NewLead, NewLeadRequest, PageRequest,
    Pagination, DEFAULT_STATUS, IMPORT_SOURCE,
};
pub use result::Result;
