//! Core business logic for Leadbook.
//!
//! # Modules
//!
//! - [`csv`] - CSV codec: header aliases, record splitting, row decoding and
//!   lead encoding
//! - [`import`] - Import pipeline that drives the decoder against a store
//! - [`export`] - Filtered export and download naming
//! - [`leads`] - CRUD and paginated listing
//!
//! # Example
//!
//! ```rust
//! use leadbook::adapters::memory::MemoryLeadStore;
//! use leadbook::core::import::LeadImporter;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = Arc::new(MemoryLeadStore::new());
//! let importer = LeadImporter::new(store);
//!
//! let summary = importer
//!     .import_csv("First Name,Last Name,Email\nJane,Doe,jane@example.com")
//!     .await?;
//!
//! assert_eq!(summary.imported, 1);
//! # Ok(())
//! # }
//! ```

pub mod csv;
pub mod export;
pub mod import;
pub mod leads;
