//! Lead store backends for Leadbook.
//!
//! - [`database`] - The [`LeadStore`](database::LeadStore) trait and factory
//! - [`postgresql`] - PostgreSQL implementation (tokio-postgres + deadpool)
//! - [`memory`] - In-process implementation for development and tests
//!
//! # Example
//!
//! ```rust
//! use leadbook::adapters::database::LeadStore;
//! use leadbook::adapters::memory::MemoryLeadStore;
//! use leadbook::domain::NewLead;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let store = MemoryLeadStore::new();
//! let lead = store
//!     .insert(NewLead {
//!         first_name: "Jane".to_string(),
//!         last_name: "Doe".to_string(),
//!         email: "jane@example.com".to_string(),
//!         status: "new".to_string(),
//!         ..Default::default()
//!     })
//!     .await?;
//! assert_eq!(lead.id.value(), 1);
//! # Ok(())
//! # }
//! ```

pub mod database;
pub mod memory;
pub mod postgresql;
