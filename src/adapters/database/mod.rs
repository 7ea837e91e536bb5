//! Lead store abstraction layer
//!
//! A trait-based seam so the service can run against PostgreSQL in
//! production and an in-memory store in development and tests.

pub mod factory;
pub mod traits;

pub use factory::create_lead_store;
pub use traits::LeadStore;
