//! In-memory lead store
//!
//! Backs `database_target = "memory"` and the test suites. Filtering and
//! ordering follow the PostgreSQL adapter so either backend gives the same
//! answers.

pub mod store;

pub use store::MemoryLeadStore;
