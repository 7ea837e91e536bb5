//! PostgreSQL lead store
//!
//! Leads live in a single `buyer_leads` table created by
//! `migrations/001_initial_schema.sql`.

pub mod adapter;
pub mod client;
pub mod models;
pub mod query;

pub use adapter::PostgreSQLAdapter;
pub use client::PostgreSQLClient;
