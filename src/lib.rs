// Leadbook - Buyer-lead management service
// Copyright (c) 2025 Leadbook Contributors
// Licensed under the MIT License

//! # Leadbook - Buyer-lead management
//!
//! Leadbook stores prospective buyers ("leads") for a real-estate team and
//! moves them in and out of spreadsheets.
//!
//! ## Overview
//!
//! This library provides:
//! - **CRUD** over lead records with search, filters and pagination
//! - **Import** of CSV files with forgiving header names and per-row error
//!   reporting
//! - **Export** of filtered leads as CSV
//! - An **HTTP API** (axum) and a **CLI** (clap) over the same services
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`api`] - HTTP routes, error mapping and server lifecycle
//! - [`core`] - Business logic (CSV codec, import, export, lead service)
//! - [`adapters`] - Lead stores (PostgreSQL, in-memory)
//! - [`domain`] - Core domain types and errors
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust
//! use leadbook::adapters::memory::MemoryLeadStore;
//! use leadbook::core::export::LeadExporter;
//! use leadbook::core::import::LeadImporter;
//! use leadbook::domain::LeadFilter;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = Arc::new(MemoryLeadStore::new());
//!
//! let csv = "First Name,Last Name,Email,Budget Max\nJane,Doe,jane@example.com,\"$500,000\"";
//! let summary = LeadImporter::new(store.clone()).import_csv(csv).await?;
//! assert_eq!(summary.imported, 1);
//!
//! let export = LeadExporter::new(store).export(&LeadFilter::default()).await?;
//! assert!(export.body.contains(",500000,"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Fallible operations return [`domain::Result`], whose error type
//! [`domain::LeadbookError`] classifies failures by kind. The HTTP layer
//! maps kinds to status codes in [`api::error`].

pub mod adapters;
pub mod api;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;

