//! Lead CRUD and listing

pub mod service;

pub use service::LeadService;
