//! Lead store abstraction
//!
//! Every backend implements [`LeadStore`]. The service and the CSV pipelines
//! only ever see this trait.

use crate::domain::ids::LeadId;
use crate::domain::lead::{Lead, LeadFilter, LeadUpdate, NewLead, PageRequest};
use crate::domain::Result;
use async_trait::async_trait;

/// Persistent store of lead records
///
/// Implementations must enforce email uniqueness themselves and report a
/// violation as [`LeadbookError::Conflict`](crate::domain::LeadbookError::Conflict),
/// regardless of any check the caller made beforehand.
#[async_trait]
pub trait LeadStore: Send + Sync {
    /// Test the store connection
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be reached.
    async fn test_connection(&self) -> Result<()>;

    /// Create tables and indexes if they do not exist
    ///
    /// # Errors
    ///
    /// Returns an error if the schema cannot be created.
    async fn ensure_schema(&self) -> Result<()>;

    /// Fetch a lead by id
    async fn find_by_id(&self, id: LeadId) -> Result<Option<Lead>>;

    /// Fetch the lead that owns `email` (exact match)
    async fn find_by_email(&self, email: &str) -> Result<Option<Lead>>;

    /// Insert a lead and return it with its assigned id and timestamps
    ///
    /// # Errors
    ///
    /// Returns `Conflict` if the email is already taken.
    async fn insert(&self, lead: NewLead) -> Result<Lead>;

    /// Apply a field-level patch and return the updated record
    ///
    /// Returns `Ok(None)` when no lead has this id. `updated_at` is always
    /// refreshed.
    ///
    /// # Errors
    ///
    /// Returns `Conflict` if the new email belongs to another lead.
    async fn update(&self, id: LeadId, update: &LeadUpdate) -> Result<Option<Lead>>;

    /// Delete a lead, returning false when it did not exist
    async fn delete(&self, id: LeadId) -> Result<bool>;

    /// Leads matching `filter`, newest first, optionally limited to one page
    async fn query(&self, filter: &LeadFilter, page: Option<PageRequest>) -> Result<Vec<Lead>>;

    /// Number of leads matching `filter`
    async fn count(&self, filter: &LeadFilter) -> Result<i64>;

    /// Short backend name for logs
    fn backend_name(&self) -> &'static str;
}
