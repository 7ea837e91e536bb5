//! Lead service
//!
//! Validation and pagination rules for the CRUD operations. Stores only see
//! requests that have already passed these checks.

use crate::adapters::database::LeadStore;
use crate::config::ServerConfig;
use crate::domain::lead::{is_valid_email, DEFAULT_STATUS};
use crate::domain::{
    Lead, LeadFilter, LeadId, LeadPage, LeadUpdate, LeadbookError, NewLead, NewLeadRequest,
    PageRequest, Pagination, Result,
};
use std::sync::Arc;

const REQUIRED_FIELDS: &str = "First name, last name, and email are required";
const REQUIRED_NOT_EMPTY: &str = "First name, last name, and email cannot be empty";
const INVALID_EMAIL: &str = "Invalid email format";
const DUPLICATE_EMAIL: &str = "A lead with this email already exists";
const NOT_FOUND: &str = "Lead not found";
const NO_FIELDS: &str = "No valid fields to update";

/// CRUD operations over a [`LeadStore`]
pub struct LeadService {
    store: Arc<dyn LeadStore>,
    default_page_size: i64,
    max_page_size: i64,
}

impl LeadService {
    pub fn new(store: Arc<dyn LeadStore>, default_page_size: i64, max_page_size: i64) -> Self {
        Self {
            store,
            default_page_size,
            max_page_size,
        }
    }

    /// Service using the page sizes from the server section
    pub fn from_config(store: Arc<dyn LeadStore>, config: &ServerConfig) -> Self {
        Self::new(store, config.default_page_size, config.max_page_size)
    }

    /// Resolve the requested page, applying defaults and the size cap
    ///
    /// # Errors
    ///
    /// `Validation` when page or limit is below 1.
    pub fn page_request(&self, page: Option<i64>, limit: Option<i64>) -> Result<PageRequest> {
        let page = page.unwrap_or(1);
        let limit = limit.unwrap_or(self.default_page_size);

        if page < 1 {
            return Err(LeadbookError::Validation(
                "Page must be a positive integer".to_string(),
            ));
        }
        if limit < 1 {
            return Err(LeadbookError::Validation(
                "Limit must be a positive integer".to_string(),
            ));
        }

        let limit = limit.min(self.max_page_size);
        if (page - 1).checked_mul(limit).is_none() {
            return Err(LeadbookError::Validation("Page is out of range".to_string()));
        }

        Ok(PageRequest::new(page, limit))
    }

    /// One page of leads matching `filter`, newest first, with the total
    /// count under the same filter
    pub async fn list(
        &self,
        filter: LeadFilter,
        page: Option<i64>,
        limit: Option<i64>,
    ) -> Result<LeadPage> {
        let request = self.page_request(page, limit)?;
        let filter = filter.normalized();

        let leads = self.store.query(&filter, Some(request)).await?;
        let total = self.store.count(&filter).await?;

        tracing::debug!(
            page = request.page,
            limit = request.limit,
            returned = leads.len(),
            total,
            "Listed leads"
        );

        Ok(LeadPage {
            leads,
            pagination: Pagination::new(request, total),
        })
    }

    pub async fn get(&self, id: LeadId) -> Result<Lead> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| LeadbookError::NotFound(NOT_FOUND.to_string()))
    }

    /// Validate and store a new lead
    ///
    /// Empty strings count as absent. Missing status defaults to `new`.
    pub async fn create(&self, request: NewLeadRequest) -> Result<Lead> {
        let (Some(first_name), Some(last_name), Some(email)) = (
            non_empty(request.first_name),
            non_empty(request.last_name),
            non_empty(request.email),
        ) else {
            return Err(LeadbookError::Validation(REQUIRED_FIELDS.to_string()));
        };

        if !is_valid_email(&email) {
            return Err(LeadbookError::Validation(INVALID_EMAIL.to_string()));
        }

        if self.store.find_by_email(&email).await?.is_some() {
            return Err(LeadbookError::Conflict(DUPLICATE_EMAIL.to_string()));
        }

        let lead = NewLead {
            first_name,
            last_name,
            email,
            phone: non_empty(request.phone),
            company: non_empty(request.company),
            budget_min: request.budget_min,
            budget_max: request.budget_max,
            location: non_empty(request.location),
            property_type: non_empty(request.property_type),
            timeline: non_empty(request.timeline),
            notes: non_empty(request.notes),
            status: non_empty(request.status).unwrap_or_else(|| DEFAULT_STATUS.to_string()),
            source: non_empty(request.source),
        };

        let stored = self.store.insert(lead).await?;
        tracing::info!(lead_id = %stored.id, "Lead created");
        Ok(stored)
    }

    /// Apply a field-level patch to an existing lead
    ///
    /// An empty string on an optional field clears it. Required fields and
    /// status cannot be set to an empty string.
    pub async fn update(&self, id: LeadId, update: LeadUpdate) -> Result<Lead> {
        if self.store.find_by_id(id).await?.is_none() {
            return Err(LeadbookError::NotFound(NOT_FOUND.to_string()));
        }

        let update = normalize_update(update)?;

        if let Some(email) = &update.email {
            if !is_valid_email(email) {
                return Err(LeadbookError::Validation(INVALID_EMAIL.to_string()));
            }
            if let Some(other) = self.store.find_by_email(email).await? {
                if other.id != id {
                    return Err(LeadbookError::Conflict(DUPLICATE_EMAIL.to_string()));
                }
            }
        }

        if update.is_empty() {
            return Err(LeadbookError::Validation(NO_FIELDS.to_string()));
        }

        let updated = self
            .store
            .update(id, &update)
            .await?
            .ok_or_else(|| LeadbookError::NotFound(NOT_FOUND.to_string()))?;

        tracing::info!(lead_id = %id, "Lead updated");
        Ok(updated)
    }

    pub async fn delete(&self, id: LeadId) -> Result<()> {
        if !self.store.delete(id).await? {
            return Err(LeadbookError::NotFound(NOT_FOUND.to_string()));
        }

        tracing::info!(lead_id = %id, "Lead deleted");
        Ok(())
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn normalize_update(mut update: LeadUpdate) -> Result<LeadUpdate> {
    fn clear_empty(field: &mut Option<Option<String>>) {
        if let Some(Some(value)) = field {
            if value.is_empty() {
                *field = Some(None);
            }
        }
    }

    let required = [&update.first_name, &update.last_name, &update.email];
    if required
        .iter()
        .any(|field| field.as_deref().is_some_and(str::is_empty))
    {
        return Err(LeadbookError::Validation(REQUIRED_NOT_EMPTY.to_string()));
    }

    if update.status.as_deref().is_some_and(str::is_empty) {
        update.status = None;
    }

    clear_empty(&mut update.phone);
    clear_empty(&mut update.company);
    clear_empty(&mut update.location);
    clear_empty(&mut update.property_type);
    clear_empty(&mut update.timeline);
    clear_empty(&mut update.notes);
    clear_empty(&mut update.source);

    Ok(update)
}
