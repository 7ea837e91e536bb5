//! Lead domain model
//!
//! A lead is a prospective buyer: contact details, a budget range, property
//! preferences and a pipeline status. It is the only entity Leadbook stores.

use super::ids::LeadId;
use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_with::rust::double_option;
use std::sync::LazyLock;

/// Status given to leads created without one
pub const DEFAULT_STATUS: &str = "new";

/// Source given to leads accepted through CSV import without one
pub const IMPORT_SOURCE: &str = "import";

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// Checks the `local@domain.tld` shape required of every lead email.
///
/// # Examples
///
/// ```
/// use leadbook::domain::lead::is_valid_email;
///
/// assert!(is_valid_email("jane@example.com"));
/// assert!(!is_valid_email("not-an-email"));
/// assert!(!is_valid_email("jane doe@example.com"));
/// ```
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// A stored lead record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lead {
    pub id: LeadId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub budget_min: Option<i64>,
    pub budget_max: Option<i64>,
    pub location: Option<String>,
    pub property_type: Option<String>,
    pub timeline: Option<String>,
    pub notes: Option<String>,
    pub status: String,
    pub source: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insert payload for a lead that has passed validation
///
/// The store assigns `id`, `created_at` and `updated_at`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NewLead {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub budget_min: Option<i64>,
    pub budget_max: Option<i64>,
    pub location: Option<String>,
    pub property_type: Option<String>,
    pub timeline: Option<String>,
    pub notes: Option<String>,
    pub status: String,
    pub source: Option<String>,
}

impl NewLead {
    /// Materialises the record a store would hold after inserting this lead.
    pub fn into_lead(self, id: LeadId, now: DateTime<Utc>) -> Lead {
        Lead {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone: self.phone,
            company: self.company,
            budget_min: self.budget_min,
            budget_max: self.budget_max,
            location: self.location,
            property_type: self.property_type,
            timeline: self.timeline,
            notes: self.notes,
            status: self.status,
            source: self.source,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Unvalidated create request as received from a client
///
/// Every field is optional here so that missing required values can be
/// reported with a single message instead of a deserialization error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewLeadRequest {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub budget_min: Option<i64>,
    #[serde(default)]
    pub budget_max: Option<i64>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub property_type: Option<String>,
    #[serde(default)]
    pub timeline: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
}

/// Field-level patch for an existing lead
///
/// Optional fields distinguish three states: absent (`None`, leave as is),
/// explicitly cleared (`Some(None)`, sent as JSON `null`) and set
/// (`Some(Some(value))`). Required fields can only be absent or set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LeadUpdate {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, with = "double_option", skip_serializing_if = "Option::is_none")]
    pub phone: Option<Option<String>>,
    #[serde(default, with = "double_option", skip_serializing_if = "Option::is_none")]
    pub company: Option<Option<String>>,
    #[serde(default, with = "double_option", skip_serializing_if = "Option::is_none")]
    pub budget_min: Option<Option<i64>>,
    #[serde(default, with = "double_option", skip_serializing_if = "Option::is_none")]
    pub budget_max: Option<Option<i64>>,
    #[serde(default, with = "double_option", skip_serializing_if = "Option::is_none")]
    pub location: Option<Option<String>>,
    #[serde(default, with = "double_option", skip_serializing_if = "Option::is_none")]
    pub property_type: Option<Option<String>>,
    #[serde(default, with = "double_option", skip_serializing_if = "Option::is_none")]
    pub timeline: Option<Option<String>>,
    #[serde(default, with = "double_option", skip_serializing_if = "Option::is_none")]
    pub notes: Option<Option<String>>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, with = "double_option", skip_serializing_if = "Option::is_none")]
    pub source: Option<Option<String>>,
}

impl LeadUpdate {
    /// Returns true when the patch does not touch any field
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.company.is_none()
            && self.budget_min.is_none()
            && self.budget_max.is_none()
            && self.location.is_none()
            && self.property_type.is_none()
            && self.timeline.is_none()
            && self.notes.is_none()
            && self.status.is_none()
            && self.source.is_none()
    }

    /// Applies the patch to a record in place and stamps `updated_at`.
    pub fn apply_to(&self, lead: &mut Lead, now: DateTime<Utc>) {
        fn set<T: Clone>(target: &mut T, value: &Option<T>) {
            if let Some(v) = value {
                *target = v.clone();
            }
        }

        set(&mut lead.first_name, &self.first_name);
        set(&mut lead.last_name, &self.last_name);
        set(&mut lead.email, &self.email);
        set(&mut lead.phone, &self.phone);
        set(&mut lead.company, &self.company);
        set(&mut lead.budget_min, &self.budget_min);
        set(&mut lead.budget_max, &self.budget_max);
        set(&mut lead.location, &self.location);
        set(&mut lead.property_type, &self.property_type);
        set(&mut lead.timeline, &self.timeline);
        set(&mut lead.notes, &self.notes);
        set(&mut lead.status, &self.status);
        set(&mut lead.source, &self.source);
        lead.updated_at = now;
    }
}

/// Filters shared by the list and export queries
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadFilter {
    /// Case-insensitive substring matched against first name, last name,
    /// email, company and location
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub property_type: Option<String>,
    #[serde(default)]
    pub timeline: Option<String>,
}

impl LeadFilter {
    /// Drops empty filter values so `?status=` behaves like no filter.
    pub fn normalized(self) -> Self {
        fn keep(value: Option<String>) -> Option<String> {
            value.filter(|v| !v.is_empty())
        }

        Self {
            search: keep(self.search),
            status: keep(self.status),
            property_type: keep(self.property_type),
            timeline: keep(self.timeline),
        }
    }

    /// Evaluates the filter against a record the way the SQL query does.
    pub fn matches(&self, lead: &Lead) -> bool {
        if let Some(search) = &self.search {
            let needle = search.to_lowercase();
            let hit = |value: Option<&str>| {
                value
                    .map(|v| v.to_lowercase().contains(&needle))
                    .unwrap_or(false)
            };
            let found = hit(Some(&lead.first_name))
                || hit(Some(&lead.last_name))
                || hit(Some(&lead.email))
                || hit(lead.company.as_deref())
                || hit(lead.location.as_deref());
            if !found {
                return false;
            }
        }

        if let Some(status) = &self.status {
            if &lead.status != status {
                return false;
            }
        }

        if let Some(property_type) = &self.property_type {
            if lead.property_type.as_ref() != Some(property_type) {
                return false;
            }
        }

        if let Some(timeline) = &self.timeline {
            if lead.timeline.as_ref() != Some(timeline) {
                return false;
            }
        }

        true
    }
}

/// One page of a list query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i64,
    pub limit: i64,
}

impl PageRequest {
    pub fn new(page: i64, limit: i64) -> Self {
        Self { page, limit }
    }

    /// Rows to skip before this page, saturating at `i64::MAX`
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }
}

/// Pagination metadata returned alongside a page of leads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: i64,
    pub limit: i64,
    pub total: i64,
    pub total_pages: i64,
}

impl Pagination {
    pub fn new(request: PageRequest, total: i64) -> Self {
        let total_pages = if request.limit > 0 {
            (total + request.limit - 1) / request.limit
        } else {
            0
        };
        Self {
            page: request.page,
            limit: request.limit,
            total,
            total_pages,
        }
    }
}

/// A page of leads with its pagination metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadPage {
    pub leads: Vec<Lead>,
    pub pagination: Pagination,
}
