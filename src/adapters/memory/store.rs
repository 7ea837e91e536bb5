use crate::adapters::database::traits::LeadStore;
use crate::domain::ids::LeadId;
use crate::domain::lead::{Lead, LeadFilter, LeadUpdate, NewLead, PageRequest};
use crate::domain::{LeadbookError, Result};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

const DUPLICATE_EMAIL: &str = "A lead with this email already exists";

#[derive(Debug, Default)]
struct MemoryState {
    last_id: i64,
    leads: BTreeMap<LeadId, Lead>,
}

impl MemoryState {
    fn email_taken(&self, email: &str, except: Option<LeadId>) -> bool {
        self.leads
            .values()
            .any(|lead| lead.email == email && Some(lead.id) != except)
    }

    /// Matching leads, newest first; ties broken by id so insertion order
    /// within one clock tick is stable
    fn matching(&self, filter: &LeadFilter) -> Vec<&Lead> {
        let mut leads: Vec<&Lead> = self.leads.values().filter(|l| filter.matches(l)).collect();
        leads.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        leads
    }
}

/// Lead store held in process memory
#[derive(Debug, Default)]
pub struct MemoryLeadStore {
    state: RwLock<MemoryState>,
}

impl MemoryLeadStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored leads
    pub async fn len(&self) -> usize {
        self.state.read().await.leads.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl LeadStore for MemoryLeadStore {
    async fn test_connection(&self) -> Result<()> {
        Ok(())
    }

    async fn ensure_schema(&self) -> Result<()> {
        Ok(())
    }

    async fn find_by_id(&self, id: LeadId) -> Result<Option<Lead>> {
        Ok(self.state.read().await.leads.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Lead>> {
        Ok(self
            .state
            .read()
            .await
            .leads
            .values()
            .find(|lead| lead.email == email)
            .cloned())
    }

    async fn insert(&self, lead: NewLead) -> Result<Lead> {
        let mut state = self.state.write().await;
        if state.email_taken(&lead.email, None) {
            return Err(LeadbookError::Conflict(DUPLICATE_EMAIL.to_string()));
        }

        state.last_id += 1;
        let id = LeadId::new(state.last_id);
        let stored = lead.into_lead(id, Utc::now());
        state.leads.insert(id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, id: LeadId, update: &LeadUpdate) -> Result<Option<Lead>> {
        let mut state = self.state.write().await;
        if let Some(email) = &update.email {
            if state.email_taken(email, Some(id)) {
                return Err(LeadbookError::Conflict(DUPLICATE_EMAIL.to_string()));
            }
        }

        let Some(lead) = state.leads.get_mut(&id) else {
            return Ok(None);
        };
        update.apply_to(lead, Utc::now());
        Ok(Some(lead.clone()))
    }

    async fn delete(&self, id: LeadId) -> Result<bool> {
        Ok(self.state.write().await.leads.remove(&id).is_some())
    }

    async fn query(&self, filter: &LeadFilter, page: Option<PageRequest>) -> Result<Vec<Lead>> {
        let state = self.state.read().await;
        let matching = state.matching(filter).into_iter();

        let leads = match page {
            Some(page) => matching
                .skip(usize::try_from(page.offset()).unwrap_or(0))
                .take(usize::try_from(page.limit).unwrap_or(0))
                .cloned()
                .collect(),
            None => matching.cloned().collect(),
        };
        Ok(leads)
    }

    async fn count(&self, filter: &LeadFilter) -> Result<i64> {
        let count = self.state.read().await.matching(filter).len();
        Ok(i64::try_from(count).unwrap_or(i64::MAX))
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
