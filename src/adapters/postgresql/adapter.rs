//! PostgreSQL adapter implementing [`LeadStore`]

use crate::adapters::database::traits::LeadStore;
use crate::adapters::postgresql::client::PostgreSQLClient;
use crate::adapters::postgresql::models::{lead_from_row, leads_from_rows, LEAD_COLUMNS};
use crate::adapters::postgresql::query::{param_refs, SetClause, SqlParam, WhereClause};
use crate::domain::ids::LeadId;
use crate::domain::lead::{Lead, LeadFilter, LeadUpdate, NewLead, PageRequest};
use crate::domain::{LeadbookError, Result};
use async_trait::async_trait;
use std::sync::Arc;

/// PostgreSQL implementation of the lead store
///
/// Email uniqueness is enforced by the `buyer_leads_email_key` constraint;
/// violations surface as `Conflict` through the client's error mapping.
pub struct PostgreSQLAdapter {
    client: Arc<PostgreSQLClient>,
}

impl PostgreSQLAdapter {
    pub fn new(client: PostgreSQLClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

#[async_trait]
impl LeadStore for PostgreSQLAdapter {
    async fn test_connection(&self) -> Result<()> {
        self.client.test_connection().await
    }

    async fn ensure_schema(&self) -> Result<()> {
        self.client.run_migrations().await
    }

    async fn find_by_id(&self, id: LeadId) -> Result<Option<Lead>> {
        let sql = format!("SELECT {LEAD_COLUMNS} FROM buyer_leads WHERE id = $1");
        let row = self.client.query_opt(&sql, &[&id.value()]).await?;
        row.as_ref().map(lead_from_row).transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Lead>> {
        let sql = format!("SELECT {LEAD_COLUMNS} FROM buyer_leads WHERE email = $1");
        let row = self.client.query_opt(&sql, &[&email]).await?;
        row.as_ref().map(lead_from_row).transpose()
    }

    async fn insert(&self, lead: NewLead) -> Result<Lead> {
        let sql = format!(
            "INSERT INTO buyer_leads (
                first_name, last_name, email, phone, company,
                budget_min, budget_max, location, property_type,
                timeline, notes, status, source
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            RETURNING {LEAD_COLUMNS}"
        );

        let row = self
            .client
            .query_one(
                &sql,
                &[
                    &lead.first_name,
                    &lead.last_name,
                    &lead.email,
                    &lead.phone,
                    &lead.company,
                    &lead.budget_min,
                    &lead.budget_max,
                    &lead.location,
                    &lead.property_type,
                    &lead.timeline,
                    &lead.notes,
                    &lead.status,
                    &lead.source,
                ],
            )
            .await?;

        lead_from_row(&row)
    }

    async fn update(&self, id: LeadId, update: &LeadUpdate) -> Result<Option<Lead>> {
        let set = SetClause::for_update(update);
        let sql = format!(
            "UPDATE buyer_leads SET {} WHERE id = $1 RETURNING {LEAD_COLUMNS}",
            set.sql
        );

        let mut params: Vec<SqlParam> = Vec::with_capacity(set.params.len() + 1);
        params.push(Box::new(id.value()));
        params.extend(set.params);

        let row = self.client.query_opt(&sql, &param_refs(&params)).await?;
        row.as_ref().map(lead_from_row).transpose()
    }

    async fn delete(&self, id: LeadId) -> Result<bool> {
        let affected = self
            .client
            .execute("DELETE FROM buyer_leads WHERE id = $1", &[&id.value()])
            .await?;
        Ok(affected > 0)
    }

    async fn query(&self, filter: &LeadFilter, page: Option<PageRequest>) -> Result<Vec<Lead>> {
        let mut clause = WhereClause::for_filter(filter);
        let mut sql = format!(
            "SELECT {LEAD_COLUMNS} FROM buyer_leads{} ORDER BY created_at DESC, id DESC",
            clause.sql
        );

        if let Some(page) = page {
            let n = clause.next_index();
            sql.push_str(&format!(" LIMIT ${} OFFSET ${}", n, n + 1));
            clause.params.push(Box::new(page.limit));
            clause.params.push(Box::new(page.offset()));
        }

        let rows = self.client.query(&sql, &param_refs(&clause.params)).await?;
        leads_from_rows(&rows)
    }

    async fn count(&self, filter: &LeadFilter) -> Result<i64> {
        let clause = WhereClause::for_filter(filter);
        let sql = format!("SELECT COUNT(*) AS total FROM buyer_leads{}", clause.sql);
        let row = self.client.query_one(&sql, &param_refs(&clause.params)).await?;
        row.try_get("total")
            .map_err(|e| LeadbookError::Database(format!("Failed to read count: {e}")))
    }

    fn backend_name(&self) -> &'static str {
        "postgresql"
    }
}
