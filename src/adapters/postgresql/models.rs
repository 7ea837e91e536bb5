//! Row mapping for the `buyer_leads` table

use crate::domain::ids::LeadId;
use crate::domain::lead::Lead;
use crate::domain::{LeadbookError, Result};
use tokio_postgres::Row;

/// Column list shared by every statement that returns full leads
pub const LEAD_COLUMNS: &str = "id, first_name, last_name, email, phone, company, \
     budget_min, budget_max, location, property_type, timeline, notes, \
     status, source, created_at, updated_at";

fn column<'a, T>(row: &'a Row, name: &str) -> Result<T>
where
    T: tokio_postgres::types::FromSql<'a>,
{
    row.try_get(name)
        .map_err(|e| LeadbookError::Database(format!("Failed to read column {name}: {e}")))
}

/// Converts one `buyer_leads` row into a [`Lead`]
pub fn lead_from_row(row: &Row) -> Result<Lead> {
    Ok(Lead {
        id: LeadId::new(column(row, "id")?),
        first_name: column(row, "first_name")?,
        last_name: column(row, "last_name")?,
        email: column(row, "email")?,
        phone: column(row, "phone")?,
        company: column(row, "company")?,
        budget_min: column(row, "budget_min")?,
        budget_max: column(row, "budget_max")?,
        location: column(row, "location")?,
        property_type: column(row, "property_type")?,
        timeline: column(row, "timeline")?,
        notes: column(row, "notes")?,
        status: column(row, "status")?,
        source: column(row, "source")?,
        created_at: column(row, "created_at")?,
        updated_at: column(row, "updated_at")?,
    })
}

/// Converts a result set, failing on the first unreadable row
pub fn leads_from_rows(rows: &[Row]) -> Result<Vec<Lead>> {
    rows.iter().map(lead_from_row).collect()
}
