//! SQL assembly for filtered reads and field-level updates
//!
//! Statements are built from fixed fragments; every user value is bound as a
//! positional parameter.

use crate::domain::lead::{LeadFilter, LeadUpdate};
use tokio_postgres::types::ToSql;

/// Bound statement parameter
pub type SqlParam = Box<dyn ToSql + Sync + Send>;

/// Borrows boxed parameters in the shape tokio-postgres expects
pub fn param_refs(params: &[SqlParam]) -> Vec<&(dyn ToSql + Sync)> {
    params
        .iter()
        .map(|p| p.as_ref() as &(dyn ToSql + Sync))
        .collect()
}

/// Escapes LIKE metacharacters so search input matches literally
pub fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

/// `WHERE` clause plus its parameters, numbered from `$1`
#[derive(Default)]
pub struct WhereClause {
    pub sql: String,
    pub params: Vec<SqlParam>,
}

impl WhereClause {
    /// Builds the clause for a list/export filter.
    pub fn for_filter(filter: &LeadFilter) -> Self {
        let mut conditions: Vec<String> = Vec::new();
        let mut params: Vec<SqlParam> = Vec::new();

        if let Some(search) = &filter.search {
            params.push(Box::new(format!("%{}%", escape_like(search))));
            let n = params.len();
            let columns = ["first_name", "last_name", "email", "company", "location"];
            let matches: Vec<String> = columns
                .iter()
                .map(|c| format!("LOWER({c}) LIKE LOWER(${n}) ESCAPE '\\'"))
                .collect();
            conditions.push(format!("({})", matches.join(" OR ")));
        }

        for (column, value) in [
            ("status", &filter.status),
            ("property_type", &filter.property_type),
            ("timeline", &filter.timeline),
        ] {
            if let Some(value) = value {
                params.push(Box::new(value.clone()));
                conditions.push(format!("{column} = ${}", params.len()));
            }
        }

        let sql = if conditions.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", conditions.join(" AND "))
        };

        Self { sql, params }
    }

    /// Index the next appended parameter will take
    pub fn next_index(&self) -> usize {
        self.params.len() + 1
    }
}

/// `SET` list for a field-level update
///
/// Parameters start at `$2`; `$1` is reserved for the lead id. `updated_at`
/// is always set.
pub struct SetClause {
    pub sql: String,
    pub params: Vec<SqlParam>,
}

impl SetClause {
    pub fn for_update(update: &LeadUpdate) -> Self {
        let mut assignments: Vec<String> = Vec::new();
        let mut params: Vec<SqlParam> = Vec::new();

        let mut assign = |column: &str, value: SqlParam| {
            params.push(value);
            assignments.push(format!("{column} = ${}", params.len() + 1));
        };

        if let Some(v) = &update.first_name {
            assign("first_name", Box::new(v.clone()));
        }
        if let Some(v) = &update.last_name {
            assign("last_name", Box::new(v.clone()));
        }
        if let Some(v) = &update.email {
            assign("email", Box::new(v.clone()));
        }
        if let Some(v) = &update.phone {
            assign("phone", Box::new(v.clone()));
        }
        if let Some(v) = &update.company {
            assign("company", Box::new(v.clone()));
        }
        if let Some(v) = update.budget_min {
            assign("budget_min", Box::new(v));
        }
        if let Some(v) = update.budget_max {
            assign("budget_max", Box::new(v));
        }
        if let Some(v) = &update.location {
            assign("location", Box::new(v.clone()));
        }
        if let Some(v) = &update.property_type {
            assign("property_type", Box::new(v.clone()));
        }
        if let Some(v) = &update.timeline {
            assign("timeline", Box::new(v.clone()));
        }
        if let Some(v) = &update.notes {
            assign("notes", Box::new(v.clone()));
        }
        if let Some(v) = &update.status {
            assign("status", Box::new(v.clone()));
        }
        if let Some(v) = &update.source {
            assign("source", Box::new(v.clone()));
        }

        assignments.push("updated_at = NOW()".to_string());

        Self {
            sql: assignments.join(", "),
            params,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_like() {
        assert_eq!(escape_like("50%_off\\"), "50\\%\\_off\\\\");
        assert_eq!(escape_like("plain"), "plain");
    }

    #[test]
    fn test_empty_filter() {
        let clause = WhereClause::for_filter(&LeadFilter::default());
        assert!(clause.sql.is_empty());
        assert!(clause.params.is_empty());
        assert_eq!(clause.next_index(), 1);
    }

    #[test]
    fn test_search_and_equality_filters() {
        let filter = LeadFilter {
            search: Some("acme".to_string()),
            status: Some("new".to_string()),
            timeline: Some("ASAP".to_string()),
            ..Default::default()
        };
        let clause = WhereClause::for_filter(&filter);

        assert!(clause.sql.starts_with(" WHERE (LOWER(first_name) LIKE LOWER($1)"));
        assert!(clause.sql.contains("OR LOWER(location) LIKE LOWER($1)"));
        assert!(clause.sql.contains("AND status = $2"));
        assert!(clause.sql.ends_with("AND timeline = $3"));
        assert_eq!(clause.params.len(), 3);
        assert_eq!(clause.next_index(), 4);
    }

    #[test]
    fn test_set_clause_numbering() {
        let update = LeadUpdate {
            status: Some("contacted".to_string()),
            phone: Some(None),
            budget_min: Some(Some(100)),
            ..Default::default()
        };
        let clause = SetClause::for_update(&update);
        assert_eq!(
            clause.sql,
            "phone = $2, budget_min = $3, status = $4, updated_at = NOW()"
        );
        assert_eq!(clause.params.len(), 3);
    }
}
