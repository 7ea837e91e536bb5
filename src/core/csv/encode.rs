//! CSV encode path

use crate::domain::lead::Lead;
use chrono::{DateTime, SecondsFormat, Utc};

/// Export header row, in column order
pub const EXPORT_HEADERS: [&str; 16] = [
    "ID",
    "First Name",
    "Last Name",
    "Email",
    "Phone",
    "Company",
    "Budget Min",
    "Budget Max",
    "Location",
    "Property Type",
    "Timeline",
    "Notes",
    "Status",
    "Source",
    "Created At",
    "Updated At",
];

/// Wraps a text cell in quotes, doubling any inner quote. Absent text
/// renders as `""`.
pub fn quote_text(value: Option<&str>) -> String {
    format!("\"{}\"", value.unwrap_or_default().replace('"', "\"\""))
}

fn number_cell(value: Option<i64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Formats a timestamp as `2024-01-15T10:30:00.000Z`.
pub fn timestamp_cell(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Encodes one lead as a CSV line without terminator.
pub fn encode_lead(lead: &Lead) -> String {
    let cells = [
        lead.id.to_string(),
        quote_text(Some(&lead.first_name)),
        quote_text(Some(&lead.last_name)),
        quote_text(Some(&lead.email)),
        quote_text(lead.phone.as_deref()),
        quote_text(lead.company.as_deref()),
        number_cell(lead.budget_min),
        number_cell(lead.budget_max),
        quote_text(lead.location.as_deref()),
        quote_text(lead.property_type.as_deref()),
        quote_text(lead.timeline.as_deref()),
        quote_text(lead.notes.as_deref()),
        quote_text(Some(&lead.status)),
        quote_text(lead.source.as_deref()),
        timestamp_cell(&lead.created_at),
        timestamp_cell(&lead.updated_at),
    ];
    cells.join(",")
}

/// Encodes leads under the export header. Lines are joined with `\n` and
/// there is no trailing newline.
///
/// # Examples
///
/// ```
/// use leadbook::core::csv::encode_leads;
///
/// let csv = encode_leads(&[]);
/// assert!(csv.starts_with("ID,First Name,Last Name,Email"));
/// assert!(!csv.ends_with('\n'));
/// ```
pub fn encode_leads(leads: &[Lead]) -> String {
    let mut lines = Vec::with_capacity(leads.len() + 1);
    lines.push(EXPORT_HEADERS.join(","));
    lines.extend(leads.iter().map(encode_lead));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ids::LeadId;
    use crate::domain::lead::NewLead;
    use chrono::TimeZone;

    fn lead() -> Lead {
        NewLead {
            first_name: "Jane".to_string(),
            last_name: "O\"Neil".to_string(),
            email: "jane@example.com".to_string(),
            company: Some("Acme, Inc".to_string()),
            budget_min: Some(500_000),
            status: "new".to_string(),
            ..Default::default()
        }
        .into_lead(
            LeadId::new(7),
            Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap(),
        )
    }

    #[test]
    fn test_header_line() {
        assert_eq!(
            encode_leads(&[]),
            "ID,First Name,Last Name,Email,Phone,Company,Budget Min,Budget Max,Location,Property Type,Timeline,Notes,Status,Source,Created At,Updated At"
        );
    }

    #[test]
    fn test_encode_row() {
        assert_eq!(
            encode_lead(&lead()),
            r#"7,"Jane","O""Neil","jane@example.com","","Acme, Inc",500000,,"","","","","new","",2024-01-15T10:30:00.000Z,2024-01-15T10:30:00.000Z"#
        );
    }

    #[test]
    fn test_rows_are_newline_joined() {
        let csv = encode_leads(&[lead(), lead()]);
        assert_eq!(csv.lines().count(), 3);
        assert!(!csv.ends_with('\n'));
    }

    #[test]
    fn test_quote_text() {
        assert_eq!(quote_text(None), "\"\"");
        assert_eq!(quote_text(Some("a\"b")), "\"a\"\"b\"");
    }
}
