//! CSV decode path
//!
//! Turns raw import text into per-row outcomes. Everything here is pure:
//! duplicate detection against the store happens in the importer.

use super::headers::{CanonicalField, HeaderMapping};
use super::tokenizer::split_record;
use crate::domain::errors::ImportError;
use crate::domain::lead::{is_valid_email, NewLead, DEFAULT_STATUS, IMPORT_SOURCE};
use std::fmt;

/// Why a data row was rejected before reaching the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowRejection {
    /// First name, last name or email is absent
    MissingRequiredFields,
    /// Email does not have the `local@domain.tld` shape
    InvalidEmail,
}

impl fmt::Display for RowRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowRejection::MissingRequiredFields => f.write_str("Missing required fields"),
            RowRejection::InvalidEmail => f.write_str("Invalid email format"),
        }
    }
}

/// Field values collected from one data row
///
/// Absent values are `None`, never the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadDraft {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub budget_min: Option<i64>,
    pub budget_max: Option<i64>,
    pub location: Option<String>,
    pub property_type: Option<String>,
    pub timeline: Option<String>,
    pub notes: Option<String>,
    pub status: Option<String>,
    pub source: Option<String>,
}

impl LeadDraft {
    /// Maps tokenised values through the header mapping.
    ///
    /// Columns are applied left to right and empty cells are skipped, so a
    /// later column for the same field only wins when it has a value.
    pub fn from_values(mapping: &HeaderMapping, values: &[String]) -> Self {
        let mut draft = Self::default();

        for (index, field) in mapping.mapped() {
            let Some(raw) = values.get(index) else {
                continue;
            };
            let value = raw.replace('"', "");
            if value.is_empty() {
                continue;
            }
            draft.set(field, value);
        }

        draft
    }

    fn set(&mut self, field: CanonicalField, value: String) {
        let slot = match field {
            CanonicalField::BudgetMin | CanonicalField::BudgetMax => {
                if let Some(amount) = parse_budget(&value) {
                    if field == CanonicalField::BudgetMin {
                        self.budget_min = Some(amount);
                    } else {
                        self.budget_max = Some(amount);
                    }
                }
                return;
            }
            CanonicalField::FirstName => &mut self.first_name,
            CanonicalField::LastName => &mut self.last_name,
            CanonicalField::Email => &mut self.email,
            CanonicalField::Phone => &mut self.phone,
            CanonicalField::Company => &mut self.company,
            CanonicalField::Location => &mut self.location,
            CanonicalField::PropertyType => &mut self.property_type,
            CanonicalField::Timeline => &mut self.timeline,
            CanonicalField::Notes => &mut self.notes,
            CanonicalField::Status => &mut self.status,
            CanonicalField::Source => &mut self.source,
        };
        *slot = Some(value);
    }

    /// Validates the draft and applies import defaults.
    pub fn into_new_lead(self) -> Result<NewLead, RowRejection> {
        let (Some(first_name), Some(last_name), Some(email)) =
            (self.first_name, self.last_name, self.email)
        else {
            return Err(RowRejection::MissingRequiredFields);
        };

        if !is_valid_email(&email) {
            return Err(RowRejection::InvalidEmail);
        }

        Ok(NewLead {
            first_name,
            last_name,
            email,
            phone: self.phone,
            company: self.company,
            budget_min: self.budget_min,
            budget_max: self.budget_max,
            location: self.location,
            property_type: self.property_type,
            timeline: self.timeline,
            notes: self.notes,
            status: self.status.unwrap_or_else(|| DEFAULT_STATUS.to_string()),
            source: Some(self.source.unwrap_or_else(|| IMPORT_SOURCE.to_string())),
        })
    }
}

/// Parses a budget cell by keeping only its ASCII digits.
///
/// `"$500,000"` becomes `500000`. Cells with no digits, or whose digits do
/// not fit an `i64`, yield `None`.
pub fn parse_budget(raw: &str) -> Option<i64> {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}

/// Outcome of decoding one data row
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedRow {
    /// 1-based line number in the original file, header included
    pub row_number: usize,
    pub outcome: Result<NewLead, RowRejection>,
}

/// An import payload whose header has been resolved
#[derive(Debug)]
pub struct CsvDocument<'a> {
    mapping: HeaderMapping,
    data_lines: Vec<&'a str>,
}

impl<'a> CsvDocument<'a> {
    /// Splits the payload into lines and resolves the header row.
    ///
    /// Fails without looking at any data row when the payload has fewer
    /// than two lines or the header lacks a required column.
    pub fn parse(input: &'a str) -> Result<Self, ImportError> {
        let mut lines = input.trim().split('\n');

        let header = lines.next().unwrap_or_default();
        let data_lines: Vec<&str> = lines.collect();
        if data_lines.is_empty() {
            return Err(ImportError::TooFewLines);
        }

        let mapping = HeaderMapping::from_header_line(header);
        let missing = mapping.missing_required();
        if !missing.is_empty() {
            return Err(ImportError::MissingRequiredColumns(
                missing.iter().map(|f| f.as_str().to_string()).collect(),
            ));
        }

        Ok(Self {
            mapping,
            data_lines,
        })
    }

    /// Resolved header mapping
    pub fn mapping(&self) -> &HeaderMapping {
        &self.mapping
    }

    /// Number of data rows, blank lines included
    pub fn row_count(&self) -> usize {
        self.data_lines.len()
    }

    /// Decodes data rows lazily, in file order.
    pub fn rows(&self) -> impl Iterator<Item = DecodedRow> + '_ {
        self.data_lines
            .iter()
            .enumerate()
            .map(move |(index, line)| {
                let values = split_record(line);
                let draft = LeadDraft::from_values(&self.mapping, &values);
                DecodedRow {
                    row_number: index + 2,
                    outcome: draft.into_new_lead(),
                }
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(input: &str) -> Vec<DecodedRow> {
        CsvDocument::parse(input).unwrap().rows().collect()
    }

    #[test]
    fn test_parse_budget() {
        assert_eq!(parse_budget("$500,000"), Some(500_000));
        assert_eq!(parse_budget("750000"), Some(750_000));
        assert_eq!(parse_budget("n/a"), None);
        assert_eq!(parse_budget("99999999999999999999999"), None);
    }

    #[test]
    fn test_header_only_is_fatal() {
        let err = CsvDocument::parse("first name,last name,email\n").unwrap_err();
        assert_eq!(err, ImportError::TooFewLines);
    }

    #[test]
    fn test_empty_payload_is_fatal() {
        assert_eq!(
            CsvDocument::parse("   ").unwrap_err(),
            ImportError::TooFewLines
        );
    }

    #[test]
    fn test_missing_required_columns_is_fatal() {
        let err = CsvDocument::parse("first name,phone\nJane,555").unwrap_err();
        assert_eq!(
            err,
            ImportError::MissingRequiredColumns(vec![
                "last_name".to_string(),
                "email".to_string()
            ])
        );
    }

    #[test]
    fn test_decode_applies_import_defaults() {
        let rows = decode("First Name,Last Name,Email\nJane,Doe,jane@example.com");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].row_number, 2);

        let lead = rows[0].outcome.clone().unwrap();
        assert_eq!(lead.first_name, "Jane");
        assert_eq!(lead.status, "new");
        assert_eq!(lead.source.as_deref(), Some("import"));
        assert_eq!(lead.phone, None);
    }

    #[test]
    fn test_explicit_status_and_source_are_kept() {
        let rows = decode("first_name,last_name,email,status,lead source\nA,B,a@b.co,qualified,Zillow");
        let lead = rows[0].outcome.clone().unwrap();
        assert_eq!(lead.status, "qualified");
        assert_eq!(lead.source.as_deref(), Some("Zillow"));
    }

    #[test]
    fn test_currency_budget() {
        let rows = decode(
            "first name,last name,email,budget min,budget max\nJane,Doe,jane@example.com,\"$500,000\",$750k",
        );
        let lead = rows[0].outcome.clone().unwrap();
        assert_eq!(lead.budget_min, Some(500_000));
        assert_eq!(lead.budget_max, Some(750));
    }

    #[test]
    fn test_unparseable_budget_is_silently_unset() {
        let rows = decode("first name,last name,email,min budget\nJane,Doe,jane@example.com,TBD");
        let lead = rows[0].outcome.clone().unwrap();
        assert_eq!(lead.budget_min, None);
    }

    #[test]
    fn test_row_rejections() {
        let rows = decode(
            "first name,last name,email\nJane,,jane@example.com\nJohn,Smith,not-an-email\n\nAmy,Lee,amy@example.com",
        );
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].outcome, Err(RowRejection::MissingRequiredFields));
        assert_eq!(rows[1].outcome, Err(RowRejection::InvalidEmail));
        assert_eq!(rows[2].row_number, 4);
        assert_eq!(rows[2].outcome, Err(RowRejection::MissingRequiredFields));
        assert!(rows[3].outcome.is_ok());
        assert_eq!(rows[3].row_number, 5);
    }

    #[test]
    fn test_short_row_leaves_trailing_fields_absent() {
        let rows = decode("first name,last name,email,phone\nJane,Doe,jane@example.com");
        assert_eq!(rows[0].outcome.clone().unwrap().phone, None);
    }

    #[test]
    fn test_later_duplicate_column_overrides_only_when_filled() {
        let mapping = HeaderMapping::from_header_line("email,first name,last name,email address");
        let values = vec![
            "a@example.com".to_string(),
            "A".to_string(),
            "B".to_string(),
            String::new(),
        ];
        let draft = LeadDraft::from_values(&mapping, &values);
        assert_eq!(draft.email.as_deref(), Some("a@example.com"));

        let values = vec![
            "a@example.com".to_string(),
            "A".to_string(),
            "B".to_string(),
            "b@example.com".to_string(),
        ];
        let draft = LeadDraft::from_values(&mapping, &values);
        assert_eq!(draft.email.as_deref(), Some("b@example.com"));
    }

    #[test]
    fn test_crlf_line_endings() {
        let rows = decode("first name,last name,email\r\nJane,Doe,jane@example.com\r\n");
        let lead = rows[0].outcome.clone().unwrap();
        assert_eq!(lead.email, "jane@example.com");
    }

    #[test]
    fn test_rejection_messages() {
        assert_eq!(
            RowRejection::MissingRequiredFields.to_string(),
            "Missing required fields"
        );
        assert_eq!(RowRejection::InvalidEmail.to_string(), "Invalid email format");
    }
}
