//! Header row resolution
//!
//! Import files are produced by spreadsheets and other CRMs, so column names
//! vary. Each header is normalised and looked up in a fixed alias table; the
//! table is part of the import format and changing it breaks existing
//! templates.

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

/// Internal field identifier a CSV header resolves to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CanonicalField {
    FirstName,
    LastName,
    Email,
    Phone,
    Company,
    BudgetMin,
    BudgetMax,
    Location,
    PropertyType,
    Timeline,
    Notes,
    Status,
    Source,
}

impl CanonicalField {
    /// Fields every import file must provide a column for, in report order
    pub const REQUIRED: [CanonicalField; 3] = [
        CanonicalField::FirstName,
        CanonicalField::LastName,
        CanonicalField::Email,
    ];

    /// Column name as stored
    pub fn as_str(&self) -> &'static str {
        match self {
            CanonicalField::FirstName => "first_name",
            CanonicalField::LastName => "last_name",
            CanonicalField::Email => "email",
            CanonicalField::Phone => "phone",
            CanonicalField::Company => "company",
            CanonicalField::BudgetMin => "budget_min",
            CanonicalField::BudgetMax => "budget_max",
            CanonicalField::Location => "location",
            CanonicalField::PropertyType => "property_type",
            CanonicalField::Timeline => "timeline",
            CanonicalField::Notes => "notes",
            CanonicalField::Status => "status",
            CanonicalField::Source => "source",
        }
    }

    /// Returns true for the numeric budget columns
    pub fn is_budget(&self) -> bool {
        matches!(self, CanonicalField::BudgetMin | CanonicalField::BudgetMax)
    }
}

impl fmt::Display for CanonicalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalised alias → canonical field
const HEADER_ALIASES: &[(&str, CanonicalField)] = &[
    ("first name", CanonicalField::FirstName),
    ("firstname", CanonicalField::FirstName),
    ("first_name", CanonicalField::FirstName),
    ("last name", CanonicalField::LastName),
    ("lastname", CanonicalField::LastName),
    ("last_name", CanonicalField::LastName),
    ("email", CanonicalField::Email),
    ("email address", CanonicalField::Email),
    ("phone", CanonicalField::Phone),
    ("phone number", CanonicalField::Phone),
    ("company", CanonicalField::Company),
    ("organization", CanonicalField::Company),
    ("budget min", CanonicalField::BudgetMin),
    ("budget_min", CanonicalField::BudgetMin),
    ("min budget", CanonicalField::BudgetMin),
    ("budget max", CanonicalField::BudgetMax),
    ("budget_max", CanonicalField::BudgetMax),
    ("max budget", CanonicalField::BudgetMax),
    ("location", CanonicalField::Location),
    ("city", CanonicalField::Location),
    ("property type", CanonicalField::PropertyType),
    ("property_type", CanonicalField::PropertyType),
    ("type", CanonicalField::PropertyType),
    ("timeline", CanonicalField::Timeline),
    ("timeframe", CanonicalField::Timeline),
    ("notes", CanonicalField::Notes),
    ("comments", CanonicalField::Notes),
    ("status", CanonicalField::Status),
    ("source", CanonicalField::Source),
    ("lead source", CanonicalField::Source),
];

static ALIAS_INDEX: LazyLock<HashMap<&'static str, CanonicalField>> =
    LazyLock::new(|| HEADER_ALIASES.iter().copied().collect());

/// Normalises a raw header cell: quotes removed, lower-cased, whitespace
/// runs collapsed to one space and trimmed.
pub fn normalize_header(raw: &str) -> String {
    raw.replace('"', "")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Resolves a raw header cell through the alias table.
pub fn resolve_header(raw: &str) -> Option<CanonicalField> {
    ALIAS_INDEX.get(normalize_header(raw).as_str()).copied()
}

/// Column index → canonical field mapping for one import file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderMapping {
    columns: Vec<Option<CanonicalField>>,
}

impl HeaderMapping {
    /// Builds the mapping from the header line.
    ///
    /// The header is split on every comma; quoted header names containing
    /// commas are not supported.
    pub fn from_header_line(line: &str) -> Self {
        Self {
            columns: line.split(',').map(resolve_header).collect(),
        }
    }

    /// Mapped columns in ascending column order
    pub fn mapped(&self) -> impl Iterator<Item = (usize, CanonicalField)> + '_ {
        self.columns
            .iter()
            .enumerate()
            .filter_map(|(index, field)| field.map(|f| (index, f)))
    }

    /// Returns true when at least one column resolves to `field`
    pub fn contains(&self, field: CanonicalField) -> bool {
        self.columns.iter().any(|c| *c == Some(field))
    }

    /// Required fields with no column, in report order
    pub fn missing_required(&self) -> Vec<CanonicalField> {
        CanonicalField::REQUIRED
            .iter()
            .copied()
            .filter(|field| !self.contains(*field))
            .collect()
    }

    /// Number of header cells, mapped or not
    pub fn width(&self) -> usize {
        self.columns.len()
    }
}
