//! Domain identifier types
//!
//! Lead identifiers are assigned by the store. The newtype keeps them from
//! being confused with page numbers, counts or row numbers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lead identifier newtype wrapper
///
/// # Examples
///
/// ```
/// use leadbook::domain::ids::LeadId;
/// use std::str::FromStr;
///
/// let id = LeadId::from_str("42").unwrap();
/// assert_eq!(id.value(), 42);
/// assert!(LeadId::from_str("abc").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LeadId(i64);

impl LeadId {
    /// Wraps a raw identifier
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw identifier
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for LeadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for LeadId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(Self)
            .map_err(|_| "Invalid lead ID".to_string())
    }
}

impl From<i64> for LeadId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}
