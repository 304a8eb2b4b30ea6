// Employee identifiers: `EMP` followed by a sequence number padded to three digits.
//
// Allocation scans the roster for the highest sequence number and adds one.
// This is only collision free for a single writer. Two store instances sharing
// a key-value entry will hand out the same identifier, and nothing here
// detects that.

use serde::{Deserialize, Serialize};
use std::fmt;

pub const ID_PREFIX: &str = "EMP";

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(String);

impl EmployeeId {
    pub fn from_sequence(number: u64) -> Self {
        Self(format!("{ID_PREFIX}{number:03}"))
    }

    /// Leading digits after the prefix. Identifiers without them are not part of the sequence.
    pub fn sequence_number(&self) -> Option<u64> {
        let rest = self.0.strip_prefix(ID_PREFIX)?;
        let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
        digits.parse().ok()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for EmployeeId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for EmployeeId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for EmployeeId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

/// Highest sequence number in use, 0 when none.
pub fn highest_sequence<'a>(ids: impl IntoIterator<Item = &'a EmployeeId>) -> u64 {
    ids.into_iter()
        .filter_map(EmployeeId::sequence_number)
        .max()
        .unwrap_or(0)
}
