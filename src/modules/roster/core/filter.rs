// Roster filtering: a pure projection over the current collection.
//
// The visible set is the intersection of three predicates:
// - search term, a case-insensitive substring of the full name (empty matches all)
// - gender, "All" or one gender
// - status, "All" | "Active" | "Inactive"
//
// Input order is preserved and the input is never modified.

use crate::modules::roster::core::employee::{Employee, Gender};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GenderFilter {
    #[default]
    All,
    Male,
    Female,
    Other,
}

impl GenderFilter {
    pub fn matches(self, gender: Gender) -> bool {
        match self {
            GenderFilter::All => true,
            GenderFilter::Male => gender == Gender::Male,
            GenderFilter::Female => gender == Gender::Female,
            GenderFilter::Other => gender == Gender::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Inactive,
}

impl StatusFilter {
    pub fn matches(self, is_active: bool) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Active => is_active,
            StatusFilter::Inactive => !is_active,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterFilter {
    pub search_term: String,
    pub gender: GenderFilter,
    pub status: StatusFilter,
}

impl RosterFilter {
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    pub fn gender(mut self, gender: GenderFilter) -> Self {
        self.gender = gender;
        self
    }

    pub fn status(mut self, status: StatusFilter) -> Self {
        self.status = status;
        self
    }

    pub fn matches(&self, employee: &Employee) -> bool {
        let needle = self.search_term.to_lowercase();
        self.matches_with_needle(employee, &needle)
    }

    pub fn apply(&self, employees: &[Employee]) -> Vec<Employee> {
        let needle = self.search_term.to_lowercase();
        employees
            .iter()
            .filter(|employee| self.matches_with_needle(employee, &needle))
            .cloned()
            .collect()
    }

    fn matches_with_needle(&self, employee: &Employee, needle: &str) -> bool {
        employee.full_name.to_lowercase().contains(needle)
            && self.gender.matches(employee.gender)
            && self.status.matches(employee.is_active)
    }
}
