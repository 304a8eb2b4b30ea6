// Employee record and the form data that creates or edits it.
//
// Persisted shape
// - Field names are camelCase (`fullName`, `dateOfBirth`, `isActive`, ...).
// - Gender is spelled "Male" | "Female" | "Other".
// - dateOfBirth is a calendar date (YYYY-MM-DD); createdAt/updatedAt are RFC 3339 UTC.
//
// Invariants
// - `id` and `created_at` never change after creation.
// - `updated_at` moves strictly forward on every mutation, so created_at <= updated_at.

use crate::modules::roster::core::employee_id::EmployeeId;
use chrono::{DateTime, NaiveDate, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeFormData {
    pub full_name: String,
    pub gender: Gender,
    pub date_of_birth: NaiveDate,
    #[serde(default)]
    pub profile_image: String,
    pub state: String,
    #[serde(default = "active_by_default")]
    pub is_active: bool,
}

fn active_by_default() -> bool {
    true
}

impl EmployeeFormData {
    /// Pre-fills the edit form from an existing record.
    pub fn from_employee(employee: &Employee) -> Self {
        Self {
            full_name: employee.full_name.clone(),
            gender: employee.gender,
            date_of_birth: employee.date_of_birth,
            profile_image: employee.profile_image.clone(),
            state: employee.state.clone(),
            is_active: employee.is_active,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: EmployeeId,
    pub full_name: String,
    pub gender: Gender,
    pub date_of_birth: NaiveDate,
    #[serde(default)]
    pub profile_image: String,
    pub state: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Employee {
    pub fn create(id: EmployeeId, form: EmployeeFormData, now: DateTime<Utc>) -> Self {
        Self {
            id,
            full_name: form.full_name,
            gender: form.gender,
            date_of_birth: form.date_of_birth,
            profile_image: form.profile_image,
            state: form.state,
            is_active: form.is_active,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply_form(&mut self, form: EmployeeFormData, now: DateTime<Utc>) {
        self.full_name = form.full_name;
        self.gender = form.gender;
        self.date_of_birth = form.date_of_birth;
        self.profile_image = form.profile_image;
        self.state = form.state;
        self.is_active = form.is_active;
        self.touch(now);
    }

    pub fn toggle_status(&mut self, now: DateTime<Utc>) {
        self.is_active = !self.is_active;
        self.touch(now);
    }

    fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = next_stamp(self.updated_at, now);
    }

    pub fn status_label(&self) -> &'static str {
        if self.is_active { "Active" } else { "Inactive" }
    }

    /// Up to two uppercase initials, used when there is no profile image.
    pub fn initials(&self) -> String {
        self.full_name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

/// A stamp strictly after `previous`: `now` when the clock moved forward,
/// otherwise one millisecond past `previous`.
pub fn next_stamp(previous: DateTime<Utc>, now: DateTime<Utc>) -> DateTime<Utc> {
    if now > previous {
        now
    } else {
        previous + TimeDelta::milliseconds(1)
    }
}
