use crate::modules::roster::use_cases::submit_employee_form::command::SubmitEmployeeForm;
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    FullName,
    DateOfBirth,
    State,
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FormField::FullName => "fullName",
            FormField::DateOfBirth => "dateOfBirth",
            FormField::State => "state",
        })
    }
}

/// Inline messages keyed by the field they belong to. At most one message per field.
#[derive(Debug, Clone, PartialEq, Eq, Default, Error)]
#[error("{}", self.render())]
pub struct ValidationErrors(BTreeMap<FormField, &'static str>);

impl ValidationErrors {
    pub fn insert(&mut self, field: FormField, message: &'static str) {
        self.0.insert(field, message);
    }

    pub fn get(&self, field: FormField) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, &'static str)> + '_ {
        self.0.iter().map(|(field, message)| (*field, *message))
    }

    /// `field: message` pairs in field order, joined by `; `.
    fn render(&self) -> String {
        self.iter()
            .map(|(field, message)| format!("{field}: {message}"))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

pub enum Decision {
    Accepted { command: SubmitEmployeeForm },
    Rejected { errors: ValidationErrors },
}
