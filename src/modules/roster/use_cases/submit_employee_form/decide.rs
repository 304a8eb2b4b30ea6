use crate::modules::roster::core::employee::EmployeeFormData;
use crate::modules::roster::core::regions::is_recognized_region;
use crate::modules::roster::use_cases::submit_employee_form::command::SubmitEmployeeForm;
use crate::modules::roster::use_cases::submit_employee_form::decision::{
    Decision, FormField, ValidationErrors,
};
use chrono::NaiveDate;

pub const MIN_NAME_CHARS: usize = 2;
pub const MIN_AGE_YEARS: u32 = 18;

pub fn validate_employee_form(
    form: &EmployeeFormData,
    today: NaiveDate,
) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();

    let name = form.full_name.trim();
    if name.is_empty() {
        errors.insert(FormField::FullName, "Full name is required");
    } else if name.chars().count() < MIN_NAME_CHARS {
        errors.insert(FormField::FullName, "Name must be at least 2 characters");
    }

    match today.years_since(form.date_of_birth) {
        None => errors.insert(FormField::DateOfBirth, "Date of birth cannot be in the future"),
        Some(age) if age < MIN_AGE_YEARS => {
            errors.insert(FormField::DateOfBirth, "Employee must be at least 18 years old")
        }
        Some(_) => {}
    }

    // Stored as given, so the region must match exactly.
    if form.state.trim().is_empty() {
        errors.insert(FormField::State, "State is required");
    } else if !is_recognized_region(&form.state) {
        errors.insert(FormField::State, "Select a valid state");
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

pub fn decide_submit(command: SubmitEmployeeForm, today: NaiveDate) -> Decision {
    match validate_employee_form(&command.form, today) {
        Ok(()) => Decision::Accepted { command },
        Err(errors) => Decision::Rejected { errors },
    }
}
