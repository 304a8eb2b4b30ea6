// Shared test fixture for the employee form.
// The canonical form lives in json/employee_form.json and is parsed in its
// persisted (camelCase) shape, so the fixture also exercises the wire format.

use crate::modules::roster::core::employee::{EmployeeFormData, Gender};
use chrono::NaiveDate;
use serde::Deserialize;

const EMPLOYEE_FORM_JSON: &str = include_str!("json/employee_form.json");

// JSON -> DTO (transport shape)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeFormDto {
    pub full_name: String,
    pub gender: Gender,
    pub date_of_birth: NaiveDate,
    pub profile_image: String,
    pub state: String,
    pub is_active: bool,
}

pub struct EmployeeFormBuilder {
    inner: EmployeeFormData,
}

impl Default for EmployeeFormBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl EmployeeFormBuilder {
    pub fn new() -> Self {
        let dto: EmployeeFormDto = serde_json::from_str(EMPLOYEE_FORM_JSON).unwrap();

        Self {
            inner: EmployeeFormData {
                full_name: dto.full_name,
                gender: dto.gender,
                date_of_birth: dto.date_of_birth,
                profile_image: dto.profile_image,
                state: dto.state,
                is_active: dto.is_active,
            },
        }
    }

    pub fn full_name(mut self, v: impl Into<String>) -> Self {
        self.inner.full_name = v.into();
        self
    }

    pub fn gender(mut self, v: Gender) -> Self {
        self.inner.gender = v;
        self
    }

    pub fn date_of_birth(mut self, v: NaiveDate) -> Self {
        self.inner.date_of_birth = v;
        self
    }

    pub fn profile_image(mut self, v: impl Into<String>) -> Self {
        self.inner.profile_image = v.into();
        self
    }

    pub fn state(mut self, v: impl Into<String>) -> Self {
        self.inner.state = v.into();
        self
    }

    pub fn is_active(mut self, v: bool) -> Self {
        self.inner.is_active = v;
        self
    }

    pub fn build(self) -> EmployeeFormData {
        self.inner
    }
}

#[cfg(test)]
mod employee_form_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = EmployeeFormBuilder::default().build();
        assert_eq!(built.full_name, "Asha Rao");
        assert_eq!(built.gender, Gender::Female);
        assert_eq!(built.date_of_birth, NaiveDate::from_ymd_opt(1995, 1, 1).unwrap());
        assert_eq!(built.profile_image, "");
        assert_eq!(built.state, "Karnataka");
        assert!(built.is_active);
    }

    #[rstest]
    fn the_json_fixture_is_a_valid_form_payload() {
        let parsed: EmployeeFormData = serde_json::from_str(EMPLOYEE_FORM_JSON).unwrap();
        assert_eq!(parsed, EmployeeFormBuilder::new().build());
    }

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let custom = EmployeeFormBuilder::new()
            .full_name("Rohan Iyer")
            .gender(Gender::Male)
            .date_of_birth(NaiveDate::from_ymd_opt(1988, 3, 9).unwrap())
            .profile_image("data:image/png;base64,AAAA")
            .state("Kerala")
            .is_active(false)
            .build();

        assert_eq!(custom.full_name, "Rohan Iyer");
        assert_eq!(custom.gender, Gender::Male);
        assert_eq!(custom.date_of_birth, NaiveDate::from_ymd_opt(1988, 3, 9).unwrap());
        assert_eq!(custom.profile_image, "data:image/png;base64,AAAA");
        assert_eq!(custom.state, "Kerala");
        assert!(!custom.is_active);
    }
}
