use crate::modules::roster::core::employee::EmployeeFormData;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormTarget {
    New,
    Existing(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitEmployeeForm {
    pub target: FormTarget,
    pub form: EmployeeFormData,
}

impl SubmitEmployeeForm {
    pub fn create(form: EmployeeFormData) -> Self {
        Self {
            target: FormTarget::New,
            form,
        }
    }

    pub fn edit(id: impl Into<String>, form: EmployeeFormData) -> Self {
        Self {
            target: FormTarget::Existing(id.into()),
            form,
        }
    }
}
