pub mod employees;
pub mod forms;
