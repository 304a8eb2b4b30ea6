// Change events published by the roster store after each committed mutation.

use crate::modules::roster::core::employee_id::EmployeeId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterEvent {
    Loaded { count: usize },
    Seeded { count: usize },
    Added { id: EmployeeId },
    Updated { id: EmployeeId },
    Deleted { id: EmployeeId },
    StatusToggled { id: EmployeeId, is_active: bool },
}
