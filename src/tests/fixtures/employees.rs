// Small hand-built roster for filter and count tests.
//
// EMP001 Priya Sharma   Female  active
// EMP002 Arjun Mehta    Male    active
// EMP003 Lakshmi Rao    Female  inactive
// EMP004 Vikram Sharma  Male    inactive
// EMP005 Kiran Das      Other   active

use crate::modules::roster::core::employee::{Employee, Gender};
use crate::modules::roster::core::employee_id::EmployeeId;
use chrono::{NaiveDate, TimeZone, Utc};

pub fn make_employee(sequence: u64, full_name: &str, gender: Gender, is_active: bool) -> Employee {
    let stamp = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    Employee {
        id: EmployeeId::from_sequence(sequence),
        full_name: full_name.to_string(),
        gender,
        date_of_birth: NaiveDate::from_ymd_opt(1990, 6, 15).unwrap(),
        profile_image: String::new(),
        state: "Karnataka".to_string(),
        is_active,
        created_at: stamp,
        updated_at: stamp,
    }
}

pub fn make_roster() -> Vec<Employee> {
    vec![
        make_employee(1, "Priya Sharma", Gender::Female, true),
        make_employee(2, "Arjun Mehta", Gender::Male, true),
        make_employee(3, "Lakshmi Rao", Gender::Female, false),
        make_employee(4, "Vikram Sharma", Gender::Male, false),
        make_employee(5, "Kiran Das", Gender::Other, true),
    ]
}
