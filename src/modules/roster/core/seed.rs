// Demo dataset used to seed an empty key-value store on first start.

use crate::modules::roster::core::employee::Employee;

const DEMO_ROSTER_JSON: &str = include_str!("demo_roster.json");

pub fn demo_employees() -> Result<Vec<Employee>, serde_json::Error> {
    serde_json::from_str(DEMO_ROSTER_JSON)
}
