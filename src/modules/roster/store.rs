// Roster store: the single in-memory source of truth for employee records.
//
// Responsibilities
// - Load the roster from EMPLOYEES_KEY, or seed the demo dataset on first start.
// - Apply add / update / delete / toggle and mirror the whole collection back.
// - Derive total / active / inactive counts from the collection on every read.
// - Publish a RosterEvent after every committed mutation.
//
// Consistency
// - Each mutation builds the next collection, writes it, and only then swaps it in.
//   A failed write leaves memory exactly as it was and the error reaches the caller.
// - Mutations hold the roster lock across the write, so none of them interleave.
//
// Not safe for concurrent writers
// - Persistence is read-modify-write of the whole collection under one key and
//   identifiers come from a max-scan. Two store instances on the same key lose
//   updates and can issue duplicate ids. One store instance per key.

use crate::modules::roster::core::employee::{Employee, EmployeeFormData};
use crate::modules::roster::core::employee_id::{EmployeeId, highest_sequence};
use crate::modules::roster::core::events::RosterEvent;
use crate::modules::roster::core::filter::RosterFilter;
use crate::modules::roster::core::seed::demo_employees;
use crate::shared::core::clock::Clock;
use crate::shared::infrastructure::change_notifier::ChangeNotifier;
use crate::shared::infrastructure::key_value_store::{KeyValueStore, KeyValueStoreError};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, info};

pub const EMPLOYEES_KEY: &str = "employees";

#[derive(Debug, Error)]
pub enum RosterError {
    #[error(transparent)]
    Persistence(#[from] KeyValueStoreError),

    #[error("roster data is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),

    #[error("no employee identifier left after {last}")]
    IdsExhausted { last: u64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RosterStats {
    pub total: usize,
    pub active: usize,
    pub inactive: usize,
}

impl RosterStats {
    pub fn of(employees: &[Employee]) -> Self {
        let active = employees.iter().filter(|e| e.is_active).count();
        Self {
            total: employees.len(),
            active,
            inactive: employees.len() - active,
        }
    }
}

struct Roster {
    employees: Vec<Employee>,
    // Highest sequence number handed out by this instance. Keeps a deleted
    // tail id from being issued again while the process lives.
    highest_issued: u64,
}

pub struct RosterStore<TStore, TNotifier>
where
    TStore: KeyValueStore + 'static,
    TNotifier: ChangeNotifier<RosterEvent> + 'static,
{
    store: Arc<TStore>,
    notifier: Arc<TNotifier>,
    clock: Arc<dyn Clock>,
    roster: Mutex<Roster>,
}

impl<TStore, TNotifier> RosterStore<TStore, TNotifier>
where
    TStore: KeyValueStore + 'static,
    TNotifier: ChangeNotifier<RosterEvent> + 'static,
{
    /// Opens the roster persisted under EMPLOYEES_KEY. When the key is absent
    /// the demo dataset is written first, so later opens read it back instead
    /// of seeding again.
    pub async fn load(
        store: Arc<TStore>,
        notifier: Arc<TNotifier>,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, RosterError> {
        let (employees, event) = match store.get(EMPLOYEES_KEY).await? {
            Some(raw) => {
                let employees: Vec<Employee> = serde_json::from_str(&raw)?;
                info!(count = employees.len(), "roster loaded");
                let count = employees.len();
                (employees, RosterEvent::Loaded { count })
            }
            None => {
                let employees = demo_employees()?;
                store
                    .set(EMPLOYEES_KEY, &serde_json::to_string(&employees)?)
                    .await?;
                info!(count = employees.len(), "roster seeded with demo data");
                let count = employees.len();
                (employees, RosterEvent::Seeded { count })
            }
        };

        let highest_issued = highest_sequence(employees.iter().map(|e| &e.id));
        let roster_store = Self {
            store,
            notifier,
            clock,
            roster: Mutex::new(Roster {
                employees,
                highest_issued,
            }),
        };
        roster_store.notifier.publish(event);
        Ok(roster_store)
    }

    async fn persist(&self, employees: &[Employee]) -> Result<(), RosterError> {
        let encoded = serde_json::to_string(employees)?;
        self.store.set(EMPLOYEES_KEY, &encoded).await?;
        Ok(())
    }

    /// Appends a new record with the next identifier. The form is stored as
    /// given; validation belongs to the caller.
    pub async fn add(&self, form: EmployeeFormData) -> Result<Employee, RosterError> {
        let mut roster = self.roster.lock().await;
        let last = highest_sequence(roster.employees.iter().map(|e| &e.id))
            .max(roster.highest_issued);
        let sequence = last
            .checked_add(1)
            .ok_or(RosterError::IdsExhausted { last })?;
        let employee = Employee::create(EmployeeId::from_sequence(sequence), form, self.clock.now());

        let mut next = roster.employees.clone();
        next.push(employee.clone());
        self.persist(&next).await?;
        roster.employees = next;
        roster.highest_issued = sequence;
        drop(roster);

        info!(id = %employee.id, "employee added");
        self.notifier.publish(RosterEvent::Added {
            id: employee.id.clone(),
        });
        Ok(employee)
    }

    /// Replaces the mutable fields of `id`. Unknown ids are ignored.
    pub async fn update(&self, id: &str, form: EmployeeFormData) -> Result<(), RosterError> {
        self.mutate(id, |employee, now| employee.apply_form(form, now))
            .await
            .map(|changed| {
                if let Some(employee) = changed {
                    info!(id = %employee.id, "employee updated");
                    self.notifier.publish(RosterEvent::Updated { id: employee.id });
                }
            })
    }

    /// Flips `is_active` on `id`. Unknown ids are ignored.
    pub async fn toggle_status(&self, id: &str) -> Result<(), RosterError> {
        self.mutate(id, |employee, now| employee.toggle_status(now))
            .await
            .map(|changed| {
                if let Some(employee) = changed {
                    info!(id = %employee.id, is_active = employee.is_active, "employee status toggled");
                    self.notifier.publish(RosterEvent::StatusToggled {
                        id: employee.id,
                        is_active: employee.is_active,
                    });
                }
            })
    }

    /// Removes `id`. Unknown ids are ignored, but the collection is still written back.
    pub async fn delete(&self, id: &str) -> Result<(), RosterError> {
        let mut roster = self.roster.lock().await;
        let next: Vec<Employee> = roster
            .employees
            .iter()
            .filter(|e| e.id != *id)
            .cloned()
            .collect();
        let removed = next.len() != roster.employees.len();
        self.persist(&next).await?;
        roster.employees = next;
        drop(roster);

        if removed {
            info!(id, "employee deleted");
            self.notifier.publish(RosterEvent::Deleted {
                id: EmployeeId::from(id),
            });
        } else {
            debug!(id, "delete ignored, no such employee");
        }
        Ok(())
    }

    async fn mutate(
        &self,
        id: &str,
        change: impl FnOnce(&mut Employee, chrono::DateTime<chrono::Utc>),
    ) -> Result<Option<Employee>, RosterError> {
        let mut roster = self.roster.lock().await;
        let Some(position) = roster.employees.iter().position(|e| e.id == *id) else {
            debug!(id, "mutation ignored, no such employee");
            return Ok(None);
        };

        let mut next = roster.employees.clone();
        change(&mut next[position], self.clock.now());
        let changed = next[position].clone();
        self.persist(&next).await?;
        roster.employees = next;
        Ok(Some(changed))
    }

    pub async fn get(&self, id: &str) -> Option<Employee> {
        let roster = self.roster.lock().await;
        roster.employees.iter().find(|e| e.id == *id).cloned()
    }

    /// Snapshot of the roster in insertion order.
    pub async fn employees(&self) -> Vec<Employee> {
        self.roster.lock().await.employees.clone()
    }

    pub async fn filtered(&self, filter: &RosterFilter) -> Vec<Employee> {
        let roster = self.roster.lock().await;
        filter.apply(&roster.employees)
    }

    pub async fn stats(&self) -> RosterStats {
        RosterStats::of(&self.roster.lock().await.employees)
    }

    pub async fn total(&self) -> usize {
        self.stats().await.total
    }

    pub async fn active_count(&self) -> usize {
        self.stats().await.active
    }

    pub async fn inactive_count(&self) -> usize {
        self.stats().await.inactive
    }
}
