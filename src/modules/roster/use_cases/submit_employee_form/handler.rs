// Form submission handler orchestrates the edit flow.
//
// Responsibilities
// - Validate the form against today's date before anything else.
// - Rejected forms never reach the roster store.
// - Accepted forms become an add (new record) or an update (existing record).

use crate::modules::roster::core::employee::Employee;
use crate::modules::roster::core::events::RosterEvent;
use crate::modules::roster::store::{RosterError, RosterStore};
use crate::modules::roster::use_cases::submit_employee_form::command::{
    FormTarget, SubmitEmployeeForm,
};
use crate::modules::roster::use_cases::submit_employee_form::decide::decide_submit;
use crate::modules::roster::use_cases::submit_employee_form::decision::{
    Decision, ValidationErrors,
};
use crate::shared::core::clock::Clock;
use crate::shared::infrastructure::change_notifier::ChangeNotifier;
use crate::shared::infrastructure::key_value_store::KeyValueStore;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("form rejected: {0}")]
    Rejected(ValidationErrors),

    #[error(transparent)]
    Roster(#[from] RosterError),
}

pub struct SubmitEmployeeFormHandler<TStore, TNotifier>
where
    TStore: KeyValueStore + 'static,
    TNotifier: ChangeNotifier<RosterEvent> + 'static,
{
    roster: Arc<RosterStore<TStore, TNotifier>>,
    clock: Arc<dyn Clock>,
}

impl<TStore, TNotifier> SubmitEmployeeFormHandler<TStore, TNotifier>
where
    TStore: KeyValueStore + 'static,
    TNotifier: ChangeNotifier<RosterEvent> + 'static,
{
    pub fn new(roster: Arc<RosterStore<TStore, TNotifier>>, clock: Arc<dyn Clock>) -> Self {
        Self { roster, clock }
    }

    /// Returns the saved record, or `None` when an edited record no longer exists.
    pub async fn handle(
        &self,
        command: SubmitEmployeeForm,
    ) -> Result<Option<Employee>, ApplicationError> {
        match decide_submit(command, self.clock.today()) {
            Decision::Accepted { command } => match command.target {
                FormTarget::New => Ok(Some(self.roster.add(command.form).await?)),
                FormTarget::Existing(id) => {
                    self.roster.update(&id, command.form).await?;
                    Ok(self.roster.get(&id).await)
                }
            },
            Decision::Rejected { errors } => {
                debug!(%errors, "employee form rejected");
                Err(ApplicationError::Rejected(errors))
            }
        }
    }
}
