use crate::modules::roster::core::events::RosterEvent;
use crate::modules::roster::store::RosterStore;
use crate::modules::roster::use_cases::submit_employee_form::handler::SubmitEmployeeFormHandler;
use crate::modules::session::core::events::SessionEvent;
use crate::modules::session::store::SessionStore;
use crate::shared::core::clock::{Clock, SystemClock};
use crate::shared::infrastructure::change_notifier::broadcast_notifier::BroadcastNotifier;
use crate::shared::infrastructure::key_value_store::file_system::FileKeyValueStore;
use crate::shell::config::AppConfig;
use anyhow::Context;
use std::sync::Arc;
use tracing::warn;

pub type AppSessionStore = SessionStore<FileKeyValueStore, BroadcastNotifier<SessionEvent>>;
pub type AppRosterStore = RosterStore<FileKeyValueStore, BroadcastNotifier<RosterEvent>>;
pub type AppSubmitHandler =
    SubmitEmployeeFormHandler<FileKeyValueStore, BroadcastNotifier<RosterEvent>>;

#[derive(Clone)]
pub struct AppState {
    pub session: Arc<AppSessionStore>,
    pub session_events: Arc<BroadcastNotifier<SessionEvent>>,
    pub roster: Arc<AppRosterStore>,
    pub roster_events: Arc<BroadcastNotifier<RosterEvent>>,
    pub submit_handler: Arc<AppSubmitHandler>,
}

impl AppState {
    /// Wires the stores onto one storage directory, restores the session and opens the roster.
    ///
    /// A failed session restore is logged and leaves the session signed out.
    /// A roster that cannot be read or seeded aborts start-up.
    pub async fn bootstrap(config: &AppConfig) -> anyhow::Result<Self> {
        let store = Arc::new(FileKeyValueStore::new(config.storage_dir.clone()));
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);

        let session_events = Arc::new(BroadcastNotifier::<SessionEvent>::new());
        let session = Arc::new(SessionStore::new(
            store.clone(),
            session_events.clone(),
            config.login_latency,
        ));
        if let Err(err) = session.restore_session().await {
            warn!(error = %err, "session restore failed, continuing signed out");
        }

        let roster_events = Arc::new(BroadcastNotifier::<RosterEvent>::new());
        let roster = Arc::new(
            RosterStore::load(store, roster_events.clone(), clock.clone())
                .await
                .with_context(|| {
                    format!("opening roster in {}", config.storage_dir.display())
                })?,
        );
        let submit_handler = Arc::new(SubmitEmployeeFormHandler::new(roster.clone(), clock));

        Ok(Self {
            session,
            session_events,
            roster,
            roster_events,
            submit_handler,
        })
    }
}
