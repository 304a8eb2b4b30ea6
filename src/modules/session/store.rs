// Session store: the single source of truth for who is signed in.
//
// Responsibilities
// - Gate the roster behind one principal at a time.
// - Mirror the principal into the key-value store under USER_KEY.
// - Publish a SessionEvent after every committed transition.
//
// Concurrency
// - Transitions hold the state lock across the persistence call, so they never interleave.
// - Login does not de-duplicate concurrent submissions. A second call that finishes
//   after the first one is rejected as AlreadyAuthenticated.

use crate::modules::session::core::credentials::LoginError;
use crate::modules::session::core::events::SessionEvent;
use crate::modules::session::core::principal::Principal;
use crate::modules::session::core::state::SessionState;
use crate::modules::session::use_cases::login::command::Login;
use crate::modules::session::use_cases::login::decide::decide_login;
use crate::modules::session::use_cases::login::decision::Decision;
use crate::shared::infrastructure::change_notifier::ChangeNotifier;
use crate::shared::infrastructure::key_value_store::{KeyValueStore, KeyValueStoreError};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

pub const USER_KEY: &str = "user";
pub const DEFAULT_LOGIN_LATENCY: Duration = Duration::from_millis(800);

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Login(#[from] LoginError),

    #[error(transparent)]
    Persistence(#[from] KeyValueStoreError),

    #[error("could not encode principal: {0}")]
    Encode(#[from] serde_json::Error),
}

pub struct SessionStore<TStore, TNotifier>
where
    TStore: KeyValueStore + 'static,
    TNotifier: ChangeNotifier<SessionEvent> + 'static,
{
    store: Arc<TStore>,
    notifier: Arc<TNotifier>,
    login_latency: Duration,
    state: RwLock<SessionState>,
}

impl<TStore, TNotifier> SessionStore<TStore, TNotifier>
where
    TStore: KeyValueStore + 'static,
    TNotifier: ChangeNotifier<SessionEvent> + 'static,
{
    pub fn new(store: Arc<TStore>, notifier: Arc<TNotifier>, login_latency: Duration) -> Self {
        Self {
            store,
            notifier,
            login_latency,
            state: RwLock::new(SessionState::Unknown),
        }
    }

    /// Reads the persisted principal once at start-up.
    ///
    /// An undecodable entry is ignored and leaves the session unauthenticated.
    /// A failing backend also leaves it unauthenticated, and the error is returned.
    pub async fn restore_session(&self) -> Result<SessionState, SessionError> {
        let mut guard = self.state.write().await;
        let loaded = self.store.get(USER_KEY).await;
        let restored = match loaded {
            Ok(Some(raw)) => match serde_json::from_str::<Principal>(&raw) {
                Ok(principal) => SessionState::Authenticated(principal),
                Err(err) => {
                    warn!(error = %err, "ignoring undecodable persisted session");
                    SessionState::Unauthenticated
                }
            },
            Ok(None) => SessionState::Unauthenticated,
            Err(err) => {
                *guard = SessionState::Unauthenticated;
                drop(guard);
                self.notifier.publish(SessionEvent::Restored {
                    authenticated: false,
                });
                return Err(err.into());
            }
        };
        *guard = restored.clone();
        drop(guard);

        info!(
            authenticated = restored.is_authenticated(),
            "session restored"
        );
        self.notifier.publish(SessionEvent::Restored {
            authenticated: restored.is_authenticated(),
        });
        Ok(restored)
    }

    /// Simulated sign-in: waits the configured latency, then accepts any
    /// syntactically valid credential pair.
    pub async fn login(
        &self,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Principal, SessionError> {
        let command = Login::new(email, password);
        tokio::time::sleep(self.login_latency).await;

        let mut guard = self.state.write().await;
        match decide_login(&guard, command) {
            Decision::Accepted { principal } => {
                let encoded = serde_json::to_string(&principal)?;
                self.store.set(USER_KEY, &encoded).await?;
                *guard = SessionState::Authenticated(principal.clone());
                drop(guard);

                info!(email = %principal.email, "signed in");
                self.notifier.publish(SessionEvent::SignedIn {
                    email: principal.email.clone(),
                });
                Ok(principal)
            }
            Decision::Rejected { reason } => {
                debug!(%reason, "login rejected");
                Err(SessionError::Login(reason))
            }
        }
    }

    /// Clears the principal. The in-memory sign-out always happens; a failure
    /// to remove the persisted entry is still reported.
    pub async fn logout(&self) -> Result<(), SessionError> {
        let mut guard = self.state.write().await;
        *guard = SessionState::Unauthenticated;
        let removed = self.store.remove(USER_KEY).await;
        drop(guard);

        info!("signed out");
        self.notifier.publish(SessionEvent::SignedOut);
        removed.map_err(SessionError::from)
    }

    pub async fn state(&self) -> SessionState {
        self.state.read().await.clone()
    }

    pub async fn current_principal(&self) -> Option<Principal> {
        self.state.read().await.principal().cloned()
    }

    pub async fn is_authenticated(&self) -> bool {
        self.state.read().await.is_authenticated()
    }

    pub async fn is_loading(&self) -> bool {
        self.state.read().await.is_loading()
    }
}
