// SessionState is the lifecycle of the signed-in principal.
//
// Transitions
// - Unknown -> Authenticated | Unauthenticated (restore)
// - Unknown | Unauthenticated -> Authenticated (login)
// - Authenticated -> Unauthenticated (logout)

use crate::modules::session::core::principal::Principal;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Unknown,
    Unauthenticated,
    Authenticated(Principal),
}

impl SessionState {
    pub fn principal(&self) -> Option<&Principal> {
        match self {
            SessionState::Authenticated(principal) => Some(principal),
            _ => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated(_))
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, SessionState::Unknown)
    }
}
