use crate::modules::session::core::credentials::{
    LoginError, display_name_for, validate_credentials,
};
use crate::modules::session::core::principal::Principal;
use crate::modules::session::core::state::SessionState;
use crate::modules::session::use_cases::login::command::Login;
use crate::modules::session::use_cases::login::decision::Decision;

pub fn decide_login(state: &SessionState, command: Login) -> Decision {
    if let SessionState::Authenticated(current) = state {
        return Decision::Rejected {
            reason: LoginError::AlreadyAuthenticated(current.email.clone()),
        };
    }
    if let Err(reason) = validate_credentials(&command.email, &command.password) {
        return Decision::Rejected { reason };
    }
    let name = display_name_for(&command.email, &command.password);
    Decision::Accepted {
        principal: Principal {
            email: command.email,
            name,
        },
    }
}
