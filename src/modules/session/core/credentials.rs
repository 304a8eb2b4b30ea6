// Credential rules for the demo login.
//
// Any syntactically valid email/password pair is accepted. This is a stand-in
// for a backend and offers no security at all; do not deploy it as an
// authentication system.

use thiserror::Error;

pub const DEMO_EMAIL: &str = "admin@company.com";
pub const DEMO_PASSWORD: &str = "admin123";
pub const DEMO_DISPLAY_NAME: &str = "Admin User";
pub const MIN_PASSWORD_CHARS: usize = 4;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LoginError {
    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("Password must be at least 4 characters")]
    PasswordTooShort,

    #[error("Already signed in as {0}")]
    AlreadyAuthenticated(String),
}

pub fn validate_credentials(email: &str, password: &str) -> Result<(), LoginError> {
    if !email.contains('@') {
        return Err(LoginError::InvalidEmail);
    }
    if password.chars().count() < MIN_PASSWORD_CHARS {
        return Err(LoginError::PasswordTooShort);
    }
    Ok(())
}

/// Display name for an accepted login: the demo account has a fixed name,
/// everyone else gets the local part of their address.
pub fn display_name_for(email: &str, password: &str) -> String {
    if email == DEMO_EMAIL && password == DEMO_PASSWORD {
        return DEMO_DISPLAY_NAME.to_string();
    }
    email.split('@').next().unwrap_or_default().to_string()
}
