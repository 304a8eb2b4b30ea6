// Change events published by the session store after each committed transition.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    Restored { authenticated: bool },
    SignedIn { email: String },
    SignedOut,
}
