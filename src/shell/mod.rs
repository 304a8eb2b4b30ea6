// Composition root for the employee roster.
//
// Responsibilities
// - Read config from the environment.
// - Instantiate the file-backed key-value store and the broadcast notifiers.
// - Restore the session and open the roster before anything reads them.

pub mod config;
pub mod state;
