// Key-value persistence port.
//
// Purpose
// - Describe the durable local storage the stores mirror their state into.
//
// Responsibilities
// - Values are whole textual documents addressed by a short key ("user", "employees").
// - A write either lands completely or returns an error; callers never retry.
//
// Boundaries
// - No transactions and no compare-and-swap. Two writers on the same key overwrite each other.

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum KeyValueStoreError {
    #[error("quota exceeded writing {key}: {needed} bytes needed, {available} available")]
    QuotaExceeded {
        key: String,
        needed: usize,
        available: usize,
    },

    #[error("invalid key: {0}")]
    InvalidKey(String),

    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, KeyValueStoreError>;
    async fn set(&self, key: &str, value: &str) -> Result<(), KeyValueStoreError>;
    async fn remove(&self, key: &str) -> Result<(), KeyValueStoreError>;
}

pub mod file_system;
pub mod in_memory;
