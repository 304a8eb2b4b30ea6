use serde::{Deserialize, Serialize};

/// Signed-in identity. Persisted under the `"user"` key as `{"email", "name"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    pub email: String,
    pub name: String,
}
