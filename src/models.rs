use serde::{Deserialize, Serialize};

/// A stored student. `id` is assigned by the database and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// Request body for `POST /students`. Both fields must be JSON strings.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateStudent {
    pub name: String,
    pub email: String,
}

/// A create request that passed validation: both fields trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStudent {
    pub name: String,
    pub email: String,
}
