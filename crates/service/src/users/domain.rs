use serde::{Deserialize, Serialize};

/// Mutable fields of a user that has not been persisted yet (or is being replaced).
///
/// Only a store turns these into a [`super::User`], assigning the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserFields {
    pub name: String,
    pub email: String,
}

impl UserFields {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self { name: name.into(), email: email.into() }
    }
}
