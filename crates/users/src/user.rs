use serde::{Deserialize, Serialize};

use userdesk_core::{DomainError, DomainResult, Entity, UserId};

/// Validation message for a create request lacking `name` or `email`.
pub const REQUIRED_FIELDS_MESSAGE: &str = "Name and email are required";

/// A user record as stored and as rendered over the wire.
///
/// Field order is the JSON field order: `{"id", "name", "email"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
}

impl User {
    /// Materialize a record from validated input and a store-assigned id.
    pub fn from_new(id: UserId, new: NewUser) -> Self {
        Self {
            id,
            name: new.name,
            email: new.email,
        }
    }

    /// Overwrite the fields present in `patch`; absent fields are untouched.
    ///
    /// No re-validation happens here: empty strings are valid overwrites.
    pub fn apply(&mut self, patch: UserPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
    }
}

impl Entity for User {
    type Id = UserId;

    fn id(&self) -> UserId {
        self.id
    }
}

/// Validated input for creating a user: both fields present and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    name: String,
    email: String,
}

impl NewUser {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> DomainResult<Self> {
        let name = name.into();
        let email = email.into();
        if name.is_empty() || email.is_empty() {
            return Err(DomainError::validation(REQUIRED_FIELDS_MESSAGE));
        }
        Ok(Self { name, email })
    }

    /// Build from optional parts, treating absence like emptiness.
    pub fn from_parts(name: Option<String>, email: Option<String>) -> DomainResult<Self> {
        match (name, email) {
            (Some(name), Some(email)) => Self::new(name, email),
            _ => Err(DomainError::validation(REQUIRED_FIELDS_MESSAGE)),
        }
    }
}

/// Partial update: only the fields that are `Some` are overwritten.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
}
