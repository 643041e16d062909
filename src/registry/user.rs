//! # User entity
//!
//! A user combines an identity (email), a credential, and an access
//! tier. The permission predicates are pure functions of the tier:
//! each one is true on an upward-closed suffix of the ordinal scale,
//! so granting a higher tier never removes a capability.

use serde::{Deserialize, Serialize};
use subtle::ConstantTimeEq;

use super::access::AccessLevel;

/// A registered user.
///
/// Immutable once constructed; the field names fix the persisted
/// object layout (`email`, `password`, `access_level`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier within the store
    pub email: String,

    /// Credential, compared by exact match
    pub password: String,

    /// Permission tier
    pub access_level: AccessLevel,
}

impl User {
    /// Create a user. No field validation is performed.
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        access_level: AccessLevel,
    ) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            access_level,
        }
    }

    /// Compare a candidate password against the stored credential.
    ///
    /// Constant-time, so lookup timing does not leak how much of the
    /// credential matched.
    pub fn password_matches(&self, candidate: &str) -> bool {
        self.password.as_bytes().ct_eq(candidate.as_bytes()).into()
    }

    /// May read files (ReadOnly and above)
    pub fn can_read_files(&self) -> bool {
        self.access_level >= AccessLevel::ReadOnly
    }

    /// May write files (ReadWrite and above)
    pub fn can_write_files(&self) -> bool {
        self.access_level >= AccessLevel::ReadWrite
    }

    /// May delete files (ReadWriteDelete and above)
    pub fn can_delete_files(&self) -> bool {
        self.access_level >= AccessLevel::ReadWriteDelete
    }

    /// May register new users (Admin only)
    pub fn can_add_users(&self) -> bool {
        self.access_level >= AccessLevel::Admin
    }
}
