//! # Access levels
//!
//! The closed ordinal scale of permission tiers. Every stored user
//! carries exactly one tier; everything a user may do is derived from
//! where that tier sits on the scale.
//!
//! ## Invariants
//! - The scale is closed: only the five listed tiers exist
//! - Ordering follows increasing privilege
//! - The persisted form is the integer code, and unknown codes are
//!   rejected at the serde boundary

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Permission tier, ordered by increasing privilege.
///
/// Persisted as the integer code (`NoAccess` = -1 through `Admin` = 3).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(into = "i8", try_from = "i8")]
pub enum AccessLevel {
    /// No capabilities at all
    NoAccess,
    /// May read files
    ReadOnly,
    /// May read and write files
    ReadWrite,
    /// May read, write, and delete files
    ReadWriteDelete,
    /// Full control, including registering new users
    Admin,
}

/// An integer that does not name a tier on the scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid access level code: {0}")]
pub struct InvalidAccessLevel(pub i8);

impl AccessLevel {
    /// Returns the persisted integer code for this tier
    pub fn code(&self) -> i8 {
        match self {
            AccessLevel::NoAccess => -1,
            AccessLevel::ReadOnly => 0,
            AccessLevel::ReadWrite => 1,
            AccessLevel::ReadWriteDelete => 2,
            AccessLevel::Admin => 3,
        }
    }
}

impl From<AccessLevel> for i8 {
    fn from(level: AccessLevel) -> Self {
        level.code()
    }
}

impl TryFrom<i8> for AccessLevel {
    type Error = InvalidAccessLevel;

    fn try_from(code: i8) -> Result<Self, Self::Error> {
        match code {
            -1 => Ok(AccessLevel::NoAccess),
            0 => Ok(AccessLevel::ReadOnly),
            1 => Ok(AccessLevel::ReadWrite),
            2 => Ok(AccessLevel::ReadWriteDelete),
            3 => Ok(AccessLevel::Admin),
            other => Err(InvalidAccessLevel(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_follows_privilege() {
        assert!(AccessLevel::NoAccess < AccessLevel::ReadOnly);
        assert!(AccessLevel::ReadOnly < AccessLevel::ReadWrite);
        assert!(AccessLevel::ReadWrite < AccessLevel::ReadWriteDelete);
        assert!(AccessLevel::ReadWriteDelete < AccessLevel::Admin);
    }

    #[test]
    fn test_codes_match_scale() {
        assert_eq!(AccessLevel::NoAccess.code(), -1);
        assert_eq!(AccessLevel::ReadOnly.code(), 0);
        assert_eq!(AccessLevel::ReadWrite.code(), 1);
        assert_eq!(AccessLevel::ReadWriteDelete.code(), 2);
        assert_eq!(AccessLevel::Admin.code(), 3);
    }

    #[test]
    fn test_code_round_trip() {
        for level in [
            AccessLevel::NoAccess,
            AccessLevel::ReadOnly,
            AccessLevel::ReadWrite,
            AccessLevel::ReadWriteDelete,
            AccessLevel::Admin,
        ] {
            assert_eq!(AccessLevel::try_from(level.code()), Ok(level));
        }
    }

    #[test]
    fn test_unknown_codes_rejected() {
        assert_eq!(AccessLevel::try_from(4), Err(InvalidAccessLevel(4)));
        assert_eq!(AccessLevel::try_from(-2), Err(InvalidAccessLevel(-2)));
        assert_eq!(AccessLevel::try_from(i8::MAX), Err(InvalidAccessLevel(i8::MAX)));
    }

    #[test]
    fn test_serializes_as_bare_integer() {
        let json = serde_json::to_string(&AccessLevel::Admin).unwrap();
        assert_eq!(json, "3");

        let parsed: AccessLevel = serde_json::from_str("-1").unwrap();
        assert_eq!(parsed, AccessLevel::NoAccess);
    }

    #[test]
    fn test_deserializing_unknown_code_fails() {
        let result: Result<AccessLevel, _> = serde_json::from_str("7");
        assert!(result.is_err());
    }
}
