//! # Session identity
//!
//! Resolution of "who is acting now". A `SessionIdentity` is owned by
//! the request or process scope that established the credentials; it is
//! constructed fresh per scope rather than shared globally, so a stale
//! resolution can never leak across requests.
//!
//! ## Invariants
//! - The store is queried at most once per identity, including for a
//!   credential pair that matches no user
//! - Absent credentials never reach the store

use crate::registry::user::User;
use crate::store::{StoreResult, UserStore};

/// Externally established credential pair
#[derive(Debug, Clone)]
struct Credentials {
    email: String,
    password: String,
}

/// The currently acting identity, resolved lazily against a store.
///
/// The first call to [`resolve`](Self::resolve) performs the lookup and
/// caches the outcome, hit or miss, for the lifetime of the value. A
/// credential change requires a fresh `SessionIdentity`.
#[derive(Debug, Default)]
pub struct SessionIdentity {
    credentials: Option<Credentials>,
    resolved: Option<Option<User>>,
}

impl SessionIdentity {
    /// An identity with no credentials; always resolves to nobody
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// An identity carrying an externally supplied credential pair
    pub fn with_credentials(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            credentials: Some(Credentials {
                email: email.into(),
                password: password.into(),
            }),
            resolved: None,
        }
    }

    /// Resolve the credentials to a stored user.
    ///
    /// Returns the cached outcome if one exists. Otherwise delegates to
    /// `store.get_user` and caches the result. Store failures propagate
    /// and leave the cache untouched.
    pub fn resolve(&mut self, store: &dyn UserStore) -> StoreResult<Option<User>> {
        if let Some(cached) = &self.resolved {
            return Ok(cached.clone());
        }

        let Some(credentials) = &self.credentials else {
            return Ok(None);
        };

        let user = store.get_user(&credentials.email, &credentials.password)?;
        self.resolved = Some(user.clone());
        Ok(user)
    }
}
