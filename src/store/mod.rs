//! # User store
//!
//! Persistence contract for the user collection, plus the registration
//! gate every backend enforces. The trait keeps the gate's policy
//! independent of the backing medium, so a different backend (embedded
//! key-value store, relational table) slots in without touching the
//! authorization logic.
//!
//! ## Registration policy
//! - An empty collection accepts any registration (bootstrap: the very
//!   first admin must be able to self-register)
//! - Afterwards only a resolved, admin-capable actor may register, and
//!   never under the actor's own email

mod errors;
mod file;
mod memory;

pub use errors::{StoreError, StoreResult};
pub use file::FileUserStore;
pub use memory::InMemoryUserStore;

use crate::registry::session::SessionIdentity;
use crate::registry::user::User;

/// Persistence contract for the user collection
pub trait UserStore: Send + Sync {
    /// Look up the user whose email matches AND whose stored password
    /// matches the supplied candidate. `Ok(None)` on any mismatch.
    fn get_user(&self, email: &str, password: &str) -> StoreResult<Option<User>>;

    /// Register a user if the acting session is authorized.
    ///
    /// `Ok(true)` means the user was merged into the collection (by
    /// email key) and persisted. `Ok(false)` is an authorization denial
    /// with no mutation. `Err` is a persistence or lock failure.
    fn insert_user(&self, user: &User, session: &mut SessionIdentity) -> StoreResult<bool>;

    /// Persist the current in-memory collection wholesale
    fn save(&self) -> StoreResult<()>;

    /// Whether at least one stored user holds the Admin tier.
    ///
    /// Lets a setup flow decide whether to offer first-admin creation.
    fn admin_user_present(&self) -> StoreResult<bool>;
}

/// The non-bootstrap half of the registration gate.
///
/// Callers handle the empty-collection bootstrap branch first; this
/// decides whether a resolved actor may register `candidate`.
pub(crate) fn registration_permitted(actor: Option<&User>, candidate: &User) -> bool {
    match actor {
        // Unauthenticated
        None => false,
        // Needs the admin capability, and may not re-register their own
        // email through this path
        Some(actor) => actor.can_add_users() && actor.email != candidate.email,
    }
}
