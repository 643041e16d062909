//! # In-memory backend
//!
//! Volatile `UserStore` with the same gating semantics as the file
//! backend and no durability. Used in tests, and as the proof that the
//! registration policy is independent of the backing medium.

use std::collections::BTreeMap;
use std::sync::RwLock;

use crate::registry::session::SessionIdentity;
use crate::registry::user::User;

use super::errors::{StoreError, StoreResult};
use super::{registration_permitted, UserStore};

/// In-memory user store
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    users: RwLock<BTreeMap<String, User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserStore for InMemoryUserStore {
    fn get_user(&self, email: &str, password: &str) -> StoreResult<Option<User>> {
        let users = self.users.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(users
            .get(email)
            .filter(|user| user.password_matches(password))
            .cloned())
    }

    fn insert_user(&self, user: &User, session: &mut SessionIdentity) -> StoreResult<bool> {
        let bootstrap = self
            .users
            .read()
            .map_err(|_| StoreError::LockPoisoned)?
            .is_empty();

        if !bootstrap {
            let actor = session.resolve(self)?;
            if !registration_permitted(actor.as_ref(), user) {
                return Ok(false);
            }
        }

        let mut users = self.users.write().map_err(|_| StoreError::LockPoisoned)?;
        users.insert(user.email.clone(), user.clone());
        Ok(true)
    }

    /// Nothing to persist; always succeeds
    fn save(&self) -> StoreResult<()> {
        Ok(())
    }

    fn admin_user_present(&self) -> StoreResult<bool> {
        let users = self.users.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(users.values().any(User::can_add_users))
    }
}
