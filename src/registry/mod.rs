//! # Entity model
//!
//! The registry's entity model: the ordinal access-level scale, the
//! `User` entity with its permission predicates, and the request-scoped
//! `SessionIdentity` that resolves externally supplied credentials to a
//! stored user.

pub mod access;
pub mod session;
pub mod user;

pub use access::{AccessLevel, InvalidAccessLevel};
pub use session::SessionIdentity;
pub use user::User;
