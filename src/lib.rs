//! roledb - a minimal, file-backed user registry with role-based access control
//!
//! The registry tracks user credentials and an ordinal access tier,
//! answers permission queries derived from that tier, and gates
//! registration: the first user ever registered bootstraps the store
//! unconditionally, every later registration requires an authenticated
//! admin-capable actor.

pub mod config;
pub mod observability;
pub mod registry;
pub mod store;
