//! # Observability
//!
//! Structured logging for the registry lifecycle.
//!
//! # Principles
//!
//! 1. Observability is read-only: logging never alters store behavior
//! 2. Synchronous, no background threads
//! 3. One log line = one event, deterministic field ordering

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};

/// Log a lifecycle event at its intrinsic severity
pub fn log_event(event: Event) {
    Logger::log(event.severity(), event.as_str(), &[]);
}

/// Log a lifecycle event with context fields
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(event.severity(), event.as_str(), fields);
}
