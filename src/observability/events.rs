//! Observable registry lifecycle events.
//!
//! Events are explicit and typed; each carries an intrinsic severity.

use std::fmt;

use super::logger::Severity;

/// Observable events in the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Store opened and the collection loaded (or found absent)
    StoreOpened,
    /// Load failed; the store proceeds with an empty collection
    StoreLoadFailed,
    /// Collection persisted to disk
    StoreSaved,
    /// Persisting the collection failed
    StoreSaveFailed,
    /// A user was registered
    UserRegistered,
    /// A registration was rejected by the authorization gate
    RegistrationDenied,
}

impl Event {
    /// Returns the string code of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::StoreOpened => "STORE_OPENED",
            Event::StoreLoadFailed => "STORE_LOAD_FAILED",
            Event::StoreSaved => "STORE_SAVED",
            Event::StoreSaveFailed => "STORE_SAVE_FAILED",
            Event::UserRegistered => "USER_REGISTERED",
            Event::RegistrationDenied => "REGISTRATION_DENIED",
        }
    }

    /// Severity the event is logged at
    pub fn severity(&self) -> Severity {
        match self {
            Event::StoreOpened | Event::StoreSaved | Event::UserRegistered => Severity::Info,
            Event::StoreLoadFailed | Event::RegistrationDenied => Severity::Warn,
            Event::StoreSaveFailed => Severity::Error,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_EVENTS: [Event; 6] = [
        Event::StoreOpened,
        Event::StoreLoadFailed,
        Event::StoreSaved,
        Event::StoreSaveFailed,
        Event::UserRegistered,
        Event::RegistrationDenied,
    ];

    #[test]
    fn test_all_events_have_screaming_snake_codes() {
        for event in ALL_EVENTS {
            let code = event.as_str();
            assert!(!code.is_empty());
            assert!(code.chars().all(|c| c.is_ascii_uppercase() || c == '_'));
        }
    }

    #[test]
    fn test_failure_events_are_not_info() {
        assert_eq!(Event::StoreLoadFailed.severity(), Severity::Warn);
        assert_eq!(Event::RegistrationDenied.severity(), Severity::Warn);
        assert_eq!(Event::StoreSaveFailed.severity(), Severity::Error);
    }

    #[test]
    fn test_event_display() {
        assert_eq!(format!("{}", Event::UserRegistered), "USER_REGISTERED");
    }
}
