//! Dependency injection traits.
//!
//! External dependencies are abstracted behind traits and injected via a
//! feature's Environment, so reducers stay deterministic and testable.

use chrono::{DateTime, Utc};

/// Abstracts time operations for testability.
///
/// Production code uses [`SystemClock`]; tests inject a fixed clock so
/// timestamps are deterministic.
pub trait Clock: Send + Sync {
    /// Get the current time
    fn now(&self) -> DateTime<Utc>;
}

/// Production clock backed by the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
