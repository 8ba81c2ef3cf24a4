//! Injectable clock abstraction.
//!
//! Season resolution depends on exactly one clock read: "what date is it
//! today". The [`Clock`] trait keeps that read injectable so hosts can pin
//! the date in tests and alternative deployments can supply their own time
//! source.

use chrono::{Local, NaiveDate};

/// Source of "today" for season resolution.
///
/// `Send + Sync` so a resolver can be shared across host threads.
pub trait Clock: Send + Sync {
    /// The current date in the deployment's local timezone.
    fn today(&self) -> NaiveDate;
}

/// The system clock, used unless the host injects something else.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}
