//! Test utilities for seasonal-paragraphs
//!
//! Helpers for writing tests against the resolver: a pinnable clock,
//! configuration fixtures, and one-time logging initialization. Available
//! to downstream crates behind the `test-utils` feature; this crate's own
//! test suites enable it through the self-dev-dependency.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use seasonal_paragraphs::season::SeasonResolver;
//! use seasonal_paragraphs::test_utils::{summer_config, FixedClock};
//!
//! let resolver = SeasonResolver::new(Arc::new(summer_config("06-01", "09-01")))
//!     .with_clock(Arc::new(FixedClock::ymd(2024, 7, 15)));
//! assert_eq!(resolver.current_season().unwrap().as_str(), "summer");
//! ```

use std::sync::Once;

use chrono::NaiveDate;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use crate::clock::Clock;
use crate::config::SiteConfig;

/// Global flag to ensure logging is only initialized once in tests
static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests.
///
/// Installs a tracing subscriber exactly once no matter how often it is
/// called. Respects `RUST_LOG` if set, otherwise uses `level` (default
/// DEBUG).
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(level.unwrap_or(Level::DEBUG).to_string())
        });
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}

/// A clock pinned to a fixed date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    today: NaiveDate,
}

impl FixedClock {
    /// Pins the clock to `today`.
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }

    /// Pins the clock to the given year/month/day.
    ///
    /// # Panics
    ///
    /// Panics on an invalid calendar date; acceptable in test code.
    pub fn ymd(year: i32, month: u32, day: u32) -> Self {
        Self::new(NaiveDate::from_ymd_opt(year, month, day).expect("valid test date"))
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.today
    }
}

/// A site configuration with the given `MM-DD` summer window.
///
/// # Panics
///
/// Panics if either boundary is not a valid `MM-DD` pair; acceptable in
/// test code.
pub fn summer_config(from: &str, to: &str) -> SiteConfig {
    SiteConfig::with_summer_window(
        from.parse().expect("valid from boundary"),
        to.parse().expect("valid to boundary"),
    )
}
