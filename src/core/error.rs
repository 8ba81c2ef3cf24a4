//! Error handling for seasonal-paragraphs
//!
//! This module provides the strongly-typed error surface for season
//! resolution. The error system follows two rules taken from the crate's
//! contract with its host CMS:
//!
//! 1. **Malformed configuration fails the whole computation** - a missing or
//!    unparseable `summer_season` setting is never silently replaced with a
//!    default season.
//! 2. **Extension failures propagate unchanged** - one failing extension
//!    callback aborts the resolution; there is no isolation between
//!    extensions and no partial-result recovery.
//!
//! # Error Categories
//!
//! - **Configuration**: [`SeasonalError::SettingMissing`],
//!   [`SeasonalError::SettingInvalid`], [`SeasonalError::ConfigRead`],
//!   [`SeasonalError::ConfigParse`], [`SeasonalError::ConfigSerialize`],
//!   [`SeasonalError::ConfigWrite`]
//! - **Extensions**: [`SeasonalError::Extension`]
//!
//! There are no other failure modes: the core performs no network or
//! persistence I/O beyond reading (and optionally writing back) the site
//! configuration file.
//!
//! # Examples
//!
//! ```rust
//! use seasonal_paragraphs::core::SeasonalError;
//!
//! fn describe(error: &SeasonalError) -> &'static str {
//!     match error {
//!         SeasonalError::SettingMissing { .. } | SeasonalError::SettingInvalid { .. } => {
//!             "fix the summer_season settings"
//!         }
//!         SeasonalError::Extension { .. } => "a third-party extension misbehaved",
//!         _ => "site configuration file problem",
//!     }
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

use crate::config::MonthDayError;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SeasonalError>;

/// The main error type for season resolution operations.
///
/// Each variant carries enough context to tell the site administrator which
/// setting, file, or extension caused the failure.
#[derive(Error, Debug)]
pub enum SeasonalError {
    /// A required season setting is absent from the site configuration.
    ///
    /// Raised when `summer_season.from` or `summer_season.to` (or the whole
    /// `[summer_season]` table) is missing. The resolver refuses to fall
    /// back to an arbitrary season.
    #[error("season setting '{setting}' is missing from the site configuration")]
    SettingMissing {
        /// Dotted path of the missing setting, e.g. `summer_season.from`
        setting: &'static str,
    },

    /// A season setting is present but not a valid `MM-DD` month/day pair.
    #[error("season setting '{setting}' has invalid value '{value}'")]
    SettingInvalid {
        /// Dotted path of the offending setting
        setting: &'static str,
        /// The raw configured value
        value: String,
        /// Why the value failed to parse
        #[source]
        source: MonthDayError,
    },

    /// The site configuration file could not be read.
    #[error("failed to read site configuration: {}", path.display())]
    ConfigRead {
        /// Path of the configuration file
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The site configuration file is not valid TOML.
    #[error("failed to parse site configuration: {}", path.display())]
    ConfigParse {
        /// Path of the configuration file
        path: PathBuf,
        /// The underlying TOML error
        #[source]
        source: toml::de::Error,
    },

    /// The site configuration could not be serialized back to TOML.
    #[error("failed to serialize site configuration")]
    ConfigSerialize(#[from] toml::ser::Error),

    /// The site configuration file could not be written.
    #[error("failed to write site configuration: {}", path.display())]
    ConfigWrite {
        /// Path of the configuration file
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A registered extension callback returned an error.
    ///
    /// The callback's own error is preserved as the source; the resolver
    /// adds which extension failed and at which hook point, then aborts the
    /// whole resolution (fail-fast, no retry).
    #[error("extension '{extension}' failed in '{hook}'")]
    Extension {
        /// Name the extension registered under
        extension: String,
        /// Hook point that was being dispatched
        hook: &'static str,
        /// The callback's error, unchanged
        #[source]
        source: anyhow::Error,
    },
}
