//! Site-wide configuration for season resolution.
//!
//! The host CMS stores exactly two season settings, `summer_season.from` and
//! `summer_season.to`, as `MM-DD` strings in its site configuration object.
//! This module models that object as [`SiteConfig`]: the raw settings as
//! they sit in storage, TOML load/save, and the parsed [`SummerSeason`]
//! window the resolver actually compares dates against.
//!
//! # File Format
//!
//! ```toml
//! [summer_season]
//! from = "06-01"
//! to = "09-01"
//! ```
//!
//! Missing or malformed settings are hard errors when the window is
//! requested - the resolver never defaults to an arbitrary season.
//!
//! # Injection
//!
//! The resolver reads configuration through the [`ConfigSource`] trait so
//! the host decides where configuration lives: a loaded [`SiteConfig`] acts
//! as its own (static) source, while [`FileConfigSource`] re-reads a TOML
//! file on every resolution. Synchronizing concurrent access to the backing
//! store is the host's job.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::month_day::MonthDay;
use crate::core::{Result, SeasonalError};

/// Cache tag owned by the site configuration object itself.
///
/// Invalidate it whenever the site configuration changes so cached season
/// output is rebuilt with the new window.
pub const SITE_CONFIG_CACHE_TAG: &str = "config:site";

const SETTING_FROM: &str = "summer_season.from";
const SETTING_TO: &str = "summer_season.to";

/// The site-wide configuration object, as stored.
///
/// Settings are kept raw (strings) here; [`SiteConfig::summer_window`]
/// parses and validates them on access.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// The `[summer_season]` table, absent if the site never configured one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summer_season: Option<SummerSeasonSettings>,
}

/// Raw `[summer_season]` settings exactly as configured.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SummerSeasonSettings {
    /// First day of summer, `MM-DD`, inclusive.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    /// First day after summer, `MM-DD`, exclusive.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
}

impl SiteConfig {
    /// Creates a configuration with the given summer window already set.
    pub fn with_summer_window(from: MonthDay, to: MonthDay) -> Self {
        Self {
            summer_season: Some(SummerSeasonSettings {
                from: Some(from.to_string()),
                to: Some(to.to_string()),
            }),
        }
    }

    /// Loads the site configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// [`SeasonalError::ConfigRead`] if the file cannot be read,
    /// [`SeasonalError::ConfigParse`] if it is not valid TOML. Settings are
    /// not validated here; that happens in [`Self::summer_window`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| SeasonalError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| SeasonalError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Writes the site configuration back to a TOML file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents).map_err(|source| SeasonalError::ConfigWrite {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parses the configured summer window.
    ///
    /// # Errors
    ///
    /// [`SeasonalError::SettingMissing`] if the table or either setting is
    /// absent, [`SeasonalError::SettingInvalid`] if a value is not a valid
    /// `MM-DD` pair.
    pub fn summer_window(&self) -> Result<SummerSeason> {
        let settings = self
            .summer_season
            .as_ref()
            .ok_or(SeasonalError::SettingMissing { setting: SETTING_FROM })?;
        let from = parse_setting(SETTING_FROM, settings.from.as_deref())?;
        let to = parse_setting(SETTING_TO, settings.to.as_deref())?;
        Ok(SummerSeason { from, to })
    }

    /// Cache tags owned by this configuration object.
    ///
    /// Consumers caching anything derived from these settings must carry
    /// these tags so a configuration change invalidates them.
    pub fn cache_tags(&self) -> Vec<String> {
        vec![SITE_CONFIG_CACHE_TAG.to_string()]
    }
}

fn parse_setting(setting: &'static str, value: Option<&str>) -> Result<MonthDay> {
    let raw = value.ok_or(SeasonalError::SettingMissing { setting })?;
    raw.parse().map_err(|source| SeasonalError::SettingInvalid {
        setting,
        value: raw.to_string(),
        source,
    })
}

/// The validated summer window: `[from, to)`, year-agnostic.
///
/// Both boundaries are resolved in the year of the date being tested, so a
/// window intended to wrap past Dec 31 (southern-hemisphere summer such as
/// `12-01`..`03-01`) does not work: with `from > to` no date satisfies
/// `from <= d < to` in a single year. Same-year windows only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummerSeason {
    /// First summer day, inclusive.
    pub from: MonthDay,
    /// First winter day, exclusive upper bound.
    pub to: MonthDay,
}

impl SummerSeason {
    /// Creates a window from two boundaries. No ordering is enforced across
    /// the pair; see the type docs for what `from > to` means.
    pub fn new(from: MonthDay, to: MonthDay) -> Self {
        Self { from, to }
    }

    /// Whether `today` falls inside the summer window.
    ///
    /// `from` is inclusive and `to` exclusive, so `from == to` is an empty
    /// window and every date is winter.
    pub fn contains(&self, today: NaiveDate) -> bool {
        let from = self.from.resolve(today.year());
        let to = self.to.resolve(today.year());
        from <= today && today < to
    }
}

/// Where the resolver gets the current site configuration from.
///
/// Implementations must be safe for concurrent reads if the host calls the
/// resolver from multiple threads; this crate adds no synchronization of
/// its own.
pub trait ConfigSource: Send + Sync {
    /// Returns a snapshot of the current site configuration.
    fn load(&self) -> Result<SiteConfig>;
}

/// A fixed, already-loaded configuration acts as its own source.
impl ConfigSource for SiteConfig {
    fn load(&self) -> Result<SiteConfig> {
        Ok(self.clone())
    }
}

/// Re-reads a TOML site configuration file on every resolution.
///
/// Use this when the host edits configuration at runtime and the resolver
/// should pick changes up without being rebuilt. Caching is left to the
/// host's configuration layer.
#[derive(Debug, Clone)]
pub struct FileConfigSource {
    path: PathBuf,
}

impl FileConfigSource {
    /// Creates a source backed by the given TOML file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigSource for FileConfigSource {
    fn load(&self) -> Result<SiteConfig> {
        SiteConfig::load(&self.path)
    }
}
