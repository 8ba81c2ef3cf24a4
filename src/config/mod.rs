//! Configuration management for seasonal-paragraphs
//!
//! The host CMS owns configuration storage; this module models the slice of
//! it the season resolver needs and how the resolver gets at it:
//!
//! - `month_day` - the year-agnostic `MM-DD` boundary value type
//! - `site` - the site configuration object, its TOML form, the parsed
//!   summer window, and the [`ConfigSource`] injection seam
//!
//! # Configuration Settings
//!
//! Exactly two settings exist, both strings in `MM-DD` form:
//!
//! | Setting | Meaning |
//! |---------|---------|
//! | `summer_season.from` | first day of summer, inclusive |
//! | `summer_season.to` | first day after summer, exclusive |
//!
//! Malformed or missing values fail resolution with a specific
//! [`crate::core::SeasonalError`] variant rather than defaulting.

pub mod month_day;
pub mod site;

pub use month_day::{MonthDay, MonthDayError};
pub use site::{
    ConfigSource, FileConfigSource, SiteConfig, SummerSeason, SummerSeasonSettings,
    SITE_CONFIG_CACHE_TAG,
};
