//! Extension points for third-party season behavior
//!
//! Hook dispatch is an explicit ordered registry: extensions register
//! callbacks under a name, and the resolver walks each list in
//! registration order.
//!
//! Two hook points exist:
//!
//! - **alter current season** - receives `&mut Season`; each callback may
//!   overwrite it unconditionally, so with several registered the
//!   last-registered mutation wins.
//! - **alter available seasons** - receives the mutable option list, the
//!   field definition, and the optional owning record; returns its vote on
//!   whether the altered list may be cached. Votes are folded with `&&`
//!   starting from `true`, which makes the cacheability flag a one-way
//!   downgrade: once any callback votes `false`, no later callback can
//!   restore `true`.
//!
//! A callback that returns an error aborts the whole resolution
//! ([`crate::core::SeasonalError::Extension`] naming the extension); there
//! is no isolation between extensions and no partial-result recovery.
//!
//! # Examples
//!
//! Overriding the season on a fixed date and offering the matching option:
//!
//! ```rust
//! use seasonal_paragraphs::extensions::ExtensionRegistry;
//! use seasonal_paragraphs::season::{Season, SeasonOption};
//!
//! let mut registry = ExtensionRegistry::new();
//!
//! registry.register_current_season("christmas_module", |season| {
//!     *season = Season::Custom("CHRISTMAS".to_string());
//!     Ok(())
//! });
//!
//! registry.register_available_seasons("christmas_module", |options, _field, _record| {
//!     options.push(SeasonOption::new("CHRISTMAS", "Merry christmas"));
//!     Ok(true)
//! });
//! ```

use crate::core::{Result, SeasonalError};
use crate::models::{ContentRecord, FieldDefinition};
use crate::season::{Season, SeasonOption};

/// Hook point name for current-season alteration.
pub const ALTER_CURRENT_SEASON: &str = "alter_current_season";
/// Hook point name for option-list alteration.
pub const ALTER_AVAILABLE_SEASONS: &str = "alter_available_seasons";

type CurrentSeasonHook = Box<dyn Fn(&mut Season) -> anyhow::Result<()> + Send + Sync>;
type AvailableSeasonsHook = Box<
    dyn Fn(&mut Vec<SeasonOption>, &FieldDefinition, Option<&ContentRecord>) -> anyhow::Result<bool>
        + Send
        + Sync,
>;

/// Ordered lists of registered extension callbacks, one per hook point.
///
/// Registration order is invocation order. The registry owns no other
/// state; hosts build it once at startup and hand it to the resolver.
#[derive(Default)]
pub struct ExtensionRegistry {
    current_season: Vec<(String, CurrentSeasonHook)>,
    available_seasons: Vec<(String, AvailableSeasonsHook)>,
}

impl ExtensionRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a callback on the "alter current season" hook point.
    ///
    /// `extension` names the registering extension and is reported when the
    /// callback fails. The callback may overwrite the season
    /// unconditionally.
    pub fn register_current_season<F>(&mut self, extension: impl Into<String>, hook: F)
    where
        F: Fn(&mut Season) -> anyhow::Result<()> + Send + Sync + 'static,
    {
        self.current_season.push((extension.into(), Box::new(hook)));
    }

    /// Registers a callback on the "alter available seasons" hook point.
    ///
    /// The callback has full mutation power over the option list (append,
    /// remove, reorder; the built-in options are not protected) and returns
    /// `true` if the host may still cache the result. Returning `false`
    /// pins the final list as uncacheable; a later callback cannot undo
    /// that.
    pub fn register_available_seasons<F>(&mut self, extension: impl Into<String>, hook: F)
    where
        F: Fn(&mut Vec<SeasonOption>, &FieldDefinition, Option<&ContentRecord>) -> anyhow::Result<bool>
            + Send
            + Sync
            + 'static,
    {
        self.available_seasons.push((extension.into(), Box::new(hook)));
    }

    /// Whether no callbacks are registered on either hook point.
    pub fn is_empty(&self) -> bool {
        self.current_season.is_empty() && self.available_seasons.is_empty()
    }

    pub(crate) fn alter_current_season(&self, season: &mut Season) -> Result<()> {
        for (extension, hook) in &self.current_season {
            hook(season).map_err(|source| SeasonalError::Extension {
                extension: extension.clone(),
                hook: ALTER_CURRENT_SEASON,
                source,
            })?;
        }
        Ok(())
    }

    pub(crate) fn alter_available_seasons(
        &self,
        options: &mut Vec<SeasonOption>,
        field: &FieldDefinition,
        record: Option<&ContentRecord>,
    ) -> Result<bool> {
        let mut cacheable = true;
        for (extension, hook) in &self.available_seasons {
            cacheable &= hook(options, field, record).map_err(|source| {
                SeasonalError::Extension {
                    extension: extension.clone(),
                    hook: ALTER_AVAILABLE_SEASONS,
                    source,
                }
            })?;
        }
        Ok(cacheable)
    }
}

impl std::fmt::Debug for ExtensionRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExtensionRegistry")
            .field("current_season", &self.current_season.len())
            .field("available_seasons", &self.available_seasons.len())
            .finish()
    }
}
