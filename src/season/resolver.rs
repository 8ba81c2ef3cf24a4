//! Season resolution.
//!
//! [`SeasonResolver`] is the one service this crate exposes: given an
//! injected configuration source, a clock, and the registered extension
//! callbacks, it answers two questions - "which season is it right now?"
//! and "which seasons can an author pick from?" - and describes how the
//! answers may be cached.

use std::sync::Arc;

use crate::cache::{merge_tags, CacheDescriptor, SEASONAL_CACHE_TAG};
use crate::clock::{Clock, SystemClock};
use crate::config::ConfigSource;
use crate::core::Result;
use crate::extensions::ExtensionRegistry;
use crate::models::{ContentRecord, FieldDefinition};
use crate::season::{builtin_options, Season, SeasonOption};

/// The computed option list plus its cacheability.
///
/// `cacheable` starts at `true` and can only be lowered by extension
/// callbacks; `false` means the host must rebuild the list per request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailableSeasons {
    /// Selectable options in presentation order.
    pub options: Vec<SeasonOption>,
    /// Whether the host may cache this list.
    pub cacheable: bool,
}

/// Resolves the current season and the selectable season options.
///
/// Construction is builder-style: start from a configuration source, then
/// optionally swap the clock or attach extensions.
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
/// use seasonal_paragraphs::config::SiteConfig;
/// use seasonal_paragraphs::season::SeasonResolver;
///
/// # fn main() -> seasonal_paragraphs::core::Result<()> {
/// let config = SiteConfig::with_summer_window("06-01".parse().unwrap(), "09-01".parse().unwrap());
/// let resolver = SeasonResolver::new(Arc::new(config));
/// let season = resolver.current_season()?;
/// println!("current season: {season}");
/// # Ok(())
/// # }
/// ```
pub struct SeasonResolver {
    config: Arc<dyn ConfigSource>,
    clock: Arc<dyn Clock>,
    extensions: ExtensionRegistry,
}

impl SeasonResolver {
    /// Creates a resolver reading from `config`, using the system clock and
    /// no extensions.
    pub fn new(config: Arc<dyn ConfigSource>) -> Self {
        Self {
            config,
            clock: Arc::new(SystemClock),
            extensions: ExtensionRegistry::new(),
        }
    }

    /// Replaces the clock.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Attaches a pre-built extension registry.
    pub fn with_extensions(mut self, extensions: ExtensionRegistry) -> Self {
        self.extensions = extensions;
        self
    }

    /// The extension registry, for registration after construction.
    pub fn extensions_mut(&mut self) -> &mut ExtensionRegistry {
        &mut self.extensions
    }

    /// Returns the season in effect today.
    ///
    /// The configured `[from, to)` window is resolved in the current year
    /// and compared against today's date: inside means [`Season::Summer`],
    /// outside [`Season::Winter`]. Registered "alter current season"
    /// callbacks then run in registration order, each free to overwrite the
    /// value.
    ///
    /// With no callbacks registered the result depends only on
    /// configuration and the clock, so repeated calls within the same day
    /// are identical.
    ///
    /// # Errors
    ///
    /// Configuration errors (missing or malformed `summer_season` settings)
    /// and extension failures; never a silent default.
    pub fn current_season(&self) -> Result<Season> {
        let config = self.config.load()?;
        let window = config.summer_window()?;
        let today = self.clock.today();

        let mut season = if window.contains(today) { Season::Summer } else { Season::Winter };
        tracing::debug!(
            %today,
            from = %window.from,
            to = %window.to,
            season = %season,
            "resolved base season"
        );

        self.extensions.alter_current_season(&mut season)?;
        Ok(season)
    }

    /// Builds the list of seasons a content author may pick from.
    ///
    /// Starts from the built-in summer/winter pair, then runs every
    /// registered "alter available seasons" callback in registration order.
    /// Callbacks receive the field definition and the optional owning
    /// record untouched and may append, remove, or reorder options; their
    /// cacheability votes are folded into [`AvailableSeasons::cacheable`]
    /// (one-way downgrade).
    ///
    /// # Errors
    ///
    /// A failing callback aborts the whole call; no partial list is
    /// returned.
    pub fn available_seasons(
        &self,
        field: &FieldDefinition,
        record: Option<&ContentRecord>,
    ) -> Result<AvailableSeasons> {
        let mut options = builtin_options();
        let cacheable = self.extensions.alter_available_seasons(&mut options, field, record)?;
        tracing::debug!(
            options = options.len(),
            cacheable,
            field = %field.field_name,
            "built available seasons"
        );
        Ok(AvailableSeasons { options, cacheable })
    }

    /// Cache metadata for anything derived from this resolver's output.
    ///
    /// Tags are the union of the site configuration object's own tags and
    /// [`SEASONAL_CACHE_TAG`]; contexts are empty (the result does not vary
    /// by viewer); max-age is permanent. Permanent relies on an external
    /// scheduler invalidating the seasonal tag at least daily - this crate
    /// only declares it.
    pub fn cache_metadata(&self) -> Result<CacheDescriptor> {
        let config = self.config.load()?;
        let tags = merge_tags([
            config.cache_tags(),
            Self::expiring_cache_tags().map(String::from).to_vec(),
        ]);
        Ok(CacheDescriptor::permanent(tags))
    }

    /// The time-based tags that expire without any data change.
    ///
    /// The host's periodic task invalidates these to pick up season
    /// boundary crossings.
    pub fn expiring_cache_tags() -> [&'static str; 1] {
        [SEASONAL_CACHE_TAG]
    }
}

impl std::fmt::Debug for SeasonResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeasonResolver").field("extensions", &self.extensions).finish()
    }
}
