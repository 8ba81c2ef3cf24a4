//! seasonal-paragraphs - season-gated visibility for structured content
//!
//! A small library a host content-management system embeds to let content
//! authors mark structured content blocks ("paragraphs") as visible only
//! during a given season. The whole job is two computations:
//!
//! - resolve the **current season** (`summer`/`winter`, extensible) from a
//!   configured date window plus registered third-party overrides
//! - build the **selectable season options** for the host's field UI, also
//!   overridable
//!
//! plus the cache metadata (tags, contexts, max-age) consumers need to
//! cache either result safely.
//!
//! # Architecture Overview
//!
//! The host framework's entity/field system, configuration storage, hook
//! dispatch, and cache invalidation stay outside this crate. They appear
//! here only as seams:
//!
//! - configuration is read through [`config::ConfigSource`]
//! - "today" is read through [`clock::Clock`]
//! - third-party behavior is an ordered [`extensions::ExtensionRegistry`]
//! - cache invalidation is *declared* via [`cache::CacheDescriptor`]; an
//!   external scheduler clears the `seasonal_paragraphs` tag at least daily
//!
//! Everything is synchronous and single-threaded; concurrent use is safe
//! exactly when the injected configuration source and registry are.
//!
//! # Core Modules
//!
//! - [`season`] - [`season::SeasonResolver`] and the season/option types
//! - [`config`] - site configuration, `MM-DD` boundaries, the summer window
//! - [`extensions`] - the two extension points as ordered callback lists
//! - [`cache`] - cache-validity metadata for season-derived output
//! - [`models`] - opaque field/record values passed through to extensions
//! - [`clock`] - injectable clock
//! - [`core`] - error types
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use seasonal_paragraphs::config::SiteConfig;
//! use seasonal_paragraphs::extensions::ExtensionRegistry;
//! use seasonal_paragraphs::models::FieldDefinition;
//! use seasonal_paragraphs::season::{SeasonOption, SeasonResolver};
//!
//! # fn main() -> seasonal_paragraphs::core::Result<()> {
//! let config = SiteConfig::with_summer_window(
//!     "06-01".parse().unwrap(),
//!     "09-01".parse().unwrap(),
//! );
//!
//! let mut extensions = ExtensionRegistry::new();
//! extensions.register_available_seasons("christmas_module", |options, _field, _record| {
//!     options.push(SeasonOption::new("CHRISTMAS", "Merry christmas"));
//!     Ok(true)
//! });
//!
//! let resolver = SeasonResolver::new(Arc::new(config)).with_extensions(extensions);
//!
//! let season = resolver.current_season()?;
//! let field = FieldDefinition::new("seasonal", "paragraph");
//! let available = resolver.available_seasons(&field, None)?;
//! assert_eq!(available.options.len(), 3);
//! # Ok(())
//! # }
//! ```

// Core functionality
pub mod cache;
pub mod config;
pub mod core;
pub mod season;

// Host seams
pub mod clock;
pub mod extensions;
pub mod models;

// Test utilities (available with the "test-utils" feature)
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use crate::cache::{CacheDescriptor, CacheMaxAge, SEASONAL_CACHE_TAG};
pub use crate::core::{Result, SeasonalError};
pub use crate::season::{AvailableSeasons, Season, SeasonOption, SeasonResolver, SEASONAL_FIELD};
