//! Cache metadata for season-derived output
//!
//! The resolver's results are pure functions of configuration and the
//! wall-clock date, so the host may cache them - but only if it knows when
//! to throw them away. This module is the crate's half of that contract:
//! a [`CacheDescriptor`] value the host attaches to whatever it caches.
//!
//! The descriptor this crate produces is always `max_age = Permanent` with
//! the [`SEASONAL_CACHE_TAG`] tag attached. Permanent is only correct
//! because an external scheduler is expected to invalidate that tag at
//! least once per day; crossing the configured season boundary changes the
//! result without any data changing. This crate declares the tag and does
//! not perform the invalidation.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Time-based cache tag attached to every season-derived result.
///
/// An external periodic task must invalidate this tag at least daily so
/// cached output refreshes when the date crosses a season boundary.
pub const SEASONAL_CACHE_TAG: &str = "seasonal_paragraphs";

/// How long, and under which variation axes, a computed result may be
/// cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheDescriptor {
    /// Invalidation keys; clearing any of them drops the cached result.
    pub tags: BTreeSet<String>,
    /// Axes of variation (per-user, per-language, ...). Empty means the
    /// result is identical for every viewer.
    pub contexts: BTreeSet<String>,
    /// Expiry policy.
    pub max_age: CacheMaxAge,
}

/// Cache lifetime policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CacheMaxAge {
    /// Valid until a tag is invalidated, never by elapsed time.
    Permanent,
    /// Valid for at most this many seconds.
    Seconds(u64),
}

impl CacheDescriptor {
    /// A permanent, context-free descriptor carrying the given tags.
    pub fn permanent(tags: impl IntoIterator<Item = String>) -> Self {
        Self {
            tags: tags.into_iter().collect(),
            contexts: BTreeSet::new(),
            max_age: CacheMaxAge::Permanent,
        }
    }

    /// Whether the descriptor carries the given tag.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }
}

/// Merges tag collections into one deduplicated set.
pub fn merge_tags<I, T>(collections: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = T>,
    T: IntoIterator<Item = String>,
{
    collections.into_iter().flatten().collect()
}
