//! Season identifiers and selectable season options
//!
//! A season is a named visibility category attached to content blocks: the
//! built-in pair `summer`/`winter`, or any identifier an extension decides
//! to introduce (`"CHRISTMAS"`). This module holds the identifier type, the
//! option type content authors pick from, and the [`SeasonResolver`] that
//! computes both.

pub mod resolver;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use resolver::{AvailableSeasons, SeasonResolver};

/// Machine name of the base field the host attaches to seasonal content.
pub const SEASONAL_FIELD: &str = "seasonal";

/// A season identifier.
///
/// The built-in pair is what the resolver produces on its own; extensions
/// may overwrite the current season or extend the option list with
/// [`Season::Custom`] values. Serializes as the plain identifier string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Season {
    /// The configured summer window matched.
    #[serde(rename = "summer")]
    Summer,
    /// Everything outside the summer window.
    #[serde(rename = "winter")]
    Winter,
    /// Extension-defined season outside the built-in pair.
    #[serde(untagged)]
    Custom(String),
}

impl Season {
    /// The identifier string stored on content.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Summer => "summer",
            Self::Winter => "winter",
            Self::Custom(id) => id,
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Season {
    /// Maps the built-in identifiers onto their variants so
    /// `Season::from("summer") == Season::Summer`; anything else becomes
    /// [`Season::Custom`].
    fn from(id: &str) -> Self {
        match id {
            "summer" => Self::Summer,
            "winter" => Self::Winter,
            other => Self::Custom(other.to_string()),
        }
    }
}

impl From<String> for Season {
    fn from(id: String) -> Self {
        Self::from(id.as_str())
    }
}

/// One selectable season option: identifier plus human-readable label.
///
/// Labels are plain strings; translating them is the host's concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonOption {
    /// The season this option selects.
    pub id: Season,
    /// Label shown to content authors.
    pub label: String,
}

impl SeasonOption {
    /// Creates an option.
    pub fn new(id: impl Into<Season>, label: impl Into<String>) -> Self {
        Self { id: id.into(), label: label.into() }
    }
}

/// The two options every site starts from, in presentation order.
pub(crate) fn builtin_options() -> Vec<SeasonOption> {
    vec![
        SeasonOption::new(Season::Summer, "only visible in summer"),
        SeasonOption::new(Season::Winter, "only visible in winter"),
    ]
}
