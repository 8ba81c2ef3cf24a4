//! Core types for seasonal-paragraphs
//!
//! The core module holds what every other module builds on: the crate's
//! error type and its `Result` alias.
//!
//! # Design Principles
//!
//! ## Error First Design
//! Every operation that can fail returns a [`Result`] with a specific
//! [`SeasonalError`] variant. Configuration problems are never papered over
//! with defaults, and extension failures are never swallowed.
//!
//! ## Type Safety
//! Season identifiers, calendar boundaries, and cache lifetimes are all
//! dedicated types rather than raw strings and integers, so invalid states
//! are caught at the edges instead of deep inside the resolver.

pub mod error;

pub use error::{Result, SeasonalError};
