//! Shared data models passed between the host CMS and extensions
//!
//! The resolver treats these values as opaque: it forwards them to
//! "alter available seasons" extension callbacks untouched and never reads
//! them itself. They exist so extensions can vary the option list per field
//! or per owning record (e.g. hide a custom season on one content type).

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Storage-level description of the field whose selectable options are
/// being computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDefinition {
    /// Machine name of the field, e.g. `seasonal`.
    pub field_name: String,
    /// Entity type the field is attached to, e.g. `paragraph`.
    pub entity_type: String,
    /// Free-form storage settings, forwarded verbatim to extensions.
    #[serde(default)]
    pub settings: Value,
}

impl FieldDefinition {
    /// Creates a definition with empty settings.
    pub fn new(field_name: impl Into<String>, entity_type: impl Into<String>) -> Self {
        Self {
            field_name: field_name.into(),
            entity_type: entity_type.into(),
            settings: Value::Null,
        }
    }
}

/// The record that owns the field being edited, when the host knows it.
///
/// Absent while configuring field storage (no concrete record exists yet),
/// present while editing a concrete content block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentRecord {
    /// Host-assigned identifier.
    pub id: String,
    /// Record type, e.g. `paragraph`.
    pub record_type: String,
    /// Free-form record payload, forwarded verbatim to extensions.
    #[serde(default)]
    pub data: Value,
}

impl ContentRecord {
    /// Creates a record with an empty payload.
    pub fn new(id: impl Into<String>, record_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            record_type: record_type.into(),
            data: Value::Null,
        }
    }
}
