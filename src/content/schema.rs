//! JSON Schema generation for content files.
//!
//! Schemas are derived from the same types the loader deserializes into, so
//! they can not drift from what `load_bundle` accepts.

use schemars::schema_for;
use serde_json::Value;

use crate::content::definitions::ContentBundle;
use crate::requirements::Requirement;

/// Schema for a whole content bundle file.
pub fn bundle_schema() -> Value {
    schema_for!(ContentBundle).to_value()
}

/// Schema for a single requirement, as accepted by `runetrack check`.
pub fn requirement_schema() -> Value {
    schema_for!(Requirement).to_value()
}
