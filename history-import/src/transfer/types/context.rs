//! Mapping context: which source fields feed which target fields

use serde::{Deserialize, Serialize};

/// Default legacy column holding the historical creation time
pub const SOURCE_CREATED: &str = "u_create_date";
/// Default legacy column holding the historical update time
pub const SOURCE_UPDATED: &str = "u_update_date";
/// Target field normally stamped by the store on insert
pub const TARGET_CREATED: &str = "sys_created_on";
/// Target field normally stamped by the store on every write
pub const TARGET_UPDATED: &str = "sys_updated_on";

/// Copy `source_field` into `target_field` when the source value is present
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldRule {
    pub source_field: String,
    pub target_field: String,
}

impl FieldRule {
    pub fn new(source_field: impl Into<String>, target_field: impl Into<String>) -> Self {
        FieldRule {
            source_field: source_field.into(),
            target_field: target_field.into(),
        }
    }
}

impl std::fmt::Display for FieldRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.source_field, self.target_field)
    }
}

/// Read-only description of the target schema used during one transform call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingContext {
    /// Conditional copy rules, applied in order
    pub rules: Vec<FieldRule>,
    /// Target fields the store populates itself unless told otherwise
    pub system_fields: Vec<String>,
}

impl MappingContext {
    /// Create a context from explicit rules and system field names
    pub fn new(rules: Vec<FieldRule>, system_fields: Vec<String>) -> Self {
        MappingContext {
            rules,
            system_fields,
        }
    }

    /// The historical timestamp table: creation and update dates override the
    /// store-managed timestamps.
    pub fn historical_timestamps() -> Self {
        MappingContext {
            rules: vec![
                FieldRule::new(SOURCE_CREATED, TARGET_CREATED),
                FieldRule::new(SOURCE_UPDATED, TARGET_UPDATED),
            ],
            system_fields: vec![TARGET_CREATED.to_string(), TARGET_UPDATED.to_string()],
        }
    }

    /// Check whether a target field is store-managed
    pub fn is_system_field(&self, field: &str) -> bool {
        self.system_fields.iter().any(|f| f == field)
    }

    /// First rule that writes a store-managed field, if any
    pub fn system_field_rule(&self) -> Option<&FieldRule> {
        self.rules
            .iter()
            .find(|r| self.is_system_field(&r.target_field))
    }
}

impl Default for MappingContext {
    fn default() -> Self {
        Self::historical_timestamps()
    }
}
