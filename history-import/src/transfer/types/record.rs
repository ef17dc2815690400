//! Source records and target drafts

use std::collections::HashMap;

use super::Value;

/// One entity as read from the legacy store. Read-only once built.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SourceRecord {
    fields: HashMap<String, Value>,
}

impl SourceRecord {
    /// Build from a JSON object. Non-object input yields an empty record.
    pub fn from_json(json: &serde_json::Value) -> Self {
        let fields = json
            .as_object()
            .map(|obj| {
                obj.iter()
                    .map(|(k, v)| (k.clone(), Value::from_json(v)))
                    .collect()
            })
            .unwrap_or_default();
        SourceRecord { fields }
    }

    /// Build from a CSV header and one row. Every cell is kept as a string.
    pub fn from_csv_row(headers: &csv::StringRecord, row: &csv::StringRecord) -> Self {
        let fields = headers
            .iter()
            .zip(row.iter())
            .map(|(name, cell)| (name.to_string(), Value::String(cell.to_string())))
            .collect();
        SourceRecord { fields }
    }

    /// Get a field value
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }
}

/// Write behaviour requested from the target store for one draft
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GovernanceFlags {
    /// Target store generates created/updated timestamps itself
    pub auto_system_fields: bool,
    /// Validation and derivation rules run when the draft is persisted
    pub automation_enabled: bool,
}

impl Default for GovernanceFlags {
    fn default() -> Self {
        Self {
            auto_system_fields: true,
            automation_enabled: true,
        }
    }
}

/// The in-progress entity to be written to the destination system
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TargetDraft {
    fields: HashMap<String, Value>,
    flags: GovernanceFlags,
}

impl TargetDraft {
    /// Create an empty draft with default (store-managed) governance
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a draft pre-populated with driver defaults
    pub fn with_fields(fields: impl IntoIterator<Item = (String, Value)>) -> Self {
        TargetDraft {
            fields: fields.into_iter().collect(),
            flags: GovernanceFlags::default(),
        }
    }

    /// Governance flag setter for automatic system-field generation
    pub fn set_auto_system_fields(&mut self, enabled: bool) {
        self.flags.auto_system_fields = enabled;
    }

    /// Governance flag setter for write automation
    pub fn set_automation_enabled(&mut self, enabled: bool) {
        self.flags.automation_enabled = enabled;
    }

    pub fn flags(&self) -> GovernanceFlags {
        self.flags
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    pub fn set(&mut self, field: impl Into<String>, value: Value) {
        self.fields.insert(field.into(), value);
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    pub fn fields(&self) -> &HashMap<String, Value> {
        &self.fields
    }

    /// Convert to a JSON object with the fields and the governance flags
    pub fn to_json(&self) -> serde_json::Value {
        let fields: serde_json::Map<String, serde_json::Value> = self
            .fields
            .iter()
            .map(|(k, v)| (k.clone(), v.to_json()))
            .collect();

        serde_json::json!({
            "fields": fields,
            "auto_system_fields": self.flags.auto_system_fields,
            "automation_enabled": self.flags.automation_enabled,
        })
    }
}
