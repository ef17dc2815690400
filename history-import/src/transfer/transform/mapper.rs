//! Conditional field copy from source record to target draft

use crate::transfer::sink::emit;
use crate::transfer::{FieldRule, ImportLog, MappingContext, SourceRecord, TargetDraft};

use super::TransformError;
use super::check::{DEFAULT_DATE_FORMAT, DateCheck, malformed_timestamp};

/// Outcome of mapping one record
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MappingSummary {
    /// Rules whose source value was present and copied
    pub applied: Vec<FieldRule>,
    /// Rules skipped because the source value was absent or empty
    pub skipped: Vec<FieldRule>,
    /// Copied values that failed the optional timestamp check
    pub malformed: Vec<FieldRule>,
}

impl MappingSummary {
    pub fn applied_count(&self) -> usize {
        self.applied.len()
    }

    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }
}

/// Applies the context's copy rules to a draft
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMapper {
    date_check: DateCheck,
    date_format: String,
}

impl Default for FieldMapper {
    fn default() -> Self {
        Self::new(DateCheck::Off, DEFAULT_DATE_FORMAT)
    }
}

impl FieldMapper {
    pub fn new(date_check: DateCheck, date_format: impl Into<String>) -> Self {
        FieldMapper {
            date_check,
            date_format: date_format.into(),
        }
    }

    /// For each rule, copy `source[source_field]` into `draft[target_field]`
    /// if it is truthy. Values are copied verbatim; absent values leave the
    /// draft's existing value alone.
    ///
    /// Rules writing a system-managed field require automatic system fields to
    /// be off already, otherwise the store would overwrite the value.
    pub fn map_conditional_fields(
        &self,
        ctx: &MappingContext,
        source: &SourceRecord,
        draft: &mut TargetDraft,
        sink: &dyn ImportLog,
    ) -> Result<MappingSummary, TransformError> {
        if draft.flags().auto_system_fields {
            if let Some(rule) = ctx.system_field_rule() {
                return Err(TransformError::GovernanceNotApplied {
                    target_field: rule.target_field.clone(),
                });
            }
        }

        let mut summary = MappingSummary::default();

        for rule in &ctx.rules {
            let value = match source.get(&rule.source_field) {
                Some(value) if value.is_truthy() => value,
                _ => {
                    emit(
                        sink,
                        log::Level::Debug,
                        &format!("Skipping {}: source value absent", rule),
                    );
                    summary.skipped.push(rule.clone());
                    continue;
                }
            };

            if self.date_check == DateCheck::Warn && ctx.is_system_field(&rule.target_field) {
                if let Some(problem) = malformed_timestamp(value, &self.date_format) {
                    emit(
                        sink,
                        log::Level::Warn,
                        &format!("{}: {}, copying unchanged", rule, problem),
                    );
                    summary.malformed.push(rule.clone());
                }
            }

            draft.set(rule.target_field.clone(), value.clone());
            summary.applied.push(rule.clone());
        }

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transfer::{MemoryLog, NullLog, Value};
    use serde_json::json;

    fn governed_draft() -> TargetDraft {
        let mut draft = TargetDraft::new();
        draft.set_auto_system_fields(false);
        draft
    }

    #[test]
    fn test_copies_present_values_verbatim() {
        let source = SourceRecord::from_json(&json!({
            "u_create_date": "2001-01-01 08:00:00",
            "u_update_date": "2002-02-02 09:30:00"
        }));
        let mut draft = governed_draft();

        let summary = FieldMapper::default()
            .map_conditional_fields(&MappingContext::default(), &source, &mut draft, &NullLog)
            .unwrap();

        assert_eq!(summary.applied_count(), 2);
        assert_eq!(draft.get("sys_created_on"), Some(&Value::from("2001-01-01 08:00:00")));
        assert_eq!(draft.get("sys_updated_on"), Some(&Value::from("2002-02-02 09:30:00")));
    }

    #[test]
    fn test_absent_value_keeps_draft_default() {
        let source = SourceRecord::from_json(&json!({"u_update_date": null}));
        let mut draft = governed_draft();
        draft.set("sys_updated_on", Value::from("driver-default"));

        let summary = FieldMapper::default()
            .map_conditional_fields(&MappingContext::default(), &source, &mut draft, &NullLog)
            .unwrap();

        assert_eq!(summary.skipped_count(), 2);
        assert_eq!(draft.get("sys_updated_on"), Some(&Value::from("driver-default")));
        assert!(!draft.contains("sys_created_on"));
    }

    #[test]
    fn test_refuses_system_field_while_store_managed() {
        let source = SourceRecord::from_json(&json!({"u_create_date": "2001-01-01"}));
        let mut draft = TargetDraft::new();

        let err = FieldMapper::default()
            .map_conditional_fields(&MappingContext::default(), &source, &mut draft, &NullLog)
            .unwrap_err();

        assert_eq!(
            err,
            TransformError::GovernanceNotApplied {
                target_field: "sys_created_on".to_string()
            }
        );
        assert!(draft.fields().is_empty());
    }

    #[test]
    fn test_plain_rules_run_without_governance() {
        let ctx = MappingContext::new(
            vec![FieldRule::new("short_description", "short_description")],
            vec!["sys_created_on".to_string()],
        );
        let source = SourceRecord::from_json(&json!({"short_description": "SAP Login failed"}));
        let mut draft = TargetDraft::new();

        FieldMapper::default()
            .map_conditional_fields(&ctx, &source, &mut draft, &NullLog)
            .unwrap();

        assert_eq!(draft.get("short_description"), Some(&Value::from("SAP Login failed")));
    }

    #[test]
    fn test_malformed_date_passes_through_with_warning() {
        let source = SourceRecord::from_json(&json!({"u_create_date": "yesterday-ish"}));
        let mut draft = governed_draft();
        let sink = MemoryLog::new();

        let summary = FieldMapper::new(DateCheck::Warn, DEFAULT_DATE_FORMAT)
            .map_conditional_fields(&MappingContext::default(), &source, &mut draft, &sink)
            .unwrap();

        assert_eq!(draft.get("sys_created_on"), Some(&Value::from("yesterday-ish")));
        assert_eq!(summary.malformed.len(), 1);
        assert_eq!(sink.count(log::Level::Warn), 1);
    }

    #[test]
    fn test_malformed_date_silent_when_check_off() {
        let source = SourceRecord::from_json(&json!({"u_create_date": "yesterday-ish"}));
        let mut draft = governed_draft();
        let sink = MemoryLog::new();

        let summary = FieldMapper::default()
            .map_conditional_fields(&MappingContext::default(), &source, &mut draft, &sink)
            .unwrap();

        assert!(summary.malformed.is_empty());
        assert_eq!(sink.count(log::Level::Warn), 0);
        assert_eq!(draft.get("sys_created_on"), Some(&Value::from("yesterday-ish")));
    }
}
