//! Import run configuration
//!
//! One TOML file describes a migration run: the copy rules, which target
//! fields are store-managed, whether write automation is suppressed and how
//! strictly historical timestamps are checked.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::transfer::{
    AutomationGovernor, DateCheck, FieldMapper, FieldRule, MappingContext, TransformUnit,
};
use crate::transfer::transform::DEFAULT_DATE_FORMAT;

/// Governance policy for the run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GovernanceConfig {
    /// Disable validation/derivation rules on every draft
    pub suppress_automation: bool,
}

/// Timestamp checking
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    pub date_check: DateCheck,
    /// chrono format string the legacy export uses
    pub date_format: String,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            date_check: DateCheck::Off,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

/// Top-level configuration for one import run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportConfig {
    /// Target fields the store populates itself
    pub system_fields: Vec<String>,
    pub governance: GovernanceConfig,
    pub validation: ValidationConfig,
    /// Copy rules, applied in order
    pub mapping: Vec<FieldRule>,
}

impl Default for ImportConfig {
    fn default() -> Self {
        let ctx = MappingContext::historical_timestamps();
        Self {
            system_fields: ctx.system_fields,
            governance: GovernanceConfig::default(),
            validation: ValidationConfig::default(),
            mapping: ctx.rules,
        }
    }
}

impl ImportConfig {
    /// Create a new builder starting from the defaults
    pub fn builder() -> ImportConfigBuilder {
        ImportConfigBuilder::new()
    }

    /// Config for bulk historical loads: automation off, malformed
    /// timestamps reported
    pub fn migration() -> Self {
        Self {
            governance: GovernanceConfig {
                suppress_automation: true,
            },
            validation: ValidationConfig {
                date_check: DateCheck::Warn,
                date_format: DEFAULT_DATE_FORMAT.to_string(),
            },
            ..Self::default()
        }
    }

    /// Default location: ~/.config/history-import/config.toml
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("history-import")
            .join("config.toml")
    }

    /// Parse and check a TOML document
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: ImportConfig =
            toml::from_str(content).context("Failed to parse import config")?;
        config.check()?;
        Ok(config)
    }

    /// Load from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Load `path` if given, else the default file if it exists, else defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }

        let default_path = Self::default_path();
        if default_path.exists() {
            log::debug!("Using config file {}", default_path.display());
            Self::load(&default_path)
        } else {
            log::debug!("No config file at {}, using defaults", default_path.display());
            Ok(Self::default())
        }
    }

    /// Serialize back to TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize import config")
    }

    fn check(&self) -> Result<()> {
        for rule in &self.mapping {
            if rule.source_field.trim().is_empty() || rule.target_field.trim().is_empty() {
                anyhow::bail!("Mapping rule has an empty field name: '{}'", rule);
            }
        }

        let mut seen = std::collections::HashSet::new();
        for rule in &self.mapping {
            if !seen.insert(rule.target_field.as_str()) {
                log::warn!(
                    "Target field '{}' is written by more than one rule; the last present value wins",
                    rule.target_field
                );
            }
        }

        Ok(())
    }

    /// Mapping context for every transform call of this run
    pub fn mapping_context(&self) -> MappingContext {
        MappingContext::new(self.mapping.clone(), self.system_fields.clone())
    }

    /// Transform unit configured for this run
    pub fn transform_unit(&self) -> TransformUnit {
        TransformUnit::new(
            AutomationGovernor::new(self.governance.suppress_automation),
            FieldMapper::new(self.validation.date_check, self.validation.date_format.clone()),
        )
    }
}

/// Builder for ImportConfig
#[derive(Debug)]
pub struct ImportConfigBuilder {
    config: ImportConfig,
}

impl ImportConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: ImportConfig::default(),
        }
    }

    /// Enable/disable automation suppression
    pub fn suppress_automation(mut self, enabled: bool) -> Self {
        self.config.governance.suppress_automation = enabled;
        self
    }

    /// Replace the copy rules
    pub fn mapping(mut self, rules: Vec<FieldRule>) -> Self {
        self.config.mapping = rules;
        self
    }

    /// Append a copy rule
    pub fn rule(mut self, source_field: &str, target_field: &str) -> Self {
        self.config.mapping.push(FieldRule::new(source_field, target_field));
        self
    }

    pub fn system_fields(mut self, fields: Vec<String>) -> Self {
        self.config.system_fields = fields;
        self
    }

    pub fn date_check(mut self, check: DateCheck) -> Self {
        self.config.validation.date_check = check;
        self
    }

    pub fn date_format(mut self, format: impl Into<String>) -> Self {
        self.config.validation.date_format = format.into();
        self
    }

    /// Build the final configuration
    pub fn build(self) -> ImportConfig {
        self.config
    }
}

impl Default for ImportConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ImportConfig::default();

        assert!(!config.governance.suppress_automation);
        assert_eq!(config.validation.date_check, DateCheck::Off);
        assert_eq!(config.mapping_context(), MappingContext::historical_timestamps());
    }

    #[test]
    fn test_migration_config() {
        let config = ImportConfig::migration();

        assert!(config.governance.suppress_automation);
        assert_eq!(config.validation.date_check, DateCheck::Warn);
        assert_eq!(config.mapping.len(), 2);
    }

    #[test]
    fn test_from_toml_partial_uses_defaults() {
        let config = ImportConfig::from_toml(
            r#"
            [governance]
            suppress_automation = true
            "#,
        )
        .unwrap();

        assert!(config.governance.suppress_automation);
        assert_eq!(config.mapping, ImportConfig::default().mapping);
    }

    #[test]
    fn test_from_toml_custom_mapping() {
        let config = ImportConfig::from_toml(
            r#"
            system_fields = ["sys_created_on", "sys_updated_on"]

            [validation]
            date_check = "warn"
            date_format = "%Y-%m-%d"

            [[mapping]]
            source_field = "created_date"
            target_field = "sys_created_on"

            [[mapping]]
            source_field = "updated_date"
            target_field = "sys_updated_on"
            "#,
        )
        .unwrap();

        assert_eq!(config.validation.date_check, DateCheck::Warn);
        assert_eq!(config.validation.date_format, "%Y-%m-%d");
        assert_eq!(config.mapping[0], FieldRule::new("created_date", "sys_created_on"));
        assert!(config.mapping_context().system_field_rule().is_some());
    }

    #[test]
    fn test_example_config_parses() {
        let config = ImportConfig::from_toml(include_str!("../../import.example.toml")).unwrap();

        assert!(config.governance.suppress_automation);
        assert_eq!(config.mapping.len(), 3);
        assert_eq!(config.mapping[1], FieldRule::new("updated_date", "sys_updated_on"));
    }

    #[test]
    fn test_rejects_empty_field_names() {
        let result = ImportConfig::from_toml(
            r#"
            [[mapping]]
            source_field = ""
            target_field = "sys_created_on"
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_toml_roundtrip_of_migration_preset() {
        let config = ImportConfig::migration();
        let text = config.to_toml().unwrap();
        assert_eq!(ImportConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_builder() {
        let config = ImportConfig::builder()
            .suppress_automation(true)
            .mapping(Vec::new())
            .rule("created_date", "sys_created_on")
            .date_check(DateCheck::Warn)
            .date_format("%d/%m/%Y")
            .build();

        assert!(config.governance.suppress_automation);
        assert_eq!(config.mapping, vec![FieldRule::new("created_date", "sys_created_on")]);

        let unit = config.transform_unit();
        assert_eq!(
            unit,
            TransformUnit::new(
                AutomationGovernor::new(true),
                FieldMapper::new(DateCheck::Warn, "%d/%m/%Y"),
            )
        );
    }
}
