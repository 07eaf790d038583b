//! Configuration sections and their typed option accessors.

use crate::error::ConfigError;
use std::collections::BTreeMap;
use toml::{Table, Value};

/// Option that turns a rule off when set to `false`.
pub const ENABLED: &str = "Enabled";

/// Option that overrides the severity of a rule's offenses.
pub const SEVERITY: &str = "Severity";

/// The options of a single rule (or shared section such as
/// `Style/CommentAnnotation`).
///
/// Options keep their TOML shape until a rule asks for them, at which point
/// the accessor checks the shape and reports the rule and option name on
/// mismatch. A `RuleConfig` never changes after it is handed to a rule.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleConfig {
    rule: String,
    options: Table,
}

impl RuleConfig {
    /// Creates an empty section for the given rule id.
    pub fn new(rule: impl Into<String>) -> Self {
        Self {
            rule: rule.into(),
            options: Table::new(),
        }
    }

    /// Creates a section from an already-loaded option table.
    pub fn with_options(rule: impl Into<String>, options: Table) -> Self {
        Self {
            rule: rule.into(),
            options,
        }
    }

    /// Returns a copy of this section with one option set.
    pub fn set(mut self, option: impl Into<String>, value: impl Into<Value>) -> Self {
        self.options.insert(option.into(), value.into());
        self
    }

    /// Returns the rule id (or section name) this configuration belongs to.
    pub fn rule(&self) -> &str {
        &self.rule
    }

    /// Returns the raw value of an option.
    pub fn option(&self, name: &str) -> Option<&Value> {
        self.options.get(name)
    }

    /// Returns whether the rule is enabled (`Enabled`, default `true`).
    pub fn enabled(&self) -> Result<bool, ConfigError> {
        self.get_bool(ENABLED, true)
    }

    /// Reads a boolean option, falling back to `default` when absent.
    pub fn get_bool(&self, name: &str, default: bool) -> Result<bool, ConfigError> {
        match self.options.get(name) {
            None => Ok(default),
            Some(Value::Boolean(b)) => Ok(*b),
            Some(other) => Err(self.mismatch(name, "a boolean", other)),
        }
    }

    /// Reads a string option, returning `None` when absent.
    pub fn get_str(&self, name: &str) -> Result<Option<&str>, ConfigError> {
        match self.options.get(name) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.as_str())),
            Some(other) => Err(self.mismatch(name, "a string", other)),
        }
    }

    /// Reads a list-of-strings option, returning an empty list when absent.
    pub fn get_string_list(&self, name: &str) -> Result<Vec<String>, ConfigError> {
        const EXPECTED: &str = "a list of strings";
        match self.options.get(name) {
            None => Ok(Vec::new()),
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| match item {
                    Value::String(s) => Ok(s.clone()),
                    other => Err(self.mismatch(name, EXPECTED, other)),
                })
                .collect(),
            Some(other) => Err(self.mismatch(name, EXPECTED, other)),
        }
    }

    /// Builds an [`InvalidValue`](ConfigError::InvalidValue) error for an option
    /// of this section.
    pub fn invalid_value(&self, option: &str, message: impl Into<String>) -> ConfigError {
        ConfigError::InvalidValue {
            rule: self.rule.clone(),
            option: option.to_string(),
            message: message.into(),
        }
    }

    fn mismatch(&self, option: &str, expected: &'static str, found: &Value) -> ConfigError {
        ConfigError::TypeMismatch {
            rule: self.rule.clone(),
            option: option.to_string(),
            expected,
            found: found.type_str(),
        }
    }
}

/// Configuration for one engine: every section, keyed by rule id.
///
/// Sections that are not present behave as empty, so every option falls back
/// to its default.
#[derive(Debug, Clone, Default)]
pub struct AnalysisConfig {
    sections: BTreeMap<String, RuleConfig>,
}

impl AnalysisConfig {
    /// Creates a configuration where every option takes its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a configuration from an already-loaded table whose top-level
    /// keys are rule ids and whose values are option tables.
    ///
    /// ```toml
    /// ["Sorbet/SigDocumentationMethod"]
    /// RequireForNonPublicMethods = true
    /// ```
    pub fn from_table(table: Table) -> Result<Self, ConfigError> {
        let mut sections = BTreeMap::new();
        for (section, value) in table {
            match value {
                Value::Table(options) => {
                    let config = RuleConfig::with_options(section.clone(), options);
                    sections.insert(section, config);
                }
                other => {
                    return Err(ConfigError::NotATable {
                        section,
                        found: other.type_str(),
                    })
                }
            }
        }
        Ok(Self { sections })
    }

    /// Adds or replaces a section.
    pub fn with_rule(mut self, config: RuleConfig) -> Self {
        self.sections.insert(config.rule().to_string(), config);
        self
    }

    /// Returns the section for a rule id, or an empty one if absent.
    pub fn rule(&self, id: &str) -> RuleConfig {
        self.sections
            .get(id)
            .cloned()
            .unwrap_or_else(|| RuleConfig::new(id))
    }

    /// Returns the names of all configured sections in sorted order.
    pub fn sections(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(src: &str) -> Table {
        toml::from_str(src).unwrap()
    }

    #[test]
    fn missing_section_uses_defaults() {
        let config = AnalysisConfig::new();
        let rule = config.rule("Sorbet/SigDocumentationMethod");
        assert_eq!(rule.rule(), "Sorbet/SigDocumentationMethod");
        assert!(rule.enabled().unwrap());
        assert!(!rule.get_bool("RequireForNonPublicMethods", false).unwrap());
        assert_eq!(rule.get_str("Severity").unwrap(), None);
        assert!(rule.get_string_list("Keywords").unwrap().is_empty());
    }

    #[test]
    fn from_table_reads_sections() {
        let table = parse(
            r#"
["Sorbet/SigDocumentationMethod"]
RequireForNonPublicMethods = true
Severity = "warning"

["Style/CommentAnnotation"]
Keywords = ["TODO", "FIXME"]
"#,
        );
        let config = AnalysisConfig::from_table(table).unwrap();
        let sig = config.rule("Sorbet/SigDocumentationMethod");
        assert!(sig.get_bool("RequireForNonPublicMethods", false).unwrap());
        assert_eq!(sig.get_str("Severity").unwrap(), Some("warning"));
        let annotations = config.rule("Style/CommentAnnotation");
        assert_eq!(
            annotations.get_string_list("Keywords").unwrap(),
            vec!["TODO", "FIXME"]
        );
        assert_eq!(
            config.sections().collect::<Vec<_>>(),
            vec!["Sorbet/SigDocumentationMethod", "Style/CommentAnnotation"]
        );
    }

    #[test]
    fn non_table_section_rejected() {
        let table = parse(r#""Sorbet/ConstDocumentation" = false"#);
        let err = AnalysisConfig::from_table(table).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::NotATable { ref section, found: "boolean" } if section == "Sorbet/ConstDocumentation"
        ));
    }

    #[test]
    fn bool_type_mismatch_names_rule_and_option() {
        let rule = RuleConfig::new("Sorbet/SigDocumentationMethod")
            .set("RequireForNonPublicMethods", "yes");
        let err = rule.get_bool("RequireForNonPublicMethods", false).unwrap_err();
        match err {
            ConfigError::TypeMismatch {
                rule,
                option,
                expected,
                found,
            } => {
                assert_eq!(rule, "Sorbet/SigDocumentationMethod");
                assert_eq!(option, "RequireForNonPublicMethods");
                assert_eq!(expected, "a boolean");
                assert_eq!(found, "string");
            }
            other => panic!("expected TypeMismatch, got {other:?}"),
        }
    }

    #[test]
    fn enabled_must_be_bool() {
        let rule = RuleConfig::new("Sorbet/ConstDocumentation").set(ENABLED, 1);
        assert!(matches!(
            rule.enabled(),
            Err(ConfigError::TypeMismatch { found: "integer", .. })
        ));
    }

    #[test]
    fn string_list_rejects_mixed_items() {
        let table = parse(
            r#"
["Style/CommentAnnotation"]
Keywords = ["TODO", 3]
"#,
        );
        let config = AnalysisConfig::from_table(table).unwrap();
        let err = config
            .rule("Style/CommentAnnotation")
            .get_string_list("Keywords")
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::TypeMismatch { expected: "a list of strings", found: "integer", .. }
        ));
    }

    #[test]
    fn string_list_rejects_scalar() {
        let rule = RuleConfig::new("Style/CommentAnnotation").set("Keywords", "TODO");
        assert!(matches!(
            rule.get_string_list("Keywords"),
            Err(ConfigError::TypeMismatch { found: "string", .. })
        ));
    }

    #[test]
    fn with_rule_replaces_section() {
        let config = AnalysisConfig::new()
            .with_rule(RuleConfig::new("Sorbet/ConstDocumentation").set(ENABLED, true))
            .with_rule(RuleConfig::new("Sorbet/ConstDocumentation").set(ENABLED, false));
        assert!(!config.rule("Sorbet/ConstDocumentation").enabled().unwrap());
    }

    #[test]
    fn invalid_value_carries_rule() {
        let rule = RuleConfig::new("Sorbet/ConstDocumentation");
        let err = rule.invalid_value(SEVERITY, "unknown severity 'loud'");
        assert!(matches!(err, ConfigError::InvalidValue { ref rule, .. } if rule == "Sorbet/ConstDocumentation"));
    }
}
