//! A single reported violation of a rule.

use crate::rule_id::RuleId;
use crate::severity::Severity;
use scribe_source::{ResolvedSpan, SourceFile, Span};
use serde::{Deserialize, Serialize};

/// A rule violation found during a run.
///
/// Created by a rule while the tree is walked and immutable afterwards, apart
/// from the engine stamping the configured severity on it before recording.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Offense {
    /// The rule that reported this offense.
    pub rule_id: RuleId,
    /// How serious the offense is.
    pub severity: Severity,
    /// The offense message.
    pub message: String,
    /// The source range of the offending node.
    pub location: Span,
}

impl Offense {
    /// Creates a new offense.
    pub fn new(
        rule_id: RuleId,
        severity: Severity,
        message: impl Into<String>,
        location: Span,
    ) -> Self {
        Self {
            rule_id,
            severity,
            message: message.into(),
            location,
        }
    }

    /// Replaces the severity of this offense.
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Resolves the location against the file the offense was found in.
    pub fn resolve(&self, file: &SourceFile) -> ResolvedSpan {
        file.resolve_span(self.location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scribe_source::FileId;
    use std::path::PathBuf;

    #[test]
    fn create_and_override_severity() {
        let offense = Offense::new(
            RuleId::new("Sorbet/ConstDocumentation"),
            Severity::Convention,
            "Missing documentation comment for const attribute.",
            Span::DUMMY,
        );
        assert_eq!(offense.severity, Severity::Convention);
        let offense = offense.with_severity(Severity::Error);
        assert_eq!(offense.severity, Severity::Error);
        assert_eq!(offense.rule_id.as_str(), "Sorbet/ConstDocumentation");
    }

    #[test]
    fn resolve_location() {
        let file = SourceFile::new(
            FileId::from_raw(0),
            PathBuf::from("foo.rb"),
            "# doc\n  const :foo, String\n".to_string(),
        );
        let offense = Offense::new(
            RuleId::new("Sorbet/ConstDocumentation"),
            Severity::Convention,
            "missing",
            Span::new(FileId::from_raw(0), 8, 26),
        );
        let resolved = offense.resolve(&file);
        assert_eq!((resolved.start_line, resolved.start_col), (2, 3));
        assert_eq!((resolved.end_line, resolved.end_col), (2, 20));
    }

    #[test]
    fn json_shape() {
        let offense = Offense::new(
            RuleId::new("Sorbet/SigDocumentationMethod"),
            Severity::Convention,
            "Missing method documentation comment.",
            Span::new(FileId::from_raw(3), 10, 22),
        );
        let value = serde_json::to_value(&offense).unwrap();
        assert_eq!(value["rule_id"], "Sorbet/SigDocumentationMethod");
        assert_eq!(value["severity"], "convention");
        assert_eq!(value["location"]["start"], 10);
        assert_eq!(value["location"]["end"], 22);
    }
}
