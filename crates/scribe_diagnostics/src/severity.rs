//! Offense severity levels ordered from least to most severe.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The severity level of an offense.
///
/// Ordered from least severe (`Info`) to most severe (`Fatal`), matching the
/// derived `PartialOrd`/`Ord` implementation based on declaration order.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational only.
    Info,
    /// The code works but would benefit from restructuring.
    Refactor,
    /// A style or convention violation (the default for documentation rules).
    Convention,
    /// A likely problem that should be reviewed.
    Warning,
    /// A definite problem.
    Error,
    /// A problem that prevents further analysis.
    Fatal,
}

impl Severity {
    /// Parses a configuration name such as `"warning"`.
    ///
    /// Names are case-sensitive and lowercase, as they appear in rule
    /// configuration.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "info" => Some(Severity::Info),
            "refactor" => Some(Severity::Refactor),
            "convention" => Some(Severity::Convention),
            "warning" => Some(Severity::Warning),
            "error" => Some(Severity::Error),
            "fatal" => Some(Severity::Fatal),
            _ => None,
        }
    }

    /// Returns the configuration name of this severity.
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Refactor => "refactor",
            Severity::Convention => "convention",
            Severity::Warning => "warning",
            Severity::Error => "error",
            Severity::Fatal => "fatal",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering() {
        assert!(Severity::Info < Severity::Refactor);
        assert!(Severity::Refactor < Severity::Convention);
        assert!(Severity::Convention < Severity::Warning);
        assert!(Severity::Warning < Severity::Error);
        assert!(Severity::Error < Severity::Fatal);
    }

    #[test]
    fn names_roundtrip() {
        for severity in [
            Severity::Info,
            Severity::Refactor,
            Severity::Convention,
            Severity::Warning,
            Severity::Error,
            Severity::Fatal,
        ] {
            assert_eq!(Severity::from_name(severity.as_str()), Some(severity));
        }
        assert_eq!(Severity::from_name("Warning"), None);
        assert_eq!(Severity::from_name("loud"), None);
    }

    #[test]
    fn serde_uses_config_names() {
        let json = serde_json::to_string(&Severity::Convention).unwrap();
        assert_eq!(json, "\"convention\"");
    }
}
