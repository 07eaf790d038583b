//! Rule identifiers of the form `Department/Name`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies the rule that produced an offense, e.g. `Sorbet/ConstDocumentation`.
///
/// The identifier is also the key of the rule's configuration section. The
/// part before the first `/` is the department; identifiers without a `/` have
/// no department.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleId(String);

impl RuleId {
    /// Creates a rule identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the full identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the department prefix, if any.
    pub fn department(&self) -> Option<&str> {
        self.0.split_once('/').map(|(department, _)| department)
    }

    /// Returns the rule name without its department.
    pub fn name(&self) -> &str {
        self.0.split_once('/').map_or(&self.0, |(_, name)| name)
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RuleId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}
