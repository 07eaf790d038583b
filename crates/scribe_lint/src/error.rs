//! Errors raised while setting up the engine.

use scribe_config::ConfigError;
use scribe_diagnostics::RuleId;
use scribe_pattern::PatternSyntaxError;
use thiserror::Error;

/// Errors from engine construction and rule registration.
///
/// Running an engine never fails; everything that can go wrong is caught
/// here, before the first tree is walked.
#[derive(Debug, Error)]
pub enum LintError {
    /// A rule or configured pattern failed to compile.
    #[error(transparent)]
    Pattern(#[from] PatternSyntaxError),

    /// A configuration option had the wrong type or an unusable value.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Two rules were registered under the same id.
    #[error("rule `{0}` is already registered")]
    DuplicateRule(RuleId),
}
