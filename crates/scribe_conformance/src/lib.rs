//! Conformance test helpers for the scribe documentation rules.
//!
//! Ruby snippets are parsed with tree-sitter and lowered into syntax trees.
//! The helpers here run the engine over them and return structured results
//! for assertion in integration tests.

#![warn(missing_docs)]

mod fixture;

pub use fixture::{fixture, read_fixture, FixtureError};

use scribe_config::AnalysisConfig;
use scribe_diagnostics::Offense;
use scribe_lint::{LintEngine, LintError};
use scribe_syntax::SyntaxTree;

/// Result of linting one fixture.
pub struct LintResult {
    /// The tree the engine walked.
    pub tree: SyntaxTree,
    /// Offenses in report order.
    pub offenses: Vec<Offense>,
}

impl LintResult {
    /// Returns the offense messages in report order.
    pub fn messages(&self) -> Vec<&str> {
        self.offenses.iter().map(|o| o.message.as_str()).collect()
    }

    /// Returns the rule id of each offense in report order.
    pub fn rule_ids(&self) -> Vec<&str> {
        self.offenses.iter().map(|o| o.rule_id.as_str()).collect()
    }

    /// Returns the source text each offense points at.
    pub fn snippets(&self) -> Vec<&str> {
        let file = self.tree.file();
        self.offenses
            .iter()
            .map(|o| file.snippet(o.location.start, o.location.end))
            .collect()
    }

    /// Returns the 1-indexed line each offense starts on.
    pub fn lines(&self) -> Vec<u32> {
        self.offenses
            .iter()
            .map(|o| o.resolve(self.tree.file()).start_line)
            .collect()
    }
}

/// Parses TOML text into an [`AnalysisConfig`].
///
/// # Panics
///
/// Panics if the text is not valid TOML or a section is not a table.
pub fn config_from_toml(text: &str) -> AnalysisConfig {
    let table: toml::Table = toml::from_str(text).unwrap();
    AnalysisConfig::from_table(table).unwrap()
}

/// Builds an engine with the built-in rules configured by TOML text.
///
/// # Panics
///
/// Panics only if the text is not valid TOML; configuration errors are
/// returned.
pub fn engine_from_toml(text: &str) -> Result<LintEngine, LintError> {
    let table: toml::Table = toml::from_str(text).unwrap();
    let config = AnalysisConfig::from_table(table)?;
    LintEngine::new(&config)
}

/// Lints a Ruby fixture with the default configuration.
pub fn lint(source: &str) -> LintResult {
    lint_with_config(source, "")
}

/// Lints a Ruby fixture with the built-in rules configured by TOML text.
///
/// # Panics
///
/// Panics if the fixture cannot be read or the configuration is invalid.
pub fn lint_with_config(source: &str, config: &str) -> LintResult {
    let engine = engine_from_toml(config).unwrap();
    let tree = fixture(source);
    let offenses = engine.run(&tree);
    LintResult { tree, offenses }
}
