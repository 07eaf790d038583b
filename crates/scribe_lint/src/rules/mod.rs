//! Built-in rule implementations.
//!
//! This module re-exports the individual rule types and provides
//! `register_builtin_rules` to add them to a `LintEngine`.

mod const_documentation;
mod sig_documentation_method;

pub use const_documentation::ConstDocumentation;
pub use sig_documentation_method::SigDocumentationMethod;

use std::sync::Arc;

use scribe_config::AnalysisConfig;

use crate::documentation::DocumentationHeuristic;
use crate::error::LintError;
use crate::LintEngine;

/// Registers the built-in rules with the engine, in this order:
/// `Sorbet/ConstDocumentation`, then `Sorbet/SigDocumentationMethod`.
///
/// Every rule's options are validated even if the rule ends up disabled.
pub fn register_builtin_rules(
    engine: &mut LintEngine,
    config: &AnalysisConfig,
) -> Result<(), LintError> {
    let docs = Arc::new(DocumentationHeuristic::from_config(config)?);

    let const_config = config.rule(ConstDocumentation::ID);
    engine.register_configured(
        Box::new(ConstDocumentation::new(Arc::clone(&docs))?),
        &const_config,
    )?;

    let sig_config = config.rule(SigDocumentationMethod::ID);
    engine.register_configured(
        Box::new(SigDocumentationMethod::from_config(&sig_config, docs)?),
        &sig_config,
    )?;
    Ok(())
}
