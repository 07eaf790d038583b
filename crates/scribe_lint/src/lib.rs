//! Documentation rules and the engine that runs them over syntax trees.
//!
//! The engine walks a [`SyntaxTree`](scribe_syntax::SyntaxTree) once in
//! pre-order, tracking method visibility per class or module body, and hands
//! each node to every registered rule interested in its kind. Rules report
//! [`Offense`]s, which come back in walk order.
//!
//! # Built-in rules
//!
//! - **`Sorbet/ConstDocumentation`:** `const` attribute declarations need a
//!   documentation comment.
//! - **`Sorbet/SigDocumentationMethod`:** public method definitions need a
//!   documentation comment, either directly or above their `sig` block.

#![warn(missing_docs)]

mod context;
pub mod documentation;
mod engine;
mod error;
mod rules;
mod visibility;

pub use context::VisitContext;
pub use documentation::DocumentationHeuristic;
pub use engine::LintEngine;
pub use error::LintError;
pub use rules::{register_builtin_rules, ConstDocumentation, SigDocumentationMethod};
pub use visibility::{Visibility, VisibilityState};

use scribe_diagnostics::{Offense, RuleId, Severity};
use scribe_syntax::{NodeId, NodeKind};

/// A single check run against the nodes of a tree.
///
/// A rule names the node kinds it wants to see and is visited with each such
/// node in walk order. Rules are shared between concurrent runs and must not
/// keep per-run state.
pub trait LintRule: Send + Sync {
    /// Returns the rule id, e.g. `Sorbet/ConstDocumentation`.
    fn id(&self) -> RuleId;

    /// Returns a human-readable description of what this rule checks.
    fn description(&self) -> &str;

    /// Returns the severity used when the configuration does not override it.
    fn default_severity(&self) -> Severity;

    /// Returns the node kinds this rule is visited with.
    fn interested_kinds(&self) -> Vec<NodeKind>;

    /// Checks one node, returning an offense if it violates the rule.
    fn visit(&self, node: NodeId, ctx: &VisitContext<'_>) -> Option<Offense>;
}
