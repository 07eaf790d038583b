//! Sorbet/ConstDocumentation: `const` attributes need a documentation comment.

use std::sync::Arc;

use scribe_diagnostics::{Offense, RuleId, Severity};
use scribe_pattern::{NodePattern, PatternSyntaxError};
use scribe_syntax::{NodeId, NodeKind};

use crate::context::VisitContext;
use crate::documentation::DocumentationHeuristic;
use crate::LintRule;

/// Detects `const` attribute declarations without a documentation comment.
///
/// ```ruby
/// # bad
/// class Foo < T::Struct
///   const :baz, String
/// end
///
/// # good
/// class Foo < T::Struct
///   # Neat little baz
///   const :baz, String
/// end
/// ```
pub struct ConstDocumentation {
    docs: Arc<DocumentationHeuristic>,
    const_call: NodePattern,
}

impl ConstDocumentation {
    /// The rule id.
    pub const ID: &'static str = "Sorbet/ConstDocumentation";

    /// The offense message.
    pub const MESSAGE: &'static str = "Missing documentation comment for const attribute.";

    /// Creates the rule around a shared documentation heuristic.
    pub fn new(docs: Arc<DocumentationHeuristic>) -> Result<Self, PatternSyntaxError> {
        Ok(Self {
            docs,
            const_call: NodePattern::compile("(send nil? :const ...)")?,
        })
    }
}

impl LintRule for ConstDocumentation {
    fn id(&self) -> RuleId {
        RuleId::new(Self::ID)
    }

    fn description(&self) -> &str {
        "checks that const attributes have a documentation comment"
    }

    fn default_severity(&self) -> Severity {
        Severity::Convention
    }

    fn interested_kinds(&self) -> Vec<NodeKind> {
        vec![NodeKind::Send]
    }

    fn visit(&self, node: NodeId, ctx: &VisitContext<'_>) -> Option<Offense> {
        let tree = ctx.tree();
        if !self.const_call.matches(tree, node) || self.docs.has_documentation(tree, node) {
            return None;
        }
        Some(Offense::new(
            self.id(),
            self.default_severity(),
            Self::MESSAGE,
            tree.node(node).span,
        ))
    }
}
