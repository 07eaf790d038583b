//! Sorbet/SigDocumentationMethod: public methods need a documentation comment,
//! which may sit above their `sig` block.

use std::sync::Arc;

use scribe_config::RuleConfig;
use scribe_diagnostics::{Offense, RuleId, Severity};
use scribe_pattern::NodePattern;
use scribe_syntax::{NodeId, NodeKind};

use crate::context::VisitContext;
use crate::documentation::DocumentationHeuristic;
use crate::error::LintError;
use crate::visibility::Visibility;
use crate::LintRule;

/// Option extending the check to protected and private methods.
pub const REQUIRE_FOR_NON_PUBLIC_METHODS: &str = "RequireForNonPublicMethods";

/// Detects method definitions without a documentation comment.
///
/// A comment directly above the `def`, or above the `sig` block right before
/// it, documents the method. Protected and private methods are skipped unless
/// `RequireForNonPublicMethods` is set.
///
/// When the definition is the argument of an inline modifier such as
/// `private def foo` or `module_function def foo`, the modifier call is what
/// gets documented and reported, and the modifier decides the visibility.
///
/// ```ruby
/// # bad
/// class Foo
///   sig { void }
///   def bar; end
/// end
///
/// # good
/// class Foo
///   # Documentation
///   sig { void }
///   def bar; end
/// end
/// ```
pub struct SigDocumentationMethod {
    docs: Arc<DocumentationHeuristic>,
    inline_modifier: NodePattern,
    require_for_non_public: bool,
}

impl SigDocumentationMethod {
    /// The rule id.
    pub const ID: &'static str = "Sorbet/SigDocumentationMethod";

    /// The offense message.
    pub const MESSAGE: &'static str = "Missing method documentation comment.";

    /// Creates the rule with explicit options.
    pub fn new(docs: Arc<DocumentationHeuristic>, require_for_non_public: bool) -> Result<Self, LintError> {
        Ok(Self {
            docs,
            inline_modifier: NodePattern::compile(
                "(send nil? {:module_function :private :protected :public \
                 :private_class_method :public_class_method} ...)",
            )?,
            require_for_non_public,
        })
    }

    /// Creates the rule from its configuration section.
    pub fn from_config(config: &RuleConfig, docs: Arc<DocumentationHeuristic>) -> Result<Self, LintError> {
        let require = config.get_bool(REQUIRE_FOR_NON_PUBLIC_METHODS, false)?;
        Self::new(docs, require)
    }

    /// Returns whether non-public methods are checked too.
    pub fn require_for_non_public(&self) -> bool {
        self.require_for_non_public
    }
}

fn modifier_visibility(name: &str) -> Visibility {
    match name {
        "private" | "private_class_method" => Visibility::Private,
        "protected" => Visibility::Protected,
        _ => Visibility::Public,
    }
}

impl LintRule for SigDocumentationMethod {
    fn id(&self) -> RuleId {
        RuleId::new(Self::ID)
    }

    fn description(&self) -> &str {
        "checks that public methods have a documentation comment"
    }

    fn default_severity(&self) -> Severity {
        Severity::Convention
    }

    fn interested_kinds(&self) -> Vec<NodeKind> {
        vec![NodeKind::Def, NodeKind::Defs]
    }

    fn visit(&self, node: NodeId, ctx: &VisitContext<'_>) -> Option<Offense> {
        let tree = ctx.tree();
        let (target, visibility) = match tree.parent(node) {
            Some(parent) if self.inline_modifier.matches(tree, parent) => {
                let name = tree.node(parent).method_name().unwrap_or_default();
                (parent, modifier_visibility(name))
            }
            _ => (node, ctx.visibility()),
        };

        if !visibility.is_public() && !self.require_for_non_public {
            return None;
        }
        if self.docs.has_documentation(tree, target) {
            return None;
        }
        Some(Offense::new(
            self.id(),
            self.default_severity(),
            Self::MESSAGE,
            tree.node(target).span,
        ))
    }
}
