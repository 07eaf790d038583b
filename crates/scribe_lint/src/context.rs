//! What a rule sees when it is handed a node.

use crate::visibility::Visibility;
use scribe_syntax::SyntaxTree;

/// Read-only state passed to [`LintRule::visit`](crate::LintRule::visit).
#[derive(Clone, Copy, Debug)]
pub struct VisitContext<'a> {
    tree: &'a SyntaxTree,
    visibility: Visibility,
}

impl<'a> VisitContext<'a> {
    /// Creates a context for a node of `tree` visited under `visibility`.
    pub fn new(tree: &'a SyntaxTree, visibility: Visibility) -> Self {
        Self { tree, visibility }
    }

    /// The tree being walked.
    pub fn tree(&self) -> &'a SyntaxTree {
        self.tree
    }

    /// The visibility in effect in the enclosing scope.
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }
}
