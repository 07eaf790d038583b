//! Structural matching of compiled patterns against tree nodes.

use crate::ast::Pattern;
use scribe_syntax::{Child, SyntaxTree, Value};

impl Pattern {
    /// Returns `true` if this pattern matches the given child slot.
    pub(crate) fn matches_child(&self, tree: &SyntaxTree, child: &Child) -> bool {
        match self {
            Pattern::Any => true,
            Pattern::Nil => child.is_nil(),
            Pattern::Not(inner) => !inner.matches_child(tree, child),
            Pattern::Sym(expected) => {
                matches!(child, Child::Value(Value::Sym(name)) if name == expected)
            }
            Pattern::Str(expected) => {
                matches!(child, Child::Value(Value::Str(value)) if value == expected)
            }
            Pattern::Int(expected) => {
                matches!(child, Child::Value(Value::Int(value)) if value == expected)
            }
            Pattern::Union(alternatives) => alternatives
                .iter()
                .any(|alternative| alternative.matches_child(tree, child)),
            Pattern::Node {
                kinds,
                children,
                rest,
            } => {
                let Some(id) = child.as_node() else {
                    return false;
                };
                let node = tree.node(id);
                if !kinds.contains(&node.kind) {
                    return false;
                }
                let arity_ok = if *rest {
                    node.children.len() >= children.len()
                } else {
                    node.children.len() == children.len()
                };
                arity_ok
                    && children
                        .iter()
                        .zip(&node.children)
                        .all(|(pattern, child)| pattern.matches_child(tree, child))
            }
        }
    }
}
