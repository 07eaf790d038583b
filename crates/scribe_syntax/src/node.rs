//! Tree nodes, their children, and leaf values.

use crate::arena::NodeId;
use crate::kind::NodeKind;
use scribe_source::Span;
use serde::{Deserialize, Serialize};

/// A literal leaf stored directly in a node's children.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Value {
    /// A symbol such as a method name (`:const`).
    Sym(String),
    /// A string.
    Str(String),
    /// An integer.
    Int(i64),
}

/// One slot in a node's ordered children.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Child {
    /// A nested node.
    Node(NodeId),
    /// A literal leaf.
    Value(Value),
    /// An absent slot, e.g. the receiver of a bare call.
    Nil,
}

impl Child {
    /// A symbol leaf.
    pub fn sym(name: impl Into<String>) -> Self {
        Child::Value(Value::Sym(name.into()))
    }

    /// A string leaf.
    pub fn str(value: impl Into<String>) -> Self {
        Child::Value(Value::Str(value.into()))
    }

    /// An integer leaf.
    pub fn int(value: i64) -> Self {
        Child::Value(Value::Int(value))
    }

    /// Returns the node ID if this slot holds a node.
    pub fn as_node(&self) -> Option<NodeId> {
        match self {
            Child::Node(id) => Some(*id),
            _ => None,
        }
    }

    /// Returns the symbol name if this slot holds a symbol leaf.
    pub fn as_sym(&self) -> Option<&str> {
        match self {
            Child::Value(Value::Sym(name)) => Some(name),
            _ => None,
        }
    }

    /// Returns `true` for an absent slot.
    pub fn is_nil(&self) -> bool {
        matches!(self, Child::Nil)
    }
}

/// A node in a [`SyntaxTree`](crate::SyntaxTree).
///
/// `parent` and `sibling_index` are filled in when the tree is built and only
/// serve read-only navigation.
#[derive(Clone, Debug)]
pub struct Node {
    /// The construct this node represents.
    pub kind: NodeKind,
    /// Ordered children.
    pub children: Vec<Child>,
    /// Source range covered by the node.
    pub span: Span,
    pub(crate) parent: Option<NodeId>,
    pub(crate) sibling_index: Option<usize>,
}

impl Node {
    /// Returns the parent node, `None` for the root.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Returns the position of this node in its parent's children.
    pub fn sibling_index(&self) -> Option<usize> {
        self.sibling_index
    }

    /// Returns the child slot at `index`.
    pub fn child(&self, index: usize) -> Option<&Child> {
        self.children.get(index)
    }

    /// Iterates over the node children in order, skipping leaves and nil slots.
    pub fn child_nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.children.iter().filter_map(Child::as_node)
    }

    /// Returns the method name of a call or method definition.
    pub fn method_name(&self) -> Option<&str> {
        let slot = match self.kind {
            NodeKind::Send | NodeKind::CSend | NodeKind::Defs => 1,
            NodeKind::Def => 0,
            _ => return None,
        };
        self.child(slot).and_then(Child::as_sym)
    }

    /// Returns the receiver slot of a call or singleton method definition.
    pub fn receiver(&self) -> Option<&Child> {
        match self.kind {
            NodeKind::Send | NodeKind::CSend | NodeKind::Defs => self.child(0),
            _ => None,
        }
    }

    /// Returns the argument slots of a call; empty for other kinds.
    pub fn arguments(&self) -> &[Child] {
        if self.kind.is_call() && self.children.len() > 2 {
            &self.children[2..]
        } else {
            &[]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(kind: NodeKind, children: Vec<Child>) -> Node {
        Node {
            kind,
            children,
            span: Span::DUMMY,
            parent: None,
            sibling_index: None,
        }
    }

    #[test]
    fn call_accessors() {
        let call = node(
            NodeKind::Send,
            vec![
                Child::Nil,
                Child::sym("const"),
                Child::Node(NodeId::from_raw(1)),
                Child::Node(NodeId::from_raw(2)),
            ],
        );
        assert_eq!(call.method_name(), Some("const"));
        assert!(call.receiver().is_some_and(Child::is_nil));
        assert_eq!(call.arguments().len(), 2);
        assert_eq!(
            call.child_nodes().collect::<Vec<_>>(),
            vec![NodeId::from_raw(1), NodeId::from_raw(2)]
        );
    }

    #[test]
    fn definition_names() {
        let def = node(
            NodeKind::Def,
            vec![Child::sym("foo"), Child::Node(NodeId::from_raw(0)), Child::Nil],
        );
        assert_eq!(def.method_name(), Some("foo"));
        assert!(def.receiver().is_none());
        assert!(def.arguments().is_empty());

        let defs = node(
            NodeKind::Defs,
            vec![
                Child::Node(NodeId::from_raw(0)),
                Child::sym("bar"),
                Child::Node(NodeId::from_raw(1)),
                Child::Nil,
            ],
        );
        assert_eq!(defs.method_name(), Some("bar"));
    }

    #[test]
    fn non_call_has_no_method_name() {
        let class = node(NodeKind::Class, vec![Child::Nil, Child::Nil, Child::Nil]);
        assert_eq!(class.method_name(), None);
    }

    #[test]
    fn child_serde_shape() {
        let json = serde_json::to_string(&vec![
            Child::Nil,
            Child::sym("sig"),
            Child::Node(NodeId::from_raw(4)),
        ])
        .unwrap();
        assert_eq!(json, r#"["nil",{"value":{"sym":"sig"}},{"node":4}]"#);
    }
}
