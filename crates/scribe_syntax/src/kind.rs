//! Node kind tags.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The construct a node represents.
///
/// The named variants are the kinds the engine and its rules reason about;
/// any other tag produced by the parser is kept verbatim in
/// [`Other`](NodeKind::Other). Kinds serialize as their tag name (`"send"`,
/// `"def"`, ...).
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NodeKind {
    /// Method call: `foo(1)`, `recv.foo`.
    Send,
    /// Safe-navigation call: `recv&.foo`.
    CSend,
    /// Call with a block: `sig { void }`.
    Block,
    /// Parameter list.
    Args,
    /// Instance method definition.
    Def,
    /// Singleton method definition: `def self.foo`.
    Defs,
    /// Class definition.
    Class,
    /// Module definition.
    Module,
    /// Singleton class body: `class << self`.
    SClass,
    /// Statement sequence.
    Begin,
    /// Constant reference.
    Const,
    /// `self`.
    SelfRef,
    /// Symbol literal.
    Sym,
    /// String literal.
    Str,
    /// Integer literal.
    Int,
    /// Any other construct, by tag name.
    Other(String),
}

impl NodeKind {
    /// Returns the kind for a tag name.
    pub fn from_name(name: &str) -> Self {
        match name {
            "send" => NodeKind::Send,
            "csend" => NodeKind::CSend,
            "block" => NodeKind::Block,
            "args" => NodeKind::Args,
            "def" => NodeKind::Def,
            "defs" => NodeKind::Defs,
            "class" => NodeKind::Class,
            "module" => NodeKind::Module,
            "sclass" => NodeKind::SClass,
            "begin" => NodeKind::Begin,
            "const" => NodeKind::Const,
            "self" => NodeKind::SelfRef,
            "sym" => NodeKind::Sym,
            "str" => NodeKind::Str,
            "int" => NodeKind::Int,
            other => NodeKind::Other(other.to_string()),
        }
    }

    /// Returns the tag name of this kind.
    pub fn as_str(&self) -> &str {
        match self {
            NodeKind::Send => "send",
            NodeKind::CSend => "csend",
            NodeKind::Block => "block",
            NodeKind::Args => "args",
            NodeKind::Def => "def",
            NodeKind::Defs => "defs",
            NodeKind::Class => "class",
            NodeKind::Module => "module",
            NodeKind::SClass => "sclass",
            NodeKind::Begin => "begin",
            NodeKind::Const => "const",
            NodeKind::SelfRef => "self",
            NodeKind::Sym => "sym",
            NodeKind::Str => "str",
            NodeKind::Int => "int",
            NodeKind::Other(name) => name,
        }
    }

    /// Returns `true` for kinds that open a member scope (class, module,
    /// singleton class).
    pub fn opens_scope(&self) -> bool {
        matches!(self, NodeKind::Class | NodeKind::Module | NodeKind::SClass)
    }

    /// Returns `true` for instance and singleton method definitions.
    pub fn is_method_definition(&self) -> bool {
        matches!(self, NodeKind::Def | NodeKind::Defs)
    }

    /// Returns `true` for plain and safe-navigation calls.
    pub fn is_call(&self) -> bool {
        matches!(self, NodeKind::Send | NodeKind::CSend)
    }
}

impl From<String> for NodeKind {
    fn from(name: String) -> Self {
        NodeKind::from_name(&name)
    }
}

impl From<NodeKind> for String {
    fn from(kind: NodeKind) -> Self {
        match kind {
            NodeKind::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_names_map_to_variants() {
        assert_eq!(NodeKind::from_name("send"), NodeKind::Send);
        assert_eq!(NodeKind::from_name("self"), NodeKind::SelfRef);
        assert_eq!(NodeKind::from_name("sclass"), NodeKind::SClass);
        assert_eq!(NodeKind::SelfRef.as_str(), "self");
    }

    #[test]
    fn unknown_names_are_kept() {
        let kind = NodeKind::from_name("lvasgn");
        assert_eq!(kind, NodeKind::Other("lvasgn".to_string()));
        assert_eq!(kind.as_str(), "lvasgn");
        assert_eq!(String::from(kind), "lvasgn");
    }

    #[test]
    fn classification() {
        assert!(NodeKind::Class.opens_scope());
        assert!(NodeKind::SClass.opens_scope());
        assert!(!NodeKind::Begin.opens_scope());
        assert!(NodeKind::Defs.is_method_definition());
        assert!(!NodeKind::Send.is_method_definition());
        assert!(NodeKind::CSend.is_call());
    }

    #[test]
    fn serializes_as_tag_name() {
        assert_eq!(serde_json::to_string(&NodeKind::Def).unwrap(), "\"def\"");
        let kind: NodeKind = serde_json::from_str("\"ivar\"").unwrap();
        assert_eq!(kind, NodeKind::Other("ivar".to_string()));
        let kind: NodeKind = serde_json::from_str("\"block\"").unwrap();
        assert_eq!(kind, NodeKind::Block);
    }
}
