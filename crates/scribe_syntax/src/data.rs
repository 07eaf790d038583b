//! Serializable tree form exchanged with the parser host.

use crate::arena::NodeId;
use crate::kind::NodeKind;
use crate::node::Child;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A syntax tree as produced by an external parser.
///
/// Nodes reference their children by index into `nodes`. Parent links are not
/// part of the exchange format; [`SyntaxTree::from_data`](crate::SyntaxTree::from_data)
/// derives them.
///
/// ```json
/// {
///   "path": "foo.rb",
///   "source": "const :foo, String\n",
///   "root": 0,
///   "nodes": [
///     {"kind": "send", "start": 0, "end": 18,
///      "children": ["nil", {"value": {"sym": "const"}}, {"node": 1}, {"node": 2}]},
///     {"kind": "sym", "start": 6, "end": 10, "children": [{"value": {"sym": "foo"}}]},
///     {"kind": "const", "start": 12, "end": 18, "children": ["nil", {"value": {"sym": "String"}}]}
///   ]
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeData {
    /// Raw file identifier assigned by the host.
    #[serde(default)]
    pub file_id: u32,
    /// Path of the analyzed file.
    pub path: PathBuf,
    /// The full source text the spans refer to.
    pub source: String,
    /// All nodes, referenced by index.
    pub nodes: Vec<NodeData>,
    /// All comments in source order.
    #[serde(default)]
    pub comments: Vec<CommentData>,
    /// Index of the root node.
    pub root: NodeId,
}

/// One node of a [`TreeData`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeData {
    /// The node kind tag.
    pub kind: NodeKind,
    /// Span start byte offset.
    pub start: u32,
    /// Span end byte offset (exclusive).
    pub end: u32,
    /// Ordered child slots.
    #[serde(default)]
    pub children: Vec<Child>,
}

/// One comment of a [`TreeData`]; its text is taken from the source.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CommentData {
    /// Span start byte offset.
    pub start: u32,
    /// Span end byte offset (exclusive).
    pub end: u32,
}
