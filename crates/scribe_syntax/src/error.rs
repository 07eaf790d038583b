//! Errors for trees that break the structural invariants.

/// A host-supplied tree that cannot be analyzed.
///
/// Node and comment positions are raw indices into the submitted
/// [`TreeData`](crate::TreeData).
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TreeError {
    /// The tree has no nodes.
    #[error("syntax tree has no nodes")]
    Empty,

    /// The root index does not name a node.
    #[error("root node {root} does not exist ({len} nodes)")]
    RootOutOfRange {
        /// The submitted root index.
        root: u32,
        /// The number of nodes.
        len: usize,
    },

    /// A child slot references a node that does not exist.
    #[error("node {parent} references missing child node {child}")]
    DanglingChild {
        /// The node holding the reference.
        parent: u32,
        /// The missing node index.
        child: u32,
    },

    /// A node appears as the child of more than one slot.
    #[error("node {child} has more than one parent")]
    SharedChild {
        /// The node referenced twice.
        child: u32,
    },

    /// The root appears as some node's child.
    #[error("root node {root} has a parent")]
    RootHasParent {
        /// The root index.
        root: u32,
    },

    /// A node cannot be reached from the root.
    #[error("node {node} is not reachable from the root")]
    Detached {
        /// The first unreachable node index.
        node: u32,
    },

    /// A node span does not lie on character boundaries inside the source.
    #[error("node {node} span {start}..{end} lies outside the source text")]
    NodeSpanOutOfBounds {
        /// The node index.
        node: u32,
        /// Span start.
        start: u32,
        /// Span end.
        end: u32,
    },

    /// A comment span does not lie on character boundaries inside the source.
    #[error("comment {index} span {start}..{end} lies outside the source text")]
    CommentSpanOutOfBounds {
        /// The comment index.
        index: usize,
        /// Span start.
        start: u32,
        /// Span end.
        end: u32,
    },
}
