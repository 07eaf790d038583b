//! The read-only syntax tree the rule engine walks.
//!
//! Trees are produced by an external parser and handed over either through
//! [`TreeBuilder`] or as serialized [`TreeData`]. Both paths end in
//! [`SyntaxTree::from_data`], which links parents, indexes line comments, and
//! rejects trees that break the structural invariants:
//!
//! - every non-root node has exactly one parent,
//! - the parent's children contain the node at its sibling index,
//! - every node is reachable from the root,
//! - every span lies inside the source text.
//!
//! Child layouts follow the conventional Ruby AST shape, e.g.
//! `send [receiver|nil, :name, args...]` and `def [:name, args, body|nil]`.

#![warn(missing_docs)]

pub mod arena;
pub mod builder;
pub mod comment;
pub mod data;
pub mod error;
pub mod kind;
pub mod node;
pub mod tree;

pub use arena::{Arena, ArenaId, NodeId};
pub use builder::TreeBuilder;
pub use comment::Comment;
pub use data::{CommentData, NodeData, TreeData};
pub use error::TreeError;
pub use kind::NodeKind;
pub use node::{Child, Node, Value};
pub use tree::SyntaxTree;
