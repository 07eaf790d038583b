//! Programmatic tree construction.
//!
//! [`TreeBuilder`] is how a host parser (or a test) assembles a tree node by
//! node. Children must be built before their parents. Ruby-shaped helpers
//! such as [`TreeBuilder::send`] and [`TreeBuilder::def`] fill in the
//! conventional child layouts.

use crate::arena::NodeId;
use crate::data::{CommentData, NodeData, TreeData};
use crate::error::TreeError;
use crate::kind::NodeKind;
use crate::node::Child;
use crate::tree::SyntaxTree;
use scribe_source::{FileId, Span};
use std::path::PathBuf;

/// Incrementally builds a [`SyntaxTree`].
#[derive(Debug, Clone)]
pub struct TreeBuilder {
    file_id: u32,
    path: PathBuf,
    source: String,
    nodes: Vec<NodeData>,
    comments: Vec<CommentData>,
}

impl TreeBuilder {
    /// Starts a tree over the given source text.
    pub fn new(path: impl Into<PathBuf>, source: impl Into<String>) -> Self {
        Self {
            file_id: 0,
            path: path.into(),
            source: source.into(),
            nodes: Vec::new(),
            comments: Vec::new(),
        }
    }

    /// Sets the file identifier recorded in spans.
    pub fn with_file_id(mut self, file_id: u32) -> Self {
        self.file_id = file_id;
        self
    }

    /// Returns the source text.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns the file identifier.
    pub fn file_id(&self) -> FileId {
        FileId::from_raw(self.file_id)
    }

    /// Makes a span over `start..end` in this file.
    pub fn span(&self, start: u32, end: u32) -> Span {
        Span::new(self.file_id(), start, end)
    }

    /// Returns the span of the first occurrence of `needle`.
    pub fn find(&self, needle: &str) -> Option<Span> {
        self.find_nth(needle, 0)
    }

    /// Returns the span of the `n`th (0-indexed) occurrence of `needle`.
    pub fn find_nth(&self, needle: &str, n: usize) -> Option<Span> {
        let (start, _) = self.source.match_indices(needle).nth(n)?;
        Some(self.span(start as u32, (start + needle.len()) as u32))
    }

    /// Like [`find`](Self::find).
    ///
    /// Only available to tests and with the `test-support` feature.
    ///
    /// # Panics
    ///
    /// Panics if `needle` does not occur in the source.
    #[cfg(any(test, feature = "test-support"))]
    pub fn span_of(&self, needle: &str) -> Span {
        self.span_of_nth(needle, 0)
    }

    /// Like [`find_nth`](Self::find_nth).
    ///
    /// # Panics
    ///
    /// Panics if `needle` does not occur `n + 1` times in the source.
    #[cfg(any(test, feature = "test-support"))]
    pub fn span_of_nth(&self, needle: &str, n: usize) -> Span {
        match self.find_nth(needle, n) {
            Some(span) => span,
            None => panic!("`{needle}` occurrence {n} not found in source"),
        }
    }

    /// Adds a node and returns its ID.
    pub fn node(&mut self, kind: impl Into<NodeKind>, span: Span, children: Vec<Child>) -> NodeId {
        let id = NodeId::from_raw(self.nodes.len() as u32);
        self.nodes.push(NodeData {
            kind: kind.into(),
            start: span.start,
            end: span.end,
            children,
        });
        id
    }

    /// Records a comment covering `span`.
    pub fn comment(&mut self, span: Span) {
        self.comments.push(CommentData {
            start: span.start,
            end: span.end,
        });
    }

    /// Returns the exchange form of the tree built so far.
    pub fn into_data(mut self, root: NodeId) -> TreeData {
        self.comments.sort_by_key(|comment| comment.start);
        TreeData {
            file_id: self.file_id,
            path: self.path,
            source: self.source,
            nodes: self.nodes,
            comments: self.comments,
            root,
        }
    }

    /// Validates and returns the finished tree.
    pub fn finish(self, root: NodeId) -> Result<SyntaxTree, TreeError> {
        SyntaxTree::from_data(self.into_data(root))
    }

    /// `send [receiver|nil, :name, args...]`
    pub fn send(&mut self, span: Span, receiver: Option<NodeId>, name: &str, args: Vec<Child>) -> NodeId {
        let mut children = vec![slot(receiver), Child::sym(name)];
        children.extend(args);
        self.node(NodeKind::Send, span, children)
    }

    /// `sym [:value]`
    pub fn sym(&mut self, span: Span, value: &str) -> NodeId {
        self.node(NodeKind::Sym, span, vec![Child::sym(value)])
    }

    /// `str ["value"]`
    pub fn str_lit(&mut self, span: Span, value: &str) -> NodeId {
        self.node(NodeKind::Str, span, vec![Child::str(value)])
    }

    /// `int [value]`
    pub fn int(&mut self, span: Span, value: i64) -> NodeId {
        self.node(NodeKind::Int, span, vec![Child::int(value)])
    }

    /// `const [scope|nil, :Name]`
    pub fn const_ref(&mut self, span: Span, scope: Option<NodeId>, name: &str) -> NodeId {
        self.node(NodeKind::Const, span, vec![slot(scope), Child::sym(name)])
    }

    /// `self []`
    pub fn self_ref(&mut self, span: Span) -> NodeId {
        self.node(NodeKind::SelfRef, span, Vec::new())
    }

    /// `args [params...]`
    pub fn args(&mut self, span: Span, params: Vec<Child>) -> NodeId {
        self.node(NodeKind::Args, span, params)
    }

    /// `block [call, args, body|nil]`
    pub fn block(&mut self, span: Span, call: NodeId, args: NodeId, body: Option<NodeId>) -> NodeId {
        self.node(
            NodeKind::Block,
            span,
            vec![Child::Node(call), Child::Node(args), slot(body)],
        )
    }

    /// `def [:name, args, body|nil]` with an empty parameter list.
    pub fn def(&mut self, span: Span, name: &str, body: Option<NodeId>) -> NodeId {
        let args = self.args(self.span(span.start, span.start), Vec::new());
        self.node(
            NodeKind::Def,
            span,
            vec![Child::sym(name), Child::Node(args), slot(body)],
        )
    }

    /// `defs [receiver, :name, args, body|nil]` with an empty parameter list.
    pub fn defs(&mut self, span: Span, receiver: NodeId, name: &str, body: Option<NodeId>) -> NodeId {
        let args = self.args(self.span(span.start, span.start), Vec::new());
        self.node(
            NodeKind::Defs,
            span,
            vec![Child::Node(receiver), Child::sym(name), Child::Node(args), slot(body)],
        )
    }

    /// `class [name, superclass|nil, body|nil]`
    pub fn class(&mut self, span: Span, name: NodeId, superclass: Option<NodeId>, body: Option<NodeId>) -> NodeId {
        self.node(
            NodeKind::Class,
            span,
            vec![Child::Node(name), slot(superclass), slot(body)],
        )
    }

    /// `module [name, body|nil]`
    pub fn module(&mut self, span: Span, name: NodeId, body: Option<NodeId>) -> NodeId {
        self.node(NodeKind::Module, span, vec![Child::Node(name), slot(body)])
    }

    /// `sclass [target, body|nil]`
    pub fn sclass(&mut self, span: Span, target: NodeId, body: Option<NodeId>) -> NodeId {
        self.node(NodeKind::SClass, span, vec![Child::Node(target), slot(body)])
    }

    /// `begin [statements...]`
    pub fn begin(&mut self, span: Span, statements: Vec<NodeId>) -> NodeId {
        self.node(
            NodeKind::Begin,
            span,
            statements.into_iter().map(Child::Node).collect(),
        )
    }

    /// A bodiless signature block, `block [(send nil :sig), (args), nil]`.
    ///
    /// The `sig` call covers the first three bytes of `span`.
    pub fn sig(&mut self, span: Span) -> NodeId {
        let call_end = (span.start + 3).min(span.end);
        let call = self.send(self.span(span.start, call_end), None, "sig", Vec::new());
        let args = self.args(self.span(call_end, call_end), Vec::new());
        self.block(span, call, args, None)
    }
}

fn slot(id: Option<NodeId>) -> Child {
    id.map_or(Child::Nil, Child::Node)
}
