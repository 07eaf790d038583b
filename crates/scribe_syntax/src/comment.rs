//! Source comments supplied alongside the tree.

use scribe_source::Span;

/// A comment from the analyzed source.
///
/// Comments are not tree children. They relate to nodes only through line
/// adjacency, see [`SyntaxTree::leading_comments`](crate::SyntaxTree::leading_comments).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Comment {
    /// The comment text including its `#` marker.
    pub text: String,
    /// Source range of the comment.
    pub span: Span,
    /// First line covered by the comment (1-indexed).
    pub start_line: u32,
    /// Last line covered by the comment (1-indexed).
    pub end_line: u32,
    /// `true` when only whitespace precedes the comment on its line.
    pub own_line: bool,
}
