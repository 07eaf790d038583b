//! Compiled pattern representation.

use scribe_syntax::NodeKind;

/// One compiled pattern element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Pattern {
    /// `_`
    Any,
    /// `nil?`
    Nil,
    /// `!p`
    Not(Box<Pattern>),
    /// `:name`
    Sym(String),
    /// `"text"`
    Str(String),
    /// `42`
    Int(i64),
    /// `{a b ...}`
    Union(Vec<Pattern>),
    /// `(kind children... [...])`
    Node {
        kinds: Vec<NodeKind>,
        children: Vec<Pattern>,
        /// Trailing `...`: further children are allowed.
        rest: bool,
    },
}
