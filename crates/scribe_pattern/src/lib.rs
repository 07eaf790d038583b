//! A small s-expression language for matching syntax tree shapes.
//!
//! Rules describe the constructs they care about as patterns such as
//! `(send nil? :const ...)` and compile them once at registration. Matching
//! is purely structural and never fails at runtime.
//!
//! | Form | Matches |
//! |------|---------|
//! | `(kind p...)` | a node of that kind whose children match positionally |
//! | `({k1 k2} p...)` | a node of any listed kind |
//! | `(kind p... ...)` | as above, allowing further children |
//! | `{p1 p2}` | any alternative |
//! | `_` | any single child |
//! | `nil?` | an absent slot |
//! | `!p` | anything `p` does not match |
//! | `:name`, `"text"`, `42` | a leaf with that value |

#![warn(missing_docs)]

mod ast;
pub mod error;
mod lexer;
mod matcher;
mod parser;

pub use error::PatternSyntaxError;

use ast::Pattern;
use scribe_syntax::{Child, NodeId, SyntaxTree};
use std::fmt;
use std::str::FromStr;

/// A compiled node pattern.
///
/// Immutable after compilation and safe to share across threads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NodePattern {
    source: String,
    root: Pattern,
}

impl NodePattern {
    /// Compiles a pattern.
    pub fn compile(source: &str) -> Result<Self, PatternSyntaxError> {
        let tokens = lexer::lex(source)?;
        let root = parser::parse(source, tokens)?;
        Ok(Self {
            source: source.to_string(),
            root,
        })
    }

    /// Returns the pattern text this was compiled from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns `true` if the node matches.
    pub fn matches(&self, tree: &SyntaxTree, node: NodeId) -> bool {
        self.root.matches_child(tree, &Child::Node(node))
    }

    /// Returns `true` if the child slot (node, leaf, or nil) matches.
    pub fn matches_child(&self, tree: &SyntaxTree, child: &Child) -> bool {
        self.root.matches_child(tree, child)
    }
}

impl FromStr for NodePattern {
    type Err = PatternSyntaxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::compile(s)
    }
}

impl fmt::Display for NodePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
