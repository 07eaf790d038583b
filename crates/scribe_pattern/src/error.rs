//! Pattern compilation errors.

use thiserror::Error;

/// A node pattern that failed to compile.
///
/// `offset` is the byte offset into `pattern` where the problem was found.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid node pattern `{pattern}` at offset {offset}: {message}")]
pub struct PatternSyntaxError {
    /// The full pattern source.
    pub pattern: String,
    /// Byte offset of the offending input.
    pub offset: usize,
    /// What went wrong.
    pub message: String,
}

impl PatternSyntaxError {
    pub(crate) fn new(pattern: &str, offset: usize, message: impl Into<String>) -> Self {
        Self {
            pattern: pattern.to_string(),
            offset,
            message: message.into(),
        }
    }
}
