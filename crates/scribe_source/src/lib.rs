//! Source text, span tracking, and line lookup for analyzed files.
//!
//! This crate provides [`FileId`] and [`Span`] for tracking source locations,
//! [`SourceFile`] for line-oriented queries over the text the syntax tree was
//! built from, and [`ResolvedSpan`] for converting byte offsets to
//! human-readable line/column coordinates.

#![warn(missing_docs)]

pub mod file_id;
pub mod resolved_span;
pub mod source_file;
pub mod span;

pub use file_id::FileId;
pub use resolved_span::ResolvedSpan;
pub use source_file::SourceFile;
pub use span::Span;
