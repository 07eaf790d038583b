//! Source text with line-start indexing for fast line lookup.

use crate::file_id::FileId;
use crate::resolved_span::ResolvedSpan;
use crate::span::Span;
use std::path::PathBuf;

/// The text a syntax tree was built from.
///
/// Stores the content along with precomputed line-start offsets. The engine
/// only reasons about lines (comment adjacency, blank lines), so the line
/// index is built once here and queried by binary search afterwards.
#[derive(Debug, Clone)]
pub struct SourceFile {
    /// The identifier assigned to this file by the host.
    pub id: FileId,
    /// The path of this file (or a synthetic name for in-memory sources).
    pub path: PathBuf,
    /// The full text content of the file.
    pub content: String,
    /// Byte offsets of each line start (the first entry is always 0).
    line_starts: Vec<u32>,
}

impl SourceFile {
    /// Creates a new `SourceFile` with precomputed line starts.
    pub fn new(id: FileId, path: PathBuf, content: String) -> Self {
        let line_starts = compute_line_starts(&content);
        Self {
            id,
            path,
            content,
            line_starts,
        }
    }

    /// Converts a byte offset into 1-indexed (line, column) coordinates.
    pub fn line_col(&self, byte_offset: u32) -> (u32, u32) {
        let line_idx = self.line_index(byte_offset);
        let line = (line_idx as u32) + 1;
        let col = byte_offset - self.line_starts[line_idx] + 1;
        (line, col)
    }

    /// Returns the 1-indexed line containing the given byte offset.
    pub fn line_of(&self, byte_offset: u32) -> u32 {
        (self.line_index(byte_offset) as u32) + 1
    }

    /// Returns a substring of the file content between byte offsets.
    pub fn snippet(&self, start: u32, end: u32) -> &str {
        &self.content[start as usize..end as usize]
    }

    /// Resolves a [`Span`] in this file to line/column coordinates.
    pub fn resolve_span(&self, span: Span) -> ResolvedSpan {
        let (start_line, start_col) = self.line_col(span.start);
        let (end_line, end_col) = self.line_col(span.end.saturating_sub(1).max(span.start));
        ResolvedSpan {
            file_path: self.path.clone(),
            start_line,
            start_col,
            end_line,
            end_col,
        }
    }

    fn line_index(&self, byte_offset: u32) -> usize {
        match self.line_starts.binary_search(&byte_offset) {
            Ok(idx) => idx,
            Err(idx) => idx - 1,
        }
    }
}

/// Computes the byte offsets of each line start in the given content.
fn compute_line_starts(content: &str) -> Vec<u32> {
    let mut starts = vec![0u32];
    for (i, byte) in content.bytes().enumerate() {
        if byte == b'\n' {
            starts.push((i + 1) as u32);
        }
    }
    starts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_file(content: &str) -> SourceFile {
        SourceFile::new(
            FileId::from_raw(0),
            PathBuf::from("test.rb"),
            content.to_string(),
        )
    }

    #[test]
    fn line_starts_computation() {
        let f = make_file("abc\ndef\nghi");
        assert_eq!(f.line_starts, vec![0, 4, 8]);
    }

    #[test]
    fn line_col_resolution() {
        let f = make_file("abc\ndef\nghi");
        assert_eq!(f.line_col(0), (1, 1));
        assert_eq!(f.line_col(4), (2, 1));
        assert_eq!(f.line_col(5), (2, 2));
        assert_eq!(f.line_col(8), (3, 1));
        assert_eq!(f.line_of(6), 2);
    }

    #[test]
    fn snippet_extraction() {
        let f = make_file("hello world");
        assert_eq!(f.snippet(0, 5), "hello");
        assert_eq!(f.snippet(6, 11), "world");
    }

    #[test]
    fn resolve_multiline_span() {
        let f = make_file("class F\n  def foo; end\nend\n");
        let resolved = f.resolve_span(Span::new(FileId::from_raw(0), 0, 26));
        assert_eq!(resolved.start_line, 1);
        assert_eq!(resolved.start_col, 1);
        assert_eq!(resolved.end_line, 3);
        assert_eq!(resolved.end_col, 3);
        assert_eq!(format!("{resolved}"), "test.rb:1:1");
    }

    #[test]
    fn empty_file() {
        let f = make_file("");
        assert_eq!(f.line_starts, vec![0]);
        assert_eq!(f.line_col(0), (1, 1));
    }
}
