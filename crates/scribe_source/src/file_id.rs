//! Opaque identifier for an analyzed source file.

use serde::{Deserialize, Serialize};

/// Opaque identifier for a source file handed to the engine.
///
/// The host assigns one per analyzed unit. [`Span`](crate::Span)s carry it so
/// offenses from parallel runs can be told apart after they are merged.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct FileId(u32);

impl FileId {
    /// A dummy file ID used for synthetic spans.
    pub const DUMMY: FileId = FileId(u32::MAX);

    /// Creates a `FileId` from a raw `u32` value.
    pub fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the raw `u32` value of this `FileId`.
    pub fn as_raw(self) -> u32 {
        self.0
    }
}
