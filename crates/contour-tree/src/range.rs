//! Byte ranges and line/column mapping

use serde::{Deserialize, Serialize};

/// A half-open byte range `[start, end)` in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TextRange {
    /// Start offset (inclusive)
    pub start: usize,
    /// End offset (exclusive)
    pub end: usize,
}

impl TextRange {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "range start {start} is after end {end}");
        Self { start, end }
    }

    /// A zero-width range at `offset`.
    pub fn point(offset: usize) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    /// The one-character range at the start of this range.
    ///
    /// Object-level diagnostics (missing properties) anchor here instead of
    /// underlining the whole object.
    pub fn first_char(&self) -> Self {
        Self {
            start: self.start,
            end: self.start + 1,
        }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Whether `offset` falls inside the range. The end offset is included so
    /// a cursor sitting right after a token still counts as "on" it.
    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset <= self.end
    }
}

/// A resolved position in source text (0-indexed)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Location {
    /// Byte offset from start of source
    pub offset: usize,
    /// Row number (0-indexed)
    pub row: usize,
    /// Column number (0-indexed, in characters not bytes)
    pub column: usize,
}

/// Precomputed line starts for mapping byte offsets to rows and columns.
#[derive(Debug, Clone)]
pub struct LineIndex {
    source: String,
    line_starts: Vec<usize>,
}

impl LineIndex {
    pub fn new(source: impl Into<String>) -> Self {
        let source = source.into();
        let line_starts = std::iter::once(0)
            .chain(source.match_indices('\n').map(|(i, _)| i + 1))
            .collect();
        Self {
            source,
            line_starts,
        }
    }

    /// Number of lines, counting a trailing empty line after a final newline.
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Map a byte offset to a [`Location`].
    ///
    /// Returns `None` if the offset is past the end of the source or does not
    /// fall on a character boundary.
    pub fn location(&self, offset: usize) -> Option<Location> {
        if offset > self.source.len() || !self.source.is_char_boundary(offset) {
            return None;
        }
        let row = match self.line_starts.binary_search(&offset) {
            Ok(row) => row,
            Err(next) => next - 1,
        };
        let line_start = self.line_starts[row];
        let column = self.source[line_start..offset].chars().count();
        Some(Location {
            offset,
            row,
            column,
        })
    }
}
