//! Source span and position types for locating code regions.

use std::ops::Range;

use serde::{Deserialize, Serialize};

/// A line and column position within a source file.
///
/// Both fields are zero-indexed to match Tree-sitter conventions. The column
/// is a byte offset within the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LineCol {
    /// Zero-indexed line number.
    pub line: u32,
    /// Zero-indexed column number (byte offset within the line).
    pub column: u32,
}

impl LineCol {
    /// Creates a new line/column position.
    #[must_use]
    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }

    /// Returns the zero-indexed line number.
    #[must_use]
    pub const fn line(&self) -> u32 {
        self.line
    }

    /// Returns the zero-indexed column number.
    #[must_use]
    pub const fn column(&self) -> u32 {
        self.column
    }

    /// Returns one-based `(line, column)` coordinates for user-facing output.
    #[must_use]
    pub const fn one_based(&self) -> (u32, u32) {
        (self.line.saturating_add(1), self.column.saturating_add(1))
    }
}

/// A byte and line/column span in a UTF-8 source.
///
/// The byte range is half-open: `start_byte` is inclusive and `end_byte` is
/// exclusive. Positions are always relative to the whole file that was handed
/// to the parser, including spans that originate in an embedded template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    /// Start byte offset (inclusive).
    pub start_byte: usize,
    /// End byte offset (exclusive).
    pub end_byte: usize,
    /// Start position as line and column.
    pub start: LineCol,
    /// End position as line and column.
    pub end: LineCol,
}

impl Span {
    /// Creates a new span from byte offsets and line/column positions.
    #[must_use]
    pub const fn new(start_byte: usize, end_byte: usize, start: LineCol, end: LineCol) -> Self {
        Self {
            start_byte,
            end_byte,
            start,
            end,
        }
    }

    /// Returns the inclusive start byte offset.
    #[must_use]
    pub const fn start_byte(&self) -> usize {
        self.start_byte
    }

    /// Returns the exclusive end byte offset.
    #[must_use]
    pub const fn end_byte(&self) -> usize {
        self.end_byte
    }

    /// Returns the byte range covered by this span.
    #[must_use]
    pub const fn byte_range(&self) -> Range<usize> {
        self.start_byte..self.end_byte
    }

    /// Returns the number of bytes covered.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end_byte.saturating_sub(self.start_byte)
    }

    /// Returns `true` when the span covers no bytes.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.end_byte <= self.start_byte
    }

    /// Returns the slice of `source` covered by this span, if it lies on
    /// character boundaries inside the text.
    #[must_use]
    pub fn text<'a>(&self, source: &'a str) -> Option<&'a str> {
        source.get(self.byte_range())
    }
}
