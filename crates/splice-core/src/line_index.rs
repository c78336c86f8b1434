//! Byte offset to line/column conversion.

use std::ops::Range;

use crate::span::{LineCol, Span};

/// Precomputed line start offsets for a piece of text.
///
/// Lines are split on `\n`; a preceding `\r` stays part of the line it
/// terminates, so columns on CRLF files are still byte offsets from the line
/// start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    line_starts: Vec<usize>,
    len: usize,
}

impl LineIndex {
    /// Builds an index over `text`.
    #[must_use]
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![0];
        line_starts.extend(
            text.bytes()
                .enumerate()
                .filter(|(_, byte)| *byte == b'\n')
                .map(|(offset, _)| offset.saturating_add(1)),
        );
        Self {
            line_starts,
            len: text.len(),
        }
    }

    /// Returns the length in bytes of the indexed text.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the indexed text was empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of lines in the indexed text.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Converts a byte offset to a zero-based line/column position.
    ///
    /// Returns `None` when the offset lies past the end of the text.
    #[must_use]
    pub fn line_col(&self, offset: usize) -> Option<LineCol> {
        if offset > self.len {
            return None;
        }
        let line = self
            .line_starts
            .partition_point(|start| *start <= offset)
            .saturating_sub(1);
        let line_start = self.line_starts.get(line).copied().unwrap_or_default();
        // Line/column numbers will realistically never exceed u32::MAX.
        let line_no = u32::try_from(line).unwrap_or(u32::MAX);
        let column = u32::try_from(offset.saturating_sub(line_start)).unwrap_or(u32::MAX);
        Some(LineCol::new(line_no, column))
    }

    /// Converts a byte range to a [`Span`].
    #[must_use]
    pub fn span(&self, range: Range<usize>) -> Option<Span> {
        if range.start > range.end {
            return None;
        }
        let start = self.line_col(range.start)?;
        let end = self.line_col(range.end)?;
        Some(Span::new(range.start, range.end, start, end))
    }

    /// Converts a zero-based line/column position back to a byte offset.
    #[must_use]
    pub fn offset(&self, position: LineCol) -> Option<usize> {
        let line = usize::try_from(position.line).ok()?;
        let start = *self.line_starts.get(line)?;
        let end = self
            .line_starts
            .get(line.saturating_add(1))
            .copied()
            .unwrap_or(self.len);
        let offset = start.checked_add(usize::try_from(position.column).ok()?)?;
        (offset <= end).then_some(offset)
    }
}
