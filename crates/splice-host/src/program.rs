//! Host services handed to lint rules alongside the tree.

use std::ops::Range;
use std::path::{Path, PathBuf};

use splice_core::{LineCol, LineIndex, Span};

use crate::dialect::HostDialect;
use crate::node_maps::NodeMaps;

/// Handle on the parsed program as a whole.
///
/// Carries what rules need to relate offsets to positions without
/// re-scanning the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    file_name: Option<PathBuf>,
    dialect: HostDialect,
    line_index: LineIndex,
}

impl Program {
    pub(crate) fn new(file_name: Option<PathBuf>, dialect: HostDialect, source: &str) -> Self {
        Self {
            file_name,
            dialect,
            line_index: LineIndex::new(source),
        }
    }

    /// Returns the file the program was parsed from, when known.
    #[must_use]
    pub fn file_name(&self) -> Option<&Path> {
        self.file_name.as_deref()
    }

    /// Returns the dialect used to parse the program.
    #[must_use]
    pub const fn dialect(&self) -> HostDialect {
        self.dialect
    }

    /// Returns the line index over the program's source.
    #[must_use]
    pub const fn line_index(&self) -> &LineIndex {
        &self.line_index
    }

    /// Converts a byte offset to a zero-based position.
    #[must_use]
    pub fn position_of(&self, offset: usize) -> Option<LineCol> {
        self.line_index.line_col(offset)
    }

    /// Converts a byte range to a span.
    #[must_use]
    pub fn span_of(&self, range: Range<usize>) -> Option<Span> {
        self.line_index.span(range)
    }
}

/// Services only the host parser can provide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostServices {
    /// The program handle.
    pub program: Program,
    /// Node id correspondence maps.
    pub node_maps: NodeMaps,
}

impl HostServices {
    pub(crate) const fn new(program: Program, node_maps: NodeMaps) -> Self {
        Self { program, node_maps }
    }
}
