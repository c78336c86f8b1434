//! Error types for template parsing.
//!
//! Offsets are byte offsets into the template text that was parsed.

use thiserror::Error;

/// Errors raised when template markup cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum TemplateError {
    /// A `<!--` comment was never closed.
    #[error("unterminated comment starting at offset {offset}")]
    UnterminatedComment {
        /// Offset of `<!--`.
        offset: usize,
    },

    /// A start or end tag was never closed with `>`.
    #[error("unterminated tag <{name}> starting at offset {offset}")]
    UnterminatedTag {
        /// Tag name.
        name: String,
        /// Offset of `<`.
        offset: usize,
    },

    /// A quoted attribute value was never closed.
    #[error("unterminated value for attribute {attribute} starting at offset {offset}")]
    UnterminatedAttributeValue {
        /// Attribute name.
        attribute: String,
        /// Offset of the opening quote.
        offset: usize,
    },

    /// A closing tag matched no open element.
    #[error("unexpected closing tag </{name}> at offset {offset}")]
    UnexpectedClosingTag {
        /// Tag name.
        name: String,
        /// Offset of `</`.
        offset: usize,
    },

    /// A character that cannot appear at this point of a tag.
    #[error("unexpected character {character:?} at offset {offset}")]
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// Its offset.
        offset: usize,
    },
}

impl TemplateError {
    /// Returns the offset the error was detected at.
    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            Self::UnterminatedComment { offset }
            | Self::UnterminatedTag { offset, .. }
            | Self::UnterminatedAttributeValue { offset, .. }
            | Self::UnexpectedClosingTag { offset, .. }
            | Self::UnexpectedCharacter { offset, .. } => *offset,
        }
    }
}
