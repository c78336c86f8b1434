//! Error types for host parsing.

use thiserror::Error;

use crate::dialect::HostDialect;
use crate::parser::SyntaxErrorInfo;

/// Errors from the host-language parser.
///
/// Every variant is fatal to a composite parse call: without a valid host
/// tree there is nothing to fall back to.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum HostError {
    /// Failed to initialise the Tree-sitter parser for a dialect.
    #[error("failed to initialise parser for {dialect}: {message}")]
    ParserInit {
        /// The dialect that failed to initialise.
        dialect: HostDialect,
        /// Description of the failure.
        message: String,
    },

    /// Tree-sitter did not produce a tree at all.
    #[error("failed to parse {dialect}: {message}")]
    Parse {
        /// The dialect being parsed.
        dialect: HostDialect,
        /// Description of the failure.
        message: String,
    },

    /// The source parsed, but contains syntax errors.
    #[error("{dialect} source has {} syntax error(s){}", errors.len(), first_error_suffix(errors))]
    Syntax {
        /// The dialect being parsed.
        dialect: HostDialect,
        /// Every error node found in the tree.
        errors: Vec<SyntaxErrorInfo>,
    },
}

impl HostError {
    /// Creates a parser initialisation error.
    #[must_use]
    pub fn parser_init(dialect: HostDialect, message: impl Into<String>) -> Self {
        Self::ParserInit {
            dialect,
            message: message.into(),
        }
    }

    /// Creates a parse error.
    #[must_use]
    pub fn parse(dialect: HostDialect, message: impl Into<String>) -> Self {
        Self::Parse {
            dialect,
            message: message.into(),
        }
    }

    /// Creates a syntax error report.
    #[must_use]
    pub const fn syntax(dialect: HostDialect, errors: Vec<SyntaxErrorInfo>) -> Self {
        Self::Syntax { dialect, errors }
    }

    /// Returns the syntax errors carried by this error, if any.
    #[must_use]
    pub fn syntax_errors(&self) -> &[SyntaxErrorInfo] {
        match self {
            Self::Syntax { errors, .. } => errors,
            Self::ParserInit { .. } | Self::Parse { .. } => &[],
        }
    }
}

fn first_error_suffix(errors: &[SyntaxErrorInfo]) -> String {
    errors.first().map_or_else(String::new, |first| {
        format!(
            "; first at {}:{}: {}",
            first.line, first.column, first.message
        )
    })
}
