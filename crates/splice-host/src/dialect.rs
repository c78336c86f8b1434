//! Host dialect detection and Tree-sitter grammar selection.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use thiserror::Error;

/// Host-language dialects the parser understands.
///
/// Plain TypeScript and TSX need different grammars: TSX cannot parse
/// `<T>value` type assertions, and plain TypeScript cannot parse JSX.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HostDialect {
    /// TypeScript and JavaScript sources (`.ts`, `.mts`, `.cts`, `.js`, ...).
    #[default]
    TypeScript,
    /// Sources containing JSX (`.tsx`, `.jsx`).
    Tsx,
}

impl HostDialect {
    /// Detects the dialect from a file extension.
    ///
    /// Returns `None` if the extension is not recognised.
    #[must_use]
    pub fn from_extension(ext: &str) -> Option<Self> {
        let normalised = ext.to_ascii_lowercase();
        match normalised.as_str() {
            "ts" | "mts" | "cts" | "js" | "mjs" | "cjs" => Some(Self::TypeScript),
            "tsx" | "jsx" => Some(Self::Tsx),
            _ => None,
        }
    }

    /// Detects the dialect from a file path, defaulting to TypeScript for
    /// unknown or missing extensions.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
            .unwrap_or_default()
    }

    /// Returns the Tree-sitter language grammar for this dialect.
    #[must_use]
    pub fn tree_sitter_language(self) -> tree_sitter::Language {
        match self {
            Self::TypeScript => tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
            Self::Tsx => tree_sitter_typescript::LANGUAGE_TSX.into(),
        }
    }

    /// Returns the lower-case identifier for this dialect.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TypeScript => "typescript",
            Self::Tsx => "tsx",
        }
    }
}

impl fmt::Display for HostDialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error raised when parsing a dialect identifier fails.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unsupported host dialect: '{0}'")]
pub struct DialectParseError(String);

impl DialectParseError {
    /// Returns the input that failed to parse.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.0
    }
}

impl FromStr for HostDialect {
    type Err = DialectParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let normalised = input.trim().to_ascii_lowercase();
        match normalised.as_str() {
            "typescript" | "ts" => Ok(Self::TypeScript),
            "tsx" => Ok(Self::Tsx),
            other => Err(DialectParseError(other.to_owned())),
        }
    }
}
