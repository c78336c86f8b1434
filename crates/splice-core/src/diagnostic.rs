//! Diagnostics reported through the operator-visible side channel.
//!
//! Parsing never fails because of a recoverable problem. Instead the
//! composite layer reports a [`Diagnostic`] to the [`DiagnosticSink`] handed
//! in by the caller and carries on. The hosting tool decides whether the
//! sink collects, formats or forwards the entries; [`TracingSink`] forwards
//! them to `tracing`, and `Vec<Diagnostic>` collects them.

use std::fmt;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// How serious a diagnostic is.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Severity {
    /// Processing continued with an overridden setting.
    Warning,
    /// Processing continued in a degraded mode.
    Error,
}

/// Stable codes for composite parsing diagnostics.
///
/// # Example
///
/// ```
/// use splice_core::DiagnosticCode;
///
/// let code = DiagnosticCode::MetadataParseFailure;
/// assert_eq!(code.to_string(), "E_SPLICE_METADATA_PARSE");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum DiagnosticCode {
    /// The caller asked for a module mode other than `module`.
    UnsupportedSourceType,
    /// The component metadata did not yield a usable inline template.
    MetadataParseFailure,
    /// The template parser rejected the extracted inline template.
    EmbeddedTemplateParseFailure,
}

impl DiagnosticCode {
    /// Returns the severity attached to this code.
    #[must_use]
    pub const fn severity(self) -> Severity {
        match self {
            Self::UnsupportedSourceType => Severity::Warning,
            Self::MetadataParseFailure | Self::EmbeddedTemplateParseFailure => Severity::Error,
        }
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedSourceType => f.write_str("W_SPLICE_UNSUPPORTED_SOURCE_TYPE"),
            Self::MetadataParseFailure => f.write_str("E_SPLICE_METADATA_PARSE"),
            Self::EmbeddedTemplateParseFailure => f.write_str("E_SPLICE_EMBEDDED_TEMPLATE_PARSE"),
        }
    }
}

/// A single diagnostic entry, attributed to the file being parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    code: DiagnosticCode,
    message: String,
    path: Option<String>,
    notes: Vec<String>,
}

impl Diagnostic {
    /// Creates a new diagnostic.
    #[must_use]
    pub fn new(code: DiagnosticCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: None,
            notes: Vec::new(),
        }
    }

    /// Attributes the diagnostic to a file.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Appends a supplementary note.
    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Returns the diagnostic code.
    #[must_use]
    pub const fn code(&self) -> DiagnosticCode {
        self.code
    }

    /// Returns the severity derived from the code.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        self.code.severity()
    }

    /// Returns the diagnostic message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the file the diagnostic refers to, if known.
    #[must_use]
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Returns the supplementary notes.
    #[must_use]
    pub fn notes(&self) -> &[String] {
        &self.notes
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.severity(), self.code, self.message)?;
        if let Some(path) = &self.path {
            write!(f, " ({path})")?;
        }
        Ok(())
    }
}

/// Receives diagnostics emitted during a single parse call.
pub trait DiagnosticSink {
    /// Records one diagnostic.
    fn report(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

/// Forwards diagnostics to the `tracing` subscriber installed by the host
/// tool.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        let path = diagnostic.path().unwrap_or("<unknown>");
        match diagnostic.severity() {
            Severity::Warning => tracing::warn!(
                code = %diagnostic.code(),
                path,
                notes = ?diagnostic.notes(),
                "{}",
                diagnostic.message()
            ),
            Severity::Error => tracing::error!(
                code = %diagnostic.code(),
                path,
                notes = ?diagnostic.notes(),
                "{}",
                diagnostic.message()
            ),
        }
    }
}
