//! Degrading to a host-only parse when an inline template is unusable.

use std::path::Path;

use splice_core::{Diagnostic, DiagnosticCode, DiagnosticSink};
use splice_template::TemplateError;
use thiserror::Error;

use crate::extract::ExtractError;

/// Why an inline template could not be used.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum CompositeFailure {
    /// The metadata did not yield template text.
    #[error("could not parse @Component() metadata: {0}")]
    Metadata(#[from] ExtractError),

    /// The template parser rejected the extracted text.
    #[error("could not parse the inline template: {0}")]
    Template(#[from] TemplateError),
}

impl CompositeFailure {
    /// Returns the diagnostic code reported for this failure.
    #[must_use]
    pub const fn code(&self) -> DiagnosticCode {
        match self {
            Self::Metadata(_) => DiagnosticCode::MetadataParseFailure,
            Self::Template(_) => DiagnosticCode::EmbeddedTemplateParseFailure,
        }
    }

    /// Builds the diagnostic reported for this failure in `path`.
    #[must_use]
    pub fn to_diagnostic(&self, path: &Path) -> Diagnostic {
        Diagnostic::new(self.code(), self.to_string())
            .with_path(path.display().to_string())
            .with_note("parsed as a plain host source; template rules will not run")
    }
}

/// Reports `failure` so the caller can continue with a host-only parse.
pub(crate) fn report(failure: &CompositeFailure, path: &Path, sink: &mut dyn DiagnosticSink) {
    tracing::debug!(
        path = %path.display(),
        code = %failure.code(),
        "falling back to host-only parse"
    );
    sink.report(failure.to_diagnostic(path));
}
