//! Errors that cross the composite parser boundary.

use splice_host::HostError;
use splice_template::TemplateError;
use thiserror::Error;

/// A parse call that produced no result.
///
/// Problems with an embedded template never surface here: they are reported
/// as diagnostics and the file is parsed by the host parser alone.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ParseError {
    /// The host parser rejected the file.
    #[error(transparent)]
    Host(#[from] HostError),

    /// The template parser rejected a template document, or a component
    /// text treated as template markup.
    #[error(transparent)]
    Template(#[from] TemplateError),
}
