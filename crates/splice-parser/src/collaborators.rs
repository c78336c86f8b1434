//! Seams between the composite layer and the two sub-language parsers.
//!
//! Both seams receive the normalised [`ParserOptions`] of the call, so the
//! source type they see is always [`crate::SourceType::Module`].

use splice_host::{HostError, HostParse, HostParser};
use splice_template::{TemplateError, TemplateParse, TemplateParser, TemplateSource};

use crate::options::ParserOptions;

/// Parses a host source.
///
/// Implementations must not modify the text and must not keep state
/// between calls.
pub trait HostLanguageParser {
    /// Parses the full text of the file described by `options`.
    ///
    /// # Errors
    ///
    /// Returns a [`HostError`] when the host text cannot be parsed.
    fn parse_host(&self, text: &str, options: &ParserOptions) -> Result<HostParse, HostError>;
}

/// Parses template markup.
pub trait TemplateLanguageParser {
    /// Parses the template described by `source`.
    ///
    /// # Errors
    ///
    /// Returns a [`TemplateError`] when the markup is malformed.
    fn parse_template(
        &self,
        source: TemplateSource<'_>,
        options: &ParserOptions,
    ) -> Result<TemplateParse, TemplateError>;
}

/// The Tree-sitter host parser, configured per file from its path.
///
/// Tree-sitter's TypeScript grammar always parses module syntax, which is
/// the only source type the options can carry once normalised.
#[derive(Debug, Clone, Copy, Default)]
pub struct TreeSitterHost;

impl HostLanguageParser for TreeSitterHost {
    fn parse_host(&self, text: &str, options: &ParserOptions) -> Result<HostParse, HostError> {
        tracing::trace!(source_type = ?options.source_type, "parsing host source");
        HostParser::for_path(options.path()).parse(text)
    }
}

impl TemplateLanguageParser for TemplateParser {
    fn parse_template(
        &self,
        source: TemplateSource<'_>,
        _options: &ParserOptions,
    ) -> Result<TemplateParse, TemplateError> {
        self.parse(source)
    }
}

impl<P: HostLanguageParser + ?Sized> HostLanguageParser for &P {
    fn parse_host(&self, text: &str, options: &ParserOptions) -> Result<HostParse, HostError> {
        (**self).parse_host(text, options)
    }
}

impl<P: TemplateLanguageParser + ?Sized> TemplateLanguageParser for &P {
    fn parse_template(
        &self,
        source: TemplateSource<'_>,
        options: &ParserOptions,
    ) -> Result<TemplateParse, TemplateError> {
        (**self).parse_template(source, options)
    }
}
