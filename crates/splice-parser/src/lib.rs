//! Composite host/template parsing for lint tooling.
//!
//! A lint host hands every file to [`parse_for_lint`]. Depending on the
//! file's path it is parsed as:
//!
//! - a standalone template document, by the template parser
//! - a component source, by the host parser merged with the parse of the
//!   inline template found in its `@Component({...})` metadata
//! - any other host source, by the host parser with inert template services
//!
//! Problems with an inline template never fail the call. They are reported
//! to the caller's [`DiagnosticSink`] and the file is parsed by the host
//! parser alone. Only a host source the host parser rejects, or a template
//! text the template parser rejects, produces a [`ParseError`].
//!
//! # Example
//!
//! ```
//! use splice_core::Diagnostic;
//! use splice_parser::{ParserOptions, TerminalState, parse_for_lint};
//!
//! let text = "@Component({\n  selector: 'app-a',\n  template: '<b></b>'\n})\nexport class A {}\n";
//! let mut diagnostics: Vec<Diagnostic> = Vec::new();
//! let output = parse_for_lint(text, &ParserOptions::new("a.component.ts"), &mut diagnostics)?;
//! assert_eq!(output.terminal(), TerminalState::ComposeDone);
//! assert!(diagnostics.is_empty());
//! # Ok::<(), splice_parser::ParseError>(())
//! ```

mod collaborators;
mod compose;
mod error;
mod extract;
mod fallback;
mod mode;
mod options;
mod outcome;

use splice_core::DiagnosticSink;
use splice_template::{TemplateParser, TemplateSource};

pub use collaborators::{HostLanguageParser, TemplateLanguageParser, TreeSitterHost};
pub use compose::compose;
pub use error::ParseError;
pub use extract::{
    EmbeddedTemplateCandidate, ExtractError, Extraction, FieldValue, NoCandidateReason, extract,
};
pub use fallback::CompositeFailure;
pub use mode::{ParseMode, TerminalState};
pub use options::{
    DEFAULT_COMPONENT_SUFFIX, DEFAULT_TEMPLATE_SUFFIX, ParserOptions, SourceType,
    SourceTypeParseError,
};
pub use outcome::{
    Ast, CompositeParse, HostOnlyParse, ParseOutcome, ParseOutput, ParseServices, SyntaxTree,
};

/// Runs the composite parse with injected sub-parsers.
#[derive(Debug, Clone, Default)]
pub struct CompositeParser<H = TreeSitterHost, T = TemplateParser> {
    host: H,
    template: T,
}

impl<H, T> CompositeParser<H, T>
where
    H: HostLanguageParser,
    T: TemplateLanguageParser,
{
    /// Creates a composite parser from its two collaborators.
    #[must_use]
    pub const fn new(host: H, template: T) -> Self {
        Self { host, template }
    }

    /// Parses `text` and reports recoverable problems to `sink`.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Host`] if the host parser rejects the file, and
    /// [`ParseError::Template`] if the template parser rejects a template
    /// document or a component text parsed as template markup.
    pub fn parse_for_lint(
        &self,
        text: &str,
        options: &ParserOptions,
        sink: &mut dyn DiagnosticSink,
    ) -> Result<ParseOutput, ParseError> {
        let span = tracing::debug_span!("parse_for_lint", path = %options.path().display());
        let _entered = span.enter();

        let normalised = options.normalise(sink);
        let path = normalised.path();
        let mode = normalised.mode();
        tracing::debug!(%mode, "parse mode selected");

        let (terminal, outcome) = match mode {
            ParseMode::TemplateOnly => (
                TerminalState::TemplateOnlyDone,
                ParseOutcome::TemplateOnly(
                    self.template
                        .parse_template(TemplateSource::document(text), &normalised)?,
                ),
            ),
            ParseMode::HostOnly => (
                TerminalState::HostOnlyDone,
                ParseOutcome::HostOnly(HostOnlyParse::new(
                    self.host.parse_host(text, &normalised)?,
                )),
            ),
            ParseMode::HostWithEmbeddedTemplate => self.parse_component(text, &normalised, sink)?,
        };
        tracing::debug!(%terminal, "parse finished");

        Ok(ParseOutput {
            path: path.to_path_buf(),
            mode,
            terminal,
            outcome,
        })
    }

    fn parse_component(
        &self,
        text: &str,
        options: &ParserOptions,
        sink: &mut dyn DiagnosticSink,
    ) -> Result<(TerminalState, ParseOutcome), ParseError> {
        let candidate = match extract(text) {
            Extraction::Candidate(candidate) => candidate,
            Extraction::NoCandidate(reason) => {
                tracing::debug!(%reason, "no inline template, parsing text as a template");
                let template = self
                    .template
                    .parse_template(TemplateSource::document(text), options)?;
                return Ok((TerminalState::Delegated, ParseOutcome::TemplateOnly(template)));
            }
        };

        let embedded = self.parse_embedded(text, &candidate, options);
        let host = self.host.parse_host(text, options)?;

        Ok(match embedded {
            Ok(template) => (
                TerminalState::ComposeDone,
                ParseOutcome::Composite(compose(host, template)),
            ),
            Err(failure) => {
                fallback::report(&failure, options.path(), sink);
                (
                    TerminalState::FallbackDone,
                    ParseOutcome::HostOnly(HostOnlyParse::new(host)),
                )
            }
        })
    }

    fn parse_embedded(
        &self,
        text: &str,
        candidate: &EmbeddedTemplateCandidate,
        options: &ParserOptions,
    ) -> Result<splice_template::TemplateParse, CompositeFailure> {
        let value = candidate.template()?;
        let source = TemplateSource::embedded(value.text(), text, value.offset());
        Ok(self.template.parse_template(source, options)?)
    }
}

/// Parses `text` with the default sub-parsers.
///
/// # Errors
///
/// See [`CompositeParser::parse_for_lint`].
pub fn parse_for_lint(
    text: &str,
    options: &ParserOptions,
    sink: &mut dyn DiagnosticSink,
) -> Result<ParseOutput, ParseError> {
    CompositeParser::<TreeSitterHost, TemplateParser>::default().parse_for_lint(text, options, sink)
}

/// Parses `text` and returns only its primary tree.
///
/// # Errors
///
/// See [`CompositeParser::parse_for_lint`].
pub fn parse(
    text: &str,
    options: &ParserOptions,
    sink: &mut dyn DiagnosticSink,
) -> Result<Ast, ParseError> {
    Ok(parse_for_lint(text, options, sink)?.into_outcome().into_ast())
}

#[cfg(test)]
mod tests;
