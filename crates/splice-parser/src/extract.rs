//! Heuristic extraction of an inline template from component metadata.
//!
//! The decorator block is located with a line-oriented pattern and its
//! metadata is split on `,` and `:` without any expression parsing. The
//! heuristic is deliberately shallow: a comma or colon inside a string
//! literal splits the mapping in the wrong place, and the pattern may run
//! past the decorator's own `})` to a later one. Callers treat every
//! failure here as recoverable.

use std::collections::BTreeMap;
use std::ops::Range;

use once_cell::sync::Lazy;
use regex::Regex;
use strum::{Display, IntoStaticStr};
use thiserror::Error;

/// Matches `@Component({ ... })`; `.` is any character but a line
/// terminator.
const DECORATOR_PATTERN: &str = r"@Component\(\{(?:\s[^\n\r\u{2028}\u{2029}]*\s)*\}\)";

const DECORATOR_OPEN: &str = "@Component(";

static DECORATOR: Lazy<Regex> = Lazy::new(decorator_regex);

#[expect(
    clippy::expect_used,
    reason = "the decorator pattern is a constant that always compiles"
)]
fn decorator_regex() -> Regex {
    Regex::new(DECORATOR_PATTERN).expect("decorator pattern compiles")
}

/// Result of looking for an inline template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    /// The metadata carries an inline template.
    Candidate(EmbeddedTemplateCandidate),
    /// No inline template to extract.
    ///
    /// The text is then assumed to already be template markup: an upstream
    /// preprocessor strips component sources down to their inline template
    /// before linting it. The assumption is applied even when the text is a
    /// full component source that uses `templateUrl`.
    NoCandidate(NoCandidateReason),
}

/// Why no candidate was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum NoCandidateReason {
    /// No `@Component({ ... })` block was found.
    NoDecorator,
    /// The block mentions `templateUrl`.
    ExternalTemplate,
    /// The block never mentions `template`.
    NoInlineTemplate,
}

/// Errors raised when a candidate's metadata yields no template text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ExtractError {
    /// The split metadata has no `template` key.
    #[error("component metadata has no `template` field")]
    MissingTemplate,

    /// The `template` key was not followed by a `:` value.
    #[error("component metadata `template` field has no value")]
    TemplateWithoutValue,
}

/// A value from the split metadata, with its location in the full text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldValue {
    text: String,
    offset: usize,
}

impl FieldValue {
    /// Returns the trimmed value text, quotes or backticks included.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the byte offset of the value in the full text.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Returns the byte range of the value in the full text.
    #[must_use]
    pub const fn range(&self) -> Range<usize> {
        self.offset..self.offset.saturating_add(self.text.len())
    }
}

/// A decorator block that appears to carry an inline template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbeddedTemplateCandidate {
    block: Range<usize>,
    fields: BTreeMap<String, Option<FieldValue>>,
    has_template_url: bool,
    has_inline_template: bool,
}

impl EmbeddedTemplateCandidate {
    /// Returns the byte range of the matched decorator block.
    #[must_use]
    pub fn block(&self) -> Range<usize> {
        self.block.clone()
    }

    /// Returns the split metadata.
    ///
    /// Keys are trimmed text before the first `:`; a piece without `:`
    /// maps to `None`. The first key keeps the opening brace and the last
    /// value keeps the closing one.
    #[must_use]
    pub const fn fields(&self) -> &BTreeMap<String, Option<FieldValue>> {
        &self.fields
    }

    /// Returns the value of `key`, if it was present with a value.
    #[must_use]
    pub fn field(&self, key: &str) -> Option<&FieldValue> {
        self.fields.get(key)?.as_ref()
    }

    /// Returns `true` if the block mentions `templateUrl`.
    #[must_use]
    pub const fn has_template_url(&self) -> bool {
        self.has_template_url
    }

    /// Returns `true` if the block mentions `template`.
    #[must_use]
    pub const fn has_inline_template(&self) -> bool {
        self.has_inline_template
    }

    /// Returns the inline template text.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError`] if the split metadata has no usable
    /// `template` value.
    pub fn template(&self) -> Result<&FieldValue, ExtractError> {
        match self.fields.get("template") {
            None => Err(ExtractError::MissingTemplate),
            Some(None) => Err(ExtractError::TemplateWithoutValue),
            Some(Some(value)) => Ok(value),
        }
    }
}

/// Looks for an inline template in `text`.
///
/// # Example
///
/// ```
/// use splice_parser::{Extraction, extract};
///
/// let text = "@Component({\n  selector: 'app-a',\n  template: '<b></b>'\n})\nclass A {}";
/// let Extraction::Candidate(candidate) = extract(text) else {
///     panic!("expected a candidate");
/// };
/// assert_eq!(candidate.template()?.text(), "'<b></b>'\n}");
/// # Ok::<(), splice_parser::ExtractError>(())
/// ```
#[must_use]
pub fn extract(text: &str) -> Extraction {
    let Some(found) = DECORATOR.find(text) else {
        return Extraction::NoCandidate(NoCandidateReason::NoDecorator);
    };
    let block = found.as_str();
    let has_template_url = block.contains("templateUrl");
    let has_inline_template = block.contains("template");
    if has_template_url {
        return Extraction::NoCandidate(NoCandidateReason::ExternalTemplate);
    }
    if !has_inline_template {
        return Extraction::NoCandidate(NoCandidateReason::NoInlineTemplate);
    }

    // Drop `@Component(` and the closing `)`; the braces stay.
    let metadata =
        found.start().saturating_add(DECORATOR_OPEN.len())..found.end().saturating_sub(1);
    Extraction::Candidate(EmbeddedTemplateCandidate {
        block: found.range(),
        fields: split_metadata(text, metadata),
        has_template_url,
        has_inline_template,
    })
}

fn split_metadata(text: &str, metadata: Range<usize>) -> BTreeMap<String, Option<FieldValue>> {
    let mut fields = BTreeMap::new();
    let mut piece_offset = metadata.start;
    for piece in text.get(metadata).unwrap_or_default().split(',') {
        let mut parts = piece.split(':');
        let key = parts.next().unwrap_or_default().trim();
        let value = parts.next().map(|part| {
            // The value part starts right after the first colon.
            let part_offset = piece_offset
                .saturating_add(key_part_len(piece))
                .saturating_add(1);
            let lead = part.len().saturating_sub(part.trim_start().len());
            FieldValue {
                text: part.trim().to_owned(),
                offset: part_offset.saturating_add(lead),
            }
        });
        fields.insert(key.to_owned(), value);
        piece_offset = piece_offset.saturating_add(piece.len()).saturating_add(1);
    }
    fields
}

fn key_part_len(piece: &str) -> usize {
    piece.find(':').unwrap_or(piece.len())
}
