//! Where a template's text lives and how to map ranges back to it.

use std::ops::Range;

use splice_core::{LineIndex, Span};

/// Template text together with the document it was taken from.
///
/// A standalone template file is its own document with origin `0`. An
/// embedded template is a substring of a host source starting at `origin`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateSource<'a> {
    text: &'a str,
    document: &'a str,
    origin: usize,
}

impl<'a> TemplateSource<'a> {
    /// A template that is the whole document.
    #[must_use]
    pub const fn document(text: &'a str) -> Self {
        Self {
            text,
            document: text,
            origin: 0,
        }
    }

    /// A template embedded in `document`, starting at byte `origin`.
    #[must_use]
    pub const fn embedded(text: &'a str, document: &'a str, origin: usize) -> Self {
        Self {
            text,
            document,
            origin,
        }
    }

    /// Returns the template text.
    #[must_use]
    pub const fn text(&self) -> &'a str {
        self.text
    }

    /// Returns the enclosing document.
    #[must_use]
    pub const fn document_text(&self) -> &'a str {
        self.document
    }

    /// Returns the offset of the template text inside the document.
    #[must_use]
    pub const fn origin(&self) -> usize {
        self.origin
    }
}

/// Maps template-relative byte ranges to document spans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationConverter {
    origin: usize,
    index: LineIndex,
}

impl LocationConverter {
    /// Builds a converter for `source`.
    #[must_use]
    pub fn new(source: &TemplateSource<'_>) -> Self {
        Self {
            origin: source.origin,
            index: LineIndex::new(source.document),
        }
    }

    /// Returns the template's offset inside the document.
    #[must_use]
    pub const fn origin(&self) -> usize {
        self.origin
    }

    /// Converts a range in the template text to a span in the document.
    ///
    /// Returns `None` if the shifted range falls outside the document.
    #[must_use]
    pub fn convert(&self, range: Range<usize>) -> Option<Span> {
        let start = range.start.checked_add(self.origin)?;
        let end = range.end.checked_add(self.origin)?;
        self.index.span(start..end)
    }
}

#[cfg(test)]
mod tests {
    use splice_core::LineCol;

    use super::{LocationConverter, TemplateSource};

    #[test]
    fn standalone_template_maps_to_itself() {
        let text = "<div>\n  <input>\n</div>";
        let converter = LocationConverter::new(&TemplateSource::document(text));
        let span = converter.convert(8..15).expect("in range");
        assert_eq!(span.start, LineCol::new(1, 2));
        assert_eq!(span.text(text), Some("<input>"));
    }

    #[test]
    fn embedded_template_is_shifted_by_origin() {
        let document = "const a = 1;\nconst t = '<b></b>';\n";
        let origin = document.find("'<b>").expect("quote");
        let source = TemplateSource::embedded(
            document.get(origin..origin + 9).expect("slice"),
            document,
            origin,
        );
        let converter = LocationConverter::new(&source);

        let span = converter.convert(1..4).expect("in range");
        assert_eq!(span.start, LineCol::new(1, 11));
        assert_eq!(span.text(document), Some("<b>"));
    }

    #[test]
    fn ranges_past_the_document_are_rejected() {
        let converter = LocationConverter::new(&TemplateSource::document("abc"));
        assert_eq!(converter.convert(2..10), None);
    }
}
