//! Services a template parse hands to lint rules.

use std::ops::Range;
use std::sync::Arc;

use splice_core::Span;

use crate::ast::TemplateAst;
use crate::location::LocationConverter;
use crate::visitor::{TemplateVisitor, walk};

/// Location conversion and template-body visiting for one template.
///
/// An inert instance has no template behind it: conversions return `None`
/// and visitors are never called. Host-only parses carry inert services so
/// rules can use the same calls regardless of the file they run on.
#[derive(Debug, Clone, Default)]
pub struct TemplateServices {
    body: Option<Arc<TemplateAst>>,
    converter: Option<LocationConverter>,
}

impl TemplateServices {
    /// Services for a parsed template.
    #[must_use]
    pub const fn new(body: Arc<TemplateAst>, converter: LocationConverter) -> Self {
        Self {
            body: Some(body),
            converter: Some(converter),
        }
    }

    /// Services with no template behind them.
    #[must_use]
    pub const fn inert() -> Self {
        Self {
            body: None,
            converter: None,
        }
    }

    /// Returns `true` if there is no template behind these services.
    #[must_use]
    pub const fn is_inert(&self) -> bool {
        self.body.is_none()
    }

    /// Returns the template body, if any.
    #[must_use]
    pub const fn body(&self) -> Option<&Arc<TemplateAst>> {
        self.body.as_ref()
    }

    /// Converts a range in the template text to a span in the file the
    /// template came from.
    #[must_use]
    pub fn convert_node_source_span_to_loc(&self, range: Range<usize>) -> Option<Span> {
        self.converter.as_ref()?.convert(range)
    }

    /// Runs `visitor` over the template body.
    ///
    /// Does nothing on inert services.
    pub fn define_template_body_visitor<V: TemplateVisitor + ?Sized>(&self, visitor: &mut V) {
        if let Some(body) = &self.body {
            walk(body, visitor);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::TemplateServices;
    use crate::ast::Element;
    use crate::location::{LocationConverter, TemplateSource};
    use crate::parser::parse_markup;
    use crate::visitor::TemplateVisitor;

    struct CountElements(usize);

    impl TemplateVisitor for CountElements {
        fn visit_element(&mut self, _element: &Element) {
            self.0 += 1;
        }
    }

    #[test]
    fn inert_services_do_nothing() {
        let services = TemplateServices::inert();
        let mut count = CountElements(0);
        services.define_template_body_visitor(&mut count);

        assert!(services.is_inert());
        assert_eq!(count.0, 0);
        assert_eq!(services.convert_node_source_span_to_loc(0..1), None);
    }

    #[test]
    fn live_services_visit_and_convert() {
        let text = "<p><b></b></p>";
        let source = TemplateSource::document(text);
        let services = TemplateServices::new(
            Arc::new(parse_markup(text).expect("parse")),
            LocationConverter::new(&source),
        );
        let mut count = CountElements(0);
        services.define_template_body_visitor(&mut count);

        assert!(!services.is_inert());
        assert_eq!(count.0, 2);
        let span = services
            .convert_node_source_span_to_loc(3..6)
            .expect("in range");
        assert_eq!(span.text(text), Some("<b>"));
    }
}
