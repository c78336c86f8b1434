//! `banana-in-a-box`: two-way bindings written `([x])` instead of `[(x)]`.

use std::ops::Range;

use splice_template::{Attribute, BindingKind, Element, TemplateVisitor};

use crate::finding::{Finding, Fix};
use crate::rule::{Rule, RuleContext};

/// Message id reported by [`BananaInABox`].
pub const BANANA_IN_A_BOX: &str = "bananaInABox";

const MESSAGE: &str = "Invalid binding syntax. Use [(expr)] instead";

/// Reports reversed two-way bindings and fixes them to `[(x)]`.
///
/// The finding covers the whole attribute; the fix rewrites only its name.
#[derive(Debug, Clone, Copy, Default)]
pub struct BananaInABox;

impl Rule for BananaInABox {
    fn name(&self) -> &'static str {
        "banana-in-a-box"
    }

    fn check(&self, context: &mut RuleContext<'_>) {
        let mut collector = ReversedBindings::default();
        context.services().define_template_body_visitor(&mut collector);

        for reversed in collector.found {
            let services = context.services();
            let (Some(span), Some(name_span)) = (
                services.convert_node_source_span_to_loc(reversed.attribute),
                services.convert_node_source_span_to_loc(reversed.name),
            ) else {
                tracing::debug!(
                    path = %context.path().display(),
                    "reversed binding outside the parsed file, skipped"
                );
                continue;
            };
            let fix = Fix::new(name_span.byte_range(), format!("[({})]", reversed.target));
            context.report(
                Finding::new(self.name(), BANANA_IN_A_BOX, MESSAGE, span).with_fix(fix),
            );
        }
    }
}

struct ReversedBinding {
    target: String,
    name: Range<usize>,
    attribute: Range<usize>,
}

#[derive(Default)]
struct ReversedBindings {
    found: Vec<ReversedBinding>,
}

impl TemplateVisitor for ReversedBindings {
    fn visit_attribute(&mut self, _element: &Element, attribute: &Attribute) {
        // `on-[x]` is an event binding too, but only the bracket form is
        // reversed.
        if !matches!(attribute.kind(), BindingKind::Event { .. }) {
            return;
        }
        let Some(inner) = attribute
            .name()
            .strip_prefix("([")
            .and_then(|rest| rest.strip_suffix("])"))
            .filter(|inner| !inner.is_empty())
        else {
            return;
        };
        self.found.push(ReversedBinding {
            target: inner.to_owned(),
            name: attribute.name_range(),
            attribute: attribute.range(),
        });
    }
}
