//! Angular-style template parser for splice.
//!
//! Parses template markup into a [`TemplateAst`] of elements, text,
//! interpolations and comments, classifying every attribute by its binding
//! syntax (`[prop]`, `(event)`, `[(model)]`, `#ref`, `*directive`, ...).
//!
//! A parse also yields the services lint rules rely on:
//!
//! - [`TemplateServices::convert_node_source_span_to_loc`] maps a range in
//!   the template text to a [`splice_core::Span`] in the file the template
//!   came from, which differs from the template itself when the template is
//!   embedded in a host source
//! - [`TemplateServices::define_template_body_visitor`] runs a
//!   [`TemplateVisitor`] over the template body
//!
//! # Example
//!
//! ```
//! use splice_template::{BindingKind, TemplateParser, TemplateSource};
//!
//! let parsed = TemplateParser::new().parse(TemplateSource::document("<input [(ngModel)]=\"x\">"))?;
//! let input = parsed.ast().elements().next().expect("element");
//! assert!(matches!(
//!     input.attributes().first().map(|a| a.kind()),
//!     Some(BindingKind::TwoWay { .. })
//! ));
//! # Ok::<(), splice_template::TemplateError>(())
//! ```

mod ast;
mod binding;
mod error;
mod keys;
mod location;
mod parser;
mod scope;
mod services;
mod visitor;

use std::sync::Arc;

use splice_core::{ScopeManager, VisitorKeys};

pub use ast::{
    Attribute, AttributeValue, Comment, Element, Interpolation, TemplateAst, TemplateNode, Text,
};
pub use binding::BindingKind;
pub use error::TemplateError;
pub use keys::template_visitor_keys;
pub use location::{LocationConverter, TemplateSource};
pub use services::TemplateServices;
pub use visitor::{TemplateVisitor, walk};

/// Everything the template parser produces for one template.
#[derive(Debug, Clone)]
pub struct TemplateParse {
    ast: Arc<TemplateAst>,
    visitor_keys: VisitorKeys,
    scope_manager: Arc<ScopeManager>,
    services: TemplateServices,
}

/// The owned pieces of a [`TemplateParse`].
#[derive(Debug, Clone)]
pub struct TemplateParts {
    /// The template tree.
    pub ast: Arc<TemplateAst>,
    /// The template visitor-key table.
    pub visitor_keys: VisitorKeys,
    /// Template reference and input variables.
    pub scope_manager: Arc<ScopeManager>,
    /// Location conversion and body visitor registration.
    pub services: TemplateServices,
}

impl TemplateParse {
    /// Returns the template tree.
    #[must_use]
    pub const fn ast(&self) -> &Arc<TemplateAst> {
        &self.ast
    }

    /// Returns the visitor-key table.
    #[must_use]
    pub const fn visitor_keys(&self) -> &VisitorKeys {
        &self.visitor_keys
    }

    /// Returns the template scope model.
    #[must_use]
    pub const fn scope_manager(&self) -> &Arc<ScopeManager> {
        &self.scope_manager
    }

    /// Returns the template services.
    #[must_use]
    pub const fn services(&self) -> &TemplateServices {
        &self.services
    }

    /// Splits the parse into its owned parts.
    #[must_use]
    pub fn into_parts(self) -> TemplateParts {
        TemplateParts {
            ast: self.ast,
            visitor_keys: self.visitor_keys,
            scope_manager: self.scope_manager,
            services: self.services,
        }
    }
}

/// Template-language parser.
///
/// Holds no state between calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateParser;

impl TemplateParser {
    /// Creates a template parser.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Parses the template described by `source`.
    ///
    /// # Errors
    ///
    /// Returns a [`TemplateError`] for unterminated tags, comments or
    /// attribute values, and for closing tags with no matching open element.
    /// Elements left open at the end of the text are closed implicitly.
    pub fn parse(&self, source: TemplateSource<'_>) -> Result<TemplateParse, TemplateError> {
        let ast = Arc::new(parser::parse_markup(source.text())?);
        let scope_manager = Arc::new(scope::analyse_template_scope(&ast));
        let services = TemplateServices::new(Arc::clone(&ast), LocationConverter::new(&source));
        tracing::trace!(
            origin = source.origin(),
            nodes = ast.nodes().len(),
            "template parsed"
        );

        Ok(TemplateParse {
            ast,
            visitor_keys: template_visitor_keys(),
            scope_manager,
            services,
        })
    }
}

#[cfg(test)]
mod tests;
