//! Parse results handed to lint rules.

use std::ops::Range;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use splice_core::{ScopeManager, Span, VisitorKeys};
use splice_host::{HostAst, HostParse, HostServices, NodeMaps, Program};
use splice_template::{TemplateAst, TemplateParse, TemplateServices, TemplateVisitor};

use crate::mode::{ParseMode, TerminalState};

/// A host parse with inert template services.
///
/// Produced for plain host sources and when an embedded template had to be
/// abandoned.
#[derive(Debug, Clone)]
pub struct HostOnlyParse {
    host: HostParse,
    template_services: TemplateServices,
}

impl HostOnlyParse {
    pub(crate) const fn new(host: HostParse) -> Self {
        Self {
            host,
            template_services: TemplateServices::inert(),
        }
    }

    /// Returns the host parse.
    #[must_use]
    pub const fn host(&self) -> &HostParse {
        &self.host
    }

    /// Returns the inert template services.
    #[must_use]
    pub const fn template_services(&self) -> &TemplateServices {
        &self.template_services
    }
}

/// A host parse merged with the parse of its inline template.
#[derive(Debug, Clone)]
pub struct CompositeParse {
    pub(crate) ast: HostAst,
    pub(crate) template_ast: Arc<TemplateAst>,
    pub(crate) visitor_keys: VisitorKeys,
    pub(crate) scope_manager: Arc<ScopeManager>,
    pub(crate) host_services: HostServices,
    pub(crate) template_services: TemplateServices,
}

impl CompositeParse {
    /// Returns the host tree, which is the primary tree of the result.
    #[must_use]
    pub const fn ast(&self) -> &HostAst {
        &self.ast
    }

    /// Returns the inline template's tree.
    #[must_use]
    pub const fn template_ast(&self) -> &Arc<TemplateAst> {
        &self.template_ast
    }

    /// Returns the merged visitor-key table.
    #[must_use]
    pub const fn visitor_keys(&self) -> &VisitorKeys {
        &self.visitor_keys
    }

    /// Returns the host scope model.
    #[must_use]
    pub const fn scope_manager(&self) -> &Arc<ScopeManager> {
        &self.scope_manager
    }

    /// Returns the host services.
    #[must_use]
    pub const fn host_services(&self) -> &HostServices {
        &self.host_services
    }

    /// Returns the template services.
    #[must_use]
    pub const fn template_services(&self) -> &TemplateServices {
        &self.template_services
    }
}

/// The result of one parse, tagged by how it was produced.
#[derive(Debug, Clone)]
pub enum ParseOutcome {
    /// A template document, or a component text parsed as a template.
    TemplateOnly(TemplateParse),
    /// A host source parsed on its own.
    HostOnly(HostOnlyParse),
    /// A component source merged with its inline template.
    Composite(CompositeParse),
}

/// Borrowed view of a tree.
#[derive(Debug, Clone, Copy)]
pub enum SyntaxTree<'a> {
    /// A host tree.
    Host(&'a HostAst),
    /// A template tree.
    Template(&'a TemplateAst),
}

/// Owned tree returned by [`crate::parse`].
#[derive(Debug, Clone)]
pub enum Ast {
    /// A host tree.
    Host(HostAst),
    /// A template tree.
    Template(Arc<TemplateAst>),
}

/// The services every outcome exposes.
///
/// Template services are always present, inert for host-only outcomes;
/// host services are present whenever a host parse backs the outcome.
#[derive(Debug, Clone, Copy)]
pub struct ParseServices<'a> {
    template: &'a TemplateServices,
    host: Option<&'a HostServices>,
}

impl<'a> ParseServices<'a> {
    /// Converts a range in the template text to a span in the parsed file.
    ///
    /// Returns `None` for host-only outcomes.
    #[must_use]
    pub fn convert_node_source_span_to_loc(&self, range: Range<usize>) -> Option<Span> {
        self.template.convert_node_source_span_to_loc(range)
    }

    /// Runs `visitor` over the template body, if there is one.
    pub fn define_template_body_visitor<V: TemplateVisitor + ?Sized>(&self, visitor: &mut V) {
        self.template.define_template_body_visitor(visitor);
    }

    /// Returns the template services.
    #[must_use]
    pub const fn template(&self) -> &'a TemplateServices {
        self.template
    }

    /// Returns the host services, if a host parse backs the outcome.
    #[must_use]
    pub const fn host(&self) -> Option<&'a HostServices> {
        self.host
    }

    /// Returns the host program handle.
    #[must_use]
    pub fn program(&self) -> Option<&'a Program> {
        self.host.map(|host| &host.program)
    }

    /// Returns the host node correspondence maps.
    #[must_use]
    pub fn node_maps(&self) -> Option<&'a NodeMaps> {
        self.host.map(|host| &host.node_maps)
    }
}

impl ParseOutcome {
    /// Returns the primary tree.
    #[must_use]
    pub fn ast(&self) -> SyntaxTree<'_> {
        match self {
            Self::TemplateOnly(template) => SyntaxTree::Template(template.ast().as_ref()),
            Self::HostOnly(host) => SyntaxTree::Host(host.host().ast()),
            Self::Composite(composite) => SyntaxTree::Host(composite.ast()),
        }
    }

    /// Consumes the outcome and returns its primary tree.
    #[must_use]
    pub fn into_ast(self) -> Ast {
        match self {
            Self::TemplateOnly(template) => Ast::Template(template.into_parts().ast),
            Self::HostOnly(host) => Ast::Host(host.host.into_parts().ast),
            Self::Composite(composite) => Ast::Host(composite.ast),
        }
    }

    /// Returns the visitor-key table.
    #[must_use]
    pub const fn visitor_keys(&self) -> &VisitorKeys {
        match self {
            Self::TemplateOnly(template) => template.visitor_keys(),
            Self::HostOnly(host) => host.host.visitor_keys(),
            Self::Composite(composite) => &composite.visitor_keys,
        }
    }

    /// Returns the scope model.
    #[must_use]
    pub const fn scope_manager(&self) -> &Arc<ScopeManager> {
        match self {
            Self::TemplateOnly(template) => template.scope_manager(),
            Self::HostOnly(host) => host.host.scope_manager(),
            Self::Composite(composite) => &composite.scope_manager,
        }
    }

    /// Returns the services.
    #[must_use]
    pub const fn services(&self) -> ParseServices<'_> {
        match self {
            Self::TemplateOnly(template) => ParseServices {
                template: template.services(),
                host: None,
            },
            Self::HostOnly(host) => ParseServices {
                template: &host.template_services,
                host: Some(host.host.services()),
            },
            Self::Composite(composite) => ParseServices {
                template: &composite.template_services,
                host: Some(&composite.host_services),
            },
        }
    }
}

/// A parse result together with how it was reached.
#[derive(Debug, Clone)]
pub struct ParseOutput {
    pub(crate) path: PathBuf,
    pub(crate) mode: ParseMode,
    pub(crate) terminal: TerminalState,
    pub(crate) outcome: ParseOutcome,
}

impl ParseOutput {
    /// Returns the path of the parsed file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the mode selected for the file.
    #[must_use]
    pub const fn mode(&self) -> ParseMode {
        self.mode
    }

    /// Returns the state the call ended in.
    #[must_use]
    pub const fn terminal(&self) -> TerminalState {
        self.terminal
    }

    /// Returns the tagged result.
    #[must_use]
    pub const fn outcome(&self) -> &ParseOutcome {
        &self.outcome
    }

    /// Consumes the output and returns the tagged result.
    #[must_use]
    pub fn into_outcome(self) -> ParseOutcome {
        self.outcome
    }

    /// Returns the primary tree.
    #[must_use]
    pub fn ast(&self) -> SyntaxTree<'_> {
        self.outcome.ast()
    }

    /// Returns the visitor-key table.
    #[must_use]
    pub const fn visitor_keys(&self) -> &VisitorKeys {
        self.outcome.visitor_keys()
    }

    /// Returns the scope model.
    #[must_use]
    pub const fn scope_manager(&self) -> &Arc<ScopeManager> {
        self.outcome.scope_manager()
    }

    /// Returns the services.
    #[must_use]
    pub const fn services(&self) -> ParseServices<'_> {
        self.outcome.services()
    }
}
