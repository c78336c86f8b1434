//! Tree-sitter parsing wrapper that rejects syntactically invalid sources.
//!
//! A [`HostParser`] holds only configuration. Each call to
//! [`HostParser::parse`] builds a fresh Tree-sitter parser, so no parser
//! state survives the call and one `HostParser` can be shared across threads.

use std::ops::Range;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use splice_core::{ScopeManager, Span, VisitorKeys};

use crate::dialect::HostDialect;
use crate::error::HostError;
use crate::node_maps::NodeMaps;
use crate::position::{point_to_line_col, point_to_one_based};
use crate::program::{HostServices, Program};
use crate::scope::analyse_scopes;
use crate::visitor_keys::harvest_visitor_keys;
use crate::walk;

/// A parsed host syntax tree together with the source it was built from.
#[derive(Debug, Clone)]
pub struct HostAst {
    tree: tree_sitter::Tree,
    source: String,
    dialect: HostDialect,
}

impl HostAst {
    /// Returns the parsed syntax tree.
    #[must_use]
    pub const fn tree(&self) -> &tree_sitter::Tree {
        &self.tree
    }

    /// Returns the source code that was parsed.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns the dialect of the parsed code.
    #[must_use]
    pub const fn dialect(&self) -> HostDialect {
        self.dialect
    }

    /// Returns the root node of the syntax tree.
    #[must_use]
    pub fn root_node(&self) -> tree_sitter::Node<'_> {
        self.tree.root_node()
    }

    /// Returns the source text covered by `node`.
    #[must_use]
    pub fn text_of(&self, node: tree_sitter::Node<'_>) -> Option<&str> {
        self.source.get(node.byte_range())
    }

    /// Returns the span of `node`, relative to the whole source.
    #[must_use]
    pub fn span_of(&self, node: tree_sitter::Node<'_>) -> Span {
        Span::new(
            node.start_byte(),
            node.end_byte(),
            point_to_line_col(node.start_position()),
            point_to_line_col(node.end_position()),
        )
    }
}

/// Everything the host parser produces for one source.
#[derive(Debug, Clone)]
pub struct HostParse {
    ast: HostAst,
    visitor_keys: VisitorKeys,
    scope_manager: Arc<ScopeManager>,
    services: HostServices,
}

/// The owned pieces of a [`HostParse`], for callers that redistribute them.
#[derive(Debug, Clone)]
pub struct HostParts {
    /// The host syntax tree.
    pub ast: HostAst,
    /// Visitor keys harvested from the tree.
    pub visitor_keys: VisitorKeys,
    /// The resolved scope model.
    pub scope_manager: Arc<ScopeManager>,
    /// Program handle and node correspondence maps.
    pub services: HostServices,
}

impl HostParse {
    /// Returns the host syntax tree.
    #[must_use]
    pub const fn ast(&self) -> &HostAst {
        &self.ast
    }

    /// Returns the visitor-key table.
    #[must_use]
    pub const fn visitor_keys(&self) -> &VisitorKeys {
        &self.visitor_keys
    }

    /// Returns the scope model.
    #[must_use]
    pub const fn scope_manager(&self) -> &Arc<ScopeManager> {
        &self.scope_manager
    }

    /// Returns the host services.
    #[must_use]
    pub const fn services(&self) -> &HostServices {
        &self.services
    }

    /// Splits the parse into its owned parts.
    #[must_use]
    pub fn into_parts(self) -> HostParts {
        HostParts {
            ast: self.ast,
            visitor_keys: self.visitor_keys,
            scope_manager: self.scope_manager,
            services: self.services,
        }
    }
}

/// Information about a syntax error found during parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxErrorInfo {
    /// Byte range of the error in the source.
    pub byte_range: Range<usize>,
    /// Line number (one-based) where the error starts.
    pub line: u32,
    /// Column number (one-based) where the error starts.
    pub column: u32,
    /// A snippet of the problematic source text.
    pub context: String,
    /// Human-readable description of the error.
    pub message: String,
}

impl SyntaxErrorInfo {
    fn from_node(node: tree_sitter::Node<'_>, source: &str) -> Self {
        let byte_range = node.byte_range();

        // Extract context: the text of the error node, truncated if too long
        let context = source
            .get(byte_range.clone())
            .map(|s| {
                if s.len() > 50 {
                    let truncated: String = s.chars().take(47).collect();
                    format!("{truncated}...")
                } else {
                    s.to_owned()
                }
            })
            .unwrap_or_default();

        let message = if node.is_missing() {
            format!("missing {}", node.kind())
        } else {
            "syntax error".to_owned()
        };

        let (line, column) = point_to_one_based(node.start_position());

        Self {
            byte_range,
            line,
            column,
            context,
            message,
        }
    }
}

/// Host-language parser configuration.
#[derive(Debug, Clone, Default)]
pub struct HostParser {
    dialect: HostDialect,
    file_name: Option<PathBuf>,
}

impl HostParser {
    /// Creates a parser for the given dialect.
    #[must_use]
    pub const fn new(dialect: HostDialect) -> Self {
        Self {
            dialect,
            file_name: None,
        }
    }

    /// Creates a parser whose dialect is derived from `path`. The path is
    /// also recorded as the program's file name.
    #[must_use]
    pub fn for_path(path: &Path) -> Self {
        Self {
            dialect: HostDialect::from_path(path),
            file_name: Some(path.to_path_buf()),
        }
    }

    /// Returns the dialect this parser is configured for.
    #[must_use]
    pub const fn dialect(&self) -> HostDialect {
        self.dialect
    }

    /// Parses `source` into a tree, visitor keys, scope model and services.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::Syntax`] if the tree contains error or missing
    /// nodes, and [`HostError::ParserInit`] or [`HostError::Parse`] if
    /// Tree-sitter could not run at all.
    pub fn parse(&self, source: &str) -> Result<HostParse, HostError> {
        let mut inner = tree_sitter::Parser::new();
        inner
            .set_language(&self.dialect.tree_sitter_language())
            .map_err(|e| HostError::parser_init(self.dialect, e.to_string()))?;

        let tree = inner
            .parse(source, None)
            .ok_or_else(|| HostError::parse(self.dialect, "parsing failed"))?;

        let errors = collect_error_nodes(tree.root_node(), source);
        if !errors.is_empty() {
            tracing::debug!(
                dialect = %self.dialect,
                count = errors.len(),
                "host source rejected"
            );
            return Err(HostError::syntax(self.dialect, errors));
        }

        let ast = HostAst {
            tree,
            source: source.to_owned(),
            dialect: self.dialect,
        };
        let visitor_keys = harvest_visitor_keys(ast.root_node());
        let scope_manager = Arc::new(analyse_scopes(&ast));
        let services = HostServices::new(
            Program::new(self.file_name.clone(), self.dialect, source),
            NodeMaps::build(ast.root_node()),
        );

        Ok(HostParse {
            ast,
            visitor_keys,
            scope_manager,
            services,
        })
    }
}

/// Collects all ERROR and MISSING nodes, skipping error-free subtrees.
fn collect_error_nodes(root: tree_sitter::Node<'_>, source: &str) -> Vec<SyntaxErrorInfo> {
    let mut errors = Vec::new();
    walk::preorder(root, (), |node, ()| {
        if node.is_error() || node.is_missing() {
            errors.push(SyntaxErrorInfo::from_node(node, source));
        }
        node.has_error().then_some(())
    });
    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(HostDialect::TypeScript, "function hello(): string { return 'hi'; }")]
    #[case(HostDialect::TypeScript, "const x = <number>y;")]
    #[case(HostDialect::Tsx, "const view = <div>{name}</div>;")]
    fn parser_parses_valid_source(#[case] dialect: HostDialect, #[case] source: &str) {
        let parsed = HostParser::new(dialect).parse(source).expect("parse");
        assert_eq!(parsed.ast().dialect(), dialect);
        assert_eq!(parsed.ast().source(), source);
    }

    #[rstest]
    #[case("function broken( {")]
    #[case("const = ;")]
    fn parser_rejects_syntax_errors(#[case] source: &str) {
        let err = HostParser::default().parse(source).expect_err("invalid");
        assert!(!err.syntax_errors().is_empty());
    }

    #[test]
    fn syntax_error_info_has_line_and_column() {
        let err = HostParser::default()
            .parse("function test() {\n    let x = \n")
            .expect_err("invalid");

        let first_error = err.syntax_errors().first().expect("has error");
        assert!(first_error.line >= 1);
        assert!(first_error.column >= 1);
    }

    #[test]
    fn span_of_root_covers_source() {
        let source = "let a = 1;\nlet b = 2;\n";
        let parsed = HostParser::default().parse(source).expect("parse");
        let span = parsed.ast().span_of(parsed.ast().root_node());
        assert_eq!(span.start_byte(), 0);
        assert!(
            span.text(source)
                .is_some_and(|text| text.trim_end().ends_with("let b = 2;"))
        );
    }
}
