//! Scope analysis over the TypeScript tree.
//!
//! The walk is a single pre-order pass. Declaring nodes mark their binding
//! identifiers before descending, so when the walk reaches an `identifier`
//! it knows whether it is a declaration or a reference. References are bound
//! after the walk, which gives hoisting-like resolution within a scope.

use std::collections::HashSet;

use splice_core::{ScopeId, ScopeKind, ScopeManager, VariableKind};

use crate::parser::HostAst;
use crate::walk;

const FUNCTION_KINDS: &[&str] = &[
    "function_declaration",
    "generator_function_declaration",
    "function_expression",
    "function",
    "generator_function",
    "arrow_function",
    "method_definition",
];

/// Builds the resolved scope model for `ast`.
pub(crate) fn analyse_scopes(ast: &HostAst) -> ScopeManager {
    let root = ast.root_node();
    let mut analyser = ScopeAnalyser {
        source: ast.source(),
        manager: ScopeManager::new(),
        declared: HashSet::new(),
    };
    let module = analyser
        .manager
        .push_scope(ScopeKind::Module, None, root.byte_range());
    walk::preorder(root, module, |node, scope| Some(analyser.enter(node, scope)));
    analyser.manager.resolve();
    analyser.manager
}

struct ScopeAnalyser<'src> {
    source: &'src str,
    manager: ScopeManager,
    declared: HashSet<usize>,
}

impl ScopeAnalyser<'_> {
    /// Handles declarations made by `node` and returns the scope its
    /// children live in.
    fn enter(&mut self, node: tree_sitter::Node<'_>, scope: ScopeId) -> ScopeId {
        match node.kind() {
            "function_declaration" | "generator_function_declaration" => {
                if let Some(name) = node.child_by_field_name("name") {
                    self.declare(scope, name, VariableKind::Function);
                }
                self.function_scope(node, scope)
            }
            "function_expression" | "function" | "generator_function" => {
                let inner = self.function_scope(node, scope);
                if let Some(name) = node.child_by_field_name("name") {
                    self.declare(inner, name, VariableKind::Function);
                }
                inner
            }
            "arrow_function" | "method_definition" => self.function_scope(node, scope),
            "class_declaration" | "abstract_class_declaration" => {
                if let Some(name) = node.child_by_field_name("name") {
                    self.declare(scope, name, VariableKind::Class);
                }
                self.manager
                    .push_scope(ScopeKind::Class, Some(scope), node.byte_range())
            }
            "class" => {
                let inner = self
                    .manager
                    .push_scope(ScopeKind::Class, Some(scope), node.byte_range());
                if let Some(name) = node.child_by_field_name("name") {
                    self.declare(inner, name, VariableKind::Class);
                }
                inner
            }
            "statement_block" if !is_function_body(node) => {
                self.manager
                    .push_scope(ScopeKind::Block, Some(scope), node.byte_range())
            }
            "catch_clause" => {
                let inner = self
                    .manager
                    .push_scope(ScopeKind::Block, Some(scope), node.byte_range());
                if let Some(parameter) = node.child_by_field_name("parameter") {
                    self.declare_pattern(inner, parameter, VariableKind::Parameter);
                }
                inner
            }
            "variable_declarator" => {
                if let Some(name) = node.child_by_field_name("name") {
                    self.declare_pattern(scope, name, VariableKind::Variable);
                }
                scope
            }
            "import_specifier" => {
                let name = node.child_by_field_name("name");
                let alias = node.child_by_field_name("alias");
                if let Some(imported) = name {
                    self.declared.insert(imported.id());
                }
                if let Some(binding) = alias.or(name) {
                    self.declare(scope, binding, VariableKind::Import);
                }
                scope
            }
            "import_clause" | "namespace_import" => {
                let mut cursor = node.walk();
                for child in node.named_children(&mut cursor) {
                    if child.kind() == "identifier" {
                        self.declare(scope, child, VariableKind::Import);
                    }
                }
                scope
            }
            "identifier" | "shorthand_property_identifier" => {
                if !self.declared.contains(&node.id())
                    && let Some(name) = self.source.get(node.byte_range())
                {
                    self.manager.reference(scope, name, node.byte_range());
                }
                scope
            }
            _ => scope,
        }
    }

    fn function_scope(&mut self, node: tree_sitter::Node<'_>, scope: ScopeId) -> ScopeId {
        let inner = self
            .manager
            .push_scope(ScopeKind::Function, Some(scope), node.byte_range());

        if let Some(parameter) = node.child_by_field_name("parameter") {
            self.declare_pattern(inner, parameter, VariableKind::Parameter);
        }
        if let Some(parameters) = node.child_by_field_name("parameters") {
            let mut cursor = parameters.walk();
            for parameter in parameters.named_children(&mut cursor) {
                let pattern = parameter.child_by_field_name("pattern").unwrap_or(parameter);
                self.declare_pattern(inner, pattern, VariableKind::Parameter);
            }
        }
        inner
    }

    /// Declares every binding identifier inside a (possibly destructuring)
    /// pattern. Default-value expressions are left for the main walk.
    fn declare_pattern(
        &mut self,
        scope: ScopeId,
        pattern: tree_sitter::Node<'_>,
        kind: VariableKind,
    ) {
        match pattern.kind() {
            "identifier" | "shorthand_property_identifier_pattern" => {
                self.declare(scope, pattern, kind);
            }
            "assignment_pattern" | "object_assignment_pattern" => {
                if let Some(left) = pattern.child_by_field_name("left") {
                    self.declare_pattern(scope, left, kind);
                }
            }
            "pair_pattern" => {
                if let Some(value) = pattern.child_by_field_name("value") {
                    self.declare_pattern(scope, value, kind);
                }
            }
            "object_pattern" | "array_pattern" | "rest_pattern" => {
                let mut cursor = pattern.walk();
                for child in pattern.named_children(&mut cursor) {
                    self.declare_pattern(scope, child, kind);
                }
            }
            _ => {}
        }
    }

    fn declare(&mut self, scope: ScopeId, node: tree_sitter::Node<'_>, kind: VariableKind) {
        self.declared.insert(node.id());
        if let Some(name) = self.source.get(node.byte_range()) {
            self.manager.declare(scope, name, kind, node.byte_range());
        }
    }
}

fn is_function_body(node: tree_sitter::Node<'_>) -> bool {
    node.parent()
        .is_some_and(|parent| FUNCTION_KINDS.contains(&parent.kind()))
}
