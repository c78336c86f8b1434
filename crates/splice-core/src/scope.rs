//! Scope model: the resolved binding and reference structure of a parsed unit.
//!
//! Parsers build a [`ScopeManager`] incrementally while walking their tree:
//! push scopes, declare variables, record references, and finally call
//! [`ScopeManager::resolve`] to bind every reference to the nearest
//! enclosing declaration of the same name.

use std::ops::Range;

use strum::{Display, EnumString};

/// Index of a scope inside its [`ScopeManager`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ScopeId(usize);

impl ScopeId {
    /// Returns the raw index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Identifies a variable: its owning scope plus its position in that scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VariableId {
    /// Scope declaring the variable.
    pub scope: ScopeId,
    /// Index into [`Scope::variables`].
    pub index: usize,
}

/// Kinds of lexical scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum ScopeKind {
    /// The outermost scope of a host module.
    Module,
    /// A function, method or arrow function body.
    Function,
    /// A class body.
    Class,
    /// A braced block statement.
    Block,
    /// The scope of a template document.
    Template,
}

/// What introduced a variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum VariableKind {
    /// `let`, `const` or `var`.
    Variable,
    /// A function or method parameter.
    Parameter,
    /// A function declaration.
    Function,
    /// A class declaration.
    Class,
    /// An import binding.
    Import,
    /// A template reference variable such as `#input`.
    TemplateReference,
    /// A template input variable such as `let-item`.
    TemplateInput,
}

/// A declared binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable {
    name: String,
    kind: VariableKind,
    declared_at: Range<usize>,
    references: Vec<usize>,
}

impl Variable {
    /// Returns the binding name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns what introduced the binding.
    #[must_use]
    pub const fn kind(&self) -> VariableKind {
        self.kind
    }

    /// Returns the byte range of the declaring identifier.
    #[must_use]
    pub fn declared_at(&self) -> Range<usize> {
        self.declared_at.clone()
    }

    /// Returns the indices (into the owning manager's reference list) of
    /// the references resolved to this variable.
    #[must_use]
    pub fn references(&self) -> &[usize] {
        &self.references
    }
}

/// A use of a name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    name: String,
    range: Range<usize>,
    from: ScopeId,
    resolved: Option<VariableId>,
}

impl Reference {
    /// Returns the referenced name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the byte range of the referencing identifier.
    #[must_use]
    pub fn range(&self) -> Range<usize> {
        self.range.clone()
    }

    /// Returns the scope the reference occurs in.
    #[must_use]
    pub const fn from(&self) -> ScopeId {
        self.from
    }

    /// Returns the variable the reference resolved to, if any.
    #[must_use]
    pub const fn resolved(&self) -> Option<VariableId> {
        self.resolved
    }
}

/// A lexical scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scope {
    kind: ScopeKind,
    parent: Option<ScopeId>,
    range: Range<usize>,
    variables: Vec<Variable>,
}

impl Scope {
    /// Returns the scope kind.
    #[must_use]
    pub const fn kind(&self) -> ScopeKind {
        self.kind
    }

    /// Returns the enclosing scope.
    #[must_use]
    pub const fn parent(&self) -> Option<ScopeId> {
        self.parent
    }

    /// Returns the byte range covered by the scope.
    #[must_use]
    pub fn range(&self) -> Range<usize> {
        self.range.clone()
    }

    /// Returns the variables declared directly in this scope.
    #[must_use]
    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    /// Finds a variable declared directly in this scope.
    #[must_use]
    pub fn variable(&self, name: &str) -> Option<&Variable> {
        self.variables.iter().find(|variable| variable.name == name)
    }
}

/// All scopes of one parsed unit together with their references.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScopeManager {
    scopes: Vec<Scope>,
    references: Vec<Reference>,
}

impl ScopeManager {
    /// Creates an empty scope model.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            scopes: Vec::new(),
            references: Vec::new(),
        }
    }

    /// Adds a scope and returns its id.
    pub fn push_scope(
        &mut self,
        kind: ScopeKind,
        parent: Option<ScopeId>,
        range: Range<usize>,
    ) -> ScopeId {
        let id = ScopeId(self.scopes.len());
        self.scopes.push(Scope {
            kind,
            parent,
            range,
            variables: Vec::new(),
        });
        id
    }

    /// Declares `name` in `scope`.
    ///
    /// Redeclaring a name in the same scope keeps the first declaration and
    /// returns its id.
    pub fn declare(
        &mut self,
        scope: ScopeId,
        name: &str,
        kind: VariableKind,
        declared_at: Range<usize>,
    ) -> Option<VariableId> {
        let target = self.scopes.get_mut(scope.0)?;
        if let Some(index) = target.variables.iter().position(|v| v.name == name) {
            return Some(VariableId { scope, index });
        }
        target.variables.push(Variable {
            name: name.to_owned(),
            kind,
            declared_at,
            references: Vec::new(),
        });
        Some(VariableId {
            scope,
            index: target.variables.len().saturating_sub(1),
        })
    }

    /// Records an unresolved reference to `name` from `scope`.
    pub fn reference(&mut self, scope: ScopeId, name: &str, range: Range<usize>) {
        self.references.push(Reference {
            name: name.to_owned(),
            range,
            from: scope,
            resolved: None,
        });
    }

    /// Binds every reference to the nearest enclosing declaration.
    ///
    /// References with no matching declaration stay unresolved.
    pub fn resolve(&mut self) {
        for index in 0..self.references.len() {
            let Some(reference) = self.references.get(index) else {
                continue;
            };
            let resolved = self.lookup(reference.from, &reference.name);
            if let Some(reference_mut) = self.references.get_mut(index) {
                reference_mut.resolved = resolved;
            }
            if let Some(id) = resolved
                && let Some(variable) = self
                    .scopes
                    .get_mut(id.scope.0)
                    .and_then(|scope| scope.variables.get_mut(id.index))
            {
                variable.references.push(index);
            }
        }
    }

    /// Looks `name` up from `scope` outwards.
    #[must_use]
    pub fn lookup(&self, scope: ScopeId, name: &str) -> Option<VariableId> {
        let mut current = Some(scope);
        while let Some(id) = current {
            let candidate = self.scopes.get(id.0)?;
            if let Some(index) = candidate.variables.iter().position(|v| v.name == name) {
                return Some(VariableId { scope: id, index });
            }
            current = candidate.parent;
        }
        None
    }

    /// Returns the outermost scope, if any scope was pushed.
    #[must_use]
    pub fn root(&self) -> Option<&Scope> {
        self.scopes.first()
    }

    /// Returns a scope by id.
    #[must_use]
    pub fn scope(&self, id: ScopeId) -> Option<&Scope> {
        self.scopes.get(id.0)
    }

    /// Returns a variable by id.
    #[must_use]
    pub fn variable(&self, id: VariableId) -> Option<&Variable> {
        self.scope(id.scope)?.variables.get(id.index)
    }

    /// Returns every scope in creation order.
    #[must_use]
    pub fn scopes(&self) -> &[Scope] {
        &self.scopes
    }

    /// Returns every recorded reference.
    #[must_use]
    pub fn references(&self) -> &[Reference] {
        &self.references
    }

    /// Returns the references that did not resolve to any declaration.
    pub fn unresolved(&self) -> impl Iterator<Item = &Reference> {
        self.references
            .iter()
            .filter(|reference| reference.resolved.is_none())
    }

    /// Finds the first variable named `name` in any scope.
    #[must_use]
    pub fn find_variable(&self, name: &str) -> Option<&Variable> {
        self.scopes.iter().find_map(|scope| scope.variable(name))
    }
}
