//! Tests for the scope model.

use crate::{ScopeKind, ScopeManager, VariableKind};

fn nested_manager() -> ScopeManager {
    let mut manager = ScopeManager::new();
    let module = manager.push_scope(ScopeKind::Module, None, 0..100);
    let function = manager.push_scope(ScopeKind::Function, Some(module), 10..90);
    manager.declare(module, "outer", VariableKind::Variable, 0..5);
    manager.declare(function, "inner", VariableKind::Parameter, 12..17);
    manager.reference(function, "outer", 20..25);
    manager.reference(function, "inner", 30..35);
    manager.reference(module, "inner", 95..100);
    manager.reference(module, "missing", 96..103);
    manager.resolve();
    manager
}

#[test]
fn references_resolve_outwards() {
    let manager = nested_manager();
    let resolved: Vec<_> = manager
        .references()
        .iter()
        .map(|reference| {
            reference
                .resolved()
                .and_then(|id| manager.variable(id))
                .map(|variable| variable.name().to_owned())
        })
        .collect();

    assert_eq!(
        resolved,
        [
            Some(String::from("outer")),
            Some(String::from("inner")),
            None,
            None
        ]
    );
}

#[test]
fn unresolved_lists_names_without_declaration() {
    let manager = nested_manager();
    let names: Vec<_> = manager.unresolved().map(|r| r.name().to_owned()).collect();
    assert_eq!(names, ["inner", "missing"]);
}

#[test]
fn variables_track_their_references() {
    let manager = nested_manager();
    let outer = manager.find_variable("outer").expect("declared");
    assert_eq!(outer.references(), [0]);
}

#[test]
fn redeclaration_keeps_first_binding() {
    let mut manager = ScopeManager::new();
    let module = manager.push_scope(ScopeKind::Module, None, 0..10);
    let first = manager.declare(module, "x", VariableKind::Variable, 0..1);
    let second = manager.declare(module, "x", VariableKind::Function, 5..6);

    assert_eq!(first, second);
    let variable = manager.find_variable("x").expect("declared");
    assert_eq!(variable.kind(), VariableKind::Variable);
    assert_eq!(variable.declared_at(), 0..1);
}

#[test]
fn root_is_first_scope() {
    let manager = nested_manager();
    assert_eq!(manager.root().map(|s| s.kind()), Some(ScopeKind::Module));
    assert_eq!(manager.scopes().len(), 2);
}
