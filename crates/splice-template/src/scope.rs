//! Template scope model.
//!
//! A template has a single scope holding its `#ref` and `let-` variables.
//! Root identifiers of interpolations are recorded as references; the ones
//! left unresolved refer to members of the owning component.

use splice_core::{ScopeId, ScopeKind, ScopeManager, VariableKind};

use crate::ast::{Attribute, Element, Interpolation, TemplateAst};
use crate::binding::BindingKind;
use crate::visitor::{TemplateVisitor, walk};

/// Builds the resolved scope model for `ast`.
pub(crate) fn analyse_template_scope(ast: &TemplateAst) -> ScopeManager {
    let mut manager = ScopeManager::new();
    let scope = manager.push_scope(ScopeKind::Template, None, ast.range());
    let mut collector = Collector { manager, scope };
    walk(ast, &mut collector);
    collector.manager.resolve();
    collector.manager
}

struct Collector {
    manager: ScopeManager,
    scope: ScopeId,
}

impl TemplateVisitor for Collector {
    fn visit_attribute(&mut self, _element: &Element, attribute: &Attribute) {
        let (name, kind) = match attribute.kind() {
            BindingKind::Reference { name } => (name, VariableKind::TemplateReference),
            BindingKind::TemplateInput { name } => (name, VariableKind::TemplateInput),
            _ => return,
        };
        self.manager
            .declare(self.scope, name, kind, attribute.name_range());
    }

    fn visit_interpolation(&mut self, interpolation: &Interpolation) {
        let base = interpolation.expression_range().start;
        for (offset, name) in root_identifiers(interpolation.expression()) {
            let start = base.saturating_add(offset);
            self.manager
                .reference(self.scope, name, start..start.saturating_add(name.len()));
        }
    }
}

/// Yields identifiers that start a member chain, skipping string literals
/// and property names after `.` or `?.`.
fn root_identifiers(expression: &str) -> Vec<(usize, &str)> {
    let mut found = Vec::new();
    let mut chars = expression.char_indices().peekable();
    let mut after_dot = false;
    while let Some((start, c)) = chars.next() {
        if matches!(c, '\'' | '"' | '`') {
            for (_, next) in chars.by_ref() {
                if next == c {
                    break;
                }
            }
            after_dot = false;
        } else if c.is_alphabetic() || c == '_' || c == '$' {
            let mut end = start.saturating_add(c.len_utf8());
            while let Some(&(offset, next)) = chars.peek() {
                if !(next.is_alphanumeric() || next == '_' || next == '$') {
                    break;
                }
                end = offset.saturating_add(next.len_utf8());
                chars.next();
            }
            if !after_dot && let Some(name) = expression.get(start..end) {
                found.push((start, name));
            }
            after_dot = false;
        } else if c.is_ascii_digit() {
            while chars.peek().is_some_and(|&(_, next)| next.is_ascii_alphanumeric()) {
                chars.next();
            }
            after_dot = false;
        } else if !c.is_whitespace() {
            after_dot = c == '.';
        }
    }
    found
}

#[cfg(test)]
mod tests {
    use splice_core::{ScopeKind, VariableKind};

    use super::{analyse_template_scope, root_identifiers};
    use crate::parser::parse_markup;

    #[test]
    fn declares_references_and_inputs() {
        let text = r#"<input #box><ng-template let-item><b>{{ item.name }}</b></ng-template>"#;
        let manager = analyse_template_scope(&parse_markup(text).expect("parse"));

        let root = manager.root().expect("template scope");
        assert_eq!(root.kind(), ScopeKind::Template);
        let names: Vec<_> = root
            .variables()
            .iter()
            .map(|v| (v.name(), v.kind()))
            .collect();
        assert_eq!(
            names,
            [
                ("box", VariableKind::TemplateReference),
                ("item", VariableKind::TemplateInput)
            ]
        );
    }

    #[test]
    fn interpolation_roots_resolve_against_template_variables() {
        let text = "<input #box>{{ box.value }} {{ title }}";
        let manager = analyse_template_scope(&parse_markup(text).expect("parse"));

        let references: Vec<_> = manager
            .references()
            .iter()
            .map(|r| (r.name(), text.get(r.range()), r.resolved().is_some()))
            .collect();
        assert_eq!(
            references,
            [
                ("box", Some("box"), true),
                ("title", Some("title"), false)
            ]
        );
    }

    #[test]
    fn root_identifiers_skip_members_and_strings() {
        let roots: Vec<_> = root_identifiers("user?.name + 'lit' + count | async")
            .into_iter()
            .map(|(_, name)| name)
            .collect();
        assert_eq!(roots, ["user", "count", "async"]);
    }
}
