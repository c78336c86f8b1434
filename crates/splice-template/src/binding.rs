//! Attribute binding classification.

use strum::IntoStaticStr;

/// How an attribute binds to its element.
///
/// Classification only looks at the raw name. A reversed two-way binding
/// such as `([ngModel])` is an event binding whose target is `[ngModel]`,
/// which is exactly what the banana-in-a-box rule looks for.
#[derive(Debug, Clone, PartialEq, Eq, IntoStaticStr)]
pub enum BindingKind {
    /// A static attribute: `type="text"`.
    #[strum(serialize = "TextAttribute")]
    Plain,
    /// `[target]="expr"` or `bind-target="expr"`.
    #[strum(serialize = "BoundAttribute")]
    Property {
        /// Bound property name.
        target: String,
    },
    /// `(target)="handler"` or `on-target="handler"`.
    #[strum(serialize = "BoundEvent")]
    Event {
        /// Event name.
        target: String,
    },
    /// `[(target)]="model"` or `bindon-target="model"`.
    #[strum(serialize = "TwoWayBinding")]
    TwoWay {
        /// Model property name.
        target: String,
    },
    /// `#name` or `ref-name`.
    #[strum(serialize = "Reference")]
    Reference {
        /// Reference variable name.
        name: String,
    },
    /// `*directive="microsyntax"`.
    #[strum(serialize = "StructuralDirective")]
    Structural {
        /// Directive name.
        directive: String,
    },
    /// `let-name="context"` on `<ng-template>`.
    #[strum(serialize = "TemplateVariable")]
    TemplateInput {
        /// Variable name.
        name: String,
    },
}

impl BindingKind {
    /// Classifies a raw attribute name.
    #[must_use]
    pub fn classify(name: &str) -> Self {
        if let Some(target) = strip_wrapping(name, "[(", ")]") {
            return Self::TwoWay { target };
        }
        if let Some(target) = strip_wrapping(name, "[", "]") {
            return Self::Property { target };
        }
        if let Some(target) = strip_wrapping(name, "(", ")") {
            return Self::Event { target };
        }
        if let Some(target) = name.strip_prefix("bindon-") {
            return Self::TwoWay {
                target: target.to_owned(),
            };
        }
        if let Some(target) = name.strip_prefix("bind-") {
            return Self::Property {
                target: target.to_owned(),
            };
        }
        if let Some(target) = name.strip_prefix("on-") {
            return Self::Event {
                target: target.to_owned(),
            };
        }
        if let Some(reference) = name.strip_prefix('#').or_else(|| name.strip_prefix("ref-")) {
            return Self::Reference {
                name: reference.to_owned(),
            };
        }
        if let Some(directive) = name.strip_prefix('*') {
            return Self::Structural {
                directive: directive.to_owned(),
            };
        }
        if let Some(variable) = name.strip_prefix("let-") {
            return Self::TemplateInput {
                name: variable.to_owned(),
            };
        }
        Self::Plain
    }

    /// Returns the node-type name used in visitor-key tables.
    #[must_use]
    pub fn node_kind(&self) -> &'static str {
        self.into()
    }
}

fn strip_wrapping(name: &str, open: &str, close: &str) -> Option<String> {
    let inner = name.strip_prefix(open)?.strip_suffix(close)?;
    (!inner.is_empty()).then(|| inner.to_owned())
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::BindingKind;

    #[rstest]
    #[case("type", BindingKind::Plain)]
    #[case("[value]", BindingKind::Property { target: "value".into() })]
    #[case("bind-value", BindingKind::Property { target: "value".into() })]
    #[case("(click)", BindingKind::Event { target: "click".into() })]
    #[case("on-click", BindingKind::Event { target: "click".into() })]
    #[case("[(ngModel)]", BindingKind::TwoWay { target: "ngModel".into() })]
    #[case("bindon-ngModel", BindingKind::TwoWay { target: "ngModel".into() })]
    #[case("([ngModel])", BindingKind::Event { target: "[ngModel]".into() })]
    #[case("#input", BindingKind::Reference { name: "input".into() })]
    #[case("ref-input", BindingKind::Reference { name: "input".into() })]
    #[case("*ngIf", BindingKind::Structural { directive: "ngIf".into() })]
    #[case("let-item", BindingKind::TemplateInput { name: "item".into() })]
    #[case("[]", BindingKind::Plain)]
    fn classify_recognises_binding_syntax(#[case] name: &str, #[case] expected: BindingKind) {
        assert_eq!(BindingKind::classify(name), expected);
    }

    #[test]
    fn node_kind_names_the_binding() {
        assert_eq!(BindingKind::classify("(x)").node_kind(), "BoundEvent");
        assert_eq!(BindingKind::Plain.node_kind(), "TextAttribute");
    }
}
