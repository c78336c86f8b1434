//! Visitor-key table for template nodes.

use splice_core::VisitorKeys;

/// Returns the child fields of every template node type.
///
/// Attribute node types are named after their binding kind, see
/// [`crate::BindingKind::node_kind`].
#[must_use]
pub fn template_visitor_keys() -> VisitorKeys {
    let mut keys = VisitorKeys::new();
    keys.insert("Template", ["nodes"]);
    keys.insert("Element", ["attributes", "children"]);
    keys.insert("Text", ["interpolations"]);
    for leaf in [
        "Interpolation",
        "Comment",
        "TextAttribute",
        "BoundAttribute",
        "BoundEvent",
        "TwoWayBinding",
        "Reference",
        "StructuralDirective",
        "TemplateVariable",
    ] {
        keys.record_kind(leaf);
    }
    keys
}

#[cfg(test)]
mod tests {
    use super::template_visitor_keys;
    use crate::BindingKind;

    #[test]
    fn every_binding_kind_has_an_entry() {
        let keys = template_visitor_keys();
        for name in ["a", "[a]", "(a)", "[(a)]", "#a", "*a", "let-a"] {
            let kind = BindingKind::classify(name).node_kind();
            assert!(keys.contains(kind), "missing {kind}");
        }
    }

    #[test]
    fn element_lists_its_child_fields() {
        let keys = template_visitor_keys();
        assert_eq!(
            keys.get("Element").map(<[String]>::to_vec),
            Some(vec!["attributes".to_owned(), "children".to_owned()])
        );
    }
}
