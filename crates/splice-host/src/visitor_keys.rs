//! Visitor-key harvesting.
//!
//! Tree-sitter grammars name the children of a node through fields. The
//! table is built from the fields actually present in the parsed tree, in the
//! order they first appear, so it only lists node types the tree contains.

use splice_core::VisitorKeys;

use crate::walk;

/// Walks the tree under `root` and records every named node kind with the
/// field names seen on its children.
pub(crate) fn harvest_visitor_keys(root: tree_sitter::Node<'_>) -> VisitorKeys {
    let mut keys = VisitorKeys::new();
    walk::preorder(root, (), |node, ()| {
        if node.is_named() {
            record_node(node, &mut keys);
        }
        Some(())
    });
    keys
}

fn record_node(node: tree_sitter::Node<'_>, keys: &mut VisitorKeys) {
    keys.record_kind(node.kind());
    let mut cursor = node.walk();
    if !cursor.goto_first_child() {
        return;
    }
    loop {
        if let Some(field) = cursor.field_name() {
            keys.record_field(node.kind(), field);
        }
        if !cursor.goto_next_sibling() {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{HostDialect, HostParser};

    #[test]
    fn harvest_lists_fields_in_first_seen_order() {
        let parsed = HostParser::new(HostDialect::TypeScript)
            .parse("function add(a: number, b: number) { return a + b; }")
            .expect("parse");
        let keys = parsed.visitor_keys();

        let function_fields = keys.get("function_declaration").expect("function kind");
        assert_eq!(
            function_fields.first().map(String::as_str),
            Some("name"),
            "fields: {function_fields:?}"
        );
        assert!(function_fields.iter().any(|field| field == "body"));
        assert!(keys.contains("program"));
        assert!(keys.contains("identifier"));
    }

    #[test]
    fn anonymous_tokens_are_not_listed() {
        let parsed = HostParser::default().parse("let x = 1;").expect("parse");
        assert!(!parsed.visitor_keys().contains("="));
        assert!(!parsed.visitor_keys().contains(";"));
    }
}
