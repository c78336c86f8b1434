//! Pre-order traversal of Tree-sitter trees on an explicit stack.

/// Visits `root` and its descendants in pre-order.
///
/// `enter` receives each node with the context its parent returned and
/// returns the context for the node's children, or `None` to skip them.
/// Nesting depth is bounded by heap memory, not the call stack.
pub(crate) fn preorder<'tree, C: Copy>(
    root: tree_sitter::Node<'tree>,
    context: C,
    mut enter: impl FnMut(tree_sitter::Node<'tree>, C) -> Option<C>,
) {
    let mut stack = vec![(root, context)];
    let mut children = Vec::new();
    while let Some((node, outer)) = stack.pop() {
        let Some(inner) = enter(node, outer) else {
            continue;
        };
        let mut cursor = node.walk();
        children.extend(node.children(&mut cursor));
        stack.extend(children.drain(..).rev().map(|child| (child, inner)));
    }
}

#[cfg(test)]
mod tests {
    use super::preorder;
    use crate::{HostDialect, HostParser};

    fn kinds(source: &str, skip: &str) -> Vec<&'static str> {
        let parsed = HostParser::new(HostDialect::TypeScript)
            .parse(source)
            .expect("parse");
        let mut seen = Vec::new();
        preorder(parsed.ast().root_node(), 0_usize, |node, depth| {
            if node.is_named() {
                seen.push(node.kind());
            }
            (node.kind() != skip).then_some(depth + 1)
        });
        seen
    }

    #[test]
    fn visits_named_nodes_in_source_order() {
        assert_eq!(
            kinds("let a = b;", ""),
            [
                "program",
                "lexical_declaration",
                "variable_declarator",
                "identifier",
                "identifier"
            ]
        );
    }

    #[test]
    fn skipped_nodes_hide_their_children() {
        assert_eq!(
            kinds("let a = b;", "variable_declarator"),
            ["program", "lexical_declaration", "variable_declarator"]
        );
    }

    #[test]
    fn deeply_nested_source_does_not_exhaust_the_stack() {
        let depth = 20_000;
        let source = format!("let x = {}0{};", "(".repeat(depth), ")".repeat(depth));
        let parsed = HostParser::new(HostDialect::TypeScript)
            .parse(&source)
            .expect("parse");
        let mut count = 0_usize;
        preorder(parsed.ast().root_node(), (), |node, ()| {
            if node.kind() == "parenthesized_expression" {
                count += 1;
            }
            Some(())
        });
        assert_eq!(count, depth);
    }
}
