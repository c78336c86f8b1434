//! Template tree traversal.

use crate::ast::{Attribute, Comment, Element, Interpolation, TemplateAst, TemplateNode, Text};

/// Callbacks invoked while walking a template.
///
/// Every method defaults to doing nothing, so implementors only override
/// the nodes they care about.
pub trait TemplateVisitor {
    /// Called before an element's attributes and children.
    fn visit_element(&mut self, _element: &Element) {}

    /// Called after an element's children.
    fn leave_element(&mut self, _element: &Element) {}

    /// Called for each attribute of `element`, in source order.
    fn visit_attribute(&mut self, _element: &Element, _attribute: &Attribute) {}

    /// Called for each text node.
    fn visit_text(&mut self, _text: &Text) {}

    /// Called for each interpolation, after its enclosing text node.
    fn visit_interpolation(&mut self, _interpolation: &Interpolation) {}

    /// Called for each comment.
    fn visit_comment(&mut self, _comment: &Comment) {}
}

/// Walks `ast` in document order, calling `visitor` for every node.
///
/// The walk keeps its own stack, so deeply nested templates do not
/// exhaust the call stack.
pub fn walk<V: TemplateVisitor + ?Sized>(ast: &TemplateAst, visitor: &mut V) {
    let mut stack: Vec<Step<'_>> = ast.nodes().iter().rev().map(Step::Enter).collect();
    while let Some(step) = stack.pop() {
        match step {
            Step::Enter(TemplateNode::Element(element)) => {
                visitor.visit_element(element);
                for attribute in element.attributes() {
                    visitor.visit_attribute(element, attribute);
                }
                stack.push(Step::Leave(element));
                stack.extend(element.children().iter().rev().map(Step::Enter));
            }
            Step::Enter(TemplateNode::Text(text)) => {
                visitor.visit_text(text);
                for interpolation in text.interpolations() {
                    visitor.visit_interpolation(interpolation);
                }
            }
            Step::Enter(TemplateNode::Comment(comment)) => visitor.visit_comment(comment),
            Step::Leave(element) => visitor.leave_element(element),
        }
    }
}

enum Step<'a> {
    Enter(&'a TemplateNode),
    Leave(&'a Element),
}
