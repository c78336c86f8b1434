//! Template syntax tree.
//!
//! Every range in the tree is a byte range into the template text that was
//! parsed. Use [`crate::TemplateServices::convert_node_source_span_to_loc`]
//! to turn a range into a position in the enclosing file.

use std::ops::Range;

use crate::binding::BindingKind;

/// A parsed template document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateAst {
    pub(crate) nodes: Vec<TemplateNode>,
    pub(crate) range: Range<usize>,
}

impl TemplateAst {
    /// Returns the top-level nodes.
    #[must_use]
    pub fn nodes(&self) -> &[TemplateNode] {
        &self.nodes
    }

    /// Returns the range covering the whole template text.
    #[must_use]
    pub fn range(&self) -> Range<usize> {
        self.range.clone()
    }

    /// Iterates over every element in document order.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        let mut pending: Vec<&TemplateNode> = self.nodes.iter().rev().collect();
        std::iter::from_fn(move || {
            while let Some(node) = pending.pop() {
                if let TemplateNode::Element(element) = node {
                    pending.extend(element.children.iter().rev());
                    return Some(element);
                }
            }
            None
        })
    }
}

/// A node of the template tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateNode {
    /// An element such as `<div>`.
    Element(Element),
    /// Character data, possibly containing `{{ }}` interpolations.
    Text(Text),
    /// An HTML comment.
    Comment(Comment),
}

impl TemplateNode {
    /// Returns the node-type name used in visitor-key tables.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Element(_) => "Element",
            Self::Text(_) => "Text",
            Self::Comment(_) => "Comment",
        }
    }

    /// Returns the byte range of the node.
    #[must_use]
    pub fn range(&self) -> Range<usize> {
        match self {
            Self::Element(element) => element.range.clone(),
            Self::Text(text) => text.range.clone(),
            Self::Comment(comment) => comment.range.clone(),
        }
    }
}

/// An element and its content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub(crate) name: String,
    pub(crate) attributes: Vec<Attribute>,
    pub(crate) children: Vec<TemplateNode>,
    pub(crate) range: Range<usize>,
    pub(crate) start_tag: Range<usize>,
    pub(crate) end_tag: Option<Range<usize>>,
    pub(crate) self_closing: bool,
}

// Children are released iteratively so dropping a deeply nested tree does
// not recurse once per level.
impl Drop for Element {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(node) = pending.pop() {
            if let TemplateNode::Element(mut element) = node {
                pending.append(&mut element.children);
            }
        }
    }
}

impl Element {
    /// Returns the tag name as written.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the attributes in source order.
    #[must_use]
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// Returns the child nodes.
    #[must_use]
    pub fn children(&self) -> &[TemplateNode] {
        &self.children
    }

    /// Returns the range from the start tag to the end of the element.
    #[must_use]
    pub fn range(&self) -> Range<usize> {
        self.range.clone()
    }

    /// Returns the range of the start tag, including `<` and `>`.
    #[must_use]
    pub fn start_tag(&self) -> Range<usize> {
        self.start_tag.clone()
    }

    /// Returns the range of the explicit end tag, if one was written.
    #[must_use]
    pub fn end_tag(&self) -> Option<Range<usize>> {
        self.end_tag.clone()
    }

    /// Returns `true` for `<tag />`.
    #[must_use]
    pub const fn is_self_closing(&self) -> bool {
        self.self_closing
    }

    /// Finds an attribute by its raw name.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|attribute| attribute.name == name)
    }
}

/// An attribute of a start tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub(crate) name: String,
    pub(crate) name_range: Range<usize>,
    pub(crate) equals: Option<Range<usize>>,
    pub(crate) value: Option<AttributeValue>,
    pub(crate) range: Range<usize>,
    pub(crate) kind: BindingKind,
}

impl Attribute {
    /// Returns the raw attribute name, binding punctuation included.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the range of the raw name.
    #[must_use]
    pub fn name_range(&self) -> Range<usize> {
        self.name_range.clone()
    }

    /// Returns the range of the `=` sign, if the attribute has a value.
    #[must_use]
    pub fn equals(&self) -> Option<Range<usize>> {
        self.equals.clone()
    }

    /// Returns the value, if any.
    #[must_use]
    pub const fn value(&self) -> Option<&AttributeValue> {
        self.value.as_ref()
    }

    /// Returns the range from the name to the end of the value.
    #[must_use]
    pub fn range(&self) -> Range<usize> {
        self.range.clone()
    }

    /// Returns how the attribute binds.
    #[must_use]
    pub const fn kind(&self) -> &BindingKind {
        &self.kind
    }
}

/// The value of an attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeValue {
    pub(crate) text: String,
    pub(crate) range: Range<usize>,
    pub(crate) quote: Option<char>,
}

impl AttributeValue {
    /// Returns the value text without quotes.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the range of the value text, quotes excluded.
    #[must_use]
    pub fn range(&self) -> Range<usize> {
        self.range.clone()
    }

    /// Returns the quote character, or `None` for unquoted values.
    #[must_use]
    pub const fn quote(&self) -> Option<char> {
        self.quote
    }
}

/// Character data between tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
    pub(crate) value: String,
    pub(crate) range: Range<usize>,
    pub(crate) interpolations: Vec<Interpolation>,
}

impl Text {
    /// Returns the raw text.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the range of the text.
    #[must_use]
    pub fn range(&self) -> Range<usize> {
        self.range.clone()
    }

    /// Returns the `{{ }}` interpolations inside the text.
    #[must_use]
    pub fn interpolations(&self) -> &[Interpolation] {
        &self.interpolations
    }
}

/// A `{{ expression }}` interpolation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interpolation {
    pub(crate) expression: String,
    pub(crate) expression_range: Range<usize>,
    pub(crate) range: Range<usize>,
}

impl Interpolation {
    /// Returns the trimmed expression text.
    #[must_use]
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// Returns the range of the trimmed expression.
    #[must_use]
    pub fn expression_range(&self) -> Range<usize> {
        self.expression_range.clone()
    }

    /// Returns the range including the braces.
    #[must_use]
    pub fn range(&self) -> Range<usize> {
        self.range.clone()
    }
}

/// An HTML comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub(crate) value: String,
    pub(crate) range: Range<usize>,
}

impl Comment {
    /// Returns the comment body without `<!--` and `-->`.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the range including the delimiters.
    #[must_use]
    pub fn range(&self) -> Range<usize> {
        self.range.clone()
    }
}
