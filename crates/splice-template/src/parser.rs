//! Hand-written markup parser.
//!
//! The parser walks the text once with a [`Cursor`], emitting nodes into a
//! [`TreeBuilder`] that keeps a stack of open elements. Closing tags pop the
//! stack up to the matching element; whatever is still open at the end of
//! the text is closed implicitly.

use std::ops::Range;

use crate::ast::{
    Attribute, AttributeValue, Comment, Element, Interpolation, TemplateAst, TemplateNode, Text,
};
use crate::binding::BindingKind;
use crate::error::TemplateError;

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param",
    "source", "track", "wbr",
];

/// Parses template markup into a tree.
pub(crate) fn parse_markup(text: &str) -> Result<TemplateAst, TemplateError> {
    let mut cursor = Cursor::new(text);
    let mut builder = TreeBuilder::default();

    while !cursor.at_end() {
        if cursor.starts_with("<!--") {
            builder.push_node(TemplateNode::Comment(parse_comment(&mut cursor)?));
        } else if cursor.at_end_tag() {
            let (name, range) = parse_end_tag(&mut cursor)?;
            builder.close(&name, range)?;
        } else if cursor.at_start_tag() {
            builder.open(parse_start_tag(&mut cursor)?);
        } else {
            builder.push_node(TemplateNode::Text(parse_text(&mut cursor)));
        }
    }

    Ok(TemplateAst {
        nodes: builder.finish(text.len()),
        range: 0..text.len(),
    })
}

struct Cursor<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    const fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    const fn at_end(&self) -> bool {
        self.pos >= self.text.len()
    }

    fn rest(&self) -> &'a str {
        self.text.get(self.pos..).unwrap_or_default()
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn peek_nth(&self, n: usize) -> Option<char> {
        self.rest().chars().nth(n)
    }

    fn starts_with(&self, prefix: &str) -> bool {
        self.rest().starts_with(prefix)
    }

    fn at_start_tag(&self) -> bool {
        self.peek() == Some('<') && self.peek_nth(1).is_some_and(is_name_start)
    }

    fn at_end_tag(&self) -> bool {
        self.starts_with("</") && self.peek_nth(2).is_some_and(is_name_start)
    }

    fn at_markup(&self) -> bool {
        self.starts_with("<!--") || self.at_end_tag() || self.at_start_tag()
    }

    fn bump(&mut self) -> Option<char> {
        let next = self.peek()?;
        self.pos = self.pos.saturating_add(next.len_utf8());
        Some(next)
    }

    fn advance(&mut self, bytes: usize) {
        self.pos = self.pos.saturating_add(bytes).min(self.text.len());
    }

    fn eat_while(&mut self, mut predicate: impl FnMut(char) -> bool) -> Range<usize> {
        let start = self.pos;
        while self.peek().is_some_and(&mut predicate) {
            self.bump();
        }
        start..self.pos
    }

    fn skip_whitespace(&mut self) {
        self.eat_while(char::is_whitespace);
    }

    fn slice(&self, range: Range<usize>) -> &'a str {
        self.text.get(range).unwrap_or_default()
    }
}

const fn is_name_start(c: char) -> bool {
    c.is_ascii_alphabetic()
}

fn is_tag_name_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '-' | '_' | ':' | '.')
}

fn parse_comment(cursor: &mut Cursor<'_>) -> Result<Comment, TemplateError> {
    let start = cursor.pos;
    cursor.advance("<!--".len());
    let Some(close) = cursor.rest().find("-->") else {
        return Err(TemplateError::UnterminatedComment { offset: start });
    };
    let body = cursor.pos..cursor.pos.saturating_add(close);
    cursor.advance(close.saturating_add("-->".len()));
    Ok(Comment {
        value: cursor.slice(body).to_owned(),
        range: start..cursor.pos,
    })
}

fn parse_text(cursor: &mut Cursor<'_>) -> Text {
    let start = cursor.pos;
    cursor.bump();
    while !cursor.at_end() && !cursor.at_markup() {
        cursor.bump();
    }
    let value = cursor.slice(start..cursor.pos);
    Text {
        value: value.to_owned(),
        range: start..cursor.pos,
        interpolations: find_interpolations(value, start),
    }
}

fn find_interpolations(value: &str, base: usize) -> Vec<Interpolation> {
    let mut found = Vec::new();
    let mut search = 0;
    while let Some(open) = value.get(search..).and_then(|rest| rest.find("{{")) {
        let body_start = search.saturating_add(open).saturating_add(2);
        let Some(close) = value.get(body_start..).and_then(|rest| rest.find("}}")) else {
            break;
        };
        let body_end = body_start.saturating_add(close);
        let body = value.get(body_start..body_end).unwrap_or_default();
        let expression = body.trim();
        let lead = body.len().saturating_sub(body.trim_start().len());
        let expression_start = base.saturating_add(body_start).saturating_add(lead);
        found.push(Interpolation {
            expression: expression.to_owned(),
            expression_range: expression_start..expression_start.saturating_add(expression.len()),
            range: base.saturating_add(search).saturating_add(open)
                ..base.saturating_add(body_end).saturating_add(2),
        });
        search = body_end.saturating_add(2);
    }
    found
}

fn parse_end_tag(cursor: &mut Cursor<'_>) -> Result<(String, Range<usize>), TemplateError> {
    let start = cursor.pos;
    cursor.advance("</".len());
    let name_range = cursor.eat_while(is_tag_name_char);
    let name = cursor.slice(name_range).to_owned();
    cursor.skip_whitespace();
    match cursor.bump() {
        Some('>') => Ok((name, start..cursor.pos)),
        Some(character) => Err(TemplateError::UnexpectedCharacter {
            character,
            offset: cursor.pos.saturating_sub(character.len_utf8()),
        }),
        None => Err(TemplateError::UnterminatedTag {
            name,
            offset: start,
        }),
    }
}

fn parse_start_tag(cursor: &mut Cursor<'_>) -> Result<Element, TemplateError> {
    let start = cursor.pos;
    cursor.bump();
    let name_range = cursor.eat_while(is_tag_name_char);
    let name = cursor.slice(name_range).to_owned();
    let mut attributes = Vec::new();

    let self_closing = loop {
        cursor.skip_whitespace();
        match cursor.peek() {
            None => {
                return Err(TemplateError::UnterminatedTag {
                    name,
                    offset: start,
                });
            }
            Some('>') => {
                cursor.bump();
                break false;
            }
            Some('/') if cursor.peek_nth(1) == Some('>') => {
                cursor.advance("/>".len());
                break true;
            }
            Some(character @ ('"' | '\'' | '=' | '<')) => {
                return Err(TemplateError::UnexpectedCharacter {
                    character,
                    offset: cursor.pos,
                });
            }
            Some(_) => attributes.push(parse_attribute(cursor)?),
        }
    };

    Ok(Element {
        name,
        attributes,
        children: Vec::new(),
        range: start..cursor.pos,
        start_tag: start..cursor.pos,
        end_tag: None,
        self_closing,
    })
}

fn parse_attribute(cursor: &mut Cursor<'_>) -> Result<Attribute, TemplateError> {
    let name_start = cursor.pos;
    while let Some(next) = cursor.peek() {
        let ends_name = next.is_whitespace()
            || matches!(next, '=' | '>' | '"' | '\'' | '<')
            || (next == '/' && cursor.peek_nth(1) == Some('>'));
        if ends_name {
            break;
        }
        cursor.bump();
    }
    let name_range = name_start..cursor.pos;
    let name = cursor.slice(name_range.clone()).to_owned();

    let after_name = cursor.pos;
    cursor.skip_whitespace();
    if cursor.peek() != Some('=') {
        cursor.pos = after_name;
        return Ok(Attribute {
            kind: BindingKind::classify(&name),
            name,
            range: name_range.clone(),
            name_range,
            equals: None,
            value: None,
        });
    }

    let equals = cursor.pos..cursor.pos.saturating_add(1);
    cursor.bump();
    cursor.skip_whitespace();
    let value = parse_attribute_value(cursor, &name)?;

    Ok(Attribute {
        kind: BindingKind::classify(&name),
        name,
        range: name_start..cursor.pos,
        name_range,
        equals: Some(equals),
        value: Some(value),
    })
}

fn parse_attribute_value(
    cursor: &mut Cursor<'_>,
    attribute: &str,
) -> Result<AttributeValue, TemplateError> {
    match cursor.peek() {
        Some(quote @ ('"' | '\'')) => {
            let quote_offset = cursor.pos;
            cursor.bump();
            let range = cursor.eat_while(|c| c != quote);
            if cursor.bump().is_none() {
                return Err(TemplateError::UnterminatedAttributeValue {
                    attribute: attribute.to_owned(),
                    offset: quote_offset,
                });
            }
            Ok(AttributeValue {
                text: cursor.slice(range.clone()).to_owned(),
                range,
                quote: Some(quote),
            })
        }
        _ => {
            let range = cursor.eat_while(|c| !c.is_whitespace() && c != '>');
            Ok(AttributeValue {
                text: cursor.slice(range.clone()).to_owned(),
                range,
                quote: None,
            })
        }
    }
}

#[derive(Default)]
struct TreeBuilder {
    roots: Vec<TemplateNode>,
    open: Vec<Element>,
}

impl TreeBuilder {
    fn push_node(&mut self, node: TemplateNode) {
        if let Some(parent) = self.open.last_mut() {
            parent.children.push(node);
            return;
        }
        self.roots.push(node);
    }

    fn open(&mut self, element: Element) {
        let is_void = VOID_ELEMENTS
            .iter()
            .any(|void| void.eq_ignore_ascii_case(&element.name));
        if element.self_closing || is_void {
            self.push_node(TemplateNode::Element(element));
        } else {
            self.open.push(element);
        }
    }

    fn close(&mut self, name: &str, end_tag: Range<usize>) -> Result<(), TemplateError> {
        let Some(depth) = self.open.iter().rposition(|element| element.name == name) else {
            return Err(TemplateError::UnexpectedClosingTag {
                name: name.to_owned(),
                offset: end_tag.start,
            });
        };

        while self.open.len() > depth.saturating_add(1) {
            self.close_top(end_tag.start, None);
        }
        self.close_top(end_tag.end, Some(end_tag));
        Ok(())
    }

    fn close_top(&mut self, end: usize, end_tag: Option<Range<usize>>) {
        if let Some(mut element) = self.open.pop() {
            element.range.end = end;
            element.end_tag = end_tag;
            self.push_node(TemplateNode::Element(element));
        }
    }

    fn finish(mut self, len: usize) -> Vec<TemplateNode> {
        while !self.open.is_empty() {
            self.close_top(len, None);
        }
        self.roots
    }
}

#[cfg(test)]
mod tests {
    use super::parse_markup;
    use crate::ast::TemplateNode;
    use crate::error::TemplateError;

    #[test]
    fn nested_elements_keep_ranges() {
        let text = "<div><span>hi</span></div>";
        let ast = parse_markup(text).expect("parse");
        let div = ast.elements().next().expect("div");

        assert_eq!(div.name(), "div");
        assert_eq!(div.range(), 0..text.len());
        assert_eq!(div.end_tag(), Some(20..26));
        let span = ast.elements().nth(1).expect("span");
        assert_eq!(span.range(), 5..20);
        assert_eq!(span.start_tag(), 5..11);
    }

    #[test]
    fn void_and_self_closing_elements_do_not_swallow_siblings() {
        let ast = parse_markup("<input><br/><p>x</p>").expect("parse");
        let names: Vec<_> = ast.nodes().iter().map(TemplateNode::kind).collect();
        assert_eq!(names, ["Element", "Element", "Element"]);
        assert!(ast.elements().nth(1).is_some_and(|e| e.is_self_closing()));
    }

    #[test]
    fn attributes_record_name_equals_and_value_ranges() {
        let text = r#"<input ([ngModel])="foo" disabled>"#;
        let ast = parse_markup(text).expect("parse");
        let input = ast.elements().next().expect("input");
        let banana = input.attributes().first().expect("attribute");

        assert_eq!(banana.name(), "([ngModel])");
        assert_eq!(banana.name_range(), 7..18);
        assert_eq!(banana.equals(), Some(18..19));
        let value = banana.value().expect("value");
        assert_eq!(value.text(), "foo");
        assert_eq!(value.range(), 20..23);
        assert_eq!(banana.range(), 7..24);

        let disabled = input.attribute("disabled").expect("boolean attribute");
        assert_eq!(disabled.value(), None);
    }

    #[test]
    fn single_quoted_and_unquoted_values() {
        let ast = parse_markup("<a href='x' id=main>").expect("parse");
        let anchor = ast.elements().next().expect("a");
        let quotes: Vec<_> = anchor
            .attributes()
            .iter()
            .map(|a| a.value().and_then(|v| v.quote()))
            .collect();
        assert_eq!(quotes, [Some('\''), None]);
        assert_eq!(
            anchor.attribute("id").and_then(|a| a.value()).map(|v| v.text()),
            Some("main")
        );
    }

    #[test]
    fn text_collects_interpolations() {
        let text = "<p>Hello {{ user.name }} and {{x}}</p>";
        let ast = parse_markup(text).expect("parse");
        let paragraph = ast.elements().next().expect("p");
        let Some(TemplateNode::Text(body)) = paragraph.children().first() else {
            panic!("expected text child");
        };
        let expressions: Vec<_> = body
            .interpolations()
            .iter()
            .map(|i| i.expression())
            .collect();
        assert_eq!(expressions, ["user.name", "x"]);
        let first = body.interpolations().first().expect("interpolation");
        assert_eq!(text.get(first.range()), Some("{{ user.name }}"));
    }

    #[test]
    fn less_than_without_name_is_text() {
        let ast = parse_markup("a < b").expect("parse");
        assert_eq!(ast.nodes().len(), 1);
        assert_eq!(ast.nodes().first().map(TemplateNode::kind), Some("Text"));
    }

    #[test]
    fn unclosed_elements_close_at_end() {
        let ast = parse_markup("<div><p>text").expect("parse");
        let div = ast.elements().next().expect("div");
        assert_eq!(div.range(), 0..12);
        assert_eq!(div.end_tag(), None);
    }

    #[test]
    fn closing_an_outer_element_closes_inner_ones() {
        let ast = parse_markup("<div><p>text</div>").expect("parse");
        let paragraph = ast.elements().nth(1).expect("p");
        assert_eq!(paragraph.range(), 5..12);
    }

    #[test]
    fn comments_are_kept() {
        let ast = parse_markup("<!-- note --><b></b>").expect("parse");
        let Some(TemplateNode::Comment(comment)) = ast.nodes().first() else {
            panic!("expected comment");
        };
        assert_eq!(comment.value(), " note ");
        assert_eq!(comment.range(), 0..13);
    }

    #[test]
    fn rejects_malformed_markup() {
        assert_eq!(
            parse_markup("<div></span>"),
            Err(TemplateError::UnexpectedClosingTag {
                name: "span".into(),
                offset: 5
            })
        );
        assert_eq!(
            parse_markup("<!-- open"),
            Err(TemplateError::UnterminatedComment { offset: 0 })
        );
        assert_eq!(
            parse_markup("<input value=\"x"),
            Err(TemplateError::UnterminatedAttributeValue {
                attribute: "value".into(),
                offset: 13
            })
        );
        assert_eq!(
            parse_markup("<div class"),
            Err(TemplateError::UnterminatedTag {
                name: "div".into(),
                offset: 0
            })
        );
    }
}
