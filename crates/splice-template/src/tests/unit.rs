//! Tests over the public parser entry point.

use insta::assert_snapshot;
use rstest::rstest;
use splice_core::VariableKind;

use crate::{BindingKind, TemplateError, TemplateParser, TemplateSource, TemplateVisitor};

const TEMPLATE: &str = "<div class=\"list\">\n  <app-item *ngFor=\"let item of items\" [(item)]=\"item\" ([bar])=\"bar\"></app-item>\n  <input #filter (keyup)=\"search(filter.value)\">\n</div>\n";

fn parse(source: TemplateSource<'_>) -> crate::TemplateParse {
    TemplateParser::new()
        .parse(source)
        .unwrap_or_else(|err| panic!("parse: {err}"))
}

#[test]
fn attributes_are_classified_by_binding_syntax() {
    let parsed = parse(TemplateSource::document(TEMPLATE));
    let kinds: Vec<_> = parsed
        .ast()
        .elements()
        .flat_map(|element| element.attributes())
        .map(|attribute| format!("{} {}", attribute.kind().node_kind(), attribute.name()))
        .collect();

    assert_snapshot!(kinds.join("\n"), @r"
    TextAttribute class
    StructuralDirective *ngFor
    TwoWayBinding [(item)]
    BoundEvent ([bar])
    Reference #filter
    BoundEvent (keyup)
    ");
}

#[test]
fn reversed_two_way_binding_is_an_event_on_a_bracketed_target() {
    let parsed = parse(TemplateSource::document(TEMPLATE));
    let item = parsed
        .ast()
        .elements()
        .find(|element| element.name() == "app-item")
        .unwrap_or_else(|| panic!("app-item missing"));
    let banana = item
        .attribute("([bar])")
        .unwrap_or_else(|| panic!("attribute missing"));

    assert_eq!(
        banana.kind(),
        &BindingKind::Event {
            target: "[bar]".into()
        }
    );
}

#[test]
fn embedded_templates_report_positions_in_the_host_file() {
    let host = "@Component({\n  template: '<b ([x])=\"x\"></b>',\n})\nclass A {}\n";
    let start = host.find('\'').unwrap_or_default();
    let end = host.rfind('\'').unwrap_or_default() + 1;
    let text = host.get(start..end).unwrap_or_default();
    let parsed = parse(TemplateSource::embedded(text, host, start));

    let element = parsed
        .ast()
        .elements()
        .next()
        .unwrap_or_else(|| panic!("element missing"));
    let name_range = element
        .attributes()
        .first()
        .map(crate::Attribute::name_range)
        .unwrap_or_default();
    let span = parsed
        .services()
        .convert_node_source_span_to_loc(name_range)
        .unwrap_or_else(|| panic!("span out of range"));

    assert_eq!(span.text(host), Some("([x])"));
    assert_eq!(span.start.one_based(), (2, 17));
}

#[test]
fn scope_manager_holds_template_variables() {
    let parsed = parse(TemplateSource::document(TEMPLATE));
    let filter = parsed
        .scope_manager()
        .find_variable("filter")
        .unwrap_or_else(|| panic!("filter not declared"));
    assert_eq!(filter.kind(), VariableKind::TemplateReference);
    assert_eq!(filter.references().len(), 0);
}

#[test]
fn visitor_keys_cover_template_nodes() {
    let parsed = parse(TemplateSource::document(TEMPLATE));
    assert!(parsed.visitor_keys().contains("Element"));
    assert!(parsed.visitor_keys().contains("TwoWayBinding"));
}

#[test]
fn body_visitor_sees_every_element() {
    struct Names(Vec<String>);
    impl TemplateVisitor for Names {
        fn visit_element(&mut self, element: &crate::Element) {
            self.0.push(element.name().to_owned());
        }
    }

    let parsed = parse(TemplateSource::document(TEMPLATE));
    let mut names = Names(Vec::new());
    parsed.services().define_template_body_visitor(&mut names);
    assert_eq!(names.0, ["div", "app-item", "input"]);
}

#[rstest]
#[case("<div ([x])=\"unterminated></div>", 11)]
#[case("<p></div>", 3)]
#[case("<!-- never closed", 0)]
fn malformed_templates_report_an_offset(#[case] text: &str, #[case] offset: usize) {
    let err = TemplateParser::new()
        .parse(TemplateSource::document(text))
        .err()
        .unwrap_or_else(|| panic!("expected an error for {text:?}"));
    assert_eq!(err.offset(), offset);
}

#[test]
fn unterminated_value_names_the_attribute() {
    let err = TemplateParser::new()
        .parse(TemplateSource::document("<a href='x>"))
        .err();
    assert_eq!(
        err,
        Some(TemplateError::UnterminatedAttributeValue {
            attribute: "href".into(),
            offset: 8
        })
    );
}
