//! End-to-end tests for `parse_for_lint` over whole component files.

use insta::assert_snapshot;
use splice_core::{Diagnostic, TracingSink};
use splice_parser::{ParseOutcome, ParseOutput, ParserOptions, SourceType, parse_for_lint};
use splice_template::{Attribute, Element, TemplateVisitor};

const TEMPLATE_DOCUMENT: &str = r#"
          <input type="text" name="foo" ([ngModel])="foo">
        "#;

const COMPONENT: &str = r#"
          import { Component, OnInit, Output, EventEmitter } from '@angular/core';

          @Component({
            selector: 'app-example',
            template: `
              <input type="text" name="foo" ([ngModel])="foo">

              <app-item ([bar])="bar" ([item])="item" [(test)]="test"></app-item>
              <div [oneWay]="oneWay" (emitter)="emitter" ([twoWay])="twoWay"></div>
            `,
            styleUrls: ['./example.component.scss'],
            inputs: [],
            outputs: [],
            host: {}
          })
          export class ExampleComponent implements OnInit {

            @Output() onFoo = new EventEmitter();

            constructor() { }

            ngOnInit() {
            }

          }

        "#;

/// Collects every attribute with its position in the parsed file.
struct AttributeLocations<'a> {
    output: &'a ParseOutput,
    lines: Vec<String>,
}

impl TemplateVisitor for AttributeLocations<'_> {
    fn visit_attribute(&mut self, element: &Element, attribute: &Attribute) {
        let position = self
            .output
            .services()
            .convert_node_source_span_to_loc(attribute.name_range())
            .map(|span| span.start.one_based());
        self.lines.push(format!(
            "{} {} {} {:?}",
            element.name(),
            attribute.kind().node_kind(),
            attribute.name(),
            position
        ));
    }
}

fn describe(output: &ParseOutput) -> String {
    let mut visitor = AttributeLocations {
        output,
        lines: vec![format!("{} -> {}", output.mode(), output.terminal())],
    };
    output.services().define_template_body_visitor(&mut visitor);
    visitor.lines.join("\n")
}

#[test]
fn template_document_attributes_and_positions() {
    let options = ParserOptions::new("app.component.html").with_source_type(SourceType::Module);
    let output = parse_for_lint(TEMPLATE_DOCUMENT, &options, &mut TracingSink)
        .unwrap_or_else(|err| panic!("parse: {err}"));

    assert_snapshot!(describe(&output), @r"
    template_only -> template_only_done
    input TextAttribute type Some((2, 18))
    input TextAttribute name Some((2, 30))
    input BoundEvent ([ngModel]) Some((2, 41))
    ");
}

#[test]
fn component_attributes_map_back_to_the_component_file() {
    let options = ParserOptions::new("example.component.ts").with_source_type(SourceType::Module);
    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    let output = parse_for_lint(COMPONENT, &options, &mut diagnostics)
        .unwrap_or_else(|err| panic!("parse: {err}"));

    assert!(diagnostics.is_empty());
    assert!(matches!(output.outcome(), ParseOutcome::Composite(_)));
    assert_snapshot!(describe(&output), @r"
    host_with_embedded_template -> compose_done
    input TextAttribute type Some((7, 22))
    input TextAttribute name Some((7, 34))
    input BoundEvent ([ngModel]) Some((7, 45))
    app-item BoundEvent ([bar]) Some((9, 25))
    app-item BoundEvent ([item]) Some((9, 39))
    app-item TwoWayBinding [(test)] Some((9, 55))
    div BoundAttribute [oneWay] Some((10, 20))
    div BoundEvent (emitter) Some((10, 38))
    div BoundEvent ([twoWay]) Some((10, 58))
    ");
}
