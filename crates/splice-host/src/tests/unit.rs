//! Cross-module tests over a realistic component source.

use std::path::Path;

use insta::assert_snapshot;
use rstest::{fixture, rstest};

use crate::{HostDialect, HostError, HostParse, HostParser};

const COMPONENT: &str = r#"import { Component, OnInit } from '@angular/core';

@Component({
  selector: 'app-example',
  template: '<input ([ngModel])="foo">',
})
export class ExampleComponent implements OnInit {
  foo = '';

  ngOnInit() {}
}
"#;

#[fixture]
fn component() -> HostParse {
    HostParser::for_path(Path::new("example.component.ts"))
        .parse(COMPONENT)
        .unwrap_or_else(|err| panic!("parse: {err}"))
}

#[rstest]
fn program_records_file_name_and_dialect(component: HostParse) {
    let program = &component.services().program;
    assert_eq!(program.file_name(), Some(Path::new("example.component.ts")));
    assert_eq!(program.dialect(), HostDialect::TypeScript);
}

#[rstest]
fn program_converts_offsets_to_positions(component: HostParse) {
    let offset = COMPONENT.find("export").expect("present");
    let position = component.services().program.position_of(offset).expect("in range");
    assert_eq!(position.one_based(), (7, 1));
}

#[rstest]
fn decorator_kinds_appear_in_visitor_keys(component: HostParse) {
    let keys = component.visitor_keys();
    assert!(keys.contains("decorator"));
    assert!(keys.contains("class_declaration"));
    assert!(keys.contains("string"));
}

#[rstest]
fn into_parts_preserves_scope_identity(component: HostParse) {
    let scope = std::sync::Arc::clone(component.scope_manager());
    let parts = component.into_parts();
    assert!(std::sync::Arc::ptr_eq(&scope, &parts.scope_manager));
}

#[test]
fn variable_declarator_fields_snapshot() {
    let parsed = HostParser::default()
        .parse("let x = 1;")
        .unwrap_or_else(|err| panic!("parse: {err}"));
    assert_snapshot!(
        format!("{:?}", parsed.visitor_keys().get("variable_declarator")),
        @r#"Some(["name", "value"])"#
    );
}

#[test]
fn syntax_error_message_names_first_error() {
    let err = HostParser::default()
        .parse("class {")
        .expect_err("invalid source");
    assert!(matches!(err, HostError::Syntax { .. }));
    assert!(err.to_string().starts_with("typescript source has"));
}
