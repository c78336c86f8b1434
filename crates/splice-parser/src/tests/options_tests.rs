//! Tests for parser options and source type normalisation.

use std::str::FromStr;

use rstest::rstest;
use splice_core::{Diagnostic, DiagnosticCode};

use crate::{ParseMode, ParserOptions, SourceType};

#[test]
fn deserialises_camel_case_options_with_default_suffixes() {
    let options: ParserOptions =
        serde_json::from_str(r#"{ "filePath": "src/app.component.ts", "sourceType": "script" }"#)
            .unwrap_or_else(|err| panic!("deserialise: {err}"));

    assert_eq!(options.source_type, Some(SourceType::Script));
    assert_eq!(options.template_suffix, ".component.html");
    assert_eq!(options.component_suffix, ".component.ts");
    assert_eq!(options.mode(), ParseMode::HostWithEmbeddedTemplate);
}

#[test]
fn custom_suffixes_drive_mode_selection() {
    let options: ParserOptions = serde_json::from_str(
        r#"{ "filePath": "view.ng.html", "templateSuffix": ".ng.html", "componentSuffix": ".ng.ts" }"#,
    )
    .unwrap_or_else(|err| panic!("deserialise: {err}"));
    assert_eq!(options.mode(), ParseMode::TemplateOnly);
}

#[rstest]
#[case("module", SourceType::Module)]
#[case("Script", SourceType::Script)]
#[case("commonjs", SourceType::CommonJs)]
fn source_type_parses_case_insensitively(#[case] text: &str, #[case] expected: SourceType) {
    assert_eq!(SourceType::from_str(text).ok(), Some(expected));
}

#[rstest]
#[case(None, 0)]
#[case(Some(SourceType::Module), 0)]
#[case(Some(SourceType::Script), 1)]
#[case(Some(SourceType::CommonJs), 1)]
fn normalise_warns_once_for_other_source_types(
    #[case] requested: Option<SourceType>,
    #[case] warnings: usize,
) {
    let mut options = ParserOptions::new("main.ts");
    options.source_type = requested;
    let mut diagnostics: Vec<Diagnostic> = Vec::new();

    let normalised = options.normalise(&mut diagnostics);

    assert_eq!(normalised.source_type, Some(SourceType::Module));
    assert_eq!(options.source_type, requested);
    assert_eq!(diagnostics.len(), warnings);
    assert!(
        diagnostics
            .iter()
            .all(|d| d.code() == DiagnosticCode::UnsupportedSourceType)
    );
}

#[test]
fn warning_names_the_requested_value_and_file() {
    let options = ParserOptions::new("main.ts").with_source_type(SourceType::Script);
    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    let normalised = options.normalise(&mut diagnostics);
    assert_eq!(normalised.source_type, Some(SourceType::Module));

    let warning = diagnostics.first().unwrap_or_else(|| panic!("no warning"));
    assert_eq!(warning.path(), Some("main.ts"));
    assert!(warning.message().contains("\"script\""));
}
