//! Options passed in by the lint host for each parse call.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use splice_core::{Diagnostic, DiagnosticCode, DiagnosticSink};
use strum::{Display, EnumString};

use crate::mode::ParseMode;

/// Default suffix of standalone template documents.
pub const DEFAULT_TEMPLATE_SUFFIX: &str = ".component.html";

/// Default suffix of component sources that may carry an inline template.
pub const DEFAULT_COMPONENT_SUFFIX: &str = ".component.ts";

/// Module mode requested for the host parse.
///
/// Only [`SourceType::Module`] is supported; any other value is overridden.
#[derive(
    Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq, EnumString, Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SourceType {
    /// ECMAScript module.
    #[default]
    Module,
    /// Classic script.
    Script,
    /// CommonJS module.
    CommonJs,
}

/// Errors encountered while parsing a [`SourceType`] from text.
pub type SourceTypeParseError = strum::ParseError;

/// Per-call parser options.
///
/// Deserialises from the camelCase shape lint hosts pass:
///
/// ```json
/// { "filePath": "app.component.ts", "sourceType": "module" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParserOptions {
    /// Path of the file being parsed. Only used for mode selection and
    /// diagnostics; the file is never read.
    pub file_path: PathBuf,
    /// Requested module mode, if the host set one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_type: Option<SourceType>,
    /// Suffix identifying standalone template documents.
    #[serde(default = "default_template_suffix")]
    pub template_suffix: String,
    /// Suffix identifying component sources.
    #[serde(default = "default_component_suffix")]
    pub component_suffix: String,
}

fn default_template_suffix() -> String {
    DEFAULT_TEMPLATE_SUFFIX.to_owned()
}

fn default_component_suffix() -> String {
    DEFAULT_COMPONENT_SUFFIX.to_owned()
}

impl ParserOptions {
    /// Options for `file_path` with default suffixes and no source type.
    #[must_use]
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
            source_type: None,
            template_suffix: default_template_suffix(),
            component_suffix: default_component_suffix(),
        }
    }

    /// Sets the requested source type.
    #[must_use]
    pub const fn with_source_type(mut self, source_type: SourceType) -> Self {
        self.source_type = Some(source_type);
        self
    }

    /// Overrides the template document suffix.
    #[must_use]
    pub fn with_template_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.template_suffix = suffix.into();
        self
    }

    /// Overrides the component source suffix.
    #[must_use]
    pub fn with_component_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.component_suffix = suffix.into();
        self
    }

    /// Returns the path of the file being parsed.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Selects the parse mode for this file.
    #[must_use]
    pub fn mode(&self) -> ParseMode {
        ParseMode::select(&self.file_path, &self.template_suffix, &self.component_suffix)
    }

    /// Returns a copy with the source type forced to `module`.
    ///
    /// Reports one [`DiagnosticCode::UnsupportedSourceType`] warning when
    /// the caller asked for anything else. The options passed in are left
    /// untouched.
    #[must_use]
    pub fn normalise(&self, sink: &mut dyn DiagnosticSink) -> Self {
        if let Some(requested) = self.source_type
            && requested != SourceType::Module
        {
            sink.report(
                Diagnostic::new(
                    DiagnosticCode::UnsupportedSourceType,
                    format!(
                        "sourceType is set to \"{requested}\", but only \"module\" is supported \
                         so the setting will be ignored"
                    ),
                )
                .with_path(self.file_path.display().to_string()),
            );
        }
        Self {
            source_type: Some(SourceType::Module),
            ..self.clone()
        }
    }
}
