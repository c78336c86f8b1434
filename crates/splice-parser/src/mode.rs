//! Parse mode selection and the terminal states a call can end in.

use std::path::Path;

use strum::{Display, IntoStaticStr};

/// How a file is parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum ParseMode {
    /// A standalone template document.
    TemplateOnly,
    /// A component source that may carry an inline template.
    HostWithEmbeddedTemplate,
    /// Any other host source.
    HostOnly,
}

impl ParseMode {
    /// Selects the mode from the path alone.
    ///
    /// The template suffix is checked first, so a path matching both
    /// suffixes is a template document.
    ///
    /// # Example
    ///
    /// ```
    /// use std::path::Path;
    /// use splice_parser::ParseMode;
    ///
    /// let mode = ParseMode::select(
    ///     Path::new("src/app/app.component.ts"),
    ///     ".component.html",
    ///     ".component.ts",
    /// );
    /// assert_eq!(mode, ParseMode::HostWithEmbeddedTemplate);
    /// ```
    #[must_use]
    pub fn select(path: &Path, template_suffix: &str, component_suffix: &str) -> Self {
        let name = path.to_string_lossy();
        if name.ends_with(template_suffix) {
            Self::TemplateOnly
        } else if name.ends_with(component_suffix) {
            Self::HostWithEmbeddedTemplate
        } else {
            Self::HostOnly
        }
    }
}

/// Where a parse call ended.
///
/// `Delegated` is a component source with no usable inline template whose
/// text went to the template parser; `FallbackDone` is a component source
/// whose embedded template could not be used, parsed by the host alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum TerminalState {
    /// Template document parsed.
    TemplateOnlyDone,
    /// Plain host source parsed.
    HostOnlyDone,
    /// No inline template found; text parsed as a template.
    Delegated,
    /// Host and embedded template parsed and merged.
    ComposeDone,
    /// Embedded template unusable; host parsed alone.
    FallbackDone,
}
