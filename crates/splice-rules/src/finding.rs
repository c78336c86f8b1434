//! Findings reported by rules and the fixes attached to them.

use std::ops::Range;

use serde::Serialize;
use splice_core::Span;

/// A literal text edit in the parsed file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fix {
    /// Byte range replaced.
    pub range: Range<usize>,
    /// Replacement text.
    pub replacement: String,
}

impl Fix {
    /// Creates a fix replacing `range` with `replacement`.
    #[must_use]
    pub fn new(range: Range<usize>, replacement: impl Into<String>) -> Self {
        Self {
            range,
            replacement: replacement.into(),
        }
    }
}

/// A problem a rule found in the parsed file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    rule: &'static str,
    message_id: &'static str,
    message: String,
    span: Span,
    #[serde(skip_serializing_if = "Option::is_none")]
    fix: Option<Fix>,
}

impl Finding {
    /// Creates a finding without a fix.
    #[must_use]
    pub fn new(
        rule: &'static str,
        message_id: &'static str,
        message: impl Into<String>,
        span: Span,
    ) -> Self {
        Self {
            rule,
            message_id,
            message: message.into(),
            span,
            fix: None,
        }
    }

    /// Attaches a fix.
    #[must_use]
    pub fn with_fix(mut self, fix: Fix) -> Self {
        self.fix = Some(fix);
        self
    }

    /// Returns the reporting rule's name.
    #[must_use]
    pub const fn rule(&self) -> &'static str {
        self.rule
    }

    /// Returns the stable message id.
    #[must_use]
    pub const fn message_id(&self) -> &'static str {
        self.message_id
    }

    /// Returns the human-readable message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the span in the parsed file.
    #[must_use]
    pub const fn span(&self) -> Span {
        self.span
    }

    /// Returns the attached fix, if any.
    #[must_use]
    pub const fn fix(&self) -> Option<&Fix> {
        self.fix.as_ref()
    }
}
