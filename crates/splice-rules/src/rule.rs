//! The rule interface and the context rules run in.

use std::path::Path;

use splice_parser::{ParseOutput, ParseServices};

use crate::finding::Finding;

/// A lint rule.
pub trait Rule: Send + Sync {
    /// Returns the rule's name, e.g. `banana-in-a-box`.
    fn name(&self) -> &'static str;

    /// Inspects the parse in `context` and reports findings to it.
    fn check(&self, context: &mut RuleContext<'_>);
}

/// What a rule sees of one parsed file.
#[derive(Debug)]
pub struct RuleContext<'a> {
    source: &'a str,
    output: &'a ParseOutput,
    findings: Vec<Finding>,
}

impl<'a> RuleContext<'a> {
    /// Creates a context over `output`, parsed from `source`.
    #[must_use]
    pub const fn new(source: &'a str, output: &'a ParseOutput) -> Self {
        Self {
            source,
            output,
            findings: Vec::new(),
        }
    }

    /// Returns the full text of the parsed file.
    #[must_use]
    pub const fn source(&self) -> &'a str {
        self.source
    }

    /// Returns the path of the parsed file.
    #[must_use]
    pub fn path(&self) -> &'a Path {
        self.output.path()
    }

    /// Returns the parse result.
    #[must_use]
    pub const fn output(&self) -> &'a ParseOutput {
        self.output
    }

    /// Returns the parser services.
    #[must_use]
    pub const fn services(&self) -> ParseServices<'a> {
        self.output.services()
    }

    /// Records a finding.
    pub fn report(&mut self, finding: Finding) {
        self.findings.push(finding);
    }

    /// Returns the findings reported so far.
    #[must_use]
    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    /// Consumes the context and returns its findings.
    #[must_use]
    pub fn into_findings(self) -> Vec<Finding> {
        self.findings
    }
}
