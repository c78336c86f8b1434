//! Running rules over a parsed file.

use std::fmt;

use splice_core::DiagnosticSink;
use splice_parser::{CompositeParser, ParseError, ParseOutput, ParserOptions, TreeSitterHost};
use splice_template::TemplateParser;

use crate::banana::BananaInABox;
use crate::finding::Finding;
use crate::fix::{FixError, FixedSource, apply_fixes};
use crate::rule::{Rule, RuleContext};

/// Parses files and runs a set of rules over them.
pub struct Linter {
    parser: CompositeParser,
    rules: Vec<Box<dyn Rule>>,
}

impl fmt::Debug for Linter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<_> = self.rules.iter().map(|rule| rule.name()).collect();
        f.debug_struct("Linter").field("rules", &names).finish()
    }
}

impl Default for Linter {
    fn default() -> Self {
        Self::new().with_rule(BananaInABox)
    }
}

impl Linter {
    /// Creates a linter with no rules.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            parser: CompositeParser::new(TreeSitterHost, TemplateParser::new()),
            rules: Vec::new(),
        }
    }

    /// Adds a rule.
    #[must_use]
    pub fn with_rule(mut self, rule: impl Rule + 'static) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Returns the names of the configured rules.
    pub fn rule_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.iter().map(|rule| rule.name())
    }

    /// Parses `text` and runs every rule over it.
    ///
    /// Findings are ordered by position, then by rule name.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] if the file cannot be parsed at all.
    pub fn lint(
        &self,
        text: &str,
        options: &ParserOptions,
        sink: &mut dyn DiagnosticSink,
    ) -> Result<LintReport, ParseError> {
        let output = self.parser.parse_for_lint(text, options, sink)?;

        let mut findings = Vec::new();
        for rule in &self.rules {
            let mut context = RuleContext::new(text, &output);
            rule.check(&mut context);
            let reported = context.into_findings();
            tracing::debug!(rule = rule.name(), findings = reported.len(), "rule finished");
            findings.extend(reported);
        }
        findings.sort_by_key(|finding| (finding.span().start_byte, finding.rule()));

        Ok(LintReport { output, findings })
    }
}

/// Findings for one file together with the parse they came from.
#[derive(Debug, Clone)]
pub struct LintReport {
    output: ParseOutput,
    findings: Vec<Finding>,
}

impl LintReport {
    /// Returns the parse result.
    #[must_use]
    pub const fn output(&self) -> &ParseOutput {
        &self.output
    }

    /// Returns the findings in position order.
    #[must_use]
    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    /// Returns `true` if no rule reported anything.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }

    /// Applies every attached fix to `source`, the text that was linted.
    ///
    /// # Errors
    ///
    /// Returns [`FixError`] if a fix does not fit `source`.
    pub fn fix(&self, source: &str) -> Result<FixedSource, FixError> {
        apply_fixes(source, self.findings.iter().filter_map(Finding::fix))
    }
}
