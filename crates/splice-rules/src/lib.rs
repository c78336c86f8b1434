//! Lint rules over composite parses.
//!
//! A [`Linter`] parses a file with [`splice_parser`] and hands the result to
//! each of its [`Rule`]s through a [`RuleContext`]. Rules report
//! [`Finding`]s located in the linted file; a finding may carry a [`Fix`],
//! and [`LintReport::fix`] applies the non-overlapping fixes in one pass.
//!
//! The only rule shipped is [`BananaInABox`], which rewrites reversed
//! two-way bindings `([x])` to `[(x)]` in template documents and in inline
//! component templates alike.
//!
//! # Example
//!
//! ```
//! use splice_core::TracingSink;
//! use splice_parser::ParserOptions;
//! use splice_rules::Linter;
//!
//! let text = "<input ([ngModel])=\"name\">";
//! let options = ParserOptions::new("form.component.html");
//! let report = Linter::default().lint(text, &options, &mut TracingSink)?;
//! assert_eq!(report.findings().len(), 1);
//! # Ok::<(), splice_parser::ParseError>(())
//! ```

mod banana;
mod finding;
mod fix;
mod linter;
mod rule;

pub use banana::{BANANA_IN_A_BOX, BananaInABox};
pub use finding::{Finding, Fix};
pub use fix::{FixError, FixedSource, apply_fixes};
pub use linter::{LintReport, Linter};
pub use rule::{Rule, RuleContext};

#[cfg(test)]
mod tests;
