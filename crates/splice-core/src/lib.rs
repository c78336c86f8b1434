//! Shared data model for the splice composite parsing workspace.
//!
//! Both sub-language parsers and the composite layer speak in the types
//! defined here, so their outputs can be merged without conversion:
//!
//! - [`Span`], [`LineCol`] and [`LineIndex`] for source positions
//! - [`VisitorKeys`] describing which child fields a traversal visits
//! - [`ScopeManager`] and friends for the resolved binding structure
//! - [`Diagnostic`] and [`DiagnosticSink`] for the operator-visible
//!   diagnostics channel
//!
//! # Example
//!
//! ```
//! use splice_core::{LineIndex, LineCol};
//!
//! let index = LineIndex::new("a\nbc");
//! assert_eq!(index.line_col(3), Some(LineCol::new(1, 1)));
//! ```

mod diagnostic;
mod line_index;
mod scope;
mod span;
mod visitor_keys;

pub use diagnostic::{Diagnostic, DiagnosticCode, DiagnosticSink, Severity, TracingSink};
pub use line_index::LineIndex;
pub use scope::{
    Reference, Scope, ScopeId, ScopeKind, ScopeManager, Variable, VariableId, VariableKind,
};
pub use span::{LineCol, Span};
pub use visitor_keys::VisitorKeys;

#[cfg(test)]
mod tests;
