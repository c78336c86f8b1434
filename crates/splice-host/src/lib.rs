//! Tree-sitter powered host-language parser for splice.
//!
//! This crate parses TypeScript component sources and produces everything
//! the composite layer needs from the host side:
//!
//! - the syntax tree ([`HostAst`])
//! - a visitor-key table harvested from the tree's field names
//! - a [`splice_core::ScopeManager`] with resolved bindings
//! - host services: a [`Program`] handle and [`NodeMaps`] relating stable
//!   [`NodeId`]s to Tree-sitter nodes
//!
//! Unlike a plain Tree-sitter parse, a [`HostParser`] rejects sources that
//! contain syntax errors: lint rules need a trustworthy host tree, and there
//! is nothing sensible to fall back to when the host text itself is broken.
//!
//! # Example
//!
//! ```
//! use splice_host::{HostDialect, HostParser};
//!
//! let parser = HostParser::new(HostDialect::TypeScript);
//! let parsed = parser.parse("const answer = 42;")?;
//! assert!(parsed.scope_manager().find_variable("answer").is_some());
//! # Ok::<(), splice_host::HostError>(())
//! ```

mod dialect;
mod error;
mod node_maps;
mod parser;
mod position;
mod program;
mod scope;
mod visitor_keys;
mod walk;

pub use dialect::{DialectParseError, HostDialect};
pub use error::HostError;
pub use node_maps::{NodeEntry, NodeId, NodeMaps};
pub use parser::{HostAst, HostParse, HostParser, HostParts, SyntaxErrorInfo};
pub use program::{HostServices, Program};

#[cfg(test)]
mod tests;
