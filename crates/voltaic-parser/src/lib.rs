//! # Voltaic Parser
//!
//! Parser for the Voltaic schematic language. Turns source text into the
//! ordered [`Statement`] sequence consumed by the schematic compiler.
//!
//! ## Usage
//!
//! ```
//! # use voltaic_parser::{parse, ParseError};
//!
//! fn main() -> Result<(), ParseError> {
//!     let source = r#"
//!         in - [R1:22k "input"] - {C1:100nF} - gnd
//!         set layout.direction=RIGHT
//!     "#;
//!
//!     let statements = parse(source)?;
//!     assert_eq!(statements.len(), 2);
//!     Ok(())
//! }
//! ```

pub mod error;
mod parser;
#[cfg(test)]
mod parser_tests;
mod span;

pub use error::ParseError;
pub use span::Span;

use log::debug;

use voltaic_core::statement::Statement;

/// Parse source text into statements.
///
/// # Arguments
///
/// * `source` - The Voltaic schematic source code to parse
///
/// # Errors
///
/// Returns a [`ParseError`] carrying a [`error::Diagnostic`] with an error
/// code and source span for the first syntax error found.
///
/// # Example
///
/// ```
/// # use voltaic_parser::parse;
///
/// let statements = parse("[R1] - [R2] - [R3]").unwrap();
/// assert_eq!(statements.len(), 1);
/// ```
pub fn parse(source: &str) -> Result<Vec<Statement>, ParseError> {
    let statements = parser::parse_statements(source)?;
    debug!(statements_len = statements.len(); "Parsed source");
    Ok(statements)
}
