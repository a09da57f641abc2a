//! Error and diagnostic system for the Voltaic parser.
//!
//! Parsing stops at the first problem and reports it as a [`Diagnostic`]
//! carrying an [`ErrorCode`], a labeled source span and optional help text.
//! Diagnostics are wrapped in [`ParseError`] for returning from [`crate::parse`].
//!
//! # Example
//!
//! ```
//! # use voltaic_parser::error::{Diagnostic, ErrorCode};
//! # use voltaic_parser::Span;
//!
//! let diag = Diagnostic::error("unclosed component")
//!     .with_code(ErrorCode::E102)
//!     .with_label(Span::new(0..4), "expected `]`")
//!     .with_help("close the component with the matching delimiter");
//! ```

mod diagnostic;
mod error_code;
mod label;
mod parse_error;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use label::Label;
pub use parse_error::ParseError;
