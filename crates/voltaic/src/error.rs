//! Error types for Voltaic operations.
//!
//! [`VoltaicError`] aggregates the errors of every pipeline stage.

use std::io;

use thiserror::Error;

use voltaic_parser::error::ParseError;

use crate::{
    compiler::CompileError, export::ExportError, layout::LayoutError, library::LibraryError,
    skin::SkinError,
};

/// The main error type for Voltaic operations.
///
/// The `Parse` variant keeps the source text so diagnostics can be rendered
/// with snippets.
#[derive(Debug, Error)]
pub enum VoltaicError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse { err: ParseError, src: String },

    #[error("Compile error: {0}")]
    Compile(#[from] CompileError),

    #[error("Symbol library error: {0}")]
    Library(#[from] LibraryError),

    #[error("Skin error: {0}")]
    Skin(#[from] SkinError),

    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),

    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl VoltaicError {
    /// Create a new `Parse` error with the associated source code.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}
