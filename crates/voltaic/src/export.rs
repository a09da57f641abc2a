//! Output formats for placed schematics.

pub mod svg;

use std::io;

use thiserror::Error;

pub use svg::SvgRenderer;

/// Errors raised while exporting a placed schematic.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to write output: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid style: {0}")]
    Style(String),

    /// The layout produced a position that cannot be drawn.
    #[error("Non-finite coordinate in {0}")]
    NonFinite(String),
}
