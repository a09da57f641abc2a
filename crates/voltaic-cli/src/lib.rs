//! CLI logic for the Voltaic schematic compiler.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::info;

use voltaic::{SchematicBuilder, VoltaicError};

/// Run the Voltaic CLI application
///
/// Compiles the input file through the Voltaic pipeline and writes the
/// resulting SVG to the output file.
///
/// # Errors
///
/// Returns `VoltaicError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Parsing and compile errors
/// - Layout and rendering errors
pub fn run(args: &Args) -> Result<(), VoltaicError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing schematic"
    );

    let mut app_config = config::load_config(args.config.as_ref())?;
    if args.no_optimize {
        app_config.layout_mut().set_optimize(false);
    }

    let source = fs::read_to_string(&args.input)?;

    let builder = SchematicBuilder::from_config(app_config)?;
    let svg = builder.render_source(&source)?;

    fs::write(&args.output, svg)?;

    info!(output_file = args.output; "SVG exported successfully");

    Ok(())
}
