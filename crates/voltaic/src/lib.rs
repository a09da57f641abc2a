//! Voltaic - compile textual circuit descriptions into schematic diagrams.
//!
//! The pipeline runs in four stages, each usable on its own:
//!
//! 1. [`voltaic_parser::parse`] turns source text into statements.
//! 2. [`compiler::Compiler`] resolves designators and terminals against a
//!    [`library::SymbolLibrary`].
//! 3. [`layout::Layouter`] places and orients every symbol using the
//!    geometry derived by [`skin::Skin`].
//! 4. [`export::SvgRenderer`] draws the result.
//!
//! [`SchematicBuilder`] wires the stages together.

pub mod compiler;
pub mod config;
pub mod export;
pub mod layout;
pub mod library;
pub mod skin;

mod error;

pub use voltaic_core::{color, designator, geometry, statement, value};

pub use error::VoltaicError;

use std::{cell::RefCell, fs};

use log::{debug, info, trace};

use compiler::{Compiler, Schematic};
use config::AppConfig;
use export::SvgRenderer;
use layout::{LayeredEngine, Layouter, PlacedSchematic};
use library::SymbolLibrary;
use skin::Skin;
use statement::Statement;

/// Builder for parsing, laying out and rendering Voltaic schematics.
///
/// The builder owns the symbol library and the skin. Symbol artwork is
/// derived on first use and cached for every later layout.
///
/// # Examples
///
/// ```
/// use voltaic::{SchematicBuilder, config::AppConfig};
///
/// let builder = SchematicBuilder::new(AppConfig::default());
///
/// let statements = builder.parse("in - [R1:10k] - {C1:100n} - gnd").unwrap();
/// let schematic = builder.compile(&statements).unwrap();
/// let placed = builder.layout(&schematic).unwrap();
/// let svg = builder.render_svg(&placed).unwrap();
/// assert!(svg.contains("R1"));
///
/// // Or all at once
/// let svg = builder.render_source("[R1] - gnd").unwrap();
/// ```
pub struct SchematicBuilder {
    config: AppConfig,
    library: SymbolLibrary,
    skin: RefCell<Skin>,
}

impl Default for SchematicBuilder {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

impl SchematicBuilder {
    /// Creates a builder with the built-in symbol library and skin.
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            library: SymbolLibrary::builtin(),
            skin: RefCell::new(Skin::builtin()),
        }
    }

    /// Creates a builder, loading the symbol library and skin files named
    /// by `config`.
    ///
    /// A configured library is merged over the built-in one; a configured
    /// skin replaces the built-in skin.
    ///
    /// # Errors
    ///
    /// Returns a [`VoltaicError`] if a file cannot be read or is invalid.
    pub fn from_config(config: AppConfig) -> Result<Self, VoltaicError> {
        let mut library = SymbolLibrary::builtin();
        if let Some(path) = config.symbols() {
            info!(path = path.display().to_string(); "Loading symbol library");
            library.extend(SymbolLibrary::from_toml(&fs::read_to_string(path)?)?);
        }
        let skin = match config.skin() {
            Some(path) => {
                info!(path = path.display().to_string(); "Loading skin");
                Skin::new(fs::read_to_string(path)?)?
            }
            None => Skin::builtin(),
        };
        Ok(Self {
            config,
            library,
            skin: RefCell::new(skin),
        })
    }

    /// Replaces the symbol library.
    pub fn with_library(mut self, library: SymbolLibrary) -> Self {
        self.library = library;
        self
    }

    /// Replaces the skin.
    pub fn with_skin(mut self, skin: Skin) -> Self {
        self.skin = RefCell::new(skin);
        self
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn library(&self) -> &SymbolLibrary {
        &self.library
    }

    /// Parses source text into statements.
    ///
    /// # Errors
    ///
    /// Returns [`VoltaicError::Parse`] with the source attached.
    pub fn parse(&self, source: &str) -> Result<Vec<Statement>, VoltaicError> {
        info!("Parsing schematic");
        let statements = voltaic_parser::parse(source)
            .map_err(|err| VoltaicError::new_parse_error(err, source))?;
        debug!(statements_len = statements.len(); "Schematic parsed successfully");
        trace!(statements:?; "Parsed statements");
        Ok(statements)
    }

    /// Compiles and resolves statements.
    ///
    /// # Errors
    ///
    /// Returns [`VoltaicError::Compile`] for unknown symbols or terminals.
    pub fn compile(&self, statements: &[Statement]) -> Result<Schematic, VoltaicError> {
        let mut compiler = Compiler::new();
        compiler.add_statements(statements);
        compiler.resolve(&self.library)?;
        let schematic = compiler.schematic()?;
        info!(
            nodes_len = schematic.nodes().len(),
            edges_len = schematic.edges().len();
            "Schematic compiled"
        );
        Ok(schematic)
    }

    /// Lays out a compiled schematic.
    ///
    /// # Errors
    ///
    /// Returns [`VoltaicError::Layout`] if symbol artwork is missing or
    /// invalid, or the layout engine fails.
    pub fn layout(&self, schematic: &Schematic) -> Result<PlacedSchematic, VoltaicError> {
        let engine = LayeredEngine::new();
        let options = self
            .config
            .layout()
            .options(self.config.style().font_size());
        let placed = Layouter::new(&engine, options).layout(
            schematic,
            &self.library,
            &mut self.skin.borrow_mut(),
        )?;
        Ok(placed)
    }

    /// Renders a placed schematic to an SVG string.
    ///
    /// # Errors
    ///
    /// Returns [`VoltaicError::Export`] for invalid style settings or
    /// non-finite positions.
    pub fn render_svg(&self, placed: &PlacedSchematic) -> Result<String, VoltaicError> {
        let svg = SvgRenderer::new(self.config.style())?.render_to_string(placed)?;
        info!("SVG rendered successfully");
        Ok(svg)
    }

    /// Runs the whole pipeline on source text.
    ///
    /// # Errors
    ///
    /// Returns the first error of any stage.
    pub fn render_source(&self, source: &str) -> Result<String, VoltaicError> {
        let statements = self.parse(source)?;
        let schematic = self.compile(&statements)?;
        let placed = self.layout(&schematic)?;
        self.render_svg(&placed)
    }
}
