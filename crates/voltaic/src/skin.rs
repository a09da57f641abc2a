//! The symbol geometry engine.
//!
//! A skin is one SVG document holding the artwork of every symbol. Each
//! symbol is a subtree whose root carries `data-symbol="NAME"`; terminal
//! leads are paths tagged with `data-terminal="NAME"`, and the root may
//! restrict its orientations with `data-rotations="0,2"`.
//!
//! Looking up a symbol derives a [`SymbolSkin`]: geometry translated so the
//! bounding box starts at the origin, the bounding size, the coordinate of
//! every terminal on the bounding edge, and the permitted rotation steps.
//! Results are cached; the style class table is shared by all symbols.
//!
//! # Example
//!
//! ```
//! # use voltaic::skin::Skin;
//! let mut skin = Skin::builtin();
//! let resistor = skin.symbol("R").unwrap();
//! assert!(resistor.terminal("1").is_some());
//! assert_eq!(resistor.rotations(), [0, 1, 2, 3]);
//! ```

mod path;
mod shape;
mod style;
mod terminal;

pub use path::{PathData, Segment};
pub use shape::{Geometry, Shape};
pub use style::StyleClasses;

use std::{collections::HashMap, sync::Arc};

use indexmap::IndexMap;
use log::{debug, trace};
use roxmltree::{Document, Node as XmlNode};
use thiserror::Error;

use voltaic_core::geometry::{Point, Size};

const BUILTIN_SKIN: &str = include_str!("../assets/skin.svg");

pub(crate) const SYMBOL_ATTRIBUTE: &str = "data-symbol";
pub(crate) const TERMINAL_ATTRIBUTE: &str = "data-terminal";
pub(crate) const ROTATIONS_ATTRIBUTE: &str = "data-rotations";

/// Normalized coordinates are multiples of `1 / PRECISION`.
const PRECISION: f32 = 1000.0;

/// Errors raised while deriving symbol geometry.
#[derive(Debug, Error)]
pub enum SkinError {
    #[error("Invalid skin document: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("Symbol `{0}` is not defined in the skin")]
    UnknownSymbol(String),

    #[error("Symbol `{symbol}` has no drawable geometry")]
    EmptyGeometry { symbol: String },

    #[error("Symbol `{symbol}`: invalid rotation step `{value}`, expected an integer from 0 to 3")]
    InvalidRotation { symbol: String, value: String },

    #[error("Symbol `{symbol}`: `transform` is only supported on the symbol root")]
    NestedTransform { symbol: String },

    #[error(
        "Symbol `{symbol}`: terminal `{terminal}` has no straight lead ending on the symbol bounds"
    )]
    UnattachableTerminal { symbol: String, terminal: String },

    #[error("Symbol `{symbol}`: invalid `{attribute}` on <{element}>: {message}")]
    InvalidAttribute {
        symbol: String,
        element: String,
        attribute: String,
        message: String,
    },

    #[error("Symbol `{symbol}`: invalid path data: {message}")]
    PathData { symbol: String, message: String },
}

/// The derived, immutable geometry of one symbol.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolSkin {
    name: String,
    shape: Shape,
    size: Size,
    terminals: IndexMap<String, Point>,
    rotations: Vec<u8>,
}

impl SymbolSkin {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Root group of the normalized geometry.
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Bounding size; the bounding box starts at the origin.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Terminal attachment points in document order.
    pub fn terminals(&self) -> &IndexMap<String, Point> {
        &self.terminals
    }

    pub fn terminal(&self, name: &str) -> Option<Point> {
        self.terminals.get(name).copied()
    }

    /// Permitted quarter-turn steps.
    pub fn rotations(&self) -> &[u8] {
        &self.rotations
    }
}

/// A skin document with a lazily filled symbol cache.
///
/// Lookups through [`Skin::symbol`] take `&mut self`; once every symbol of
/// interest is loaded, [`Skin::get`] reads the cache through `&self`.
#[derive(Debug, Clone)]
pub struct Skin {
    source: String,
    cache: HashMap<String, Arc<SymbolSkin>>,
    styles: StyleClasses,
}

impl Skin {
    /// Creates a skin from SVG text.
    ///
    /// # Errors
    ///
    /// Returns [`SkinError::Xml`] if the text is not well-formed XML.
    pub fn new(source: impl Into<String>) -> Result<Self, SkinError> {
        let source = source.into();
        Document::parse(&source)?;
        Ok(Self {
            source,
            cache: HashMap::new(),
            styles: StyleClasses::new(),
        })
    }

    /// The skin shipped with Voltaic.
    pub fn builtin() -> Self {
        Self::new(BUILTIN_SKIN).expect("built-in skin is well-formed")
    }

    /// Derives (or returns the cached) geometry of `name`.
    ///
    /// Repeated lookups return the same shared value. A failing lookup
    /// leaves the cache and the style table untouched.
    ///
    /// # Errors
    ///
    /// Returns [`SkinError::UnknownSymbol`] if no subtree carries the name,
    /// or a geometry error describing why the subtree cannot be used.
    pub fn symbol(&mut self, name: &str) -> Result<Arc<SymbolSkin>, SkinError> {
        if let Some(skin) = self.cache.get(name) {
            return Ok(Arc::clone(skin));
        }

        let document = Document::parse(&self.source)?;
        let root = document
            .descendants()
            .find(|node| node.attribute(SYMBOL_ATTRIBUTE) == Some(name))
            .ok_or_else(|| SkinError::UnknownSymbol(name.to_string()))?;

        let mut styles = self.styles.clone();
        let skin = Arc::new(build_symbol(name, root, &mut styles)?);
        self.styles = styles;
        self.cache.insert(name.to_string(), Arc::clone(&skin));

        debug!(
            symbol = name,
            width = skin.size.width(),
            height = skin.size.height(),
            terminals_len = skin.terminals.len();
            "Derived symbol skin"
        );
        Ok(skin)
    }

    /// A previously derived symbol.
    pub fn get(&self, name: &str) -> Option<Arc<SymbolSkin>> {
        self.cache.get(name).cloned()
    }

    /// The style classes of every symbol derived so far.
    pub fn style_classes(&self) -> &StyleClasses {
        &self.styles
    }

    /// Names of every symbol defined in the document.
    ///
    /// # Errors
    ///
    /// Returns [`SkinError::Xml`] if the document cannot be parsed.
    pub fn symbol_names(&self) -> Result<Vec<String>, SkinError> {
        let document = Document::parse(&self.source)?;
        Ok(document
            .descendants()
            .filter_map(|node| node.attribute(SYMBOL_ATTRIBUTE))
            .map(str::to_string)
            .collect())
    }
}

fn build_symbol(
    name: &str,
    root: XmlNode<'_, '_>,
    styles: &mut StyleClasses,
) -> Result<SymbolSkin, SkinError> {
    let mut shape = Shape::from_root(name, root)?;

    let bounds = shape.bounds();
    if !bounds.is_finite() {
        return Err(SkinError::EmptyGeometry {
            symbol: name.to_string(),
        });
    }

    let rotations = parse_rotations(name, root.attribute(ROTATIONS_ATTRIBUTE))?;

    let origin = bounds.min_point();
    shape.translate(origin.scale(-1.0), PRECISION);
    let size = Size::new(
        round(bounds.max_x() - bounds.min_x()),
        round(bounds.max_y() - bounds.min_y()),
    );
    trace!(symbol = name, origin:%; "Normalized symbol geometry");

    let mut terminal_paths = Vec::new();
    shape.terminal_paths(&mut terminal_paths);
    let terminals = terminal_paths
        .into_iter()
        .map(|(terminal, path)| {
            terminal::attachment_point(path, size)
                .map(|point| (terminal.to_string(), point))
                .ok_or_else(|| SkinError::UnattachableTerminal {
                    symbol: name.to_string(),
                    terminal: terminal.to_string(),
                })
        })
        .collect::<Result<IndexMap<_, _>, _>>()?;

    shape.assign_classes(styles);

    Ok(SymbolSkin {
        name: name.to_string(),
        shape,
        size,
        terminals,
        rotations,
    })
}

/// Parses `data-rotations`; absent means all four quarter turns.
fn parse_rotations(symbol: &str, attribute: Option<&str>) -> Result<Vec<u8>, SkinError> {
    let Some(text) = attribute else {
        return Ok(vec![0, 1, 2, 3]);
    };

    let mut rotations = Vec::new();
    for value in text.split(',') {
        let step = value
            .trim()
            .parse::<u8>()
            .ok()
            .filter(|step| *step <= 3)
            .ok_or_else(|| SkinError::InvalidRotation {
                symbol: symbol.to_string(),
                value: value.trim().to_string(),
            })?;
        if !rotations.contains(&step) {
            rotations.push(step);
        }
    }
    Ok(rotations)
}

fn round(value: f32) -> f32 {
    (value * PRECISION).round() / PRECISION
}
