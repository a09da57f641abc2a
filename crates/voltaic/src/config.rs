//! Configuration types for Voltaic schematic rendering.
//!
//! All types implement [`serde::Deserialize`] so they can be loaded from
//! TOML. Every field is optional; missing sections fall back to defaults.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration: layout, style and the symbol
//!   library and skin files to load instead of the built-in ones.
//! - [`LayoutConfig`] - Orientation search, flow direction and spacing.
//! - [`StyleConfig`] - Background, wire colour and label font size.
//!
//! # Example
//!
//! ```
//! # use voltaic::config::AppConfig;
//! let config: AppConfig = toml::from_str(
//!     r#"
//!     [layout]
//!     direction = "down"
//!
//!     [style]
//!     background_color = "white"
//!     "#,
//! )
//! .unwrap();
//! assert!(config.layout().optimize());
//! assert!(config.style().background_color().unwrap().is_some());
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use voltaic_core::color::Color;

use crate::layout::{
    LayoutOptions,
    graph::{DIRECTION, Direction, LAYER_SPACING, NODE_SPACING},
};

const DEFAULT_FONT_SIZE: f32 = 12.0;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    layout: LayoutConfig,

    #[serde(default)]
    style: StyleConfig,

    /// Symbol library TOML merged over the built-in library.
    #[serde(default)]
    symbols: Option<PathBuf>,

    /// Skin document replacing the built-in skin.
    #[serde(default)]
    skin: Option<PathBuf>,
}

impl AppConfig {
    pub fn new(layout: LayoutConfig, style: StyleConfig) -> Self {
        Self {
            layout,
            style,
            symbols: None,
            skin: None,
        }
    }

    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    pub fn layout_mut(&mut self) -> &mut LayoutConfig {
        &mut self.layout
    }

    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    pub fn symbols(&self) -> Option<&Path> {
        self.symbols.as_deref()
    }

    pub fn skin(&self) -> Option<&Path> {
        self.skin.as_deref()
    }

    /// Resolves relative symbol and skin paths against `base`, the
    /// directory the configuration file was read from.
    pub fn with_base_dir(mut self, base: &Path) -> Self {
        self.symbols = self.symbols.map(|path| base.join(path));
        self.skin = self.skin.map(|path| base.join(path));
        self
    }
}

/// Layout configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LayoutConfig {
    /// Search symbol orientations; off keeps the reference layout.
    #[serde(default = "default_optimize")]
    optimize: bool,

    #[serde(default)]
    direction: Option<Direction>,

    #[serde(default)]
    node_spacing: Option<f32>,

    #[serde(default)]
    layer_spacing: Option<f32>,
}

fn default_optimize() -> bool {
    true
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            optimize: default_optimize(),
            direction: None,
            node_spacing: None,
            layer_spacing: None,
        }
    }
}

impl LayoutConfig {
    pub fn optimize(&self) -> bool {
        self.optimize
    }

    pub fn set_optimize(&mut self, optimize: bool) {
        self.optimize = optimize;
    }

    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    pub fn node_spacing(&self) -> Option<f32> {
        self.node_spacing
    }

    pub fn layer_spacing(&self) -> Option<f32> {
        self.layer_spacing
    }

    /// Layout options with the configured values as root directives.
    pub fn options(&self, font_size: f32) -> LayoutOptions {
        let mut options = LayoutOptions::default()
            .with_optimize(self.optimize)
            .with_font_size(font_size);
        if let Some(direction) = self.direction {
            options = options.with_directive(DIRECTION, direction.as_str());
        }
        if let Some(spacing) = self.node_spacing {
            options = options.with_directive(NODE_SPACING, spacing.to_string());
        }
        if let Some(spacing) = self.layer_spacing {
            options = options.with_directive(LAYER_SPACING, spacing.to_string());
        }
        options
    }
}

/// Visual styling configuration.
///
/// Colours are kept as strings and parsed on use so a bad value is reported
/// when rendering, with the offending text.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleConfig {
    #[serde(default)]
    background_color: Option<String>,

    #[serde(default)]
    wire_color: Option<String>,

    #[serde(default)]
    font_size: Option<f32>,
}

impl StyleConfig {
    /// Returns the parsed background [`Color`], or `None` for a transparent
    /// background.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured colour cannot be parsed.
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        self.background_color
            .as_ref()
            .map(|color| Color::new(color))
            .transpose()
            .map_err(|err| format!("Invalid background color in config: {err}"))
    }

    /// Returns the parsed wire [`Color`], black by default.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured colour cannot be parsed.
    pub fn wire_color(&self) -> Result<Color, String> {
        self.wire_color
            .as_ref()
            .map_or_else(|| Ok(Color::default()), |color| Color::new(color))
            .map_err(|err| format!("Invalid wire color in config: {err}"))
    }

    /// Label font size in user units.
    pub fn font_size(&self) -> f32 {
        self.font_size.unwrap_or(DEFAULT_FONT_SIZE)
    }
}
