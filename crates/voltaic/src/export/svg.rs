//! SVG rendering of placed schematics.
//!
//! The document carries a `<style>` block built from the skin's style
//! classes, so symbol elements only reference a class. Each symbol is a
//! group whose `matrix()` transform applies the chosen orientation and moves
//! the artwork to its place. Output is grouped by [`RenderLayer`]: wires,
//! then symbols, then junction dots, then text.

use std::io;

use ::svg::{
    Document, Node,
    node::element::{Circle, Group, Path, Polyline, Rectangle, Style, Text},
};
use log::{debug, info};

use voltaic_core::{
    color::Color,
    draw::{LayeredOutput, RenderLayer, SvgNode},
    geometry::Point,
};

use super::ExportError;
use crate::{
    config::StyleConfig,
    layout::{NodeArt, PlacedNode, PlacedSchematic, graph::LayoutLabel},
    skin::{Geometry, Shape},
};

/// Space around the drawing.
const MARGIN: f32 = 20.0;
const WIRE_WIDTH: f32 = 2.0;
const JUNCTION_RADIUS: f32 = 3.0;

/// Renders [`PlacedSchematic`]s to SVG documents.
#[derive(Debug, Clone)]
pub struct SvgRenderer {
    background: Option<Color>,
    wire_color: Color,
    font_size: f32,
}

impl SvgRenderer {
    /// Creates a renderer from the style configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Style`] if a configured colour is invalid.
    pub fn new(style: &StyleConfig) -> Result<Self, ExportError> {
        Ok(Self {
            background: style.background_color().map_err(ExportError::Style)?,
            wire_color: style.wire_color().map_err(ExportError::Style)?,
            font_size: style.font_size(),
        })
    }

    /// Builds the SVG document.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::NonFinite`] if a node or wire has a
    /// non-finite coordinate.
    pub fn render(&self, placed: &PlacedSchematic) -> Result<Document, ExportError> {
        Self::check_finite(placed)?;

        let bounds = placed.bounds();
        let (x, y, width, height) = if bounds.is_finite() {
            (
                bounds.min_x() - MARGIN,
                bounds.min_y() - MARGIN,
                bounds.width() + 2.0 * MARGIN,
                bounds.height() + 2.0 * MARGIN,
            )
        } else {
            (0.0, 0.0, 2.0 * MARGIN, 2.0 * MARGIN)
        };

        let mut output = LayeredOutput::new();
        if let Some(background) = &self.background {
            let rect = Rectangle::new()
                .set("x", x)
                .set("y", y)
                .set("width", width)
                .set("height", height)
                .set("fill", background);
            output.add_to_layer(RenderLayer::Background, Box::new(rect));
        }
        for node in placed.nodes() {
            output.merge(self.render_node(node));
        }
        for wire in placed.wires() {
            let points = wire
                .points()
                .iter()
                .map(|point| format!("{},{}", point.x(), point.y()))
                .collect::<Vec<_>>()
                .join(" ");
            output.add_to_layer(
                RenderLayer::Wire,
                Box::new(Polyline::new().set("class", "wire").set("points", points)),
            );
            for junction in wire.junctions() {
                let dot = Circle::new()
                    .set("class", "junction")
                    .set("cx", junction.x())
                    .set("cy", junction.y())
                    .set("r", JUNCTION_RADIUS);
                output.add_to_layer(RenderLayer::Junction, Box::new(dot));
            }
        }

        let mut document = Document::new()
            .set("viewBox", (x, y, width, height))
            .set("width", width)
            .set("height", height)
            .add(Style::new(self.stylesheet(placed)));
        for group in output.render() {
            document = document.add(group);
        }

        info!(
            nodes_len = placed.nodes().len(),
            wires_len = placed.wires().len();
            "Rendered SVG"
        );
        Ok(document)
    }

    /// Renders to a string.
    ///
    /// # Errors
    ///
    /// See [`SvgRenderer::render`].
    pub fn render_to_string(&self, placed: &PlacedSchematic) -> Result<String, ExportError> {
        Ok(self.render(placed)?.to_string())
    }

    /// Renders into `writer`.
    ///
    /// # Errors
    ///
    /// See [`SvgRenderer::render`]; also fails if writing fails.
    pub fn write(&self, placed: &PlacedSchematic, writer: impl io::Write) -> Result<(), ExportError> {
        ::svg::write(writer, &self.render(placed)?)?;
        Ok(())
    }

    fn stylesheet(&self, placed: &PlacedSchematic) -> String {
        let mut css = format!(
            ".wire{{fill:none;stroke:{wire};stroke-width:{WIRE_WIDTH};stroke-linejoin:round}}\n\
             .junction{{fill:{wire};stroke:none}}\n\
             .box{{fill:none;stroke:#000;stroke-width:{WIRE_WIDTH}}}\n\
             text{{font-family:sans-serif;font-size:{size}px}}\n",
            wire = self.wire_color,
            size = self.font_size,
        );
        for (class, style) in placed.styles().iter() {
            css.push_str(&format!(".{class}{{{style}}}\n"));
        }
        css
    }

    fn render_node(&self, node: &PlacedNode) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        match node.art() {
            NodeArt::Symbol {
                skin,
                origin,
                orientation,
            } => {
                let [a, b, c, d, e, f] = orientation.matrix(skin.size());
                debug!(node = node.name(), orientation:%; "Rendering symbol");
                let group = Group::new()
                    .set("data-node", node.name())
                    .set(
                        "transform",
                        format!("matrix({a} {b} {c} {d} {} {})", e + origin.x(), f + origin.y()),
                    )
                    .add(render_shape(skin.shape()));
                output.add_to_layer(RenderLayer::Symbol, Box::new(group));
            }
            NodeArt::Boxed => {
                let rect = Rectangle::new()
                    .set("class", "box")
                    .set("data-node", node.name())
                    .set("x", node.position().x())
                    .set("y", node.position().y())
                    .set("width", node.size().width())
                    .set("height", node.size().height());
                output.add_to_layer(RenderLayer::Symbol, Box::new(rect));
            }
        }

        let labels = node
            .labels()
            .iter()
            .chain(node.ports().iter().flat_map(|port| port.labels()));
        for label in labels {
            output.add_to_layer(RenderLayer::Text, render_label(label));
        }
        output
    }

    fn check_finite(placed: &PlacedSchematic) -> Result<(), ExportError> {
        for node in placed.nodes() {
            let mut points = std::iter::once(node.position())
                .chain(node.ports().iter().map(|port| port.position()));
            if !points.all(Point::is_finite) {
                return Err(ExportError::NonFinite(format!("node `{}`", node.name())));
            }
        }
        for (index, wire) in placed.wires().iter().enumerate() {
            if !wire.points().iter().copied().all(Point::is_finite) {
                return Err(ExportError::NonFinite(format!("wire {index}")));
            }
        }
        Ok(())
    }
}

fn render_shape(shape: &Shape) -> SvgNode {
    match shape.geometry() {
        Geometry::Group(children) => decorated(
            children
                .iter()
                .fold(Group::new(), |group, child| group.add(render_shape(child))),
            shape,
        ),
        Geometry::Path(data) => decorated(Path::new().set("d", data.to_data()), shape),
        Geometry::Circle { center, radius } => decorated(
            Circle::new()
                .set("cx", center.x())
                .set("cy", center.y())
                .set("r", *radius),
            shape,
        ),
        Geometry::Rect { origin, size } => decorated(
            Rectangle::new()
                .set("x", origin.x())
                .set("y", origin.y())
                .set("width", size.width())
                .set("height", size.height()),
            shape,
        ),
    }
}

/// Adds the shape's style class and terminal tag.
fn decorated<T: Node>(mut element: T, shape: &Shape) -> SvgNode {
    if let Some(class) = shape.class() {
        element.assign("class", class);
    }
    if let Some(terminal) = shape.terminal() {
        element.assign("data-terminal", terminal);
    }
    Box::new(element)
}

/// A label centered in its box.
fn render_label(label: &LayoutLabel) -> SvgNode {
    let center = label.position.add_point(label.size.center());
    Box::new(
        Text::new(label.text.as_str())
            .set("x", center.x())
            .set("y", center.y())
            .set("text-anchor", "middle")
            .set("dominant-baseline", "central"),
    )
}

#[cfg(test)]
mod tests {
    use voltaic_core::geometry::Bounds;

    use super::*;
    use crate::{SchematicBuilder, config::AppConfig};

    fn view_box(document: &str) -> Option<Bounds> {
        let start = document.find("viewBox=\"")? + "viewBox=\"".len();
        let end = start + document[start..].find('"')?;
        let values: Vec<f32> = document[start..end]
            .split_whitespace()
            .map(str::parse)
            .collect::<Result<_, _>>()
            .ok()?;
        let [x, y, width, height] = values.as_slice() else {
            return None;
        };
        Some(Bounds::new(*x, *y, x + width, y + height))
    }

    fn render(source: &str, style: &str) -> String {
        let builder = SchematicBuilder::default();
        let placed = builder
            .layout(&builder.compile(&builder.parse(source).unwrap()).unwrap())
            .unwrap();
        let style: StyleConfig = toml::from_str(style).unwrap();
        SvgRenderer::new(&style)
            .unwrap()
            .render_to_string(&placed)
            .unwrap()
    }

    #[test]
    fn test_symbols_reference_style_classes() {
        let svg = render("in - [R1:10k] - gnd", "");
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(".s0{"));
        assert!(svg.contains("class=\"s0\""));
        assert!(svg.contains("data-node=\"R1\""));
        assert!(svg.contains("transform=\"matrix("));
        assert!(svg.contains("class=\"wire\""));
        assert!(svg.contains(">10k<"));
        assert!(!svg.contains("style=\""));
    }

    #[test]
    fn test_layers_are_ordered() {
        let svg = render("[R1] - [R2]", "");
        let wire = svg.find("data-layer=\"wire\"").unwrap();
        let symbol = svg.find("data-layer=\"symbol\"").unwrap();
        let text = svg.find("data-layer=\"text\"").unwrap();
        assert!(wire < symbol && symbol < text);
    }

    #[test]
    fn test_junction_dots_on_shared_ports() {
        let svg = render("[R1] - [R2]\n[R1] - [R3]", "");
        assert_eq!(svg.matches("class=\"junction\"").count(), 1);
    }

    #[test]
    fn test_background_and_wire_color() {
        let svg = render("[R1]", "background_color = \"white\"\nwire_color = \"red\"");
        assert!(svg.contains("data-layer=\"background\""));
        assert!(svg.contains("stroke:red") || svg.contains("stroke:rgb"));
    }

    #[test]
    fn test_boxed_symbols_render_as_rectangles() {
        let svg = render("in - inp.[U1]\n[U1].out - out", "");
        assert!(svg.contains("class=\"box\""));
        assert!(svg.contains(">vee<"));
    }

    #[test]
    fn test_view_box_contains_drawing() {
        let builder = SchematicBuilder::new(AppConfig::default());
        let statements = builder.parse("[R1] - [C1]").unwrap();
        let placed = builder
            .layout(&builder.compile(&statements).unwrap())
            .unwrap();
        let svg = SvgRenderer::new(&StyleConfig::default())
            .unwrap()
            .render_to_string(&placed)
            .unwrap();
        let view = view_box(&svg).unwrap();
        let drawing = placed.bounds();
        assert!(view.min_x() < drawing.min_x() && view.max_x() > drawing.max_x());
        assert!(view.min_y() < drawing.min_y() && view.max_y() > drawing.max_y());
    }

    #[test]
    fn test_empty_schematic_renders() {
        let svg = render("", "");
        assert_eq!(view_box(&svg), Some(Bounds::new(0.0, 0.0, 40.0, 40.0)));
    }

    #[test]
    fn test_invalid_style_is_rejected() {
        let style: StyleConfig = toml::from_str("wire_color = \"nope\"").unwrap();
        assert!(matches!(
            SvgRenderer::new(&style),
            Err(ExportError::Style(_))
        ));
    }
}
