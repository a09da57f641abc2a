//! The symbol geometry tree.

use roxmltree::Node as XmlNode;

use voltaic_core::geometry::{Bounds, Point, Size};

use super::{SkinError, TERMINAL_ATTRIBUTE, path::PathData, style::StyleClasses};

/// A drawable primitive or a group of them.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    /// Children in document order; empty groups keep an empty list.
    Group(Vec<Shape>),
    Path(PathData),
    Circle { center: Point, radius: f32 },
    Rect { origin: Point, size: Size },
}

/// One element of a symbol with its retained presentation.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    geometry: Geometry,
    style: Option<String>,
    class: Option<String>,
    terminal: Option<String>,
}

impl Shape {
    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// The normalized inline style.
    pub fn style(&self) -> Option<&str> {
        self.style.as_deref()
    }

    /// The deduplicated style class.
    pub fn class(&self) -> Option<&str> {
        self.class.as_deref()
    }

    /// The terminal this element draws, if tagged.
    pub fn terminal(&self) -> Option<&str> {
        self.terminal.as_deref()
    }

    /// Builds the tree of a symbol root. The root's own `transform` is not
    /// read; normalization re-anchors the symbol anyway.
    pub(super) fn from_root(symbol: &str, root: XmlNode<'_, '_>) -> Result<Self, SkinError> {
        Ok(Self {
            geometry: Geometry::Group(Self::children(symbol, root)?),
            style: root.attribute("style").and_then(StyleClasses::normalize),
            class: None,
            terminal: None,
        })
    }

    fn children(symbol: &str, parent: XmlNode<'_, '_>) -> Result<Vec<Self>, SkinError> {
        let mut children = Vec::new();
        for child in parent.children().filter(XmlNode::is_element) {
            if let Some(shape) = Self::from_element(symbol, child)? {
                children.push(shape);
            }
        }
        Ok(children)
    }

    /// Converts one element; non-drawable elements yield `None`.
    fn from_element(symbol: &str, node: XmlNode<'_, '_>) -> Result<Option<Self>, SkinError> {
        if node.has_attribute("transform") {
            return Err(SkinError::NestedTransform {
                symbol: symbol.to_string(),
            });
        }

        let element = node.tag_name().name();
        let geometry = match element {
            "g" => Geometry::Group(Self::children(symbol, node)?),
            "path" => {
                let data = node.attribute("d").unwrap_or_default();
                let path = PathData::parse(data).map_err(|message| SkinError::PathData {
                    symbol: symbol.to_string(),
                    message,
                })?;
                Geometry::Path(path)
            }
            "circle" => {
                let center = Point::new(
                    number(symbol, node, "cx")?.unwrap_or(0.0),
                    number(symbol, node, "cy")?.unwrap_or(0.0),
                );
                let radius = match number(symbol, node, "r")? {
                    Some(radius) => radius,
                    None => number(symbol, node, "d")?.map(|diameter| diameter / 2.0).ok_or_else(
                        || SkinError::InvalidAttribute {
                            symbol: symbol.to_string(),
                            element: element.to_string(),
                            attribute: "r".to_string(),
                            message: "a circle needs `r` or `d`".to_string(),
                        },
                    )?,
                };
                Geometry::Circle { center, radius }
            }
            "rect" => Geometry::Rect {
                origin: Point::new(
                    number(symbol, node, "x")?.unwrap_or(0.0),
                    number(symbol, node, "y")?.unwrap_or(0.0),
                ),
                size: Size::new(
                    number(symbol, node, "width")?.unwrap_or(0.0),
                    number(symbol, node, "height")?.unwrap_or(0.0),
                ),
            },
            _ => return Ok(None),
        };

        let terminal = node.attribute(TERMINAL_ATTRIBUTE).map(str::to_string);
        if let Some(terminal) = &terminal {
            if !matches!(geometry, Geometry::Path(_)) {
                return Err(SkinError::UnattachableTerminal {
                    symbol: symbol.to_string(),
                    terminal: terminal.clone(),
                });
            }
        }

        Ok(Some(Self {
            geometry,
            style: node.attribute("style").and_then(StyleClasses::normalize),
            class: None,
            terminal,
        }))
    }

    /// Union of the bounds of every primitive in the tree.
    pub fn bounds(&self) -> Bounds {
        match &self.geometry {
            Geometry::Group(children) => children
                .iter()
                .fold(Bounds::empty(), |bounds, child| bounds.merge(&child.bounds())),
            Geometry::Path(path) => path.bounds(),
            Geometry::Circle { center, radius } => Bounds::new(
                center.x() - radius,
                center.y() - radius,
                center.x() + radius,
                center.y() + radius,
            ),
            Geometry::Rect { origin, size } => Bounds::new(
                origin.x(),
                origin.y(),
                origin.x() + size.width(),
                origin.y() + size.height(),
            ),
        }
    }

    /// Moves every coordinate by `offset`, rounding to `1 / precision`.
    pub(super) fn translate(&mut self, offset: Point, precision: f32) {
        match &mut self.geometry {
            Geometry::Group(children) => {
                for child in children {
                    child.translate(offset, precision);
                }
            }
            Geometry::Path(path) => *path = path.translated(offset, precision),
            Geometry::Circle { center, .. } => *center = center.add_point(offset).round_to(precision),
            Geometry::Rect { origin, .. } => *origin = origin.add_point(offset).round_to(precision),
        }
    }

    /// Replaces inline styles by shared class names.
    pub(super) fn assign_classes(&mut self, classes: &mut StyleClasses) {
        self.class = self.style.as_deref().and_then(|style| classes.class_for(style));
        if let Geometry::Group(children) = &mut self.geometry {
            for child in children {
                child.assign_classes(classes);
            }
        }
    }

    /// Tagged terminal paths in document order.
    pub(super) fn terminal_paths<'a>(&'a self, found: &mut Vec<(&'a str, &'a PathData)>) {
        match &self.geometry {
            Geometry::Group(children) => {
                for child in children {
                    child.terminal_paths(found);
                }
            }
            Geometry::Path(path) => {
                if let Some(terminal) = &self.terminal {
                    found.push((terminal.as_str(), path));
                }
            }
            Geometry::Circle { .. } | Geometry::Rect { .. } => {}
        }
    }
}

/// Reads a numeric attribute, accepting a trailing `px`.
fn number(symbol: &str, node: XmlNode<'_, '_>, attribute: &str) -> Result<Option<f32>, SkinError> {
    node.attribute(attribute)
        .map(|text| {
            text.trim()
                .trim_end_matches("px")
                .parse::<f32>()
                .map_err(|err| SkinError::InvalidAttribute {
                    symbol: symbol.to_string(),
                    element: node.tag_name().name().to_string(),
                    attribute: attribute.to_string(),
                    message: err.to_string(),
                })
        })
        .transpose()
}
