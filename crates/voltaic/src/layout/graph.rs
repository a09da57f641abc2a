//! The graph exchanged with a layout engine.
//!
//! A request carries node sizes, ports, labels and directives; the engine
//! answers with the same graph where every node has a position, every free
//! port and label has been placed, and every edge has a route. Node
//! positions and routes are absolute; port and label positions are relative
//! to the node that owns them.

use std::fmt;

use indexmap::IndexMap;
use serde::Deserialize;

use voltaic_core::geometry::{Point, Side, Size};

use super::LayoutError;

/// Port constraint of a node: [`PortConstraints`].
pub const PORT_CONSTRAINTS: &str = "layout.portConstraints";
/// Side of a port whose node is [`PortConstraints::FixedSide`].
pub const PORT_SIDE: &str = "layout.port.side";
/// Where a node's labels go: [`LabelPlacement`].
pub const NODE_LABELS_PLACEMENT: &str = "layout.nodeLabels.placement";
/// Flow direction of the whole graph: [`Direction`].
pub const DIRECTION: &str = "layout.direction";
/// Gap between nodes of one layer.
pub const NODE_SPACING: &str = "layout.spacing.node";
/// Gap between consecutive layers.
pub const LAYER_SPACING: &str = "layout.spacing.layer";

/// Free-form `key = value` layout options.
pub type Directives = IndexMap<String, String>;

/// How an engine may move a node's ports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PortConstraints {
    /// The engine picks side and position.
    #[default]
    Free,
    /// Each port names its side; the engine picks the position along it.
    FixedSide,
    /// Port positions are final.
    FixedPos,
}

impl PortConstraints {
    pub fn as_str(self) -> &'static str {
        match self {
            PortConstraints::Free => "FREE",
            PortConstraints::FixedSide => "FIXED_SIDE",
            PortConstraints::FixedPos => "FIXED_POS",
        }
    }

    pub fn from_directive(value: &str) -> Option<Self> {
        match value {
            "FREE" => Some(PortConstraints::Free),
            "FIXED_SIDE" => Some(PortConstraints::FixedSide),
            "FIXED_POS" => Some(PortConstraints::FixedPos),
            _ => None,
        }
    }
}

/// Main flow direction of a layered layout.
///
/// Configuration files spell it in lowercase: `direction = "down"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Right,
    Down,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Right => "RIGHT",
            Direction::Down => "DOWN",
        }
    }

    pub fn from_directive(value: &str) -> Option<Self> {
        match value {
            "RIGHT" => Some(Direction::Right),
            "DOWN" => Some(Direction::Down),
            _ => None,
        }
    }

    /// The side wires enter from.
    pub fn leading_side(self) -> Side {
        match self {
            Direction::Right => Side::West,
            Direction::Down => Side::North,
        }
    }

    /// The side wires leave from.
    pub fn trailing_side(self) -> Side {
        match self {
            Direction::Right => Side::East,
            Direction::Down => Side::South,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where node labels are placed relative to the node box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelPlacement {
    Outside(Side),
    /// Above the box, aligned with its left edge.
    TopLeft,
}

impl LabelPlacement {
    pub fn as_str(self) -> &'static str {
        match self {
            LabelPlacement::Outside(side) => side.as_str(),
            LabelPlacement::TopLeft => "TOP_LEFT",
        }
    }

    pub fn from_directive(value: &str) -> Option<Self> {
        match value {
            "TOP_LEFT" => Some(LabelPlacement::TopLeft),
            side => Side::from_directive(side).map(LabelPlacement::Outside),
        }
    }
}

impl Default for LabelPlacement {
    fn default() -> Self {
        LabelPlacement::Outside(Side::North)
    }
}

/// A text label with its measured size.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutLabel {
    pub text: String,
    /// Top-left corner relative to the owning node.
    pub position: Point,
    pub size: Size,
}

impl LayoutLabel {
    pub fn new(text: impl Into<String>, size: Size) -> Self {
        Self {
            text: text.into(),
            position: Point::default(),
            size,
        }
    }
}

/// A connection point on a node's box.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutPort {
    pub id: String,
    /// Relative to the owning node's top-left corner.
    pub position: Point,
    pub labels: Vec<LayoutLabel>,
    pub directives: Directives,
}

impl LayoutPort {
    pub fn new(id: impl Into<String>, position: Point) -> Self {
        Self {
            id: id.into(),
            position,
            labels: Vec::new(),
            directives: Directives::new(),
        }
    }

    /// The side given by [`PORT_SIDE`].
    pub fn side_directive(&self) -> Result<Option<Side>, LayoutError> {
        self.directives
            .get(PORT_SIDE)
            .map(|value| {
                Side::from_directive(value).ok_or_else(|| LayoutError::InvalidDirective {
                    key: PORT_SIDE.to_string(),
                    value: value.clone(),
                })
            })
            .transpose()
    }
}

/// A box with ports.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutNode {
    pub id: String,
    /// Absolute top-left corner; set by the engine.
    pub position: Point,
    pub size: Size,
    pub ports: Vec<LayoutPort>,
    pub labels: Vec<LayoutLabel>,
    pub directives: Directives,
}

impl LayoutNode {
    pub fn new(id: impl Into<String>, size: Size) -> Self {
        Self {
            id: id.into(),
            position: Point::default(),
            size,
            ports: Vec::new(),
            labels: Vec::new(),
            directives: Directives::new(),
        }
    }

    pub fn port(&self, id: &str) -> Option<&LayoutPort> {
        self.ports.iter().find(|port| port.id == id)
    }

    /// The constraint given by [`PORT_CONSTRAINTS`], free when absent.
    pub fn port_constraints(&self) -> Result<PortConstraints, LayoutError> {
        directive(&self.directives, PORT_CONSTRAINTS, PortConstraints::from_directive)
            .map(Option::unwrap_or_default)
    }

    /// The placement given by [`NODE_LABELS_PLACEMENT`].
    pub fn label_placement(&self) -> Result<LabelPlacement, LayoutError> {
        directive(
            &self.directives,
            NODE_LABELS_PLACEMENT,
            LabelPlacement::from_directive,
        )
        .map(Option::unwrap_or_default)
    }
}

/// One end of an edge.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PortRef {
    pub node: String,
    pub port: String,
}

impl PortRef {
    pub fn new(node: impl Into<String>, port: impl Into<String>) -> Self {
        Self {
            node: node.into(),
            port: port.into(),
        }
    }
}

impl fmt::Display for PortRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.node, self.port)
    }
}

/// A wire between two ports.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutEdge {
    pub id: String,
    pub source: PortRef,
    pub target: PortRef,
    /// Absolute polyline from source to target; set by the engine.
    pub route: Vec<Point>,
    /// Points where this route meets others on a shared port.
    pub junctions: Vec<Point>,
}

impl LayoutEdge {
    pub fn new(id: impl Into<String>, source: PortRef, target: PortRef) -> Self {
        Self {
            id: id.into(),
            source,
            target,
            route: Vec::new(),
            junctions: Vec::new(),
        }
    }
}

/// The root of a layout request or response.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutGraph {
    pub directives: Directives,
    pub children: Vec<LayoutNode>,
    pub edges: Vec<LayoutEdge>,
}

impl LayoutGraph {
    pub fn node(&self, id: &str) -> Option<&LayoutNode> {
        self.children.iter().find(|node| node.id == id)
    }

    /// The node named `id`, or [`LayoutError::UnknownNode`].
    pub fn require_node(&self, id: &str) -> Result<&LayoutNode, LayoutError> {
        self.node(id)
            .ok_or_else(|| LayoutError::UnknownNode(id.to_string()))
    }

    pub fn edge(&self, id: &str) -> Option<&LayoutEdge> {
        self.edges.iter().find(|edge| edge.id == id)
    }

    /// The edge named `id`, or [`LayoutError::UnknownEdge`].
    pub fn require_edge(&self, id: &str) -> Result<&LayoutEdge, LayoutError> {
        self.edge(id)
            .ok_or_else(|| LayoutError::UnknownEdge(id.to_string()))
    }

    /// The flow direction given by [`DIRECTION`].
    pub fn direction(&self) -> Result<Direction, LayoutError> {
        directive(&self.directives, DIRECTION, Direction::from_directive)
            .map(Option::unwrap_or_default)
    }

    /// A numeric root directive.
    pub fn spacing(&self, key: &str) -> Result<Option<f32>, LayoutError> {
        directive(&self.directives, key, |value| {
            value.parse::<f32>().ok().filter(|spacing| *spacing >= 0.0)
        })
    }
}

fn directive<T>(
    directives: &Directives,
    key: &str,
    parse: impl Fn(&str) -> Option<T>,
) -> Result<Option<T>, LayoutError> {
    directives
        .get(key)
        .map(|value| {
            parse(value).ok_or_else(|| LayoutError::InvalidDirective {
                key: key.to_string(),
                value: value.clone(),
            })
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directive_round_trip_names() {
        for constraints in [
            PortConstraints::Free,
            PortConstraints::FixedSide,
            PortConstraints::FixedPos,
        ] {
            assert_eq!(
                PortConstraints::from_directive(constraints.as_str()),
                Some(constraints)
            );
        }
        assert_eq!(
            LabelPlacement::from_directive("WEST"),
            Some(LabelPlacement::Outside(Side::West))
        );
        assert_eq!(
            LabelPlacement::from_directive("TOP_LEFT"),
            Some(LabelPlacement::TopLeft)
        );
    }

    #[test]
    fn test_missing_directives_use_defaults() {
        let node = LayoutNode::new("R1", Size::new(10.0, 10.0));
        assert_eq!(node.port_constraints().unwrap(), PortConstraints::Free);
        assert_eq!(
            node.label_placement().unwrap(),
            LabelPlacement::Outside(Side::North)
        );
        assert_eq!(LayoutGraph::default().direction().unwrap(), Direction::Right);
    }

    #[test]
    fn test_invalid_directive() {
        let mut graph = LayoutGraph::default();
        graph
            .directives
            .insert(DIRECTION.to_string(), "SIDEWAYS".to_string());
        assert!(matches!(
            graph.direction(),
            Err(LayoutError::InvalidDirective { key, .. }) if key == DIRECTION
        ));

        graph
            .directives
            .insert(NODE_SPACING.to_string(), "-3".to_string());
        assert!(graph.spacing(NODE_SPACING).is_err());
    }
}
