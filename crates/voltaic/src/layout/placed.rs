//! The fully positioned schematic handed to renderers.

use std::sync::Arc;

use voltaic_core::geometry::{Bounds, Point, Size};

use crate::{
    compiler::NodeId,
    skin::{StyleClasses, SymbolSkin},
};

use super::{graph::LayoutLabel, transform::Orientation};

/// How a placed node is drawn.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeArt {
    /// Symbol artwork transformed by `orientation` and moved to `origin`.
    Symbol {
        skin: Arc<SymbolSkin>,
        origin: Point,
        orientation: Orientation,
    },
    /// A plain box with labeled pins.
    Boxed,
}

/// A terminal of a placed node.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedPort {
    name: String,
    position: Point,
    labels: Vec<LayoutLabel>,
}

impl PlacedPort {
    pub(super) fn new(name: String, position: Point, labels: Vec<LayoutLabel>) -> Self {
        Self {
            name,
            position,
            labels,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Absolute attachment point.
    pub fn position(&self) -> Point {
        self.position
    }

    /// Pin labels with absolute positions.
    pub fn labels(&self) -> &[LayoutLabel] {
        &self.labels
    }
}

/// A node with its final box, orientation and labels.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedNode {
    pub(super) id: NodeId,
    pub(super) name: String,
    pub(super) symbol: String,
    pub(super) position: Point,
    pub(super) size: Size,
    pub(super) art: NodeArt,
    pub(super) labels: Vec<LayoutLabel>,
    pub(super) ports: Vec<PlacedPort>,
}

impl PlacedNode {
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Absolute top-left corner of the node box.
    pub fn position(&self) -> Point {
        self.position
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn art(&self) -> &NodeArt {
        &self.art
    }

    /// The applied orientation; boxed nodes are never turned.
    pub fn orientation(&self) -> Orientation {
        match &self.art {
            NodeArt::Symbol { orientation, .. } => *orientation,
            NodeArt::Boxed => Orientation::default(),
        }
    }

    /// Node labels with absolute positions.
    pub fn labels(&self) -> &[LayoutLabel] {
        &self.labels
    }

    pub fn ports(&self) -> &[PlacedPort] {
        &self.ports
    }

    pub fn port(&self, name: &str) -> Option<&PlacedPort> {
        self.ports.iter().find(|port| port.name == name)
    }

    /// Box and labels.
    pub fn bounds(&self) -> Bounds {
        let bounds = Bounds::new(
            self.position.x(),
            self.position.y(),
            self.position.x() + self.size.width(),
            self.position.y() + self.size.height(),
        );
        self.labels
            .iter()
            .chain(self.ports.iter().flat_map(|port| port.labels.iter()))
            .fold(bounds, |bounds, label| bounds.merge(&label_bounds(label)))
    }
}

/// A routed wire.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedWire {
    source: NodeId,
    source_terminal: String,
    target: NodeId,
    target_terminal: String,
    points: Vec<Point>,
    junctions: Vec<Point>,
}

impl PlacedWire {
    pub(super) fn new(
        source: (NodeId, String),
        target: (NodeId, String),
        points: Vec<Point>,
        junctions: Vec<Point>,
    ) -> Self {
        Self {
            source: source.0,
            source_terminal: source.1,
            target: target.0,
            target_terminal: target.1,
            points,
            junctions,
        }
    }

    pub fn source(&self) -> NodeId {
        self.source
    }

    pub fn source_terminal(&self) -> &str {
        &self.source_terminal
    }

    pub fn target(&self) -> NodeId {
        self.target
    }

    pub fn target_terminal(&self) -> &str {
        &self.target_terminal
    }

    /// Absolute polyline from source to target.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn junctions(&self) -> &[Point] {
        &self.junctions
    }
}

/// The output of the layout pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedSchematic {
    nodes: Vec<PlacedNode>,
    wires: Vec<PlacedWire>,
    styles: StyleClasses,
}

impl PlacedSchematic {
    pub(super) fn new(nodes: Vec<PlacedNode>, wires: Vec<PlacedWire>, styles: StyleClasses) -> Self {
        Self {
            nodes,
            wires,
            styles,
        }
    }

    /// Nodes in schematic order.
    pub fn nodes(&self) -> &[PlacedNode] {
        &self.nodes
    }

    pub fn node(&self, name: &str) -> Option<&PlacedNode> {
        self.nodes.iter().find(|node| node.name == name)
    }

    pub fn wires(&self) -> &[PlacedWire] {
        &self.wires
    }

    /// Style classes referenced by the symbol artwork.
    pub fn styles(&self) -> &StyleClasses {
        &self.styles
    }

    /// Everything drawn; empty for an empty schematic.
    pub fn bounds(&self) -> Bounds {
        let nodes = self
            .nodes
            .iter()
            .fold(Bounds::empty(), |bounds, node| bounds.merge(&node.bounds()));
        self.wires
            .iter()
            .flat_map(|wire| wire.points.iter())
            .fold(nodes, |bounds, point| bounds.include(*point))
    }
}

fn label_bounds(label: &LayoutLabel) -> Bounds {
    Bounds::new(
        label.position.x(),
        label.position.y(),
        label.position.x() + label.size.width(),
        label.position.y() + label.size.height(),
    )
}
