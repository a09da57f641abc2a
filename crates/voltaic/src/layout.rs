//! Layout orchestration.
//!
//! [`Layouter`] turns a resolved [`Schematic`] into a [`PlacedSchematic`] by
//! running a [`LayoutEngine`] twice:
//!
//! 1. The reference pass. Every symbol is a square box (so a quarter turn
//!    keeps its footprint) whose ports the engine may place freely. A
//!    two-terminal symbol whose terminals both sit on its top or bottom
//!    edge gets its ports pinned west and east instead.
//! 2. The orientation search ([`choose_orientation`]) compares each
//!    symbol's real terminal positions, turned and mirrored, against the
//!    reference ports and keeps the closest orientation.
//! 3. The final pass. Boxes take their real oriented size, ports are fixed
//!    at the oriented terminals and node labels go on a side without
//!    terminals.
//!
//! Boxed symbols have no artwork: they are sized from their pin names and
//! their ports stay free in both passes.
//!
//! With optimization disabled the reference pass is the result.

mod engine;
pub mod graph;
mod layered;
mod optimizer;
mod placed;
mod text;
mod transform;

pub use engine::LayoutEngine;
pub use layered::LayeredEngine;
pub use optimizer::{Choice, choose_orientation};
pub use placed::{NodeArt, PlacedNode, PlacedPort, PlacedSchematic, PlacedWire};
pub use text::text_size;
pub use transform::Orientation;

use std::sync::Arc;

use log::{debug, info};
use thiserror::Error;

use voltaic_core::geometry::{Point, Side, Size};

use crate::{
    compiler::{Node, NodeId, Schematic},
    library::SymbolLibrary,
    skin::{Skin, SkinError, SymbolSkin},
};

use graph::{
    Directives, LabelPlacement, LayoutEdge, LayoutGraph, LayoutLabel, LayoutNode, LayoutPort,
    NODE_LABELS_PLACEMENT, PORT_CONSTRAINTS, PORT_SIDE, PortConstraints, PortRef,
};

/// Vertical distance between pins of a boxed symbol.
const PIN_PITCH: f32 = 20.0;
/// Space between a boxed symbol's pin labels and its sides.
const BOX_PADDING: f32 = 8.0;
const BOX_MIN_WIDTH: f32 = 40.0;

/// Errors raised while laying out a schematic.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error(transparent)]
    Skin(#[from] SkinError),

    #[error("Node `{node}` uses symbol `{symbol}` which is not in the symbol library")]
    UnknownSymbol { node: String, symbol: String },

    #[error("Symbol `{symbol}` has no artwork for terminal `{terminal}`")]
    MissingTerminal { symbol: String, terminal: String },

    #[error("Layout graph has no node `{0}`")]
    UnknownNode(String),

    #[error("Layout graph has no edge `{0}`")]
    UnknownEdge(String),

    #[error("Node `{node}` has no port `{port}`")]
    UnknownPort { node: String, port: String },

    #[error("Node `{node}` has {expected} ports but the layout returned {found}")]
    PortCountMismatch {
        node: String,
        expected: usize,
        found: usize,
    },

    #[error("Invalid layout directive `{key}={value}`")]
    InvalidDirective { key: String, value: String },
}

/// Options of the layout pipeline.
#[derive(Debug, Clone)]
pub struct LayoutOptions {
    optimize: bool,
    font_size: f32,
    directives: Directives,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            optimize: true,
            font_size: 12.0,
            directives: Directives::new(),
        }
    }
}

impl LayoutOptions {
    /// Whether to search symbol orientations and run the final pass.
    pub fn with_optimize(mut self, optimize: bool) -> Self {
        self.optimize = optimize;
        self
    }

    /// Font size labels are measured with.
    pub fn with_font_size(mut self, font_size: f32) -> Self {
        self.font_size = font_size;
        self
    }

    /// A root directive; `set` statements of the schematic take precedence.
    pub fn with_directive(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.directives.insert(key.into(), value.into());
        self
    }

    pub fn optimize(&self) -> bool {
        self.optimize
    }

    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    pub fn directives(&self) -> &Directives {
        &self.directives
    }
}

/// What a node looks like before layout.
#[derive(Debug)]
enum Art {
    /// Artwork with terminal positions in library order.
    Symbol {
        skin: Arc<SymbolSkin>,
        terminals: Vec<(String, Point)>,
    },
    Boxed { size: Size, pins: Vec<String> },
}

/// Everything the passes need to know about one node.
#[derive(Debug)]
struct NodePlan {
    id: NodeId,
    name: String,
    symbol: String,
    labels: Vec<String>,
    art: Art,
}

/// Runs the two-pass layout with orientation search.
pub struct Layouter<'a> {
    engine: &'a dyn LayoutEngine,
    options: LayoutOptions,
}

impl<'a> Layouter<'a> {
    pub fn new(engine: &'a dyn LayoutEngine, options: LayoutOptions) -> Self {
        Self { engine, options }
    }

    /// Lays out `schematic`.
    ///
    /// Symbols are looked up in `library` and their artwork derived from
    /// `skin`, which caches every symbol it loads.
    ///
    /// # Errors
    ///
    /// Returns a [`LayoutError`] if a symbol or its artwork is missing or
    /// invalid, or the engine fails.
    pub fn layout(
        &self,
        schematic: &Schematic,
        library: &SymbolLibrary,
        skin: &mut Skin,
    ) -> Result<PlacedSchematic, LayoutError> {
        let plans = schematic
            .node_ids()
            .map(|id| self.plan(id, schematic.node(id), library, skin))
            .collect::<Result<Vec<_>, _>>()?;

        info!(nodes_len = plans.len(), edges_len = schematic.edges().len(); "Running reference layout");
        let reference = self
            .engine
            .layout(self.reference_graph(schematic, &plans))?;

        if !self.options.optimize {
            info!("Orientation search disabled, using reference layout");
            return self.place(schematic, &plans, &reference, None, skin);
        }

        let orientations = plans
            .iter()
            .map(|plan| Self::orientation(plan, &reference))
            .collect::<Result<Vec<_>, _>>()?;

        info!("Running final layout");
        let placed = self
            .engine
            .layout(self.final_graph(schematic, &plans, &reference, &orientations)?)?;
        self.place(schematic, &plans, &placed, Some(&orientations), skin)
    }

    fn plan(
        &self,
        id: NodeId,
        node: &Node,
        library: &SymbolLibrary,
        skin: &mut Skin,
    ) -> Result<NodePlan, LayoutError> {
        let name = node.name();
        let symbol = node.symbol().to_string();
        let info = library
            .get(&symbol)
            .ok_or_else(|| LayoutError::UnknownSymbol {
                node: name.clone(),
                symbol: symbol.clone(),
            })?;

        let art = if info.is_boxed() {
            Art::Boxed {
                size: self.box_size(info.terminals()),
                pins: info.terminals().to_vec(),
            }
        } else {
            let symbol_skin = skin.symbol(&symbol)?;
            let terminals = info
                .terminals()
                .iter()
                .map(|terminal| {
                    symbol_skin
                        .terminal(terminal)
                        .map(|point| (terminal.clone(), point))
                        .ok_or_else(|| LayoutError::MissingTerminal {
                            symbol: symbol.clone(),
                            terminal: terminal.clone(),
                        })
                })
                .collect::<Result<Vec<_>, _>>()?;
            Art::Symbol {
                skin: symbol_skin,
                terminals,
            }
        };

        let labels = match node {
            Node::Component(_) => std::iter::once(name.clone()).chain(node.label()).collect(),
            Node::Port(_) => node.label().into_iter().collect(),
        };

        Ok(NodePlan {
            id,
            name,
            symbol,
            labels,
            art,
        })
    }

    /// Two pin columns wide enough for the longest pin name.
    fn box_size(&self, pins: &[String]) -> Size {
        let widest = pins
            .iter()
            .map(|pin| text_size(pin, self.options.font_size).width())
            .fold(0.0, f32::max);
        let rows = pins.len().div_ceil(2) as f32;
        Size::new(
            (2.0 * widest + 3.0 * BOX_PADDING).max(BOX_MIN_WIDTH),
            (rows + 1.0) * PIN_PITCH,
        )
    }

    fn labels(&self, texts: &[String]) -> Vec<LayoutLabel> {
        texts
            .iter()
            .map(|text| LayoutLabel::new(text.clone(), text_size(text, self.options.font_size)))
            .collect()
    }

    fn root_directives(&self, schematic: &Schematic) -> Directives {
        let mut directives = self.options.directives.clone();
        directives.extend(
            schematic
                .directives()
                .iter()
                .map(|(key, value)| (key.clone(), value.clone())),
        );
        directives
    }

    fn edges(schematic: &Schematic, plans: &[NodePlan]) -> Vec<LayoutEdge> {
        schematic
            .edges()
            .iter()
            .enumerate()
            .map(|(index, edge)| {
                LayoutEdge::new(
                    edge_id(index),
                    PortRef::new(&plans[edge.source().index()].name, edge.source_terminal()),
                    PortRef::new(&plans[edge.target().index()].name, edge.target_terminal()),
                )
            })
            .collect()
    }

    fn reference_graph(&self, schematic: &Schematic, plans: &[NodePlan]) -> LayoutGraph {
        LayoutGraph {
            directives: self.root_directives(schematic),
            children: plans.iter().map(|plan| self.reference_node(plan)).collect(),
            edges: Self::edges(schematic, plans),
        }
    }

    fn reference_node(&self, plan: &NodePlan) -> LayoutNode {
        match &plan.art {
            Art::Symbol { skin, terminals } => {
                let size = skin.size();
                let square = size.to_square();
                let offset = square.center().sub_point(size.center());

                let mut node = LayoutNode::new(&plan.name, square);
                node.labels = self.labels(&plan.labels);
                node.ports = terminals
                    .iter()
                    .map(|(terminal, point)| LayoutPort::new(terminal, point.add_point(offset)))
                    .collect();

                let constraints = match lateral_sides(terminals, size) {
                    Some(sides) => {
                        for (port, side) in node.ports.iter_mut().zip(sides) {
                            port.directives
                                .insert(PORT_SIDE.to_string(), side.as_str().to_string());
                        }
                        debug!(node = plan.name.as_str(); "Pinned two-terminal ports west and east");
                        PortConstraints::FixedSide
                    }
                    None => PortConstraints::Free,
                };
                node.directives.insert(
                    PORT_CONSTRAINTS.to_string(),
                    constraints.as_str().to_string(),
                );
                node
            }
            Art::Boxed { size, pins } => self.boxed_node(plan, *size, pins, None),
        }
    }

    /// A boxed node; `placement` sets its label side.
    fn boxed_node(
        &self,
        plan: &NodePlan,
        size: Size,
        pins: &[String],
        placement: Option<LabelPlacement>,
    ) -> LayoutNode {
        let mut node = LayoutNode::new(&plan.name, size);
        node.labels = self.labels(&plan.labels);
        node.ports = pins
            .iter()
            .map(|pin| {
                let mut port = LayoutPort::new(pin, size.center());
                port.labels = self.labels(std::slice::from_ref(pin));
                port
            })
            .collect();
        node.directives.insert(
            PORT_CONSTRAINTS.to_string(),
            PortConstraints::Free.as_str().to_string(),
        );
        if let Some(placement) = placement {
            node.directives.insert(
                NODE_LABELS_PLACEMENT.to_string(),
                placement.as_str().to_string(),
            );
        }
        node
    }

    /// Picks the orientation of one node from the reference layout.
    fn orientation(plan: &NodePlan, reference: &LayoutGraph) -> Result<Orientation, LayoutError> {
        let Art::Symbol { skin, terminals } = &plan.art else {
            return Ok(Orientation::default());
        };

        let size = skin.size();
        let square = size.to_square();
        let offset = square.center().sub_point(size.center());
        let ports: Vec<Point> = terminals
            .iter()
            .map(|(_, point)| point.add_point(offset))
            .collect();
        let targets: Vec<Point> = reference
            .require_node(&plan.name)?
            .ports
            .iter()
            .map(|port| port.position)
            .collect();

        let choice = choose_orientation(&plan.name, square, &ports, &targets, skin.rotations())?;
        debug!(
            node = plan.name.as_str(),
            orientation:% = choice.orientation,
            distance = choice.distance;
            "Chose orientation"
        );
        Ok(choice.orientation)
    }

    fn final_graph(
        &self,
        schematic: &Schematic,
        plans: &[NodePlan],
        reference: &LayoutGraph,
        orientations: &[Orientation],
    ) -> Result<LayoutGraph, LayoutError> {
        let children = plans
            .iter()
            .zip(orientations)
            .map(|(plan, orientation)| self.final_node(plan, reference, *orientation))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(LayoutGraph {
            directives: self.root_directives(schematic),
            children,
            edges: Self::edges(schematic, plans),
        })
    }

    fn final_node(
        &self,
        plan: &NodePlan,
        reference: &LayoutGraph,
        orientation: Orientation,
    ) -> Result<LayoutNode, LayoutError> {
        match &plan.art {
            Art::Symbol { skin, terminals } => {
                let size = skin.size();
                let oriented = orientation.apply_size(size);
                let ports: Vec<LayoutPort> = terminals
                    .iter()
                    .map(|(terminal, point)| {
                        LayoutPort::new(terminal, orientation.apply(*point, size))
                    })
                    .collect();
                let placement = label_placement(ports.iter().map(|port| port.position), oriented);

                let mut node = LayoutNode::new(&plan.name, oriented);
                node.labels = self.labels(&plan.labels);
                node.ports = ports;
                node.directives.insert(
                    PORT_CONSTRAINTS.to_string(),
                    PortConstraints::FixedPos.as_str().to_string(),
                );
                node.directives.insert(
                    NODE_LABELS_PLACEMENT.to_string(),
                    placement.as_str().to_string(),
                );
                Ok(node)
            }
            Art::Boxed { size, pins } => {
                let previous = reference.require_node(&plan.name)?;
                let placement =
                    label_placement(previous.ports.iter().map(|port| port.position), *size);
                Ok(self.boxed_node(plan, *size, pins, Some(placement)))
            }
        }
    }

    /// Converts an engine response into the placed schematic.
    ///
    /// Without `orientations` the graph is the reference pass: symbols sit
    /// unturned in the middle of their square boxes.
    fn place(
        &self,
        schematic: &Schematic,
        plans: &[NodePlan],
        graph: &LayoutGraph,
        orientations: Option<&[Orientation]>,
        skin: &Skin,
    ) -> Result<PlacedSchematic, LayoutError> {
        let mut nodes = Vec::with_capacity(plans.len());
        for (index, plan) in plans.iter().enumerate() {
            let node = graph.require_node(&plan.name)?;
            let art = match &plan.art {
                Art::Symbol { skin, .. } => {
                    let (origin, orientation) = match orientations {
                        Some(orientations) => (node.position, orientations[index]),
                        None => (
                            node.position
                                .add_point(node.size.center().sub_point(skin.size().center())),
                            Orientation::default(),
                        ),
                    };
                    NodeArt::Symbol {
                        skin: Arc::clone(skin),
                        origin,
                        orientation,
                    }
                }
                Art::Boxed { .. } => NodeArt::Boxed,
            };

            let absolute = |labels: &[LayoutLabel]| -> Vec<LayoutLabel> {
                labels
                    .iter()
                    .map(|label| LayoutLabel {
                        position: node.position.add_point(label.position),
                        ..label.clone()
                    })
                    .collect()
            };

            nodes.push(PlacedNode {
                id: plan.id,
                name: plan.name.clone(),
                symbol: plan.symbol.clone(),
                position: node.position,
                size: node.size,
                art,
                labels: absolute(&node.labels),
                ports: node
                    .ports
                    .iter()
                    .map(|port| {
                        PlacedPort::new(
                            port.id.clone(),
                            node.position.add_point(port.position),
                            absolute(&port.labels),
                        )
                    })
                    .collect(),
            });
        }

        let mut wires = Vec::with_capacity(schematic.edges().len());
        for (index, edge) in schematic.edges().iter().enumerate() {
            let routed = graph.require_edge(&edge_id(index))?;
            wires.push(PlacedWire::new(
                (edge.source(), edge.source_terminal().to_string()),
                (edge.target(), edge.target_terminal().to_string()),
                routed.route.clone(),
                routed.junctions.clone(),
            ));
        }

        info!(nodes_len = nodes.len(); "Layout complete");
        Ok(PlacedSchematic::new(
            nodes,
            wires,
            skin.style_classes().clone(),
        ))
    }
}

/// Layout edge id of the schematic edge at `index`.
fn edge_id(index: usize) -> String {
    format!("e{index}")
}

/// West and east sides for a two-terminal symbol whose terminals share its
/// top or bottom edge, the leftmost terminal going west.
fn lateral_sides(terminals: &[(String, Point)], size: Size) -> Option<[Side; 2]> {
    let [(_, first), (_, second)] = terminals else {
        return None;
    };
    let first_side = Side::of_point(*first, size)?;
    let second_side = Side::of_point(*second, size)?;
    if first_side != second_side || !matches!(first_side, Side::North | Side::South) {
        return None;
    }
    if second.x() < first.x() {
        Some([Side::East, Side::West])
    } else {
        Some([Side::West, Side::East])
    }
}

/// First side in priority order without a port, else top-left.
fn label_placement(ports: impl Iterator<Item = Point>, size: Size) -> LabelPlacement {
    let occupied: Vec<Side> = ports
        .filter_map(|port| Side::of_point(port, size))
        .collect();
    Side::PRIORITY
        .into_iter()
        .find(|side| !occupied.contains(side))
        .map_or(LabelPlacement::TopLeft, LabelPlacement::Outside)
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;
    use crate::compiler::Compiler;

    fn compile(source: &str) -> Schematic {
        let statements = voltaic_parser::parse(source).unwrap();
        let mut compiler = Compiler::new();
        compiler.add_statements(&statements);
        compiler.resolve(&SymbolLibrary::builtin()).unwrap();
        compiler.schematic().unwrap()
    }

    fn layout(source: &str, options: LayoutOptions) -> PlacedSchematic {
        let engine = LayeredEngine::new();
        let mut skin = Skin::builtin();
        Layouter::new(&engine, options)
            .layout(&compile(source), &SymbolLibrary::builtin(), &mut skin)
            .unwrap()
    }

    /// Wires end exactly on the terminals they name.
    fn assert_wires_attached(placed: &PlacedSchematic) {
        for wire in placed.wires() {
            let source = &placed.nodes()[wire.source().index()];
            let target = &placed.nodes()[wire.target().index()];
            let start = source.port(wire.source_terminal()).unwrap().position();
            let end = target.port(wire.target_terminal()).unwrap().position();
            assert_eq!(wire.points().first(), Some(&start));
            assert_eq!(wire.points().last(), Some(&end));
        }
    }

    #[test]
    fn test_chain_keeps_resistors_upright() {
        let placed = layout("[R1] - [R2] - [R3]", LayoutOptions::default());
        for node in placed.nodes() {
            assert_eq!(node.orientation(), Orientation::default(), "{}", node.name());
            assert_eq!(node.size(), Size::new(60.0, 14.0));
        }
        assert_wires_attached(&placed);
    }

    #[test]
    fn test_ports_sit_on_oriented_terminals() {
        let placed = layout("in - [R1] - {C1} - gnd", LayoutOptions::default());
        for node in placed.nodes() {
            let NodeArt::Symbol {
                skin,
                origin,
                orientation,
            } = node.art()
            else {
                panic!("expected symbol art");
            };
            for port in node.ports() {
                let terminal = skin.terminal(port.name()).unwrap();
                let expected = origin.add_point(orientation.apply(terminal, skin.size()));
                assert_approx_eq!(f32, port.position().x(), expected.x());
                assert_approx_eq!(f32, port.position().y(), expected.y());
            }
        }
        assert_wires_attached(&placed);
    }

    #[test]
    fn test_fixed_rotation_symbols_stay_upright() {
        let placed = layout("[R1] - gnd\nvcc - [R1]", LayoutOptions::default());
        let gnd = placed.node("GND").unwrap();
        assert_eq!(gnd.orientation(), Orientation::default());
        let vcc = placed.node("VCC").unwrap();
        assert_eq!(vcc.orientation(), Orientation::default());
    }

    #[test]
    fn test_without_optimization_reference_is_returned() {
        let placed = layout("[R1] - [R2]", LayoutOptions::default().with_optimize(false));
        let r1 = placed.node("R1").unwrap();
        assert_eq!(r1.size(), Size::new(60.0, 60.0));
        let NodeArt::Symbol { origin, .. } = r1.art() else {
            panic!("expected symbol art");
        };
        assert_approx_eq!(f32, origin.y() - r1.position().y(), 23.0);
    }

    #[test]
    fn test_labels_avoid_terminal_sides() {
        let placed = layout("[R1:10k] - [R2]", LayoutOptions::default());
        let r1 = placed.node("R1").unwrap();
        assert_eq!(r1.labels().len(), 2);
        for label in r1.labels() {
            assert!(label.position.y() + label.size.height() <= r1.position().y());
        }
    }

    #[test]
    fn test_boxed_symbol_has_pin_labels() {
        let placed = layout(
            "in - inp.[U1]\n[U1].out - out\n[R1] - inn.[U1]",
            LayoutOptions::default(),
        );
        let u1 = placed.node("U1").unwrap();
        assert_eq!(*u1.art(), NodeArt::Boxed);
        assert_eq!(u1.ports().len(), 5);
        assert!(u1.ports().iter().all(|port| port.labels().len() == 1));
        assert_wires_attached(&placed);
    }

    #[test]
    fn test_set_directives_reach_engine() {
        let placed = layout(
            "set layout.direction=DOWN\nin - [R1] - [R2]",
            LayoutOptions::default(),
        );
        let r1 = placed.node("R1").unwrap();
        let r2 = placed.node("R2").unwrap();
        assert!(r1.position().y() < r2.position().y());
        assert_eq!(r1.orientation().rotation() % 2, 1);
    }

    #[test]
    fn test_unknown_symbol_in_library() {
        let schematic = compile("[R1]");
        let library = SymbolLibrary::from_toml("[C]\nterminals = [\"1\", \"2\"]").unwrap();
        let engine = LayeredEngine::new();
        let err = Layouter::new(&engine, LayoutOptions::default())
            .layout(&schematic, &library, &mut Skin::builtin())
            .unwrap_err();
        assert!(matches!(err, LayoutError::UnknownSymbol { symbol, .. } if symbol == "R"));
    }

    /// Runs the layered engine and returns the edges in reverse order.
    struct ReversedEdges;

    impl LayoutEngine for ReversedEdges {
        fn layout(&self, graph: LayoutGraph) -> Result<LayoutGraph, LayoutError> {
            let mut graph = LayeredEngine::new().layout(graph)?;
            graph.edges.reverse();
            Ok(graph)
        }
    }

    /// Runs the layered engine and loses every edge.
    struct DroppedEdges;

    impl LayoutEngine for DroppedEdges {
        fn layout(&self, graph: LayoutGraph) -> Result<LayoutGraph, LayoutError> {
            let mut graph = LayeredEngine::new().layout(graph)?;
            graph.edges.clear();
            Ok(graph)
        }
    }

    fn layout_with(
        engine: &dyn LayoutEngine,
        source: &str,
    ) -> Result<PlacedSchematic, LayoutError> {
        Layouter::new(engine, LayoutOptions::default()).layout(
            &compile(source),
            &SymbolLibrary::builtin(),
            &mut Skin::builtin(),
        )
    }

    #[test]
    fn test_wires_are_matched_by_edge_id() {
        let placed = layout_with(&ReversedEdges, "in - [R1] - {C1} - gnd").unwrap();
        assert_eq!(placed.wires().len(), 3);
        let second = &placed.wires()[1];
        assert_eq!(placed.nodes()[second.source().index()].name(), "R1");
        assert_eq!(placed.nodes()[second.target().index()].name(), "C1");
        assert_wires_attached(&placed);
    }

    #[test]
    fn test_missing_routed_edge_is_an_error() {
        let err = layout_with(&DroppedEdges, "[R1] - [R2]").unwrap_err();
        assert!(matches!(err, LayoutError::UnknownEdge(id) if id == "e0"));
    }

    #[test]
    fn test_lateral_sides() {
        let size = Size::new(20.0, 10.0);
        let top = vec![
            ("a".to_string(), Point::new(15.0, 0.0)),
            ("b".to_string(), Point::new(5.0, 0.0)),
        ];
        assert_eq!(lateral_sides(&top, size), Some([Side::East, Side::West]));

        let across = vec![
            ("a".to_string(), Point::new(0.0, 5.0)),
            ("b".to_string(), Point::new(20.0, 5.0)),
        ];
        assert_eq!(lateral_sides(&across, size), None);
    }

    #[test]
    fn test_label_placement_priority() {
        let size = Size::new(20.0, 10.0);
        let placement = label_placement(
            [Point::new(0.0, 5.0), Point::new(20.0, 5.0)].into_iter(),
            size,
        );
        assert_eq!(placement, LabelPlacement::Outside(Side::North));

        let all = [
            Point::new(0.0, 5.0),
            Point::new(20.0, 5.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
        ];
        assert_eq!(label_placement(all.into_iter(), size), LabelPlacement::TopLeft);
    }
}
