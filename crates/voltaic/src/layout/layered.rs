//! Built-in layered layout engine.
//!
//! A small Sugiyama-style pipeline:
//! 1. Ranks nodes by longest path along the edges, ignoring DFS back edges
//!    so cycles still get a ranking.
//! 2. Orders each layer by the barycenter of its neighbors in the previous
//!    layer.
//! 3. Places free ports: ports that mostly receive wires go on the leading
//!    side, ports that mostly send go on the trailing side, the rest on the
//!    side nearest to where they already are.
//! 4. Places labels, then stacks every layer around its center line using
//!    each node's footprint (box plus labels).
//! 5. Routes every edge orthogonally out of its ports.

use std::{
    cmp::Ordering,
    collections::{HashMap, HashSet},
};

use log::{debug, trace};
use petgraph::{
    graph::{DiGraph, NodeIndex},
    visit::{DfsEvent, depth_first_search},
};

use voltaic_core::geometry::{Bounds, Point, Side, Size};

use super::{
    LayoutError,
    engine::LayoutEngine,
    graph::{
        Direction, LAYER_SPACING, LabelPlacement, LayoutGraph, LayoutNode, NODE_SPACING,
        PortConstraints,
    },
};

/// Two coordinates closer than this are considered equal when routing.
const EPSILON: f32 = 0.01;

/// Resolved indices of an edge's ends: `(node, port)`.
#[derive(Debug, Clone, Copy)]
struct Endpoints {
    source: (usize, usize),
    target: (usize, usize),
}

/// Layered layout engine with orthogonal routing.
#[derive(Debug, Clone)]
pub struct LayeredEngine {
    node_spacing: f32,
    layer_spacing: f32,
    label_gap: f32,
    port_stub: f32,
}

impl Default for LayeredEngine {
    fn default() -> Self {
        Self {
            node_spacing: 40.0,
            layer_spacing: 60.0,
            label_gap: 4.0,
            port_stub: 10.0,
        }
    }
}

impl LayeredEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Gap between nodes of one layer when the graph does not set
    /// `layout.spacing.node`.
    pub fn with_node_spacing(mut self, spacing: f32) -> Self {
        self.node_spacing = spacing;
        self
    }

    /// Gap between layers when the graph does not set
    /// `layout.spacing.layer`.
    pub fn with_layer_spacing(mut self, spacing: f32) -> Self {
        self.layer_spacing = spacing;
        self
    }

    /// Length of the straight run a wire makes out of its port.
    pub fn with_port_stub(mut self, stub: f32) -> Self {
        self.port_stub = stub;
        self
    }

    fn endpoints(graph: &LayoutGraph) -> Result<Vec<Endpoints>, LayoutError> {
        let nodes: HashMap<&str, usize> = graph
            .children
            .iter()
            .enumerate()
            .map(|(index, node)| (node.id.as_str(), index))
            .collect();

        let resolve = |node: &str, port: &str| -> Result<(usize, usize), LayoutError> {
            let node_index = *nodes
                .get(node)
                .ok_or_else(|| LayoutError::UnknownNode(node.to_string()))?;
            let port_index = graph.children[node_index]
                .ports
                .iter()
                .position(|candidate| candidate.id == port)
                .ok_or_else(|| LayoutError::UnknownPort {
                    node: node.to_string(),
                    port: port.to_string(),
                })?;
            Ok((node_index, port_index))
        };

        graph
            .edges
            .iter()
            .map(|edge| -> Result<Endpoints, LayoutError> {
                Ok(Endpoints {
                    source: resolve(&edge.source.node, &edge.source.port)?,
                    target: resolve(&edge.target.node, &edge.target.port)?,
                })
            })
            .collect()
    }

    /// Longest-path ranking. Each layer lists node indices in graph order.
    fn assign_layers(node_count: usize, endpoints: &[Endpoints]) -> Vec<Vec<usize>> {
        let mut graph = DiGraph::<usize, ()>::with_capacity(node_count, endpoints.len());
        let indices: Vec<NodeIndex> = (0..node_count).map(|i| graph.add_node(i)).collect();
        for endpoint in endpoints {
            let (source, target) = (endpoint.source.0, endpoint.target.0);
            if source != target {
                graph.add_edge(indices[source], indices[target], ());
            }
        }

        let mut back_edges = HashSet::new();
        let mut finished = Vec::with_capacity(node_count);
        depth_first_search(&graph, graph.node_indices(), |event| match event {
            DfsEvent::BackEdge(from, to) => {
                back_edges.insert((from, to));
            }
            DfsEvent::Finish(node, _) => finished.push(node),
            _ => {}
        });

        // Reverse DFS finish order is topological once back edges are gone.
        let mut rank = vec![0usize; node_count];
        for &node in finished.iter().rev() {
            for next in graph.neighbors(node) {
                if !back_edges.contains(&(node, next)) {
                    rank[next.index()] = rank[next.index()].max(rank[node.index()] + 1);
                }
            }
        }

        let layer_count = rank.iter().max().map_or(0, |max| max + 1);
        let mut layers = vec![Vec::new(); layer_count];
        for (node, &rank) in rank.iter().enumerate() {
            layers[rank].push(node);
        }
        layers
    }

    /// One top-down barycenter sweep.
    fn order_layers(layers: &mut [Vec<usize>], endpoints: &[Endpoints]) {
        let mut neighbors: HashMap<usize, Vec<usize>> = HashMap::new();
        for endpoint in endpoints {
            let (source, target) = (endpoint.source.0, endpoint.target.0);
            neighbors.entry(source).or_default().push(target);
            neighbors.entry(target).or_default().push(source);
        }

        for layer in 1..layers.len() {
            let previous: HashMap<usize, usize> = layers[layer - 1]
                .iter()
                .enumerate()
                .map(|(position, &node)| (node, position))
                .collect();

            let mut keyed: Vec<(f32, usize)> = layers[layer]
                .iter()
                .enumerate()
                .map(|(position, &node)| {
                    let positions: Vec<usize> = neighbors
                        .get(&node)
                        .into_iter()
                        .flatten()
                        .filter_map(|neighbor| previous.get(neighbor).copied())
                        .collect();
                    let key = if positions.is_empty() {
                        position as f32
                    } else {
                        positions.iter().sum::<usize>() as f32 / positions.len() as f32
                    };
                    (key, node)
                })
                .collect();
            keyed.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));
            layers[layer] = keyed.into_iter().map(|(_, node)| node).collect();
        }
    }

    /// Assigns sides and positions to ports that are not fixed.
    fn place_ports(
        graph: &mut LayoutGraph,
        endpoints: &[Endpoints],
        direction: Direction,
    ) -> Result<(), LayoutError> {
        let mut incoming: HashMap<(usize, usize), usize> = HashMap::new();
        let mut outgoing: HashMap<(usize, usize), usize> = HashMap::new();
        for endpoint in endpoints {
            *outgoing.entry(endpoint.source).or_default() += 1;
            *incoming.entry(endpoint.target).or_default() += 1;
        }

        for (node_index, node) in graph.children.iter_mut().enumerate() {
            let constraints = node.port_constraints()?;
            if constraints == PortConstraints::FixedPos {
                continue;
            }

            let mut sides = Vec::with_capacity(node.ports.len());
            for (port_index, port) in node.ports.iter().enumerate() {
                let side = match constraints {
                    PortConstraints::FixedSide => port.side_directive()?,
                    _ => None,
                };
                let side = side.unwrap_or_else(|| {
                    let key = (node_index, port_index);
                    let into = incoming.get(&key).copied().unwrap_or(0);
                    let out = outgoing.get(&key).copied().unwrap_or(0);
                    match into.cmp(&out) {
                        Ordering::Greater => direction.leading_side(),
                        Ordering::Less => direction.trailing_side(),
                        Ordering::Equal => nearest_side(port.position, node.size),
                    }
                });
                sides.push(side);
            }

            for side in Side::PRIORITY {
                let mut on_side: Vec<usize> = (0..node.ports.len())
                    .filter(|&port| sides[port] == side)
                    .collect();
                let along = |port: &usize| match side {
                    Side::West | Side::East => node.ports[*port].position.y(),
                    Side::North | Side::South => node.ports[*port].position.x(),
                };
                on_side.sort_by(|a, b| along(a).partial_cmp(&along(b)).unwrap_or(Ordering::Equal));

                let count = on_side.len() as f32;
                let (width, height) = (node.size.width(), node.size.height());
                for (slot, port) in on_side.into_iter().enumerate() {
                    let fraction = (slot as f32 + 1.0) / (count + 1.0);
                    node.ports[port].position = match side {
                        Side::West => Point::new(0.0, height * fraction),
                        Side::East => Point::new(width, height * fraction),
                        Side::North => Point::new(width * fraction, 0.0),
                        Side::South => Point::new(width * fraction, height),
                    };
                }
            }
        }
        Ok(())
    }

    /// Places node labels by the placement directive and port labels just
    /// inside the box next to their port.
    fn place_labels(&self, node: &mut LayoutNode) -> Result<(), LayoutError> {
        let placement = node.label_placement()?;
        let size = node.size;
        let gap = self.label_gap;

        let total_height: f32 = node.labels.iter().map(|label| label.size.height()).sum();
        let mut y = match placement {
            LabelPlacement::Outside(Side::West | Side::East) => (size.height() - total_height) / 2.0,
            LabelPlacement::Outside(Side::North) | LabelPlacement::TopLeft => -gap - total_height,
            LabelPlacement::Outside(Side::South) => size.height() + gap,
        };
        for label in &mut node.labels {
            let x = match placement {
                LabelPlacement::Outside(Side::West) => -gap - label.size.width(),
                LabelPlacement::Outside(Side::East) => size.width() + gap,
                LabelPlacement::Outside(Side::North | Side::South) => {
                    (size.width() - label.size.width()) / 2.0
                }
                LabelPlacement::TopLeft => 0.0,
            };
            label.position = Point::new(x, y);
            y += label.size.height();
        }

        for port in &mut node.ports {
            let anchor = port.position;
            let side = Side::of_point(anchor, size).unwrap_or(Side::West);
            for label in &mut port.labels {
                let label_size = label.size;
                label.position = match side {
                    Side::West => Point::new(
                        anchor.x() + gap,
                        anchor.y() - label_size.height() / 2.0,
                    ),
                    Side::East => Point::new(
                        anchor.x() - gap - label_size.width(),
                        anchor.y() - label_size.height() / 2.0,
                    ),
                    Side::North => Point::new(anchor.x() - label_size.width() / 2.0, anchor.y() + gap),
                    Side::South => Point::new(
                        anchor.x() - label_size.width() / 2.0,
                        anchor.y() - gap - label_size.height(),
                    ),
                };
            }
        }
        Ok(())
    }

    /// Positions nodes layer by layer along the flow direction.
    fn position_nodes(
        nodes: &mut [LayoutNode],
        layers: &[Vec<usize>],
        direction: Direction,
        node_spacing: f32,
        layer_spacing: f32,
    ) {
        let footprints: Vec<Bounds> = nodes.iter().map(footprint).collect();
        let main_extent = |bounds: &Bounds| match direction {
            Direction::Right => bounds.width(),
            Direction::Down => bounds.height(),
        };
        let cross_extent = |bounds: &Bounds| match direction {
            Direction::Right => bounds.height(),
            Direction::Down => bounds.width(),
        };

        let layer_extents: Vec<f32> = layers
            .iter()
            .map(|layer| {
                layer
                    .iter()
                    .map(|&node| main_extent(&footprints[node]))
                    .fold(0.0, f32::max)
            })
            .collect();
        let layer_lengths: Vec<f32> = layers
            .iter()
            .map(|layer| {
                let nodes: f32 = layer.iter().map(|&node| cross_extent(&footprints[node])).sum();
                nodes + node_spacing * layer.len().saturating_sub(1) as f32
            })
            .collect();
        let longest = layer_lengths.iter().copied().fold(0.0, f32::max);

        let mut main = 0.0;
        for (layer_index, layer) in layers.iter().enumerate() {
            let extent = layer_extents[layer_index];
            let mut cross = (longest - layer_lengths[layer_index]) / 2.0;
            for &node in layer {
                let bounds = footprints[node];
                let (main_min, cross_min) = match direction {
                    Direction::Right => (bounds.min_x(), bounds.min_y()),
                    Direction::Down => (bounds.min_y(), bounds.min_x()),
                };
                let node_main = main + (extent - main_extent(&bounds)) / 2.0 - main_min;
                let node_cross = cross - cross_min;
                nodes[node].position = match direction {
                    Direction::Right => Point::new(node_main, node_cross),
                    Direction::Down => Point::new(node_cross, node_main),
                };
                trace!(node = nodes[node].id.as_str(), layer = layer_index; "Positioned node");
                cross += cross_extent(&bounds) + node_spacing;
            }
            main += extent + layer_spacing;
        }
    }

    /// Orthogonal route leaving `source` through `source_side` and
    /// entering `target` through `target_side`.
    fn route(&self, source: Point, source_side: Side, target: Point, target_side: Side) -> Vec<Point> {
        let start = source.add_point(outward(source_side).scale(self.port_stub));
        let end = target.add_point(outward(target_side).scale(self.port_stub));

        let mut points = vec![source, start];
        match (is_horizontal(source_side), is_horizontal(target_side)) {
            (true, true) => {
                let x = (start.x() + end.x()) / 2.0;
                points.push(Point::new(x, start.y()));
                points.push(Point::new(x, end.y()));
            }
            (false, false) => {
                let y = (start.y() + end.y()) / 2.0;
                points.push(Point::new(start.x(), y));
                points.push(Point::new(end.x(), y));
            }
            (true, false) => points.push(Point::new(end.x(), start.y())),
            (false, true) => points.push(Point::new(start.x(), end.y())),
        }
        points.push(end);
        points.push(target);
        simplify(points)
    }
}

impl LayoutEngine for LayeredEngine {
    fn layout(&self, mut graph: LayoutGraph) -> Result<LayoutGraph, LayoutError> {
        let direction = graph.direction()?;
        let node_spacing = graph.spacing(NODE_SPACING)?.unwrap_or(self.node_spacing);
        let layer_spacing = graph.spacing(LAYER_SPACING)?.unwrap_or(self.layer_spacing);

        let endpoints = Self::endpoints(&graph)?;
        let mut layers = Self::assign_layers(graph.children.len(), &endpoints);
        Self::order_layers(&mut layers, &endpoints);

        Self::place_ports(&mut graph, &endpoints, direction)?;
        for node in &mut graph.children {
            self.place_labels(node)?;
        }
        Self::position_nodes(
            &mut graph.children,
            &layers,
            direction,
            node_spacing,
            layer_spacing,
        );

        let mut port_edges: HashMap<(usize, usize), Vec<usize>> = HashMap::new();
        for (edge_index, endpoint) in endpoints.iter().enumerate() {
            port_edges.entry(endpoint.source).or_default().push(edge_index);
            if endpoint.target != endpoint.source {
                port_edges.entry(endpoint.target).or_default().push(edge_index);
            }
        }

        let anchor = |(node, port): (usize, usize), fallback: Side| {
            let node = &graph.children[node];
            let relative = node.ports[port].position;
            let side = Side::of_point(relative, node.size).unwrap_or(fallback);
            (node.position.add_point(relative), side)
        };

        let mut routes = Vec::with_capacity(endpoints.len());
        for endpoint in &endpoints {
            let (source, source_side) = anchor(endpoint.source, direction.trailing_side());
            let (target, target_side) = anchor(endpoint.target, direction.leading_side());
            routes.push(self.route(source, source_side, target, target_side));
        }

        let mut junctions: Vec<Vec<Point>> = vec![Vec::new(); endpoints.len()];
        let mut shared: Vec<_> = port_edges.into_iter().filter(|(_, edges)| edges.len() > 1).collect();
        shared.sort_by_key(|(port, _)| *port);
        for (port, edges) in shared {
            let (point, _) = anchor(port, direction.trailing_side());
            junctions[edges[0]].push(point);
        }

        for ((edge, route), junctions) in graph.edges.iter_mut().zip(routes).zip(junctions) {
            edge.route = route;
            edge.junctions = junctions;
        }

        debug!(
            nodes_len = graph.children.len(),
            edges_len = graph.edges.len(),
            layers_len = layers.len(),
            direction:%;
            "Layered layout complete"
        );
        Ok(graph)
    }
}

/// Box plus labels, relative to the node's top-left corner.
fn footprint(node: &LayoutNode) -> Bounds {
    let size = node.size;
    node.labels.iter().fold(
        Bounds::new(0.0, 0.0, size.width(), size.height()),
        |bounds, label| {
            bounds
                .include(label.position)
                .include(label.position.add_point(Point::new(
                    label.size.width(),
                    label.size.height(),
                )))
        },
    )
}

/// The side of a `size` box closest to `point`, ties in side priority.
fn nearest_side(point: Point, size: Size) -> Side {
    let distance = |side: Side| match side {
        Side::West => point.x().abs(),
        Side::East => (size.width() - point.x()).abs(),
        Side::North => point.y().abs(),
        Side::South => (size.height() - point.y()).abs(),
    };
    Side::PRIORITY
        .into_iter()
        .fold((Side::West, f32::INFINITY), |best, side| {
            let distance = distance(side);
            if distance < best.1 { (side, distance) } else { best }
        })
        .0
}

fn outward(side: Side) -> Point {
    match side {
        Side::West => Point::new(-1.0, 0.0),
        Side::East => Point::new(1.0, 0.0),
        Side::North => Point::new(0.0, -1.0),
        Side::South => Point::new(0.0, 1.0),
    }
}

/// Wires through west and east ports leave horizontally.
fn is_horizontal(side: Side) -> bool {
    matches!(side, Side::West | Side::East)
}

/// Drops repeated points and the middle of straight runs.
fn simplify(points: Vec<Point>) -> Vec<Point> {
    let mut simplified: Vec<Point> = Vec::with_capacity(points.len());
    for point in points {
        if simplified
            .last()
            .is_some_and(|last| last.distance(point) < EPSILON)
        {
            continue;
        }
        let straight = match simplified.as_slice() {
            [.., a, b] => {
                let vertical =
                    (a.x() - b.x()).abs() < EPSILON && (b.x() - point.x()).abs() < EPSILON;
                let horizontal =
                    (a.y() - b.y()).abs() < EPSILON && (b.y() - point.y()).abs() < EPSILON;
                vertical || horizontal
            }
            _ => false,
        };
        if straight {
            simplified.pop();
        }
        simplified.push(point);
    }
    simplified
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;
    use crate::layout::graph::{
        DIRECTION, LayoutEdge, LayoutLabel, LayoutPort, NODE_LABELS_PLACEMENT, PORT_CONSTRAINTS,
        PORT_SIDE, PortRef,
    };

    fn two_port(id: &str) -> LayoutNode {
        let mut node = LayoutNode::new(id, Size::new(40.0, 40.0));
        node.ports.push(LayoutPort::new("1", Point::new(0.0, 20.0)));
        node.ports.push(LayoutPort::new("2", Point::new(40.0, 20.0)));
        node
    }

    fn chain(ids: &[&str]) -> LayoutGraph {
        let mut graph = LayoutGraph {
            children: ids.iter().map(|id| two_port(id)).collect(),
            ..LayoutGraph::default()
        };
        for (i, pair) in ids.windows(2).enumerate() {
            graph.edges.push(LayoutEdge::new(
                format!("e{i}"),
                PortRef::new(pair[0], "2"),
                PortRef::new(pair[1], "1"),
            ));
        }
        graph
    }

    fn is_orthogonal(route: &[Point]) -> bool {
        route.windows(2).all(|pair| {
            (pair[0].x() - pair[1].x()).abs() < EPSILON || (pair[0].y() - pair[1].y()).abs() < EPSILON
        })
    }

    #[test]
    fn test_chain_flows_right() {
        let graph = LayeredEngine::new().layout(chain(&["A", "B", "C"])).unwrap();
        let x: Vec<f32> = graph.children.iter().map(|node| node.position.x()).collect();
        assert!(x[0] < x[1] && x[1] < x[2]);
        assert_approx_eq!(f32, x[1] - x[0], 100.0);
        for edge in &graph.edges {
            assert_eq!(edge.route.len(), 2, "aligned ports give a straight wire");
            assert!(edge.junctions.is_empty());
        }
    }

    #[test]
    fn test_direction_down() {
        let mut graph = chain(&["A", "B"]);
        graph
            .directives
            .insert(DIRECTION.to_string(), "DOWN".to_string());
        let graph = LayeredEngine::new().layout(graph).unwrap();
        assert!(graph.children[0].position.y() < graph.children[1].position.y());

        let a = &graph.children[0];
        assert_eq!(a.port("2").unwrap().position, Point::new(20.0, 40.0));
        let b = &graph.children[1];
        assert_eq!(b.port("1").unwrap().position, Point::new(20.0, 0.0));
    }

    #[test]
    fn test_cycle_still_layers() {
        let mut graph = chain(&["A", "B", "C"]);
        graph.edges.push(LayoutEdge::new(
            "back",
            PortRef::new("C", "2"),
            PortRef::new("A", "1"),
        ));
        let graph = LayeredEngine::new().layout(graph).unwrap();
        assert!(graph.children[0].position.x() < graph.children[2].position.x());
        assert!(graph.edges.iter().all(|edge| is_orthogonal(&edge.route)));
    }

    #[test]
    fn test_free_ports_follow_flow() {
        let mut graph = chain(&["A", "B"]);
        // Swap hints so the engine has to move them.
        graph.children[1].ports[0].position = Point::new(40.0, 20.0);
        graph.children[1].ports[1].position = Point::new(0.0, 20.0);
        let graph = LayeredEngine::new().layout(graph).unwrap();
        let b = &graph.children[1];
        assert_eq!(b.port("1").unwrap().position, Point::new(0.0, 20.0));
    }

    #[test]
    fn test_fixed_positions_are_kept() {
        let mut graph = chain(&["A", "B"]);
        let b = &mut graph.children[1];
        b.directives
            .insert(PORT_CONSTRAINTS.to_string(), "FIXED_POS".to_string());
        b.ports[0].position = Point::new(20.0, 0.0);
        let graph = LayeredEngine::new().layout(graph).unwrap();
        let b = &graph.children[1];
        assert_eq!(b.port("1").unwrap().position, Point::new(20.0, 0.0));
        assert!(graph.edges.iter().all(|edge| is_orthogonal(&edge.route)));
    }

    #[test]
    fn test_fixed_side_ports() {
        let mut graph = chain(&["A", "B"]);
        let b = &mut graph.children[1];
        b.directives
            .insert(PORT_CONSTRAINTS.to_string(), "FIXED_SIDE".to_string());
        b.ports[0]
            .directives
            .insert(PORT_SIDE.to_string(), "SOUTH".to_string());
        let graph = LayeredEngine::new().layout(graph).unwrap();
        assert_eq!(
            graph.children[1].port("1").unwrap().position,
            Point::new(20.0, 40.0)
        );
    }

    #[test]
    fn test_shared_port_gets_junction() {
        let mut graph = chain(&["A", "B"]);
        graph.children.push(two_port("C"));
        graph.edges.push(LayoutEdge::new(
            "e1",
            PortRef::new("A", "2"),
            PortRef::new("C", "1"),
        ));
        let graph = LayeredEngine::new().layout(graph).unwrap();
        let a = &graph.children[0];
        let port = a.position.add_point(a.port("2").unwrap().position);
        assert_eq!(graph.edges[0].junctions, vec![port]);
        assert!(graph.edges[1].junctions.is_empty());
    }

    #[test]
    fn test_labels_follow_placement() {
        let mut graph = chain(&["A"]);
        let a = &mut graph.children[0];
        a.labels.push(LayoutLabel::new("R1", Size::new(12.0, 10.0)));
        a.directives
            .insert(NODE_LABELS_PLACEMENT.to_string(), "EAST".to_string());
        let graph = LayeredEngine::new().layout(graph).unwrap();
        let label = &graph.children[0].labels[0];
        assert_approx_eq!(f32, label.position.x(), 44.0);
        assert_approx_eq!(f32, label.position.y(), 15.0);
    }

    #[test]
    fn test_unknown_port() {
        let mut graph = chain(&["A", "B"]);
        graph.edges[0].target.port = "9".to_string();
        assert!(matches!(
            LayeredEngine::new().layout(graph),
            Err(LayoutError::UnknownPort { port, .. }) if port == "9"
        ));
    }

    #[test]
    fn test_simplify_removes_straight_runs() {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(5.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 5.0),
        ];
        assert_eq!(
            simplify(points),
            vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0), Point::new(10.0, 5.0)]
        );
    }
}
