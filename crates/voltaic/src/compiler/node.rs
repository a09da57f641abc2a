//! Nodes and edges owned by the compiler.

use std::fmt;

use voltaic_core::{designator::Designator, statement::PortKind, value::Value};

/// Handle of a node in the compiler's node table.
///
/// Handles stay valid for the lifetime of the compiler: nodes are never
/// deleted, and merging references resolve to the existing handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub(super) fn new(index: usize) -> Self {
        Self(index)
    }

    /// Position of the node in creation order.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A component instance such as `R1`.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentNode {
    pub(super) designator: Designator,
    pub(super) symbol: Option<String>,
    pub(super) description: Option<String>,
    pub(super) value: Option<Value>,
}

impl ComponentNode {
    /// The designator; provisional until the schematic is resolved.
    pub fn designator(&self) -> &Designator {
        &self.designator
    }

    /// The explicit symbol override, if any.
    pub fn symbol_override(&self) -> Option<&str> {
        self.symbol.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }
}

/// A typed endpoint such as `gnd` or `in:audio`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortNode {
    pub(super) kind: PortKind,
    pub(super) specifier: Option<String>,
    pub(super) symbol: Option<String>,
}

impl PortNode {
    pub fn kind(&self) -> PortKind {
        self.kind
    }

    pub fn specifier(&self) -> Option<&str> {
        self.specifier.as_deref()
    }

    /// The explicit symbol override, if any.
    pub fn symbol_override(&self) -> Option<&str> {
        self.symbol.as_deref()
    }
}

/// A node of the schematic graph.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Component(ComponentNode),
    Port(PortNode),
}

impl Node {
    /// The display identity: `R1`, `GND`, `IN:audio`.
    ///
    /// Provisional components render as `R?1` until numbered.
    pub fn name(&self) -> String {
        self.to_string()
    }

    /// The symbol used to draw the node: the override, else the type letter
    /// for components or the kind's symbol for ports.
    pub fn symbol(&self) -> &str {
        match self {
            Node::Component(component) => component
                .symbol
                .as_deref()
                .unwrap_or_else(|| component.designator.letter()),
            Node::Port(port) => port.symbol.as_deref().unwrap_or_else(|| port.kind.symbol()),
        }
    }

    /// Ports are always resolved; components once their index is final.
    pub fn is_resolved(&self) -> bool {
        match self {
            Node::Component(component) => !component.designator.is_provisional(),
            Node::Port(_) => true,
        }
    }

    /// Text shown next to the node: value and description, if any.
    pub fn label(&self) -> Option<String> {
        match self {
            Node::Component(component) => {
                let parts: Vec<String> = component
                    .value
                    .iter()
                    .map(Value::to_string)
                    .chain(component.description.iter().cloned())
                    .collect();
                (!parts.is_empty()).then(|| parts.join(" "))
            }
            Node::Port(port) => port.specifier.clone(),
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Component(component) => write!(f, "{}", component.designator),
            Node::Port(port) => {
                f.write_str(port.kind.symbol())?;
                if let Some(specifier) = &port.specifier {
                    write!(f, ":{specifier}")?;
                }
                Ok(())
            }
        }
    }
}

/// A wire as written, terminals optional.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct Connection {
    pub(super) source: NodeId,
    pub(super) target: NodeId,
    pub(super) source_terminal: Option<String>,
    pub(super) target_terminal: Option<String>,
}

/// A resolved wire between two concrete terminals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    source: NodeId,
    source_terminal: String,
    target: NodeId,
    target_terminal: String,
}

impl Edge {
    pub(super) fn new(
        source: NodeId,
        source_terminal: String,
        target: NodeId,
        target_terminal: String,
    ) -> Self {
        Self {
            source,
            source_terminal,
            target,
            target_terminal,
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
}

#[cfg(test)]
mod tests {
    use super::*;

    fn component(letter: &str, index: i32) -> Node {
        Node::Component(ComponentNode {
            designator: Designator::new(letter, index),
            symbol: None,
            description: None,
            value: None,
        })
    }

    #[test]
    fn test_component_identity() {
        let node = component("R", 3);
        assert_eq!(node.name(), "R3");
        assert_eq!(node.symbol(), "R");
        assert!(node.is_resolved());
        assert!(!component("C", -1).is_resolved());
    }

    #[test]
    fn test_port_identity() {
        let node = Node::Port(PortNode {
            kind: PortKind::In,
            specifier: Some("audio".to_string()),
            symbol: None,
        });
        assert_eq!(node.name(), "IN:audio");
        assert_eq!(node.symbol(), "IN");
        assert!(node.is_resolved());
    }

    #[test]
    fn test_symbol_override() {
        let node = Node::Component(ComponentNode {
            designator: Designator::new("R", 2),
            symbol: Some("POT".to_string()),
            description: None,
            value: None,
        });
        assert_eq!(node.symbol(), "POT");
    }

    #[test]
    fn test_label() {
        let node = Node::Component(ComponentNode {
            designator: Designator::new("R", 1),
            symbol: None,
            description: Some("input".to_string()),
            value: Some(Value::parse("22k")),
        });
        assert_eq!(node.label().as_deref(), Some("22k input"));
        assert_eq!(component("R", 1).label(), None);
    }
}
