//! The schematic compiler.
//!
//! [`Compiler`] consumes parsed statements and builds a graph of component
//! and port nodes joined by wires. References are ambiguous while statements
//! are being added: components written without an index get a provisional
//! designator, and wire ends may omit their terminal. [`Compiler::resolve`]
//! numbers provisional components and fills in every terminal against a
//! [`SymbolLibrary`], after which the graph can be read.
//!
//! # Example
//!
//! ```
//! # use voltaic::{compiler::Compiler, library::SymbolLibrary};
//! let statements = voltaic_parser::parse("[22k] - gnd").unwrap();
//! let mut compiler = Compiler::new();
//! compiler.add_statements(&statements);
//! compiler.resolve(&SymbolLibrary::builtin()).unwrap();
//!
//! let schematic = compiler.schematic().unwrap();
//! assert_eq!(schematic.nodes()[0].name(), "R1");
//! ```

mod node;
mod resolve;

pub use node::{ComponentNode, Edge, Node, NodeId, PortNode};

use std::collections::HashMap;

use indexmap::IndexMap;
use log::{debug, trace};
use thiserror::Error;

use voltaic_core::{
    designator::Designator,
    statement::{
        ComponentDescriptor, NodeDescriptor, PortDescriptor, PortKind, Settings, Statement,
    },
};

use crate::library::SymbolLibrary;

use node::Connection;

/// User-facing compilation errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CompileError {
    #[error("Node `{node}` uses unknown symbol `{symbol}`")]
    UnknownSymbol { node: String, symbol: String },

    #[error("Node `{node}` has no terminal `{terminal}` (symbol `{symbol}`)")]
    UnknownTerminal {
        node: String,
        symbol: String,
        terminal: String,
    },

    #[error("Schematic must be resolved before its graph can be read")]
    NotResolved,

    #[error("Designator `{designator}` has an index above {max}", max = i32::MAX)]
    IndexOutOfRange { designator: String },

    #[error("No index is left to number another `{letter}` component")]
    IndexOverflow { letter: String },
}

/// Builds and resolves the schematic graph.
///
/// A compiler is single-owner and single-pass: add statements, resolve,
/// read. Any mutation after [`Compiler::resolve`] invalidates the resolved
/// state until `resolve` runs again.
#[derive(Debug, Default)]
pub struct Compiler {
    nodes: Vec<Node>,
    designators: HashMap<Designator, NodeId>,
    ports: HashMap<(PortKind, Option<String>), NodeId>,
    /// Provisional components in creation order.
    provisional: Vec<NodeId>,
    next_provisional: i32,
    connections: Vec<Connection>,
    edges: Vec<Edge>,
    directives: IndexMap<String, String>,
    /// First designator index that did not fit, reported by `resolve`.
    invalid_index: Option<CompileError>,
    resolved: bool,
}

impl Compiler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds every statement in order.
    pub fn add_statements(&mut self, statements: &[Statement]) {
        for statement in statements {
            self.add_statement(statement);
        }
    }

    /// Adds one statement.
    pub fn add_statement(&mut self, statement: &Statement) {
        match statement {
            Statement::Definition(component) => {
                self.component(component);
            }
            Statement::Settings(settings) => self.settings(settings),
            Statement::Connection(connection) => {
                let mut source = self.node(&connection.source);
                for step in &connection.steps {
                    let target = self.node(&step.target);
                    self.connection(
                        source,
                        target,
                        step.source_terminal.clone(),
                        step.target_terminal.clone(),
                    );
                    source = target;
                }
            }
        }
    }

    /// Locates or creates the node a descriptor refers to.
    pub fn node(&mut self, descriptor: &NodeDescriptor) -> NodeId {
        match descriptor {
            NodeDescriptor::Component(component) => self.component(component),
            NodeDescriptor::Port(port) => self.port(port),
        }
    }

    /// Locates or creates a component node.
    ///
    /// Without an explicit index a new provisional node is always created.
    /// With an index, an existing node of the same designator is merged:
    /// fields present in `descriptor` overwrite the stored ones.
    pub fn component(&mut self, descriptor: &ComponentDescriptor) -> NodeId {
        self.resolved = false;
        let letter = descriptor.letter().to_string();
        let definition = &descriptor.definition;

        let index = match definition.designator.as_ref().and_then(|spec| spec.index) {
            Some(index) => match i32::try_from(index) {
                Ok(index) => Some(index),
                Err(_) => {
                    if self.invalid_index.is_none() {
                        self.invalid_index = Some(CompileError::IndexOutOfRange {
                            designator: format!("{letter}{index}"),
                        });
                    }
                    None
                }
            },
            None => None,
        };

        let Some(index) = index else {
            self.next_provisional -= 1;
            let designator = Designator::new(letter, self.next_provisional);
            trace!(designator:%; "Created provisional component");
            let id = self.push(Node::Component(ComponentNode {
                designator,
                symbol: definition.symbol.clone(),
                description: definition.description.clone(),
                value: definition.value.clone(),
            }));
            self.provisional.push(id);
            return id;
        };

        let designator = Designator::new(letter, index);
        if let Some(&id) = self.designators.get(&designator) {
            if let Node::Component(component) = &mut self.nodes[id.index()] {
                if definition.symbol.is_some() {
                    component.symbol = definition.symbol.clone();
                }
                if definition.description.is_some() {
                    component.description = definition.description.clone();
                }
                if definition.value.is_some() {
                    component.value = definition.value.clone();
                }
            }
            trace!(designator:%; "Merged component reference");
            return id;
        }

        let id = self.push(Node::Component(ComponentNode {
            designator: designator.clone(),
            symbol: definition.symbol.clone(),
            description: definition.description.clone(),
            value: definition.value.clone(),
        }));
        self.designators.insert(designator, id);
        id
    }

    /// Locates or creates a port node, deduplicated by kind and specifier.
    pub fn port(&mut self, descriptor: &PortDescriptor) -> NodeId {
        self.resolved = false;
        let key = (descriptor.kind, descriptor.specifier.clone());
        if let Some(&id) = self.ports.get(&key) {
            if let (Some(symbol), Node::Port(port)) =
                (&descriptor.symbol, &mut self.nodes[id.index()])
            {
                port.symbol = Some(symbol.clone());
            }
            return id;
        }

        let id = self.push(Node::Port(PortNode {
            kind: descriptor.kind,
            specifier: descriptor.specifier.clone(),
            symbol: descriptor.symbol.clone(),
        }));
        self.ports.insert(key, id);
        id
    }

    /// Appends a pending wire. Omitted terminals are filled during resolution.
    pub fn connection(
        &mut self,
        source: NodeId,
        target: NodeId,
        source_terminal: Option<String>,
        target_terminal: Option<String>,
    ) {
        self.resolved = false;
        self.connections.push(Connection {
            source,
            target,
            source_terminal,
            target_terminal,
        });
    }

    /// Records layout directives from a `set` statement; later keys win.
    pub fn settings(&mut self, settings: &Settings) {
        self.resolved = false;
        for (key, value) in &settings.entries {
            self.directives.insert(key.clone(), value.clone());
        }
    }

    /// Numbers provisional components and resolves every wire terminal.
    ///
    /// Resolving an already resolved compiler without intervening mutation
    /// produces the same graph.
    ///
    /// # Errors
    ///
    /// Returns [`CompileError::UnknownSymbol`] if a node's symbol is missing
    /// from `library`, and [`CompileError::UnknownTerminal`] if a wire names
    /// a terminal its node's symbol does not declare.
    /// [`CompileError::IndexOutOfRange`] and [`CompileError::IndexOverflow`]
    /// report designator indices that do not fit.
    pub fn resolve(&mut self, library: &SymbolLibrary) -> Result<(), CompileError> {
        if let Some(err) = &self.invalid_index {
            return Err(err.clone());
        }
        self.number_provisional()?;
        self.edges = self.resolve_terminals(library)?;
        self.resolved = true;
        debug!(
            nodes_len = self.nodes.len(),
            edges_len = self.edges.len();
            "Resolved schematic"
        );
        Ok(())
    }

    /// Returns `true` if the graph is resolved and readable.
    pub fn is_resolved(&self) -> bool {
        self.resolved
    }

    /// Resolved nodes, indexed by [`NodeId::index`].
    ///
    /// # Errors
    ///
    /// Returns [`CompileError::NotResolved`] if the compiler was mutated
    /// since the last resolution.
    pub fn nodes(&self) -> Result<&[Node], CompileError> {
        self.ensure_resolved()?;
        Ok(&self.nodes)
    }

    /// Resolved edges in source order.
    ///
    /// # Errors
    ///
    /// Returns [`CompileError::NotResolved`] if the compiler was mutated
    /// since the last resolution.
    pub fn edges(&self) -> Result<&[Edge], CompileError> {
        self.ensure_resolved()?;
        Ok(&self.edges)
    }

    /// A snapshot of the resolved graph.
    ///
    /// # Errors
    ///
    /// Returns [`CompileError::NotResolved`] if the compiler was mutated
    /// since the last resolution.
    pub fn schematic(&self) -> Result<Schematic, CompileError> {
        self.ensure_resolved()?;
        Ok(Schematic {
            nodes: self.nodes.clone(),
            edges: self.edges.clone(),
            directives: self.directives.clone(),
        })
    }

    fn ensure_resolved(&self) -> Result<(), CompileError> {
        if self.resolved {
            Ok(())
        } else {
            Err(CompileError::NotResolved)
        }
    }

    fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(node);
        id
    }
}

/// A resolved schematic graph, detached from the compiler.
#[derive(Debug, Clone, PartialEq)]
pub struct Schematic {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    directives: IndexMap<String, String>,
}

impl Schematic {
    /// Nodes, indexed by [`NodeId::index`].
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    /// Node handles in creation order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(NodeId::new)
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Layout directives collected from `set` statements.
    pub fn directives(&self) -> &IndexMap<String, String> {
        &self.directives
    }

    /// Finds a node by its display name.
    pub fn find(&self, name: &str) -> Option<NodeId> {
        self.nodes
            .iter()
            .position(|node| node.name() == name)
            .map(NodeId::new)
    }
}
