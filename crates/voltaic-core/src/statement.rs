//! Statement model produced by the parser and consumed by the compiler.
//!
//! A schematic source is an ordered sequence of [`Statement`]s. Node
//! references inside connections are a closed [`NodeDescriptor`] enum, so
//! every consumer matches components and ports exhaustively.

use std::fmt;

use crate::value::Value;

/// One top-level statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A chain of wires, e.g. `[R1] - [R2] - gnd`.
    Connection(ConnectionStatement),
    /// A standalone component definition, e.g. `[R1:22k "input"]`.
    Definition(ComponentDescriptor),
    /// Layout settings, e.g. `set layout.direction=DOWN`.
    Settings(Settings),
}

/// A wire chain starting at `source`.
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectionStatement {
    pub source: NodeDescriptor,
    pub steps: Vec<ConnectionStep>,
}

/// One wire of a chain, from the previous node to `target`.
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectionStep {
    /// Terminal on the previous node in the chain.
    pub source_terminal: Option<String>,
    /// Terminal on `target`.
    pub target_terminal: Option<String>,
    pub target: NodeDescriptor,
}

/// A node reference: either a component or a port.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeDescriptor {
    Component(ComponentDescriptor),
    Port(PortDescriptor),
}

/// Delimiter pair used to write a component. Each implies a default type letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Delimiter {
    /// `[ ]`, resistors.
    Square,
    /// `{ }`, capacitors.
    Curly,
    /// `< >`, diodes.
    Angle,
}

impl Delimiter {
    /// Type letter used when the definition carries no designator.
    pub fn default_letter(self) -> &'static str {
        match self {
            Delimiter::Square => "R",
            Delimiter::Curly => "C",
            Delimiter::Angle => "D",
        }
    }

    /// Opening and closing characters.
    pub fn chars(self) -> (char, char) {
        match self {
            Delimiter::Square => ('[', ']'),
            Delimiter::Curly => ('{', '}'),
            Delimiter::Angle => ('<', '>'),
        }
    }
}

/// A component written between delimiters.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentDescriptor {
    pub delimiter: Delimiter,
    pub definition: Definition,
}

impl ComponentDescriptor {
    /// The type letter of this component: explicit designator letter, else the delimiter default.
    pub fn letter(&self) -> &str {
        self.definition
            .designator
            .as_ref()
            .map_or(self.delimiter.default_letter(), |spec| spec.letter.as_str())
    }
}

/// The optional fields a component reference may carry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Definition {
    pub designator: Option<DesignatorSpec>,
    pub value: Option<Value>,
    pub symbol: Option<String>,
    pub description: Option<String>,
}

/// A designator as written: letters with an optional index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesignatorSpec {
    pub letter: String,
    pub index: Option<u32>,
}

/// The fixed set of port kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PortKind {
    In,
    Out,
    Gnd,
    Vcc,
    Vee,
}

impl PortKind {
    /// Default symbol name of the port kind.
    pub fn symbol(self) -> &'static str {
        match self {
            PortKind::In => "IN",
            PortKind::Out => "OUT",
            PortKind::Gnd => "GND",
            PortKind::Vcc => "VCC",
            PortKind::Vee => "VEE",
        }
    }

    /// Source keyword of the port kind.
    pub fn keyword(self) -> &'static str {
        match self {
            PortKind::In => "in",
            PortKind::Out => "out",
            PortKind::Gnd => "gnd",
            PortKind::Vcc => "vcc",
            PortKind::Vee => "vee",
        }
    }

    /// Parses a source keyword.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "in" => Some(PortKind::In),
            "out" => Some(PortKind::Out),
            "gnd" => Some(PortKind::Gnd),
            "vcc" => Some(PortKind::Vcc),
            "vee" => Some(PortKind::Vee),
            _ => None,
        }
    }
}

impl fmt::Display for PortKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A port reference such as `gnd` or `in:audio`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortDescriptor {
    pub kind: PortKind,
    pub specifier: Option<String>,
    pub symbol: Option<String>,
}

/// Flat key/value settings forwarded to the layout engine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub entries: Vec<(String, String)>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_letter_defaults_to_delimiter() {
        let descriptor = ComponentDescriptor {
            delimiter: Delimiter::Curly,
            definition: Definition::default(),
        };
        assert_eq!(descriptor.letter(), "C");
    }

    #[test]
    fn test_component_letter_prefers_designator() {
        let descriptor = ComponentDescriptor {
            delimiter: Delimiter::Square,
            definition: Definition {
                designator: Some(DesignatorSpec {
                    letter: "Q".to_string(),
                    index: None,
                }),
                ..Definition::default()
            },
        };
        assert_eq!(descriptor.letter(), "Q");
    }

    #[test]
    fn test_port_kind_keywords() {
        for kind in [
            PortKind::In,
            PortKind::Out,
            PortKind::Gnd,
            PortKind::Vcc,
            PortKind::Vee,
        ] {
            assert_eq!(PortKind::from_keyword(kind.keyword()), Some(kind));
        }
        assert_eq!(PortKind::from_keyword("ground"), None);
    }
}
