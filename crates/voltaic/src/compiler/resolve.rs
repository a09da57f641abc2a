//! Designator numbering and terminal resolution.

use std::collections::HashMap;

use log::trace;

use crate::library::{SymbolInfo, SymbolLibrary};

use super::{CompileError, Compiler, Edge, Node, NodeId};

/// Which end of a wire a terminal belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WireEnd {
    Source,
    Target,
}

impl Compiler {
    /// Assigns final indices to provisional components.
    ///
    /// Per type letter, numbering starts above the highest index already in
    /// use and follows creation order. Nothing is renumbered if a letter
    /// runs out of indices.
    pub(super) fn number_provisional(&mut self) -> Result<(), CompileError> {
        if self.provisional.is_empty() {
            return Ok(());
        }

        let mut highest: HashMap<String, i32> = HashMap::new();
        for node in &self.nodes {
            if let Node::Component(component) = node {
                let designator = &component.designator;
                if !designator.is_provisional() {
                    let max = highest.entry(designator.letter().to_string()).or_insert(0);
                    *max = (*max).max(designator.index());
                }
            }
        }

        let mut numbered = Vec::with_capacity(self.provisional.len());
        for &id in &self.provisional {
            let Node::Component(component) = &self.nodes[id.index()] else {
                panic!("provisional node {id:?} is not a component");
            };
            assert!(
                component.designator.is_provisional(),
                "component {} was queued for numbering with a non-negative index",
                component.designator,
            );

            let letter = component.designator.letter();
            let max = highest.entry(letter.to_string()).or_insert(0);
            *max = max
                .checked_add(1)
                .ok_or_else(|| CompileError::IndexOverflow {
                    letter: letter.to_string(),
                })?;
            numbered.push((id, component.designator.with_index(*max)));
        }

        for (id, designator) in numbered {
            if let Node::Component(component) = &mut self.nodes[id.index()] {
                trace!(from:% = component.designator, to:% = designator; "Numbered component");
                component.designator = designator.clone();
            }
            self.designators.insert(designator, id);
        }
        self.provisional.clear();
        Ok(())
    }

    /// Looks up every node's symbol and turns pending wires into edges.
    pub(super) fn resolve_terminals(
        &self,
        library: &SymbolLibrary,
    ) -> Result<Vec<Edge>, CompileError> {
        let symbols = self
            .nodes
            .iter()
            .map(|node| {
                library
                    .get(node.symbol())
                    .ok_or_else(|| CompileError::UnknownSymbol {
                        node: node.name(),
                        symbol: node.symbol().to_string(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        self.connections
            .iter()
            .map(|connection| {
                let source_terminal = self.terminal(
                    connection.source,
                    symbols[connection.source.index()],
                    connection.source_terminal.as_deref(),
                    WireEnd::Source,
                )?;
                let target_terminal = self.terminal(
                    connection.target,
                    symbols[connection.target.index()],
                    connection.target_terminal.as_deref(),
                    WireEnd::Target,
                )?;
                Ok(Edge::new(
                    connection.source,
                    source_terminal,
                    connection.target,
                    target_terminal,
                ))
            })
            .collect()
    }

    /// Validates an explicit terminal or picks the default one.
    ///
    /// Single-terminal symbols always use that terminal. Otherwise a wire
    /// leaves through terminal 1 and enters through terminal 0.
    fn terminal(
        &self,
        id: NodeId,
        info: &SymbolInfo,
        requested: Option<&str>,
        end: WireEnd,
    ) -> Result<String, CompileError> {
        let node = &self.nodes[id.index()];
        if let Some(terminal) = requested {
            if info.has_terminal(terminal) {
                return Ok(terminal.to_string());
            }
            return Err(CompileError::UnknownTerminal {
                node: node.name(),
                symbol: node.symbol().to_string(),
                terminal: terminal.to_string(),
            });
        }

        let terminals = info.terminals();
        let position = match (terminals.len(), end) {
            (1, _) => 0,
            (_, WireEnd::Source) => 1,
            (_, WireEnd::Target) => 0,
        };
        Ok(terminals[position].clone())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use voltaic_core::statement::{ComponentDescriptor, Definition, Delimiter, DesignatorSpec};

    use super::*;

    fn descriptor(letter: &str, index: Option<u32>) -> ComponentDescriptor {
        ComponentDescriptor {
            delimiter: Delimiter::Square,
            definition: Definition {
                designator: Some(DesignatorSpec {
                    letter: letter.to_string(),
                    index,
                }),
                ..Definition::default()
            },
        }
    }

    #[test]
    fn test_numbering_without_explicit_indices() {
        let mut compiler = Compiler::new();
        for _ in 0..3 {
            compiler.component(&descriptor("C", None));
        }
        compiler.number_provisional().unwrap();
        let names: Vec<_> = compiler.nodes.iter().map(Node::name).collect();
        assert_eq!(names, vec!["C1", "C2", "C3"]);
        assert!(compiler.provisional.is_empty());
    }

    #[test]
    fn test_numbered_components_merge_later_references() {
        let mut compiler = Compiler::new();
        let first = compiler.component(&descriptor("R", None));
        compiler.number_provisional().unwrap();
        let again = compiler.component(&descriptor("R", Some(1)));
        assert_eq!(first, again);
    }

    #[test]
    fn test_out_of_range_index_is_reported() {
        let mut compiler = Compiler::new();
        compiler.component(&descriptor("R", Some(3_000_000_000)));
        assert_eq!(
            compiler.resolve(&SymbolLibrary::builtin()).unwrap_err(),
            CompileError::IndexOutOfRange {
                designator: "R3000000000".to_string()
            }
        );
    }

    #[test]
    fn test_overflow_leaves_components_queued() {
        let mut compiler = Compiler::new();
        compiler.component(&descriptor("R", Some(i32::MAX as u32)));
        let queued = compiler.component(&descriptor("R", None));
        compiler.component(&descriptor("C", None));

        assert_eq!(
            compiler.number_provisional(),
            Err(CompileError::IndexOverflow {
                letter: "R".to_string()
            })
        );
        assert_eq!(compiler.provisional.len(), 2);
        assert!(!compiler.nodes[queued.index()].is_resolved());
        assert!(compiler.nodes.iter().skip(1).all(|node| !node.is_resolved()));
    }

    proptest! {
        #[test]
        fn numbering_is_unique_and_above_explicit(
            references in prop::collection::vec(
                (prop::sample::select(vec!["R", "C", "Q"]), prop::option::of(1u32..20)),
                1..40,
            )
        ) {
            let mut compiler = Compiler::new();
            let ids: Vec<NodeId> = references
                .iter()
                .map(|(letter, index)| compiler.component(&descriptor(letter, *index)))
                .collect();
            compiler.number_provisional().unwrap();

            let mut max_explicit: HashMap<&str, i32> = HashMap::new();
            for (letter, index) in &references {
                if let Some(index) = index {
                    let max = max_explicit.entry(*letter).or_insert(0);
                    *max = (*max).max(*index as i32);
                }
            }

            let mut seen = std::collections::HashSet::new();
            for node in &compiler.nodes {
                let Node::Component(component) = node else { continue };
                prop_assert!(component.designator().index() >= 1);
                prop_assert!(seen.insert(component.designator().clone()));
            }

            for ((letter, index), id) in references.iter().zip(&ids) {
                if index.is_some() {
                    continue;
                }
                let Node::Component(component) = &compiler.nodes[id.index()] else {
                    panic!("expected a component");
                };
                let max = max_explicit.get(letter).copied().unwrap_or(0);
                prop_assert!(component.designator().index() > max);
            }
        }
    }
}
