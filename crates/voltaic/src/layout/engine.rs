//! The layout engine seam.

use super::{LayoutError, graph::LayoutGraph};

/// Places nodes, ports and labels and routes edges.
///
/// An engine receives a [`LayoutGraph`] with sizes, ports and directives
/// and returns it with positions and routes filled in. Nodes, ports and
/// edges keep their ids; their order may change. Ports of nodes whose
/// `layout.portConstraints` is `FIXED_POS` must not move.
pub trait LayoutEngine {
    /// Lays out `graph`.
    ///
    /// # Errors
    ///
    /// Returns a [`LayoutError`] if an edge references a missing node or
    /// port, or a directive cannot be interpreted.
    fn layout(&self, graph: LayoutGraph) -> Result<LayoutGraph, LayoutError>;
}
