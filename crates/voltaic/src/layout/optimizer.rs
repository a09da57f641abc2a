//! Orientation search.
//!
//! The reference pass lays every symbol out as a square box whose ports the
//! engine may place freely. For each symbol we then try every permitted
//! rotation, plain and mirrored, and keep the orientation whose real
//! terminal positions land closest to where the engine wanted the ports.

use log::trace;

use voltaic_core::geometry::{Point, Size};

use super::{LayoutError, transform::Orientation};

/// The winning orientation of one node and its score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Choice {
    pub orientation: Orientation,
    /// Sum of port distances to the reference layout.
    pub distance: f32,
}

/// Picks the orientation of a node.
///
/// `ports` are the symbol's terminal positions inside the square `square`
/// box and `reference` the positions the engine chose for the same ports,
/// index for index. Candidates are enumerated unmirrored first, in the
/// order of `rotations`, then mirrored; the first candidate with the
/// smallest total distance wins.
///
/// # Errors
///
/// Returns [`LayoutError::PortCountMismatch`] if the two port lists differ
/// in length.
pub fn choose_orientation(
    node: &str,
    square: Size,
    ports: &[Point],
    reference: &[Point],
    rotations: &[u8],
) -> Result<Choice, LayoutError> {
    if ports.len() != reference.len() {
        return Err(LayoutError::PortCountMismatch {
            node: node.to_string(),
            expected: ports.len(),
            found: reference.len(),
        });
    }

    if let [rotation] = rotations {
        let orientation = Orientation::new(*rotation, false);
        return Ok(Choice {
            orientation,
            distance: distance(orientation, square, ports, reference),
        });
    }

    let candidates = [false, true].into_iter().flat_map(|mirrored| {
        rotations
            .iter()
            .map(move |rotation| Orientation::new(*rotation, mirrored))
    });

    let mut best: Option<Choice> = None;
    for orientation in candidates {
        let distance = distance(orientation, square, ports, reference);
        trace!(node, orientation:%, distance; "Scored orientation");
        if best.is_none_or(|best| distance < best.distance) {
            best = Some(Choice {
                orientation,
                distance,
            });
        }
    }

    Ok(best.unwrap_or(Choice {
        orientation: Orientation::default(),
        distance: distance(Orientation::default(), square, ports, reference),
    }))
}

/// Total distance between the transformed ports and the reference ports.
pub fn distance(orientation: Orientation, square: Size, ports: &[Point], reference: &[Point]) -> f32 {
    ports
        .iter()
        .zip(reference)
        .map(|(port, target)| orientation.apply(*port, square).distance(*target))
        .sum()
}
