//! Terminal attachment points.
//!
//! A terminal is drawn as a lead: a path whose first or last segment is a
//! straight line ending on the symbol's bounding box. The on-edge endpoint
//! of that line is where wires attach.

use voltaic_core::geometry::{Point, Size};

use super::path::PathData;

/// Finds the attachment point of a normalized terminal path.
///
/// Tests the segment between the first two vertices, then the one between
/// the last two. A horizontal segment attaches through an endpoint on the
/// west or east edge, a vertical one through the north or south edge.
pub(super) fn attachment_point(path: &PathData, size: Size) -> Option<Point> {
    let vertices = path.vertices();
    if vertices.len() < 2 {
        return None;
    }

    let first = (vertices[0], vertices[1]);
    let last = (vertices[vertices.len() - 2], vertices[vertices.len() - 1]);
    [first, last]
        .into_iter()
        .find_map(|(a, b)| edge_endpoint(a, b, size))
}

fn edge_endpoint(a: Point, b: Point, size: Size) -> Option<Point> {
    let horizontal = a.y() == b.y();
    let vertical = a.x() == b.x();
    [a, b].into_iter().find(|point| {
        (horizontal && (point.x() == 0.0 || point.x() == size.width()))
            || (vertical && (point.y() == 0.0 || point.y() == size.height()))
    })
}
