//! Quarter-turn rotation and horizontal mirroring of symbol boxes.
//!
//! Rotation is rigid about the box center: translate the center to the
//! origin, rotate by `steps * 90°`, translate to the center of the rotated
//! box. With `y` pointing down, positive steps turn clockwise on screen.
//! The trigonometry uses an exact table so coordinates never drift.

use std::fmt;

use voltaic_core::geometry::{Point, Size};

/// A rotation by whole quarter turns followed by an optional mirror.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Orientation {
    rotation: u8,
    mirrored: bool,
}

impl Orientation {
    /// Creates an orientation; `rotation` is taken modulo four.
    pub fn new(rotation: u8, mirrored: bool) -> Self {
        Self {
            rotation: rotation % 4,
            mirrored,
        }
    }

    /// Quarter turns, in `0..4`.
    pub fn rotation(self) -> u8 {
        self.rotation
    }

    pub fn degrees(self) -> u16 {
        u16::from(self.rotation) * 90
    }

    pub fn is_mirrored(self) -> bool {
        self.mirrored
    }

    /// Size of a `size` box after the transform.
    pub fn apply_size(self, size: Size) -> Size {
        if self.rotation % 2 == 1 {
            size.transpose()
        } else {
            size
        }
    }

    /// Maps a point inside a `size` box to the transformed box.
    pub fn apply(self, point: Point, size: Size) -> Point {
        let (cos, sin) = self.cos_sin();
        let offset = point.sub_point(size.center());
        let rotated = Point::new(
            cos * offset.x() - sin * offset.y(),
            sin * offset.x() + cos * offset.y(),
        );
        let target = self.apply_size(size);
        let point = rotated.add_point(target.center());
        if self.mirrored {
            Point::new(target.width() - point.x(), point.y())
        } else {
            point
        }
    }

    /// The affine matrix `[a, b, c, d, e, f]` of [`Orientation::apply`],
    /// as used by the SVG `matrix()` transform.
    pub fn matrix(self, size: Size) -> [f32; 6] {
        let (w, h) = (size.width(), size.height());
        let [a, b, c, d, e, f] = match self.rotation {
            0 => [1.0, 0.0, 0.0, 1.0, 0.0, 0.0],
            1 => [0.0, 1.0, -1.0, 0.0, h, 0.0],
            2 => [-1.0, 0.0, 0.0, -1.0, w, h],
            _ => [0.0, -1.0, 1.0, 0.0, 0.0, w],
        };
        if self.mirrored {
            let width = self.apply_size(size).width();
            [-a, b, -c, d, width - e, f]
        } else {
            [a, b, c, d, e, f]
        }
    }

    fn cos_sin(self) -> (f32, f32) {
        match self.rotation {
            0 => (1.0, 0.0),
            1 => (0.0, 1.0),
            2 => (-1.0, 0.0),
            _ => (0.0, -1.0),
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.degrees())?;
        if self.mirrored {
            f.write_str(" mirrored")?;
        }
        Ok(())
    }
}
