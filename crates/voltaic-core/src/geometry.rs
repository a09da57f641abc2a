//! Basic geometric types shared by the geometry engine, the layout pipeline
//! and the renderer.
//!
//! All coordinates use the SVG convention: `x` grows to the right and `y`
//! grows downwards.

use std::fmt;

/// A point in 2D space.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Checks if both coordinates are finite
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Adds another point to this point, returning a new point
    pub fn add_point(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    /// Subtracts another point from this point, returning a new point
    pub fn sub_point(self, other: Point) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    /// Calculates the midpoint between this point and another point
    pub fn midpoint(self, other: Point) -> Self {
        Self {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
        }
    }

    /// Calculates the hypotenuse (Euclidean distance from origin)
    pub fn hypot(self) -> f32 {
        self.x.hypot(self.y)
    }

    /// Euclidean distance between two points
    pub fn distance(self, other: Point) -> f32 {
        self.sub_point(other).hypot()
    }

    /// Multiplies both coordinates by the given factor
    pub fn scale(self, factor: f32) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }

    /// Rounds both coordinates to the nearest multiple of `1 / precision`
    pub fn round_to(self, precision: f32) -> Self {
        Self {
            x: (self.x * precision).round() / precision,
            y: (self.y * precision).round() / precision,
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Represents the dimensions of an element with width and height
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f32 {
        self.height
    }

    /// Returns a new Size with the maximum width and height between this size and another
    pub fn max(self, other: Size) -> Self {
        Self {
            width: self.width.max(other.width),
            height: self.height.max(other.height),
        }
    }

    /// Returns the square whose side is the larger of width and height
    pub fn to_square(self) -> Self {
        let side = self.width.max(self.height);
        Self {
            width: side,
            height: side,
        }
    }

    /// Returns the size with width and height exchanged
    pub fn transpose(self) -> Self {
        Self {
            width: self.height,
            height: self.width,
        }
    }

    /// Returns the center point of a box of this size anchored at the origin
    pub fn center(self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Represents a rectangular bounding box with minimum and maximum coordinates
///
/// [`Bounds::empty`] starts inverted (min at `+inf`, max at `-inf`) so that
/// including any point yields that point's degenerate box. A bounds value that
/// never received a point stays non-finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

impl Bounds {
    /// Creates bounds from explicit minimum and maximum coordinates
    pub fn new(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Creates inverted bounds that contain nothing
    pub fn empty() -> Self {
        Self {
            min_x: f32::INFINITY,
            min_y: f32::INFINITY,
            max_x: f32::NEG_INFINITY,
            max_y: f32::NEG_INFINITY,
        }
    }

    /// Returns the minimum x-coordinate of the bounds
    pub fn min_x(self) -> f32 {
        self.min_x
    }

    /// Returns the minimum y-coordinate of the bounds
    pub fn min_y(self) -> f32 {
        self.min_y
    }

    /// Returns the maximum x-coordinate of the bounds
    pub fn max_x(self) -> f32 {
        self.max_x
    }

    /// Returns the maximum y-coordinate of the bounds
    pub fn max_y(self) -> f32 {
        self.max_y
    }

    /// Returns the width of the bounds
    pub fn width(self) -> f32 {
        self.max_x - self.min_x
    }

    /// Returns the height of the bounds
    pub fn height(self) -> f32 {
        self.max_y - self.min_y
    }

    /// True when all four scalars are finite
    pub fn is_finite(self) -> bool {
        self.min_x.is_finite()
            && self.min_y.is_finite()
            && self.max_x.is_finite()
            && self.max_y.is_finite()
    }

    /// Returns the top-left corner as a Point
    pub fn min_point(self) -> Point {
        Point {
            x: self.min_x,
            y: self.min_y,
        }
    }

    /// Converts bounds to a Size object
    pub fn to_size(self) -> Size {
        Size {
            width: self.width(),
            height: self.height(),
        }
    }

    /// Grows the bounds so that they contain `point`
    pub fn include(self, point: Point) -> Self {
        Self {
            min_x: self.min_x.min(point.x),
            min_y: self.min_y.min(point.y),
            max_x: self.max_x.max(point.x),
            max_y: self.max_y.max(point.y),
        }
    }

    /// Merges two bounds to create a larger bounds that contains both
    ///
    /// The resulting bounds will have the minimum values of both bounds for min_x and min_y,
    /// and the maximum values of both bounds for max_x and max_y.
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::empty()
    }
}

/// One side of an axis-aligned box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    West,
    East,
    North,
    South,
}

impl Side {
    /// Sides in label-placement priority order.
    pub const PRIORITY: [Side; 4] = [Side::West, Side::East, Side::North, Side::South];

    /// Returns the side of a `size` box that `point` lies exactly on, if any.
    ///
    /// Corners resolve to the horizontal sides first (west/east).
    pub fn of_point(point: Point, size: Size) -> Option<Side> {
        if point.x == 0.0 {
            Some(Side::West)
        } else if point.x == size.width {
            Some(Side::East)
        } else if point.y == 0.0 {
            Some(Side::North)
        } else if point.y == size.height {
            Some(Side::South)
        } else {
            None
        }
    }

    /// Upper-case name used in layout directives.
    pub fn as_str(self) -> &'static str {
        match self {
            Side::West => "WEST",
            Side::East => "EAST",
            Side::North => "NORTH",
            Side::South => "SOUTH",
        }
    }

    /// Parses a directive value produced by [`Side::as_str`].
    pub fn from_directive(value: &str) -> Option<Side> {
        match value {
            "WEST" => Some(Side::West),
            "EAST" => Some(Side::East),
            "NORTH" => Some(Side::North),
            "SOUTH" => Some(Side::South),
            _ => None,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_point_new() {
        let point = Point::new(3.5, 4.2);
        assert_eq!(point.x(), 3.5);
        assert_eq!(point.y(), 4.2);
    }

    #[test]
    fn test_point_default() {
        let point = Point::default();
        assert_eq!(point, Point::new(0.0, 0.0));
    }

    #[test]
    fn test_point_add_sub() {
        let p1 = Point::new(1.0, 2.0);
        let p2 = Point::new(3.0, 4.0);
        assert_eq!(p1.add_point(p2), Point::new(4.0, 6.0));
        assert_eq!(p2.sub_point(p1), Point::new(2.0, 2.0));
    }

    #[test]
    fn test_point_distance() {
        let origin = Point::new(0.0, 0.0);
        assert_approx_eq!(f32, origin.distance(Point::new(3.0, 4.0)), 5.0);
        assert_approx_eq!(f32, origin.distance(origin), 0.0);
    }

    #[test]
    fn test_point_round_to() {
        let point = Point::new(1.23456, -0.00049).round_to(1000.0);
        assert_approx_eq!(f32, point.x(), 1.235);
        assert_approx_eq!(f32, point.y(), 0.0);
    }

    #[test]
    fn test_size_square_and_transpose() {
        let size = Size::new(40.0, 10.0);
        assert_eq!(size.to_square(), Size::new(40.0, 40.0));
        assert_eq!(size.transpose(), Size::new(10.0, 40.0));
        assert_eq!(size.center(), Point::new(20.0, 5.0));
    }

    #[test]
    fn test_bounds_empty_is_not_finite() {
        assert!(!Bounds::empty().is_finite());
    }

    #[test]
    fn test_bounds_include() {
        let bounds = Bounds::empty()
            .include(Point::new(2.0, 3.0))
            .include(Point::new(-1.0, 7.0));

        assert!(bounds.is_finite());
        assert_eq!(bounds.min_point(), Point::new(-1.0, 3.0));
        assert_eq!(bounds.to_size(), Size::new(3.0, 4.0));
    }

    #[test]
    fn test_bounds_merge_with_empty() {
        let bounds = Bounds::new(0.0, 0.0, 10.0, 5.0);
        assert_eq!(bounds.merge(&Bounds::empty()), bounds);
    }

    #[test]
    fn test_side_of_point() {
        let size = Size::new(10.0, 20.0);
        assert_eq!(Side::of_point(Point::new(0.0, 5.0), size), Some(Side::West));
        assert_eq!(Side::of_point(Point::new(10.0, 5.0), size), Some(Side::East));
        assert_eq!(Side::of_point(Point::new(5.0, 0.0), size), Some(Side::North));
        assert_eq!(Side::of_point(Point::new(5.0, 20.0), size), Some(Side::South));
        assert_eq!(Side::of_point(Point::new(5.0, 5.0), size), None);
    }

    #[test]
    fn test_side_directive_round_trip() {
        for side in Side::PRIORITY {
            assert_eq!(Side::from_directive(side.as_str()), Some(side));
        }
        assert_eq!(Side::from_directive("UP"), None);
    }

    proptest::proptest! {
        #[test]
        fn prop_bounds_contain_every_included_point(
            points in proptest::collection::vec((-1e4f32..1e4, -1e4f32..1e4), 1..32)
        ) {
            let bounds = points
                .iter()
                .fold(Bounds::empty(), |acc, &(x, y)| acc.include(Point::new(x, y)));

            proptest::prop_assert!(bounds.is_finite());
            for (x, y) in points {
                proptest::prop_assert!(bounds.min_x() <= x && x <= bounds.max_x());
                proptest::prop_assert!(bounds.min_y() <= y && y <= bounds.max_y());
            }
        }
    }
}
