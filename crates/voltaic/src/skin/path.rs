//! Path data in absolute coordinates.
//!
//! Path strings are parsed with the `svg` crate and flattened into absolute
//! [`Segment`]s: relative commands are resolved against the current point
//! and smooth curves get their reflected control point. This keeps bounds,
//! translation and terminal extraction free of command bookkeeping.

use std::{f32::consts::PI, slice::Chunks};

use svg::node::element::path::{Command, Data, Parameters, Position};

use voltaic_core::geometry::{Bounds, Point};

/// Points sampled along an elliptical arc when computing bounds.
const ARC_SAMPLES: usize = 64;

/// One drawing command with absolute coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    MoveTo(Point),
    LineTo(Point),
    QuadTo {
        control: Point,
        to: Point,
    },
    CubicTo {
        control1: Point,
        control2: Point,
        to: Point,
    },
    ArcTo {
        rx: f32,
        ry: f32,
        rotation: f32,
        large_arc: bool,
        sweep: bool,
        to: Point,
    },
    Close,
}

/// A parsed path.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathData {
    segments: Vec<Segment>,
}

impl PathData {
    /// Parses SVG path data.
    ///
    /// # Errors
    ///
    /// Returns a message if the text is not valid path data or a command
    /// carries the wrong number of parameters.
    pub fn parse(text: &str) -> Result<Self, String> {
        let data = Data::parse(text).map_err(|err| err.to_string())?;
        let mut builder = PathBuilder::default();
        for command in data.iter() {
            builder.command(command)?;
        }
        Ok(Self {
            segments: builder.segments,
        })
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Exact bounds for lines and Bézier curves, sampled for arcs.
    pub fn bounds(&self) -> Bounds {
        let mut bounds = Bounds::empty();
        let mut current = Point::new(0.0, 0.0);
        let mut start = current;

        for segment in &self.segments {
            match *segment {
                Segment::MoveTo(to) => {
                    bounds = bounds.include(to);
                    start = to;
                    current = to;
                }
                Segment::LineTo(to) => {
                    bounds = bounds.include(to);
                    current = to;
                }
                Segment::QuadTo { control, to } => {
                    bounds = bounds.include(to);
                    for t in quad_extrema(current, control, to) {
                        bounds = bounds.include(quad_point(current, control, to, t));
                    }
                    current = to;
                }
                Segment::CubicTo {
                    control1,
                    control2,
                    to,
                } => {
                    bounds = bounds.include(to);
                    for t in cubic_extrema(current, control1, control2, to) {
                        bounds = bounds.include(cubic_point(current, control1, control2, to, t));
                    }
                    current = to;
                }
                Segment::ArcTo {
                    rx,
                    ry,
                    rotation,
                    large_arc,
                    sweep,
                    to,
                } => {
                    bounds = bounds.include(to);
                    if let Some(arc) = Arc::from_endpoints(current, to, rx, ry, rotation, large_arc, sweep) {
                        for i in 1..ARC_SAMPLES {
                            let t = i as f32 / ARC_SAMPLES as f32;
                            bounds = bounds.include(arc.point(arc.start_angle + arc.sweep_angle * t));
                        }
                    }
                    current = to;
                }
                Segment::Close => current = start,
            }
        }
        bounds
    }

    /// The path moved by `offset`, with every coordinate rounded to
    /// multiples of `1 / precision`.
    pub fn translated(&self, offset: Point, precision: f32) -> Self {
        let moved = |point: Point| point.add_point(offset).round_to(precision);
        let segments = self
            .segments
            .iter()
            .map(|segment| match *segment {
                Segment::MoveTo(to) => Segment::MoveTo(moved(to)),
                Segment::LineTo(to) => Segment::LineTo(moved(to)),
                Segment::QuadTo { control, to } => Segment::QuadTo {
                    control: moved(control),
                    to: moved(to),
                },
                Segment::CubicTo {
                    control1,
                    control2,
                    to,
                } => Segment::CubicTo {
                    control1: moved(control1),
                    control2: moved(control2),
                    to: moved(to),
                },
                Segment::ArcTo {
                    rx,
                    ry,
                    rotation,
                    large_arc,
                    sweep,
                    to,
                } => Segment::ArcTo {
                    rx,
                    ry,
                    rotation,
                    large_arc,
                    sweep,
                    to: moved(to),
                },
                Segment::Close => Segment::Close,
            })
            .collect();
        Self { segments }
    }

    /// On-curve points in drawing order; a close returns to its subpath start.
    pub fn vertices(&self) -> Vec<Point> {
        let mut vertices = Vec::with_capacity(self.segments.len());
        let mut start = None;
        for segment in &self.segments {
            match *segment {
                Segment::MoveTo(to) => {
                    start = Some(to);
                    vertices.push(to);
                }
                Segment::LineTo(to)
                | Segment::QuadTo { to, .. }
                | Segment::CubicTo { to, .. }
                | Segment::ArcTo { to, .. } => vertices.push(to),
                Segment::Close => vertices.extend(start),
            }
        }
        vertices
    }

    /// Serializes the path back to absolute `svg` path data.
    pub fn to_data(&self) -> Data {
        let params = |values: Vec<f32>| Parameters::from(values);
        let commands: Vec<Command> = self
            .segments
            .iter()
            .map(|segment| match *segment {
                Segment::MoveTo(to) => Command::Move(Position::Absolute, params(vec![to.x(), to.y()])),
                Segment::LineTo(to) => Command::Line(Position::Absolute, params(vec![to.x(), to.y()])),
                Segment::QuadTo { control, to } => Command::QuadraticCurve(
                    Position::Absolute,
                    params(vec![control.x(), control.y(), to.x(), to.y()]),
                ),
                Segment::CubicTo {
                    control1,
                    control2,
                    to,
                } => Command::CubicCurve(
                    Position::Absolute,
                    params(vec![
                        control1.x(),
                        control1.y(),
                        control2.x(),
                        control2.y(),
                        to.x(),
                        to.y(),
                    ]),
                ),
                Segment::ArcTo {
                    rx,
                    ry,
                    rotation,
                    large_arc,
                    sweep,
                    to,
                } => Command::EllipticalArc(
                    Position::Absolute,
                    params(vec![
                        rx,
                        ry,
                        rotation,
                        f32::from(u8::from(large_arc)),
                        f32::from(u8::from(sweep)),
                        to.x(),
                        to.y(),
                    ]),
                ),
                Segment::Close => Command::Close,
            })
            .collect();
        Data::from(commands)
    }
}

/// Tracks the pen while flattening `svg` commands.
#[derive(Default)]
struct PathBuilder {
    segments: Vec<Segment>,
    current: Point,
    start: Point,
}

impl PathBuilder {
    fn command(&mut self, command: &Command) -> Result<(), String> {
        match command {
            Command::Move(position, parameters) => {
                for (i, pair) in chunks(parameters, 2, 'M')?.enumerate() {
                    let to = self.resolve(*position, pair[0], pair[1]);
                    if i == 0 {
                        self.start = to;
                        self.push(Segment::MoveTo(to));
                    } else {
                        self.push(Segment::LineTo(to));
                    }
                }
            }
            Command::Line(position, parameters) => {
                for pair in chunks(parameters, 2, 'L')? {
                    let to = self.resolve(*position, pair[0], pair[1]);
                    self.push(Segment::LineTo(to));
                }
            }
            Command::HorizontalLine(position, parameters) => {
                for value in chunks(parameters, 1, 'H')? {
                    let x = match position {
                        Position::Absolute => value[0],
                        Position::Relative => self.current.x() + value[0],
                    };
                    self.push(Segment::LineTo(Point::new(x, self.current.y())));
                }
            }
            Command::VerticalLine(position, parameters) => {
                for value in chunks(parameters, 1, 'V')? {
                    let y = match position {
                        Position::Absolute => value[0],
                        Position::Relative => self.current.y() + value[0],
                    };
                    self.push(Segment::LineTo(Point::new(self.current.x(), y)));
                }
            }
            Command::QuadraticCurve(position, parameters) => {
                for values in chunks(parameters, 4, 'Q')? {
                    let control = self.resolve(*position, values[0], values[1]);
                    let to = self.resolve(*position, values[2], values[3]);
                    self.push(Segment::QuadTo { control, to });
                }
            }
            Command::SmoothQuadraticCurve(position, parameters) => {
                for values in chunks(parameters, 2, 'T')? {
                    let control = match self.segments.last() {
                        Some(Segment::QuadTo { control, .. }) => self.reflect(*control),
                        _ => self.current,
                    };
                    let to = self.resolve(*position, values[0], values[1]);
                    self.push(Segment::QuadTo { control, to });
                }
            }
            Command::CubicCurve(position, parameters) => {
                for values in chunks(parameters, 6, 'C')? {
                    let control1 = self.resolve(*position, values[0], values[1]);
                    let control2 = self.resolve(*position, values[2], values[3]);
                    let to = self.resolve(*position, values[4], values[5]);
                    self.push(Segment::CubicTo {
                        control1,
                        control2,
                        to,
                    });
                }
            }
            Command::SmoothCubicCurve(position, parameters) => {
                for values in chunks(parameters, 4, 'S')? {
                    let control1 = match self.segments.last() {
                        Some(Segment::CubicTo { control2, .. }) => self.reflect(*control2),
                        _ => self.current,
                    };
                    let control2 = self.resolve(*position, values[0], values[1]);
                    let to = self.resolve(*position, values[2], values[3]);
                    self.push(Segment::CubicTo {
                        control1,
                        control2,
                        to,
                    });
                }
            }
            Command::EllipticalArc(position, parameters) => {
                for values in chunks(parameters, 7, 'A')? {
                    let to = self.resolve(*position, values[5], values[6]);
                    self.push(Segment::ArcTo {
                        rx: values[0],
                        ry: values[1],
                        rotation: values[2],
                        large_arc: values[3] != 0.0,
                        sweep: values[4] != 0.0,
                        to,
                    });
                }
            }
            Command::Close => self.push(Segment::Close),
        }
        Ok(())
    }

    fn resolve(&self, position: Position, x: f32, y: f32) -> Point {
        match position {
            Position::Absolute => Point::new(x, y),
            Position::Relative => self.current.add_point(Point::new(x, y)),
        }
    }

    /// Mirrors a control point through the current point.
    fn reflect(&self, control: Point) -> Point {
        self.current.scale(2.0).sub_point(control)
    }

    fn push(&mut self, segment: Segment) {
        self.current = match segment {
            Segment::MoveTo(to)
            | Segment::LineTo(to)
            | Segment::QuadTo { to, .. }
            | Segment::CubicTo { to, .. }
            | Segment::ArcTo { to, .. } => to,
            Segment::Close => self.start,
        };
        self.segments.push(segment);
    }
}

fn chunks(parameters: &Parameters, size: usize, command: char) -> Result<Chunks<'_, f32>, String> {
    if parameters.is_empty() || parameters.len() % size != 0 {
        return Err(format!(
            "`{command}` expects a multiple of {size} parameters, got {}",
            parameters.len()
        ));
    }
    Ok(parameters.chunks(size))
}

fn quad_point(p0: Point, p1: Point, p2: Point, t: f32) -> Point {
    let mt = 1.0 - t;
    p0.scale(mt * mt)
        .add_point(p1.scale(2.0 * mt * t))
        .add_point(p2.scale(t * t))
}

fn cubic_point(p0: Point, p1: Point, p2: Point, p3: Point, t: f32) -> Point {
    let mt = 1.0 - t;
    p0.scale(mt * mt * mt)
        .add_point(p1.scale(3.0 * mt * mt * t))
        .add_point(p2.scale(3.0 * mt * t * t))
        .add_point(p3.scale(t * t * t))
}

/// Curve parameters in `(0, 1)` where a quadratic Bézier has an axis extremum.
fn quad_extrema(p0: Point, p1: Point, p2: Point) -> Vec<f32> {
    [
        (p0.x(), p1.x(), p2.x()),
        (p0.y(), p1.y(), p2.y()),
    ]
    .into_iter()
    .filter_map(|(a, b, c)| {
        let denominator = a - 2.0 * b + c;
        (denominator != 0.0).then(|| (a - b) / denominator)
    })
    .filter(|t| *t > 0.0 && *t < 1.0)
    .collect()
}

/// Curve parameters in `(0, 1)` where a cubic Bézier has an axis extremum.
fn cubic_extrema(p0: Point, p1: Point, p2: Point, p3: Point) -> Vec<f32> {
    let mut roots = Vec::new();
    for (v0, v1, v2, v3) in [
        (p0.x(), p1.x(), p2.x(), p3.x()),
        (p0.y(), p1.y(), p2.y(), p3.y()),
    ] {
        // Derivative / 3 = a t^2 + b t + c
        let a = -v0 + 3.0 * v1 - 3.0 * v2 + v3;
        let b = 2.0 * (v0 - 2.0 * v1 + v2);
        let c = v1 - v0;
        if a.abs() < f32::EPSILON {
            if b != 0.0 {
                roots.push(-c / b);
            }
            continue;
        }
        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            continue;
        }
        let root = discriminant.sqrt();
        roots.push((-b + root) / (2.0 * a));
        roots.push((-b - root) / (2.0 * a));
    }
    roots.retain(|t| *t > 0.0 && *t < 1.0);
    roots
}

/// Center parameterization of an SVG elliptical arc.
struct Arc {
    center: Point,
    rx: f32,
    ry: f32,
    cos_phi: f32,
    sin_phi: f32,
    start_angle: f32,
    sweep_angle: f32,
}

impl Arc {
    /// Converts endpoint notation to center notation, scaling radii that
    /// are too small to span the endpoints. Degenerate arcs yield `None`.
    fn from_endpoints(
        from: Point,
        to: Point,
        rx: f32,
        ry: f32,
        rotation: f32,
        large_arc: bool,
        sweep: bool,
    ) -> Option<Self> {
        let (mut rx, mut ry) = (rx.abs(), ry.abs());
        if from == to || rx == 0.0 || ry == 0.0 {
            return None;
        }

        let phi = rotation.to_radians();
        let (sin_phi, cos_phi) = phi.sin_cos();
        let half = from.sub_point(to).scale(0.5);
        let x1 = cos_phi * half.x() + sin_phi * half.y();
        let y1 = -sin_phi * half.x() + cos_phi * half.y();

        let lambda = (x1 * x1) / (rx * rx) + (y1 * y1) / (ry * ry);
        if lambda > 1.0 {
            rx *= lambda.sqrt();
            ry *= lambda.sqrt();
        }

        let numerator = rx * rx * ry * ry - rx * rx * y1 * y1 - ry * ry * x1 * x1;
        let denominator = rx * rx * y1 * y1 + ry * ry * x1 * x1;
        let sign = if large_arc == sweep { -1.0 } else { 1.0 };
        let coefficient = sign * (numerator / denominator).max(0.0).sqrt();
        let cx1 = coefficient * rx * y1 / ry;
        let cy1 = -coefficient * ry * x1 / rx;

        let mid = from.midpoint(to);
        let center = Point::new(
            cos_phi * cx1 - sin_phi * cy1 + mid.x(),
            sin_phi * cx1 + cos_phi * cy1 + mid.y(),
        );

        let start_angle = vector_angle((1.0, 0.0), ((x1 - cx1) / rx, (y1 - cy1) / ry));
        let mut sweep_angle = vector_angle(
            ((x1 - cx1) / rx, (y1 - cy1) / ry),
            ((-x1 - cx1) / rx, (-y1 - cy1) / ry),
        ) % (2.0 * PI);
        if !sweep && sweep_angle > 0.0 {
            sweep_angle -= 2.0 * PI;
        } else if sweep && sweep_angle < 0.0 {
            sweep_angle += 2.0 * PI;
        }

        Some(Self {
            center,
            rx,
            ry,
            cos_phi,
            sin_phi,
            start_angle,
            sweep_angle,
        })
    }

    fn point(&self, angle: f32) -> Point {
        let (sin, cos) = angle.sin_cos();
        Point::new(
            self.center.x() + self.rx * self.cos_phi * cos - self.ry * self.sin_phi * sin,
            self.center.y() + self.rx * self.sin_phi * cos + self.ry * self.cos_phi * sin,
        )
    }
}

fn vector_angle(u: (f32, f32), v: (f32, f32)) -> f32 {
    (u.0 * v.1 - u.1 * v.0).atan2(u.0 * v.0 + u.1 * v.1)
}
