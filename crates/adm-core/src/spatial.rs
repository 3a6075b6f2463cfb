//! Spatial value types.
//!
//! All coordinates are double precision. Only [`Polygon`] carries an
//! invariant beyond that, so it is the only type with private fields.

use crate::error::ValueError;

/// Minimum number of vertices a polygon may have.
pub const POLYGON_MIN_POINTS: usize = 3;

/// A single point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Two corner points, shared by lines and rectangles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            start: Point::new(x1, y1),
            end: Point::new(x2, y2),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}

/// Closed polygon given as parallel coordinate lists.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl Polygon {
    /// Build a polygon from parallel x and y lists.
    ///
    /// Fails with [`ValueError::StructuralMismatch`] if the lists differ in
    /// length or hold fewer than three vertices.
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> Result<Self, ValueError> {
        if xs.len() != ys.len() {
            return Err(ValueError::StructuralMismatch(format!(
                "polygon has {} x values but {} y values",
                xs.len(),
                ys.len()
            )));
        }
        if xs.len() < POLYGON_MIN_POINTS {
            return Err(ValueError::StructuralMismatch(format!(
                "polygon needs at least {POLYGON_MIN_POINTS} points, got {}",
                xs.len()
            )));
        }
        Ok(Self { xs, ys })
    }

    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    /// Vertices in order.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.xs
            .iter()
            .zip(self.ys.iter())
            .map(|(x, y)| Point::new(*x, *y))
    }

    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }
}
