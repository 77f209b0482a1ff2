//! Geometric primitives shared by the grouping pipeline.
//!
//! Provides:
//! - Point and Rect tuple types
//! - The Quad type: an axis-aligned quadrilateral in fixed winding order
//! - Bounding and merging helpers over corner points

use crate::error::GrabError;

/// Floating-point infinity for bounding box calculations.
pub const INF_F64: f64 = f64::MAX;

/// Small epsilon for floating-point comparisons.
pub const EPSILON: f64 = 1e-9;

/// A 2D point (x, y).
pub type Point = (f64, f64);

/// A rectangle defined by (x0, y0, x1, y1) where (x0, y0) is the top-left
/// and (x1, y1) the bottom-right corner in image coordinates (y grows down).
pub type Rect = (f64, f64, f64, f64);

/// Compares two floats for approximate equality.
#[inline]
pub fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
    (a - b).abs() < epsilon
}

/// Computes a minimal rectangle that covers all the points.
pub fn get_bound<I: IntoIterator<Item = Point>>(pts: I) -> Rect {
    let mut x0 = INF_F64;
    let mut y0 = INF_F64;
    let mut x1 = -INF_F64;
    let mut y1 = -INF_F64;

    for (x, y) in pts {
        x0 = x0.min(x);
        y0 = y0.min(y);
        x1 = x1.max(x);
        y1 = y1.max(y);
    }

    (x0, y0, x1, y1)
}

/// Formats a bounding box as a comma-separated string.
pub fn bbox2str(bbox: Rect) -> String {
    let (x0, y0, x1, y1) = bbox;
    format!("{:.3},{:.3},{:.3},{:.3}", x0, y0, x1, y1)
}

/// An axis-aligned quadrilateral stored as four corner points in fixed
/// winding order: top-left, top-right, bottom-right, bottom-left.
///
/// This is the shape text detectors emit per recognized fragment. All
/// producers in this crate keep the winding order invariant; consumers
/// only ever look at the bounding extent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quad {
    corners: [Point; 4],
}

impl Quad {
    /// Creates a quad from its four corners in winding order.
    pub fn new(tl: Point, tr: Point, br: Point, bl: Point) -> Self {
        Self {
            corners: [tl, tr, br, bl],
        }
    }

    /// Creates a quad covering the given rectangle.
    pub fn from_rect(rect: Rect) -> Self {
        let (x0, y0, x1, y1) = rect;
        Self::new((x0, y0), (x1, y0), (x1, y1), (x0, y1))
    }

    /// Returns the four corners in winding order.
    pub fn corners(&self) -> [Point; 4] {
        self.corners
    }

    /// Returns the top-left corner.
    pub fn top_left(&self) -> Point {
        self.corners[0]
    }

    /// Returns the bounding extent (x0, y0, x1, y1) of the four corners.
    pub fn bounds(&self) -> Rect {
        get_bound(self.corners)
    }

    /// Returns the extent width.
    pub fn width(&self) -> f64 {
        let (x0, _, x1, _) = self.bounds();
        x1 - x0
    }

    /// Returns the extent height, used as a proxy for font size.
    pub fn height(&self) -> f64 {
        let (_, y0, _, y1) = self.bounds();
        y1 - y0
    }

    /// Returns the quad whose extent is the union of both extents,
    /// re-expressed in winding order. Commutative and associative.
    pub fn merge(&self, other: &Quad) -> Quad {
        let (ax0, ay0, ax1, ay1) = self.bounds();
        let (bx0, by0, bx1, by1) = other.bounds();
        Quad::from_rect((ax0.min(bx0), ay0.min(by0), ax1.max(bx1), ay1.max(by1)))
    }

    /// Returns true if the point lies within the extent, inclusive on
    /// all four edges.
    pub fn contains(&self, pt: Point) -> bool {
        let (x0, y0, x1, y1) = self.bounds();
        let (x, y) = pt;
        x0 <= x && x <= x1 && y0 <= y && y <= y1
    }
}

impl TryFrom<Vec<Point>> for Quad {
    type Error = GrabError;

    /// Builds a quad from a corner list, failing fast when the detector
    /// hands over anything but exactly four points.
    fn try_from(pts: Vec<Point>) -> Result<Self, Self::Error> {
        let corners: [Point; 4] = pts
            .try_into()
            .map_err(|v: Vec<Point>| GrabError::MalformedQuad(v.len()))?;
        Ok(Self { corners })
    }
}

impl From<Quad> for [Point; 4] {
    fn from(quad: Quad) -> Self {
        quad.corners
    }
}
