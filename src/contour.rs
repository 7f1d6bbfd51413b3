use kurbo::Point;

use crate::geom::{perimeter, polygon_area};

/// A region boundary in pixel coordinates, in tracing order.
///
/// Direction is whatever the boundary tracer produced and is preserved
/// verbatim (y=0 is the top of the image, y increases downward).
#[derive(Debug, Clone, PartialEq)]
pub struct Contour {
    /// Ordered boundary points.
    pub points: Vec<Point>,
}

impl Contour {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Build a contour from (x, y) pairs.
    pub fn from_xy(coords: &[(f64, f64)]) -> Self {
        Self::new(coords.iter().map(|&(x, y)| Point::new(x, y)).collect())
    }

    /// Open-polyline perimeter (no closing edge).
    pub fn perimeter(&self) -> f64 {
        perimeter(&self.points)
    }

    /// Enclosed area, contour treated as closed.
    pub fn area(&self) -> f64 {
        polygon_area(&self.points)
    }
}

/// Filter and order contours for drawing.
///
/// Empty contours are skipped (their count is returned alongside the
/// survivors), contours with perimeter at or below `min_perimeter` are
/// discarded, and the rest are sorted by enclosed area, largest first.
/// The sort is stable: equal-area contours keep their discovery order so
/// the concatenated path is deterministic.
///
/// An empty result means "nothing to draw", not a failure.
pub fn rank(contours: &[Contour], min_perimeter: f64) -> (Vec<Contour>, usize) {
    let skipped = contours.iter().filter(|c| c.points.is_empty()).count();

    let mut survivors: Vec<Contour> = contours
        .iter()
        .filter(|c| !c.points.is_empty() && c.perimeter() > min_perimeter)
        .cloned()
        .collect();

    survivors.sort_by(|a, b| b.area().total_cmp(&a.area()));
    (survivors, skipped)
}
