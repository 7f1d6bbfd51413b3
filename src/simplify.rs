//! Polyline simplification: Douglas–Peucker with a perimeter-relative epsilon.
//!
//! The sequence is treated as closed to match the upstream boundary
//! convention: the recursion is seeded at the first point and the point
//! farthest from it, then both arcs (the second wrapping past the end)
//! are reduced independently.

use kurbo::Point;

use crate::contour::Contour;
use crate::geom::point_to_line_dist;

/// Reduce a contour to a smaller point sequence preserving shape within
/// `epsilon = tolerance_factor * perimeter`.
///
/// Inputs of 2 or fewer points are returned unchanged; otherwise the
/// output always retains at least the two seed points. Identical input
/// and tolerance always yield identical output (first-maximum tie-break).
pub fn simplify(contour: &Contour, tolerance_factor: f64) -> Contour {
    let points = &contour.points;
    let n = points.len();
    if n <= 2 {
        return contour.clone();
    }

    let epsilon = tolerance_factor * contour.perimeter();

    // Seed: first point plus the point farthest from it.
    let mut far = 1;
    let mut far_dist = points[0].distance(points[1]);
    for (i, p) in points.iter().enumerate().skip(2) {
        let d = points[0].distance(*p);
        if d > far_dist {
            far_dist = d;
            far = i;
        }
    }

    let mut keep = vec![false; n];
    keep[0] = true;
    keep[far] = true;
    reduce_arc(points, 0, far, epsilon, &mut keep);
    reduce_arc(points, far, 0, epsilon, &mut keep);

    Contour::new(
        points
            .iter()
            .zip(&keep)
            .filter(|(_, &k)| k)
            .map(|(p, _)| *p)
            .collect(),
    )
}

/// Recursively mark kept points on the cyclic arc `start` → `end`.
///
/// The point of maximum perpendicular distance from the chord is kept
/// when it exceeds epsilon, splitting the arc there; otherwise all
/// interior points of the arc are dropped.
fn reduce_arc(points: &[Point], start: usize, end: usize, epsilon: f64, keep: &mut [bool]) {
    let n = points.len();
    let mut max_dist = 0.0;
    let mut max_idx = None;

    let mut i = (start + 1) % n;
    while i != end {
        let d = point_to_line_dist(points[i], points[start], points[end]);
        if d > max_dist {
            max_dist = d;
            max_idx = Some(i);
        }
        i = (i + 1) % n;
    }

    if let Some(idx) = max_idx {
        if max_dist > epsilon {
            keep[idx] = true;
            reduce_arc(points, start, idx, epsilon, keep);
            reduce_arc(points, idx, end, epsilon, keep);
        }
    }
}
