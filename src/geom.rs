//! Shared geometry utilities.

use kurbo::Point;

/// Perimeter of a point sequence treated as an open polyline:
/// the sum of consecutive point-to-point distances, no closing edge.
///
/// Matches the upstream boundary-tracer convention used for both the
/// minimum-perimeter filter and the simplification epsilon.
pub fn perimeter(points: &[Point]) -> f64 {
    points.windows(2).map(|w| w[0].distance(w[1])).sum()
}

/// Enclosed area via the shoelace formula, treating the sequence as a
/// closed polygon regardless of the perimeter convention.
///
/// Returns the absolute value; contour direction is implementation-defined
/// upstream and must not influence ranking.
pub fn polygon_area(points: &[Point]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let signed: f64 = (0..n)
        .map(|i| {
            let j = (i + 1) % n;
            points[i].x * points[j].y - points[j].x * points[i].y
        })
        .sum();
    (signed / 2.0).abs()
}

/// Perpendicular distance from `p` to the infinite line through `a` → `b`.
///
/// Degenerates to point distance when the chord is (near) zero length.
pub fn point_to_line_dist(p: Point, a: Point, b: Point) -> f64 {
    let ab = b - a;
    let ap = p - a;
    let len_sq = ab.x * ab.x + ab.y * ab.y;
    if len_sq < 1e-10 {
        return ap.hypot();
    }
    (ab.x * ap.y - ab.y * ap.x).abs() / len_sq.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(coords: &[(f64, f64)]) -> Vec<Point> {
        coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    #[test]
    fn perimeter_is_open() {
        // Unit square as 4 points: 3 edges, the closing edge is not counted.
        let square = pts(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
        assert!((perimeter(&square) - 3.0).abs() < 1e-12);
    }

    #[test]
    fn perimeter_of_single_point_is_zero() {
        assert_eq!(perimeter(&pts(&[(5.0, 5.0)])), 0.0);
    }

    #[test]
    fn area_closes_the_polygon() {
        let square = pts(&[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)]);
        assert!((polygon_area(&square) - 4.0).abs() < 1e-12);
    }

    #[test]
    fn area_ignores_winding_direction() {
        let cw = pts(&[(0.0, 0.0), (0.0, 2.0), (2.0, 2.0), (2.0, 0.0)]);
        assert!((polygon_area(&cw) - 4.0).abs() < 1e-12);
    }

    #[test]
    fn degenerate_polygon_has_zero_area() {
        assert_eq!(polygon_area(&pts(&[(0.0, 0.0), (1.0, 1.0)])), 0.0);
    }

    #[test]
    fn line_distance_perpendicular() {
        let d = point_to_line_dist(
            Point::new(5.0, 3.0),
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
        );
        assert!((d - 3.0).abs() < 1e-12);
    }

    #[test]
    fn line_distance_zero_length_chord() {
        let a = Point::new(1.0, 1.0);
        let d = point_to_line_dist(Point::new(4.0, 5.0), a, a);
        assert!((d - 5.0).abs() < 1e-12);
    }
}
