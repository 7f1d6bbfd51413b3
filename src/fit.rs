//! Curve fitting: simplified point sequences → path-drawing commands.
//!
//! Either a pure MoveTo/LineTo polyline, or cubic beziers with control
//! points projected along the incoming and outgoing tangents at each
//! vertex, scaled by the smoothing factor.

use kurbo::{Point, Vec2};

/// One SVG-style path-drawing command.
///
/// `SmoothCurveTo` is the `S` shorthand: its first control point is the
/// previous segment's second control point mirrored through the shared
/// endpoint, supplied by the renderer. It is only valid immediately
/// after a `CurveTo` or another `SmoothCurveTo`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// Start a new subpath.
    MoveTo(Point),
    /// Straight segment.
    LineTo(Point),
    /// Full cubic bezier.
    CurveTo { ctrl1: Point, ctrl2: Point, to: Point },
    /// Cubic bezier shorthand with an implicit mirrored first control.
    SmoothCurveTo { ctrl2: Point, to: Point },
}

/// Convert a point sequence into path commands.
///
/// - 0 points: empty.
/// - 1 point: a lone `MoveTo` (degenerate, but never a crash).
/// - `use_bezier == false` or exactly 2 points: MoveTo + LineTo polyline.
/// - 3+ points with bezier: MoveTo, then one curve per interior vertex.
///   The first interior vertex emits a full `CurveTo`; the rest emit the
///   `S` shorthand, discarding their computed first control in favor of
///   the renderer's mirror rule. This is an accepted approximation, not
///   an exact Catmull-Rom fit: smoothing factors near 1 can produce
///   self-intersecting loops on sharp, short segments.
///
/// The final point only ever appears as the terminal argument of the
/// last curve command, never as a trailing LineTo.
pub fn fit(points: &[Point], smoothing_factor: f64, use_bezier: bool) -> Vec<PathCommand> {
    let n = points.len();
    if n == 0 {
        return Vec::new();
    }

    let mut commands = vec![PathCommand::MoveTo(points[0])];
    if n == 1 {
        return commands;
    }

    if !use_bezier || n == 2 {
        commands.extend(points[1..].iter().map(|&p| PathCommand::LineTo(p)));
        return commands;
    }

    for i in 1..n - 1 {
        let prev = points[i - 1];
        let here = points[i];
        let next = points[i + 1];

        let d1 = prev.distance(here);
        let d2 = here.distance(next);

        // Duplicate consecutive points are legitimate; a zero-length
        // segment degrades to a zero-offset control point.
        let v1 = unit(here - prev, d1);
        let v2 = unit(next - here, d2);

        let ctrl1 = here - v1 * (d1 * smoothing_factor);
        let ctrl2 = here + v2 * (d2 * smoothing_factor);

        if i == 1 {
            commands.push(PathCommand::CurveTo { ctrl1, ctrl2, to: next });
        } else {
            commands.push(PathCommand::SmoothCurveTo { ctrl2, to: next });
        }
    }

    commands
}

fn unit(v: Vec2, len: f64) -> Vec2 {
    if len > 0.0 {
        v / len
    } else {
        Vec2::ZERO
    }
}
