//! Path-data serialization, the SVG document writer, and a path-data
//! parser used for round-trip verification.
//!
//! All functions here are pure string builders and readers -- no I/O.

use std::fmt::Write;

use kurbo::Point;

use crate::error::PathError;
use crate::fit::PathCommand;

/// Render commands as SVG path data.
///
/// `M{x},{y}` / ` L{x},{y}` / ` C{c1x},{c1y} {c2x},{c2y} {x},{y}` /
/// ` S{c2x},{c2y} {x},{y}`. A subpath's leading `M` follows the previous
/// subpath's last command with no separator, matching the upstream
/// writer. Coordinates use shortest round-trip decimal formatting and
/// never scientific notation.
pub fn path_data(commands: &[PathCommand]) -> String {
    let mut out = String::new();
    for cmd in commands {
        match *cmd {
            PathCommand::MoveTo(p) => {
                let _ = write!(out, "M{},{}", p.x, p.y);
            }
            PathCommand::LineTo(p) => {
                let _ = write!(out, " L{},{}", p.x, p.y);
            }
            PathCommand::CurveTo { ctrl1, ctrl2, to } => {
                let _ = write!(
                    out,
                    " C{},{} {},{} {},{}",
                    ctrl1.x, ctrl1.y, ctrl2.x, ctrl2.y, to.x, to.y
                );
            }
            PathCommand::SmoothCurveTo { ctrl2, to } => {
                let _ = write!(out, " S{},{} {},{}", ctrl2.x, ctrl2.y, to.x, to.y);
            }
        }
    }
    out
}

/// Attributes of the emitted SVG document.
#[derive(Debug, Clone)]
pub struct DocumentOptions {
    /// viewBox width.
    pub width: u32,
    /// viewBox height.
    pub height: u32,
    /// Stroke color (any SVG color keyword or value).
    pub stroke: String,
    /// Stroke width.
    pub stroke_width: u32,
}

impl Default for DocumentOptions {
    fn default() -> Self {
        Self {
            width: 600,
            height: 420,
            stroke: "navy".to_string(),
            stroke_width: 3,
        }
    }
}

/// Wrap path data in a minimal SVG document.
///
/// Declares the coordinate frame via `viewBox` and draws the path
/// unfilled with the configured stroke. Empty path data produces a
/// valid document with no `<path>` element.
pub fn document(path_data: &str, options: &DocumentOptions) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {} {}">"#,
        options.width, options.height
    );
    if !path_data.is_empty() {
        let _ = writeln!(
            out,
            r#"    <path d="{}" fill="none" stroke="{}" stroke-width="{}"/>"#,
            path_data, options.stroke, options.stroke_width
        );
    }
    out.push_str("</svg>");
    out
}

/// Parse path data produced by [`path_data`] back into commands.
///
/// Accepts the absolute `M`/`L`/`C`/`S` subset with comma- or
/// space-separated coordinates. `S` is only accepted immediately after
/// a `C` or another `S`, and every subpath must open with `M`.
pub fn parse_path_data(data: &str) -> Result<Vec<PathCommand>, PathError> {
    let mut commands = Vec::new();
    let mut op: Option<char> = None;
    let mut args = String::new();

    for ch in data.chars() {
        match ch {
            'M' | 'L' | 'C' | 'S' => {
                if let Some(prev) = op.take() {
                    push_command(prev, &args, &mut commands)?;
                    args.clear();
                }
                op = Some(ch);
            }
            _ if op.is_some() => args.push(ch),
            c if c.is_whitespace() => {}
            other => {
                return Err(PathError::InvalidPath(format!(
                    "unexpected character '{other}'"
                )));
            }
        }
    }
    if let Some(prev) = op {
        push_command(prev, &args, &mut commands)?;
    }
    Ok(commands)
}

fn push_command(op: char, args: &str, out: &mut Vec<PathCommand>) -> Result<(), PathError> {
    let coords = parse_coords(args)?;
    let arg_count = coords.len();
    let at = |i: usize| Point::new(coords[2 * i], coords[2 * i + 1]);

    let cmd = match (op, arg_count) {
        ('M', 2) => PathCommand::MoveTo(at(0)),
        ('L', 2) => PathCommand::LineTo(at(0)),
        ('C', 6) => PathCommand::CurveTo {
            ctrl1: at(0),
            ctrl2: at(1),
            to: at(2),
        },
        ('S', 4) => PathCommand::SmoothCurveTo {
            ctrl2: at(0),
            to: at(1),
        },
        (op, n) => {
            return Err(PathError::InvalidPath(format!(
                "'{op}' with {n} coordinates"
            )));
        }
    };

    match cmd {
        PathCommand::MoveTo(_) => {}
        _ if out.is_empty() => {
            return Err(PathError::InvalidPath(format!("path must open with M, got '{op}'")));
        }
        PathCommand::SmoothCurveTo { .. } => {
            // The implicit mirrored control only exists after a cubic.
            if !matches!(
                out.last(),
                Some(PathCommand::CurveTo { .. }) | Some(PathCommand::SmoothCurveTo { .. })
            ) {
                return Err(PathError::InvalidPath(
                    "S must follow C or S".to_string(),
                ));
            }
        }
        _ => {}
    }

    out.push(cmd);
    Ok(())
}

fn parse_coords(args: &str) -> Result<Vec<f64>, PathError> {
    args.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<f64>()
                .map_err(|_| PathError::InvalidPath(format!("bad coordinate '{s}'")))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn polyline_rendering() {
        let commands = vec![
            PathCommand::MoveTo(p(0.0, 0.0)),
            PathCommand::LineTo(p(10.0, 0.0)),
            PathCommand::LineTo(p(10.0, 5.0)),
        ];
        assert_eq!(path_data(&commands), "M0,0 L10,0 L10,5");
    }

    #[test]
    fn bezier_rendering() {
        let commands = vec![
            PathCommand::MoveTo(p(0.0, 0.0)),
            PathCommand::CurveTo {
                ctrl1: p(5.0, 0.0),
                ctrl2: p(15.0, 0.0),
                to: p(20.0, 0.0),
            },
            PathCommand::SmoothCurveTo {
                ctrl2: p(25.0, 5.0),
                to: p(30.0, 0.0),
            },
        ];
        assert_eq!(path_data(&commands), "M0,0 C5,0 15,0 20,0 S25,5 30,0");
    }

    #[test]
    fn subpaths_concatenate_without_separator() {
        let commands = vec![
            PathCommand::MoveTo(p(0.0, 0.0)),
            PathCommand::LineTo(p(1.0, 1.0)),
            PathCommand::MoveTo(p(5.0, 5.0)),
            PathCommand::LineTo(p(6.0, 6.0)),
        ];
        assert_eq!(path_data(&commands), "M0,0 L1,1M5,5 L6,6");
    }

    #[test]
    fn fractional_coordinates_avoid_scientific_notation() {
        let commands = vec![PathCommand::MoveTo(p(0.0001, 1234567.5))];
        let data = path_data(&commands);
        assert_eq!(data, "M0.0001,1234567.5");
        assert!(!data.contains('e') && !data.contains('E'));
    }

    #[test]
    fn empty_commands_render_empty() {
        assert_eq!(path_data(&[]), "");
    }

    #[test]
    fn round_trip_reproduces_commands() {
        let commands = vec![
            PathCommand::MoveTo(p(0.5, 0.25)),
            PathCommand::CurveTo {
                ctrl1: p(5.125, 0.3),
                ctrl2: p(15.75, -2.5),
                to: p(20.0, 7.1),
            },
            PathCommand::SmoothCurveTo {
                ctrl2: p(25.0, 5.0),
                to: p(30.5, 0.0),
            },
            PathCommand::MoveTo(p(100.0, 100.0)),
            PathCommand::LineTo(p(101.0, 99.0)),
        ];
        let parsed = parse_path_data(&path_data(&commands)).unwrap();
        assert_eq!(parsed.len(), commands.len());
        for (a, b) in parsed.iter().zip(&commands) {
            let pairs: Vec<(Point, Point)> = match (*a, *b) {
                (PathCommand::MoveTo(x), PathCommand::MoveTo(y)) => vec![(x, y)],
                (PathCommand::LineTo(x), PathCommand::LineTo(y)) => vec![(x, y)],
                (
                    PathCommand::CurveTo { ctrl1: a1, ctrl2: a2, to: a3 },
                    PathCommand::CurveTo { ctrl1: b1, ctrl2: b2, to: b3 },
                ) => vec![(a1, b1), (a2, b2), (a3, b3)],
                (
                    PathCommand::SmoothCurveTo { ctrl2: a2, to: a3 },
                    PathCommand::SmoothCurveTo { ctrl2: b2, to: b3 },
                ) => vec![(a2, b2), (a3, b3)],
                (x, y) => panic!("command kind mismatch: {:?} vs {:?}", x, y),
            };
            for (x, y) in pairs {
                assert!((x.x - y.x).abs() < 1e-6 && (x.y - y.y).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn parse_handles_subpath_concatenation() {
        let parsed = parse_path_data("M0,0 L1,1M5,5 L6,6").unwrap();
        assert_eq!(parsed.len(), 4);
        assert_eq!(parsed[2], PathCommand::MoveTo(p(5.0, 5.0)));
    }

    #[test]
    fn parse_rejects_path_not_opening_with_move() {
        assert!(matches!(
            parse_path_data("L1,1"),
            Err(PathError::InvalidPath(_))
        ));
    }

    #[test]
    fn parse_rejects_shorthand_after_move() {
        assert!(matches!(
            parse_path_data("M0,0 S1,1 2,2"),
            Err(PathError::InvalidPath(_))
        ));
    }

    #[test]
    fn parse_rejects_wrong_arity() {
        assert!(parse_path_data("M0,0 C1,1 2,2").is_err());
    }

    #[test]
    fn parse_rejects_garbage_coordinates() {
        assert!(parse_path_data("M0,zero").is_err());
    }

    #[test]
    fn document_wraps_path_data() {
        let svg = document("M0,0 L1,1", &DocumentOptions::default());
        assert!(svg.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 600 420">"#));
        assert!(svg.contains(r#"<path d="M0,0 L1,1" fill="none" stroke="navy" stroke-width="3"/>"#));
        assert!(svg.ends_with("</svg>"));
    }

    #[test]
    fn document_with_custom_options() {
        let options = DocumentOptions {
            width: 800,
            height: 600,
            stroke: "red".to_string(),
            stroke_width: 1,
        };
        let svg = document("M0,0 L1,1", &options);
        assert!(svg.contains(r#"viewBox="0 0 800 600""#));
        assert!(svg.contains(r#"stroke="red" stroke-width="1""#));
    }

    #[test]
    fn empty_path_data_omits_path_element() {
        let svg = document("", &DocumentOptions::default());
        assert!(!svg.contains("<path"));
        assert!(svg.contains("</svg>"));
    }
}
