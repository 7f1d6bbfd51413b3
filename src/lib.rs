//! trace2svg: traced region boundaries → smooth SVG path data.
//!
//! Takes ordered boundary point sequences from an upstream tracer and
//! produces clean, optionally-smoothed vector path commands: contour
//! filtering and ranking, polyline simplification, and cubic bezier
//! fitting with a tunable smoothing parameter.
//!
//! # Example
//!
//! ```
//! use trace2svg::{build_path, svg, Contour, SmoothingConfig};
//!
//! let contours = vec![Contour::from_xy(&[
//!     (0.0, 0.0), (120.0, 0.0), (120.0, 80.0), (0.0, 80.0),
//! ])];
//! let outcome = build_path(&contours, &SmoothingConfig::default())?;
//! assert!(outcome.is_drawable());
//! let d = svg::path_data(&outcome.commands);
//! assert!(d.starts_with("M"));
//! # Ok::<(), trace2svg::PathError>(())
//! ```

#![forbid(unsafe_code)]

mod geom;

pub mod color;
pub mod config;
pub mod contour;
pub mod error;
pub mod fit;
pub mod simplify;
pub mod svg;

// Re-export kurbo so downstream users get the same Point type
// used by Contour and PathCommand.
pub use kurbo;

pub use config::SmoothingConfig;
pub use contour::Contour;
pub use error::PathError;
pub use fit::PathCommand;
pub use svg::DocumentOptions;

use rayon::prelude::*;

/// The result of building a path: command sequence plus input hygiene.
#[derive(Debug, Clone)]
pub struct PathOutcome {
    /// Concatenated commands, one MoveTo-started subpath per surviving
    /// contour, in ranked order.
    pub commands: Vec<PathCommand>,
    /// Zero-point contours rejected from the input batch.
    pub skipped: usize,
}

impl PathOutcome {
    /// False when every contour was filtered out — "nothing to draw",
    /// which the caller reports to its own user rather than failing.
    pub fn is_drawable(&self) -> bool {
        !self.commands.is_empty()
    }
}

/// Full pipeline: boundary contours → path commands.
///
/// Validates the config, ranks contours by enclosed area (dropping those
/// at or below the perimeter floor), then simplifies and curve-fits each
/// survivor. Contours are independent, so the per-contour stage runs in
/// parallel; concatenation preserves ranked order with no implicit
/// closing command between subpaths.
pub fn build_path(
    contours: &[Contour],
    config: &SmoothingConfig,
) -> Result<PathOutcome, PathError> {
    config.validate()?;

    let (ranked, skipped) = contour::rank(contours, config.min_perimeter);

    let commands: Vec<PathCommand> = ranked
        .par_iter()
        .map(|contour| {
            if config.simplify {
                let simplified = simplify::simplify(contour, config.tolerance_factor);
                fit::fit(&simplified.points, config.smoothing_factor, config.use_bezier)
            } else {
                fit::fit(&contour.points, config.smoothing_factor, config.use_bezier)
            }
        })
        .flatten()
        .collect();

    Ok(PathOutcome { commands, skipped })
}

/// Convenience: build a path and wrap it in a minimal SVG document.
///
/// Prints step-by-step progress to stderr. Returns `Ok(None)` when
/// nothing survived filtering — an empty batch is a report, not an
/// error.
pub fn convert_to_svg(
    contours: &[Contour],
    config: &SmoothingConfig,
    options: &DocumentOptions,
) -> Result<Option<String>, PathError> {
    let outcome = build_path(contours, config)?;

    let subpaths = outcome
        .commands
        .iter()
        .filter(|c| matches!(c, PathCommand::MoveTo(_)))
        .count();
    eprintln!(
        "  Rank        {} contours \u{2192} {} drawable ({} skipped empty)",
        contours.len(),
        subpaths,
        outcome.skipped,
    );

    if !outcome.is_drawable() {
        eprintln!("  Result      nothing drawable");
        return Ok(None);
    }

    let data = svg::path_data(&outcome.commands);
    eprintln!(
        "  Path        {} commands \u{00b7} {} bytes",
        outcome.commands.len(),
        data.len(),
    );

    Ok(Some(svg::document(&data, options)))
}
