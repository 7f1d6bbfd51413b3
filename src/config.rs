use crate::error::PathError;

/// All conversion parameters in one struct.
///
/// One explicit value passed into the pipeline; there are no
/// process-wide defaults to mutate.
#[derive(Debug, Clone)]
pub struct SmoothingConfig {
    // -- Contour filtering --
    /// Contours with an open-polyline perimeter at or below this are discarded.
    pub min_perimeter: f64,

    // -- Simplification --
    /// Whether to simplify contours before curve fitting.
    pub simplify: bool,
    /// Simplification epsilon as a fraction of contour perimeter (0-1).
    pub tolerance_factor: f64,

    // -- Curve fitting --
    /// Whether to emit cubic curves; false produces pure polylines.
    pub use_bezier: bool,
    /// Fraction of adjacent segment length used to project control points
    /// from each vertex (0-1). 0 = straight joins at every vertex.
    pub smoothing_factor: f64,
}

impl Default for SmoothingConfig {
    fn default() -> Self {
        Self {
            min_perimeter: 50.0,
            simplify: true,
            tolerance_factor: 0.0025,
            use_bezier: true,
            smoothing_factor: 0.25,
        }
    }
}

impl SmoothingConfig {
    /// Reject out-of-range factors.
    ///
    /// Called once at the top of [`crate::build_path`], before any contour
    /// is touched, so a bad factor never surfaces mid-pipeline.
    pub fn validate(&self) -> Result<(), PathError> {
        if !(0.0..=1.0).contains(&self.smoothing_factor) {
            return Err(PathError::InvalidSmoothing(self.smoothing_factor));
        }
        if !(0.0..=1.0).contains(&self.tolerance_factor) {
            return Err(PathError::InvalidTolerance(self.tolerance_factor));
        }
        Ok(())
    }
}
