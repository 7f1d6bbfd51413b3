use thiserror::Error;

/// Errors that can occur while building or parsing path data.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum PathError {
    #[error("smoothing factor {0} outside [0, 1]")]
    InvalidSmoothing(f64),

    #[error("tolerance factor {0} outside [0, 1]")]
    InvalidTolerance(f64),

    #[error("invalid path: {0}")]
    InvalidPath(String),

    #[error("color '{name}' not recognized. Available colors: {known}")]
    UnknownColor { name: String, known: String },
}
