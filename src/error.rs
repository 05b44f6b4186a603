use thiserror::Error;

/// Top-level error type for the arcline geometry library.
#[derive(Debug, Error)]
pub enum ArclineError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("zero-length vector")]
    ZeroVector,
}

/// Errors related to non-geometric operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Convenience type alias for results using [`ArclineError`].
pub type Result<T> = std::result::Result<T, ArclineError>;
