use thiserror::Error;

/// Top-level error type for cable profile computation.
#[derive(Debug, Error)]
pub enum CableError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    UnknownKind(#[from] UnknownKindError),

    #[error(transparent)]
    Export(#[from] ExportError),
}

/// Errors in how a profile or its inputs are put together.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error(
        "expected one more control point than segment kinds, got {control_points} control points and {segment_kinds} segment kinds"
    )]
    CountMismatch {
        control_points: usize,
        segment_kinds: usize,
    },

    #[error("row {index} is out of range for a table of {len} rows")]
    RowOutOfRange { index: usize, len: usize },

    #[error("invalid settings: {0}")]
    InvalidSettings(String),
}

/// Errors in the numeric inputs of a segment evaluation.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("segment x must strictly increase, got start x = {start_x} and end x = {end_x}")]
    NonIncreasing { start_x: f64, end_x: f64 },

    #[error("sampling interval must be positive and finite, got {0}")]
    NonPositiveInterval(f64),

    #[error("sampling would produce {requested} points, more than the limit of {limit}")]
    TooManySamples { requested: f64, limit: usize },

    #[error("non-finite coordinate ({x}, {y})")]
    NonFinite { x: f64, y: f64 },
}

/// A segment kind name outside `straight`, `parabolic` and `reverse_curve`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown segment kind {0:?}")]
pub struct UnknownKindError(pub String);

/// Errors while writing an exported profile.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("csv: {0}")]
    Csv(#[from] csv::Error),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for results using [`CableError`].
pub type Result<T> = std::result::Result<T, CableError>;
