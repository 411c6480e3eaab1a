use thiserror::Error;

/// Input validation failures. Always surfaced to the caller with the
/// offending field; never retried.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Malformed resolution token: {token:?}")]
    MalformedResolution { token: String },

    #[error("Resolution must be positive: {token:?}")]
    ZeroResolution { token: String },

    #[error("Noise fraction out of range [0.0, 1.0]: {value}")]
    NoiseOutOfRange { value: f32 },

    #[error("Unknown output format: {token:?}")]
    UnknownFormat { token: String },

    #[error("Raster has zero area: {width}x{height}")]
    EmptyRaster { width: u32, height: u32 },

    #[error("Sample buffer holds {actual} bytes, expected {expected} for {width}x{height}")]
    SampleCountMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    #[error("Unsupported level count: {levels} (expected 2, 4, 16 or 256)")]
    UnsupportedLevels { levels: u16 },

    #[error("Level count {levels} does not match {bits_per_pixel}-bit capacity {capacity}")]
    LevelDepthMismatch {
        levels: u16,
        bits_per_pixel: u8,
        capacity: u16,
    },
}

/// Invariant violations produced by a bug in an upstream stage.
/// Fatal for the current invocation; logged, never silently corrected.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum InternalError {
    #[error("Packed buffer holds {actual} bytes, expected stride {stride} x height {height}")]
    StrideMismatch {
        stride: usize,
        height: u32,
        actual: usize,
    },

    #[error("Palette index {index} out of range for {levels} levels")]
    IndexOutOfRange { index: u8, levels: u16 },
}

/// Unified error type for the pipeline entry point.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Internal consistency error: {0}")]
    Internal(#[from] InternalError),
}
