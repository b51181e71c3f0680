//! Error types for segment mesh building.

use thiserror::Error;

/// Result type for segment mesh building.
pub type BuildResult<T> = Result<T, BuildError>;

/// Errors that can occur while building a mesh from segments.
///
/// All validation runs before any geometry is emitted, so a failed build
/// never produces a partial mesh.
#[derive(Debug, Error)]
pub enum BuildError {
    /// Segment has no defined direction (coincident or non-finite
    /// endpoints).
    #[error("degenerate segment at index {index}: start and end coincide or are non-finite")]
    DegenerateSegment {
        /// Index of the degenerate segment.
        index: usize,
    },

    /// Thickness is negative or non-finite.
    #[error("invalid thickness {value} at segment index {index}")]
    InvalidThickness {
        /// Index of the offending segment.
        index: usize,
        /// The rejected thickness value.
        value: f64,
    },

    /// Amplitude is non-finite.
    #[error("invalid amplitude {value} at segment index {index}")]
    InvalidAmplitude {
        /// Index of the offending segment.
        index: usize,
        /// The rejected amplitude value.
        value: f64,
    },
}
