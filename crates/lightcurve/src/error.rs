//! Error types for the lumen-lightcurve crate.

/// Error type for all fallible operations in the lumen-lightcurve crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LightCurveError {
    /// Returned when a column does not match the length of the time column.
    #[error("{field}: expected {expected} elements, got {got}")]
    LengthMismatch {
        /// Name of the mismatched column.
        field: &'static str,
        /// Length of the time column.
        expected: usize,
        /// Actual length.
        got: usize,
    },

    /// Downsampling error.
    #[error(transparent)]
    Downsample(#[from] lumen_downsample::DownsampleError),

    /// Season error.
    #[error(transparent)]
    Season(#[from] lumen_season::SeasonError),
}
