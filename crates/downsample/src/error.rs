//! Error types for the lumen-downsample crate.

/// Error type for all fallible operations in the lumen-downsample crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DownsampleError {
    /// Returned when more observations are requested than the series holds.
    #[error("cannot select {n_obs} observations from a series of length {len}")]
    CountExceedsLength {
        /// Requested number of observations.
        n_obs: usize,
        /// Length of the time series.
        len: usize,
    },

    /// Returned when the source time series for nearest-time resampling is empty.
    #[error("source time series is empty")]
    EmptySource,

    /// Returned when a mask does not match the length of the values it selects from.
    #[error("mask length {mask} does not match values length {values}")]
    MaskLengthMismatch {
        /// Length of the mask.
        mask: usize,
        /// Length of the values slice.
        values: usize,
    },

    /// Returned when an index array points past the end of the values.
    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfBounds {
        /// The offending index.
        index: usize,
        /// Length of the values slice.
        len: usize,
    },
}
