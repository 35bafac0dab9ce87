//! Error types for the lumen-season crate.

/// Error type for all fallible operations in the lumen-season crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SeasonError {
    /// Returned when the time series is empty and has no origin `t[0]`.
    #[error("time series is empty")]
    EmptyTimes,
}
