//! Nearest-timestamp resampling onto a target time grid.

use tracing::debug;

use crate::error::DownsampleError;

/// Returns the index of the element of `t_in` closest to `target`.
///
/// Linear scan with a strict `<`, so the first of several equally close
/// timestamps wins. NaN distances never beat the running minimum.
///
/// `t_in` must be non-empty.
fn nearest_index(t_in: &[f64], target: f64) -> usize {
    debug_assert!(!t_in.is_empty());

    let mut best_idx = 0;
    let mut best_dist = (t_in[0] - target).abs();
    for (j, &t) in t_in.iter().enumerate().skip(1) {
        let d = (t - target).abs();
        // NaN best_dist (from t_in[0]) is replaced by the first finite distance.
        if d < best_dist || (best_dist.is_nan() && !d.is_nan()) {
            best_idx = j;
            best_dist = d;
        }
    }
    best_idx
}

/// Maps every timestamp in `t_out` to the index of its nearest neighbour in `t_in`.
///
/// The result has one entry per element of `t_out`, in the same order.
/// `t_in` does not need to be sorted; each lookup scans all of it, so the
/// cost is `O(t_out.len() * t_in.len())`. Targets outside the span of `t_in`
/// resolve to the closest end. Exact ties resolve to the smallest index.
///
/// # Errors
///
/// Returns [`DownsampleError::EmptySource`] if `t_in` is empty.
///
/// # Example
///
/// ```
/// use lumen_downsample::nearest_indices;
///
/// let t_in = [0.0, 10.0];
/// assert_eq!(nearest_indices(&t_in, &[4.0, 6.0, 5.0]).unwrap(), vec![0, 1, 0]);
/// ```
#[tracing::instrument(skip_all, fields(n_in = t_in.len(), n_out = t_out.len()))]
pub fn nearest_indices(t_in: &[f64], t_out: &[f64]) -> Result<Vec<usize>, DownsampleError> {
    if t_in.is_empty() {
        return Err(DownsampleError::EmptySource);
    }
    let indices: Vec<usize> = t_out.iter().map(|&x| nearest_index(t_in, x)).collect();
    debug!(n = indices.len(), "nearest indices resolved");
    Ok(indices)
}
