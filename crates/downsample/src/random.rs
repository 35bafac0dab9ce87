//! Random selection of a fixed number of observations.

use rand::Rng;
use rand::seq::index;
use tracing::debug;

use crate::error::DownsampleError;

/// Draws `n_obs` distinct positions from `0..len`, sorted ascending.
///
/// Every subset of size `n_obs` is equally likely.
///
/// # Errors
///
/// Returns [`DownsampleError::CountExceedsLength`] if `n_obs > len`.
pub fn random_count_indices(
    len: usize,
    n_obs: usize,
    rng: &mut impl Rng,
) -> Result<Vec<usize>, DownsampleError> {
    if n_obs > len {
        return Err(DownsampleError::CountExceedsLength { n_obs, len });
    }
    let mut indices = index::sample(rng, len, n_obs).into_vec();
    indices.sort_unstable();
    Ok(indices)
}

/// Builds a selection mask with exactly `n_obs` randomly chosen `true` entries.
///
/// Only the length of `t` is used. The returned mask has `t.len()` entries.
///
/// # Errors
///
/// Returns [`DownsampleError::CountExceedsLength`] if `n_obs > t.len()`.
///
/// # Example
///
/// ```
/// use lumen_downsample::random_count_mask;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let t: Vec<f64> = (0..100).map(f64::from).collect();
/// let mut rng = StdRng::seed_from_u64(7);
/// let mask = random_count_mask(&t, 10, &mut rng).unwrap();
/// assert_eq!(mask.len(), 100);
/// assert_eq!(mask.iter().filter(|&&m| m).count(), 10);
/// ```
#[tracing::instrument(skip(t, rng), fields(len = t.len()))]
pub fn random_count_mask(
    t: &[f64],
    n_obs: usize,
    rng: &mut impl Rng,
) -> Result<Vec<bool>, DownsampleError> {
    let chosen = random_count_indices(t.len(), n_obs, rng)?;
    let mut mask = vec![false; t.len()];
    for i in chosen {
        mask[i] = true;
    }
    debug!(kept = n_obs, dropped = t.len() - n_obs, "random count mask built");
    Ok(mask)
}

/// Same as [`random_count_mask`], drawing from the thread-local generator.
///
/// # Errors
///
/// Returns [`DownsampleError::CountExceedsLength`] if `n_obs > t.len()`.
pub fn random_count_mask_default(t: &[f64], n_obs: usize) -> Result<Vec<bool>, DownsampleError> {
    random_count_mask(t, n_obs, &mut rand::rng())
}
