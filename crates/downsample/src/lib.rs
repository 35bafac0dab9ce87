//! Downsampling for light-curve time series.
//!
//! Two independent ways of thinning a light curve:
//!
//! | Function | Output | Selection rule |
//! |----------|--------|----------------|
//! | [`random_count_mask`] | `Vec<bool>` mask | `n_obs` positions drawn uniformly without replacement |
//! | [`nearest_indices`] | `Vec<usize>` indices | nearest source timestamp for each target timestamp |
//!
//! # Quick start
//!
//! ```
//! use lumen_downsample::{nearest_indices, random_count_mask};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let t = [0.0, 1.0, 2.0, 3.0, 4.0];
//! let mut rng = StdRng::seed_from_u64(42);
//!
//! let mask = random_count_mask(&t, 3, &mut rng).unwrap();
//! assert_eq!(mask.iter().filter(|&&m| m).count(), 3);
//!
//! let idx = nearest_indices(&t, &[0.4, 3.6]).unwrap();
//! assert_eq!(idx, vec![0, 4]);
//! ```
//!
//! The random source is always passed in by the caller. Use
//! [`random_count_mask_default`] to draw from the thread-local generator.
//!
//! Masks and index arrays can be applied to any parallel column (flux,
//! flux error, ...) with [`apply_mask`] and [`take_indices`].

pub mod error;

mod mask;
mod nearest;
mod random;

pub use error::DownsampleError;
pub use mask::{apply_mask, mask_to_indices, take_indices};
pub use nearest::nearest_indices;
pub use random::{random_count_indices, random_count_mask, random_count_mask_default};
