//! Integration tests for DownsampleError variants.

use lumen_downsample::{
    DownsampleError, apply_mask, nearest_indices, random_count_indices, random_count_mask,
    take_indices,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn rng() -> StdRng {
    StdRng::seed_from_u64(0)
}

#[test]
fn error_count_exceeds_length() {
    let t = [1.0, 2.0, 3.0];
    let result = random_count_mask(&t, 4, &mut rng());
    assert!(matches!(
        result,
        Err(DownsampleError::CountExceedsLength { n_obs: 4, len: 3 })
    ));
}

#[test]
fn error_count_exceeds_empty_series() {
    let result = random_count_indices(0, 1, &mut rng());
    assert!(matches!(
        result,
        Err(DownsampleError::CountExceedsLength { n_obs: 1, len: 0 })
    ));
}

#[test]
fn error_empty_source() {
    let result = nearest_indices(&[], &[0.0, 1.0]);
    assert!(matches!(result, Err(DownsampleError::EmptySource)));
}

#[test]
fn error_mask_length_mismatch() {
    let result = apply_mask(&[1.0, 2.0], &[true]);
    assert!(matches!(
        result,
        Err(DownsampleError::MaskLengthMismatch { mask: 1, values: 2 })
    ));
}

#[test]
fn error_index_out_of_bounds() {
    let result = take_indices(&[1.0, 2.0], &[2]);
    assert!(matches!(
        result,
        Err(DownsampleError::IndexOutOfBounds { index: 2, len: 2 })
    ));
}

#[test]
fn failed_call_does_not_consume_rng() {
    let mut a = rng();
    let mut b = rng();
    assert!(random_count_mask(&[0.0; 2], 5, &mut a).is_err());
    let t = [0.0; 20];
    assert_eq!(
        random_count_mask(&t, 7, &mut a).unwrap(),
        random_count_mask(&t, 7, &mut b).unwrap()
    );
}
