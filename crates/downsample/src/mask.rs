//! Applying selection masks and index arrays to parallel columns.

use crate::error::DownsampleError;

/// Returns the elements of `values` whose mask entry is `true`, in order.
///
/// # Errors
///
/// Returns [`DownsampleError::MaskLengthMismatch`] if the lengths differ.
pub fn apply_mask<T: Clone>(values: &[T], mask: &[bool]) -> Result<Vec<T>, DownsampleError> {
    if mask.len() != values.len() {
        return Err(DownsampleError::MaskLengthMismatch {
            mask: mask.len(),
            values: values.len(),
        });
    }
    Ok(values
        .iter()
        .zip(mask)
        .filter(|&(_, &keep)| keep)
        .map(|(v, _)| v.clone())
        .collect())
}

/// Returns `values[i]` for every `i` in `indices`, in index order.
///
/// Indices may repeat, as produced by nearest-time resampling onto a
/// grid denser than the source.
///
/// # Errors
///
/// Returns [`DownsampleError::IndexOutOfBounds`] for the first index `>= values.len()`.
pub fn take_indices<T: Clone>(values: &[T], indices: &[usize]) -> Result<Vec<T>, DownsampleError> {
    indices
        .iter()
        .map(|&i| {
            values
                .get(i)
                .cloned()
                .ok_or(DownsampleError::IndexOutOfBounds {
                    index: i,
                    len: values.len(),
                })
        })
        .collect()
}

/// Positions of the `true` entries of `mask`, ascending.
pub fn mask_to_indices(mask: &[bool]) -> Vec<usize> {
    mask.iter()
        .enumerate()
        .filter_map(|(i, &keep)| keep.then_some(i))
        .collect()
}
