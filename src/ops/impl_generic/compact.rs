//! Sequential stable compaction.
//!
//! Both kernels take a `discard(index, value)` decision so that plain and
//! stencil variants share one loop: plain variants look at `value`, stencil
//! variants look up `stencil[index]`. `base` offsets the index for callers
//! that compact a chunk of a larger sequence.

use crate::error::{Error, Result};

/// Check that a stencil covers every data element
#[inline]
pub fn validate_stencil(data_len: usize, stencil_len: usize) -> Result<()> {
    if stencil_len < data_len {
        return Err(Error::length_mismatch("stencil", data_len, stencil_len));
    }
    Ok(())
}

/// Stably move retained elements of `data` to its front.
///
/// Returns the number of retained elements.
#[inline]
pub fn compact_in_place<T, F>(data: &mut [T], base: usize, discard: &F) -> usize
where
    T: Copy,
    F: Fn(usize, &T) -> bool,
{
    let mut write = 0;
    for read in 0..data.len() {
        let value = data[read];
        if !discard(base + read, &value) {
            data[write] = value;
            write += 1;
        }
    }
    write
}

/// Stably copy retained elements of `input` to the front of `dst`.
///
/// `dst` must have room for every retained element; callers size it with a
/// counting pass first.
#[inline]
pub fn compact_copy<T, F>(input: &[T], base: usize, dst: &mut [T], discard: &F) -> usize
where
    T: Copy,
    F: Fn(usize, &T) -> bool,
{
    let mut write = 0;
    for (i, value) in input.iter().enumerate() {
        if !discard(base + i, value) {
            dst[write] = *value;
            write += 1;
        }
    }
    write
}

/// Number of elements `compact_copy` would write
#[inline]
pub fn retained_count<T, F>(input: &[T], base: usize, discard: &F) -> usize
where
    F: Fn(usize, &T) -> bool,
{
    input
        .iter()
        .enumerate()
        .filter(|&(i, v)| !discard(base + i, v))
        .count()
}
