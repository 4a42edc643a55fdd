//! Parallel stable compaction kernels.
//!
//! `discard(index, value)` decides removal; `index` is the absolute position
//! in the input so stencil variants can look up their decision.

use crate::error::Result;
use crate::ops::impl_generic;
use crate::ops::{Output, commit};
use crate::runtime::cpu::CpuClient;

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Stably move retained elements of `data` to its front.
///
/// Returns the number of retained elements.
pub fn compact_in_place<T, F>(client: &CpuClient, data: &mut [T], discard: &F) -> usize
where
    T: Copy + Send + Sync,
    F: Fn(usize, &T) -> bool + Sync,
{
    #[cfg(feature = "rayon")]
    {
        let chunk = client.chunk_size();
        if data.len() > chunk {
            let kept: Vec<usize> = client.install_parallelism(|| {
                data.par_chunks_mut(chunk)
                    .enumerate()
                    .map(|(k, c)| impl_generic::compact_in_place(c, k * chunk, discard))
                    .collect()
            });

            // Destinations never pass their source, so chunk order is safe.
            let mut write = 0;
            for (k, &n) in kept.iter().enumerate() {
                let start = k * chunk;
                if start != write {
                    data.copy_within(start..start + n, write);
                }
                write += n;
            }
            return write;
        }
    }

    #[cfg(not(feature = "rayon"))]
    let _ = client;

    impl_generic::compact_in_place(data, 0, discard)
}

/// Stably copy retained elements of `input` into `output`.
///
/// Returns the output end position.
pub fn compact_copy<T, O, F>(
    client: &CpuClient,
    input: &[T],
    output: &mut O,
    discard: &F,
) -> Result<usize>
where
    T: Copy + Send + Sync,
    O: Output<T> + ?Sized,
    F: Fn(usize, &T) -> bool + Sync,
{
    #[cfg(feature = "rayon")]
    {
        let chunk = client.chunk_size();
        if input.len() > chunk {
            let kept: Vec<usize> = client.install_parallelism(|| {
                input
                    .par_chunks(chunk)
                    .enumerate()
                    .map(|(k, c)| impl_generic::retained_count(c, k * chunk, discard))
                    .collect()
            });
            let total: usize = kept.iter().sum();

            return commit(output, total, |dst| {
                // Exclusive scan of the per-chunk counts, expressed as
                // consecutive disjoint windows of the destination.
                let mut windows = Vec::with_capacity(kept.len());
                let mut rest = dst;
                for &n in &kept {
                    let (window, tail) = std::mem::take(&mut rest).split_at_mut(n);
                    windows.push(window);
                    rest = tail;
                }

                client.install_parallelism(|| {
                    input
                        .par_chunks(chunk)
                        .zip(windows.into_par_iter())
                        .enumerate()
                        .for_each(|(k, (src, window))| {
                            impl_generic::compact_copy(src, k * chunk, window, discard);
                        });
                });
            });
        }
    }

    #[cfg(not(feature = "rayon"))]
    let _ = client;

    let retained = impl_generic::retained_count(input, 0, discard);
    commit(output, retained, |dst| {
        impl_generic::compact_copy(input, 0, dst, discard);
    })
}
