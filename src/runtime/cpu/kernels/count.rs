//! Parallel counting kernel.

use crate::ops::Predicate;
use crate::ops::impl_generic;
use crate::runtime::cpu::CpuClient;

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Number of elements of `data` satisfying `pred`
pub fn count_matching<T, P>(client: &CpuClient, data: &[T], pred: &P) -> usize
where
    T: Sync,
    P: Predicate<T>,
{
    #[cfg(feature = "rayon")]
    {
        let chunk = client.chunk_size();
        if data.len() > chunk {
            return client.install_parallelism(|| {
                data.par_chunks(chunk)
                    .map(|c| impl_generic::count_matching(c, pred))
                    .sum::<usize>()
            });
        }
    }

    #[cfg(not(feature = "rayon"))]
    let _ = client;

    impl_generic::count_matching(data, pred)
}
