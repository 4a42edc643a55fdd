//! Parallelism configuration for multi-threaded systems

#[cfg(feature = "rayon")]
use crate::error::{Error, Result};

/// Default number of elements processed by one task
pub const DEFAULT_CHUNK_SIZE: usize = 4096;

/// Thread count and work granularity for a parallel client
///
/// `None` fields fall back to defaults: the global rayon pool for the thread
/// count, [`DEFAULT_CHUNK_SIZE`] for the chunk size.
///
/// ```ignore
/// let client = CpuRuntime::default_client(&device)
///     .with_parallelism(ParallelismConfig::new(Some(4), Some(1024)));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParallelismConfig {
    num_threads: Option<usize>,
    chunk_size: Option<usize>,
}

impl ParallelismConfig {
    /// Create a configuration. A chunk size of zero is clamped to one, and a
    /// thread count of zero means "use the global pool".
    pub fn new(num_threads: Option<usize>, chunk_size: Option<usize>) -> Self {
        Self {
            num_threads: num_threads.filter(|&n| n > 0),
            chunk_size: chunk_size.map(|c| c.max(1)),
        }
    }

    /// Requested worker thread count, if any
    pub fn num_threads(&self) -> Option<usize> {
        self.num_threads
    }

    /// Effective chunk size
    pub fn chunk_size(&self) -> usize {
        self.chunk_size.unwrap_or(DEFAULT_CHUNK_SIZE)
    }

    /// Build a dedicated thread pool when a thread count was requested
    #[cfg(feature = "rayon")]
    pub(crate) fn build_pool(&self) -> Result<Option<rayon::ThreadPool>> {
        let Some(threads) = self.num_threads else {
            return Ok(None);
        };
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("sift-worker-{i}"))
            .build()
            .map(Some)
            .map_err(|e| Error::Backend(format!("thread pool: {e}")))
    }
}
