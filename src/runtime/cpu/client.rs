//! CPU client implementation

use super::device::CpuDevice;
use super::runtime::CpuRuntime;
use crate::runtime::{ParallelismConfig, RuntimeClient};
#[cfg(feature = "rayon")]
use std::sync::Arc;

/// CPU client for parallel algorithm execution
#[derive(Clone, Debug)]
pub struct CpuClient {
    pub(crate) device: CpuDevice,
    config: ParallelismConfig,
    #[cfg(feature = "rayon")]
    pool: Option<Arc<rayon::ThreadPool>>,
}

impl CpuClient {
    /// Create a new CPU client using the global rayon pool
    pub fn new(device: CpuDevice) -> Self {
        Self {
            device,
            config: ParallelismConfig::default(),
            #[cfg(feature = "rayon")]
            pool: None,
        }
    }

    /// Return a client with a different parallelism configuration
    ///
    /// When a thread count is given, a dedicated pool is built and shared by
    /// clones of the returned client. If the pool cannot be built, the client
    /// keeps running on the global pool.
    pub fn with_parallelism(self, config: ParallelismConfig) -> Self {
        log::debug!(
            "cpu client: threads={:?} chunk_size={}",
            config.num_threads(),
            config.chunk_size()
        );

        #[cfg(feature = "rayon")]
        let pool = match config.build_pool() {
            Ok(pool) => pool.map(Arc::new),
            Err(e) => {
                log::warn!("cpu client: falling back to the global pool: {e}");
                None
            }
        };

        Self {
            device: self.device,
            config,
            #[cfg(feature = "rayon")]
            pool,
        }
    }

    /// Current parallelism configuration
    pub fn parallelism(&self) -> &ParallelismConfig {
        &self.config
    }

    /// Number of elements handled by one task
    #[inline]
    pub(crate) fn chunk_size(&self) -> usize {
        self.config.chunk_size()
    }

    /// Run `op` on this client's pool
    #[cfg(feature = "rayon")]
    pub(crate) fn install_parallelism<OP, T>(&self, op: OP) -> T
    where
        OP: FnOnce() -> T + Send,
        T: Send,
    {
        match &self.pool {
            Some(pool) => pool.install(op),
            None => op(),
        }
    }
}

impl RuntimeClient<CpuRuntime> for CpuClient {
    fn device(&self) -> &CpuDevice {
        &self.device
    }

    fn synchronize(&self) {
        // Every kernel joins its workers before returning, nothing to do
    }
}
