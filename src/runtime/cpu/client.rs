//! CPU client and parallelism configuration

use super::device::CpuDevice;
use super::runtime::CpuRuntime;
use crate::runtime::RuntimeClient;
#[cfg(feature = "rayon")]
use std::sync::Arc;

/// Default number of elements handled by one parallel task.
///
/// Arrays shorter than this run serially: below it rayon's scheduling
/// overhead outweighs the work.
pub const DEFAULT_CHUNK_SIZE: usize = 4096;

/// Thread and chunking configuration for host kernels
///
/// - `num_threads`: `None` uses rayon's global pool, `Some(1)` forces serial
///   kernels, `Some(n)` runs kernels on a dedicated pool of `n` threads.
/// - `chunk_size`: elements per parallel task and the serial/parallel
///   threshold. `None` means [`DEFAULT_CHUNK_SIZE`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParallelismConfig {
    /// Worker threads for host kernels
    pub num_threads: Option<usize>,
    /// Elements per parallel task
    pub chunk_size: Option<usize>,
}

impl ParallelismConfig {
    /// Create a configuration
    pub fn new(num_threads: Option<usize>, chunk_size: Option<usize>) -> Self {
        Self {
            num_threads,
            chunk_size,
        }
    }

    /// Configuration that always runs kernels on the calling thread
    pub fn serial() -> Self {
        Self::new(Some(1), None)
    }

    /// Effective chunk size (never zero)
    #[inline]
    pub fn chunk_size(&self) -> usize {
        self.chunk_size.unwrap_or(DEFAULT_CHUNK_SIZE).max(1)
    }
}

/// CPU client for operation dispatch
#[derive(Clone, Debug)]
pub struct CpuClient {
    pub(crate) device: CpuDevice,
    parallelism: ParallelismConfig,
    #[cfg(feature = "rayon")]
    pool: Option<Arc<rayon::ThreadPool>>,
}

impl CpuClient {
    /// Create a new CPU client using the global rayon pool
    pub fn new(device: CpuDevice) -> Self {
        Self {
            device,
            parallelism: ParallelismConfig::default(),
            #[cfg(feature = "rayon")]
            pool: None,
        }
    }

    /// Return a client running host kernels under `config`
    ///
    /// If a dedicated pool cannot be created the client keeps using the
    /// global pool.
    pub fn with_parallelism(mut self, config: ParallelismConfig) -> Self {
        self.parallelism = config;

        #[cfg(feature = "rayon")]
        {
            self.pool = match config.num_threads {
                Some(n) if n > 1 => {
                    match rayon::ThreadPoolBuilder::new().num_threads(n).build() {
                        Ok(pool) => {
                            tracing::debug!(threads = n, "created dedicated host thread pool");
                            Some(Arc::new(pool))
                        }
                        Err(e) => {
                            tracing::warn!(
                                threads = n,
                                error = %e,
                                "failed to build host thread pool, using global pool"
                            );
                            None
                        }
                    }
                }
                _ => None,
            };
        }

        self
    }

    /// The active parallelism configuration
    pub fn parallelism(&self) -> ParallelismConfig {
        self.parallelism
    }

    /// Elements per parallel task
    #[inline]
    pub fn chunk_size_hint(&self) -> usize {
        self.parallelism.chunk_size()
    }

    /// Chunk size to use for a kernel over `len` elements, or `None` to run serially
    pub(crate) fn parallel_chunk(&self, len: usize) -> Option<usize> {
        if !cfg!(feature = "rayon") || self.parallelism.num_threads == Some(1) {
            return None;
        }
        let chunk = self.chunk_size_hint();
        (len >= chunk).then_some(chunk)
    }

    /// Run `op` inside this client's thread pool
    pub(crate) fn install<OP, T>(&self, op: OP) -> T
    where
        OP: FnOnce() -> T + Send,
        T: Send,
    {
        #[cfg(feature = "rayon")]
        if let Some(pool) = &self.pool {
            return pool.install(op);
        }
        op()
    }
}

impl RuntimeClient<CpuRuntime> for CpuClient {
    fn device(&self) -> &CpuDevice {
        &self.device
    }

    fn synchronize(&self) {
        // CPU operations are synchronous, nothing to do
    }
}
