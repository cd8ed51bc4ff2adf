//! Core trait for memory spaces

use crate::error::Result;
use std::fmt;

/// Where a runtime's memory lives
///
/// This is the discriminator used to pick an execution strategy. The two
/// spaces run the same algorithms and differ only in the parallel primitives
/// backing them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemorySpace {
    /// Ordinary host memory
    Host,
    /// Accelerator memory, reachable only through its runtime
    Device,
}

impl MemorySpace {
    /// Returns true for host memory
    #[inline]
    pub fn is_host(&self) -> bool {
        matches!(self, MemorySpace::Host)
    }

    /// Returns the space name as a string
    pub fn name(&self) -> &'static str {
        match self {
            MemorySpace::Host => "host",
            MemorySpace::Device => "device",
        }
    }
}

impl fmt::Display for MemorySpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Core trait for memory spaces
///
/// `Runtime` abstracts over host and accelerator memory. It uses static
/// dispatch via generics, so a graph built for one runtime carries no
/// cost for the others.
///
/// # Associated Types
///
/// - `Device`: Identifies a specific compute unit (e.g., GPU 0, GPU 1)
/// - `Client`: Handles operation dispatch and synchronization
///
/// # Example
///
/// ```ignore
/// let device = CpuRuntime::default_device();
/// let ptr = CpuRuntime::allocate(1024, &device)?;
/// // ... use memory ...
/// CpuRuntime::deallocate(ptr, 1024, &device);
/// ```
pub trait Runtime: Clone + Send + Sync + 'static {
    /// Device identifier type
    type Device: super::Device;

    /// Client for dispatching operations
    type Client: super::RuntimeClient<Self>;

    /// Human-readable name of this runtime
    fn name() -> &'static str;

    /// The memory space arrays of this runtime live in
    fn memory_space() -> MemorySpace;

    /// Allocate zero-initialized memory
    ///
    /// Returns a pointer (u64) usable by this runtime's kernels.
    /// Returns `Err(OutOfMemory)` if allocation fails.
    fn allocate(size_bytes: usize, device: &Self::Device) -> Result<u64>;

    /// Deallocate memory
    fn deallocate(ptr: u64, size_bytes: usize, device: &Self::Device);

    /// Copy data from host to this runtime's memory
    fn copy_to_device(src: &[u8], dst: u64, device: &Self::Device) -> Result<()>;

    /// Copy data from this runtime's memory to host
    fn copy_from_device(src: u64, dst: &mut [u8], device: &Self::Device) -> Result<()>;

    /// Copy data within this runtime's memory
    fn copy_within_device(
        src: u64,
        dst: u64,
        size_bytes: usize,
        device: &Self::Device,
    ) -> Result<()>;

    /// Get the default device
    fn default_device() -> Self::Device;

    /// Get the default client for a device
    fn default_client(device: &Self::Device) -> Self::Client;
}
