//! CPU runtime implementation
//!
//! The CPU runtime keeps arrays in ordinary heap memory and runs conversion
//! kernels either on the calling thread or, with the `rayon` feature, as
//! chunked data-parallel tasks. The serial and parallel paths compute the
//! same results; [`ParallelismConfig`] picks between them.

mod client;
pub(crate) mod convert;
mod device;
pub(crate) mod kernels;
mod runtime;

pub use client::{CpuClient, ParallelismConfig, DEFAULT_CHUNK_SIZE};
pub use device::CpuDevice;
pub use runtime::CpuRuntime;
