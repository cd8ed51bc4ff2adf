//! Runtime traits for memory-space abstraction

pub mod client;
pub mod device;
pub mod runtime;

pub use client::RuntimeClient;
pub use device::Device;
pub use runtime::{MemorySpace, Runtime};
