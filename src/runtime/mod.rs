//! Memory spaces and execution contexts
//!
//! A `Runtime` names a memory space (host or accelerator) and knows how to
//! allocate, free and copy raw bytes in it. Every runtime has a client type
//! that dispatches work; clients implement [`ConvertOps`](crate::ops::ConvertOps)
//! so the conversion routines run with the strategy matching where the arrays
//! live.
//!
//! # Architecture
//!
//! ```text
//! Runtime (memory space identity)
//! ├── Device (identifies a specific host/accelerator)
//! └── Client (dispatches kernels, owns stream/thread pool)
//! ```

pub mod cpu;
pub mod helpers;
mod traits;

pub use traits::{Device, MemorySpace, Runtime, RuntimeClient};
