//! # sparsegraph
//!
//! **Multi-view sparse graph construction over host and accelerator memory.**
//!
//! sparsegraph turns CSR-shaped input (row offsets, column indices, values)
//! into a graph exposing any valid combination of CSR, CSC and COO views,
//! using a small set of data-parallel conversion primitives.
//!
//! ## Features
//!
//! - **Conversions**: offsets to indices, indices to offsets, stable key-sort
//!   with a two-array payload
//! - **Views chosen by type**: `Graph<R, V, E, W, Views<Csr, Csc, Coo>>`
//!   stores only the requested records; disabled views cost nothing
//! - **Views chosen at runtime**: [`ViewFlags`](graph::ViewFlags) and
//!   [`DynGraph`](graph::DynGraph)
//! - **Pluggable memory spaces**: every routine takes the runtime's client
//!   (an explicit execution context) as a parameter
//!
//! ## Quick Start
//!
//! ```rust
//! use sparsegraph::prelude::*;
//!
//! let device = CpuDevice::new();
//! let client = CpuRuntime::default_client(&device);
//!
//! let csr = CsrData::<CpuRuntime, u32, u32, f32>::new(
//!     Array::from_slice(&[0, 2, 2, 3, 5], &device)?,
//!     Array::from_slice(&[1, 3, 0, 2, 3], &device)?,
//!     Array::from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0], &device)?,
//!     [4, 4],
//! )?;
//!
//! let graph = GraphBuilder::new(&client, csr).build::<CsrCooViews>()?;
//! assert_eq!(graph.coo().row_indices().to_vec()?, vec![0, 0, 2, 3, 3]);
//! assert_eq!(graph.number_of_edges(), 5);
//! # Ok::<(), sparsegraph::error::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `rayon` (default): multi-threaded host kernels
//! - `serde`: serialization of `ParallelismConfig`, `ViewFlags` and `SparseFormat`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod array;
pub mod dtype;
pub mod error;
pub mod formats;
pub mod graph;
pub mod ops;
pub mod runtime;
pub mod util;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::array::Array;
    pub use crate::dtype::{DType, Element, Index};
    pub use crate::error::{Error, Result};
    pub use crate::formats::{CooData, CscData, CsrData, SparseFormat, SparseStorage};
    pub use crate::graph::{
        from_csr, from_csr_data, from_csr_dyn, BuildScratch, CooView, CscCooViews, CscView,
        CsrCooViews, CsrView, DynGraph, Graph, GraphBuilder, HasCoo, HasCsc, HasCsr, Off, On,
        ViewFlags, ViewSet, Views,
    };
    pub use crate::ops::ConvertOps;
    pub use crate::runtime::cpu::{CpuClient, CpuDevice, CpuRuntime, ParallelismConfig};
    pub use crate::runtime::{Device, MemorySpace, Runtime, RuntimeClient};
}

/// Default runtime
pub type DefaultRuntime = runtime::cpu::CpuRuntime;
