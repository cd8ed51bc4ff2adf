//! Conversion operations
//!
//! Operations are defined as traits implemented by a runtime's client. The
//! client is the execution context: passing it to a routine selects the
//! parallel strategy that matches the memory space the arrays live in.
//!
//! ```text
//! RuntimeClient<R>
//!   └── implements ConvertOps<R>
//!         ├── fill                (initialize an array)
//!         ├── offsets_to_indices  (expand compressed offsets)
//!         ├── indices_to_offsets  (compress sorted indices)
//!         └── sort_by_key         (stable key sort with two payloads)
//! ```
//!
//! # Implementing Operations for a New Backend
//!
//! Implement `ConvertOps<YourRuntime>` for your client type, validate the
//! arguments with the helpers in `crate::runtime::helpers`, then launch the
//! backend's kernels on the arrays' raw pointers. The builder in
//! [`crate::graph`] works with any such client unchanged.

pub mod cpu;
pub mod traits;

pub use traits::ConvertOps;
