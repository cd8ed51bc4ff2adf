//! CPU kernel implementations
//!
//! Kernels work on host slices and take an optional chunk size: `None` runs
//! on the calling thread, `Some(n)` splits the work into `n`-element rayon
//! tasks. Both paths compute identical results.

pub mod key_sort;
pub mod memory;
pub mod scan;
pub mod scatter;
pub mod search;

pub use key_sort::sort_by_key_kernel;
pub use memory::fill_kernel;
pub use scan::inclusive_max_scan_kernel;
pub use scatter::scatter_bucket_starts;
pub use search::lower_bound_buckets_kernel;
