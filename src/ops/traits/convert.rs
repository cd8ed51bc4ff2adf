//! Offset/index conversion operations trait.

use crate::array::Array;
use crate::dtype::{Element, Index};
use crate::error::Result;
use crate::runtime::{Runtime, RuntimeClient};

/// Conversions between compressed offsets and expanded indices
///
/// All operations write their output arrays in place. An output must be the
/// only handle to its buffer: implementations reject outputs that have live
/// clones, so arrays held by a built graph (or by anyone else) are never
/// written underneath a reader.
///
/// Sizes are explicit so a routine can work on a prefix of a larger buffer.
/// Implementations reject sizes larger than the arrays and outputs that alias
/// inputs. They do not check that offsets are monotone or that indices are
/// sorted; violating those preconditions yields unspecified (but memory-safe)
/// results.
pub trait ConvertOps<R: Runtime>: RuntimeClient<R> {
    /// Set every element of `array` to `value`.
    fn fill<T: Element>(&self, array: &mut Array<R, T>, value: T) -> Result<()>;

    /// Expand a compressed offset array into one bucket index per element.
    ///
    /// For each position `p` in `0..size_of_indices`, writes the largest
    /// bucket `b` with `offsets[b] <= p`. Empty buckets never appear in the
    /// output.
    ///
    /// # Algorithm
    ///
    /// Zero `indices`, scatter `b` to `offsets[b]` for every bucket whose
    /// adjacent offsets differ, then run an inclusive prefix-maximum scan.
    ///
    /// # Example
    ///
    /// ```
    /// # use sparsegraph::prelude::*;
    /// # let device = CpuDevice::new();
    /// # let client = CpuRuntime::default_client(&device);
    /// let offsets = Array::<CpuRuntime, u32>::from_slice(&[0, 2, 2, 3, 5, 5, 5, 7, 8], &device)?;
    /// let mut indices = Array::<CpuRuntime, u32>::zeros(8, &device)?;
    /// client.offsets_to_indices(&offsets, 9, &mut indices, 8)?;
    /// assert_eq!(indices.to_vec()?, vec![0, 0, 2, 3, 3, 6, 6, 7]);
    /// # Ok::<(), sparsegraph::error::Error>(())
    /// ```
    fn offsets_to_indices<O: Index, I: Index>(
        &self,
        offsets: &Array<R, O>,
        size_of_offsets: usize,
        indices: &mut Array<R, I>,
        size_of_indices: usize,
    ) -> Result<()>;

    /// Compress a sorted index array into offsets.
    ///
    /// For each bucket `b` in `0..size_of_offsets`, writes the number of
    /// entries of `indices[..size_of_indices]` strictly less than `b`
    /// (a batched lower-bound search).
    ///
    /// # Example
    ///
    /// ```
    /// # use sparsegraph::prelude::*;
    /// # let device = CpuDevice::new();
    /// # let client = CpuRuntime::default_client(&device);
    /// let indices = Array::<CpuRuntime, u32>::from_slice(&[0, 0, 2, 3, 3, 6, 6, 7], &device)?;
    /// let mut offsets = Array::<CpuRuntime, u64>::zeros(9, &device)?;
    /// client.indices_to_offsets(&indices, 8, &mut offsets, 9)?;
    /// assert_eq!(offsets.to_vec()?, vec![0, 2, 2, 3, 5, 5, 5, 7, 8]);
    /// # Ok::<(), sparsegraph::error::Error>(())
    /// ```
    fn indices_to_offsets<I: Index, O: Index>(
        &self,
        indices: &Array<R, I>,
        size_of_indices: usize,
        offsets: &mut Array<R, O>,
        size_of_offsets: usize,
    ) -> Result<()>;

    /// Stable sort of `keys[..len]`, permuting `payload_a[..len]` and
    /// `payload_b[..len]` identically.
    fn sort_by_key<K: Index, A: Element, B: Element>(
        &self,
        keys: &mut Array<R, K>,
        payload_a: &mut Array<R, A>,
        payload_b: &mut Array<R, B>,
        len: usize,
    ) -> Result<()>;
}
