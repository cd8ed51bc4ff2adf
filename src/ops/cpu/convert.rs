//! CPU implementation of conversion operations.

use crate::array::Array;
use crate::dtype::{Element, Index};
use crate::error::Result;
use crate::ops::ConvertOps;
use crate::runtime::cpu::{convert, CpuClient, CpuRuntime};

/// ConvertOps implementation for CPU runtime.
impl ConvertOps<CpuRuntime> for CpuClient {
    fn fill<T: Element>(&self, array: &mut Array<CpuRuntime, T>, value: T) -> Result<()> {
        convert::fill_impl(self, array, value)
    }

    fn offsets_to_indices<O: Index, I: Index>(
        &self,
        offsets: &Array<CpuRuntime, O>,
        size_of_offsets: usize,
        indices: &mut Array<CpuRuntime, I>,
        size_of_indices: usize,
    ) -> Result<()> {
        convert::offsets_to_indices_impl(self, offsets, size_of_offsets, indices, size_of_indices)
    }

    fn indices_to_offsets<I: Index, O: Index>(
        &self,
        indices: &Array<CpuRuntime, I>,
        size_of_indices: usize,
        offsets: &mut Array<CpuRuntime, O>,
        size_of_offsets: usize,
    ) -> Result<()> {
        convert::indices_to_offsets_impl(self, indices, size_of_indices, offsets, size_of_offsets)
    }

    fn sort_by_key<K: Index, A: Element, B: Element>(
        &self,
        keys: &mut Array<CpuRuntime, K>,
        payload_a: &mut Array<CpuRuntime, A>,
        payload_b: &mut Array<CpuRuntime, B>,
        len: usize,
    ) -> Result<()> {
        convert::sort_by_key_impl(self, keys, payload_a, payload_b, len)
    }
}
