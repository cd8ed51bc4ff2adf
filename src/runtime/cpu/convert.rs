//! Offset/index conversion implementations for CPU

use super::kernels;
use super::{CpuClient, CpuRuntime};
use crate::array::Array;
use crate::dtype::{Element, Index};
use crate::error::{Error, Result};
use crate::runtime::helpers::{ensure_disjoint, ensure_exclusive, ensure_len};

/// Mutable host slice over the first `len` elements of an exclusive output.
fn output_slice<'a, T: Element>(
    arg: &'static str,
    out: &'a mut Array<CpuRuntime, T>,
    len: usize,
) -> Result<&'a mut [T]> {
    ensure_len(arg, out, len)?;
    ensure_exclusive(arg, out)?;
    let slice = out
        .as_mut_slice()
        .ok_or_else(|| Error::invalid_argument(arg, "output array is shared"))?;
    Ok(&mut slice[..len])
}

pub fn fill_impl<T: Element>(
    client: &CpuClient,
    array: &mut Array<CpuRuntime, T>,
    value: T,
) -> Result<()> {
    let len = array.len();
    let out = output_slice("array", array, len)?;
    let chunk = client.parallel_chunk(len);
    client.install(move || kernels::fill_kernel(out, value, chunk));
    Ok(())
}

pub fn offsets_to_indices_impl<O: Index, I: Index>(
    client: &CpuClient,
    offsets: &Array<CpuRuntime, O>,
    size_of_offsets: usize,
    indices: &mut Array<CpuRuntime, I>,
    size_of_indices: usize,
) -> Result<()> {
    ensure_len("offsets", offsets, size_of_offsets)?;
    ensure_disjoint("indices", offsets, indices)?;

    let offsets = &offsets.as_slice()[..size_of_offsets];
    let indices = output_slice("indices", indices, size_of_indices)?;
    let chunk = client.parallel_chunk(size_of_indices.max(size_of_offsets));

    client.install(move || {
        kernels::fill_kernel(indices, I::zero(), chunk);
        kernels::scatter_bucket_starts(offsets, indices, chunk);
        kernels::inclusive_max_scan_kernel(indices, chunk);
    });
    Ok(())
}

pub fn indices_to_offsets_impl<I: Index, O: Index>(
    client: &CpuClient,
    indices: &Array<CpuRuntime, I>,
    size_of_indices: usize,
    offsets: &mut Array<CpuRuntime, O>,
    size_of_offsets: usize,
) -> Result<()> {
    ensure_len("indices", indices, size_of_indices)?;
    ensure_disjoint("offsets", indices, offsets)?;

    let indices = &indices.as_slice()[..size_of_indices];
    let offsets = output_slice("offsets", offsets, size_of_offsets)?;
    let chunk = client.parallel_chunk(size_of_offsets);

    client.install(move || kernels::lower_bound_buckets_kernel(indices, offsets, chunk));
    Ok(())
}

pub fn sort_by_key_impl<K: Index, A: Element, B: Element>(
    client: &CpuClient,
    keys: &mut Array<CpuRuntime, K>,
    payload_a: &mut Array<CpuRuntime, A>,
    payload_b: &mut Array<CpuRuntime, B>,
    len: usize,
) -> Result<()> {
    ensure_disjoint("payload_a", keys, payload_a)?;
    ensure_disjoint("payload_b", keys, payload_b)?;
    ensure_disjoint("payload_b", payload_a, payload_b)?;

    let keys = output_slice("keys", keys, len)?;
    let payload_a = output_slice("payload_a", payload_a, len)?;
    let payload_b = output_slice("payload_b", payload_b, len)?;
    let chunk = client.parallel_chunk(len);

    client.install(move || kernels::sort_by_key_kernel(keys, payload_a, payload_b, chunk));
    Ok(())
}
