//! Common test utilities
#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sparsegraph::array::Array;
use sparsegraph::dtype::Element;
use sparsegraph::runtime::cpu::{CpuClient, CpuDevice, CpuRuntime, ParallelismConfig};
use sparsegraph::runtime::Runtime;

/// Create a CPU client and device for testing
pub fn create_cpu_client() -> (CpuClient, CpuDevice) {
    let device = CpuDevice::new();
    let client = CpuRuntime::default_client(&device);
    (client, device)
}

/// Client that always runs kernels on the calling thread
pub fn create_serial_client() -> (CpuClient, CpuDevice) {
    let (client, device) = create_cpu_client();
    (client.with_parallelism(ParallelismConfig::serial()), device)
}

/// Client that takes the parallel path for anything longer than `chunk_size`
pub fn create_parallel_client(chunk_size: usize) -> (CpuClient, CpuDevice) {
    let (client, device) = create_cpu_client();
    let config = ParallelismConfig::new(Some(4), Some(chunk_size));
    (client.with_parallelism(config), device)
}

/// Upload a host slice
pub fn host<T: Element>(data: &[T], device: &CpuDevice) -> Array<CpuRuntime, T> {
    Array::from_slice(data, device).expect("upload failed")
}

/// Read an array back to the host
pub fn read<T: Element>(array: &Array<CpuRuntime, T>) -> Vec<T> {
    array.to_vec().expect("readback failed")
}

/// Deterministic rng for property-style tests
pub fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Random monotone offsets with `buckets + 1` entries starting at 0
///
/// Roughly a third of the buckets are empty.
pub fn random_offsets(rng: &mut StdRng, buckets: usize, max_run: u32) -> Vec<u32> {
    let mut offsets = Vec::with_capacity(buckets + 1);
    let mut acc = 0u32;
    offsets.push(acc);
    for _ in 0..buckets {
        if rng.gen_ratio(1, 3) {
            offsets.push(acc);
            continue;
        }
        acc += rng.gen_range(1..=max_run);
        offsets.push(acc);
    }
    offsets
}

/// Random CSR adjacency with sorted columns per row: (row_offsets, column_indices, values)
pub fn random_csr(rng: &mut StdRng, rows: usize, columns: usize) -> (Vec<u32>, Vec<u32>, Vec<f32>) {
    let mut row_offsets = vec![0u32];
    let mut column_indices = Vec::new();
    for _ in 0..rows {
        let mut cols: Vec<u32> = (0..columns as u32).filter(|_| rng.gen_ratio(1, 4)).collect();
        cols.sort_unstable();
        column_indices.extend_from_slice(&cols);
        row_offsets.push(column_indices.len() as u32);
    }
    let values = (0..column_indices.len()).map(|i| i as f32).collect();
    (row_offsets, column_indices, values)
}

/// Expand CSR into sorted (row, column, value-bits) triples
pub fn csr_edges(row_offsets: &[u32], column_indices: &[u32], values: &[f32]) -> Vec<(u32, u32, u32)> {
    let mut edges = Vec::new();
    for row in 0..row_offsets.len() - 1 {
        for k in row_offsets[row] as usize..row_offsets[row + 1] as usize {
            edges.push((row as u32, column_indices[k], values[k].to_bits()));
        }
    }
    edges.sort_unstable();
    edges
}

/// Expand CSC into sorted (row, column, value-bits) triples
pub fn csc_edges(column_offsets: &[u32], row_indices: &[u32], values: &[f32]) -> Vec<(u32, u32, u32)> {
    let mut edges = Vec::new();
    for column in 0..column_offsets.len() - 1 {
        for k in column_offsets[column] as usize..column_offsets[column + 1] as usize {
            edges.push((row_indices[k], column as u32, values[k].to_bits()));
        }
    }
    edges.sort_unstable();
    edges
}
