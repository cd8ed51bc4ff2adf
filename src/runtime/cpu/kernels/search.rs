//! Batched lower-bound search

use crate::dtype::Index;

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// For every bucket `b` in `0..out.len()`, `out[b]` = number of entries of
/// `sorted` strictly less than `b`
///
/// `sorted` must be non-decreasing; otherwise the results are unspecified.
pub fn lower_bound_buckets_kernel<I: Index, O: Index>(sorted: &[I], out: &mut [O], chunk: Option<usize>) {
    let search = |b: usize| O::from_usize(sorted.partition_point(|&x| x < I::from_usize(b)));

    #[cfg(feature = "rayon")]
    if let Some(chunk) = chunk {
        out.par_iter_mut()
            .with_min_len(chunk)
            .enumerate()
            .for_each(|(b, slot)| *slot = search(b));
        return;
    }
    #[cfg(not(feature = "rayon"))]
    let _ = chunk;

    for (b, slot) in out.iter_mut().enumerate() {
        *slot = search(b);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lower_bound_buckets() {
        let sorted = [0u32, 0, 2, 3, 3, 6, 6, 7];
        let mut out = [0u64; 9];
        lower_bound_buckets_kernel(&sorted, &mut out, None);
        assert_eq!(out, [0, 2, 2, 3, 5, 5, 5, 7, 8]);
    }

    #[test]
    fn test_lower_bound_empty_input() {
        let sorted: [i32; 0] = [];
        let mut out = [9i32; 3];
        lower_bound_buckets_kernel(&sorted, &mut out, None);
        assert_eq!(out, [0, 0, 0]);
    }

    #[cfg(feature = "rayon")]
    #[test]
    fn test_lower_bound_parallel() {
        let sorted = [0u32, 0, 2, 3, 3, 6, 6, 7];
        let mut out = [0u32; 9];
        lower_bound_buckets_kernel(&sorted, &mut out, Some(2));
        assert_eq!(out, [0, 2, 2, 3, 5, 5, 5, 7, 8]);
    }
}
