//! Stable sort-by-key carrying two payload arrays

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Stable sort of `keys`, permuting `payload_a` and `payload_b` the same way
///
/// All three slices must have the same length. Equal keys keep their
/// original relative order, so the result is deterministic.
pub fn sort_by_key_kernel<K, A, B>(keys: &mut [K], payload_a: &mut [A], payload_b: &mut [B], chunk: Option<usize>)
where
    K: Copy + Ord + Send + Sync,
    A: Copy + Send + Sync,
    B: Copy + Send + Sync,
{
    debug_assert_eq!(keys.len(), payload_a.len());
    debug_assert_eq!(keys.len(), payload_b.len());

    let mut perm: Vec<usize> = (0..keys.len()).collect();

    #[cfg(feature = "rayon")]
    if chunk.is_some() {
        // par_sort_by_key is a stable merge sort
        perm.par_sort_by_key(|&i| keys[i]);
    } else {
        perm.sort_by_key(|&i| keys[i]);
    }
    #[cfg(not(feature = "rayon"))]
    perm.sort_by_key(|&i| keys[i]);

    apply_permutation(&perm, keys, chunk);
    apply_permutation(&perm, payload_a, chunk);
    apply_permutation(&perm, payload_b, chunk);
}

/// `data[i] = old_data[perm[i]]`
fn apply_permutation<T: Copy + Send + Sync>(perm: &[usize], data: &mut [T], chunk: Option<usize>) {
    let gathered: Vec<T> = {
        let src: &[T] = data;

        #[cfg(feature = "rayon")]
        let out = match chunk {
            Some(chunk) => perm.par_iter().with_min_len(chunk).map(|&i| src[i]).collect(),
            None => perm.iter().map(|&i| src[i]).collect(),
        };
        #[cfg(not(feature = "rayon"))]
        let out = {
            let _ = chunk;
            perm.iter().map(|&i| src[i]).collect()
        };

        out
    };
    data.copy_from_slice(&gathered);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_by_key_carries_payloads() {
        let mut keys = [1u32, 3, 0, 2, 3];
        let mut rows = [0u32, 0, 2, 3, 3];
        let mut vals = [10.0f32, 11.0, 12.0, 13.0, 14.0];

        sort_by_key_kernel(&mut keys, &mut rows, &mut vals, None);

        assert_eq!(keys, [0, 1, 2, 3, 3]);
        assert_eq!(rows, [2, 0, 3, 0, 3]);
        assert_eq!(vals, [12.0, 10.0, 13.0, 11.0, 14.0]);
    }

    #[test]
    fn test_sort_by_key_is_stable() {
        let mut keys = [1i64, 0, 1, 0];
        let mut a = [0u32, 1, 2, 3];
        let mut b = [0i32, 1, 2, 3];
        sort_by_key_kernel(&mut keys, &mut a, &mut b, None);
        assert_eq!(a, [1, 3, 0, 2]);
        assert_eq!(b, [1, 3, 0, 2]);
    }

    #[cfg(feature = "rayon")]
    #[test]
    fn test_parallel_sort_matches_serial() {
        let keys: Vec<u32> = (0..500).map(|i| (i * 37) % 17).collect();
        let a: Vec<u32> = (0..500).collect();
        let b: Vec<f64> = (0..500).map(|i| i as f64).collect();

        let (mut k1, mut a1, mut b1) = (keys.clone(), a.clone(), b.clone());
        sort_by_key_kernel(&mut k1, &mut a1, &mut b1, None);
        let (mut k2, mut a2, mut b2) = (keys, a, b);
        sort_by_key_kernel(&mut k2, &mut a2, &mut b2, Some(16));

        assert_eq!(k1, k2);
        assert_eq!(a1, a2);
        assert_eq!(b1, b2);
    }
}
