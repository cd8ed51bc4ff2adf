//! Inclusive scan kernels

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// In-place inclusive scan with an associative operator
///
/// `data[i] = op(data[0], ..., data[i])`. The parallel path scans each chunk
/// independently, folds the chunk totals serially, then applies each
/// chunk's carry in parallel.
pub fn inclusive_scan_kernel<T, F>(data: &mut [T], op: F, chunk: Option<usize>)
where
    T: Copy + Send + Sync,
    F: Fn(T, T) -> T + Sync,
{
    if data.is_empty() {
        return;
    }

    #[cfg(feature = "rayon")]
    if let Some(chunk) = chunk {
        scan_parallel(data, &op, chunk);
        return;
    }
    #[cfg(not(feature = "rayon"))]
    let _ = chunk;

    scan_serial(data, &op);
}

/// Inclusive prefix maximum
#[inline]
pub fn inclusive_max_scan_kernel<T: Copy + Ord + Send + Sync>(data: &mut [T], chunk: Option<usize>) {
    inclusive_scan_kernel(data, std::cmp::max, chunk);
}

#[inline]
fn scan_serial<T: Copy, F: Fn(T, T) -> T>(data: &mut [T], op: &F) {
    let mut acc = data[0];
    for x in data.iter_mut().skip(1) {
        acc = op(acc, *x);
        *x = acc;
    }
}

#[cfg(feature = "rayon")]
fn scan_parallel<T, F>(data: &mut [T], op: &F, chunk: usize)
where
    T: Copy + Send + Sync,
    F: Fn(T, T) -> T + Sync,
{
    data.par_chunks_mut(chunk).for_each(|c| scan_serial(c, op));

    // carries[k] = op over every element before chunk k
    let totals: Vec<T> = data.chunks(chunk).map(|c| c[c.len() - 1]).collect();
    let mut carries = Vec::with_capacity(totals.len());
    let mut acc = totals[0];
    carries.push(acc);
    for &t in &totals[1..] {
        carries.push(acc);
        acc = op(acc, t);
    }

    data.par_chunks_mut(chunk)
        .enumerate()
        .skip(1)
        .for_each(|(k, c)| {
            let carry = carries[k];
            for x in c.iter_mut() {
                *x = op(carry, *x);
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_scan() {
        let mut data = [0u32, 0, 2, 3, 0, 6, 0, 7];
        inclusive_max_scan_kernel(&mut data, None);
        assert_eq!(data, [0, 0, 2, 3, 3, 6, 6, 7]);
    }

    #[test]
    fn test_sum_scan() {
        let mut data = [1i64, 2, 3, 4];
        inclusive_scan_kernel(&mut data, |a, b| a + b, None);
        assert_eq!(data, [1, 3, 6, 10]);
    }

    #[cfg(feature = "rayon")]
    #[test]
    fn test_parallel_scan_matches_serial() {
        let input: Vec<i64> = (0..1000).map(|i| (i * 7919) % 113).collect();
        let mut expected = input.clone();
        inclusive_scan_kernel(&mut expected, |a, b| a + b, None);

        for chunk in [1, 3, 64, 999, 1000, 4096] {
            let mut got = input.clone();
            inclusive_scan_kernel(&mut got, |a, b| a + b, Some(chunk));
            assert_eq!(got, expected, "chunk {}", chunk);
        }
    }
}
