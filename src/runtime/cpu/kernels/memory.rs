//! Memory initialization kernels

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Fill `out` with `value`
///
/// With `chunk = Some(n)` the fill is split into `n`-element rayon tasks.
#[inline]
pub fn fill_kernel<T: Copy + Send + Sync>(out: &mut [T], value: T, chunk: Option<usize>) {
    #[cfg(feature = "rayon")]
    if let Some(chunk) = chunk {
        out.par_chunks_mut(chunk).for_each(|c| c.fill(value));
        return;
    }
    #[cfg(not(feature = "rayon"))]
    let _ = chunk;

    out.fill(value);
}
