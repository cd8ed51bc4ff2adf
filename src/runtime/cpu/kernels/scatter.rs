//! Conditional scatter of bucket ids to bucket start positions
//!
//! For every adjacent offset pair `(offsets[b], offsets[b + 1])` that differs,
//! `out[offsets[b]] = b`. Empty buckets contribute nothing. Marks that land
//! outside `out` are dropped, so malformed offsets give garbage, never a
//! write out of bounds.

use crate::dtype::Index;

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Scatter each non-empty bucket's id to its start position
///
/// `offsets` holds `buckets + 1` entries. With `chunk = Some(n)` buckets are
/// processed `n` at a time in parallel, each task writing only into the
/// output range its buckets start in.
pub fn scatter_bucket_starts<O: Index, I: Index>(offsets: &[O], out: &mut [I], chunk: Option<usize>) {
    if offsets.len() < 2 || out.is_empty() {
        return;
    }

    #[cfg(feature = "rayon")]
    if let Some(chunk) = chunk {
        scatter_parallel(offsets, out, chunk);
        return;
    }
    #[cfg(not(feature = "rayon"))]
    let _ = chunk;

    mark_buckets(offsets, 0, offsets.len() - 1, 0, out);
}

/// Mark buckets `lo..hi` into `piece`, which starts at output position `base`.
#[inline]
fn mark_buckets<O: Index, I: Index>(offsets: &[O], lo: usize, hi: usize, base: usize, piece: &mut [I]) {
    for b in lo..hi {
        let (start, end) = (offsets[b], offsets[b + 1]);
        if start == end {
            continue;
        }
        if let Some(slot) = start
            .to_usize()
            .checked_sub(base)
            .and_then(|p| piece.get_mut(p))
        {
            *slot = I::from_usize(b);
        }
    }
}

#[cfg(feature = "rayon")]
fn scatter_parallel<O: Index, I: Index>(offsets: &[O], out: &mut [I], chunk: usize) {
    let buckets = offsets.len() - 1;
    let n = out.len();
    let num_tasks = buckets.div_ceil(chunk);

    // Output boundaries of each task, forced monotone so the split is valid
    // even for malformed offsets.
    let mut bounds = Vec::with_capacity(num_tasks + 1);
    bounds.push(0usize);
    for k in 1..num_tasks {
        let prev = bounds[k - 1];
        bounds.push(offsets[k * chunk].to_usize().clamp(prev, n));
    }
    bounds.push(n);

    let mut pieces = Vec::with_capacity(num_tasks);
    let mut rest: &mut [I] = out;
    for k in 0..num_tasks {
        let (head, tail) = std::mem::take(&mut rest).split_at_mut(bounds[k + 1] - bounds[k]);
        pieces.push((k, bounds[k], head));
        rest = tail;
    }

    pieces.into_par_iter().for_each(|(k, base, piece)| {
        let lo = k * chunk;
        let hi = (lo + chunk).min(buckets);
        mark_buckets(offsets, lo, hi, base, piece);
    });
}
