//! Shared argument checks for runtime backends
//!
//! Every backend validates the same things before launching a conversion
//! kernel, so the checks live here to keep backends consistent. They guard
//! memory safety only. Requested sizes must fit the arrays, an output must
//! not share memory with an input, and an output handle must not be shared
//! with any clone. Offset monotonicity is a caller obligation and is never
//! checked.

use crate::array::Array;
use crate::dtype::Element;
use crate::error::{Error, Result};
use crate::runtime::Runtime;

/// Ensure `array` holds at least `required` elements.
#[inline]
pub fn ensure_len<R: Runtime, T: Element>(
    arg: &'static str,
    array: &Array<R, T>,
    required: usize,
) -> Result<()> {
    if array.len() < required {
        return Err(Error::invalid_argument(
            arg,
            format!(
                "requested {} elements but the array holds {}",
                required,
                array.len()
            ),
        ));
    }
    Ok(())
}

/// Ensure the output array `out` does not share memory with `input`.
#[inline]
pub fn ensure_disjoint<R: Runtime, A: Element, B: Element>(
    arg: &'static str,
    input: &Array<R, A>,
    out: &Array<R, B>,
) -> Result<()> {
    if input.overlaps(out) {
        return Err(Error::invalid_argument(
            arg,
            "output array aliases an input array",
        ));
    }
    Ok(())
}

/// Ensure no other handle shares the buffer of output `out`.
#[inline]
pub fn ensure_exclusive<R: Runtime, T: Element>(
    arg: &'static str,
    out: &Array<R, T>,
) -> Result<()> {
    if out.ref_count() > 1 {
        return Err(Error::invalid_argument(
            arg,
            format!(
                "output array is shared with {} other handle(s)",
                out.ref_count() - 1
            ),
        ));
    }
    Ok(())
}
