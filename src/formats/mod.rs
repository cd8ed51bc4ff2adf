//! Sparse graph records
//!
//! Each record is a plain bundle of arrays in one memory space:
//!
//! - [`CsrData`]: `row_offsets[nrows + 1]`, `column_indices[nnz]`, `values[nnz]`
//! - [`CscData`]: `column_offsets[ncols + 1]`, `row_indices[nnz]`, `values[nnz]`
//! - [`CooData`]: `row_indices[nnz]`, `column_indices[nnz]`, `values[nnz]`
//!
//! Records check array lengths on construction. Offset monotonicity is a
//! caller obligation and is not checked.

mod coo;
mod csc;
mod csr;
mod format;

pub use coo::CooData;
pub use csc::CscData;
pub use csr::CsrData;
pub use format::{SparseFormat, SparseStorage};

use crate::array::Array;
use crate::dtype::Element;
use crate::error::{Error, Result};
use crate::runtime::Runtime;

pub(crate) fn check_len<R: Runtime, T: Element>(array: &Array<R, T>, expected: usize) -> Result<()> {
    if array.len() != expected {
        return Err(Error::shape_mismatch(&[expected], &[array.len()]));
    }
    Ok(())
}
