//! COO record

use super::check_len;
use super::format::{SparseFormat, SparseStorage};
use crate::array::Array;
use crate::dtype::{Element, Index};
use crate::error::Result;
use crate::runtime::Runtime;

/// COO (Coordinate) record: one `(row, column, value)` triple per edge
///
/// No ordering is required. Records derived from CSR input have
/// non-decreasing row indices.
#[derive(Debug, Clone)]
pub struct CooData<R: Runtime, V: Index, W: Element> {
    pub(crate) row_indices: Array<R, V>,
    pub(crate) column_indices: Array<R, V>,
    pub(crate) values: Array<R, W>,
    pub(crate) shape: [usize; 2],
}

impl<R: Runtime, V: Index, W: Element> CooData<R, V, W> {
    /// Create a COO record from components
    ///
    /// # Errors
    ///
    /// Returns `ShapeMismatch` if the three arrays differ in length.
    pub fn new(
        row_indices: Array<R, V>,
        column_indices: Array<R, V>,
        values: Array<R, W>,
        shape: [usize; 2],
    ) -> Result<Self> {
        let nnz = values.len();
        check_len(&row_indices, nnz)?;
        check_len(&column_indices, nnz)?;

        Ok(Self {
            row_indices,
            column_indices,
            values,
            shape,
        })
    }

    /// Allocate zeroed arrays for a record with `nnz` edges
    pub fn zeros(shape: [usize; 2], nnz: usize, device: &R::Device) -> Result<Self> {
        Ok(Self {
            row_indices: Array::zeros(nnz, device)?,
            column_indices: Array::zeros(nnz, device)?,
            values: Array::zeros(nnz, device)?,
            shape,
        })
    }

    /// Create a record with no edges
    pub fn empty(shape: [usize; 2], device: &R::Device) -> Result<Self> {
        Self::zeros(shape, 0, device)
    }

    /// Returns the row indices array
    pub fn row_indices(&self) -> &Array<R, V> {
        &self.row_indices
    }

    /// Returns the column indices array
    pub fn column_indices(&self) -> &Array<R, V> {
        &self.column_indices
    }

    /// Returns the values array
    pub fn values(&self) -> &Array<R, W> {
        &self.values
    }

    /// Split the record into `(row_indices, column_indices, values)`
    pub fn into_parts(self) -> (Array<R, V>, Array<R, V>, Array<R, W>) {
        (self.row_indices, self.column_indices, self.values)
    }
}

impl<R: Runtime, V: Index, W: Element> SparseStorage for CooData<R, V, W> {
    fn format(&self) -> SparseFormat {
        SparseFormat::Coo
    }

    fn shape(&self) -> [usize; 2] {
        self.shape
    }

    fn number_of_edges(&self) -> usize {
        self.values.len()
    }

    fn memory_usage(&self) -> usize {
        self.row_indices.size_in_bytes()
            + self.column_indices.size_in_bytes()
            + self.values.size_in_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::cpu::{CpuDevice, CpuRuntime};

    #[test]
    fn test_zeros() {
        let device = CpuDevice::new();
        let coo = CooData::<CpuRuntime, i32, f64>::zeros([10, 10], 6, &device).unwrap();
        assert_eq!(coo.number_of_edges(), 6);
        assert_eq!(coo.shape(), [10, 10]);
        assert!((coo.average_degree() - 0.6).abs() < 1e-12);
        assert_eq!(coo.memory_usage(), 6 * 4 * 2 + 6 * 8);
        assert_eq!(coo.row_indices().to_vec().unwrap(), vec![0; 6]);
    }

    #[test]
    fn test_new_rejects_ragged_arrays() {
        let device = CpuDevice::new();
        let result = CooData::<CpuRuntime, u32, f32>::new(
            Array::from_slice(&[0u32, 1], &device).unwrap(),
            Array::from_slice(&[1u32], &device).unwrap(),
            Array::from_slice(&[1.0f32, 2.0], &device).unwrap(),
            [2, 2],
        );
        assert!(result.is_err());
    }
}
