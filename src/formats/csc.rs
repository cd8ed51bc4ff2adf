//! CSC record

use super::check_len;
use super::format::{SparseFormat, SparseStorage};
use crate::array::Array;
use crate::dtype::{Element, Index};
use crate::error::Result;
use crate::runtime::cpu::CpuRuntime;
use crate::runtime::Runtime;

/// CSC (Compressed Sparse Column) record
///
/// Mirror of [`CsrData`](super::CsrData) with rows and columns exchanged.
#[derive(Debug, Clone)]
pub struct CscData<R: Runtime, V: Index, E: Index, W: Element> {
    pub(crate) column_offsets: Array<R, E>,
    pub(crate) row_indices: Array<R, V>,
    pub(crate) values: Array<R, W>,
    pub(crate) shape: [usize; 2],
}

impl<R: Runtime, V: Index, E: Index, W: Element> CscData<R, V, E, W> {
    /// Create a CSC record from components
    ///
    /// # Errors
    ///
    /// Returns `ShapeMismatch` if `column_offsets` does not hold `ncols + 1`
    /// entries or `row_indices` and `values` differ in length.
    pub fn new(
        column_offsets: Array<R, E>,
        row_indices: Array<R, V>,
        values: Array<R, W>,
        shape: [usize; 2],
    ) -> Result<Self> {
        check_len(&column_offsets, shape[1] + 1)?;
        check_len(&row_indices, values.len())?;

        Ok(Self {
            column_offsets,
            row_indices,
            values,
            shape,
        })
    }

    /// Allocate zeroed arrays for a record with `nnz` edges
    pub fn zeros(shape: [usize; 2], nnz: usize, device: &R::Device) -> Result<Self> {
        Ok(Self {
            column_offsets: Array::zeros(shape[1] + 1, device)?,
            row_indices: Array::zeros(nnz, device)?,
            values: Array::zeros(nnz, device)?,
            shape,
        })
    }

    /// Create a record with no edges
    pub fn empty(shape: [usize; 2], device: &R::Device) -> Result<Self> {
        Self::zeros(shape, 0, device)
    }

    /// Returns the column offsets array
    pub fn column_offsets(&self) -> &Array<R, E> {
        &self.column_offsets
    }

    /// Returns the row indices array
    pub fn row_indices(&self) -> &Array<R, V> {
        &self.row_indices
    }

    /// Returns the values array
    pub fn values(&self) -> &Array<R, W> {
        &self.values
    }

    /// Split the record into `(column_offsets, row_indices, values)`
    pub fn into_parts(self) -> (Array<R, E>, Array<R, V>, Array<R, W>) {
        (self.column_offsets, self.row_indices, self.values)
    }
}

impl<V: Index, E: Index, W: Element> CscData<CpuRuntime, V, E, W> {
    fn column_range(&self, column: usize) -> Option<(usize, usize)> {
        if column >= self.shape[1] {
            return None;
        }
        let offsets = self.column_offsets.as_slice();
        let (start, end) = (offsets[column].to_usize(), offsets[column + 1].to_usize());
        (start <= end && end <= self.number_of_edges()).then_some((start, end))
    }

    /// Number of edges entering `column`
    pub fn column_degree(&self, column: usize) -> Option<usize> {
        self.column_range(column).map(|(start, end)| end - start)
    }

    /// Row indices and values of the edges entering `column`
    pub fn column(&self, column: usize) -> Option<(&[V], &[W])> {
        let (start, end) = self.column_range(column)?;
        Some((
            &self.row_indices.as_slice()[start..end],
            &self.values.as_slice()[start..end],
        ))
    }
}

impl<R: Runtime, V: Index, E: Index, W: Element> SparseStorage for CscData<R, V, E, W> {
    fn format(&self) -> SparseFormat {
        SparseFormat::Csc
    }

    fn shape(&self) -> [usize; 2] {
        self.shape
    }

    fn number_of_edges(&self) -> usize {
        self.values.len()
    }

    fn memory_usage(&self) -> usize {
        self.column_offsets.size_in_bytes()
            + self.row_indices.size_in_bytes()
            + self.values.size_in_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::cpu::CpuDevice;

    #[test]
    fn test_column_queries() {
        let device = CpuDevice::new();
        let csc = CscData::<CpuRuntime, u32, u32, f32>::new(
            Array::from_slice(&[0u32, 1, 2, 3, 5], &device).unwrap(),
            Array::from_slice(&[2u32, 0, 3, 0, 3], &device).unwrap(),
            Array::from_slice(&[3.0f32, 1.0, 4.0, 2.0, 5.0], &device).unwrap(),
            [4, 4],
        )
        .unwrap();

        assert_eq!(csc.format(), SparseFormat::Csc);
        assert_eq!(csc.number_of_edges(), 5);
        assert_eq!(csc.column_degree(3), Some(2));
        let (rows, vals) = csc.column(3).unwrap();
        assert_eq!(rows, &[0, 3]);
        assert_eq!(vals, &[2.0, 5.0]);
        assert!(csc.column(4).is_none());
    }

    #[test]
    fn test_new_rejects_short_offsets() {
        let device = CpuDevice::new();
        let result = CscData::<CpuRuntime, u32, u32, f32>::new(
            Array::from_slice(&[0u32, 0], &device).unwrap(),
            Array::zeros(0, &device).unwrap(),
            Array::zeros(0, &device).unwrap(),
            [2, 2],
        );
        assert!(result.is_err());
    }
}
