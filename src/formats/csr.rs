//! CSR record: struct, creation, getters, host neighbor queries

use super::check_len;
use super::format::{SparseFormat, SparseStorage};
use crate::array::Array;
use crate::dtype::{Element, Index};
use crate::error::Result;
use crate::runtime::cpu::CpuRuntime;
use crate::runtime::Runtime;

/// CSR (Compressed Sparse Row) record
///
/// `V` is the vertex id type of `column_indices`, `E` the edge offset type
/// of `row_offsets` and `W` the edge weight type.
#[derive(Debug, Clone)]
pub struct CsrData<R: Runtime, V: Index, E: Index, W: Element> {
    pub(crate) row_offsets: Array<R, E>,
    pub(crate) column_indices: Array<R, V>,
    pub(crate) values: Array<R, W>,
    pub(crate) shape: [usize; 2],
}

impl<R: Runtime, V: Index, E: Index, W: Element> CsrData<R, V, E, W> {
    /// Create a CSR record from components
    ///
    /// # Errors
    ///
    /// Returns `ShapeMismatch` if `row_offsets` does not hold `nrows + 1`
    /// entries or `column_indices` and `values` differ in length.
    pub fn new(
        row_offsets: Array<R, E>,
        column_indices: Array<R, V>,
        values: Array<R, W>,
        shape: [usize; 2],
    ) -> Result<Self> {
        let nnz = values.len();
        check_len(&row_offsets, shape[0] + 1)?;
        check_len(&column_indices, nnz)?;

        Ok(Self {
            row_offsets,
            column_indices,
            values,
            shape,
        })
    }

    /// Allocate zeroed arrays for a record with `nnz` edges
    pub fn zeros(shape: [usize; 2], nnz: usize, device: &R::Device) -> Result<Self> {
        Ok(Self {
            row_offsets: Array::zeros(shape[0] + 1, device)?,
            column_indices: Array::zeros(nnz, device)?,
            values: Array::zeros(nnz, device)?,
            shape,
        })
    }

    /// Create a record with no edges
    ///
    /// All row offsets are zero.
    pub fn empty(shape: [usize; 2], device: &R::Device) -> Result<Self> {
        Self::zeros(shape, 0, device)
    }

    /// Returns the row offsets array
    pub fn row_offsets(&self) -> &Array<R, E> {
        &self.row_offsets
    }

    /// Returns the column indices array
    pub fn column_indices(&self) -> &Array<R, V> {
        &self.column_indices
    }

    /// Returns the values array
    pub fn values(&self) -> &Array<R, W> {
        &self.values
    }

    /// Split the record into `(row_offsets, column_indices, values)`
    pub fn into_parts(self) -> (Array<R, E>, Array<R, V>, Array<R, W>) {
        (self.row_offsets, self.column_indices, self.values)
    }
}

impl<V: Index, E: Index, W: Element> CsrData<CpuRuntime, V, E, W> {
    fn row_range(&self, row: usize) -> Option<(usize, usize)> {
        if row >= self.number_of_vertices() {
            return None;
        }
        let offsets = self.row_offsets.as_slice();
        let (start, end) = (offsets[row].to_usize(), offsets[row + 1].to_usize());
        (start <= end && end <= self.number_of_edges()).then_some((start, end))
    }

    /// Number of edges leaving `row`, or `None` if the row is out of range
    pub fn row_degree(&self, row: usize) -> Option<usize> {
        self.row_range(row).map(|(start, end)| end - start)
    }

    /// Column indices and values of the edges leaving `row`
    pub fn row(&self, row: usize) -> Option<(&[V], &[W])> {
        let (start, end) = self.row_range(row)?;
        Some((
            &self.column_indices.as_slice()[start..end],
            &self.values.as_slice()[start..end],
        ))
    }
}

impl<R: Runtime, V: Index, E: Index, W: Element> SparseStorage for CsrData<R, V, E, W> {
    fn format(&self) -> SparseFormat {
        SparseFormat::Csr
    }

    fn shape(&self) -> [usize; 2] {
        self.shape
    }

    fn number_of_edges(&self) -> usize {
        self.values.len()
    }

    fn memory_usage(&self) -> usize {
        self.row_offsets.size_in_bytes()
            + self.column_indices.size_in_bytes()
            + self.values.size_in_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::runtime::cpu::CpuDevice;

    fn sample(device: &CpuDevice) -> CsrData<CpuRuntime, u32, u32, f32> {
        CsrData::new(
            Array::from_slice(&[0u32, 2, 2, 3, 5], device).unwrap(),
            Array::from_slice(&[1u32, 3, 0, 2, 3], device).unwrap(),
            Array::from_slice(&[1.0f32, 2.0, 3.0, 4.0, 5.0], device).unwrap(),
            [4, 4],
        )
        .unwrap()
    }

    #[test]
    fn test_new_validates_lengths() {
        let device = CpuDevice::new();
        let err = CsrData::<CpuRuntime, u32, u32, f32>::new(
            Array::from_slice(&[0u32, 1], &device).unwrap(),
            Array::from_slice(&[0u32], &device).unwrap(),
            Array::from_slice(&[1.0f32], &device).unwrap(),
            [4, 4],
        )
        .unwrap_err();
        assert!(matches!(err, Error::ShapeMismatch { .. }));
    }

    #[test]
    fn test_row_queries() {
        let device = CpuDevice::new();
        let csr = sample(&device);

        assert_eq!(csr.number_of_edges(), 5);
        assert_eq!(csr.number_of_vertices(), 4);
        assert_eq!(csr.average_degree(), 1.25);
        assert_eq!(csr.row_degree(0), Some(2));
        assert_eq!(csr.row_degree(1), Some(0));
        assert_eq!(csr.row_degree(4), None);

        let (cols, vals) = csr.row(3).unwrap();
        assert_eq!(cols, &[2, 3]);
        assert_eq!(vals, &[4.0, 5.0]);
    }

    #[test]
    fn test_empty() {
        let device = CpuDevice::new();
        let csr = CsrData::<CpuRuntime, u32, u64, f64>::empty([3, 3], &device).unwrap();
        assert!(csr.is_empty());
        assert_eq!(csr.row_offsets().to_vec().unwrap(), vec![0, 0, 0, 0]);
        assert_eq!(csr.average_degree(), 0.0);
        assert_eq!(csr.memory_usage(), 4 * 8);
    }
}
