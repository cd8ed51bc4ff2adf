//! Edge layouts and the interface shared by their records

use crate::graph::ViewFlags;
use std::fmt;

/// Edge layout backing one graph view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SparseFormat {
    /// Edges grouped by source vertex: `row_offsets`, `column_indices`, `values`
    Csr,
    /// Edges grouped by destination vertex: `column_offsets`, `row_indices`, `values`
    Csc,
    /// One `(row, column, value)` triple per edge
    Coo,
}

impl SparseFormat {
    /// Every layout, in view-flag order
    pub const ALL: [SparseFormat; 3] = [SparseFormat::Csr, SparseFormat::Csc, SparseFormat::Coo];

    /// The view flag that selects this layout
    pub const fn flag(self) -> ViewFlags {
        match self {
            SparseFormat::Csr => ViewFlags::CSR,
            SparseFormat::Csc => ViewFlags::CSC,
            SparseFormat::Coo => ViewFlags::COO,
        }
    }
}

impl fmt::Display for SparseFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SparseFormat::Csr => "CSR",
            SparseFormat::Csc => "CSC",
            SparseFormat::Coo => "COO",
        })
    }
}

/// Common interface of the CSR, CSC and COO records
///
/// Rows are source vertices and columns destination vertices, so a record
/// of shape `[rows, columns]` describes `rows` vertices.
pub trait SparseStorage {
    /// Layout of the record
    fn format(&self) -> SparseFormat;

    /// `[rows, columns]` of the adjacency
    fn shape(&self) -> [usize; 2];

    /// Number of vertices
    #[inline]
    fn number_of_vertices(&self) -> usize {
        self.shape()[0]
    }

    /// Number of stored edges
    fn number_of_edges(&self) -> usize;

    /// Returns true if the record holds no edges
    #[inline]
    fn is_empty(&self) -> bool {
        self.number_of_edges() == 0
    }

    /// Mean number of edges per vertex, 0 for a graph without vertices
    fn average_degree(&self) -> f64 {
        match self.number_of_vertices() {
            0 => 0.0,
            n => self.number_of_edges() as f64 / n as f64,
        }
    }

    /// Bytes held by the record's arrays
    fn memory_usage(&self) -> usize;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_display_and_flags() {
        let names: Vec<String> = SparseFormat::ALL.iter().map(|f| f.to_string()).collect();
        assert_eq!(names, ["CSR", "CSC", "COO"]);
        assert_eq!(SparseFormat::Csc.flag(), ViewFlags::CSC);
        let all = SparseFormat::ALL
            .iter()
            .fold(ViewFlags::NONE, |acc, f| acc | f.flag());
        assert_eq!(all.bits(), 0b111);
    }
}
