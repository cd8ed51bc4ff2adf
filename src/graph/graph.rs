//! Graph container composed from the requested views

use super::view::{On, Toggle, ViewFlags, ViewSet, Views};
use crate::dtype::{Element, Index};
use crate::formats::{CooData, CscData, CsrData, SparseStorage};
use crate::runtime::{MemorySpace, Runtime};
use std::fmt;
use std::marker::PhantomData;

/// Graph exposing the views selected by `S`
///
/// Type parameters: memory space `R`, vertex id type `V`, edge offset type
/// `E`, weight type `W` and view set `S`. Disabled views are stored as `()`
/// and take no space. Graphs are immutable once built.
pub struct Graph<R: Runtime, V: Index, E: Index, W: Element, S: ViewSet> {
    pub(crate) shape: [usize; 2],
    pub(crate) nnz: usize,
    pub(crate) csr: <S::Csr as Toggle>::Slot<CsrData<R, V, E, W>>,
    pub(crate) csc: <S::Csc as Toggle>::Slot<CscData<R, V, E, W>>,
    pub(crate) coo: <S::Coo as Toggle>::Slot<CooData<R, V, W>>,
    pub(crate) _views: PhantomData<S>,
}

impl<R: Runtime, V: Index, E: Index, W: Element, S: ViewSet> Graph<R, V, E, W, S> {
    /// Number of vertices (rows)
    #[inline]
    pub fn number_of_vertices(&self) -> usize {
        self.shape[0]
    }

    /// Number of edges (stored non-zeros)
    #[inline]
    pub fn number_of_edges(&self) -> usize {
        self.nnz
    }

    /// Returns `[rows, columns]`
    #[inline]
    pub fn shape(&self) -> [usize; 2] {
        self.shape
    }

    /// The views this graph exposes
    #[inline]
    pub fn views(&self) -> ViewFlags {
        S::FLAGS
    }

    /// Memory space holding the graph's arrays
    #[inline]
    pub fn memory_space(&self) -> MemorySpace {
        R::memory_space()
    }

    /// Bytes held by the arrays of every exposed view
    ///
    /// An array shared by two views is counted once per view.
    pub fn memory_usage(&self) -> usize {
        self.try_csr().map_or(0, |csr| csr.memory_usage())
            + self.try_csc().map_or(0, |csc| csc.memory_usage())
            + self.try_coo().map_or(0, |coo| coo.memory_usage())
    }

    /// CSR record, if the view set includes it
    pub fn try_csr(&self) -> Option<&CsrData<R, V, E, W>> {
        <S::Csr as Toggle>::get(&self.csr)
    }

    /// CSC record, if the view set includes it
    pub fn try_csc(&self) -> Option<&CscData<R, V, E, W>> {
        <S::Csc as Toggle>::get(&self.csc)
    }

    /// COO record, if the view set includes it
    pub fn try_coo(&self) -> Option<&CooData<R, V, W>> {
        <S::Coo as Toggle>::get(&self.coo)
    }
}

impl<R: Runtime, V: Index, E: Index, W: Element, S: ViewSet> fmt::Debug for Graph<R, V, E, W, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph")
            .field("runtime", &R::name())
            .field("views", &S::FLAGS.to_string())
            .field("shape", &self.shape)
            .field("nnz", &self.nnz)
            .finish()
    }
}

/// Graphs with a CSR view
pub trait HasCsr<R: Runtime, V: Index, E: Index, W: Element> {
    /// The CSR record
    fn csr(&self) -> &CsrData<R, V, E, W>;

    /// Row offsets, `rows + 1` entries
    fn row_offsets(&self) -> &crate::array::Array<R, E> {
        self.csr().row_offsets()
    }
}

/// Graphs with a CSC view
pub trait HasCsc<R: Runtime, V: Index, E: Index, W: Element> {
    /// The CSC record
    fn csc(&self) -> &CscData<R, V, E, W>;

    /// Column offsets, `columns + 1` entries
    fn column_offsets(&self) -> &crate::array::Array<R, E> {
        self.csc().column_offsets()
    }
}

/// Graphs with a COO view
pub trait HasCoo<R: Runtime, V: Index, W: Element> {
    /// The COO record
    fn coo(&self) -> &CooData<R, V, W>;
}

impl<R, V, E, W, Cc, Co> HasCsr<R, V, E, W> for Graph<R, V, E, W, Views<On, Cc, Co>>
where
    R: Runtime,
    V: Index,
    E: Index,
    W: Element,
    Cc: Toggle,
    Co: Toggle,
{
    fn csr(&self) -> &CsrData<R, V, E, W> {
        &self.csr
    }
}

impl<R, V, E, W, Cr, Co> HasCsc<R, V, E, W> for Graph<R, V, E, W, Views<Cr, On, Co>>
where
    R: Runtime,
    V: Index,
    E: Index,
    W: Element,
    Cr: Toggle,
    Co: Toggle,
{
    fn csc(&self) -> &CscData<R, V, E, W> {
        &self.csc
    }
}

impl<R, V, E, W, Cr, Cc> HasCoo<R, V, W> for Graph<R, V, E, W, Views<Cr, Cc, On>>
where
    R: Runtime,
    V: Index,
    E: Index,
    W: Element,
    Cr: Toggle,
    Cc: Toggle,
{
    fn coo(&self) -> &CooData<R, V, W> {
        &self.coo
    }
}
