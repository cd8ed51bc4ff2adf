//! Graphs whose view set is picked at configuration time

use super::graph::Graph;
use super::view::{CooView, CscCooViews, CscView, CsrCooViews, CsrView, ViewFlags};
use crate::dtype::{Element, Index};
use crate::formats::{CooData, CscData, CsrData};
use crate::runtime::{MemorySpace, Runtime};

/// A graph built for one of the five valid view sets
#[derive(Debug)]
pub enum DynGraph<R: Runtime, V: Index, E: Index, W: Element> {
    /// CSR only
    Csr(Graph<R, V, E, W, CsrView>),
    /// CSC only
    Csc(Graph<R, V, E, W, CscView>),
    /// COO only
    Coo(Graph<R, V, E, W, CooView>),
    /// CSR and COO
    CsrCoo(Graph<R, V, E, W, CsrCooViews>),
    /// CSC and COO
    CscCoo(Graph<R, V, E, W, CscCooViews>),
}

macro_rules! dispatch {
    ($self:expr, $g:ident => $body:expr) => {
        match $self {
            DynGraph::Csr($g) => $body,
            DynGraph::Csc($g) => $body,
            DynGraph::Coo($g) => $body,
            DynGraph::CsrCoo($g) => $body,
            DynGraph::CscCoo($g) => $body,
        }
    };
}

impl<R: Runtime, V: Index, E: Index, W: Element> DynGraph<R, V, E, W> {
    /// The views this graph exposes
    pub fn views(&self) -> ViewFlags {
        dispatch!(self, g => g.views())
    }

    /// Number of vertices (rows)
    pub fn number_of_vertices(&self) -> usize {
        dispatch!(self, g => g.number_of_vertices())
    }

    /// Number of edges
    pub fn number_of_edges(&self) -> usize {
        dispatch!(self, g => g.number_of_edges())
    }

    /// Returns `[rows, columns]`
    pub fn shape(&self) -> [usize; 2] {
        dispatch!(self, g => g.shape())
    }

    /// Bytes held by the arrays of every exposed view
    pub fn memory_usage(&self) -> usize {
        dispatch!(self, g => g.memory_usage())
    }

    /// Memory space holding the graph's arrays
    pub fn memory_space(&self) -> MemorySpace {
        R::memory_space()
    }

    /// CSR record, if present
    pub fn csr(&self) -> Option<&CsrData<R, V, E, W>> {
        dispatch!(self, g => g.try_csr())
    }

    /// CSC record, if present
    pub fn csc(&self) -> Option<&CscData<R, V, E, W>> {
        dispatch!(self, g => g.try_csc())
    }

    /// COO record, if present
    pub fn coo(&self) -> Option<&CooData<R, V, W>> {
        dispatch!(self, g => g.try_coo())
    }
}
