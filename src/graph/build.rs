//! Building graphs from CSR-shaped input
//!
//! The pipeline is a fixed chain of whole-array steps on one client:
//!
//! | views      | steps                                                        |
//! |------------|--------------------------------------------------------------|
//! | CSR        | none, the input arrays are wrapped                           |
//! | COO        | derive row indices from row offsets                          |
//! | CSR + COO  | derive row indices once, share column indices and values     |
//! | CSC (+COO) | derive row indices, key-sort by column, compress the columns |
//!
//! CSR and CSC together are rejected: the key-sort reorders the column
//! indices and values in place, which would corrupt a CSR view sharing them.
//! Static view sets are checked at compile time and runtime view sets before
//! any array is read or written.
//!
//! Every array the pipeline writes must be the only handle to its buffer and
//! must not overlap any other input. All of this is checked before the first
//! write, so a rejected build leaves its inputs untouched.

use super::dynamic::DynGraph;
use super::graph::Graph;
use super::view::{Toggle, ViewFlags, ViewSet};
use crate::array::Array;
use crate::dtype::{Element, Index};
use crate::error::{Error, Result};
use crate::formats::{check_len, CooData, CscData, CsrData, SparseStorage};
use crate::ops::ConvertOps;
use crate::runtime::helpers::{ensure_disjoint, ensure_exclusive};
use crate::runtime::Runtime;
use std::marker::PhantomData;
use tracing::{debug, trace, warn};

/// Caller-supplied buffers the build may write into
///
/// Missing buffers are allocated on the client's device. A supplied buffer
/// must have exactly the length the build needs: `nnz` for row indices and
/// `columns + 1` for column offsets.
#[derive(Debug, Clone)]
pub struct BuildScratch<R: Runtime, V: Index, E: Index> {
    /// Output of the row-index derivation (CSC or COO views)
    pub row_indices: Option<Array<R, V>>,
    /// Output of the column compression (CSC view)
    pub column_offsets: Option<Array<R, E>>,
}

impl<R: Runtime, V: Index, E: Index> Default for BuildScratch<R, V, E> {
    fn default() -> Self {
        Self {
            row_indices: None,
            column_offsets: None,
        }
    }
}

impl<R: Runtime, V: Index, E: Index> BuildScratch<R, V, E> {
    /// No scratch: the build allocates what it needs
    pub fn new() -> Self {
        Self::default()
    }

    /// Write derived row indices into `row_indices`
    pub fn with_row_indices(mut self, row_indices: Array<R, V>) -> Self {
        self.row_indices = Some(row_indices);
        self
    }

    /// Write derived column offsets into `column_offsets`
    pub fn with_column_offsets(mut self, column_offsets: Array<R, E>) -> Self {
        self.column_offsets = Some(column_offsets);
        self
    }
}

/// Arrays produced by the pipeline, before they are grouped into records
struct Derived<R: Runtime, V: Index, E: Index, W: Element> {
    shape: [usize; 2],
    nnz: usize,
    row_offsets: Array<R, E>,
    column_indices: Array<R, V>,
    values: Array<R, W>,
    row_indices: Option<Array<R, V>>,
    column_offsets: Option<Array<R, E>>,
}

impl<R: Runtime, V: Index, E: Index, W: Element> Derived<R, V, E, W> {
    fn csr(&self) -> Result<CsrData<R, V, E, W>> {
        traced(CsrData::new(
            self.row_offsets.clone(),
            self.column_indices.clone(),
            self.values.clone(),
            self.shape,
        ))
    }

    fn csc(&self) -> Result<CscData<R, V, E, W>> {
        traced(CscData::new(
            take_derived("column_offsets", &self.column_offsets)?,
            take_derived("row_indices", &self.row_indices)?,
            self.values.clone(),
            self.shape,
        ))
    }

    fn coo(&self) -> Result<CooData<R, V, W>> {
        traced(CooData::new(
            take_derived("row_indices", &self.row_indices)?,
            self.column_indices.clone(),
            self.values.clone(),
            self.shape,
        ))
    }
}

fn traced<T: SparseStorage>(record: Result<T>) -> Result<T> {
    record.inspect(|record| {
        trace!(
            format = %record.format(),
            edges = record.number_of_edges(),
            bytes = record.memory_usage(),
            "assembled view"
        );
    })
}

fn take_derived<A: Clone>(name: &str, array: &Option<A>) -> Result<A> {
    array
        .clone()
        .ok_or_else(|| Error::Internal(format!("{name} was not derived for the requested views")))
}

fn assemble<S, R, V, E, W>(derived: &Derived<R, V, E, W>) -> Result<Graph<R, V, E, W, S>>
where
    S: ViewSet,
    R: Runtime,
    V: Index,
    E: Index,
    W: Element,
{
    Ok(Graph {
        shape: derived.shape,
        nnz: derived.nnz,
        csr: <S::Csr as Toggle>::materialize(|| derived.csr())?,
        csc: <S::Csc as Toggle>::materialize(|| derived.csc())?,
        coo: <S::Coo as Toggle>::materialize(|| derived.coo())?,
        _views: PhantomData,
    })
}

fn validate_views(views: ViewFlags) -> Result<()> {
    views.validate().inspect_err(|err| {
        warn!(%views, error = %err, "rejecting graph build");
    })
}

#[allow(clippy::too_many_arguments)]
fn run_pipeline<R, V, E, W, C>(
    client: &C,
    views: ViewFlags,
    rows: usize,
    columns: usize,
    nnz: usize,
    row_offsets: Array<R, E>,
    mut column_indices: Array<R, V>,
    mut values: Array<R, W>,
    scratch: BuildScratch<R, V, E>,
) -> Result<Derived<R, V, E, W>>
where
    R: Runtime,
    V: Index,
    E: Index,
    W: Element,
    C: ConvertOps<R>,
{
    validate_views(views)?;

    debug!(
        %views,
        rows,
        columns,
        nnz,
        memory_space = %R::memory_space(),
        "building graph from CSR input"
    );

    check_len(&row_offsets, rows + 1)?;
    check_len(&column_indices, nnz)?;
    check_len(&values, nnz)?;
    if let Some(row_indices) = &scratch.row_indices {
        check_len(row_indices, nnz)?;
    }
    if let Some(column_offsets) = &scratch.column_offsets {
        check_len(column_offsets, columns + 1)?;
    }

    let derive_rows = views.has(ViewFlags::CSC) || views.has(ViewFlags::COO);
    let derive_columns = views.has(ViewFlags::CSC);

    if derive_columns {
        ensure_exclusive("column_indices", &column_indices)?;
        ensure_exclusive("values", &values)?;
        ensure_disjoint("column_indices", &row_offsets, &column_indices)?;
        ensure_disjoint("values", &row_offsets, &values)?;
        ensure_disjoint("values", &column_indices, &values)?;
    }
    if let (true, Some(out)) = (derive_rows, &scratch.row_indices) {
        ensure_exclusive("row_indices", out)?;
        ensure_disjoint("row_indices", &row_offsets, out)?;
        ensure_disjoint("row_indices", &column_indices, out)?;
        ensure_disjoint("row_indices", &values, out)?;
    }
    if let (true, Some(out)) = (derive_columns, &scratch.column_offsets) {
        ensure_exclusive("column_offsets", out)?;
        ensure_disjoint("column_offsets", &row_offsets, out)?;
        ensure_disjoint("column_offsets", &column_indices, out)?;
        ensure_disjoint("column_offsets", &values, out)?;
        if let Some(row_indices) = &scratch.row_indices {
            ensure_disjoint("column_offsets", row_indices, out)?;
        }
    }

    let device = client.device();
    let mut row_indices = None;
    let mut column_offsets = None;

    if derive_rows {
        trace!(nnz, "deriving row indices from row offsets");
        let mut out = match scratch.row_indices {
            Some(array) => array,
            None => Array::zeros(nnz, device)?,
        };
        client.offsets_to_indices(&row_offsets, rows + 1, &mut out, nnz)?;
        row_indices = Some(out);
    }

    if derive_columns {
        let rows_out = row_indices
            .as_mut()
            .ok_or_else(|| Error::Internal("row_indices was not derived".to_string()))?;

        trace!(nnz, "sorting edges by column");
        client.sort_by_key(&mut column_indices, rows_out, &mut values, nnz)?;

        trace!(columns, "compressing column indices");
        let mut out = match scratch.column_offsets {
            Some(array) => array,
            None => Array::zeros(columns + 1, device)?,
        };
        client.indices_to_offsets(&column_indices, nnz, &mut out, columns + 1)?;
        column_offsets = Some(out);
    }

    client.synchronize();

    Ok(Derived {
        shape: [rows, columns],
        nnz,
        row_offsets,
        column_indices,
        values,
        row_indices,
        column_offsets,
    })
}

/// Build a graph exposing the view set `S` from CSR-shaped input
///
/// `row_offsets` must hold `rows + 1` entries and `column_indices` and
/// `values` must hold `nnz`. The CSR view wraps the input arrays. A CSC view
/// reorders `column_indices` and `values` in place, so for CSC they must not
/// have live clones. Scratch buffers are written in place and must not have
/// live clones either.
///
/// Offsets are assumed monotone with `row_offsets[rows] == nnz`; malformed
/// offsets give unspecified derived arrays rather than an error.
///
/// A view set that is empty or holds both CSR and CSC does not compile:
///
/// ```compile_fail
/// # use sparsegraph::prelude::*;
/// # let device = CpuDevice::new();
/// # let client = CpuRuntime::default_client(&device);
/// let graph = from_csr::<Views<On, On, Off>, CpuRuntime, u32, u32, f32, _>(
///     &client,
///     1,
///     1,
///     0,
///     Array::zeros(2, &device)?,
///     Array::zeros(0, &device)?,
///     Array::zeros(0, &device)?,
///     BuildScratch::new(),
/// )?;
/// # Ok::<(), sparsegraph::error::Error>(())
/// ```
///
/// Use [`from_csr_dyn`] to choose views at runtime.
///
/// # Errors
///
/// - `ShapeMismatch` if an input or scratch array has the wrong length
/// - `InvalidArgument` if an array the build writes is shared with a live
///   clone or overlaps another input
/// - allocation and backend errors from the client
///
/// All of these are reported before any array is written.
///
/// # Example
///
/// ```
/// # use sparsegraph::prelude::*;
/// # let device = CpuDevice::new();
/// # let client = CpuRuntime::default_client(&device);
/// let graph = from_csr::<CooView, CpuRuntime, u32, u32, f32, _>(
///     &client,
///     4,
///     4,
///     5,
///     Array::from_slice(&[0, 2, 2, 3, 5], &device)?,
///     Array::from_slice(&[1, 3, 0, 2, 3], &device)?,
///     Array::from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0], &device)?,
///     BuildScratch::new(),
/// )?;
/// assert_eq!(graph.coo().row_indices().to_vec()?, vec![0, 0, 2, 3, 3]);
/// # Ok::<(), sparsegraph::error::Error>(())
/// ```
#[allow(clippy::too_many_arguments)]
pub fn from_csr<S, R, V, E, W, C>(
    client: &C,
    rows: usize,
    columns: usize,
    nnz: usize,
    row_offsets: Array<R, E>,
    column_indices: Array<R, V>,
    values: Array<R, W>,
    scratch: BuildScratch<R, V, E>,
) -> Result<Graph<R, V, E, W, S>>
where
    S: ViewSet,
    R: Runtime,
    V: Index,
    E: Index,
    W: Element,
    C: ConvertOps<R>,
{
    const {
        assert!(
            S::FLAGS.is_valid(),
            "a graph view set must be non-empty and cannot hold both CSR and CSC"
        )
    };

    let derived = run_pipeline(
        client,
        S::FLAGS,
        rows,
        columns,
        nnz,
        row_offsets,
        column_indices,
        values,
        scratch,
    )?;

    assemble(&derived)
}

/// Build a graph exposing the view set `S` from a CSR record
pub fn from_csr_data<S, R, V, E, W, C>(
    client: &C,
    csr: CsrData<R, V, E, W>,
    scratch: BuildScratch<R, V, E>,
) -> Result<Graph<R, V, E, W, S>>
where
    S: ViewSet,
    R: Runtime,
    V: Index,
    E: Index,
    W: Element,
    C: ConvertOps<R>,
{
    let [rows, columns] = csr.shape;
    let nnz = csr.values.len();
    let (row_offsets, column_indices, values) = csr.into_parts();
    from_csr(
        client,
        rows,
        columns,
        nnz,
        row_offsets,
        column_indices,
        values,
        scratch,
    )
}

/// Build a graph whose view set is chosen at runtime
///
/// Same pipeline and errors as [`from_csr`]; `views` selects one of the five
/// valid view sets. An empty set or one holding both CSR and CSC returns
/// `UnsupportedConfiguration` before any array is touched.
#[allow(clippy::too_many_arguments)]
pub fn from_csr_dyn<R, V, E, W, C>(
    client: &C,
    views: ViewFlags,
    rows: usize,
    columns: usize,
    nnz: usize,
    row_offsets: Array<R, E>,
    column_indices: Array<R, V>,
    values: Array<R, W>,
    scratch: BuildScratch<R, V, E>,
) -> Result<DynGraph<R, V, E, W>>
where
    R: Runtime,
    V: Index,
    E: Index,
    W: Element,
    C: ConvertOps<R>,
{
    let derived = run_pipeline(
        client,
        views,
        rows,
        columns,
        nnz,
        row_offsets,
        column_indices,
        values,
        scratch,
    )?;

    Ok(match views {
        v if v == ViewFlags::CSR => DynGraph::Csr(assemble(&derived)?),
        v if v == ViewFlags::CSC => DynGraph::Csc(assemble(&derived)?),
        v if v == ViewFlags::COO => DynGraph::Coo(assemble(&derived)?),
        v if v == ViewFlags::CSR | ViewFlags::COO => DynGraph::CsrCoo(assemble(&derived)?),
        v if v == ViewFlags::CSC | ViewFlags::COO => DynGraph::CscCoo(assemble(&derived)?),
        // run_pipeline already rejected everything else
        v => return Err(Error::unsupported_views(v, "unknown view combination")),
    })
}

/// Fluent front end over [`from_csr`] and [`from_csr_dyn`]
///
/// ```
/// # use sparsegraph::prelude::*;
/// # let device = CpuDevice::new();
/// # let client = CpuRuntime::default_client(&device);
/// let csr = CsrData::<CpuRuntime, u32, u32, f32>::new(
///     Array::from_slice(&[0, 1, 2], &device)?,
///     Array::from_slice(&[1, 0], &device)?,
///     Array::from_slice(&[1.0, 1.0], &device)?,
///     [2, 2],
/// )?;
/// let graph = GraphBuilder::new(&client, csr).build::<CscView>()?;
/// assert_eq!(graph.column_offsets().to_vec()?, vec![0, 1, 2]);
/// # Ok::<(), sparsegraph::error::Error>(())
/// ```
pub struct GraphBuilder<'c, R: Runtime, V: Index, E: Index, W: Element, C: ConvertOps<R>> {
    client: &'c C,
    csr: CsrData<R, V, E, W>,
    scratch: BuildScratch<R, V, E>,
}

impl<'c, R, V, E, W, C> GraphBuilder<'c, R, V, E, W, C>
where
    R: Runtime,
    V: Index,
    E: Index,
    W: Element,
    C: ConvertOps<R>,
{
    /// Start a build from a CSR record
    pub fn new(client: &'c C, csr: CsrData<R, V, E, W>) -> Self {
        Self {
            client,
            csr,
            scratch: BuildScratch::default(),
        }
    }

    /// Reuse `row_indices` for the derived row indices
    pub fn row_indices(mut self, row_indices: Array<R, V>) -> Self {
        self.scratch.row_indices = Some(row_indices);
        self
    }

    /// Reuse `column_offsets` for the derived column offsets
    pub fn column_offsets(mut self, column_offsets: Array<R, E>) -> Self {
        self.scratch.column_offsets = Some(column_offsets);
        self
    }

    /// Build with a compile-time view set
    pub fn build<S: ViewSet>(self) -> Result<Graph<R, V, E, W, S>> {
        from_csr_data(self.client, self.csr, self.scratch)
    }

    /// Build with a runtime view set
    pub fn build_dyn(self, views: ViewFlags) -> Result<DynGraph<R, V, E, W>> {
        let [rows, columns] = self.csr.shape;
        let nnz = self.csr.values.len();
        let (row_offsets, column_indices, values) = self.csr.into_parts();
        from_csr_dyn(
            self.client,
            views,
            rows,
            columns,
            nnz,
            row_offsets,
            column_indices,
            values,
            self.scratch,
        )
    }
}
