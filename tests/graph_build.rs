//! Integration tests for the multi-view graph builder

mod common;

use common::{
    create_cpu_client, create_parallel_client, create_serial_client, csc_edges, csr_edges, host,
    random_csr, read, rng,
};
use sparsegraph::prelude::*;

const ROW_OFFSETS: [u32; 5] = [0, 2, 2, 3, 5];
const COLUMN_INDICES: [u32; 5] = [1, 3, 0, 2, 3];
const VALUES: [f32; 5] = [1.0, 2.0, 3.0, 4.0, 5.0];

fn sample_csr(device: &CpuDevice) -> CsrData<CpuRuntime, u32, u32, f32> {
    CsrData::new(
        host(&ROW_OFFSETS, device),
        host(&COLUMN_INDICES, device),
        host(&VALUES, device),
        [4, 4],
    )
    .unwrap()
}

#[test]
fn test_csr_view_returns_input_unchanged() {
    let (client, device) = create_cpu_client();
    let graph = GraphBuilder::new(&client, sample_csr(&device))
        .build::<CsrView>()
        .unwrap();

    assert_eq!(read(graph.row_offsets()), ROW_OFFSETS);
    assert_eq!(read(graph.csr().column_indices()), COLUMN_INDICES);
    assert_eq!(read(graph.csr().values()), VALUES);
    assert_eq!(graph.number_of_vertices(), 4);
    assert_eq!(graph.number_of_edges(), 5);
    assert_eq!(graph.views(), ViewFlags::CSR);
}

#[test]
fn test_coo_view_row_indices() {
    let (client, device) = create_cpu_client();
    let graph = GraphBuilder::new(&client, sample_csr(&device))
        .build::<CooView>()
        .unwrap();

    assert_eq!(read(graph.coo().row_indices()), vec![0, 0, 2, 3, 3]);
    assert_eq!(read(graph.coo().column_indices()), COLUMN_INDICES);
    assert_eq!(read(graph.coo().values()), VALUES);
}

#[test]
fn test_csc_view_preserves_edges() {
    let (client, device) = create_cpu_client();
    let graph = GraphBuilder::new(&client, sample_csr(&device))
        .build::<CscView>()
        .unwrap();

    let column_offsets = read(graph.column_offsets());
    assert_eq!(column_offsets.len(), 5);
    assert_eq!(column_offsets[0], 0);
    assert_eq!(*column_offsets.last().unwrap(), 5);
    assert!(column_offsets.windows(2).all(|w| w[0] <= w[1]));

    let csc = graph.csc();
    assert_eq!(
        csc_edges(&column_offsets, &read(csc.row_indices()), &read(csc.values())),
        csr_edges(&ROW_OFFSETS, &COLUMN_INDICES, &VALUES)
    );

    let (rows, _) = csc.column(3).unwrap();
    assert_eq!(rows, &[0, 3]);
}

#[test]
fn test_csr_coo_share_arrays() {
    let (client, device) = create_cpu_client();
    let graph = GraphBuilder::new(&client, sample_csr(&device))
        .build::<CsrCooViews>()
        .unwrap();

    assert_eq!(read(graph.coo().row_indices()), vec![0, 0, 2, 3, 3]);
    assert_eq!(graph.csr().values().ptr(), graph.coo().values().ptr());
    // CSR: 5 offsets + 5 columns + 5 values; COO: 3 x 5 entries.
    assert_eq!(graph.memory_usage(), 15 * 4 + 15 * 4);
    assert_eq!(graph.coo().format(), SparseFormat::Coo);
    assert_eq!(graph.coo().average_degree(), 1.25);
    assert_eq!(read(graph.csr().column_indices()), COLUMN_INDICES);
}

#[test]
fn test_csr_and_csc_rejected() {
    let (client, device) = create_cpu_client();
    let csr = sample_csr(&device);
    let (column_indices, values) = (csr.column_indices().clone(), csr.values().clone());

    let err = GraphBuilder::new(&client, csr)
        .build_dyn(ViewFlags::CSR | ViewFlags::CSC)
        .unwrap_err();

    match err {
        Error::UnsupportedConfiguration { views, .. } => {
            assert_eq!(views, ViewFlags::CSR | ViewFlags::CSC)
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(read(&column_indices), COLUMN_INDICES);
    assert_eq!(read(&values), VALUES);

    let err = GraphBuilder::new(&client, sample_csr(&device))
        .build_dyn(ViewFlags::CSR | ViewFlags::CSC | ViewFlags::COO)
        .unwrap_err();
    assert!(matches!(err, Error::UnsupportedConfiguration { .. }));
}

#[test]
fn test_empty_view_set_rejected() {
    let (client, device) = create_cpu_client();
    let err = GraphBuilder::new(&client, sample_csr(&device))
        .build_dyn(ViewFlags::NONE)
        .unwrap_err();
    assert!(matches!(err, Error::UnsupportedConfiguration { .. }));
}

#[test]
fn test_build_is_idempotent() {
    let (client, device) = create_cpu_client();
    let first = GraphBuilder::new(&client, sample_csr(&device))
        .build::<CscCooViews>()
        .unwrap();
    let second = GraphBuilder::new(&client, sample_csr(&device))
        .build::<CscCooViews>()
        .unwrap();

    assert_eq!(read(first.column_offsets()), read(second.column_offsets()));
    assert_eq!(read(first.csc().row_indices()), read(second.csc().row_indices()));
    assert_eq!(
        read(first.csc().values())
            .iter()
            .map(|v| v.to_bits())
            .collect::<Vec<_>>(),
        read(second.csc().values())
            .iter()
            .map(|v| v.to_bits())
            .collect::<Vec<_>>()
    );
    assert_eq!(read(first.coo().column_indices()), read(second.coo().column_indices()));
}

#[test]
fn test_caller_scratch_reused() {
    let (client, device) = create_cpu_client();
    let row_indices = Array::<CpuRuntime, u32>::zeros(5, &device).unwrap();
    let column_offsets = Array::<CpuRuntime, u32>::zeros(5, &device).unwrap();
    let (row_ptr, column_ptr) = (row_indices.ptr(), column_offsets.ptr());

    let graph = GraphBuilder::new(&client, sample_csr(&device))
        .row_indices(row_indices)
        .column_offsets(column_offsets)
        .build::<CscView>()
        .unwrap();

    assert_eq!(graph.column_offsets().ptr(), column_ptr);
    assert_eq!(graph.csc().row_indices().ptr(), row_ptr);
    assert_eq!(read(graph.column_offsets()), vec![0, 1, 2, 3, 5]);
    assert_eq!(read(graph.csc().row_indices()), vec![2, 0, 3, 0, 3]);
}

#[test]
fn test_shared_scratch_rejected() {
    let (client, device) = create_cpu_client();
    let row_indices = host(&[7u32; 5], &device);

    let err = GraphBuilder::new(&client, sample_csr(&device))
        .row_indices(row_indices.clone())
        .build::<CscCooViews>()
        .unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { .. }));
    assert_eq!(read(&row_indices), vec![7; 5]);
}

#[test]
fn test_built_graph_arrays_are_read_only() {
    let (client, device) = create_cpu_client();
    let graph = GraphBuilder::new(&client, sample_csr(&device))
        .build::<CscCooViews>()
        .unwrap();
    let values = graph.csc().values().as_slice();

    let mut handle = graph.csc().values().clone();
    let err = client.fill(&mut handle, 0.0).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { .. }));

    let mut offsets = graph.column_offsets().clone();
    let indices = host(&[0u32, 0, 1, 1], &device);
    let err = client
        .indices_to_offsets(&indices, 4, &mut offsets, 5)
        .unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { .. }));

    assert_eq!(values, &[3.0, 1.0, 4.0, 2.0, 5.0]);
    assert_eq!(read(graph.column_offsets()), vec![0, 1, 2, 3, 5]);
}

#[test]
fn test_rectangular_csc() {
    // 2 x 5: column offsets follow the column count.
    let (client, device) = create_cpu_client();
    let graph = from_csr::<CscView, CpuRuntime, u32, u64, f64, _>(
        &client,
        2,
        5,
        3,
        host(&[0u64, 2, 3], &device),
        host(&[4u32, 1, 4], &device),
        host(&[1.0f64, 2.0, 3.0], &device),
        BuildScratch::new(),
    )
    .unwrap();

    assert_eq!(read(graph.column_offsets()), vec![0, 0, 1, 1, 1, 3]);
    assert_eq!(read(graph.csc().row_indices()), vec![0, 0, 1]);
    assert_eq!(read(graph.csc().values()), vec![2.0, 1.0, 3.0]);
}

#[test]
fn test_dyn_graph_matches_static() {
    let (client, device) = create_cpu_client();
    let dynamic = GraphBuilder::new(&client, sample_csr(&device))
        .build_dyn(ViewFlags::CSC | ViewFlags::COO)
        .unwrap();
    let fixed = GraphBuilder::new(&client, sample_csr(&device))
        .build::<CscCooViews>()
        .unwrap();

    assert!(matches!(dynamic, DynGraph::CscCoo(_)));
    assert!(dynamic.csr().is_none());
    let csc = dynamic.csc().unwrap();
    assert_eq!(read(csc.column_offsets()), read(fixed.column_offsets()));
    assert_eq!(read(dynamic.coo().unwrap().row_indices()), read(fixed.coo().row_indices()));
    assert_eq!(dynamic.memory_space(), MemorySpace::Host);
}

#[test]
fn test_random_graphs_serial_parallel() {
    let (serial, device) = create_serial_client();
    let (parallel, _) = create_parallel_client(5);
    let mut rng = rng(42);

    for _ in 0..8 {
        let (row_offsets, column_indices, values) = random_csr(&mut rng, 60, 60);
        let nnz = values.len();
        let expected = csr_edges(&row_offsets, &column_indices, &values);

        let mut results = Vec::new();
        for client in [&serial, &parallel] {
            let graph = from_csr::<CscCooViews, CpuRuntime, u32, u32, f32, _>(
                client,
                60,
                60,
                nnz,
                host(&row_offsets, &device),
                host(&column_indices, &device),
                host(&values, &device),
                BuildScratch::new(),
            )
            .unwrap();

            let csc = graph.csc();
            let column_offsets = read(csc.column_offsets());
            assert_eq!(
                csc_edges(&column_offsets, &read(csc.row_indices()), &read(csc.values())),
                expected
            );
            results.push((column_offsets, read(csc.row_indices())));
        }
        assert_eq!(results[0], results[1]);
    }
}
