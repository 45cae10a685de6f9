//! Tests for compressed adjacency storage.

use super::*;

// 0->1 (0.5), 0->2 (1.5), 1->2 (2.0)
fn triangle(orientation: Orientation) -> CompressedAdjacency<f64> {
    let src = [0, 0, 1];
    let dst = [1, 2, 2];
    let w = [0.5, 1.5, 2.0];
    match orientation {
        Orientation::Incoming => CompressedAdjacency::build(3, &dst, &src, &w, orientation),
        Orientation::Outgoing => CompressedAdjacency::build(3, &src, &dst, &w, orientation),
    }
}

#[test]
fn incoming_rows_list_sources() {
    let csc = triangle(Orientation::Incoming);

    assert_eq!(csc.vertex_count(), 3);
    assert_eq!(csc.edge_count(), 3);

    assert_eq!(csc.neighbors(0).collect::<Vec<_>>(), Vec::<(usize, f64)>::new()); // no one points to 0
    assert_eq!(csc.neighbors(1).collect::<Vec<_>>(), vec![(0, 0.5)]);
    assert_eq!(csc.neighbors(2).collect::<Vec<_>>(), vec![(0, 1.5), (1, 2.0)]);
}

#[test]
fn outgoing_rows_list_targets() {
    let csr = triangle(Orientation::Outgoing);

    assert_eq!(csr.neighbors(0).collect::<Vec<_>>(), vec![(1, 0.5), (2, 1.5)]);
    assert_eq!(csr.neighbors(1).collect::<Vec<_>>(), vec![(2, 2.0)]);
    assert_eq!(csr.neighbors(2).len(), 0);
}

#[test]
fn degrees_in_both_directions() {
    let csc = triangle(Orientation::Incoming);

    // in-degrees
    assert_eq!(csc.degree(0), 0);
    assert_eq!(csc.degree(1), 1);
    assert_eq!(csc.degree(2), 2);
    // out-degrees
    assert_eq!(csc.cross_degree(0), 2);
    assert_eq!(csc.cross_degree(1), 1);
    assert_eq!(csc.cross_degree(2), 0);
}

#[test]
fn membership_and_edges() {
    let csc = triangle(Orientation::Incoming);

    assert!(csc.contains(2));
    assert!(!csc.contains(3));
    assert!(csc.has_edge(2, 1)); // 1->2 exists
    assert!(!csc.has_edge(1, 2)); // 2->1 doesn't
}

#[test]
fn offsets_are_prefix_sums() {
    let csc = triangle(Orientation::Incoming);
    let (offsets, indices, weights) = csc.parts();
    assert_eq!(offsets, &[0, 0, 1, 3]);
    assert_eq!(indices, &[0, 0, 1]);
    assert_eq!(weights, &[0.5, 1.5, 2.0]);
}

#[test]
fn placement_is_stable_in_input_order() {
    // Edges into 0 arrive as 3, 1, 2.
    let csc = CompressedAdjacency::build(4, &[0, 0, 0], &[3, 1, 2], &[1.0_f32, 2.0, 3.0], Orientation::Incoming);
    assert_eq!(csc.row(0).0, &[3, 1, 2]);
    assert_eq!(csc.row(0).1, &[1.0, 2.0, 3.0]);
}

#[test]
fn empty_graph() {
    let g: CompressedAdjacency<f64> = CompressedAdjacency::build(0, &[], &[], &[], Orientation::Incoming);
    assert_eq!(g.vertex_count(), 0);
    assert_eq!(g.edge_count(), 0);
    assert!(!g.contains(0));
}

#[test]
#[should_panic(expected = "out of bounds")]
fn degree_out_of_bounds_panics() {
    let csc = triangle(Orientation::Incoming);
    let _ = csc.degree(3);
}

#[test]
fn oversized_vertex_count_is_reported_not_aborted() {
    let n = usize::MAX / 4;
    let err = CompressedAdjacency::<f64>::try_build(n, &[], &[], &[], Orientation::Incoming);
    assert!(err.is_err());
}
