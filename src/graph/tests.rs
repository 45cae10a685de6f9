//! Tests for graph construction.

use super::*;

fn build(
    src: &[VertexId],
    dst: &[VertexId],
    w: &[f64],
    n: usize,
    options: &GraphBuildOptions,
) -> Result<Graph<f64>> {
    Graph::from_edge_list(&EdgeList::new(src, dst, w), n, src.len(), options)
}

#[test]
fn transposed_graph_exposes_incoming_edges() {
    // 0->1, 0->2, 1->2
    let g = build(&[0, 0, 1], &[1, 2, 2], &[1.0, 2.0, 3.0], 3, &GraphBuildOptions::transposed()).unwrap();

    assert_eq!(g.orientation(), Orientation::Incoming);
    let incoming = g.incoming().unwrap();
    assert_eq!(incoming.neighbors(2).collect::<Vec<_>>(), vec![(0, 2.0), (1, 3.0)]);

    assert_eq!(g.in_degree(2), 2);
    assert_eq!(g.out_degree(0), 2);
    assert_eq!(g.out_degree(2), 0);
}

#[test]
fn untransposed_graph_rejects_incoming_view() {
    let g = build(&[0, 1], &[1, 2], &[1.0, 1.0], 3, &GraphBuildOptions::default()).unwrap();

    assert_eq!(g.orientation(), Orientation::Outgoing);
    assert_eq!(g.incoming().unwrap_err(), KatzError::UnsupportedOrientation);
    // Degrees still O(1) both ways.
    assert_eq!(g.in_degree(1), 1);
    assert_eq!(g.out_degree(1), 1);
    assert_eq!(g.in_degree(0), 0);
}

#[test]
fn mismatched_lengths_are_invalid() {
    let src = [0, 1, 2];
    let dst = [1, 2];
    let w = [1.0, 1.0, 1.0];
    let err = Graph::from_edge_list(&EdgeList::new(&src, &dst, &w), 3, 3, &GraphBuildOptions::transposed())
        .unwrap_err();
    assert!(matches!(err, KatzError::InvalidGraphInput(_)));

    let err = build(&[0, 1], &[1, 2], &[1.0], 3, &GraphBuildOptions::transposed()).unwrap_err();
    assert!(matches!(err, KatzError::InvalidGraphInput(_)));
}

#[test]
fn num_edges_must_match_arrays() {
    let err = Graph::from_edge_list(
        &EdgeList::new(&[0], &[1], &[1.0_f64]),
        2,
        2,
        &GraphBuildOptions::transposed(),
    )
    .unwrap_err();
    assert!(err.to_string().contains("num_edges"));
}

#[test]
fn out_of_range_and_negative_ids_are_invalid() {
    let err = build(&[0, 3], &[1, 0], &[1.0, 1.0], 3, &GraphBuildOptions::transposed()).unwrap_err();
    assert!(err.to_string().contains("src[1] = 3"));

    let err = build(&[0], &[-1], &[1.0], 3, &GraphBuildOptions::transposed()).unwrap_err();
    assert!(err.to_string().contains("dst[0] = -1"));
}

#[test]
fn non_finite_weights_are_invalid() {
    let err = build(&[0], &[1], &[f64::NAN], 2, &GraphBuildOptions::transposed()).unwrap_err();
    assert!(matches!(err, KatzError::InvalidGraphInput(_)));
}

#[test]
fn unweighted_edges_default_to_unit_weight() {
    let g: Graph<f32> = Graph::from_edge_list(
        &EdgeList::unweighted(&[0, 1], &[1, 0]),
        2,
        2,
        &GraphBuildOptions::transposed(),
    )
    .unwrap();
    assert_eq!(g.incoming().unwrap().neighbors(0).collect::<Vec<_>>(), vec![(1, 1.0)]);
}

#[test]
fn isolated_vertices_are_kept() {
    let g = build(&[0], &[1], &[1.0], 5, &GraphBuildOptions::transposed()).unwrap();
    assert_eq!(g.vertex_count(), 5);
    assert_eq!(g.in_degree(4), 0);
    assert!(g.contains_vertex(4));
    assert!(!g.contains_vertex(5));
    assert!(!g.contains_vertex(-1));
}

#[test]
fn renumbering_maps_sparse_ids() {
    let options = GraphBuildOptions::transposed().with_renumber(true);
    let g = build(&[1000, 20, 1000], &[20, -3, -3], &[1.0, 2.0, 3.0], 3, &options).unwrap();

    assert!(g.is_renumbered());
    assert_eq!(g.vertex_ids(), vec![1000, 20, -3]);
    assert_eq!(g.to_internal(-3), Some(2));
    assert_eq!(g.external_id(0), 1000);
    assert!(!g.contains_vertex(0));

    let into_minus_three = g.incoming().unwrap().neighbors(2).collect::<Vec<_>>();
    assert_eq!(into_minus_three, vec![(1, 2.0), (0, 3.0)]);
}

#[test]
fn renumbering_requires_matching_vertex_count() {
    let options = GraphBuildOptions::transposed().with_renumber(true);
    let err = build(&[7, 8], &[8, 9], &[1.0, 1.0], 4, &options).unwrap_err();
    assert!(err.to_string().contains("3 distinct vertices"));
}

#[test]
fn expensive_check_rejects_duplicates_unless_multigraph() {
    let checked = GraphBuildOptions::transposed().with_expensive_check(true);
    let err = build(&[0, 0], &[1, 1], &[1.0, 2.0], 2, &checked).unwrap_err();
    assert!(matches!(err, KatzError::InvalidGraphInput(_)));

    // Not checked: accepted as-is.
    assert!(build(&[0, 0], &[1, 1], &[1.0, 2.0], 2, &GraphBuildOptions::transposed()).is_ok());

    let multigraph = checked.with_properties(GraphProperties {
        is_multigraph: true,
        ..GraphProperties::default()
    });
    assert!(build(&[0, 0], &[1, 1], &[1.0, 2.0], 2, &multigraph).is_ok());
}

#[test]
fn expensive_check_validates_declared_symmetry() {
    let symmetric = GraphBuildOptions::transposed()
        .with_expensive_check(true)
        .with_properties(GraphProperties {
            is_symmetric: true,
            ..GraphProperties::default()
        });

    assert!(build(&[0, 1, 1], &[1, 0, 1], &[2.0, 2.0, 5.0], 2, &symmetric).is_ok());
    assert!(build(&[0], &[1], &[2.0], 2, &symmetric).is_err());
}

#[test]
fn build_options_deserialize_from_json() {
    let options: GraphBuildOptions =
        serde_json::from_str(r#"{"store_transposed": true, "properties": {"is_multigraph": true}}"#).unwrap();
    assert_eq!(options.orientation(), Orientation::Incoming);
    assert!(options.properties.is_multigraph);
    assert!(!options.properties.is_symmetric);
    assert!(!options.renumber);
}
