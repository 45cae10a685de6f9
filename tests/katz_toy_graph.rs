use std::path::Path;

use katz_centrality::{
    katz_centrality, ComputeContext, ContextConfig, EdgeList, Graph, GraphBuildOptions, GraphProperties,
    KatzConfig, KatzError, VertexId,
};

const EXPECTED: [f32; 6] = [0.410_614, 0.403_211, 0.390_689, 0.415_175, 0.395_125, 0.433_226];

/// Reads a space-delimited `src dst weight` file.
fn load_edges(path: &Path) -> (Vec<VertexId>, Vec<VertexId>, Vec<f32>) {
    let text = std::fs::read_to_string(path).unwrap();
    let mut src = Vec::new();
    let mut dst = Vec::new();
    let mut wgt = Vec::new();
    for line in text.lines().filter(|l| !l.trim().is_empty()) {
        let mut fields = line.split_whitespace();
        src.push(fields.next().unwrap().parse().unwrap());
        dst.push(fields.next().unwrap().parse().unwrap());
        wgt.push(fields.next().unwrap().parse().unwrap());
    }
    (src, dst, wgt)
}

fn toy_edges() -> (Vec<VertexId>, Vec<VertexId>, Vec<f32>) {
    load_edges(&Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data/toy_graph.csv"))
}

fn config() -> KatzConfig<f32> {
    KatzConfig::new(0.01, 1.0)
        .with_epsilon(1e-6)
        .with_max_iterations(1000)
}

fn assert_matches_reference(vertices: &[VertexId], centralities: &[f32], expected_of: impl Fn(VertexId) -> f32) {
    assert_eq!(vertices.len(), 6);
    for (idx, (&vertex, &actual)) in vertices.iter().zip(centralities).enumerate() {
        let expected = expected_of(vertex);
        assert!(
            (actual - expected).abs() <= 1e-4 * expected,
            "vertex {idx} has centrality {actual}, should have been {expected}"
        );
    }
}

#[test]
fn katz_toy_graph() {
    let (src, dst, wgt) = toy_edges();
    let options = GraphBuildOptions::transposed()
        .with_properties(GraphProperties::default())
        .with_expensive_check(true);
    let graph = Graph::from_edge_list(&EdgeList::new(&src, &dst, &wgt), 6, 8, &options).unwrap();

    let ctx = ComputeContext::new(&ContextConfig::default()).unwrap();
    let result = katz_centrality(&ctx, &graph, &config()).unwrap();
    assert!(result.converged());

    let (vertices, centralities) = result.into_parts();
    assert_matches_reference(&vertices, &centralities, |v| EXPECTED[usize::try_from(v).unwrap()]);
}

#[test]
fn katz_toy_graph_renumbered() {
    let (src, dst, wgt) = toy_edges();
    let relabel = |v: VertexId| 1_000 - 37 * v;
    let src: Vec<VertexId> = src.into_iter().map(relabel).collect();
    let dst: Vec<VertexId> = dst.into_iter().map(relabel).collect();

    let options = GraphBuildOptions::transposed().with_renumber(true);
    let graph = Graph::from_edge_list(&EdgeList::new(&src, &dst, &wgt), 6, 8, &options).unwrap();
    let result = katz_centrality(&ComputeContext::sequential(), &graph, &config()).unwrap();

    let mut seen: Vec<VertexId> = result.vertices().to_vec();
    seen.sort_unstable();
    let mut labels: Vec<VertexId> = (0..6).map(relabel).collect();
    labels.sort_unstable();
    assert_eq!(seen, labels);

    assert_matches_reference(result.vertices(), result.centralities(), |v| {
        EXPECTED[usize::try_from((1_000 - v) / 37).unwrap()]
    });
}

#[test]
fn katz_toy_graph_requires_transposed_storage() {
    let (src, dst, wgt) = toy_edges();
    let graph = Graph::from_edge_list(&EdgeList::new(&src, &dst, &wgt), 6, 8, &GraphBuildOptions::default()).unwrap();
    let err = katz_centrality(&ComputeContext::sequential(), &graph, &config()).unwrap_err();
    assert_eq!(err, KatzError::UnsupportedOrientation);
}

#[test]
fn katz_toy_graph_malformed_input() {
    let (src, dst, wgt) = toy_edges();
    let err = Graph::from_edge_list(
        &EdgeList::new(&src, &dst[..7], &wgt),
        6,
        8,
        &GraphBuildOptions::transposed(),
    )
    .unwrap_err();
    assert!(matches!(err, KatzError::InvalidGraphInput(_)));
}

#[test]
fn katz_config_from_json() {
    let json = r#"{
        "alpha": 0.01,
        "beta": 1.0,
        "epsilon": 1e-6,
        "max_iterations": 1000,
        "normalization": "unit_l2"
    }"#;
    let config: KatzConfig<f32> = serde_json::from_str(json).unwrap();
    assert_eq!(config.max_iterations, 1000);
    assert!(config.betas.is_none());
    assert!(!config.strict_convergence);

    let (src, dst, wgt) = toy_edges();
    let graph = Graph::from_edge_list(&EdgeList::new(&src, &dst, &wgt), 6, 8, &GraphBuildOptions::transposed()).unwrap();
    let result = katz_centrality(&ComputeContext::sequential(), &graph, &config).unwrap();
    assert_matches_reference(result.vertices(), result.centralities(), |v| EXPECTED[usize::try_from(v).unwrap()]);

    let encoded = serde_json::to_value(&result).unwrap();
    assert_eq!(encoded["status"], "converged");
    assert_eq!(encoded["vertices"].as_array().unwrap().len(), 6);
}
