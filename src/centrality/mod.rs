//! Vertex centrality measures.

pub mod katz;
