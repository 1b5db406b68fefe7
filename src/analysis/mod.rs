//! Graph algorithms over the declared dependencies.
pub mod graph;
pub mod topology;

pub use graph::{dependency_graph, to_dot};
