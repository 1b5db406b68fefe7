//! Export of the dependency structure as a `petgraph` graph, e.g. for DOT rendering.

use crate::store::{ConstantRegistry, EntryId, RegistryResult};
use petgraph::dot::{Config, Dot};
use petgraph::graph::{DiGraph, NodeIndex};

/// Builds a graph with one node per constant (declaration order) and an edge
/// `dependency -> dependent` for every declared dependency.
pub fn dependency_graph(registry: &ConstantRegistry) -> RegistryResult<DiGraph<String, ()>> {
    let links = registry.links()?;
    let mut graph = DiGraph::with_capacity(registry.len(), links.parents_flat.len());

    let nodes: Vec<NodeIndex> = registry.names().map(|name| graph.add_node(name.to_string())).collect();
    for (i, &node) in nodes.iter().enumerate() {
        for &parent in links.get_parents(EntryId::new(i)) {
            graph.update_edge(nodes[parent.index()], node, ());
        }
    }
    Ok(graph)
}

/// Graphviz DOT source for `graph`, without edge labels.
pub fn to_dot(graph: &DiGraph<String, ()>) -> String {
    // `Dot` needs a `Display` edge weight even when edge labels are off.
    let labelled = graph.map(|_, name| name.clone(), |_, _| "");
    format!("{}", Dot::with_config(&labelled, &[Config::EdgeNoLabel]))
}
