//! DOT export for external diagram renderers.
//!
//! Builds a directed petgraph view of the model and formats it as Graphviz
//! DOT text. Layout and rasterization stay outside the core.

use std::collections::HashMap;

use fd_graph::GraphModel;
use petgraph::dot::{Config, Dot};
use petgraph::graph::{DiGraph, NodeIndex};

/// Render the model as DOT text.
///
/// Declared components are labelled `name [type]`; an endpoint that was
/// never declared still gets a bare node so every edge can be drawn.
pub fn to_dot(model: &GraphModel) -> String {
    let mut graph: DiGraph<String, &str> = DiGraph::new();
    let mut indices: HashMap<&str, NodeIndex> = HashMap::new();

    for comp in model.components() {
        let idx = graph.add_node(format!("{} [{}]", comp.name, comp.ctype));
        indices.insert(comp.name.as_str(), idx);
    }

    for edge in model.edges() {
        let src = *indices
            .entry(edge.source.as_str())
            .or_insert_with(|| graph.add_node(edge.source.clone()));
        let dst = *indices
            .entry(edge.target.as_str())
            .or_insert_with(|| graph.add_node(edge.target.clone()));
        graph.add_edge(src, dst, "");
    }

    format!("{}", Dot::with_config(&graph, &[Config::EdgeNoLabel]))
}
