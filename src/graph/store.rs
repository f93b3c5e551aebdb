use super::edge::FlowEdge;
use super::node::FlowNode;
use ahash::AHashSet;
use serde::{Deserialize, Serialize};

/// A set of nodes and edges produced by expansion or extracted as a
/// connected-flow slice.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphFragment {
    pub nodes: Vec<FlowNode>,
    pub edges: Vec<FlowEdge>,
}

impl GraphFragment {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }
}

/// The in-memory graph model behind the canvas.
///
/// Conversions read a single consistent snapshot through this accessor
/// surface; they never observe a graph mutated mid-traversal.
#[derive(Debug, Clone, Default)]
pub struct GraphStore {
    nodes: Vec<FlowNode>,
    edges: Vec<FlowEdge>,
}

impl GraphStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_parts(nodes: Vec<FlowNode>, edges: Vec<FlowEdge>) -> Self {
        Self { nodes, edges }
    }

    pub fn list_nodes(&self) -> &[FlowNode] {
        &self.nodes
    }

    pub fn list_edges(&self) -> &[FlowEdge] {
        &self.edges
    }

    pub fn find_node(&self, id: &str) -> Option<&FlowNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn add_nodes(&mut self, nodes: impl IntoIterator<Item = FlowNode>) {
        self.nodes.extend(nodes);
    }

    pub fn add_edges(&mut self, edges: impl IntoIterator<Item = FlowEdge>) {
        self.edges.extend(edges);
    }

    /// Adds an expanded fragment (import path) to the graph.
    pub fn apply(&mut self, fragment: GraphFragment) {
        self.add_nodes(fragment.nodes);
        self.add_edges(fragment.edges);
    }

    pub fn remove_edges<'a>(&mut self, ids: impl IntoIterator<Item = &'a str>) {
        let doomed: AHashSet<&str> = ids.into_iter().collect();
        self.edges.retain(|e| !doomed.contains(e.id.as_str()));
    }

    /// Mutates a node in place (payload edits, position updates). Returns
    /// false when the id is unknown.
    pub fn update_node(&mut self, id: &str, update: impl FnOnce(&mut FlowNode)) -> bool {
        match self.nodes.iter_mut().find(|n| n.id == id) {
            Some(node) => {
                update(node);
                true
            }
            None => false,
        }
    }

    /// Outgoing edges of a node whose targets actually exist. Dangling edges
    /// never take part in traversal.
    pub fn outgoing_edges(&self, id: &str) -> impl Iterator<Item = &FlowEdge> {
        self.edges
            .iter()
            .filter(move |e| e.source == id && self.find_node(&e.target).is_some())
    }

    /// Edges whose endpoints both resolve to existing nodes.
    pub fn live_edges(&self) -> impl Iterator<Item = &FlowEdge> {
        self.edges
            .iter()
            .filter(|e| self.find_node(&e.source).is_some() && self.find_node(&e.target).is_some())
    }
}
