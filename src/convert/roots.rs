use crate::graph::{FlowNode, GraphFragment, GraphStore, NodeKind};
use ahash::AHashSet;
use itertools::Itertools;
use std::collections::VecDeque;

/// Orders nodes by root eligibility: opening brackets first, then closing
/// brackets, then conditions, ties broken lexically by id.
fn by_priority<'a>(nodes: impl IntoIterator<Item = &'a FlowNode>) -> Vec<&'a FlowNode> {
    nodes
        .into_iter()
        .sorted_by(|a, b| {
            a.kind
                .priority()
                .cmp(&b.kind.priority())
                .then_with(|| a.id.cmp(&b.id))
        })
        .collect()
}

/// Selects the traversal roots for a full-graph build.
///
/// Roots are nodes without incoming live edges, ordered by kind priority and
/// then id so the resulting tree is deterministic. Two degenerate shapes are
/// handled explicitly: a graph without any live edge treats every condition
/// node as its own one-element sequence, and a fully cyclic graph (every node
/// has an incoming edge) yields no roots at all.
pub fn select_roots(store: &GraphStore) -> Vec<String> {
    if store.live_edges().next().is_none() {
        return by_priority(store.list_nodes())
            .into_iter()
            .filter(|n| n.kind == NodeKind::Condition)
            .map(|n| n.id.clone())
            .collect();
    }

    let targets: AHashSet<&str> = store.live_edges().map(|e| e.target.as_str()).collect();
    by_priority(store.list_nodes())
        .into_iter()
        .filter(|n| !targets.contains(n.id.as_str()))
        .map(|n| n.id.clone())
        .collect()
}

/// Tracks the node the canvas currently treats as the entry point.
///
/// Selection is sticky: once a root is chosen it stays until it disappears
/// from the graph, at which point [`RootTracker::refresh`] re-elects one.
#[derive(Debug, Clone, Default)]
pub struct RootTracker {
    current: Option<String>,
}

impl RootTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn is_root(&self, node_id: &str) -> bool {
        self.current.as_deref() == Some(node_id)
    }

    pub fn set_root(&mut self, node_id: impl Into<String>) {
        self.current = Some(node_id.into());
    }

    /// Re-elects a root when none is set or the current one no longer exists.
    pub fn refresh(&mut self, store: &GraphStore) {
        let stale = match &self.current {
            Some(id) => store.find_node(id).is_none(),
            None => true,
        };
        if stale {
            self.auto_select(store);
        }
    }

    /// Elects a root from scratch.
    ///
    /// Nodes wired into the graph are preferred over floating ones; among
    /// them a node without incoming edges wins, otherwise the highest
    /// priority connected node stands in. An empty graph clears the root.
    pub fn auto_select(&mut self, store: &GraphStore) {
        let nodes = by_priority(store.list_nodes());
        if nodes.is_empty() {
            self.current = None;
            return;
        }
        if nodes.len() == 1 {
            self.current = Some(nodes[0].id.clone());
            return;
        }

        let wired: AHashSet<&str> = store
            .list_edges()
            .iter()
            .flat_map(|e| [e.source.as_str(), e.target.as_str()])
            .collect();
        let connected: Vec<&FlowNode> = nodes
            .iter()
            .copied()
            .filter(|n| wired.contains(n.id.as_str()))
            .collect();

        if let Some(first_connected) = connected.first() {
            let elected = connected
                .iter()
                .find(|n| !store.list_edges().iter().any(|e| e.target == n.id))
                .unwrap_or(first_connected);
            self.current = Some(elected.id.clone());
            return;
        }

        self.current = Some(nodes[0].id.clone());
    }

    pub fn root_node<'a>(&self, store: &'a GraphStore) -> Option<&'a FlowNode> {
        store.find_node(self.current.as_deref()?)
    }

    /// Extracts the slice of the graph reachable from the root, following
    /// edges in both directions. This is the subgraph a preview renders.
    pub fn connected_flow(&self, store: &GraphStore) -> GraphFragment {
        let Some(root) = self.root_node(store) else {
            return GraphFragment::default();
        };

        let mut visited: AHashSet<&str> = AHashSet::new();
        let mut edge_ids: AHashSet<&str> = AHashSet::new();
        let mut queue: VecDeque<&str> = VecDeque::from([root.id.as_str()]);

        while let Some(current) = queue.pop_front() {
            if !visited.insert(current) {
                continue;
            }
            for edge in store.list_edges() {
                if edge.source != current && edge.target != current {
                    continue;
                }
                edge_ids.insert(edge.id.as_str());
                let other = if edge.source == current {
                    edge.target.as_str()
                } else {
                    edge.source.as_str()
                };
                if !visited.contains(other) {
                    queue.push_back(other);
                }
            }
        }

        GraphFragment {
            nodes: store
                .list_nodes()
                .iter()
                .filter(|n| visited.contains(n.id.as_str()))
                .cloned()
                .collect(),
            edges: store
                .list_edges()
                .iter()
                .filter(|e| edge_ids.contains(e.id.as_str()))
                .cloned()
                .collect(),
        }
    }

    /// True when the root anchors at least one real connection, the minimum
    /// for a meaningful preview.
    pub fn has_valid_flow(&self, store: &GraphStore) -> bool {
        let flow = self.connected_flow(store);
        flow.nodes.len() >= 2 && !flow.edges.is_empty()
    }
}

/// Repositions a node 150 canvas units above the current topmost node, the
/// conventional spot for a flow's entry point.
pub fn move_node_to_top(store: &mut GraphStore, node_id: &str) -> bool {
    let Some(top_y) = store
        .list_nodes()
        .iter()
        .map(|n| n.position.y)
        .reduce(f64::min)
    else {
        return false;
    };
    store.update_node(node_id, |node| {
        node.position.y = top_y - 150.0;
    })
}
