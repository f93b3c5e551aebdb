use crate::graph::{EdgeKind, FlowNode, GraphStore, NodeKind};
use crate::rule::catalog::defaults;
use crate::rule::{Condition, GroupCondition, LeafCondition};
use ahash::AHashSet;
use std::collections::VecDeque;

/// Reduces a graph snapshot to the nested condition tree it draws.
///
/// The traversal is fail-soft by design: unknown node ids, dangling edges,
/// cycles and unterminated brackets all degrade to a partial (possibly empty)
/// tree so a half-built canvas still previews. One visited set is shared
/// across the whole build, so a node is processed at most once even when it
/// is reachable from several roots.
pub struct TreeBuilder<'a> {
    store: &'a GraphStore,
    visited: AHashSet<String>,
}

impl<'a> TreeBuilder<'a> {
    pub fn new(store: &'a GraphStore) -> Self {
        Self {
            store,
            visited: AHashSet::new(),
        }
    }

    /// Builds the full condition list, concatenating the sequences anchored
    /// at every root in deterministic root order.
    pub fn build_all(&mut self) -> Vec<Condition> {
        let mut conditions = Vec::new();
        for root in super::roots::select_roots(self.store) {
            conditions.extend(self.build_from(&root));
        }
        conditions
    }

    /// Builds the sequence anchored at a single root node.
    pub fn build_from(&mut self, root_id: &str) -> Vec<Condition> {
        self.walk(root_id, None)
    }

    fn walk(&mut self, node_id: &str, stop_at: Option<&str>) -> Vec<Condition> {
        if stop_at == Some(node_id) || self.visited.contains(node_id) {
            return Vec::new();
        }
        let Some(node) = self.store.find_node(node_id) else {
            return Vec::new();
        };
        self.visited.insert(node_id.to_string());

        match node.kind {
            NodeKind::Condition => self.walk_condition(node, stop_at),
            NodeKind::BracketOpen => self.walk_group(node, stop_at),
            // A closer reached directly (or a stray join node) is a
            // pass-through; it never becomes a tree element itself.
            NodeKind::BracketClose | NodeKind::Join => {
                let next = self
                    .store
                    .outgoing_edges(&node.id)
                    .next()
                    .map(|e| e.target.clone());
                match next {
                    Some(target) => self.walk(&target, stop_at),
                    None => Vec::new(),
                }
            }
        }
    }

    fn walk_condition(&mut self, node: &FlowNode, stop_at: Option<&str>) -> Vec<Condition> {
        let data = node.condition_data();
        let mut leaf = LeafCondition {
            field: Some(
                data.and_then(|d| d.field.clone())
                    .unwrap_or_else(|| defaults::FIELD.to_string()),
            ),
            operator: Some(
                data.and_then(|d| d.operator.clone())
                    .unwrap_or_else(|| defaults::OPERATOR.to_string()),
            ),
            value: Some(
                data.and_then(|d| d.value.clone())
                    .unwrap_or_else(|| defaults::VALUE.to_string()),
            ),
            is_group: false,
            join_operator: None,
        };

        let store = self.store;
        // A join edge takes precedence over flow edges: it both contributes
        // the leaf's operator and decides where the sequence continues.
        let join = store
            .outgoing_edges(&node.id)
            .find(|e| e.kind == EdgeKind::Join)
            .map(|e| (e.target.clone(), e.operator_or_default()));
        let next = match join {
            Some((target, operator)) => {
                leaf.join_operator = Some(operator);
                Some(target)
            }
            None => store
                .outgoing_edges(&node.id)
                .next()
                .map(|e| e.target.clone()),
        };

        let mut conditions = vec![Condition::Leaf(leaf)];
        if let Some(target) = next {
            conditions.extend(self.walk(&target, stop_at));
        }
        conditions
    }

    fn walk_group(&mut self, node: &FlowNode, stop_at: Option<&str>) -> Vec<Condition> {
        let closer_id = find_matching_close(self.store, &node.id).map(|c| c.id.clone());

        // Inner traversal is bounded by the matched closer; without one the
        // group is unterminated and whatever is reachable becomes content.
        let inner = {
            let inner_stop = closer_id.as_deref().or(stop_at);
            let first = self
                .store
                .outgoing_edges(&node.id)
                .next()
                .map(|e| e.target.clone());
            match first {
                Some(target) => self.walk(&target, inner_stop),
                None => Vec::new(),
            }
        };

        let mut group = GroupCondition {
            is_group: true,
            conditions: inner,
            join_operator: None,
        };

        if let Some(closer_id) = closer_id {
            // The closer belongs to this group; it must not be traversed
            // again as a pass-through later.
            self.visited.insert(closer_id.clone());

            // A join edge out of the closer both names the group's operator
            // and continues the sequence; a flow edge continues it without
            // one (a group can precede another group operator-less).
            let join = self
                .store
                .outgoing_edges(&closer_id)
                .find(|e| e.kind == EdgeKind::Join)
                .map(|e| (e.target.clone(), e.operator_or_default()));
            let next = match join {
                Some((target, operator)) => {
                    group.join_operator = Some(operator);
                    Some(target)
                }
                None => self
                    .store
                    .outgoing_edges(&closer_id)
                    .next()
                    .map(|e| e.target.clone()),
            };
            let mut conditions = vec![Condition::Group(group)];
            if let Some(target) = next {
                conditions.extend(self.walk(&target, stop_at));
            }
            return conditions;
        }

        vec![Condition::Group(group)]
    }
}

/// Locates the closing bracket that terminates `open_id`'s group.
///
/// Breadth-first forward over every outgoing edge (a closer may sit behind
/// either a flow or a join edge), tracking bracket depth so nested pairs are
/// skipped. The match is purely structural: the stored `pairedNodeId` hint is
/// never consulted, so the result stays correct after arbitrary edits.
/// Returns `None` for an unterminated group, which callers treat as "empty",
/// not as an error.
pub fn find_matching_close<'a>(store: &'a GraphStore, open_id: &str) -> Option<&'a FlowNode> {
    let mut visited: AHashSet<&str> = AHashSet::new();
    let mut queue: VecDeque<(&str, u32)> = store
        .outgoing_edges(open_id)
        .map(|e| (e.target.as_str(), 0))
        .collect();

    while let Some((current_id, mut depth)) = queue.pop_front() {
        if !visited.insert(current_id) {
            continue;
        }
        let Some(current) = store.find_node(current_id) else {
            continue;
        };

        match current.kind {
            NodeKind::BracketClose => {
                if depth == 0 {
                    return Some(current);
                }
                depth -= 1;
            }
            NodeKind::BracketOpen => depth += 1,
            _ => {}
        }

        for edge in store.outgoing_edges(current_id) {
            queue.push_back((edge.target.as_str(), depth));
        }
    }

    None
}
