use crate::graph::{
    smart_edge, ConditionData, EdgeKind, FlowEdge, FlowNode, GraphFragment, NodePayload, Position,
};
use crate::id::IdGenerator;
use crate::rule::catalog::defaults;
use crate::rule::{Condition, GroupCondition, JoinOperator, LeafCondition};
use ahash::AHashMap;

const ORIGIN_X: f64 = 100.0;
const ORIGIN_Y: f64 = 100.0;
const ROW_STEP: f64 = 150.0;
const GROUP_INDENT: f64 = 150.0;
const GROUP_ROW_STEP: f64 = 100.0;
const GROUP_SPAN: f64 = 300.0;

/// Materializes a condition tree as canvas nodes and edges.
///
/// Output is fully determined by the tree and the id generator: same inputs,
/// same fragment. Sibling elements are chained through the smart-edge
/// classifier; an element's stored `joinOperator` lands on the edge leaving
/// that element, which is exactly where the builder reads it back from.
pub struct TreeExpander<'a> {
    ids: &'a mut dyn IdGenerator,
    positions: Option<&'a AHashMap<String, Position>>,
    nodes: Vec<FlowNode>,
    edges: Vec<FlowEdge>,
    last: Option<String>,
    pending_join: Option<JoinOperator>,
}

impl<'a> TreeExpander<'a> {
    pub fn new(ids: &'a mut dyn IdGenerator) -> Self {
        Self {
            ids,
            positions: None,
            nodes: Vec::new(),
            edges: Vec::new(),
            last: None,
            pending_join: None,
        }
    }

    /// Supplies a saved layout, keyed by node id. Ids not in the map fall
    /// back to the computed grid position.
    pub fn with_positions(mut self, positions: &'a AHashMap<String, Position>) -> Self {
        self.positions = Some(positions);
        self
    }

    pub fn expand(mut self, conditions: &[Condition]) -> GraphFragment {
        for (index, condition) in conditions.iter().enumerate() {
            let origin = Position::new(ORIGIN_X, ORIGIN_Y + index as f64 * ROW_STEP);
            self.expand_one(condition, origin);
        }
        GraphFragment {
            nodes: self.nodes,
            edges: self.edges,
        }
    }

    fn expand_one(&mut self, condition: &Condition, at: Position) {
        match condition {
            Condition::Leaf(leaf) => self.expand_leaf(leaf, at),
            Condition::Group(group) => self.expand_group(group, at),
        }
    }

    fn expand_leaf(&mut self, leaf: &LeafCondition, at: Position) {
        let id = self.ids.next_id("condition");
        let position = self.position_for(&id, at);
        self.nodes.push(FlowNode::condition(
            id.clone(),
            position,
            ConditionData {
                field: Some(
                    leaf.field
                        .clone()
                        .unwrap_or_else(|| defaults::FIELD.to_string()),
                ),
                operator: Some(
                    leaf.operator
                        .clone()
                        .unwrap_or_else(|| defaults::OPERATOR.to_string()),
                ),
                value: Some(
                    leaf.value
                        .clone()
                        .unwrap_or_else(|| defaults::VALUE.to_string()),
                ),
                error: None,
            },
        ));

        self.connect_prev(&id);
        self.last = Some(id);
        self.pending_join = leaf.join_operator;
    }

    fn expand_group(&mut self, group: &GroupCondition, at: Position) {
        let open_id = self.ids.next_id("bracket");
        let open_position = self.position_for(&open_id, at);
        self.nodes
            .push(FlowNode::bracket_open(open_id.clone(), open_position));
        self.connect_prev(&open_id);

        // Members chain off the opening bracket; the first one is reached
        // via a flow edge, never a join.
        self.last = Some(open_id.clone());
        self.pending_join = None;
        for (index, inner) in group.conditions.iter().enumerate() {
            let position = Position::new(
                at.x + GROUP_INDENT,
                at.y + index as f64 * GROUP_ROW_STEP,
            );
            self.expand_one(inner, position);
        }

        let close_id = self.ids.next_id("bracket");
        let close_position = self.position_for(&close_id, Position::new(at.x + GROUP_SPAN, at.y));
        self.nodes
            .push(FlowNode::bracket_close(close_id.clone(), close_position));
        // An empty group still closes: `last` is the opening bracket itself.
        self.pending_join = None;
        self.connect_prev(&close_id);

        self.pair_brackets(&open_id, &close_id);
        self.last = Some(close_id);
        self.pending_join = group.join_operator;
    }

    /// Chains a freshly created element to the previous one. When the
    /// previous element stated a join operator, the edge is forced to a join
    /// carrying it, overriding the classifier; the tree is explicit and must
    /// survive a rebuild.
    fn connect_prev(&mut self, target_id: &str) {
        let Some(prev_id) = self.last.clone() else {
            return;
        };
        let (Some(source), Some(target)) = (
            self.nodes.iter().find(|n| n.id == prev_id),
            self.nodes.iter().find(|n| n.id == target_id),
        ) else {
            return;
        };
        let mut edge = smart_edge(self.ids, source, target, None, None);
        if let Some(operator) = self.pending_join {
            edge.kind = EdgeKind::Join;
            edge.join_operator = Some(operator);
        }
        self.edges.push(edge);
    }

    /// Records the advisory pairing hint on both brackets. Readers recompute
    /// the pairing structurally; this only helps the canvas highlight pairs.
    fn pair_brackets(&mut self, open_id: &str, close_id: &str) {
        for (id, partner) in [(open_id, close_id), (close_id, open_id)] {
            if let Some(node) = self.nodes.iter_mut().find(|n| n.id == id) {
                if let NodePayload::Bracket(data) = &mut node.data {
                    data.paired_node_id = Some(partner.to_string());
                }
            }
        }
    }

    fn position_for(&self, id: &str, fallback: Position) -> Position {
        self.positions
            .and_then(|saved| saved.get(id))
            .copied()
            .unwrap_or(fallback)
    }
}
