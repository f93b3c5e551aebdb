//! Bidirectional conversion between the canvas graph and the rule tree.
//!
//! [`TreeBuilder`] reduces a graph to the nested condition list a rule
//! persists; [`TreeExpander`] materializes that list back into nodes and
//! edges. The two sides are inverses over the trees the expander can emit:
//! expanding a tree and rebuilding it yields the same tree.

pub mod builder;
pub mod expander;
pub mod roots;

pub use builder::{find_matching_close, TreeBuilder};
pub use expander::TreeExpander;
pub use roots::{move_node_to_top, select_roots, RootTracker};

use crate::graph::{GraphFragment, GraphStore, Position};
use crate::id::IdGenerator;
use crate::rule::{CreatePattern, RulePayload};
use ahash::AHashMap;

/// Exports the whole graph as a rule payload, capturing the current layout
/// so a later import can restore node positions.
pub fn graph_to_rule(store: &GraphStore, name: impl Into<String>) -> RulePayload {
    let conditions = TreeBuilder::new(store).build_all();
    let positions: AHashMap<String, Position> = store
        .list_nodes()
        .iter()
        .map(|n| (n.id.clone(), n.position))
        .collect();
    RulePayload {
        create_pattern: CreatePattern {
            conditions,
            positions: (!positions.is_empty()).then_some(positions),
        },
        name: Some(name.into()),
        ..Default::default()
    }
}

/// Expands a rule payload into a graph fragment ready to apply to a store.
pub fn rule_to_graph(rule: &RulePayload, ids: &mut dyn IdGenerator) -> GraphFragment {
    let mut expander = TreeExpander::new(ids);
    if let Some(positions) = &rule.create_pattern.positions {
        expander = expander.with_positions(positions);
    }
    expander.expand(&rule.create_pattern.conditions)
}
