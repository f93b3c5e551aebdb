use crate::error::FlowError;
use crate::graph::{GraphStore, NodeKind};

/// Structural pre-submission check of a canvas graph.
///
/// This is the one place the crate reports hard errors about a graph; the
/// conversions themselves stay fail-soft. Checks run in order and the first
/// violation wins:
///
/// 1. at least one condition node exists,
/// 2. no condition node carries a field validation error,
/// 3. opening and closing brackets are balanced in count,
/// 4. a multi-node graph has at least `nodes - 1` edges.
///
/// The edge-count check is a cheap connectivity proxy, not a reachability
/// proof; the fail-soft builder copes with whatever shape passes it.
pub fn validate_flow(store: &GraphStore) -> Result<(), FlowError> {
    let nodes = store.list_nodes();

    if !nodes.iter().any(|n| n.kind == NodeKind::Condition) {
        return Err(FlowError::NoConditions);
    }

    if let Some(message) = nodes
        .iter()
        .filter(|n| n.kind == NodeKind::Condition)
        .find_map(|n| n.condition_data().and_then(|d| d.error.clone()))
    {
        return Err(FlowError::InvalidCondition { message });
    }

    let open = nodes
        .iter()
        .filter(|n| n.kind == NodeKind::BracketOpen)
        .count();
    let close = nodes
        .iter()
        .filter(|n| n.kind == NodeKind::BracketClose)
        .count();
    if open != close {
        return Err(FlowError::UnbalancedBrackets { open, close });
    }

    if nodes.len() > 1 && store.list_edges().len() < nodes.len() - 1 {
        return Err(FlowError::DisconnectedNodes);
    }

    Ok(())
}
