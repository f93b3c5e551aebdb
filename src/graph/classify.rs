use super::edge::{EdgeKind, FlowEdge};
use super::node::{FlowNode, NodeKind};
use crate::id::IdGenerator;
use crate::rule::JoinOperator;

fn is_lateral(handle: &str) -> bool {
    matches!(handle, "left" | "right")
}

fn is_vertical(handle: &str) -> bool {
    matches!(handle, "top" | "bottom")
}

/// Decides the semantic kind of a connection between two nodes.
///
/// Pure function of its four inputs. The rules are ordered; the first match
/// wins:
///
/// 1. Into an opening bracket: entering a group is sequential.
/// 2. Out of an opening bracket: the first group member is reached via flow.
/// 3. Into a closing bracket: a member leaving for the closer is flow.
/// 4. Out of a closing bracket: whatever follows a closed group joins it.
/// 5. Both handles lateral (left/right): an explicit join gesture.
/// 6. Both handles vertical (top/bottom): an explicit flow gesture.
/// 7. Two bare conditions with no handles: adjacency defaults to join.
/// 8. Everything else: flow.
pub fn classify(
    source: &FlowNode,
    target: &FlowNode,
    source_handle: Option<&str>,
    target_handle: Option<&str>,
) -> EdgeKind {
    if target.kind == NodeKind::BracketOpen {
        return EdgeKind::Flow;
    }
    if source.kind == NodeKind::BracketOpen {
        return EdgeKind::Flow;
    }
    if target.kind == NodeKind::BracketClose {
        return EdgeKind::Flow;
    }
    if source.kind == NodeKind::BracketClose {
        return EdgeKind::Join;
    }

    if let (Some(sh), Some(th)) = (source_handle, target_handle) {
        if is_lateral(sh) && is_lateral(th) {
            return EdgeKind::Join;
        }
        if is_vertical(sh) && is_vertical(th) {
            return EdgeKind::Flow;
        }
    }

    if source.kind == NodeKind::Condition
        && target.kind == NodeKind::Condition
        && source_handle.is_none()
        && target_handle.is_none()
    {
        return EdgeKind::Join;
    }

    EdgeKind::Flow
}

/// Builds a connection with its kind classified from the endpoints.
///
/// Join edges get the default `And` operator; callers with an explicit
/// operator (e.g. the expander honoring a stored tree) overwrite it.
pub fn smart_edge(
    ids: &mut dyn IdGenerator,
    source: &FlowNode,
    target: &FlowNode,
    source_handle: Option<&str>,
    target_handle: Option<&str>,
) -> FlowEdge {
    let kind = classify(source, target, source_handle, target_handle);
    FlowEdge {
        id: ids.next_id("edge"),
        source: source.id.clone(),
        target: target.id.clone(),
        kind,
        join_operator: (kind == EdgeKind::Join).then_some(JoinOperator::And),
        source_handle: source_handle.map(str::to_string),
        target_handle: target_handle.map(str::to_string),
    }
}
