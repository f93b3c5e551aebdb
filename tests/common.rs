//! Common test utilities for building canvas graphs.
use jouken::prelude::*;

#[allow(dead_code)]
pub fn condition_node(id: &str, field: &str, operator: &str, value: &str) -> FlowNode {
    FlowNode::condition(
        id.to_string(),
        Position::new(0.0, 0.0),
        ConditionData {
            field: Some(field.to_string()),
            operator: Some(operator.to_string()),
            value: Some(value.to_string()),
            error: None,
        },
    )
}

#[allow(dead_code)]
pub fn flow_edge(id: &str, source: &str, target: &str) -> FlowEdge {
    FlowEdge {
        id: id.to_string(),
        source: source.to_string(),
        target: target.to_string(),
        kind: EdgeKind::Flow,
        join_operator: None,
        source_handle: None,
        target_handle: None,
    }
}

#[allow(dead_code)]
pub fn join_edge(id: &str, source: &str, target: &str, operator: JoinOperator) -> FlowEdge {
    FlowEdge {
        id: id.to_string(),
        source: source.to_string(),
        target: target.to_string(),
        kind: EdgeKind::Join,
        join_operator: Some(operator),
        source_handle: None,
        target_handle: None,
    }
}

/// Two conditions joined by `&&`:
/// `req.method == "GET" && req.uri.path == "/x"`
#[allow(dead_code)]
pub fn two_condition_store() -> GraphStore {
    let mut store = GraphStore::new();
    store.add_nodes([
        condition_node("a", "req.method", "==", "GET"),
        condition_node("b", "req.uri.path", "==", "/x"),
    ]);
    store.add_edges([join_edge("e1", "a", "b", JoinOperator::And)]);
    store
}

/// A condition followed by a bracket group:
/// `req.method == "GET" && (req.uri.path == "/x" || req.uri.path == "/y")`
#[allow(dead_code)]
pub fn grouped_store() -> GraphStore {
    let mut store = GraphStore::new();
    store.add_nodes([
        condition_node("a", "req.method", "==", "GET"),
        FlowNode::bracket_open("open".to_string(), Position::new(0.0, 0.0)),
        condition_node("b", "req.uri.path", "==", "/x"),
        condition_node("c", "req.uri.path", "==", "/y"),
        FlowNode::bracket_close("close".to_string(), Position::new(0.0, 0.0)),
    ]);
    store.add_edges([
        join_edge("e1", "a", "open", JoinOperator::And),
        flow_edge("e2", "open", "b"),
        join_edge("e3", "b", "c", JoinOperator::Or),
        flow_edge("e4", "c", "close"),
    ]);
    store
}
