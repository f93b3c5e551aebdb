//! Tests for the tree-to-graph expander.
mod common;
use ahash::AHashMap;
use jouken::prelude::*;

fn expand(conditions: Vec<Condition>) -> GraphFragment {
    let mut ids = SequentialIds::new();
    TreeExpander::new(&mut ids).expand(&conditions)
}

#[test]
fn test_expansion_is_deterministic() {
    let conditions = vec![
        Condition::leaf("req.method", "==", "GET").with_join(JoinOperator::Or),
        Condition::group(vec![Condition::leaf("req.uri.path", "==", "/x")]),
    ];
    assert_eq!(expand(conditions.clone()), expand(conditions));
}

#[test]
fn test_two_leaves_joined() {
    let fragment = expand(vec![
        Condition::leaf("req.method", "==", "GET").with_join(JoinOperator::Or),
        Condition::leaf("req.uri.path", "==", "/x"),
    ]);

    assert_eq!(fragment.nodes.len(), 2);
    assert_eq!(fragment.nodes[0].id, "condition_0");
    assert_eq!(fragment.nodes[1].id, "condition_1");

    assert_eq!(fragment.edges.len(), 1);
    let edge = &fragment.edges[0];
    assert_eq!(edge.kind, EdgeKind::Join);
    assert_eq!(edge.join_operator, Some(JoinOperator::Or));
    assert_eq!((edge.source.as_str(), edge.target.as_str()), ("condition_0", "condition_1"));
}

#[test]
fn test_leaf_without_operator_joins_with_default() {
    let fragment = expand(vec![
        Condition::leaf("req.method", "==", "GET"),
        Condition::leaf("req.uri.path", "==", "/x"),
    ]);
    assert_eq!(fragment.edges[0].join_operator, Some(JoinOperator::And));
}

#[test]
fn test_empty_group_wires_open_to_close() {
    let fragment = expand(vec![Condition::group(vec![])]);

    assert_eq!(fragment.nodes.len(), 2);
    assert_eq!(fragment.nodes[0].kind, NodeKind::BracketOpen);
    assert_eq!(fragment.nodes[1].kind, NodeKind::BracketClose);

    assert_eq!(fragment.edges.len(), 1);
    assert_eq!(fragment.edges[0].kind, EdgeKind::Flow);
    assert_eq!(
        (fragment.edges[0].source.as_str(), fragment.edges[0].target.as_str()),
        ("bracket_0", "bracket_1")
    );
}

#[test]
fn test_brackets_carry_pairing_hints() {
    let fragment = expand(vec![Condition::group(vec![Condition::leaf(
        "req.method",
        "==",
        "GET",
    )])]);

    let open = fragment.nodes.iter().find(|n| n.kind == NodeKind::BracketOpen);
    let close = fragment.nodes.iter().find(|n| n.kind == NodeKind::BracketClose);
    let open = open.and_then(|n| n.bracket_data()).expect("open bracket data");
    let close = close.and_then(|n| n.bracket_data()).expect("close bracket data");

    assert!(open.is_opening);
    assert!(!close.is_opening);
    assert_eq!(open.paired_node_id.as_deref(), Some("bracket_3"));
    assert_eq!(close.paired_node_id.as_deref(), Some("bracket_0"));
}

#[test]
fn test_edge_into_group_is_flow_without_operator() {
    let fragment = expand(vec![
        Condition::leaf("req.method", "==", "GET"),
        Condition::group(vec![Condition::leaf("req.uri.path", "==", "/x")]),
    ]);

    let into_group = fragment
        .edges
        .iter()
        .find(|e| e.source == "condition_0")
        .expect("edge out of the leading leaf");
    assert_eq!(into_group.kind, EdgeKind::Flow);
    assert_eq!(into_group.join_operator, None);
}

#[test]
fn test_explicit_operator_forces_join_into_group() {
    // The classifier alone would make this a flow edge; the stated operator
    // overrides it so the rebuild can read the operator back.
    let fragment = expand(vec![
        Condition::leaf("req.method", "==", "GET").with_join(JoinOperator::Or),
        Condition::group(vec![Condition::leaf("req.uri.path", "==", "/x")]),
    ]);

    let into_group = fragment
        .edges
        .iter()
        .find(|e| e.source == "condition_0")
        .expect("edge out of the leading leaf");
    assert_eq!(into_group.kind, EdgeKind::Join);
    assert_eq!(into_group.join_operator, Some(JoinOperator::Or));
}

#[test]
fn test_group_members_chain_inside_brackets() {
    let fragment = expand(vec![Condition::group(vec![
        Condition::leaf("req.method", "==", "GET").with_join(JoinOperator::Or),
        Condition::leaf("req.method", "==", "PUT"),
    ])]);

    // open -> first member -> second member -> close
    assert_eq!(fragment.edges.len(), 3);
    assert_eq!(fragment.edges[0].kind, EdgeKind::Flow);
    assert_eq!(fragment.edges[1].kind, EdgeKind::Join);
    assert_eq!(fragment.edges[1].join_operator, Some(JoinOperator::Or));
    assert_eq!(fragment.edges[2].kind, EdgeKind::Flow);
    assert_eq!(fragment.edges[2].target, "bracket_5");
}

#[test]
fn test_missing_leaf_parts_get_defaults() {
    let fragment = expand(vec![Condition::Leaf(LeafCondition::default())]);

    let data = fragment.nodes[0].condition_data().expect("condition data");
    assert_eq!(data.field.as_deref(), Some("req.uri.path"));
    assert_eq!(data.operator.as_deref(), Some("=="));
    assert_eq!(data.value.as_deref(), Some(""));
}

#[test]
fn test_saved_positions_are_restored() {
    let mut positions = AHashMap::new();
    positions.insert("condition_0".to_string(), Position::new(42.0, 7.0));

    let conditions = vec![Condition::leaf("req.method", "==", "GET")];
    let mut ids = SequentialIds::new();
    let fragment = TreeExpander::new(&mut ids)
        .with_positions(&positions)
        .expand(&conditions);

    assert_eq!(fragment.nodes[0].position, Position::new(42.0, 7.0));
}

#[test]
fn test_unsaved_positions_fall_back_to_grid() {
    let fragment = expand(vec![
        Condition::leaf("req.method", "==", "GET"),
        Condition::leaf("req.method", "==", "PUT"),
    ]);
    assert_eq!(fragment.nodes[0].position, Position::new(100.0, 100.0));
    assert_eq!(fragment.nodes[1].position, Position::new(100.0, 250.0));
}
