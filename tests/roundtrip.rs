//! Expansion/rebuild round-trip tests.
//!
//! Explicit join operators survive the trip exactly; a missing operator
//! between two leaves or after a group materializes as the default `&&`
//! after a rebuild, because the connecting edge classifies as a join and a
//! join always carries an operator. The fixtures here avoid that one
//! lossy-by-default shape.
mod common;
use jouken::prelude::*;

fn roundtrip(conditions: Vec<Condition>) -> Vec<Condition> {
    let rule = RulePayload::new(conditions);
    let mut ids = SequentialIds::new();
    let mut store = GraphStore::new();
    store.apply(rule_to_graph(&rule, &mut ids));
    graph_to_rule(&store, "roundtrip").create_pattern.conditions
}

#[test]
fn test_flat_sequence_with_mixed_operators() {
    let conditions = vec![
        Condition::leaf("req.method", "==", "GET").with_join(JoinOperator::And),
        Condition::leaf("req.uri.path", "~~", "/api").with_join(JoinOperator::Or),
        Condition::leaf("res.status", "==", "404"),
    ];
    assert_eq!(roundtrip(conditions.clone()), conditions);
}

#[test]
fn test_single_group() {
    let conditions = vec![Condition::group(vec![
        Condition::leaf("req.method", "==", "POST").with_join(JoinOperator::Or),
        Condition::leaf("req.method", "==", "PUT"),
    ])];
    assert_eq!(roundtrip(conditions.clone()), conditions);
}

#[test]
fn test_leaf_then_group() {
    let conditions = vec![
        Condition::leaf("req.uri.path", "==", "/admin"),
        Condition::group(vec![
            Condition::leaf("req.method", "==", "POST").with_join(JoinOperator::Or),
            Condition::leaf("req.method", "==", "PUT"),
        ]),
    ];
    assert_eq!(roundtrip(conditions.clone()), conditions);
}

#[test]
fn test_leaf_with_operator_then_group() {
    let conditions = vec![
        Condition::leaf("req.uri.path", "==", "/admin").with_join(JoinOperator::Or),
        Condition::group(vec![Condition::leaf("req.method", "==", "POST")]),
    ];
    assert_eq!(roundtrip(conditions.clone()), conditions);
}

#[test]
fn test_adjacent_groups_without_operator() {
    let conditions = vec![
        Condition::group(vec![Condition::leaf("req.method", "==", "GET")]),
        Condition::group(vec![Condition::leaf("res.status", "==", "200")]),
    ];
    assert_eq!(roundtrip(conditions.clone()), conditions);
}

#[test]
fn test_group_then_leaf() {
    let conditions = vec![
        Condition::group(vec![Condition::leaf("req.geo.country", "==", "US")])
            .with_join(JoinOperator::Or),
        Condition::leaf("req.headers.host", "==", "api.example.com"),
    ];
    assert_eq!(roundtrip(conditions.clone()), conditions);
}

#[test]
fn test_group_containing_group_and_leaf() {
    let conditions = vec![Condition::group(vec![
        Condition::group(vec![
            Condition::leaf("req.method", "==", "GET").with_join(JoinOperator::And),
            Condition::leaf("req.uri.path", "==", "/x"),
        ])
        .with_join(JoinOperator::Or),
        Condition::leaf("res.status", "==", "500"),
    ])];
    assert_eq!(roundtrip(conditions.clone()), conditions);
}

#[test]
fn test_empty_group() {
    let conditions = vec![Condition::group(vec![])];
    assert_eq!(roundtrip(conditions.clone()), conditions);
}

#[test]
fn test_empty_group_between_leaves() {
    let conditions = vec![
        Condition::leaf("req.method", "==", "GET"),
        Condition::group(vec![]).with_join(JoinOperator::And),
        Condition::leaf("req.uri.path", "==", "/x"),
    ];
    assert_eq!(roundtrip(conditions.clone()), conditions);
}

#[test]
fn test_roundtrip_preserves_readable_form() {
    let conditions = vec![
        Condition::leaf("req.uri.path", "starts_with", "/api").with_join(JoinOperator::And),
        Condition::leaf("res.status", "!=", "200"),
    ];
    let rebuilt = roundtrip(conditions.clone());
    assert_eq!(
        format_conditions(&rebuilt),
        "req.uri.path starts with \"/api\" && res.status != \"200\""
    );
    assert_eq!(format_conditions(&rebuilt), format_conditions(&conditions));
}
