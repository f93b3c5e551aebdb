use crate::rule::JoinOperator;
use serde::{Deserialize, Serialize};

/// The semantic kind of a connection.
///
/// `Flow` means "comes next in sequence" or "is a member of this group" and
/// carries no boolean meaning; `Join` carries the AND/OR operator between two
/// sibling elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EdgeKind {
    #[serde(rename = "flow")]
    Flow,
    #[serde(rename = "join")]
    Join,
}

/// A directed connection between two node ids.
///
/// Both endpoints must resolve to existing nodes for the edge to take part in
/// traversal; dangling edges are skipped, never fatal. The optional handles
/// record which connection points the user wired and only matter to the edge
/// classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    #[serde(rename = "type")]
    pub kind: EdgeKind,
    #[serde(rename = "joinOperator", default, skip_serializing_if = "Option::is_none")]
    pub join_operator: Option<JoinOperator>,
    #[serde(rename = "sourceHandle", default, skip_serializing_if = "Option::is_none")]
    pub source_handle: Option<String>,
    #[serde(rename = "targetHandle", default, skip_serializing_if = "Option::is_none")]
    pub target_handle: Option<String>,
}

impl FlowEdge {
    /// The join operator to apply when this edge is consumed, defaulting to
    /// `And` when absent.
    pub fn operator_or_default(&self) -> JoinOperator {
        self.join_operator.unwrap_or_default()
    }
}
