use serde::{Deserialize, Serialize};

/// The kind of a canvas vertex.
///
/// `Join` is declared for completeness with the canvas vocabulary but is
/// never instantiated as a standalone node: boolean joins live on edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    #[serde(rename = "condition")]
    Condition,
    #[serde(rename = "join")]
    Join,
    #[serde(rename = "bracketOpen")]
    BracketOpen,
    #[serde(rename = "bracketClose")]
    BracketClose,
}

impl NodeKind {
    /// Root-selection priority; lower wins.
    pub(crate) fn priority(self) -> u8 {
        match self {
            NodeKind::BracketOpen => 1,
            NodeKind::BracketClose => 2,
            NodeKind::Condition => 3,
            NodeKind::Join => 4,
        }
    }
}

/// A canvas coordinate. Presentation-only: persisted so re-import can restore
/// layout, ignored by the tree conversion.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Payload of a condition node. All parts optional; readers substitute the
/// catalog defaults and never write them back.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ConditionData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operator: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Payload of a bracket node.
///
/// `paired_node_id` is a UI hint only. Graph edits can leave it stale, so the
/// authoritative pairing is always recomputed structurally
/// (see [`crate::convert::find_matching_close`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BracketData {
    #[serde(rename = "isOpening")]
    pub is_opening: bool,
    #[serde(rename = "pairedNodeId", default, skip_serializing_if = "Option::is_none")]
    pub paired_node_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NodePayload {
    Bracket(BracketData),
    Condition(ConditionData),
}

/// A vertex in the visual rule graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowNode {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    pub position: Position,
    pub data: NodePayload,
}

impl FlowNode {
    pub fn condition(id: String, position: Position, data: ConditionData) -> Self {
        Self {
            id,
            kind: NodeKind::Condition,
            position,
            data: NodePayload::Condition(data),
        }
    }

    pub fn bracket_open(id: String, position: Position) -> Self {
        Self {
            id,
            kind: NodeKind::BracketOpen,
            position,
            data: NodePayload::Bracket(BracketData {
                is_opening: true,
                paired_node_id: None,
            }),
        }
    }

    pub fn bracket_close(id: String, position: Position) -> Self {
        Self {
            id,
            kind: NodeKind::BracketClose,
            position,
            data: NodePayload::Bracket(BracketData {
                is_opening: false,
                paired_node_id: None,
            }),
        }
    }

    pub fn condition_data(&self) -> Option<&ConditionData> {
        match &self.data {
            NodePayload::Condition(data) => Some(data),
            NodePayload::Bracket(_) => None,
        }
    }

    pub fn bracket_data(&self) -> Option<&BracketData> {
        match &self.data {
            NodePayload::Bracket(data) => Some(data),
            NodePayload::Condition(_) => None,
        }
    }
}
