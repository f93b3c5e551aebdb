use super::condition::{Condition, GroupCondition, LeafCondition};
use crate::error::RuleParseError;
use crate::graph::Position;
use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// The condition tree plus the saved canvas layout.
///
/// `positions` is opaque to the conversion semantics; it is carried through
/// unchanged so a re-imported rule can restore its layout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreatePattern {
    pub conditions: Vec<Condition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub positions: Option<AHashMap<String, Position>>,
}

/// The complete rule payload exchanged with the persistence layer.
///
/// Only `create_pattern` has meaning to this crate; the replace pattern and
/// parameters belong to other parts of the rule editor and pass through as
/// raw JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RulePayload {
    pub create_pattern: CreatePattern,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replace_pattern: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<serde_json::Value>>,
}

impl RulePayload {
    /// Wraps a condition list in an otherwise empty payload.
    pub fn new(conditions: Vec<Condition>) -> Self {
        Self {
            create_pattern: CreatePattern {
                conditions,
                positions: None,
            },
            ..Default::default()
        }
    }

    pub fn from_json(raw: &str) -> Result<Self, RuleParseError> {
        serde_json::from_str(raw).map_err(|e| RuleParseError::JsonParseError(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String, RuleParseError> {
        serde_json::to_string(self).map_err(|e| RuleParseError::JsonParseError(e.to_string()))
    }

    pub fn to_json_pretty(&self) -> Result<String, RuleParseError> {
        serde_json::to_string_pretty(self).map_err(|e| RuleParseError::JsonParseError(e.to_string()))
    }

    /// Returns a copy normalized for API submission.
    ///
    /// Hand-edited or legacy payloads can carry stale `isGroup` flags; the
    /// typed tree already knows which elements are groups, so the flags are
    /// rewritten to match the structure.
    pub fn cleaned(&self) -> Self {
        let mut cleaned = self.clone();
        cleaned.create_pattern.conditions = clean_conditions(&self.create_pattern.conditions);
        cleaned
    }
}

fn clean_conditions(conditions: &[Condition]) -> Vec<Condition> {
    conditions
        .iter()
        .map(|condition| match condition {
            Condition::Group(group) => Condition::Group(GroupCondition {
                is_group: true,
                conditions: clean_conditions(&group.conditions),
                join_operator: group.join_operator,
            }),
            Condition::Leaf(leaf) => Condition::Leaf(LeafCondition {
                is_group: false,
                ..leaf.clone()
            }),
        })
        .collect()
}
