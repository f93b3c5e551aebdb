use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// The boolean operator joining an element to its *next* sibling.
///
/// Serialized as the symbols the persisted format uses (`&&` / `||`).
/// Deserialization is lenient: anything unrecognized collapses to `And`,
/// which is also the default wherever an operator is consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum JoinOperator {
    #[default]
    And,
    Or,
}

impl JoinOperator {
    pub fn as_str(self) -> &'static str {
        match self {
            JoinOperator::And => "&&",
            JoinOperator::Or => "||",
        }
    }

    /// Parses an operator string, falling back to `And` for unknown input.
    pub fn parse_lenient(raw: &str) -> Self {
        match raw.trim() {
            "||" => JoinOperator::Or,
            s if s.eq_ignore_ascii_case("or") => JoinOperator::Or,
            _ => JoinOperator::And,
        }
    }
}

impl fmt::Display for JoinOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for JoinOperator {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for JoinOperator {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(JoinOperator::parse_lenient(&raw))
    }
}

/// One element of the persisted rule tree: a comparison or a parenthesized
/// group of further elements.
///
/// The JSON shape matches the stored format: leaves carry
/// `field`/`operator`/`value` and `isGroup: false`, groups carry
/// `isGroup: true` and a `conditions` array. `joinOperator` on any element
/// joins it to the next sibling; the last element's operator is meaningless.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Condition {
    Group(GroupCondition),
    Leaf(LeafCondition),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupCondition {
    #[serde(rename = "isGroup")]
    pub is_group: bool,
    pub conditions: Vec<Condition>,
    #[serde(rename = "joinOperator", default, skip_serializing_if = "Option::is_none")]
    pub join_operator: Option<JoinOperator>,
}

/// A single `field operator value` comparison.
///
/// All three parts are optional in stored data; readers substitute the
/// catalog defaults instead of mutating the stored tree.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LeafCondition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operator: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(rename = "isGroup", default)]
    pub is_group: bool,
    #[serde(rename = "joinOperator", default, skip_serializing_if = "Option::is_none")]
    pub join_operator: Option<JoinOperator>,
}

impl Condition {
    /// Creates a leaf comparison.
    pub fn leaf(
        field: impl Into<String>,
        operator: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Condition::Leaf(LeafCondition {
            field: Some(field.into()),
            operator: Some(operator.into()),
            value: Some(value.into()),
            is_group: false,
            join_operator: None,
        })
    }

    /// Creates a parenthesized group.
    pub fn group(conditions: Vec<Condition>) -> Self {
        Condition::Group(GroupCondition {
            is_group: true,
            conditions,
            join_operator: None,
        })
    }

    /// Attaches the operator joining this element to its next sibling.
    pub fn with_join(mut self, operator: JoinOperator) -> Self {
        match &mut self {
            Condition::Group(group) => group.join_operator = Some(operator),
            Condition::Leaf(leaf) => leaf.join_operator = Some(operator),
        }
        self
    }

    pub fn join_operator(&self) -> Option<JoinOperator> {
        match self {
            Condition::Group(group) => group.join_operator,
            Condition::Leaf(leaf) => leaf.join_operator,
        }
    }

    pub fn is_group(&self) -> bool {
        matches!(self, Condition::Group(_))
    }
}
