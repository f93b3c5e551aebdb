use thiserror::Error;

/// Errors that can occur while parsing a stored rule payload.
///
/// The conversion core itself is total: a malformed graph reduces to a partial
/// or empty tree instead of failing. Errors only exist at the JSON boundary.
#[derive(Error, Debug, Clone)]
pub enum RuleParseError {
    #[error("Failed to parse rule JSON: {0}")]
    JsonParseError(String),
}

/// Structural problems reported by the flow validator before submission.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FlowError {
    #[error("At least one condition is required")]
    NoConditions,

    #[error("Condition has error: {message}")]
    InvalidCondition { message: String },

    #[error(
        "Unbalanced brackets: {open} opening and {close} closing. Each opening bracket must have a matching closing bracket"
    )]
    UnbalancedBrackets { open: usize, close: usize },

    #[error("Some nodes are disconnected. Please connect all nodes")]
    DisconnectedNodes,
}
