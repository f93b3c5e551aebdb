//! Prelude module for convenient imports
//!
//! Re-exports the types most code working with jouken touches: the graph
//! model, the rule tree, the conversions between them and the validation and
//! preview helpers. Import this module instead of naming each type
//! individually.
//!
//! # Example
//!
//! ```rust
//! use jouken::prelude::*;
//!
//! let rule = RulePayload::new(vec![
//!     Condition::leaf("req.method", "==", "GET"),
//! ]);
//! assert_eq!(format_rule(&rule), "req.method == \"GET\"");
//! ```

// Graph model
pub use crate::graph::{
    classify, smart_edge, BracketData, ConditionData, EdgeKind, FlowEdge, FlowNode, GraphFragment,
    GraphStore, NodeKind, NodePayload, Position,
};

// Rule tree and payload
pub use crate::rule::{
    Condition, CreatePattern, GroupCondition, JoinOperator, LeafCondition, RulePayload,
};

// Conversions
pub use crate::convert::{
    find_matching_close, graph_to_rule, move_node_to_top, rule_to_graph, select_roots, RootTracker,
    TreeBuilder, TreeExpander,
};

// Id generation
pub use crate::id::{IdGenerator, RandomIds, SequentialIds};

// Preview and validation
pub use crate::preview::{format_conditions, format_rule};
pub use crate::validate::validate_flow;

// Error types
pub use crate::error::{FlowError, RuleParseError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
