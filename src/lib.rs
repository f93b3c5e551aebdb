//! # Jouken - Visual Rule Builder Conversion Core
//!
//! **Jouken** is the conversion core behind a visual rule builder: it turns a
//! canvas of condition and bracket nodes wired by flow and join edges into the
//! nested boolean condition tree a rule engine persists, and expands such a
//! tree back into a canvas graph.
//!
//! ## Core Workflow
//!
//! The crate operates on two representations of the same rule:
//!
//! 1.  **Graph**: a [`graph::GraphStore`] of nodes (conditions, opening and
//!     closing brackets) and directed edges. `flow` edges express sequence and
//!     group membership; `join` edges carry the AND/OR operator between
//!     sibling elements.
//! 2.  **Tree**: a [`rule::RulePayload`] whose `create_pattern.conditions` is
//!     a list of leaves (`field operator value`) and parenthesized groups.
//!
//! [`convert::graph_to_rule`] reduces a graph to its tree and
//! [`convert::rule_to_graph`] materializes a tree onto the canvas. The graph
//! side is deliberately fail-soft: cycles, dangling edges and unterminated
//! brackets degrade to a partial tree so a half-built canvas still previews.
//! The two directions are inverses over trees the expander can emit.
//!
//! ## Quick Start
//!
//! ```rust
//! use jouken::prelude::*;
//!
//! // path == "/admin" followed by the group (method == "POST" || method == "PUT")
//! let rule = RulePayload::new(vec![
//!     Condition::leaf("req.uri.path", "==", "/admin"),
//!     Condition::group(vec![
//!         Condition::leaf("req.method", "==", "POST").with_join(JoinOperator::Or),
//!         Condition::leaf("req.method", "==", "PUT"),
//!     ]),
//! ]);
//!
//! // Expand the tree onto a canvas...
//! let mut ids = SequentialIds::new();
//! let mut store = GraphStore::new();
//! store.apply(rule_to_graph(&rule, &mut ids));
//! validate_flow(&store)?;
//!
//! // ...and rebuild the identical tree from the graph.
//! let rebuilt = graph_to_rule(&store, "admin-writes");
//! assert_eq!(rebuilt.create_pattern.conditions, rule.create_pattern.conditions);
//!
//! assert_eq!(
//!     format_rule(&rule),
//!     "req.uri.path == \"/admin\" && (req.method == \"POST\" || req.method == \"PUT\")",
//! );
//! # Ok::<(), jouken::error::FlowError>(())
//! ```

pub mod convert;
pub mod error;
pub mod graph;
pub mod id;
pub mod prelude;
pub mod preview;
pub mod rule;
pub mod validate;
