//! Human-readable rendering of rule trees.

pub mod formatter;

pub use formatter::{format_conditions, format_operator, format_rule};
