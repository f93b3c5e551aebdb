use crate::rule::catalog::defaults;
use crate::rule::{Condition, JoinOperator, RulePayload};

/// Renders a rule payload as a single readable expression line.
///
/// This is pure string building and cannot fail: missing parts are replaced
/// by catalog defaults, an empty condition list becomes a placeholder
/// sentence instead of empty output.
pub fn format_rule(rule: &RulePayload) -> String {
    let conditions = &rule.create_pattern.conditions;
    if conditions.is_empty() {
        return "No conditions".to_string();
    }
    let formatted = format_conditions(conditions);
    if formatted.is_empty() {
        "Empty conditions".to_string()
    } else {
        formatted
    }
}

/// Renders a condition list, joining siblings with their stored operator
/// (defaulting to `&&`) and wrapping groups in parentheses.
pub fn format_conditions(conditions: &[Condition]) -> String {
    let mut out = String::new();
    for (index, condition) in conditions.iter().enumerate() {
        match condition {
            Condition::Group(group) => {
                out.push('(');
                out.push_str(&format_conditions(&group.conditions));
                out.push(')');
            }
            Condition::Leaf(leaf) => {
                let field = leaf.field.as_deref().unwrap_or(defaults::FIELD);
                let operator =
                    format_operator(leaf.operator.as_deref().unwrap_or(defaults::OPERATOR));
                out.push_str(field);
                out.push(' ');
                out.push_str(&operator);
                out.push(' ');
                match leaf.value.as_deref() {
                    Some(value) if !value.is_empty() => {
                        out.push('"');
                        out.push_str(value);
                        out.push('"');
                    }
                    _ => out.push_str(defaults::EMPTY_VALUE_DISPLAY),
                }
            }
        }
        if index + 1 < conditions.len() {
            let join = condition.join_operator().unwrap_or(JoinOperator::And);
            out.push(' ');
            out.push_str(join.as_str());
            out.push(' ');
        }
    }
    out
}

/// Maps symbolic operators to readable words; unknown operators pass through
/// verbatim rather than erroring.
pub fn format_operator(operator: &str) -> String {
    match operator {
        "~~" => "contains".to_string(),
        "starts_with" => "starts with".to_string(),
        "ends_with" => "ends with".to_string(),
        other => other.to_string(),
    }
}
