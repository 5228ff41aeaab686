//! Comparison of two resolved values.

use cla_ir::{CompareOp, OpToken, Value};

use crate::errors::{mixed_comparison, ordering_on_text, unknown_operator, EvalResult};

/// Compare `left` (the variable `name`'s value) with `right` (the literal).
///
/// Integers support all six operators. Text supports only `==` and `!=`.
/// An integer never compares with text.
pub fn evaluate_comparison(
    name: &str,
    left: &Value,
    op: CompareOp,
    right: &Value,
) -> EvalResult<bool> {
    match (left, right) {
        (Value::Int(l), Value::Int(r)) => Ok(op.apply(l, r)),
        (Value::Text(l), Value::Text(r)) if op.is_equality() => {
            Ok(op.apply(l.as_str(), r.as_str()))
        }
        (Value::Text(_), Value::Text(_)) => Err(ordering_on_text(name, op)),
        _ => Err(mixed_comparison(name, left, right)),
    }
}

/// The operator a condition was written with, or `UnknownOperator`.
pub(crate) fn resolve_operator(token: &OpToken) -> EvalResult<CompareOp> {
    match token {
        OpToken::Known(op) => Ok(*op),
        OpToken::Unknown(symbol) => Err(unknown_operator(symbol)),
    }
}
