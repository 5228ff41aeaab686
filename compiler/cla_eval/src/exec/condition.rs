//! Single-shot `if`.

use cla_ir::Condition;

use super::{evaluate_comparison, resolve_operator};
use crate::environment::VariableStore;
use crate::errors::{undefined_variable, EvalResult};
use crate::output::Emitter;

/// Emit the confirmation line when the condition holds; nothing otherwise.
///
/// The stored value is seen through the all-digit coercion, so a number read
/// by `i` compares as an integer.
pub(crate) fn eval_if(cond: &Condition, store: &VariableStore, out: &mut Emitter) -> EvalResult {
    let literal = cond.literal_value();
    let current = store
        .lookup(&cond.name)
        .ok_or_else(|| undefined_variable(&cond.name))?
        .coerced();
    let op = resolve_operator(&cond.op)?;

    if evaluate_comparison(&cond.name, &current, op, &literal)? {
        out.emit(format!(
            "Condition is true for: {} {} {}",
            cond.name, op, cond.literal
        ));
    }
    Ok(())
}
