//! The `while` countdown loop.
//!
//! The body is fixed: print the variable, then store it decremented by one.
//! Conditions that a decreasing integer eventually falsifies terminate on
//! their own. `<` and `<=` never do and run until the iteration budget or a
//! cancellation stops them.

use tracing::{debug, warn};

use cla_ir::{Condition, Value};

use super::{evaluate_comparison, resolve_operator};
use crate::cancel::CancelToken;
use crate::config::SessionConfig;
use crate::environment::VariableStore;
use crate::errors::{
    integer_underflow, loop_budget_exceeded, loop_requires_integer, undefined_variable,
    EvalError, EvalResult,
};
use crate::output::Emitter;

/// What may stop a loop from outside its condition.
#[derive(Clone, Copy)]
pub(crate) struct LoopGuard<'a> {
    pub config: &'a SessionConfig,
    pub cancel: &'a CancelToken,
}

pub(crate) fn eval_countdown(
    cond: &Condition,
    store: &mut VariableStore,
    guard: LoopGuard<'_>,
    out: &mut Emitter,
) -> EvalResult {
    out.emit(format!(
        "Starting loop while {} {} {}",
        cond.name, cond.op, cond.literal
    ));
    debug!(name = %cond.name, op = %cond.op, literal = %cond.literal, "loop start");

    let literal = cond.literal_value();
    let mut iterations: u64 = 0;
    loop {
        if guard.cancel.is_cancelled() {
            warn!(name = %cond.name, iterations, "loop cancelled");
            return Err(EvalError::Cancelled);
        }

        let current = store
            .lookup(&cond.name)
            .ok_or_else(|| undefined_variable(&cond.name))?
            .coerced();
        let Some(n) = current.as_int() else {
            return Err(loop_requires_integer(&cond.name, &current));
        };
        let op = resolve_operator(&cond.op)?;

        if evaluate_comparison(&cond.name, &current, op.negate(), &literal)? {
            break;
        }

        if guard.config.loop_budget_spent(iterations) {
            warn!(name = %cond.name, iterations, "loop budget exhausted");
            return Err(loop_budget_exceeded(&cond.name, iterations));
        }

        out.emit(format!("Looping with {}: {n}", cond.name));
        let next = n
            .checked_sub(1)
            .ok_or_else(|| integer_underflow(&cond.name))?;
        store.define(cond.name.as_str(), Value::Int(next));
        iterations += 1;
    }

    debug!(name = %cond.name, iterations, "loop done");
    Ok(())
}
