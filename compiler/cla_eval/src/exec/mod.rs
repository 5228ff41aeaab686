//! Command evaluation.
//!
//! The pieces that do not touch files live here as free functions over the
//! variable store; the session dispatches parsed commands to them (see
//! `Session::eval_command`). Inclusion of other scripts is in `loader`.

mod compare;
mod condition;
mod countdown;
mod print;

pub use compare::evaluate_comparison;
pub use print::substitute;

pub(crate) use compare::resolve_operator;
pub(crate) use condition::eval_if;
pub(crate) use countdown::{eval_countdown, LoopGuard};
