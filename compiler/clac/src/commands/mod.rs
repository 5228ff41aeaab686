//! Command handlers for the `cla` CLI.
//!
//! Each submodule implements one command. Handlers return what happened and
//! leave exit codes to `main`.

mod check;
mod env;
mod repl;
mod run;

pub use check::{check_file, check_source, LineProblem};
pub use env::{config_from_env, config_from_vars, EnvConfigError, ECHO_VAR, LOOP_LIMIT_VAR};
pub use repl::run_repl;
pub use run::run_file;

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
