//! Cla Eval - evaluator for the cla line interpreter.
//!
//! # Architecture
//!
//! - `Session`: owns the variable store and runs lines and script files
//! - `VariableStore`: flat name → value map, one per session
//! - `exec`: `$name` substitution, comparisons, `if`, and the `while` countdown
//! - `loader`: `open`/`import` with cycle and depth guards
//! - `PrintHandlerImpl` / `InputHandlerImpl`: where output goes and where `i`
//!   reads from
//! - `CancelToken`: stops running loops and scripts from another thread
//!
//! Nothing a script does can fail a `Session` call. Each line's error becomes
//! one output line and one entry in [`Output::errors`].

mod cancel;
mod config;
mod environment;
pub mod error_code;
pub mod errors;
pub mod exec;
mod input_handler;
pub mod loader;
mod output;
mod print_handler;
mod session;
mod stack;

pub use cla_ir::{CompareOp, Value};

pub use cancel::CancelToken;
pub use config::{SessionConfig, DEFAULT_MAX_INCLUDE_DEPTH, DEFAULT_MAX_LOOP_ITERATIONS};
pub use environment::VariableStore;
pub use error_code::ErrorCode;
pub use errors::{EvalError, EvalResult};
pub use input_handler::{
    closed_input, scripted_input, stdin_input, InputHandlerImpl, ScriptedInputHandler,
    SharedInputHandler, StdinInputHandler,
};
pub use output::Output;
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl,
    SharedPrintHandler, StdoutPrintHandler,
};
pub use session::{Session, SessionBuilder};
pub use stack::ensure_sufficient_stack;
