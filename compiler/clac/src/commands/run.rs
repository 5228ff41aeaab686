//! The `run` command: execute a script file against a fresh session.

use cla_eval::{Output, Session, SessionConfig};

/// Run the script at `path`, streaming its output to stdout.
pub fn run_file(path: &str, config: SessionConfig) -> Output {
    let mut session = Session::builder().config(config).build();
    session.execute_file(path)
}
