//! The interactive console: one line in, its output out.

use std::io::{self, BufRead, Write};

use cla_eval::{Session, SessionConfig};

/// Read lines from stdin and execute them until end of input.
///
/// `i` reads from the same stdin, so a prompt and an input request simply
/// take turns.
pub fn run_repl(config: SessionConfig) -> io::Result<()> {
    let mut session = Session::builder().config(config).build();
    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("> ");
        io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            println!();
            println!("Exiting...");
            return Ok(());
        }
        session.execute_line(&line);
    }
}
