//! Cla CLI
//!
//! Runs `.cla` scripts, checks them, or starts the interactive console.

use clac::commands::{check_file, config_from_env, run_file, run_repl};

fn main() {
    clac::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    let config = match config_from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    let Some(command) = args.get(1) else {
        repl(config);
        return;
    };

    match command.as_str() {
        "run" => {
            if args.len() < 3 {
                eprintln!("Usage: cla run <file.cla>");
                std::process::exit(1);
            }
            if !run_file(&args[2], config).is_ok() {
                std::process::exit(1);
            }
        }
        "check" => {
            if args.len() < 3 {
                eprintln!("Usage: cla check <file.cla>");
                std::process::exit(1);
            }
            if !check_file(&args[2]) {
                std::process::exit(1);
            }
        }
        "repl" => repl(config),
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("cla {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            // A bare script path runs it
            if cla_ir::has_script_extension(command) {
                if !run_file(command, config).is_ok() {
                    std::process::exit(1);
                }
            } else {
                eprintln!("Unknown command: {command}");
                eprintln!();
                print_usage();
                std::process::exit(1);
            }
        }
    }
}

fn repl(config: cla_eval::SessionConfig) {
    if let Err(e) = run_repl(config) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn print_usage() {
    println!("cla - line interpreter for .cla scripts");
    println!();
    println!("Usage: cla [command] [options]");
    println!();
    println!("Commands:");
    println!("  run <file.cla>     Execute a script");
    println!("  check <file.cla>   Parse a script without executing it");
    println!("  repl               Interactive console (default)");
    println!("  help               Show this help message");
    println!("  version            Show version information");
    println!();
    println!("Environment:");
    println!("  CLA_MAX_LOOP_ITERATIONS   Iteration limit per while loop, or 'none' (default 1000000)");
    println!("  CLA_ECHO                  Echo script lines before running them: 1/0 (default 1)");
    println!("  RUST_LOG                  Enable tracing output, e.g. RUST_LOG=cla_eval=debug");
    println!();
    println!("Examples:");
    println!("  cla run main.cla");
    println!("  cla main.cla");
    println!("  CLA_ECHO=0 cla run main.cla");
    println!("  cla check lib.cla");
}
