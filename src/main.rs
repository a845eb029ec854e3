//! idlc CLI - compilation driver for interface-definition sources
//!
//! Usage: idlc [OPTIONS] [FILE]
//!
//! Copies FILE (or stdin) to a temporary file, runs the preprocessor over it,
//! checks the result and removes every temporary file it created.

mod commands;

use clap::Parser;

use idlc::error::{IdlcError, FATAL_EXIT_CODE};
use idlc::presentation::{program_name, Cli};

fn main() {
    let program = program_name(std::env::args_os().next());
    let cli = Cli::parse();

    let code = match commands::compile::cmd_compile(&cli, &program) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{program}: {e:#}");
            e.downcast_ref::<IdlcError>()
                .map(IdlcError::exit_code)
                .unwrap_or(FATAL_EXIT_CODE)
        }
    };

    std::process::exit(code);
}
