//! CLI binary for `todos`.
//!
//! This binary is a thin wrapper that parses arguments and delegates to the
//! library.

use clap::Parser;
use std::process::ExitCode;
use todos::cli::{self, Cli};

fn main() -> ExitCode {
    let cli = Cli::parse();
    let store_path = cli::resolve_store_path(cli.store);

    let output = cli::run(cli.command, &store_path);

    for line in &output.stdout {
        println!("{line}");
    }
    for line in &output.stderr {
        eprintln!("{line}");
    }

    output.exit_code
}
