//! tutsh CLI entry point.
//!
//! Usage:
//!   tutsh                      # Interactive REPL
//!   tutsh -c <command>         # Execute one command line and exit

use std::env;
use std::process::ExitCode;

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use tutsh_kernel::{Kernel, KernelConfig};

fn main() -> ExitCode {
    // Initialize tracing (respects RUST_LOG env var)
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:?}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode> {
    let args: Vec<String> = env::args().collect();

    match args.get(1).map(|s| s.as_str()) {
        None => {
            tutsh_repl::run()?;
            Ok(ExitCode::SUCCESS)
        }

        Some("--help" | "-h") => {
            print_help();
            Ok(ExitCode::SUCCESS)
        }

        Some("--version" | "-V") => {
            println!("tutsh {}", env!("CARGO_PKG_VERSION"));
            Ok(ExitCode::SUCCESS)
        }

        Some("-c") => {
            let cmd = args.get(2).context("-c requires a command argument")?;
            run_command(cmd)
        }

        Some(unknown) => {
            eprintln!("Unknown option: {unknown}");
            eprintln!("Run 'tutsh --help' for usage.");
            Ok(ExitCode::FAILURE)
        }
    }
}

fn print_help() {
    println!(
        r#"tutsh v{}

A teaching shell over an in-memory home directory.

Usage:
  tutsh                        Interactive REPL
  tutsh -c <command>           Execute one command line against a fresh tree

Options:
  -c <command>                 Execute command string and exit
  -h, --help                   Show this help
  -V, --version                Show version

Examples:
  tutsh                        # Start interactive REPL
  tutsh -c 'ls -l documents'   # List the seeded documents folder
"#,
        env!("CARGO_PKG_VERSION")
    );
}

/// Execute a command line and exit with its status.
fn run_command(cmd: &str) -> Result<ExitCode> {
    let mut kernel = Kernel::new(KernelConfig::repl()).context("Failed to create kernel")?;
    let result = kernel.execute(cmd);

    if !result.out.is_empty() {
        println!("{}", result.out);
    }
    if !result.err.is_empty() {
        eprintln!("{}", result.err);
    }

    if result.ok() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(u8::try_from(result.code).unwrap_or(1)))
    }
}
