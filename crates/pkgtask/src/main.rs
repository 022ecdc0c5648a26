//! pkgtask - package.json script tasks for an orchestrator.
//!
//! Binary entry point: argument parsing, process-state wiring, exit codes.

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use pkgtask::{describe, run, EXIT_FAILURE, EXIT_FATAL, EXIT_OK};
use pkgtask_core::{PathProbe, CWD_ENV_VAR};
use std::io::Read;
use tracing::error;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "pkgtask", about = "Expose package.json scripts as orchestrator tasks", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the task catalog as one line of JSON
    Describe,
    /// Execute one named script via the selected package manager
    Run {
        /// Script name as declared in the manifest's scripts field
        task: String,
    },
}

fn main() {
    // Diagnostics go to stderr; stdout carries only the describe payload.
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    // The argument-count check happens before any manifest lookup: a bad
    // command line never reaches the filesystem.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = err.print();
            std::process::exit(EXIT_OK);
        }
        Err(_) => {
            eprintln!("usage: pkgtask describe|run <task>");
            eprintln!("  describe prints the task catalog; run executes one script");
            std::process::exit(EXIT_FAILURE);
        }
    };

    let result = match cli.command {
        Command::Describe => cmd_describe(),
        Command::Run { task } => cmd_run(&task),
    };

    match result {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            error!("{err:#}");
            std::process::exit(EXIT_FATAL);
        }
    }
}

fn cmd_describe() -> eyre::Result<i32> {
    let cwd = std::env::current_dir()?;
    let mut stdout = std::io::stdout().lock();
    describe::describe(&cwd, &mut stdout)?;
    Ok(EXIT_OK)
}

fn cmd_run(task: &str) -> eyre::Result<i32> {
    let mut raw = String::new();
    std::io::stdin().read_to_string(&mut raw)?;

    let process_cwd = std::env::current_dir()?;
    let env_cwd = std::env::var_os(CWD_ENV_VAR);
    let probe = PathProbe::from_env();
    run::run_task(task, &raw, env_cwd.as_deref(), &process_cwd, &probe)
}
