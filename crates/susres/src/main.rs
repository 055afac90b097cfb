//! susres
//!
//! Suspends or resumes all threads of a running process, or reports whether
//! it is fully suspended. Stands in for `kill -STOP` / `kill -CONT` on
//! Windows.
//!
//! ```text
//! susres suspend <pid>
//! susres resume  <pid>
//! susres status  <pid>    # prints T (suspended) or R (running)
//! ```

use clap::{Parser, Subcommand};
use std::process::ExitCode;
use susres_common::{init_cli_logging, Error, Result};
use susres_core::{Outcome, Verb};
use tracing::debug;

const USAGE: &str = "\
Usage: susres suspend [pid]
       susres resume  [pid]
       susres status  [pid]";

#[derive(Parser, Debug)]
#[command(name = "susres")]
#[command(disable_help_flag = true, disable_version_flag = true)]
#[command(disable_help_subcommand = true)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    /// Suspend every thread of the process
    Suspend { pid: i64 },

    /// Resume every thread of the process
    Resume { pid: i64 },

    /// Print T if every thread is suspended, R otherwise
    Status { pid: i64 },
}

impl Command {
    fn verb(self) -> Verb {
        match self {
            Command::Suspend { .. } => Verb::Suspend,
            Command::Resume { .. } => Verb::Resume,
            Command::Status { .. } => Verb::Status,
        }
    }

    /// Process identifiers are 32-bit on Windows
    fn pid(self) -> Result<u32> {
        let (Command::Suspend { pid } | Command::Resume { pid } | Command::Status { pid }) = self;
        u32::try_from(pid).map_err(|_| Error::BadUsage(format!("Invalid pid: {}", pid)))
    }
}

fn main() -> ExitCode {
    init_cli_logging();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            debug!(kind = ?e.kind(), "rejected command line");
            println!("{}", USAGE);
            return ExitCode::from(1);
        }
    };

    match run(args.command) {
        Ok(Outcome::Status(status)) => {
            println!("{}", status);
            ExitCode::SUCCESS
        }
        Ok(Outcome::Applied) => ExitCode::SUCCESS,
        Err(e) => {
            println!("{}", e);
            ExitCode::from(e.exit_code())
        }
    }
}

fn run(command: Command) -> Result<Outcome> {
    let pid = command.pid()?;
    execute(command.verb(), pid)
}

#[cfg(windows)]
fn execute(verb: Verb, pid: u32) -> Result<Outcome> {
    susres_core::execute(&susres_core::Win32Api::new(), verb, pid)
}

#[cfg(not(windows))]
fn execute(_verb: Verb, _pid: u32) -> Result<Outcome> {
    Err(Error::Unsupported(format!(
        "susres requires Windows, this build targets {}",
        std::env::consts::OS
    )))
}
