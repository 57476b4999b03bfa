//! Command-line front end
//!
//! - [`config`]: global flags and command selection
//! - [`programs`]: one runner per exercise
//!
//! [`run`] dispatches a parsed [`Config`] to its runner with injectable input
//! and output streams, so every program can be driven from tests.

pub mod config;
pub mod programs;

pub use config::{help_text, Command, Config};

use crate::errors::{LabError, Result};
use std::io::{Read, Write};

/// Run the configured command.
///
/// `input` feeds commands that read stdin; `interactive` says whether it is a
/// terminal.
pub fn run(
    config: &Config,
    input: &mut dyn Read,
    interactive: bool,
    out: &mut dyn Write,
) -> Result<()> {
    let command = config
        .command
        .ok_or_else(|| LabError::invalid("no command given"))?;
    if config.verbose {
        eprintln!("Running {} with {} argument(s)", command.name(), config.args.len());
    }

    let args = &config.args;
    let res = match command {
        Command::Divide => programs::run_divide(args, out),
        Command::Middle => programs::run_middle(args, out),
        Command::Sum => programs::run_sum(args, out),
        Command::Wc => programs::run_wc(args, input, interactive, out),
        Command::SubSafe => programs::run_subsafe(args, out),
        Command::List => programs::run_list(args, out, config.verbose),
        Command::Bitmap => programs::run_bitmap(args, out, config.verbose),
    };

    out.flush()?;
    if config.verbose && res.is_ok() {
        eprintln!("{} completed successfully.", command.name());
    }
    res
}
