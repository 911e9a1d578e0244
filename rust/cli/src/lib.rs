//! # Pitboss CLI Library
//!
//! Command-line front end for the Pitboss blackjack engine: an interactive
//! table for human players, bots-only simulation, and configuration tooling.
//!
//! ## Main Entry Point
//!
//! [`run`] parses command-line arguments and executes the matching
//! subcommand, writing to the given streams and returning the exit code.
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::io;
//! let args = vec!["pitboss", "sim", "--strategy", "basic,hilo", "--rounds", "50"];
//! let code = pitboss_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Sit at a table with human and bot seats
//! - `sim`: Run a bots-only table and report final balances
//! - `strategies`: List the bot strategies
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::Write;
pub mod cli;
pub mod commands;
mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod human;
pub mod io_utils;
pub mod logging;
pub mod ui;
pub mod validation;

use cli::{Commands, PitbossCli};
use commands::play::PlayOptions;
use commands::sim::SimOptions;
use commands::{
    handle_cfg_command, handle_play_command, handle_sim_command, handle_strategies_command,
};

pub use error::CliError;

/// Main entry point for the CLI application.
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors, `130` when a session was cut
/// short by closed input
///
/// # Example
///
/// ```
/// use std::io;
/// let args = vec!["pitboss", "strategies"];
/// let code = pitboss_cli::run(args, &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    const COMMANDS: &[&str] = &["play", "sim", "strategies", "cfg"];
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let parsed = PitbossCli::try_parse_from(&argv);
    match parsed {
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    if writeln!(err, "{}", e).is_err()
                        || writeln!(err).is_err()
                        || writeln!(err, "Pitboss Blackjack CLI").is_err()
                        || writeln!(err, "Usage: pitboss <command> [options]\n").is_err()
                        || writeln!(err, "Commands:").is_err()
                    {
                        return exit_code::ERROR;
                    }
                    for c in COMMANDS {
                        if writeln!(err, "  {}", c).is_err() {
                            return exit_code::ERROR;
                        }
                    }
                    if writeln!(err, "\nFor full help, run: pitboss --help").is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::ERROR
                }
            }
        }
        Ok(cli) => {
            let command = cli.cmd.name();
            tracing::debug!(command, "dispatch");
            let result = match cli.cmd {
                Commands::Play {
                    humans,
                    bots,
                    names,
                    rounds,
                    decks,
                    seed,
                } => {
                    let opts = PlayOptions {
                        humans,
                        bots,
                        names,
                        rounds,
                        decks,
                        seed,
                    };
                    let stdin = std::io::stdin();
                    let mut stdin_lock = stdin.lock();
                    handle_play_command(opts, out, err, &mut stdin_lock)
                }
                Commands::Sim {
                    bots,
                    strategy,
                    rounds,
                    decks,
                    seed,
                    output,
                } => {
                    let opts = SimOptions {
                        bots,
                        strategies: strategy,
                        rounds,
                        decks,
                        seed,
                        output,
                    };
                    handle_sim_command(opts, out, err)
                }
                Commands::Strategies => handle_strategies_command(out),
                Commands::Cfg => handle_cfg_command(out, err),
            };
            finish(command, result, err)
        }
    }
}

/// Runs `play` against an arbitrary input stream instead of stdin.
///
/// Used by tests and by front ends that script the human seats.
pub fn run_play_with_input(
    opts: PlayOptions,
    input: &mut dyn std::io::BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> i32 {
    let result = handle_play_command(opts, out, err, input);
    finish("play", result, err)
}

fn finish(command: &str, result: Result<(), CliError>, err: &mut dyn Write) -> i32 {
    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            tracing::debug!(command, error = %e, "command failed");
            if writeln!(err, "Error: {}", e).is_err() {
                return exit_code::ERROR;
            }
            match e {
                CliError::Interrupted(_) => exit_code::INTERRUPTED,
                _ => exit_code::ERROR,
            }
        }
    }
}
