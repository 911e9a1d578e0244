//! Command handler modules for the Pitboss CLI.
//!
//! Each subcommand lives in its own module file with a consistent pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Module-private helpers: Helper functions specific to that command
//! - Dependency injection: Output streams (`&mut dyn Write`) passed as parameters
//! - Error propagation: All errors propagated via `CliError` enum
//!
//! # Example
//!
//! ```rust,ignore
//! use pitboss_cli::commands::handle_cfg_command;
//! use std::io;
//!
//! let mut out = io::stdout();
//! let mut err = io::stderr();
//! handle_cfg_command(&mut out, &mut err).expect("Command failed");
//! ```

pub mod cfg;
pub mod play;
pub mod sim;
pub mod strategies;

pub use cfg::handle_cfg_command;
pub use play::handle_play_command;
pub use sim::handle_sim_command;
pub use strategies::handle_strategies_command;

use crate::config::{self, Config};
use crate::error::CliError;
use crate::ui;
use std::io::Write;

/// Loads the layered configuration, reporting failures the way every command does.
pub(crate) fn load_config(err: &mut dyn Write) -> Result<Config, CliError> {
    match config::load() {
        Ok(cfg) => Ok(cfg),
        Err(e) => {
            ui::write_error(err, &format!("Invalid configuration: {}", e))?;
            Err(CliError::Config(format!("Invalid configuration: {}", e)))
        }
    }
}

/// `--decks` overrides the configured deck count and must stay in range.
pub(crate) fn resolve_decks(
    flag: Option<u32>,
    cfg: &Config,
    err: &mut dyn Write,
) -> Result<u32, CliError> {
    let decks = flag.unwrap_or(cfg.decks);
    if let Err(e) = config::validate_decks(decks) {
        ui::write_error(err, &e.to_string())?;
        return Err(CliError::InvalidInput(e.to_string()));
    }
    Ok(decks)
}

/// Seed for the strategy at `seat`, derived from the session seed.
pub(crate) fn seat_seed(seed: u64, seat: usize) -> u64 {
    seed.wrapping_add(seat as u64 + 1)
}
