//! Simulation command handler: bots-only sessions.
//!
//! Seats a number of bots, plays rounds until the limit or until nobody can
//! afford the buy-in, and prints the final balances. With `--output` every
//! round is appended to a JSONL file through the engine's
//! [`RoundLogger`](pitboss_engine::logger::RoundLogger).
//!
//! # Examples
//!
//! ```no_run
//! use pitboss_cli::commands::sim::{handle_sim_command, SimOptions};
//! use std::io;
//!
//! let opts = SimOptions {
//!     bots: Some(3),
//!     strategies: vec!["basic".into(), "hilo".into()],
//!     rounds: 500,
//!     decks: Some(6),
//!     seed: Some(42),
//!     output: Some("data/rounds.jsonl".into()),
//! };
//! handle_sim_command(opts, &mut io::stdout(), &mut io::stderr()).unwrap();
//! ```

use super::{load_config, resolve_decks, seat_seed};
use crate::error::CliError;
use crate::ui::{self, format_coins};
use pitboss_ai::{StrategyParams, create_strategy, is_registered};
use pitboss_engine::logger::RoundLogger;
use pitboss_engine::player::Player;
use pitboss_engine::shoe::Shoe;
use pitboss_engine::table::{NoopObserver, Table};
use std::io::Write;

#[derive(Debug, Clone)]
pub struct SimOptions {
    /// Defaults to one bot per strategy, or one bot.
    pub bots: Option<u32>,
    /// Assigned to bots round-robin. Empty means the configured strategy.
    pub strategies: Vec<String>,
    pub rounds: u32,
    pub decks: Option<u32>,
    pub seed: Option<u64>,
    pub output: Option<String>,
}

/// Handle the sim command.
///
/// # Errors
///
/// * `CliError::InvalidInput` for zero bots, zero rounds, an unknown strategy
///   id, or an out-of-range deck count
/// * `CliError::Io` when the round log cannot be created or written
pub fn handle_sim_command(
    opts: SimOptions,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let cfg = load_config(err)?;
    let decks = resolve_decks(opts.decks, &cfg, err)?;

    if opts.rounds == 0 {
        ui::write_error(err, "rounds must be >= 1")?;
        return Err(CliError::InvalidInput("rounds must be >= 1".to_string()));
    }
    let strategies = if opts.strategies.is_empty() {
        vec![cfg.bot_strategy.clone()]
    } else {
        opts.strategies.clone()
    };
    if let Some(unknown) = strategies.iter().find(|id| !is_registered(id)) {
        let msg = format!(
            "unknown strategy '{}' (known: {})",
            unknown,
            pitboss_ai::strategy_ids().join(", ")
        );
        ui::write_error(err, &msg)?;
        return Err(CliError::InvalidInput(msg));
    }
    let bots = opts.bots.unwrap_or(strategies.len() as u32);
    if bots == 0 {
        ui::write_error(err, "bots must be >= 1")?;
        return Err(CliError::InvalidInput("bots must be >= 1".to_string()));
    }

    let seed = opts.seed.or(cfg.seed).unwrap_or_else(rand::random);
    let mut logger = match opts.output.as_deref().map(RoundLogger::create).transpose() {
        Ok(logger) => logger,
        Err(e) => {
            ui::write_error(err, &format!("Failed to create round log: {}", e))?;
            return Err(CliError::Io(e));
        }
    };

    writeln!(
        out,
        "sim: bots={} strategies={} rounds={} decks={} seed={}",
        bots,
        strategies.join(","),
        opts.rounds,
        decks,
        seed
    )?;

    let mut table = Table::new(Box::new(Shoe::new(decks, true, seed)), cfg.table_rules())?;
    for seat in 0..bots as usize {
        let id = &strategies[seat % strategies.len()];
        let params = StrategyParams {
            decks,
            seed: seat_seed(seed, seat),
        };
        let strategy = create_strategy(id, params)?;
        let name = format!("bot-{}-{}", seat + 1, id);
        table.seat(Player::new(name, cfg.starting_balance, strategy));
    }

    let mut broke = false;
    while table.rounds_played() < opts.rounds {
        if !table.has_solvent_player() {
            broke = true;
            break;
        }
        let report = table.play_round(&mut NoopObserver)?;
        if let Some(logger) = logger.as_mut() {
            logger.log_report(Some(seed), &report)?;
        }
    }

    writeln!(out, "Rounds played: {}", table.rounds_played())?;
    if broke {
        writeln!(
            out,
            "Nobody can afford the buy-in of {}. Table closed.",
            format_coins(table.buy_in())
        )?;
    }
    for player in table.players() {
        writeln!(out, "{}: {}", player.name(), format_coins(player.balance()))?;
    }
    if let Some(path) = &opts.output {
        writeln!(out, "Round log: {}", path)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts(rounds: u32) -> SimOptions {
        SimOptions {
            bots: Some(2),
            strategies: vec!["dealer".into()],
            rounds,
            decks: Some(1),
            seed: Some(5),
            output: None,
        }
    }

    #[test]
    fn zero_rounds_is_rejected() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let res = handle_sim_command(opts(0), &mut out, &mut err);
        assert!(matches!(res, Err(CliError::InvalidInput(_))));
        assert!(String::from_utf8_lossy(&err).contains("rounds must be >= 1"));
    }

    #[test]
    fn unknown_strategy_lists_the_known_ones() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut o = opts(3);
        o.strategies = vec!["basic".into(), "martingale".into()];
        let res = handle_sim_command(o, &mut out, &mut err);
        assert!(matches!(res, Err(CliError::InvalidInput(_))));
        let stderr = String::from_utf8_lossy(&err);
        assert!(stderr.contains("martingale"));
        assert!(stderr.contains("hilo"));
    }
}
