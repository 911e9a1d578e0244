//! # Play Command
//!
//! Interactive blackjack table for human seats, optionally joined by bots.
//!
//! Humans are seated first, then bots. Before every human decision the table
//! is drawn (dealer hole card hidden, acting hand marked) and after every
//! round the settlement is printed. The session ends when the round limit is
//! reached, when nobody can afford the buy-in, or when a human quits.

use super::{load_config, resolve_decks, seat_seed};
use crate::config::Config;
use crate::error::CliError;
use crate::human::{Console, ConsoleRenderer, HumanStrategy, Leave, LeaveFlag};
use crate::ui::{self, format_coins};
use pitboss_ai::{StrategyParams, create_strategy};
use pitboss_engine::player::Player;
use pitboss_engine::shoe::Shoe;
use pitboss_engine::strategy::Strategy;
use pitboss_engine::table::{PlayerBalance, Table};
use std::collections::HashSet;
use std::io::{BufRead, Write};
use std::rc::Rc;

/// Table setup for one interactive session.
#[derive(Debug, Clone)]
pub struct PlayOptions {
    pub humans: u32,
    pub bots: u32,
    pub names: Vec<String>,
    pub rounds: Option<u32>,
    pub decks: Option<u32>,
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SessionEnd {
    RoundLimit,
    Broke,
    Left(Leave),
}

struct SessionSummary {
    rounds: u32,
    end: SessionEnd,
    balances: Vec<PlayerBalance>,
}

/// Handle the play command: interactive blackjack.
///
/// # Errors
///
/// * `CliError::InvalidInput` for an empty table, a zero round limit, too
///   many or duplicate names, or an out-of-range deck count
/// * `CliError::Config` when the layered configuration is invalid
/// * `CliError::Interrupted` when input ends before the session is over
pub fn handle_play_command(
    opts: PlayOptions,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let cfg = load_config(err)?;
    let decks = resolve_decks(opts.decks, &cfg, err)?;

    let seats = opts.humans as usize + opts.bots as usize;
    if seats == 0 {
        ui::write_error(err, "at least one human or bot is required")?;
        return Err(CliError::InvalidInput(
            "at least one human or bot is required".to_string(),
        ));
    }
    if opts.rounds == Some(0) {
        ui::write_error(err, "rounds must be >= 1")?;
        return Err(CliError::InvalidInput("rounds must be >= 1".to_string()));
    }
    let names = match seat_names(&opts.names, opts.humans, opts.bots) {
        Ok(names) => names,
        Err(msg) => {
            ui::write_error(err, &msg)?;
            return Err(CliError::InvalidInput(msg));
        }
    };

    let seed = opts.seed.or(cfg.seed).unwrap_or_else(rand::random);
    if opts.humans == 0 {
        ui::display_warning(err, "no human seats; the bots will play on their own")?;
    }
    writeln!(
        out,
        "play: humans={} bots={} decks={} seed={} buy-in={} (+{} per round)",
        opts.humans,
        opts.bots,
        decks,
        seed,
        format_coins(cfg.buy_in),
        format_coins(cfg.buy_in_step)
    )?;

    let summary = run_session(&opts, &names, decks, seed, &cfg, out, stdin)?;

    writeln!(out)?;
    match summary.end {
        SessionEnd::RoundLimit => writeln!(out, "Round limit reached.")?,
        SessionEnd::Broke => writeln!(out, "Nobody can afford the buy-in. Table closed.")?,
        SessionEnd::Left(_) => writeln!(out, "Player left the table.")?,
    }
    writeln!(out, "Rounds played: {}", summary.rounds)?;
    for b in &summary.balances {
        writeln!(out, "{}: {}", b.name, format_coins(b.balance))?;
    }

    if summary.end == SessionEnd::Left(Leave::InputClosed) {
        return Err(CliError::Interrupted("input closed".to_string()));
    }
    Ok(())
}

fn run_session(
    opts: &PlayOptions,
    names: &[String],
    decks: u32,
    seed: u64,
    cfg: &Config,
    out: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<SessionSummary, CliError> {
    let console = Console::shared(stdin, out);
    let leave: LeaveFlag = Rc::default();

    let mut table = Table::new(Box::new(Shoe::new(decks, true, seed)), cfg.table_rules())?;
    for (seat, name) in names.iter().enumerate() {
        let strategy: Box<dyn Strategy + '_> =
            if seat < opts.humans as usize {
                Box::new(HumanStrategy::new(
                    name.clone(),
                    Rc::clone(&console),
                    Rc::clone(&leave),
                ))
            } else {
                let params = StrategyParams {
                    decks,
                    seed: seat_seed(seed, seat),
                };
                create_strategy(&cfg.bot_strategy, params)?
            };
        table.seat(Player::new(name.clone(), cfg.starting_balance, strategy));
    }

    let mut renderer = ConsoleRenderer::new(Rc::clone(&console));
    let end = loop {
        if let Some(limit) = opts.rounds
            && table.rounds_played() >= limit
        {
            break SessionEnd::RoundLimit;
        }
        if !table.has_solvent_player() {
            break SessionEnd::Broke;
        }
        console
            .borrow_mut()
            .write_text(&format!("\n=== Round {} ===\n", table.rounds_played() + 1));
        table.play_round(&mut renderer)?;
        if let Some(e) = console.borrow_mut().take_error() {
            return Err(e.into());
        }
        if let Some(why) = leave.get() {
            break SessionEnd::Left(why);
        }
    };

    Ok(SessionSummary {
        rounds: table.rounds_played(),
        end,
        balances: table
            .players()
            .iter()
            .map(|p| PlayerBalance {
                name: p.name().to_string(),
                balance: p.balance(),
            })
            .collect(),
    })
}

/// Names for every seat: given names first, then `player-N` for humans and
/// `bot-N` for bots.
fn seat_names(given: &[String], humans: u32, bots: u32) -> Result<Vec<String>, String> {
    let total = humans as usize + bots as usize;
    if given.len() > total {
        return Err(format!(
            "{} names given for {} seats",
            given.len(),
            total
        ));
    }
    let mut names = Vec::with_capacity(total);
    for seat in 0..total {
        let name = match given.get(seat).map(|n| n.trim()) {
            Some(n) if !n.is_empty() => n.to_string(),
            _ if seat < humans as usize => format!("player-{}", seat + 1),
            _ => format!("bot-{}", seat + 1 - humans as usize),
        };
        names.push(name);
    }
    let mut seen = HashSet::new();
    if let Some(dup) = names.iter().find(|n| !seen.insert(n.as_str())) {
        return Err(format!("duplicate seat name: {}", dup));
    }
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_names_fill_the_gaps() {
        let names = seat_names(&["ann".to_string()], 2, 2).unwrap();
        assert_eq!(names, ["ann", "player-2", "bot-1", "bot-2"]);
    }

    #[test]
    fn too_many_or_duplicate_names_are_rejected() {
        let given: Vec<String> = ["a", "b", "c"].iter().map(|s| s.to_string()).collect();
        assert!(seat_names(&given, 1, 1).is_err());
        let given: Vec<String> = ["a", "a"].iter().map(|s| s.to_string()).collect();
        let msg = seat_names(&given, 2, 0).unwrap_err();
        assert!(msg.contains("duplicate"));
    }

    #[test]
    fn a_given_name_can_collide_with_a_default() {
        let given = vec!["bot-1".to_string()];
        assert!(seat_names(&given, 1, 1).is_err());
    }
}
