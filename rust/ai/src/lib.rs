//! # pitboss-ai: Automated Blackjack Players
//!
//! Decision policies for bots seated at a [`pitboss_engine::table::Table`].
//! Every policy implements [`pitboss_engine::strategy::Strategy`] and is
//! reachable by id through a static registry.
//!
//! ## Core Components
//!
//! - [`registry`] - The id → factory table
//! - [`create_strategy`] - Build a policy by id
//! - [`basic`] - Chart-driven basic strategy (1, 2 or 3+ deck charts)
//! - [`counting`] - Hi-Lo counting with a pack tracker and index plays
//! - [`simple`] - Dealer mimic and a cautious baseline
//!
//! ## Quick Start
//!
//! ```rust
//! use pitboss_ai::{create_strategy, StrategyParams};
//! use pitboss_engine::player::Player;
//! use pitboss_engine::shoe::Shoe;
//! use pitboss_engine::table::{NoopObserver, Table, TableRules};
//!
//! let params = StrategyParams { decks: 6, seed: 42 };
//! let bot = create_strategy("hilo", params).unwrap();
//!
//! let mut table = Table::new(Box::new(Shoe::new(6, true, 42)), TableRules::default()).unwrap();
//! table.seat(Player::new("bot", 200.0, bot));
//! table.play_round(&mut NoopObserver).unwrap();
//! ```
//!
//! ## Strategy Ids
//!
//! - `"basic"` - basic strategy chart for the table's deck count
//! - `"hilo"` - basic strategy plus Hi-Lo index plays
//! - `"dealer"` - plays like the dealer
//! - `"cautious"` - hits only on 11 or less

use pitboss_engine::strategy::Strategy;
use thiserror::Error;

pub mod basic;
pub mod counting;
pub mod simple;
pub mod tables;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AiError {
    #[error("Unknown strategy: {0}")]
    UnknownStrategy(String),
}

/// Construction parameters shared by every strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrategyParams {
    /// Decks in the shoe the strategy will play against.
    pub decks: u32,
    /// Seed for any randomness the strategy uses.
    pub seed: u64,
}

impl Default for StrategyParams {
    fn default() -> Self {
        Self { decks: 6, seed: 0 }
    }
}

pub type StrategyFactory = fn(StrategyParams) -> Box<dyn Strategy>;

/// One registered strategy.
#[derive(Clone, Copy)]
pub struct StrategyEntry {
    pub id: &'static str,
    pub description: &'static str,
    pub factory: StrategyFactory,
}

impl std::fmt::Debug for StrategyEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StrategyEntry")
            .field("id", &self.id)
            .field("description", &self.description)
            .finish()
    }
}

fn make_basic(p: StrategyParams) -> Box<dyn Strategy> {
    Box::new(basic::BasicStrategy::new(p.seed))
}

fn make_hilo(p: StrategyParams) -> Box<dyn Strategy> {
    Box::new(counting::HiLoStrategy::new(p.decks, p.seed))
}

fn make_dealer(_: StrategyParams) -> Box<dyn Strategy> {
    Box::new(simple::DealerMimic::new())
}

fn make_cautious(_: StrategyParams) -> Box<dyn Strategy> {
    Box::new(simple::Cautious::new())
}

static REGISTRY: &[StrategyEntry] = &[
    StrategyEntry {
        id: "basic",
        description: "Basic strategy chart for the table's deck count",
        factory: make_basic,
    },
    StrategyEntry {
        id: "hilo",
        description: "Basic strategy with Hi-Lo card counting index plays",
        factory: make_hilo,
    },
    StrategyEntry {
        id: "dealer",
        description: "Draws to 17 and hits soft 17, like the house",
        factory: make_dealer,
    },
    StrategyEntry {
        id: "cautious",
        description: "Hits only while a bust is impossible",
        factory: make_cautious,
    },
];

/// Every registered strategy, in display order.
pub fn registry() -> &'static [StrategyEntry] {
    REGISTRY
}

pub fn strategy_ids() -> Vec<&'static str> {
    REGISTRY.iter().map(|e| e.id).collect()
}

pub fn is_registered(id: &str) -> bool {
    REGISTRY.iter().any(|e| e.id == id)
}

/// Factory function to create a strategy by id.
///
/// # Errors
///
/// [`AiError::UnknownStrategy`] if no strategy is registered under `id`.
///
/// # Example
///
/// ```rust
/// use pitboss_ai::{create_strategy, AiError, StrategyParams};
///
/// let s = create_strategy("basic", StrategyParams::default()).unwrap();
/// assert_eq!(s.name(), "basic");
///
/// let err = create_strategy("martingale", StrategyParams::default()).err();
/// assert_eq!(err, Some(AiError::UnknownStrategy("martingale".to_string())));
/// ```
pub fn create_strategy(id: &str, params: StrategyParams) -> Result<Box<dyn Strategy>, AiError> {
    REGISTRY
        .iter()
        .find(|e| e.id == id)
        .map(|e| (e.factory)(params))
        .ok_or_else(|| AiError::UnknownStrategy(id.to_string()))
}
