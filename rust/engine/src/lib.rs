//! # pitboss-engine: Blackjack Round Engine
//!
//! A deterministic multi-player blackjack table. Players buy in, receive two
//! cards each, play their hands through a pluggable decision policy, and are
//! settled against a dealer who draws to 17 (hitting soft 17). The buy-in
//! rises by a fixed step after every round.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and deck construction
//! - [`shoe`] - Multi-deck shoe with seeded ChaCha20 shuffle and the `CardSource` seam
//! - [`hand`] - Hand scoring, blackjack/soft/split checks
//! - [`player`] - Balance, hands and the player's decision policy
//! - [`strategy`] - The `Strategy` trait, `Move` and `TableView`
//! - [`game`] - Round phases
//! - [`rules`] - Settlement and dealer drawing rules
//! - [`table`] - Round engine orchestration and round reports
//! - [`logger`] - JSONL round records
//! - [`errors`] - Error types for table operations
//!
//! ## Quick Start
//!
//! ```rust
//! use pitboss_engine::player::{Player, STARTING_BALANCE};
//! use pitboss_engine::shoe::Shoe;
//! use pitboss_engine::strategy::{FixedStrategy, Move};
//! use pitboss_engine::table::{NoopObserver, Table, TableRules};
//!
//! let shoe = Shoe::new(6, true, 7);
//! let mut table = Table::new(Box::new(shoe), TableRules::default()).unwrap();
//! table.seat(Player::new("ann", STARTING_BALANCE, Box::new(FixedStrategy::new(Move::Stand))));
//! table.seat(Player::new("bob", STARTING_BALANCE, Box::new(FixedStrategy::new(Move::Hit))));
//!
//! let report = table.play_round(&mut NoopObserver).unwrap();
//! for result in &report.results {
//!     println!("{} {} -> {:?} ({})", result.player, result.hand, result.outcome, result.payout);
//! }
//! ```
//!
//! ## Hand Scoring
//!
//! ```rust
//! use pitboss_engine::cards::{Card, Rank, Suit};
//! use pitboss_engine::hand::Hand;
//!
//! let hand = Hand::from_cards(vec![
//!     Card::new(Rank::Ace, Suit::Hearts),
//!     Card::new(Rank::Ace, Suit::Clubs),
//!     Card::new(Rank::Nine, Suit::Spades),
//! ]);
//! assert_eq!(hand.score(), 21);
//! assert!(hand.is_soft());
//! assert!(!hand.is_blackjack());
//! ```

pub mod cards;
pub mod errors;
pub mod game;
pub mod hand;
pub mod logger;
pub mod player;
pub mod rules;
pub mod shoe;
pub mod strategy;
pub mod table;
