//! Hi-Lo card counting on top of the basic chart.

use pitboss_engine::cards::{Card, DECK_SIZE, Rank, multi_deck};
use pitboss_engine::hand::Hand;
use pitboss_engine::strategy::{Move, Strategy, TableView};

use crate::basic::{BasicStrategy, dealer_bucket};

/// The counter's model of which cards are still in the shoe.
///
/// Each drawn card is struck from the model. A card the model no longer holds
/// means the table has replenished its shoe, so the model starts over from a
/// full pack.
#[derive(Debug, Clone)]
pub struct PackTracker {
    decks: u32,
    remaining: Vec<Card>,
}

impl PackTracker {
    pub fn new(decks: u32) -> Self {
        Self {
            decks,
            remaining: multi_deck(decks),
        }
    }

    pub fn decks(&self) -> u32 {
        self.decks
    }

    pub fn remaining(&self) -> usize {
        self.remaining.len()
    }

    pub fn reset(&mut self, decks: u32) {
        self.decks = decks;
        self.remaining = multi_deck(decks);
    }

    /// Strikes `card` from the model. Returns `true` when the model had to be
    /// regenerated first.
    pub fn observe(&mut self, card: &Card) -> bool {
        if let Some(pos) = self.remaining.iter().position(|c| c == card) {
            self.remaining.swap_remove(pos);
            return false;
        }
        self.remaining = multi_deck(self.decks);
        if let Some(pos) = self.remaining.iter().position(|c| c == card) {
            self.remaining.swap_remove(pos);
        }
        true
    }
}

/// Hi-Lo tag: +1 for two through six, -1 for tens and aces, 0 otherwise.
pub fn hilo_value(rank: Rank) -> i32 {
    match rank {
        Rank::Two | Rank::Three | Rank::Four | Rank::Five | Rank::Six => 1,
        r if r.is_ten_value() || r.is_ace() => -1,
        _ => 0,
    }
}

/// Basic strategy with the common Hi-Lo index plays.
///
/// The counter sees every card the table deals, the dealer's hole card
/// included.
#[derive(Debug, Clone)]
pub struct HiLoStrategy {
    basic: BasicStrategy,
    pack: PackTracker,
    running: i32,
}

impl HiLoStrategy {
    pub fn new(decks: u32, seed: u64) -> Self {
        Self {
            basic: BasicStrategy::new(seed),
            pack: PackTracker::new(decks.max(1)),
            running: 0,
        }
    }

    pub fn running_count(&self) -> i32 {
        self.running
    }

    /// Running count per deck still to be dealt.
    pub fn true_count(&self) -> f64 {
        let decks_left = self.pack.remaining() as f64 / DECK_SIZE as f64;
        if decks_left <= 0.0 {
            return self.running as f64;
        }
        self.running as f64 / decks_left
    }

    pub fn pack(&self) -> &PackTracker {
        &self.pack
    }

    fn deviation(&self, hand: &Hand, bucket: usize) -> Option<Move> {
        if hand.is_soft() || hand.can_split() {
            return None;
        }
        let tc = self.true_count();
        let two_cards = hand.len() == 2;
        let ten = 8;
        let ace = 9;
        match (hand.score(), bucket) {
            (16, b) if b == ten && tc >= 0.0 => Some(Move::Stand),
            (15, b) if b == ten && tc >= 4.0 => Some(Move::Stand),
            (13, 0) if tc <= -1.0 => Some(Move::Hit),
            (12, 1) if tc >= 2.0 => Some(Move::Stand),
            (12, 0) if tc >= 3.0 => Some(Move::Stand),
            (11, b) if b == ace && two_cards && tc >= 1.0 => Some(Move::DoubleDown),
            (10, b) if b == ten && two_cards && tc >= 4.0 => Some(Move::DoubleDown),
            (9, 0) if two_cards && tc >= 1.0 => Some(Move::DoubleDown),
            _ => None,
        }
    }
}

impl Strategy for HiLoStrategy {
    fn play_move(&mut self, hand: &Hand, view: &TableView) -> Move {
        if view.decks != self.pack.decks() {
            self.pack.reset(view.decks.max(1));
            self.running = 0;
        }
        match self.deviation(hand, dealer_bucket(view.dealer_up)) {
            Some(mv) => {
                tracing::debug!(true_count = self.true_count(), ?mv, "index play");
                mv
            }
            None => self.basic.decide(hand, view),
        }
    }

    fn on_card_drawn(&mut self, card: &Card) {
        if self.pack.observe(card) {
            self.running = 0;
        }
        self.running += hilo_value(card.rank);
    }

    fn name(&self) -> &str {
        "hilo"
    }
}
