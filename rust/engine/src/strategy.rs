use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::hand::Hand;
use crate::player::Coins;

/// A decision a player can make on one of their hands.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Take one more card
    Hit,
    /// Keep the hand as it is
    Stand,
    /// Pay another buy-in, take exactly one card, end the turn
    DoubleDown,
    /// Pay another buy-in and split a pair into two hands
    Split,
    /// Give up the hand for half the buy-in back
    Surrender,
}

/// What a policy may see of the table when it is asked for a move.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TableView {
    /// The dealer's face-up card, if one has been dealt.
    pub dealer_up: Option<Card>,
    pub buy_in: Coins,
    pub balance: Coins,
    pub decks: u32,
    /// Which of the player's hands is acting.
    pub hand_index: usize,
}

/// A decision policy: human input, a strategy chart, a card counter.
///
/// The engine calls [`Strategy::on_card_drawn`] for every card that leaves the
/// shoe, including the dealer's hole card (passed with `face_down` set), and
/// [`Strategy::on_round_end`] once the player's hands for the round are done.
pub trait Strategy {
    fn play_move(&mut self, hand: &Hand, view: &TableView) -> Move;

    fn on_card_drawn(&mut self, _card: &Card) {}

    fn on_round_end(&mut self) {}

    fn name(&self) -> &str;
}

/// Always returns the same move. Handy for tests and for a player who only stands.
#[derive(Debug, Clone)]
pub struct FixedStrategy {
    mv: Move,
}

impl FixedStrategy {
    pub fn new(mv: Move) -> Self {
        Self { mv }
    }
}

impl Strategy for FixedStrategy {
    fn play_move(&mut self, _hand: &Hand, _view: &TableView) -> Move {
        self.mv
    }

    fn name(&self) -> &str {
        "fixed"
    }
}
