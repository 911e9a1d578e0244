use serde::{Deserialize, Serialize};

use crate::hand::Hand;
use crate::player::Coins;

/// Stages of a round, in the order they run.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Phase {
    /// Players who can afford it pay the buy-in
    BuyIn,
    /// Two passes of cards, dealer's first card face-down
    InitialDeal,
    /// Each active player plays each of their hands
    PlayerTurns,
    /// Hole card revealed, dealer draws to 17
    DealerTurn,
    /// Hands paid out, buy-in raised
    Settlement,
    /// Round state discarded
    Done,
}

impl Phase {
    pub fn next(self) -> Phase {
        match self {
            Phase::BuyIn => Phase::InitialDeal,
            Phase::InitialDeal => Phase::PlayerTurns,
            Phase::PlayerTurns => Phase::DealerTurn,
            Phase::DealerTurn => Phase::Settlement,
            Phase::Settlement | Phase::Done => Phase::Done,
        }
    }
}

/// State that lives only for one round.
#[derive(Debug, Clone)]
pub struct Round {
    pub number: u32,
    /// Buy-in charged to every active player this round.
    pub buy_in: Coins,
    pub dealer: Hand,
    /// Seat indices of players who bought in.
    pub active: Vec<usize>,
    phase: Phase,
}

impl Round {
    pub fn new(number: u32, buy_in: Coins) -> Self {
        Self {
            number,
            buy_in,
            dealer: Hand::new(),
            active: Vec::new(),
            phase: Phase::BuyIn,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn advance(&mut self) -> Phase {
        self.phase = self.phase.next();
        self.phase
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phases_run_in_order_and_stop_at_done() {
        let mut round = Round::new(1, 5.0);
        let mut seen = vec![round.phase()];
        while round.phase() != Phase::Done {
            seen.push(round.advance());
        }
        assert_eq!(
            seen,
            vec![
                Phase::BuyIn,
                Phase::InitialDeal,
                Phase::PlayerTurns,
                Phase::DealerTurn,
                Phase::Settlement,
                Phase::Done
            ]
        );
        assert_eq!(round.advance(), Phase::Done);
    }
}
