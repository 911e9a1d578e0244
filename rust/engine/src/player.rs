use std::fmt;

use crate::cards::Card;
use crate::errors::GameError;
use crate::hand::Hand;
use crate::strategy::{Move, Strategy, TableView};

/// Coin amounts. Buy-ins and steps are whole coins, so every amount the table
/// produces is a multiple of 0.5 and exact in binary floating point.
pub type Coins = f64;

/// Balance every player sits down with unless configured otherwise.
pub const STARTING_BALANCE: Coins = 200.0;

/// A seat at the table: a name, a balance, a decision policy and the hands
/// the player holds this round.
pub struct Player<'a> {
    name: String,
    strategy: Box<dyn Strategy + 'a>,
    balance: Coins,
    hands: Vec<Hand>,
}

impl<'a> Player<'a> {
    pub fn new(name: impl Into<String>, balance: Coins, strategy: Box<dyn Strategy + 'a>) -> Self {
        Self {
            name: name.into(),
            strategy,
            balance,
            hands: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn balance(&self) -> Coins {
        self.balance
    }

    pub fn strategy_name(&self) -> &str {
        self.strategy.name()
    }

    pub fn hands(&self) -> &[Hand] {
        &self.hands
    }

    pub(crate) fn hand_mut(&mut self, index: usize) -> Option<&mut Hand> {
        self.hands.get_mut(index)
    }

    pub fn can_afford(&self, amount: Coins) -> bool {
        self.balance >= amount
    }

    pub fn pay(&mut self, amount: Coins) -> Result<(), GameError> {
        if !self.can_afford(amount) {
            return Err(GameError::InsufficientFunds {
                balance: self.balance,
                required: amount,
            });
        }
        self.balance -= amount;
        Ok(())
    }

    pub fn credit(&mut self, amount: Coins) {
        self.balance += amount;
    }

    /// Starts a round with a single empty hand.
    pub fn join_table(&mut self) {
        self.hands.clear();
        self.hands.push(Hand::new());
    }

    /// Takes no part in this round.
    pub fn sit_out(&mut self) {
        self.hands.clear();
    }

    pub fn is_active(&self) -> bool {
        !self.hands.is_empty()
    }

    pub fn request_move(&mut self, hand_index: usize, view: &TableView) -> Move {
        match self.hands.get(hand_index) {
            Some(hand) => self.strategy.play_move(hand, view),
            None => Move::Stand,
        }
    }

    /// Splits the hand at `hand_index`, appending the new hand to the list.
    /// Returns `false` and leaves the hands untouched if the split is invalid.
    pub fn split_hand(&mut self, hand_index: usize) -> bool {
        let Some(hand) = self.hands.get_mut(hand_index) else {
            return false;
        };
        match hand.split() {
            Ok(new_hand) => {
                self.hands.push(new_hand);
                true
            }
            Err(_) => false,
        }
    }

    pub fn notify_card(&mut self, card: &Card) {
        self.strategy.on_card_drawn(card);
    }

    pub fn finish_turn(&mut self) {
        self.strategy.on_round_end();
    }
}

impl fmt::Debug for Player<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Player")
            .field("name", &self.name)
            .field("strategy", &self.strategy.name())
            .field("balance", &self.balance)
            .field("hands", &self.hands)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};
    use crate::strategy::FixedStrategy;

    fn player(balance: Coins) -> Player<'static> {
        Player::new("p", balance, Box::new(FixedStrategy::new(Move::Stand)))
    }

    #[test]
    fn join_table_resets_to_one_empty_hand() {
        let mut p = player(10.0);
        p.join_table();
        p.hand_mut(0).unwrap().add_card(Card::new(Rank::Two, Suit::Clubs));
        p.join_table();
        assert_eq!(p.hands().len(), 1);
        assert!(p.hands()[0].is_empty());
        p.sit_out();
        assert!(!p.is_active());
    }

    #[test]
    fn pay_refuses_overdraw() {
        let mut p = player(4.0);
        assert_eq!(
            p.pay(5.0),
            Err(GameError::InsufficientFunds {
                balance: 4.0,
                required: 5.0
            })
        );
        assert_eq!(p.balance(), 4.0);
        p.pay(4.0).unwrap();
        assert_eq!(p.balance(), 0.0);
    }

    #[test]
    fn split_hand_appends_or_does_nothing() {
        let mut p = player(10.0);
        p.join_table();
        let h = p.hand_mut(0).unwrap();
        h.add_card(Card::new(Rank::Nine, Suit::Clubs));
        h.add_card(Card::new(Rank::Eight, Suit::Clubs));
        assert!(!p.split_hand(0));
        assert_eq!(p.hands().len(), 1);

        p.join_table();
        let h = p.hand_mut(0).unwrap();
        h.add_card(Card::new(Rank::Nine, Suit::Clubs));
        h.add_card(Card::new(Rank::Nine, Suit::Hearts));
        assert!(p.split_hand(0));
        assert_eq!(p.hands().len(), 2);
        assert_eq!(p.hands()[1].cards, vec![Card::new(Rank::Nine, Suit::Hearts)]);
        assert!(!p.split_hand(5));
    }
}
