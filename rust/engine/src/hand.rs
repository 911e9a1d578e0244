use serde::{Deserialize, Serialize};
use std::fmt;

use crate::cards::Card;
use crate::errors::GameError;

/// Highest score that does not bust.
pub const BLACKJACK: u32 = 21;

/// Scores a set of cards.
///
/// Every ace starts at 11; while the total is over 21 and an ace is still
/// counted high, one ace drops to 1. The result may exceed 21.
pub fn score_cards(cards: &[Card]) -> u32 {
    let mut total = 0;
    let mut high_aces = 0;
    for card in cards {
        total += card.rank.points();
        if card.rank.is_ace() {
            high_aces += 1;
        }
    }
    while total > BLACKJACK && high_aces > 0 {
        total -= 10;
        high_aces -= 1;
    }
    total
}

/// Cards dealt to one betting position, plus the flags the settlement needs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    pub cards: Vec<Card>,
    pub doubled: bool,
    pub surrendered: bool,
}

impl Hand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self {
            cards,
            ..Self::default()
        }
    }

    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn double_down(&mut self, card: Card) {
        self.cards.push(card);
        self.doubled = true;
    }

    pub fn surrender(&mut self) {
        self.surrendered = true;
    }

    /// Moves the second card into a new hand; `self` keeps the first.
    ///
    /// ```
    /// use pitboss_engine::cards::{Card, Rank, Suit};
    /// use pitboss_engine::hand::Hand;
    ///
    /// let mut hand = Hand::from_cards(vec![
    ///     Card::new(Rank::Eight, Suit::Spades),
    ///     Card::new(Rank::Eight, Suit::Hearts),
    /// ]);
    /// let other = hand.split().unwrap();
    /// assert_eq!(hand.cards.len(), 1);
    /// assert_eq!(other.cards, vec![Card::new(Rank::Eight, Suit::Hearts)]);
    /// ```
    pub fn split(&mut self) -> Result<Hand, GameError> {
        if !self.can_split() {
            return Err(GameError::InvalidSplit);
        }
        let second = self.cards.pop().ok_or(GameError::InvalidSplit)?;
        Ok(Hand::from_cards(vec![second]))
    }

    pub fn score(&self) -> u32 {
        score_cards(&self.cards)
    }

    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2
            && self.cards.iter().any(|c| c.rank.is_ace())
            && self.cards.iter().any(|c| c.rank.is_ten_value())
    }

    /// Any ace makes the hand soft, whatever its current count.
    pub fn is_soft(&self) -> bool {
        self.cards.iter().any(|c| c.rank.is_ace())
    }

    pub fn can_split(&self) -> bool {
        self.cards.len() == 2 && self.cards[0].rank == self.cards[1].rank
    }

    pub fn is_bust(&self) -> bool {
        self.score() > BLACKJACK
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// First face-up card, which for the dealer is the up card.
    pub fn up_card(&self) -> Option<Card> {
        self.cards.iter().copied().find(|c| !c.face_down)
    }

    pub fn reveal(&mut self) {
        for c in &mut self.cards {
            c.reveal();
        }
    }

    /// Score of the face-up cards only.
    pub fn visible_score(&self) -> u32 {
        let shown: Vec<Card> = self.cards.iter().copied().filter(|c| !c.face_down).collect();
        score_cards(&shown)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let codes: Vec<String> = self.cards.iter().map(|c| c.to_string()).collect();
        write!(f, "{}", codes.join(" "))
    }
}
