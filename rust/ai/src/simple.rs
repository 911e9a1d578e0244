//! Rule-of-thumb players that ignore the dealer's up card.
//!
//! Useful as baselines when comparing strategies over long simulations.

use pitboss_engine::hand::Hand;
use pitboss_engine::rules::dealer_should_draw;
use pitboss_engine::strategy::{Move, Strategy, TableView};

/// Plays the house rule: draw below 17 and on soft 17.
///
/// # Example
///
/// ```rust
/// use pitboss_ai::simple::DealerMimic;
/// use pitboss_engine::strategy::Strategy;
///
/// let s = DealerMimic::new();
/// assert_eq!(s.name(), "dealer");
/// ```
#[derive(Debug, Clone, Default)]
pub struct DealerMimic;

impl DealerMimic {
    pub fn new() -> Self {
        Self
    }
}

impl Strategy for DealerMimic {
    fn play_move(&mut self, hand: &Hand, _view: &TableView) -> Move {
        if dealer_should_draw(hand) {
            Move::Hit
        } else {
            Move::Stand
        }
    }

    fn name(&self) -> &str {
        "dealer"
    }
}

/// Never risks a bust: hits only while no single card can take the hand over 21.
#[derive(Debug, Clone, Default)]
pub struct Cautious;

impl Cautious {
    pub fn new() -> Self {
        Self
    }
}

impl Strategy for Cautious {
    fn play_move(&mut self, hand: &Hand, _view: &TableView) -> Move {
        if hand.score() <= 11 {
            Move::Hit
        } else {
            Move::Stand
        }
    }

    fn name(&self) -> &str {
        "cautious"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pitboss_engine::cards::{Card, Rank, Suit};

    fn hand(ranks: &[Rank]) -> Hand {
        Hand::from_cards(ranks.iter().map(|&r| Card::new(r, Suit::Hearts)).collect())
    }

    fn view() -> TableView {
        TableView {
            dealer_up: Some(Card::new(Rank::Six, Suit::Clubs)),
            buy_in: 5.0,
            balance: 50.0,
            decks: 6,
            hand_index: 0,
        }
    }

    #[test]
    fn dealer_mimic_hits_soft_seventeen() {
        let mut s = DealerMimic::new();
        assert_eq!(s.play_move(&hand(&[Rank::Ace, Rank::Six]), &view()), Move::Hit);
        assert_eq!(s.play_move(&hand(&[Rank::Ten, Rank::Seven]), &view()), Move::Stand);
        assert_eq!(s.play_move(&hand(&[Rank::Ten, Rank::Six]), &view()), Move::Hit);
    }

    #[test]
    fn cautious_stops_at_twelve() {
        let mut s = Cautious::new();
        assert_eq!(s.play_move(&hand(&[Rank::Five, Rank::Six]), &view()), Move::Hit);
        assert_eq!(s.play_move(&hand(&[Rank::Ten, Rank::Two]), &view()), Move::Stand);
    }
}
