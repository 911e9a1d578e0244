use serde::{Deserialize, Serialize};

use crate::hand::Hand;
use crate::player::Coins;

/// Score below which the dealer always draws.
pub const DEALER_STANDS_ON: u32 = 17;

/// How a settled hand ended, in the order the settlement checks apply.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Outcome {
    /// Natural blackjack against a dealer without one
    Blackjack,
    /// Player gave the hand up
    Surrender,
    /// Player went over 21
    Bust,
    /// Dealer went over 21
    DealerBust,
    /// Player beat the dealer's score
    Win,
    /// Equal scores
    Push,
    /// Dealer's score was higher
    Loss,
}

/// Payout for one hand. `payout` is the amount credited back to the balance,
/// stake included.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settlement {
    pub outcome: Outcome,
    pub payout: Coins,
}

/// Settles one player hand against the dealer.
///
/// The checks apply in order, first match wins. `buy_in` is the stake
/// charged for the round; a doubled hand staked it twice.
///
/// # Examples
///
/// ```
/// use pitboss_engine::cards::{Card, Rank, Suit};
/// use pitboss_engine::hand::Hand;
/// use pitboss_engine::rules::{settle_hand, Outcome};
///
/// let c = |r| Card::new(r, Suit::Spades);
/// let dealer = Hand::from_cards(vec![c(Rank::King), c(Rank::Eight)]);
///
/// let twenty = Hand::from_cards(vec![c(Rank::King), c(Rank::Queen)]);
/// let s = settle_hand(&twenty, &dealer, 5.0);
/// assert_eq!(s.outcome, Outcome::Win);
/// assert_eq!(s.payout, 10.0);
///
/// let mut gave_up = twenty.clone();
/// gave_up.surrender();
/// assert_eq!(settle_hand(&gave_up, &dealer, 5.0).payout, 2.5);
/// ```
pub fn settle_hand(hand: &Hand, dealer: &Hand, buy_in: Coins) -> Settlement {
    let multiplier = if hand.doubled { 2.0 } else { 1.0 };
    let stake = buy_in * multiplier;
    let score = hand.score();
    let dealer_score = dealer.score();

    let (outcome, payout) = if hand.is_blackjack() && !dealer.is_blackjack() {
        (Outcome::Blackjack, 2.5 * buy_in)
    } else if hand.surrendered {
        (Outcome::Surrender, 0.5 * buy_in)
    } else if hand.is_bust() {
        (Outcome::Bust, 0.0)
    } else if dealer.is_bust() {
        (Outcome::DealerBust, 2.0 * stake)
    } else if score > dealer_score {
        (Outcome::Win, 2.0 * stake)
    } else if score == dealer_score {
        (Outcome::Push, stake)
    } else {
        (Outcome::Loss, 0.0)
    };
    Settlement { outcome, payout }
}

/// Dealer draws below 17 and on soft 17.
pub fn dealer_should_draw(dealer: &Hand) -> bool {
    let score = dealer.score();
    score < DEALER_STANDS_ON || (dealer.is_soft() && score < DEALER_STANDS_ON + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, Rank, Suit};

    fn hand(ranks: &[Rank]) -> Hand {
        Hand::from_cards(ranks.iter().map(|&r| Card::new(r, Suit::Diamonds)).collect())
    }

    #[test]
    fn settlement_against_eighteen() {
        let dealer = hand(&[Rank::Ten, Rank::Eight]);

        let s = settle_hand(&hand(&[Rank::Ten, Rank::King]), &dealer, 5.0);
        assert_eq!((s.outcome, s.payout), (Outcome::Win, 10.0));

        let mut doubled = hand(&[Rank::Five, Rank::Five, Rank::Queen]);
        doubled.doubled = true;
        let s = settle_hand(&doubled, &dealer, 5.0);
        assert_eq!((s.outcome, s.payout), (Outcome::Win, 20.0));

        let s = settle_hand(&hand(&[Rank::Nine, Rank::Nine]), &dealer, 5.0);
        assert_eq!((s.outcome, s.payout), (Outcome::Push, 5.0));

        let s = settle_hand(&hand(&[Rank::Ten, Rank::Seven]), &dealer, 5.0);
        assert_eq!((s.outcome, s.payout), (Outcome::Loss, 0.0));

        let s = settle_hand(&hand(&[Rank::Ten, Rank::Seven, Rank::Nine]), &dealer, 5.0);
        assert_eq!((s.outcome, s.payout), (Outcome::Bust, 0.0));
    }

    #[test]
    fn blackjack_pays_three_to_two_unless_dealer_has_one() {
        let bj = hand(&[Rank::Ace, Rank::Queen]);
        let s = settle_hand(&bj, &hand(&[Rank::Ten, Rank::Nine]), 5.0);
        assert_eq!((s.outcome, s.payout), (Outcome::Blackjack, 12.5));

        let s = settle_hand(&bj, &hand(&[Rank::King, Rank::Ace]), 5.0);
        assert_eq!((s.outcome, s.payout), (Outcome::Push, 5.0));
    }

    #[test]
    fn bust_loses_even_when_dealer_busts() {
        let dealer = hand(&[Rank::Ten, Rank::Six, Rank::Nine]);
        let s = settle_hand(&hand(&[Rank::Ten, Rank::Five, Rank::Eight]), &dealer, 5.0);
        assert_eq!(s.outcome, Outcome::Bust);
        let s = settle_hand(&hand(&[Rank::Ten, Rank::Two]), &dealer, 5.0);
        assert_eq!((s.outcome, s.payout), (Outcome::DealerBust, 10.0));
    }

    #[test]
    fn surrender_returns_half() {
        let mut h = hand(&[Rank::Ten, Rank::Six]);
        h.surrender();
        let s = settle_hand(&h, &hand(&[Rank::Ten, Rank::Ten]), 5.0);
        assert_eq!((s.outcome, s.payout), (Outcome::Surrender, 2.5));
    }

    #[test]
    fn dealer_hits_soft_seventeen() {
        assert!(dealer_should_draw(&hand(&[Rank::Ten, Rank::Six])));
        assert!(dealer_should_draw(&hand(&[Rank::Ace, Rank::Six])));
        assert!(!dealer_should_draw(&hand(&[Rank::Ace, Rank::Seven])));
        assert!(!dealer_should_draw(&hand(&[Rank::Ten, Rank::Seven])));
        // ten-six-ace is 17 with a demoted ace, still soft by the any-ace rule
        assert!(dealer_should_draw(&hand(&[Rank::Ten, Rank::Six, Rank::Ace])));
    }
}
