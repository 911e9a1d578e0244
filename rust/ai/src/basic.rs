//! Chart-driven basic strategy.

use std::collections::HashMap;

use pitboss_engine::cards::{Card, Rank, ValueGroup};
use pitboss_engine::hand::{Hand, BLACKJACK};
use pitboss_engine::strategy::{Move, Strategy, TableView};
use rand::SeedableRng;
use rand::seq::IndexedRandom;
use rand_chacha::ChaCha20Rng;

use crate::tables::{ChartData, chart_for_decks};

/// Column of the chart for a dealer up card: `2..=9` map to `0..=7`,
/// ten-valued cards to 8 and the ace to 9.
pub fn dealer_bucket(up: Option<Card>) -> usize {
    match up.map(|c| c.rank.group()) {
        Some(ValueGroup::Numeral(n)) if n < 10 => n as usize - 2,
        Some(ValueGroup::Ace) => 9,
        _ => 8,
    }
}

fn parse_cell(cell: &str) -> Vec<Move> {
    cell.chars()
        .filter_map(|ch| match ch {
            'H' => Some(Move::Hit),
            'S' => Some(Move::Stand),
            'D' => Some(Move::DoubleDown),
            'Q' => Some(Move::Surrender),
            'X' => Some(Move::Split),
            _ => None,
        })
        .collect()
}

fn parse_row(row: &str) -> Vec<Vec<Move>> {
    row.split_whitespace().map(parse_cell).collect()
}

/// A parsed chart: one row of candidate moves per hand class.
#[derive(Debug, Clone)]
pub struct Chart {
    hard: HashMap<u32, Vec<Vec<Move>>>,
    soft: HashMap<u32, Vec<Vec<Move>>>,
    pairs: HashMap<Rank, Vec<Vec<Move>>>,
}

impl Chart {
    pub fn from_data(data: &ChartData) -> Self {
        Self {
            hard: data.hard.iter().map(|(t, r)| (*t, parse_row(r))).collect(),
            soft: data.soft.iter().map(|(t, r)| (*t, parse_row(r))).collect(),
            pairs: data.pairs.iter().map(|(k, r)| (*k, parse_row(r))).collect(),
        }
    }

    pub fn for_decks(decks: u32) -> Self {
        Self::from_data(chart_for_decks(decks))
    }

    /// Candidate moves for `hand` against the dealer column `bucket`.
    ///
    /// Pairs use the pair rows, soft 12 to 19 the soft rows, anything else
    /// under 21 the hard rows. 21 and over always stands.
    pub fn candidates(&self, hand: &Hand, bucket: usize) -> &[Move] {
        let score = hand.score();
        let row = if hand.can_split() {
            self.pairs.get(&hand.cards[0].rank)
        } else if hand.is_soft() && (12..=19).contains(&score) {
            self.soft.get(&score)
        } else if score < BLACKJACK {
            self.hard.get(&score)
        } else {
            return &[Move::Stand];
        };
        match row.and_then(|r| r.get(bucket)) {
            Some(cell) if !cell.is_empty() => cell.as_slice(),
            _ => &[Move::Hit],
        }
    }
}

/// Plays by the chart for the table's deck count.
///
/// The chart is chosen on first use from [`TableView::decks`], so the same
/// instance can sit at any table.
#[derive(Debug, Clone)]
pub struct BasicStrategy {
    charts: HashMap<u32, Chart>,
    rng: ChaCha20Rng,
}

impl BasicStrategy {
    pub fn new(seed: u64) -> Self {
        Self {
            charts: HashMap::new(),
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    /// Plays `chart` whatever the table's deck count.
    pub fn with_chart(chart: Chart, seed: u64) -> Self {
        let mut strategy = Self::new(seed);
        for decks in 1..=3 {
            strategy.charts.insert(decks, chart.clone());
        }
        strategy
    }

    /// The chart's move, with close calls settled at random.
    pub fn decide(&mut self, hand: &Hand, view: &TableView) -> Move {
        let bucket = dealer_bucket(view.dealer_up);
        let key = view.decks.clamp(1, 3);
        let chart = self
            .charts
            .entry(key)
            .or_insert_with(|| Chart::for_decks(key));
        let candidates = chart.candidates(hand, bucket);
        candidates.choose(&mut self.rng).copied().unwrap_or(Move::Stand)
    }
}

impl Strategy for BasicStrategy {
    fn play_move(&mut self, hand: &Hand, view: &TableView) -> Move {
        self.decide(hand, view)
    }

    fn name(&self) -> &str {
        "basic"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pitboss_engine::cards::Suit;

    fn hand(ranks: &[Rank]) -> Hand {
        Hand::from_cards(ranks.iter().map(|&r| Card::new(r, Suit::Spades)).collect())
    }

    fn view(up: Rank, decks: u32) -> TableView {
        TableView {
            dealer_up: Some(Card::new(up, Suit::Hearts)),
            buy_in: 5.0,
            balance: 100.0,
            decks,
            hand_index: 0,
        }
    }

    #[test]
    fn buckets_follow_up_card() {
        let up = |r| Some(Card::new(r, Suit::Clubs));
        assert_eq!(dealer_bucket(up(Rank::Two)), 0);
        assert_eq!(dealer_bucket(up(Rank::Nine)), 7);
        assert_eq!(dealer_bucket(up(Rank::Ten)), 8);
        assert_eq!(dealer_bucket(up(Rank::Queen)), 8);
        assert_eq!(dealer_bucket(up(Rank::Ace)), 9);
    }

    #[test]
    fn chart_lookups() {
        let mut s = BasicStrategy::new(1);
        assert_eq!(s.decide(&hand(&[Rank::Six, Rank::Five]), &view(Rank::Six, 6)), Move::DoubleDown);
        assert_eq!(s.decide(&hand(&[Rank::Ten, Rank::Six]), &view(Rank::Ten, 6)), Move::Surrender);
        assert_eq!(s.decide(&hand(&[Rank::Ten, Rank::Six]), &view(Rank::Six, 6)), Move::Stand);
        assert_eq!(s.decide(&hand(&[Rank::Eight, Rank::Eight]), &view(Rank::Ace, 6)), Move::Split);
        assert_eq!(s.decide(&hand(&[Rank::Ten, Rank::Ten]), &view(Rank::Six, 6)), Move::Stand);
        assert_eq!(s.decide(&hand(&[Rank::Ace, Rank::Six]), &view(Rank::Four, 6)), Move::DoubleDown);
        assert_eq!(s.decide(&hand(&[Rank::Ten, Rank::Ace]), &view(Rank::Four, 6)), Move::Stand);
        assert_eq!(s.decide(&hand(&[Rank::Two, Rank::Three]), &view(Rank::Seven, 6)), Move::Hit);
    }

    #[test]
    fn deck_count_changes_the_answer() {
        let mut s = BasicStrategy::new(1);
        let nine = hand(&[Rank::Five, Rank::Four]);
        assert_eq!(s.decide(&nine, &view(Rank::Two, 1)), Move::DoubleDown);
        assert_eq!(s.decide(&nine, &view(Rank::Two, 8)), Move::Hit);
        let soft18 = hand(&[Rank::Ace, Rank::Seven]);
        assert_eq!(s.decide(&soft18, &view(Rank::Three, 2)), Move::Stand);
        assert_eq!(s.decide(&soft18, &view(Rank::Three, 1)), Move::DoubleDown);
    }

    const ALL_HIT: &str = "H H H H H H H H H H";

    static CLOSE_CALLS: ChartData = ChartData {
        hard: &[(12, "H HS S S S H H H H H")],
        soft: &[(18, "SD D D D D S S H H H")],
        pairs: &[(Rank::Eight, ALL_HIT)],
    };

    #[test]
    fn close_calls_pick_from_the_cell() {
        let chart = Chart::from_data(&CLOSE_CALLS);
        let twelve = hand(&[Rank::Ten, Rank::Two]);
        assert_eq!(chart.candidates(&twelve, 1), &[Move::Hit, Move::Stand]);
        assert_eq!(chart.candidates(&twelve, 0), &[Move::Hit]);

        let mut s = BasicStrategy::with_chart(chart, 7);
        let seen: std::collections::HashSet<Move> =
            (0..64).map(|_| s.decide(&twelve, &view(Rank::Three, 6))).collect();
        assert_eq!(seen, [Move::Hit, Move::Stand].into_iter().collect());

        let soft18 = hand(&[Rank::Ace, Rank::Seven]);
        let seen: std::collections::HashSet<Move> =
            (0..64).map(|_| s.decide(&soft18, &view(Rank::Two, 1))).collect();
        assert_eq!(seen, [Move::Stand, Move::DoubleDown].into_iter().collect());
    }

    #[test]
    fn shipped_charts_have_no_close_calls_at_twelve() {
        let mut s = BasicStrategy::new(7);
        let twelve = hand(&[Rank::Ten, Rank::Two]);
        let soft18 = hand(&[Rank::Ace, Rank::Seven]);
        for _ in 0..16 {
            assert_eq!(s.decide(&twelve, &view(Rank::Three, 6)), Move::Hit);
            assert_eq!(s.decide(&soft18, &view(Rank::Two, 6)), Move::Stand);
        }
    }

    #[test]
    fn missing_rows_fall_back_to_hit() {
        let chart = Chart::from_data(&CLOSE_CALLS);
        assert_eq!(chart.candidates(&hand(&[Rank::Ten, Rank::Three]), 4), &[Move::Hit]);
    }

    #[test]
    fn ace_hands_switch_rows_by_total() {
        let mut s = BasicStrategy::new(1);
        let h = hand(&[Rank::Ace, Rank::Nine, Rank::King]);
        assert_eq!(s.decide(&h, &view(Rank::Ten, 6)), Move::Stand);
        let h = hand(&[Rank::Ace, Rank::Five, Rank::King]);
        assert_eq!(s.decide(&h, &view(Rank::Ten, 6)), Move::Hit);
    }
}
