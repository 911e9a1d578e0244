//! Basic strategy charts for one deck, two decks and three or more decks.
//!
//! Each row lists one cell per dealer up card, in the order
//! `2 3 4 5 6 7 8 9 T A`. A cell holds one or more letters:
//! `H` hit, `S` stand, `D` double, `Q` surrender, `X` split. A cell with
//! several letters is a close call; the player picks one of them at random.

use pitboss_engine::cards::Rank;

pub struct ChartData {
    /// Hard totals 4..=21.
    pub hard: &'static [(u32, &'static str)],
    /// Soft totals 12..=19.
    pub soft: &'static [(u32, &'static str)],
    pub pairs: &'static [(Rank, &'static str)],
}

pub static SINGLE_DECK: ChartData = ChartData {
    hard: &[
        (4, "H H H H H H H H H H"),
        (5, "H H H H H H H H H H"),
        (6, "H H H H H H H H H H"),
        (7, "H H H H H H H H H H"),
        (8, "H H H D D H H H H H"),
        (9, "D D D D D H H H H H"),
        (10, "D D D D D D D D H H"),
        (11, "D D D D D D D D D D"),
        (12, "H H S S S H H H H H"),
        (13, "S S S S S H H H H H"),
        (14, "S S S S S H H H H H"),
        (15, "S S S S S H H H H H"),
        (16, "S S S S S H H H Q Q"),
        (17, "S S S S S S S S S S"),
        (18, "S S S S S S S S S S"),
        (19, "S S S S S S S S S S"),
        (20, "S S S S S S S S S S"),
        (21, "S S S S S S S S S S"),
    ],
    soft: &[
        (12, "H H D D D H H H H H"),
        (13, "H H D D D H H H H H"),
        (14, "H H D D D H H H H H"),
        (15, "H H D D D H H H H H"),
        (16, "H S D D D H H H H H"),
        (17, "D D D D D S S H H H"),
        (18, "S D D D D S S H H S"),
        (19, "S S S S D S S S S S"),
    ],
    pairs: &[
        (Rank::Two, "X X X X X X H H H H"),
        (Rank::Three, "X X X X X X X H H H"),
        (Rank::Four, "H H X X X H H H H H"),
        (Rank::Five, "D D D D D D D D H H"),
        (Rank::Six, "X X X X X X H H H H"),
        (Rank::Seven, "X X X X X X X H Q H"),
        (Rank::Eight, "X X X X X X X X X X"),
        (Rank::Nine, "X X X X X S X X S S"),
        (Rank::Ten, "S S S S S S S S S S"),
        (Rank::Jack, "X X X X X X X X X X"),
        (Rank::Queen, "X X X X X X X X X X"),
        (Rank::King, "X X X X X X X X X X"),
        (Rank::Ace, "X X X X X X X X X X"),
    ],
};

pub static DOUBLE_DECK: ChartData = ChartData {
    hard: &[
        (4, "H H H H H H H H H H"),
        (5, "H H H H H H H H H H"),
        (6, "H H H H H H H H H H"),
        (7, "H H H H H H H H H H"),
        (8, "H H H D D H H H H H"),
        (9, "D D D D D H H H H H"),
        (10, "D D D D D D D D H H"),
        (11, "D D D D D D D D D D"),
        (12, "H H S S S H H H H H"),
        (13, "S S S S S H H H H H"),
        (14, "S S S S S H H H H H"),
        (15, "S S S S S H H H Q H"),
        (16, "S S S S S H H H Q Q"),
        (17, "S S S S S S S S S S"),
        (18, "S S S S S S S S S S"),
        (19, "S S S S S S S S S S"),
        (20, "S S S S S S S S S S"),
        (21, "S S S S S S S S S S"),
    ],
    soft: &[
        (12, "H H H D D H H H H H"),
        (13, "H H H D D H H H H H"),
        (14, "H H D D D H H H H H"),
        (15, "H H D D D H H H H H"),
        (16, "H D D D D H H H H H"),
        (17, "H D D D D S S H H H"),
        (18, "S S S S S S S S S S"),
        (19, "S S S S S S S S S S"),
    ],
    pairs: &[
        (Rank::Two, "X X X X X X H H H H"),
        (Rank::Three, "X X X X X X H H H H"),
        (Rank::Four, "H H H X X H H H H H"),
        (Rank::Five, "D D D D D D D D H H"),
        (Rank::Six, "X X X X X X H H H H"),
        (Rank::Seven, "X X X X X X X H Q H"),
        (Rank::Eight, "X X X X X X X X X X"),
        (Rank::Nine, "X X X X X S X X S S"),
        (Rank::Ten, "S S S S S S S S S S"),
        (Rank::Jack, "X X X X X X X X X X"),
        (Rank::Queen, "X X X X X X X X X X"),
        (Rank::King, "X X X X X X X X X X"),
        (Rank::Ace, "X X X X X X X X X X"),
    ],
};

pub static MULTI_DECK: ChartData = ChartData {
    hard: &[
        (4, "H H H H H H H H H H"),
        (5, "H H H H H H H H H H"),
        (6, "H H H H H H H H H H"),
        (7, "H H H H H H H H H H"),
        (8, "H H H D D H H H H H"),
        (9, "H D D D D H H H H H"),
        (10, "D D D D D D D D H H"),
        (11, "D D D D D D D D D H"),
        (12, "H H S S S H H H H H"),
        (13, "S S S S S H H H H H"),
        (14, "S S S S S H H H H H"),
        (15, "S S S S S H H H Q H"),
        (16, "S S S S S H H Q Q Q"),
        (17, "S S S S S S S S S S"),
        (18, "S S S S S S S S S S"),
        (19, "S S S S S S S S S S"),
        (20, "S S S S S S S S S S"),
        (21, "S S S S S S S S S S"),
    ],
    soft: &[
        (12, "H H H H H H H H H H"),
        (13, "H H H D D H H H H H"),
        (14, "H H H D D H H H H H"),
        (15, "H H D D D H H H H H"),
        (16, "H H D D D H H H H H"),
        (17, "H D D D D H H H H H"),
        (18, "S D D D D S S H H H"),
        (19, "S S S S S S S S S S"),
    ],
    pairs: &[
        (Rank::Two, "X X X X X X H H H H"),
        (Rank::Three, "X X X X X X H H H H"),
        (Rank::Four, "H H H X X H H H H H"),
        (Rank::Five, "D D D D D D D D H H"),
        (Rank::Six, "X X X X X H H H H H"),
        (Rank::Seven, "X X X X X X H H Q H"),
        (Rank::Eight, "X X X X X X X X X X"),
        (Rank::Nine, "X X X X X S X X S S"),
        (Rank::Ten, "S S S S S S S S S S"),
        (Rank::Jack, "X X X X X X X X X X"),
        (Rank::Queen, "X X X X X X X X X X"),
        (Rank::King, "X X X X X X X X X X"),
        (Rank::Ace, "X X X X X X X X X X"),
    ],
};

pub fn chart_for_decks(decks: u32) -> &'static ChartData {
    match decks {
        0 | 1 => &SINGLE_DECK,
        2 => &DOUBLE_DECK,
        _ => &MULTI_DECK,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_well_formed(chart: &ChartData) {
        let rows = chart
            .hard
            .iter()
            .map(|(_, r)| *r)
            .chain(chart.soft.iter().map(|(_, r)| *r))
            .chain(chart.pairs.iter().map(|(_, r)| *r));
        for row in rows {
            let cells: Vec<&str> = row.split_whitespace().collect();
            assert_eq!(cells.len(), 10, "row {row:?}");
            assert!(cells
                .iter()
                .all(|cell| cell.chars().all(|ch| "HSDQX".contains(ch))));
        }
        let hard: Vec<u32> = chart.hard.iter().map(|(t, _)| *t).collect();
        assert_eq!(hard, (4..=21).collect::<Vec<_>>());
        let soft: Vec<u32> = chart.soft.iter().map(|(t, _)| *t).collect();
        assert_eq!(soft, (12..=19).collect::<Vec<_>>());
        assert_eq!(chart.pairs.len(), 13);
    }

    #[test]
    fn charts_have_ten_cells_per_row() {
        assert_well_formed(&SINGLE_DECK);
        assert_well_formed(&DOUBLE_DECK);
        assert_well_formed(&MULTI_DECK);
    }

    #[test]
    fn deck_count_selects_chart() {
        assert!(std::ptr::eq(chart_for_decks(1), &SINGLE_DECK));
        assert!(std::ptr::eq(chart_for_decks(2), &DOUBLE_DECK));
        assert!(std::ptr::eq(chart_for_decks(6), &MULTI_DECK));
    }
}
