//! Card, hand, and table formatters for terminal display.
//!
//! Pure functions that turn engine state into text. Suits use Unicode symbols
//! where the terminal supports them and a letter otherwise.
//!
//! ## Example
//!
//! ```rust
//! use pitboss_engine::cards::{Card, Rank, Suit};
//! use pitboss_cli::formatters::format_card;
//!
//! let ace_spades = Card::new(Rank::Ace, Suit::Spades);
//! assert!(format_card(&ace_spades) == "A♠" || format_card(&ace_spades) == "As");
//! assert_eq!(format_card(&ace_spades.turned_down()), "??");
//! ```

use crate::ui::format_coins;
use pitboss_engine::cards::{Card, Rank, Suit};
use pitboss_engine::hand::Hand;
use pitboss_engine::rules::Outcome;
use pitboss_engine::table::{RoundReport, TurnSnapshot};
use std::fmt::Write as _;

/// Check if the terminal supports Unicode card symbols.
///
/// On Windows, checks for Windows Terminal (WT_SESSION), modern terminals
/// (TERM_PROGRAM), or VS Code (VSCODE_INJECTION). Elsewhere Unicode is assumed.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

pub fn format_suit(suit: Suit) -> String {
    if supports_unicode() {
        match suit {
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
            Suit::Spades => "♠",
        }
        .to_string()
    } else {
        suit.code().to_ascii_lowercase().to_string()
    }
}

/// Rank label: `2`..`10`, `J`, `Q`, `K`, `A`.
pub fn format_rank(rank: Rank) -> String {
    match rank {
        Rank::Ten => "10".to_string(),
        other => other.code().to_string(),
    }
}

/// A face-down card renders as `??`.
pub fn format_card(card: &Card) -> String {
    if card.face_down {
        return "??".to_string();
    }
    format!("{}{}", format_rank(card.rank), format_suit(card.suit))
}

pub fn format_hand(hand: &Hand) -> String {
    hand.cards
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn format_outcome(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Blackjack => "blackjack",
        Outcome::Surrender => "surrender",
        Outcome::Bust => "bust",
        Outcome::DealerBust => "dealer bust",
        Outcome::Win => "win",
        Outcome::Push => "push",
        Outcome::Loss => "loss",
    }
}

fn hand_tags(hand: &Hand) -> String {
    let mut tags = String::new();
    if hand.is_blackjack() {
        tags.push_str(" blackjack");
    } else if hand.is_bust() {
        tags.push_str(" bust");
    }
    if hand.doubled {
        tags.push_str(" doubled");
    }
    if hand.surrendered {
        tags.push_str(" surrendered");
    }
    tags
}

/// The table as a player sees it while deciding: current buy-in, the dealer
/// with the hole card hidden, and every hand in the round. The acting hand is
/// marked with `>`.
pub fn render_table(turn: &TurnSnapshot<'_, '_>) -> String {
    let mut s = String::new();
    let _ = writeln!(s, "Buy-in: {}", format_coins(turn.buy_in));
    let _ = writeln!(
        s,
        "Dealer: {} ({})",
        format_hand(turn.dealer),
        turn.dealer.visible_score()
    );
    for &seat in turn.active {
        let Some(player) = turn.players.get(seat) else {
            continue;
        };
        let _ = writeln!(
            s,
            "{} (balance {}):",
            player.name(),
            format_coins(player.balance())
        );
        for (i, hand) in player.hands().iter().enumerate() {
            let marker = if seat == turn.seat && i == turn.hand_index {
                '>'
            } else {
                ' '
            };
            let _ = writeln!(
                s,
                " {} hand {}: {} ({}){}",
                marker,
                i + 1,
                format_hand(hand),
                hand.score(),
                hand_tags(hand)
            );
        }
    }
    s
}

/// Settlement summary printed after every round.
pub fn render_report(report: &RoundReport) -> String {
    let mut s = String::new();
    let _ = writeln!(
        s,
        "Round {} settled (buy-in {})",
        report.round,
        format_coins(report.buy_in)
    );
    if !report.dealer.is_empty() {
        let _ = writeln!(
            s,
            "Dealer: {} ({})",
            format_hand(&report.dealer),
            report.dealer.score()
        );
    }
    for r in &report.results {
        let _ = writeln!(
            s,
            "  {} hand {}: {} ({}) {} -> {}",
            r.player,
            r.hand_index + 1,
            format_hand(&r.hand),
            r.score,
            format_outcome(r.outcome),
            format_coins(r.payout)
        );
    }
    if !report.sat_out.is_empty() {
        let _ = writeln!(s, "Sat out: {}", report.sat_out.join(", "));
    }
    let balances = report
        .balances
        .iter()
        .map(|b| format!("{} {}", b.name, format_coins(b.balance)))
        .collect::<Vec<_>>()
        .join(", ");
    let _ = writeln!(s, "Balances: {}", balances);
    let _ = writeln!(s, "Next buy-in: {}", format_coins(report.next_buy_in));
    s
}
