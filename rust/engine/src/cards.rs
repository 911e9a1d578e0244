use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Represents one of the four suits in a standard 52-card deck.
/// Suits never affect scoring; they only distinguish otherwise equal cards.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Suit {
    /// Clubs suit (♣)
    Clubs,
    /// Diamonds suit (♦)
    Diamonds,
    /// Hearts suit (♥)
    Hearts,
    /// Spades suit (♠)
    Spades,
}

impl Suit {
    pub fn code(self) -> char {
        match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        }
    }
}

/// Represents the rank (face value) of a playing card from Two through Ace.
/// Discriminants follow the pip count so numerals convert directly to points.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Rank {
    /// Rank 2
    Two = 2,
    /// Rank 3
    Three,
    /// Rank 4
    Four,
    /// Rank 5
    Five,
    /// Rank 6
    Six,
    /// Rank 7
    Seven,
    /// Rank 8
    Eight,
    /// Rank 9
    Nine,
    /// Rank 10
    Ten,
    /// Jack (worth 10)
    Jack,
    /// Queen (worth 10)
    Queen,
    /// King (worth 10)
    King,
    /// Ace (worth 1 or 11)
    Ace,
}

/// Canonical scoring group of a rank.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ValueGroup {
    /// Two through Ten, carrying the pip count
    Numeral(u8),
    /// Jack, Queen or King, all worth 10
    Face,
    /// Ace, worth 11 until demoted to 1
    Ace,
}

impl Rank {
    pub fn group(self) -> ValueGroup {
        match self {
            Rank::Jack | Rank::Queen | Rank::King => ValueGroup::Face,
            Rank::Ace => ValueGroup::Ace,
            numeral => ValueGroup::Numeral(numeral as u8),
        }
    }

    /// Points this rank contributes before any ace demotion (Ace counts 11).
    pub fn points(self) -> u32 {
        match self.group() {
            ValueGroup::Numeral(n) => n as u32,
            ValueGroup::Face => 10,
            ValueGroup::Ace => 11,
        }
    }

    pub fn is_ace(self) -> bool {
        self == Rank::Ace
    }

    /// True for Ten, Jack, Queen and King.
    pub fn is_ten_value(self) -> bool {
        matches!(self, Rank::Ten | Rank::Jack | Rank::Queen | Rank::King)
    }

    pub fn code(self) -> char {
        match self {
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => '0',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        }
    }
}

/// A single playing card.
///
/// Two cards compare equal when rank and suit match; the `face_down` flag is
/// presentation state and is ignored by `==` and by hashing. Counting policies
/// rely on this to strike a dealt card from their model of the remaining pack
/// whether or not it was dealt face-down.
///
/// ```
/// use pitboss_engine::cards::{Card, Rank, Suit};
///
/// let up = Card::new(Rank::Ace, Suit::Spades);
/// let down = up.turned_down();
/// assert_eq!(up, down);
/// assert_eq!(up.to_string(), "AS");
/// assert_eq!(down.to_string(), "??");
/// ```
#[derive(Debug, Copy, Clone, Serialize, Deserialize)]
pub struct Card {
    /// The rank of the card (Two through Ace)
    pub rank: Rank,
    /// The suit of the card
    pub suit: Suit,
    /// Whether the card is currently hidden from the table
    #[serde(default)]
    pub face_down: bool,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self {
            rank,
            suit,
            face_down: false,
        }
    }

    pub fn turned_down(self) -> Self {
        Self {
            face_down: true,
            ..self
        }
    }

    pub fn reveal(&mut self) {
        self.face_down = false;
    }

    /// Two-character display code, e.g. `AS`, `0H` for the ten of hearts.
    pub fn code(&self) -> String {
        format!("{}{}", self.rank.code(), self.suit.code())
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.rank == other.rank && self.suit == other.suit
    }
}

impl Eq for Card {}

impl Hash for Card {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rank.hash(state);
        self.suit.hash(state);
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.face_down {
            write!(f, "??")
        } else {
            write!(f, "{}", self.code())
        }
    }
}

pub fn all_suits() -> [Suit; 4] {
    [Suit::Spades, Suit::Diamonds, Suit::Clubs, Suit::Hearts]
}

pub fn all_ranks() -> [Rank; 13] {
    [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ]
}

/// Number of cards in one standard deck.
pub const DECK_SIZE: usize = 52;

pub fn full_deck() -> Vec<Card> {
    let mut v = Vec::with_capacity(DECK_SIZE);
    for &s in &all_suits() {
        for &r in &all_ranks() {
            v.push(Card::new(r, s));
        }
    }
    v
}

/// `decks` standard decks concatenated in suit-then-rank order.
pub fn multi_deck(decks: u32) -> Vec<Card> {
    let mut v = Vec::with_capacity(DECK_SIZE * decks as usize);
    for _ in 0..decks {
        v.extend(full_deck());
    }
    v
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn equality_ignores_face_down_flag() {
        let a = Card::new(Rank::Queen, Suit::Hearts);
        let b = a.turned_down();
        assert_eq!(a, b);
        let mut set = HashSet::new();
        set.insert(a);
        assert!(set.contains(&b));
    }

    #[test]
    fn value_groups() {
        assert_eq!(Rank::Seven.group(), ValueGroup::Numeral(7));
        assert_eq!(Rank::Ten.group(), ValueGroup::Numeral(10));
        assert_eq!(Rank::King.group(), ValueGroup::Face);
        assert_eq!(Rank::Ace.group(), ValueGroup::Ace);
        assert_eq!(Rank::Jack.points(), 10);
        assert_eq!(Rank::Ace.points(), 11);
        assert!(Rank::Ten.is_ten_value());
        assert!(!Rank::Nine.is_ten_value());
    }

    #[test]
    fn ten_uses_zero_code() {
        assert_eq!(Card::new(Rank::Ten, Suit::Clubs).code(), "0C");
    }

    #[test]
    fn multi_deck_size() {
        assert_eq!(multi_deck(6).len(), 6 * DECK_SIZE);
        let unique: HashSet<Card> = multi_deck(2).into_iter().collect();
        assert_eq!(unique.len(), DECK_SIZE);
    }
}
