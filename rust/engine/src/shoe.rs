use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{multi_deck, Card, DECK_SIZE};

/// Anything the table can draw cards from.
///
/// The table only ever asks for the next card and, when a source runs dry,
/// tells it to rebuild itself. Tests use this seam to stack outcomes.
pub trait CardSource {
    /// Removes and returns the next card, or `None` when the source is empty.
    fn draw_card(&mut self) -> Option<Card>;
    fn remaining(&self) -> usize;
    /// Rebuilds a full, freshly ordered source.
    fn replenish(&mut self);
    fn decks(&self) -> u32;
}

/// A multi-deck shoe with a seeded shuffle.
///
/// Dealing walks a cursor through the card vector. Once the cursor reaches the
/// end the shoe is empty until [`CardSource::replenish`] is called.
#[derive(Debug)]
pub struct Shoe {
    cards: Vec<Card>,
    position: usize,
    decks: u32,
    shuffled: bool,
    rng: ChaCha20Rng,
}

impl Shoe {
    pub fn new(decks: u32, shuffle: bool, seed: u64) -> Self {
        let mut shoe = Self {
            cards: Vec::new(),
            position: 0,
            decks,
            shuffled: shuffle,
            rng: ChaCha20Rng::seed_from_u64(seed),
        };
        shoe.replenish();
        shoe
    }

    /// A shoe that deals `top` in order before falling back to a normal
    /// shuffled `decks`-deck shoe once `top` is used up.
    pub fn stacked(decks: u32, top: Vec<Card>, seed: u64) -> Self {
        Self {
            cards: top,
            position: 0,
            decks,
            shuffled: true,
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    pub fn full_size(&self) -> usize {
        DECK_SIZE * self.decks as usize
    }

    pub fn is_shuffled(&self) -> bool {
        self.shuffled
    }
}

impl CardSource for Shoe {
    fn draw_card(&mut self) -> Option<Card> {
        if self.position >= self.cards.len() {
            None
        } else {
            let c = self.cards[self.position];
            self.position += 1;
            Some(c)
        }
    }

    fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }

    fn replenish(&mut self) {
        self.cards = multi_deck(self.decks);
        if self.shuffled {
            self.cards.shuffle(&mut self.rng);
        }
        self.position = 0;
    }

    fn decks(&self) -> u32 {
        self.decks
    }
}

/// Draws one card, rebuilding the source first if it is empty.
pub fn draw_replenishing(source: &mut dyn CardSource) -> Option<Card> {
    if source.remaining() == 0 {
        tracing::debug!(decks = source.decks(), "shoe exhausted, replenishing");
        source.replenish();
    }
    source.draw_card()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    #[test]
    fn unshuffled_shoe_keeps_deck_order() {
        let mut shoe = Shoe::new(1, false, 0);
        let first = shoe.draw_card().unwrap();
        assert_eq!(first, multi_deck(1)[0]);
    }

    #[test]
    fn stacked_cards_come_first_then_full_shoe() {
        let top = vec![
            Card::new(Rank::Ace, Suit::Spades),
            Card::new(Rank::King, Suit::Hearts),
        ];
        let mut shoe = Shoe::stacked(2, top.clone(), 3);
        assert_eq!(draw_replenishing(&mut shoe), Some(top[0]));
        assert_eq!(draw_replenishing(&mut shoe), Some(top[1]));
        assert_eq!(shoe.remaining(), 0);
        assert!(draw_replenishing(&mut shoe).is_some());
        assert_eq!(shoe.remaining(), 2 * DECK_SIZE - 1);
    }
}
