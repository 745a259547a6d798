//! Decks: owned, ordered card piles.
//!
//! The tail of the underlying vector is the top of the deck. `add_card`
//! pushes onto the top and `draw_card` pops from it, so the most recently
//! added card is drawn first.
//!
//! ```
//! use deck_engine::cards::{CardIdentity, Rarity, SpellCard, SpellEffect};
//! use deck_engine::deck::Deck;
//!
//! let mut deck = Deck::new();
//! deck.add_card(SpellCard::new("Heal", 1, Rarity::Common, SpellEffect::Heal).into());
//! deck.add_card(SpellCard::new("Bolt", 1, Rarity::Common, SpellEffect::Damage).into());
//!
//! assert_eq!(deck.draw_card().unwrap().name(), "Bolt");
//! assert_eq!(deck.draw_card().unwrap().name(), "Heal");
//! assert!(deck.draw_card().is_none());
//! ```

mod stats;

pub use stats::DeckStats;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardIdentity};
use crate::core::GameRng;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Put a card on top of the deck.
    pub fn add_card(&mut self, card: Card) {
        log::trace!("deck: added {}", card.name());
        self.cards.push(card);
    }

    /// Remove the first card named `name`.
    ///
    /// Returns `false` if no card matches; absence is not an error.
    pub fn remove_card(&mut self, name: &str) -> bool {
        match self.cards.iter().position(|card| card.name() == name) {
            Some(index) => {
                self.cards.remove(index);
                true
            }
            None => false,
        }
    }

    /// Uniformly permute the whole deck in place.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.cards);
        log::debug!("deck: shuffled {} cards", self.cards.len());
    }

    /// Take the top card, or `None` if the deck is empty.
    pub fn draw_card(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Draw up to `count` cards, in draw order.
    pub fn draw_hand(&mut self, count: usize) -> Vec<Card> {
        let keep = self.cards.len().saturating_sub(count);
        let mut hand = self.cards.split_off(keep);
        hand.reverse();
        hand
    }

    /// The card `draw_card` would return next.
    #[must_use]
    pub fn peek(&self) -> Option<&Card> {
        self.cards.last()
    }

    #[must_use]
    pub fn deck_stats(&self) -> DeckStats {
        DeckStats::collect(&self.cards)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate bottom to top.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}

impl FromIterator<Card> for Deck {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl Extend<Card> for Deck {
    fn extend<I: IntoIterator<Item = Card>>(&mut self, iter: I) {
        self.cards.extend(iter);
    }
}
