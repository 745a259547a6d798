//! Aggregate deck statistics.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardIdentity, CardType, Record};

/// Composition summary of a deck.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DeckStats {
    pub total_cards: usize,
    pub creatures: usize,
    pub spells: usize,
    pub artifacts: usize,
    pub elites: usize,
    /// Mean cost rounded to one decimal place; 0.0 for an empty deck.
    pub avg_cost: f64,
}

impl DeckStats {
    /// Tally a sequence of cards.
    pub fn collect<'a>(cards: impl IntoIterator<Item = &'a Card>) -> Self {
        let mut stats = DeckStats::default();
        let mut total_cost: u64 = 0;

        for card in cards {
            stats.total_cards += 1;
            total_cost += u64::from(card.cost());
            match card.card_type() {
                CardType::Creature => stats.creatures += 1,
                CardType::Spell => stats.spells += 1,
                CardType::Artifact => stats.artifacts += 1,
                CardType::Elite => stats.elites += 1,
            }
        }

        if stats.total_cards > 0 {
            stats.avg_cost = round_tenth(total_cost as f64 / stats.total_cards as f64);
        }
        stats
    }

    #[must_use]
    pub fn to_record(&self) -> Record {
        Record::new()
            .with("total_cards", self.total_cards)
            .with("creatures", self.creatures)
            .with("spells", self.spells)
            .with("artifacts", self.artifacts)
            .with("elites", self.elites)
            .with("avg_cost", self.avg_cost)
    }
}

/// Round to one decimal, ties to even on the exact stored value.
///
/// Float formatting is exact, so 2.25 becomes 2.2 and 0.35 (stored just
/// below 0.35) becomes 0.3.
fn round_tenth(value: f64) -> f64 {
    format!("{value:.1}").parse().unwrap_or(value)
}
