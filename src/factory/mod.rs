//! Themed card factories.
//!
//! A factory builds one theme's cards from a [`CardSpec`]: a name looked up
//! in its catalog, or a power level that picks the strongest archetype it
//! can afford. Keeping all of a theme's cards behind one factory keeps decks
//! thematically consistent.

pub mod catalog;
mod fantasy;
mod mechanical;

pub use catalog::Catalog;
pub use fantasy::FantasyCardFactory;
pub use mechanical::MechanicalCardFactory;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardIdentity, CardType, Record};
use crate::deck::Deck;
use crate::error::Result;

/// What to build.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardSpec {
    /// Archetype key or card name, case-insensitive.
    Named(String),
    /// Strongest archetype costing at most this much.
    Power(u32),
}

impl From<&str> for CardSpec {
    fn from(name: &str) -> Self {
        Self::Named(name.to_string())
    }
}

impl From<String> for CardSpec {
    fn from(name: String) -> Self {
        Self::Named(name)
    }
}

impl From<u32> for CardSpec {
    fn from(level: u32) -> Self {
        Self::Power(level)
    }
}

impl fmt::Display for CardSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => f.write_str(name),
            Self::Power(level) => write!(f, "power {level}"),
        }
    }
}

/// Card names a factory can build, by kind.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportedTypes {
    pub creatures: Vec<String>,
    pub spells: Vec<String>,
    pub artifacts: Vec<String>,
}

impl SupportedTypes {
    #[must_use]
    pub fn names(&self, kind: CardType) -> &[String] {
        match kind {
            CardType::Creature => &self.creatures,
            CardType::Spell => &self.spells,
            CardType::Artifact => &self.artifacts,
            CardType::Elite => &[],
        }
    }

    /// Whether `card`'s name is listed under its kind.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.names(card.card_type()).iter().any(|name| name == card.name())
    }

    #[must_use]
    pub fn to_record(&self) -> Record {
        Record::new()
            .with("creatures", self.creatures.clone())
            .with("spells", self.spells.clone())
            .with("artifacts", self.artifacts.clone())
    }
}

/// Builds the cards of one theme.
pub trait CardFactory {
    fn theme(&self) -> &str;

    fn create_creature(&self, spec: CardSpec) -> Result<Card>;

    fn create_spell(&self, spec: CardSpec) -> Result<Card>;

    fn create_artifact(&self, spec: CardSpec) -> Result<Card>;

    /// Build a deck of exactly `size` cards, cycling creature, spell and
    /// artifact.
    fn create_themed_deck(&self, size: usize) -> Result<Deck>;

    fn supported_types(&self) -> SupportedTypes;
}

/// Shared implementation for catalog-backed factories.
pub(crate) fn themed_deck(catalog: &Catalog, size: usize) -> Result<Deck> {
    let deck = (0..size).map(|n| catalog.nth_card(n)).collect::<Result<Deck>>()?;
    log::debug!("{} factory: built deck of {} cards", catalog.theme(), deck.len());
    Ok(deck)
}
