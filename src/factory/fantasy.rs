//! Fantasy theme: dragons, goblins, fireballs.

use super::catalog::{ArtifactArchetype, Catalog, CreatureArchetype, SpellArchetype};
use super::{themed_deck, CardFactory, CardSpec, SupportedTypes};
use crate::cards::{Card, Rarity};
use crate::deck::Deck;
use crate::error::Result;

static CREATURES: [CreatureArchetype; 3] = [
    CreatureArchetype {
        key: "dragon",
        name: "Fire Dragon",
        cost: 5,
        rarity: Rarity::Legendary,
        attack: 7,
        health: 5,
    },
    CreatureArchetype {
        key: "goblin",
        name: "Goblin Warrior",
        cost: 2,
        rarity: Rarity::Common,
        attack: 2,
        health: 2,
    },
    CreatureArchetype {
        key: "knight",
        name: "Elven Knight",
        cost: 3,
        rarity: Rarity::Uncommon,
        attack: 3,
        health: 4,
    },
];

static SPELLS: [SpellArchetype; 3] = [
    SpellArchetype {
        key: "fireball",
        name: "Fireball",
        cost: 4,
        rarity: Rarity::Rare,
        effect: "damage",
    },
    SpellArchetype {
        key: "lightning",
        name: "Lightning Bolt",
        cost: 3,
        rarity: Rarity::Rare,
        effect: "damage",
    },
    SpellArchetype {
        key: "heal",
        name: "Healing Light",
        cost: 2,
        rarity: Rarity::Common,
        effect: "heal",
    },
];

static ARTIFACTS: [ArtifactArchetype; 2] = [
    ArtifactArchetype {
        key: "mana_ring",
        name: "Mana Ring",
        cost: 1,
        rarity: Rarity::Uncommon,
        durability: 5,
        effect: "+1 mana per turn",
    },
    ArtifactArchetype {
        key: "staff",
        name: "Wizard Staff",
        cost: 3,
        rarity: Rarity::Rare,
        durability: 3,
        effect: "+2 spell damage",
    },
];

#[derive(Clone, Debug)]
pub struct FantasyCardFactory {
    catalog: Catalog,
}

impl Default for FantasyCardFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl FantasyCardFactory {
    #[must_use]
    pub fn new() -> Self {
        Self {
            catalog: Catalog::new("Fantasy", &CREATURES, &SPELLS, &ARTIFACTS),
        }
    }
}

impl CardFactory for FantasyCardFactory {
    fn theme(&self) -> &str {
        self.catalog.theme()
    }

    fn create_creature(&self, spec: CardSpec) -> Result<Card> {
        self.catalog.creature(&spec)
    }

    fn create_spell(&self, spec: CardSpec) -> Result<Card> {
        self.catalog.spell(&spec)
    }

    fn create_artifact(&self, spec: CardSpec) -> Result<Card> {
        self.catalog.artifact(&spec)
    }

    fn create_themed_deck(&self, size: usize) -> Result<Deck> {
        themed_deck(&self.catalog, size)
    }

    fn supported_types(&self) -> SupportedTypes {
        self.catalog.supported_types()
    }
}
