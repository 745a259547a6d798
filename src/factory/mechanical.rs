//! Mechanical theme: constructs, overloads, clockwork.

use super::catalog::{ArtifactArchetype, Catalog, CreatureArchetype, SpellArchetype};
use super::{themed_deck, CardFactory, CardSpec, SupportedTypes};
use crate::cards::{Card, Rarity};
use crate::deck::Deck;
use crate::error::Result;

static CREATURES: [CreatureArchetype; 3] = [
    CreatureArchetype {
        key: "drone",
        name: "Scout Drone",
        cost: 1,
        rarity: Rarity::Common,
        attack: 1,
        health: 2,
    },
    CreatureArchetype {
        key: "sentinel",
        name: "Iron Sentinel",
        cost: 4,
        rarity: Rarity::Rare,
        attack: 3,
        health: 7,
    },
    CreatureArchetype {
        key: "titan",
        name: "Steam Titan",
        cost: 6,
        rarity: Rarity::Legendary,
        attack: 8,
        health: 8,
    },
];

static SPELLS: [SpellArchetype; 3] = [
    SpellArchetype {
        key: "overload",
        name: "Power Overload",
        cost: 3,
        rarity: Rarity::Uncommon,
        effect: "damage",
    },
    SpellArchetype {
        key: "repair",
        name: "Field Repair",
        cost: 2,
        rarity: Rarity::Common,
        effect: "heal",
    },
    SpellArchetype {
        key: "jammer",
        name: "Signal Jammer",
        cost: 2,
        rarity: Rarity::Uncommon,
        effect: "debuff",
    },
];

static ARTIFACTS: [ArtifactArchetype; 2] = [
    ArtifactArchetype {
        key: "battery",
        name: "Spare Battery",
        cost: 1,
        rarity: Rarity::Common,
        durability: 2,
        effect: "+1 mana this turn",
    },
    ArtifactArchetype {
        key: "forge",
        name: "Clockwork Forge",
        cost: 4,
        rarity: Rarity::Epic,
        durability: 6,
        effect: "Assemble a drone each turn",
    },
];

#[derive(Clone, Debug)]
pub struct MechanicalCardFactory {
    catalog: Catalog,
}

impl Default for MechanicalCardFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl MechanicalCardFactory {
    #[must_use]
    pub fn new() -> Self {
        Self {
            catalog: Catalog::new("Mechanical", &CREATURES, &SPELLS, &ARTIFACTS),
        }
    }
}

impl CardFactory for MechanicalCardFactory {
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
