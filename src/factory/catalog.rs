//! Archetype catalogs backing the concrete factories.
//!
//! A catalog is static data: the creatures, spells and artifacts one theme
//! knows how to build. Lookup is by archetype key or card name (case
//! insensitive) or by power level.

use rustc_hash::FxHashMap;

use super::{CardSpec, SupportedTypes};
use crate::cards::{ArtifactCard, Card, CardType, CreatureCard, Rarity, SpellCard, SpellEffect};
use crate::error::{GameError, Result};

#[derive(Clone, Copy, Debug)]
pub struct CreatureArchetype {
    pub key: &'static str,
    pub name: &'static str,
    pub cost: u32,
    pub rarity: Rarity,
    pub attack: i64,
    pub health: i64,
}

#[derive(Clone, Copy, Debug)]
pub struct SpellArchetype {
    pub key: &'static str,
    pub name: &'static str,
    pub cost: u32,
    pub rarity: Rarity,
    /// Effect tag, parsed with `SpellEffect::parse`.
    pub effect: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct ArtifactArchetype {
    pub key: &'static str,
    pub name: &'static str,
    pub cost: u32,
    pub rarity: Rarity,
    pub durability: i64,
    pub effect: &'static str,
}

/// Common view over archetype kinds for lookup.
trait Archetype {
    fn key(&self) -> &'static str;
    fn name(&self) -> &'static str;
    fn cost(&self) -> u32;
}

macro_rules! impl_archetype {
    ($($ty:ty),*) => {$(
        impl Archetype for $ty {
            fn key(&self) -> &'static str {
                self.key
            }

            fn name(&self) -> &'static str {
                self.name
            }

            fn cost(&self) -> u32 {
                self.cost
            }
        }
    )*};
}

impl_archetype!(CreatureArchetype, SpellArchetype, ArtifactArchetype);

/// Archetypes of one theme, indexed for lookup.
#[derive(Clone, Debug)]
pub struct Catalog {
    theme: &'static str,
    creatures: &'static [CreatureArchetype],
    spells: &'static [SpellArchetype],
    artifacts: &'static [ArtifactArchetype],
    /// (kind, lowercase key or name) -> position in the kind's slice.
    index: FxHashMap<(CardType, String), usize>,
}

impl Catalog {
    #[must_use]
    pub fn new(
        theme: &'static str,
        creatures: &'static [CreatureArchetype],
        spells: &'static [SpellArchetype],
        artifacts: &'static [ArtifactArchetype],
    ) -> Self {
        let mut index = FxHashMap::default();
        index_kind(&mut index, CardType::Creature, creatures);
        index_kind(&mut index, CardType::Spell, spells);
        index_kind(&mut index, CardType::Artifact, artifacts);

        Self {
            theme,
            creatures,
            spells,
            artifacts,
            index,
        }
    }

    #[must_use]
    pub fn theme(&self) -> &'static str {
        self.theme
    }

    pub fn creature(&self, spec: &CardSpec) -> Result<Card> {
        let a = self.select(CardType::Creature, self.creatures, spec)?;
        Ok(CreatureCard::new(a.name, a.cost, a.rarity, a.attack, a.health)?.into())
    }

    pub fn spell(&self, spec: &CardSpec) -> Result<Card> {
        let a = self.select(CardType::Spell, self.spells, spec)?;
        Ok(SpellCard::new(a.name, a.cost, a.rarity, SpellEffect::parse(a.effect)).into())
    }

    pub fn artifact(&self, spec: &CardSpec) -> Result<Card> {
        let a = self.select(CardType::Artifact, self.artifacts, spec)?;
        Ok(ArtifactCard::new(a.name, a.cost, a.rarity, a.durability, a.effect)?.into())
    }

    /// Build the `n`-th card of a themed deck.
    ///
    /// Cycles creature, spell, artifact, and walks each kind's archetypes in
    /// catalog order.
    pub fn nth_card(&self, n: usize) -> Result<Card> {
        let round = n / 3;
        match n % 3 {
            0 => self.creature(&pick(self.creatures, round)),
            1 => self.spell(&pick(self.spells, round)),
            _ => self.artifact(&pick(self.artifacts, round)),
        }
    }

    /// Card names of every archetype, by kind.
    #[must_use]
    pub fn supported_types(&self) -> SupportedTypes {
        SupportedTypes {
            creatures: self.creatures.iter().map(|a| a.name.to_string()).collect(),
            spells: self.spells.iter().map(|a| a.name.to_string()).collect(),
            artifacts: self.artifacts.iter().map(|a| a.name.to_string()).collect(),
        }
    }

    fn select<'a, A: Archetype>(
        &self,
        kind: CardType,
        archetypes: &'a [A],
        spec: &CardSpec,
    ) -> Result<&'a A> {
        let found = match spec {
            CardSpec::Named(name) => self
                .index
                .get(&(kind, name.to_lowercase()))
                .map(|&i| &archetypes[i]),
            CardSpec::Power(level) => archetypes
                .iter()
                .filter(|a| a.cost() <= *level)
                .max_by_key(|a| a.cost())
                .or_else(|| archetypes.iter().min_by_key(|a| a.cost())),
        };

        found.ok_or_else(|| {
            log::debug!("{} factory has no {} for {:?}", self.theme, kind, spec);
            GameError::UnsupportedType {
                theme: self.theme.to_string(),
                kind,
                name: spec.to_string(),
            }
        })
    }
}

fn index_kind<A: Archetype>(
    index: &mut FxHashMap<(CardType, String), usize>,
    kind: CardType,
    archetypes: &[A],
) {
    for (i, a) in archetypes.iter().enumerate() {
        index.insert((kind, a.key().to_lowercase()), i);
        index.insert((kind, a.name().to_lowercase()), i);
    }
}

// An empty kind maps to a power lookup that finds nothing.
fn pick<A: Archetype>(archetypes: &[A], round: usize) -> CardSpec {
    match archetypes.len() {
        0 => CardSpec::Power(0),
        len => CardSpec::Named(archetypes[round % len].key().to_string()),
    }
}
