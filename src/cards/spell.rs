//! Spell cards.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::attributes::Record;
use super::definition::{CardBase, CardIdentity, Rarity};
use crate::core::GameState;

/// What a spell does when it resolves.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpellEffect {
    Damage,
    Heal,
    Buff,
    Debuff,
    /// Any effect the engine has no description for.
    Other(String),
}

impl SpellEffect {
    /// Parse an effect tag; unknown tags become `Other`.
    #[must_use]
    pub fn parse(tag: &str) -> Self {
        match tag.to_ascii_lowercase().as_str() {
            "damage" => SpellEffect::Damage,
            "heal" => SpellEffect::Heal,
            "buff" => SpellEffect::Buff,
            "debuff" => SpellEffect::Debuff,
            _ => SpellEffect::Other(tag.to_string()),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            SpellEffect::Damage => "damage",
            SpellEffect::Heal => "heal",
            SpellEffect::Buff => "buff",
            SpellEffect::Debuff => "debuff",
            SpellEffect::Other(tag) => tag,
        }
    }

    /// Player-facing description of the effect.
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            SpellEffect::Damage => "Deal damage to target",
            SpellEffect::Heal => "Heal target",
            SpellEffect::Buff => "Buff target",
            SpellEffect::Debuff => "Debuff target",
            SpellEffect::Other(_) => "Unknown spell effect",
        }
    }
}

impl From<&str> for SpellEffect {
    fn from(tag: &str) -> Self {
        SpellEffect::parse(tag)
    }
}

impl fmt::Display for SpellEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Record of a spell's effect landing on its targets.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectResolution {
    pub effect_applied: String,
    /// Target names joined with ", ".
    pub applied_to: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellCard {
    base: CardBase,
    effect_type: SpellEffect,
}

impl SpellCard {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        cost: u32,
        rarity: Rarity,
        effect_type: impl Into<SpellEffect>,
    ) -> Self {
        Self {
            base: CardBase::new(name, cost, rarity),
            effect_type: effect_type.into(),
        }
    }

    #[must_use]
    pub fn effect_type(&self) -> &SpellEffect {
        &self.effect_type
    }

    /// Apply this spell's effect to `targets`.
    pub fn resolve_effect<'a, I, T>(&self, targets: I) -> EffectResolution
    where
        I: IntoIterator<Item = &'a T>,
        T: CardIdentity + 'a,
    {
        let names: Vec<&str> = targets.into_iter().map(CardIdentity::name).collect();
        EffectResolution {
            effect_applied: self.effect_type.to_string(),
            applied_to: names.join(", "),
        }
    }
}

impl CardIdentity for SpellCard {
    fn base(&self) -> &CardBase {
        &self.base
    }

    fn play(&self, state: &GameState) -> Record {
        self.base
            .play_record(state)
            .merge(Record::new().with("effect", self.effect_type.description()))
    }

    fn card_info(&self) -> Record {
        self.base.info_record().merge(
            Record::new()
                .with("type", "Spell")
                .with("effect_type", self.effect_type.as_str()),
        )
    }
}
