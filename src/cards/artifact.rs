//! Artifact cards.

use serde::{Deserialize, Serialize};

use super::attributes::Record;
use super::definition::{non_negative, CardBase, CardIdentity, Rarity};
use crate::core::GameState;
use crate::error::{GameError, Resource, Result};

/// Result of activating an artifact's ability.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityActivation {
    /// Durability left after this activation.
    pub durability: i64,
    pub effect: String,
}

/// A permanent with a limited number of ability activations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactCard {
    base: CardBase,
    durability: i64,
    effect: String,
}

impl ArtifactCard {
    /// Create an artifact. Fails if `durability` is negative.
    pub fn new(
        name: impl Into<String>,
        cost: u32,
        rarity: Rarity,
        durability: i64,
        effect: impl Into<String>,
    ) -> Result<Self> {
        let name = name.into();
        non_negative(&name, "durability", durability)?;

        Ok(Self {
            base: CardBase::new(name, cost, rarity),
            durability,
            effect: effect.into(),
        })
    }

    #[must_use]
    pub const fn durability(&self) -> i64 {
        self.durability
    }

    #[must_use]
    pub fn effect(&self) -> &str {
        &self.effect
    }

    /// Use the artifact once, spending one point of durability.
    ///
    /// An exhausted artifact (durability 0) refuses with
    /// `InsufficientResource` and stays at 0.
    pub fn activate_ability(&mut self) -> Result<AbilityActivation> {
        if self.durability < 1 {
            return Err(GameError::InsufficientResource {
                card: self.name().to_string(),
                resource: Resource::Durability,
                required: 1,
                available: self.durability,
            });
        }

        self.durability -= 1;
        log::debug!("{} activated, {} durability left", self.name(), self.durability);

        Ok(AbilityActivation {
            durability: self.durability,
            effect: self.effect.clone(),
        })
    }
}

impl CardIdentity for ArtifactCard {
    fn base(&self) -> &CardBase {
        &self.base
    }

    fn play(&self, state: &GameState) -> Record {
        self.base
            .play_record(state)
            .merge(Record::new().with("effect", self.effect.as_str()))
    }

    fn card_info(&self) -> Record {
        self.base.info_record().merge(
            Record::new()
                .with("type", "Artifact")
                .with("durability", self.durability)
                .with("effect", self.effect.as_str()),
        )
    }
}
