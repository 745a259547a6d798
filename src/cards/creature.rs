//! Creature cards.
//!
//! Creatures fight with the simple, unmitigated damage model: a strike
//! removes exactly the attacker's attack from the target's health.
//! Elite cards use the armored model in `elite.rs` instead.

use serde::{Deserialize, Serialize};

use super::attributes::Record;
use super::definition::{positive, CardBase, CardIdentity, Rarity};
use crate::abilities::combatable::label_of;
use crate::abilities::{AttackCommand, CombatStats, CombatType, Combatable, DefenseReport};
use crate::core::GameState;
use crate::error::Result;

/// A strike from one creature at another, not yet applied.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Strike {
    pub attacker: String,
    pub target: String,
    pub damage: i64,
}

/// Result of a strike once the target has taken it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrikeOutcome {
    pub attacker: String,
    pub target: String,
    pub damage_dealt: i64,
    /// The target's health reached zero or below.
    pub combat_resolved: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatureCard {
    base: CardBase,
    attack: i64,
    health: i64,
}

impl CreatureCard {
    /// Create a creature.
    ///
    /// Fails with `GameError::Construction` if `attack` or `health` is not
    /// strictly positive.
    pub fn new(
        name: impl Into<String>,
        cost: u32,
        rarity: Rarity,
        attack: i64,
        health: i64,
    ) -> Result<Self> {
        let name = name.into();
        positive(&name, "attack", attack)?;
        positive(&name, "health", health)?;

        Ok(Self {
            base: CardBase::new(name, cost, rarity),
            attack,
            health,
        })
    }

    #[must_use]
    pub const fn attack_power(&self) -> i64 {
        self.attack
    }

    #[must_use]
    pub const fn health(&self) -> i64 {
        self.health
    }

    /// Declare a strike at `target` for this creature's full attack.
    #[must_use]
    pub fn attack_target(&self, target: &CreatureCard) -> Strike {
        Strike {
            attacker: self.name().to_string(),
            target: target.name().to_string(),
            damage: self.attack,
        }
    }

    /// Take a strike: health drops by the full damage, with no floor.
    pub fn receive_strike(&mut self, strike: &Strike) -> StrikeOutcome {
        self.health -= strike.damage;
        log::debug!(
            "{} strikes {} for {} (health now {})",
            strike.attacker,
            self.name(),
            strike.damage,
            self.health
        );

        StrikeOutcome {
            attacker: strike.attacker.clone(),
            target: self.name().to_string(),
            damage_dealt: strike.damage,
            combat_resolved: self.health <= 0,
        }
    }
}

impl CardIdentity for CreatureCard {
    fn base(&self) -> &CardBase {
        &self.base
    }

    fn play(&self, state: &GameState) -> Record {
        self.base
            .play_record(state)
            .merge(Record::new().with("effect", "Creature summoned to battlefield"))
    }

    fn card_info(&self) -> Record {
        self.base.info_record().merge(
            Record::new()
                .with("type", "Creature")
                .with("attack", self.attack)
                .with("health", self.health),
        )
    }
}

/// Creatures can be targeted like any combatant. They have no armor, so
/// `defend` takes the full incoming damage.
impl Combatable for CreatureCard {
    fn combat_name(&self) -> Option<&str> {
        Some(self.name())
    }

    fn attack(&self, target: &dyn Combatable) -> AttackCommand {
        AttackCommand {
            attacker: self.name().to_string(),
            target: label_of(target, "Enemy"),
            damage: self.attack,
            combat_type: CombatType::Melee,
        }
    }

    fn defend(&mut self, incoming_damage: i64) -> DefenseReport {
        let taken = incoming_damage.max(0);
        self.health -= taken;

        DefenseReport {
            defender: self.name().to_string(),
            damage_taken: taken,
            damage_blocked: 0,
            still_alive: self.health > 0,
        }
    }

    fn combat_stats(&self) -> CombatStats {
        CombatStats {
            health: self.health,
            attack: self.attack,
            armor: 0,
        }
    }
}
