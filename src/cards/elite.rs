//! Elite cards: card identity plus both capability contracts.
//!
//! Elites fight with the armored damage model. An attack only declares raw
//! damage; the defender's `defend` subtracts its armor. Spells draw from a
//! mana pool at a flat `SPELL_MANA_COST`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::attributes::Record;
use super::definition::{non_negative, positive, CardBase, CardIdentity, Rarity};
use crate::abilities::combatable::label_of;
use crate::abilities::{
    AttackCommand, CombatStats, CombatType, Combatable, DefenseReport, MagicStats, Magical,
    ManaChannel, SpellCast, SPELL_MANA_COST,
};
use crate::core::GameState;
use crate::error::{GameError, Resource, Result};

/// Stat line for an elite, grouped to keep the constructor readable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EliteStats {
    pub attack_power: i64,
    pub health: i64,
    pub mana: i64,
    pub armor: i64,
    pub combat_type: CombatType,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EliteCard {
    base: CardBase,
    attack_power: i64,
    health: i64,
    mana: i64,
    armor: i64,
    combat_type: CombatType,
}

impl EliteCard {
    /// Create an elite.
    ///
    /// Attack power and health must be positive; mana and armor must not be
    /// negative.
    pub fn new(
        name: impl Into<String>,
        cost: u32,
        rarity: Rarity,
        stats: EliteStats,
    ) -> Result<Self> {
        let name = name.into();
        positive(&name, "attack_power", stats.attack_power)?;
        positive(&name, "health", stats.health)?;
        non_negative(&name, "mana", stats.mana)?;
        non_negative(&name, "armor", stats.armor)?;

        Ok(Self {
            base: CardBase::new(name, cost, rarity),
            attack_power: stats.attack_power,
            health: stats.health,
            mana: stats.mana,
            armor: stats.armor,
            combat_type: stats.combat_type,
        })
    }

    #[must_use]
    pub const fn attack_power(&self) -> i64 {
        self.attack_power
    }

    #[must_use]
    pub const fn health(&self) -> i64 {
        self.health
    }

    #[must_use]
    pub const fn mana(&self) -> i64 {
        self.mana
    }

    #[must_use]
    pub const fn armor(&self) -> i64 {
        self.armor
    }

    #[must_use]
    pub const fn combat_type(&self) -> CombatType {
        self.combat_type
    }
}

impl CardIdentity for EliteCard {
    fn base(&self) -> &CardBase {
        &self.base
    }

    fn play(&self, state: &GameState) -> Record {
        self.base.play_record(state).merge(
            Record::new()
                .with("effect", "Elite unit deployed")
                .with("combat_type", self.combat_type.as_str()),
        )
    }

    fn card_info(&self) -> Record {
        self.base.info_record().merge(
            Record::new()
                .with("type", "Elite")
                .with("attack", self.attack_power)
                .with("health", self.health)
                .with("mana", self.mana)
                .with("armor", self.armor)
                .with("combat_type", self.combat_type.as_str()),
        )
    }
}

impl Combatable for EliteCard {
    fn combat_name(&self) -> Option<&str> {
        Some(self.name())
    }

    fn attack(&self, target: &dyn Combatable) -> AttackCommand {
        AttackCommand {
            attacker: self.name().to_string(),
            target: label_of(target, "Enemy"),
            damage: self.attack_power,
            combat_type: self.combat_type,
        }
    }

    fn defend(&mut self, incoming_damage: i64) -> DefenseReport {
        let taken = (incoming_damage - self.armor).max(0);
        self.health -= taken;
        log::debug!(
            "{} takes {} of {} (armor {}), health now {}",
            self.name(),
            taken,
            incoming_damage,
            self.armor,
            self.health
        );

        DefenseReport {
            defender: self.name().to_string(),
            damage_taken: taken,
            damage_blocked: self.armor,
            still_alive: self.health > 0,
        }
    }

    fn combat_stats(&self) -> CombatStats {
        CombatStats {
            health: self.health,
            attack: self.attack_power,
            armor: self.armor,
        }
    }
}

impl Magical for EliteCard {
    fn cast_spell(&mut self, spell_name: &str, targets: &[&dyn Combatable]) -> Result<SpellCast> {
        if self.mana < SPELL_MANA_COST {
            return Err(GameError::InsufficientResource {
                card: self.name().to_string(),
                resource: Resource::Mana,
                required: SPELL_MANA_COST,
                available: self.mana,
            });
        }

        let names: SmallVec<[String; 4]> = targets
            .iter()
            .enumerate()
            .map(|(i, target)| label_of(*target, &format!("Enemy{i}")))
            .collect();

        self.mana -= SPELL_MANA_COST;
        log::debug!("{} casts {} ({} mana left)", self.name(), spell_name, self.mana);

        Ok(SpellCast {
            caster: self.name().to_string(),
            spell: spell_name.to_string(),
            targets: names,
            mana_used: SPELL_MANA_COST,
        })
    }

    fn channel_mana(&mut self, amount: u32) -> ManaChannel {
        self.mana = self.mana.saturating_add(i64::from(amount));
        ManaChannel {
            channeled: i64::from(amount),
            total_mana: self.mana,
        }
    }

    fn magic_stats(&self) -> MagicStats {
        MagicStats { mana: self.mana }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn elite(name: &str, attack_power: i64, health: i64, mana: i64, armor: i64) -> EliteCard {
        EliteCard::new(
            name,
            5,
            Rarity::Epic,
            EliteStats {
                attack_power,
                health,
                mana,
                armor,
                combat_type: CombatType::Melee,
            },
        )
        .unwrap()
    }

    #[test]
    fn test_construction_validation() {
        let stats = EliteStats {
            attack_power: 5,
            health: 5,
            mana: 8,
            armor: -1,
            combat_type: CombatType::Melee,
        };
        let err = EliteCard::new("Broken", 3, Rarity::Rare, stats).unwrap_err();
        assert!(matches!(err, GameError::Construction { field: "armor", .. }));

        let stats = EliteStats { armor: 0, health: 0, ..stats };
        let err = EliteCard::new("Broken", 3, Rarity::Rare, stats).unwrap_err();
        assert!(matches!(err, GameError::Construction { field: "health", .. }));
    }

    #[test]
    fn test_defend_subtracts_armor() {
        let mut warrior = elite("Arcane Warrior", 5, 5, 8, 3);
        let report = warrior.defend(5);

        assert_eq!(report.defender, "Arcane Warrior");
        assert_eq!(report.damage_taken, 2);
        assert_eq!(report.damage_blocked, 3);
        assert!(report.still_alive);
        assert_eq!(warrior.health(), 3);
    }

    #[test]
    fn test_defend_fully_blocked() {
        let mut warrior = elite("Arcane Warrior", 5, 5, 8, 3);
        let report = warrior.defend(2);

        assert_eq!(report.damage_taken, 0);
        assert_eq!(report.damage_blocked, 3);
        assert_eq!(warrior.health(), 5);

        // Blocked reports the armor value, not the absorbed amount
        let report = warrior.defend(1);
        assert_eq!(report.damage_blocked, 3);
    }

    #[test]
    fn test_health_can_go_negative() {
        let mut enemy = elite("Enemy", 5, 3, 1, 2);
        let report = enemy.defend(10);

        assert_eq!(report.damage_taken, 8);
        assert_eq!(enemy.health(), -5);
        assert!(!report.still_alive);
    }

    #[test]
    fn test_attack_declares_raw_damage() {
        let warrior = elite("Arcane Warrior", 5, 5, 8, 3);
        let enemy = elite("Enemy", 5, 3, 1, 2);

        let command = warrior.attack(&enemy);
        assert_eq!(command.attacker, "Arcane Warrior");
        assert_eq!(command.target, "Enemy");
        assert_eq!(command.damage, 5);
        assert_eq!(command.combat_type, CombatType::Melee);
        // Declaring the attack does not touch the target
        assert_eq!(enemy.health(), 3);
    }

    #[test]
    fn test_cast_spell_spends_fixed_cost() {
        let mut warrior = elite("Arcane Warrior", 5, 5, 8, 3);
        let enemy1 = elite("Enemy1", 5, 3, 1, 2);
        let enemy2 = elite("Enemy2", 5, 3, 1, 2);

        let cast = warrior.cast_spell("Fireball", &[&enemy1, &enemy2]).unwrap();
        assert_eq!(cast.caster, "Arcane Warrior");
        assert_eq!(cast.spell, "Fireball");
        assert_eq!(cast.targets.as_slice(), ["Enemy1", "Enemy2"]);
        assert_eq!(cast.mana_used, 4);
        assert_eq!(warrior.mana(), 4);
    }

    #[test]
    fn test_cast_spell_requires_mana() {
        let mut enemy = elite("Enemy", 5, 3, 3, 2);

        let err = enemy.cast_spell("Fireball", &[]).unwrap_err();
        assert!(matches!(
            err,
            GameError::InsufficientResource {
                resource: Resource::Mana,
                required: 4,
                available: 3,
                ..
            }
        ));
        assert_eq!(enemy.mana(), 3);
    }

    #[test]
    fn test_channel_mana_unbounded() {
        let mut warrior = elite("Arcane Warrior", 5, 5, 8, 3);
        let channel = warrior.channel_mana(3);

        assert_eq!(channel.channeled, 3);
        assert_eq!(channel.total_mana, 11);

        warrior.channel_mana(1_000);
        assert_eq!(warrior.magic_stats().mana, 1_011);

        let channel = warrior.channel_mana(0);
        assert_eq!(channel.channeled, 0);
        assert_eq!(channel.total_mana, 1_011);
    }

    #[test]
    fn test_channel_mana_saturates() {
        let mut warrior = elite("Arcane Warrior", 5, 5, i64::MAX - 10, 3);

        let channel = warrior.channel_mana(u32::MAX);
        assert_eq!(channel.total_mana, i64::MAX);
        assert_eq!(channel.channeled, i64::from(u32::MAX));

        warrior.channel_mana(u32::MAX);
        assert_eq!(warrior.mana(), i64::MAX);
        assert!(warrior.cast_spell("Fireball", &[]).is_ok());
        assert_eq!(warrior.mana(), i64::MAX - SPELL_MANA_COST);
    }

    #[test]
    fn test_info_and_stats() {
        let warrior = elite("Arcane Warrior", 5, 5, 8, 3);
        let info = warrior.card_info();

        assert_eq!(info.text("name"), Some("Arcane Warrior"));
        assert_eq!(info.text("rarity"), Some("Epic"));
        assert_eq!(info.text("type"), Some("Elite"));
        assert_eq!(info.int("mana"), Some(8));
        assert_eq!(info.int("armor"), Some(3));
        assert_eq!(info.text("combat_type"), Some("melee"));

        let stats = warrior.combat_stats();
        assert_eq!((stats.health, stats.attack, stats.armor), (5, 5, 3));
    }
}
