//! Combat resolution.
//!
//! Attacks are computed as values (`Strike`, `AttackCommand`) from a shared
//! borrow of the attacker and only then applied to the defender. Attacker
//! and defender are therefore never borrowed at the same time, which is
//! what lets two cards in the same battlefield slice fight each other.

use serde::{Deserialize, Serialize};

use crate::abilities::{AttackCommand, Combatable, DefenseReport};
use crate::cards::{Card, CreatureCard, StrikeOutcome};

/// A declared attack together with the defender's response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Engagement {
    pub attack: AttackCommand,
    pub defense: DefenseReport,
}

/// Creature-on-creature strike: full damage, no armor.
pub fn resolve_strike(attacker: &CreatureCard, target: &mut CreatureCard) -> StrikeOutcome {
    let strike = attacker.attack_target(target);
    target.receive_strike(&strike)
}

/// Hand an attack command to the defender, who applies its own mitigation.
pub fn apply_attack(command: &AttackCommand, defender: &mut dyn Combatable) -> DefenseReport {
    let report = defender.defend(command.damage);
    log::debug!(
        "{} ({}) -> {}: {} raw, {} taken, {} blocked",
        command.attacker,
        command.combat_type,
        report.defender,
        command.damage,
        report.damage_taken,
        report.damage_blocked
    );
    report
}

/// Declare and apply an attack between two combatants.
pub fn resolve_attack(attacker: &dyn Combatable, defender: &mut dyn Combatable) -> Engagement {
    let attack = attacker.attack(&*defender);
    let defense = apply_attack(&attack, defender);
    Engagement { attack, defense }
}

/// Have `attacker` fight `defender`, both drawn from the same card slice.
///
/// Returns `None` if either index is out of bounds, they are the same card,
/// or either card cannot fight.
pub fn clash(cards: &mut [Card], attacker: usize, defender: usize) -> Option<Engagement> {
    if attacker == defender || attacker >= cards.len() || defender >= cards.len() {
        return None;
    }

    let attack = {
        let source = cards[attacker].as_combatable()?;
        let target = cards[defender].as_combatable()?;
        source.attack(target)
    };
    let defense = apply_attack(&attack, cards[defender].as_combatable_mut()?);
    Some(Engagement { attack, defense })
}

/// Attack from a card outside `targets` into one of them.
///
/// Returns `None` if the attacker cannot fight, the index is out of bounds,
/// or the target cannot fight.
pub fn strike_into(attacker: &Card, targets: &mut [Card], defender: usize) -> Option<Engagement> {
    let source = attacker.as_combatable()?;
    let target = targets.get_mut(defender)?.as_combatable_mut()?;
    Some(resolve_attack(source, target))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abilities::CombatType;
    use crate::cards::{CardIdentity, EliteCard, EliteStats, Rarity, SpellCard, SpellEffect};

    fn elite(name: &str, attack_power: i64, health: i64, armor: i64) -> EliteCard {
        EliteCard::new(
            name,
            4,
            Rarity::Epic,
            EliteStats {
                attack_power,
                health,
                mana: 8,
                armor,
                combat_type: CombatType::Ranged,
            },
        )
        .unwrap()
    }

    #[test]
    fn test_resolve_strike() {
        let dragon = CreatureCard::new("Fire Dragon", 5, Rarity::Legendary, 7, 5).unwrap();
        let mut goblin = CreatureCard::new("Goblin Warrior", 2, Rarity::Common, 1, 2).unwrap();

        let outcome = resolve_strike(&dragon, &mut goblin);
        assert_eq!(goblin.health(), -5);
        assert!(outcome.combat_resolved);
    }

    #[test]
    fn test_resolve_attack_uses_defender_armor() {
        let warrior = elite("Arcane Warrior", 5, 5, 3);
        let mut enemy = elite("Enemy", 5, 3, 2);

        let engagement = resolve_attack(&warrior, &mut enemy);
        assert_eq!(engagement.attack.damage, 5);
        assert_eq!(engagement.attack.target, "Enemy");
        assert_eq!(engagement.defense.damage_taken, 3);
        assert!(!engagement.defense.still_alive);
        assert_eq!(enemy.health(), 0);
    }

    #[test]
    fn test_elite_attacking_creature_is_unmitigated() {
        let warrior = elite("Arcane Warrior", 5, 5, 3);
        let mut goblin = CreatureCard::new("Goblin Warrior", 2, Rarity::Common, 1, 2).unwrap();

        let engagement = resolve_attack(&warrior, &mut goblin);
        assert_eq!(engagement.defense.damage_taken, 5);
        assert_eq!(goblin.health(), -3);
    }

    #[test]
    fn test_clash_within_one_slice() {
        let mut cards: Vec<Card> = vec![
            elite("Left", 4, 6, 1).into(),
            elite("Right", 2, 6, 1).into(),
        ];

        let engagement = clash(&mut cards, 0, 1).unwrap();
        assert_eq!(engagement.defense.defender, "Right");
        assert_eq!(engagement.defense.damage_taken, 3);
        assert_eq!(cards[1].card_info().int("health"), Some(3));
        assert_eq!(cards[0].card_info().int("health"), Some(6));
    }

    #[test]
    fn test_clash_rejects_non_fighters() {
        let mut cards: Vec<Card> = vec![
            elite("Left", 4, 6, 1).into(),
            SpellCard::new("Bolt", 1, Rarity::Common, SpellEffect::Damage).into(),
        ];

        assert!(clash(&mut cards, 0, 1).is_none());
        assert!(clash(&mut cards, 1, 0).is_none());
        assert!(clash(&mut cards, 0, 0).is_none());
        assert!(clash(&mut cards, 0, 7).is_none());
        assert_eq!(cards[0].name(), "Left");
    }

    #[test]
    fn test_strike_into() {
        let attacker: Card = elite("Raider", 6, 4, 0).into();
        let mut targets: Vec<Card> = vec![elite("Guard", 1, 5, 2).into()];

        let engagement = strike_into(&attacker, &mut targets, 0).unwrap();
        assert_eq!(engagement.defense.damage_taken, 4);
        assert!(strike_into(&attacker, &mut targets, 3).is_none());
    }
}
