//! Card model scenarios.
//!
//! These tests walk the card kinds through play, combat and resource use
//! the way a game would, through the public API only.

use deck_engine::abilities::{CombatType, Combatable, Magical, SPELL_MANA_COST};
use deck_engine::cards::{
    ArtifactCard, Card, CardIdentity, CreatureCard, EliteCard, EliteStats, Rarity, SpellCard,
    SpellEffect,
};
use deck_engine::combat::{clash, resolve_strike};
use deck_engine::core::GameState;
use deck_engine::deck::Deck;
use deck_engine::error::{GameError, Resource};

fn battlemage(mana: i64) -> EliteCard {
    EliteCard::new(
        "Arcane Knight",
        6,
        Rarity::Legendary,
        EliteStats {
            attack_power: 5,
            health: 10,
            mana,
            armor: 3,
            combat_type: CombatType::Magic,
        },
    )
    .unwrap()
}

/// Dragon strikes a goblin: overkill is recorded, not clamped.
#[test]
fn test_dragon_kills_goblin() {
    let dragon = CreatureCard::new("Fire Dragon", 5, Rarity::Legendary, 7, 5).unwrap();
    let mut goblin = CreatureCard::new("Goblin", 2, Rarity::Common, 1, 2).unwrap();

    let outcome = resolve_strike(&dragon, &mut goblin);

    assert_eq!(goblin.health(), -5);
    assert!(outcome.combat_resolved);
    assert_eq!(outcome.attacker, "Fire Dragon");
    assert_eq!(outcome.target, "Goblin");
    assert_eq!(outcome.damage_dealt, 7);
}

/// A creature, a spell and an artifact make a 3.3 average.
#[test]
fn test_mixed_deck_stats() {
    let deck: Deck = vec![
        Card::from(CreatureCard::new("Fire Dragon", 5, Rarity::Legendary, 7, 5).unwrap()),
        Card::from(SpellCard::new("Lightning Bolt", 3, Rarity::Rare, SpellEffect::Damage)),
        Card::from(ArtifactCard::new("Mana Crystal", 2, Rarity::Epic, 3, "+1 mana").unwrap()),
    ]
    .into_iter()
    .collect();

    let stats = deck.deck_stats().to_record();
    assert_eq!(stats.int("total_cards"), Some(3));
    assert_eq!(stats.int("creatures"), Some(1));
    assert_eq!(stats.int("spells"), Some(1));
    assert_eq!(stats.int("artifacts"), Some(1));
    assert_eq!(stats.float("avg_cost"), Some(3.3));
}

/// Every card's info record is a superset of the base identity fields.
#[test]
fn test_info_records_extend_base() {
    let cards: Vec<Card> = vec![
        CreatureCard::new("Wolf", 2, Rarity::Common, 2, 3).unwrap().into(),
        SpellCard::new("Mend", 1, Rarity::Common, "heal").into(),
        ArtifactCard::new("Lantern", 2, Rarity::Uncommon, 2, "Reveal").unwrap().into(),
        battlemage(8).into(),
    ];

    for card in &cards {
        let info = card.card_info();
        assert_eq!(info.text("name"), Some(card.name()));
        assert_eq!(info.int("cost"), Some(i64::from(card.cost())));
        assert_eq!(info.text("rarity"), Some(card.rarity().as_str()));
        assert_eq!(info.text("type"), Some(card.card_type().as_str()));
    }
}

/// Playing any card reports the card and the mana available at play time.
#[test]
fn test_play_records() {
    let state = GameState::new(3, 7);
    let cards: Vec<Card> = vec![
        CreatureCard::new("Wolf", 2, Rarity::Common, 2, 3).unwrap().into(),
        SpellCard::new("Zap", 1, Rarity::Common, SpellEffect::Damage).into(),
        battlemage(8).into(),
    ];

    let effects: Vec<String> = cards
        .iter()
        .map(|card| {
            let record = card.play(&state);
            assert_eq!(record.text("card_played"), Some(card.name()));
            assert_eq!(record.int("mana_used"), Some(i64::from(card.cost())));
            record.text("effect").unwrap_or_default().to_string()
        })
        .collect();

    assert_eq!(effects[0], "Creature summoned to battlefield");
    assert_eq!(effects[1], "Deal damage to target");
    assert!(effects[2].starts_with("Elite unit deployed"));
}

/// An artifact runs down to zero and then refuses.
#[test]
fn test_artifact_exhaustion() {
    let mut ring = ArtifactCard::new("Mana Ring", 1, Rarity::Uncommon, 2, "+1 mana").unwrap();

    assert_eq!(ring.activate_ability().unwrap().durability, 1);
    assert_eq!(ring.activate_ability().unwrap().durability, 0);

    let err = ring.activate_ability().unwrap_err();
    assert!(matches!(
        err,
        GameError::InsufficientResource {
            resource: Resource::Durability,
            available: 0,
            ..
        }
    ));
    assert_eq!(ring.durability(), 0);
}

/// An elite casts while it can afford it, then channels to recover.
#[test]
fn test_elite_spellcasting_cycle() {
    let mut mage = battlemage(SPELL_MANA_COST + 1);
    let target = CreatureCard::new("Orc", 3, Rarity::Common, 3, 6).unwrap();

    let cast = mage.cast_spell("Arcane Blast", &[&target]).unwrap();
    assert_eq!(cast.caster, "Arcane Knight");
    assert_eq!(cast.mana_used, SPELL_MANA_COST);
    assert_eq!(cast.targets.as_slice(), ["Orc".to_string()]);
    assert_eq!(mage.mana(), 1);

    let err = mage.cast_spell("Arcane Blast", &[&target]).unwrap_err();
    assert!(matches!(err, GameError::InsufficientResource { resource: Resource::Mana, .. }));
    assert_eq!(mage.mana(), 1);

    let channel = mage.channel_mana(3);
    assert_eq!(channel.total_mana, 4);
    assert!(mage.cast_spell("Arcane Blast", &[]).is_ok());
    assert_eq!(mage.magic_stats().mana, 0);
}

/// Two fighters in the same battlefield trade blows; armor applies.
#[test]
fn test_battlefield_clash() {
    let mut battlefield: Vec<Card> = vec![
        CreatureCard::new("Troll", 4, Rarity::Rare, 6, 9).unwrap().into(),
        battlemage(0).into(),
    ];

    let first = clash(&mut battlefield, 0, 1).unwrap();
    assert_eq!(first.attack.damage, 6);
    assert_eq!(first.defense.damage_taken, 3);
    assert_eq!(first.defense.damage_blocked, 3);

    let second = clash(&mut battlefield, 1, 0).unwrap();
    assert_eq!(second.attack.combat_type, CombatType::Magic);
    assert_eq!(second.defense.damage_taken, 5);

    let healths: Vec<i64> = battlefield
        .iter()
        .filter_map(Card::as_combatable)
        .map(|c| c.combat_stats().health)
        .collect();
    assert_eq!(healths, vec![4, 7]);
}

/// Record field names are stable when serialised.
#[test]
fn test_record_field_names() {
    let dragon: Card = CreatureCard::new("Fire Dragon", 5, Rarity::Legendary, 7, 5).unwrap().into();
    let json = serde_json::to_value(dragon.card_info()).unwrap();

    assert_eq!(json["name"], "Fire Dragon");
    assert_eq!(json["cost"], 5);
    assert_eq!(json["rarity"], "Legendary");
    assert_eq!(json["type"], "Creature");
    assert_eq!(json["attack"], 7);
    assert_eq!(json["health"], 5);
}
