//! Combat capability contract.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::Record;

/// Fighting style of a combatant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CombatType {
    Melee,
    Ranged,
    Magic,
}

impl CombatType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            CombatType::Melee => "melee",
            CombatType::Ranged => "ranged",
            CombatType::Magic => "magic",
        }
    }
}

impl fmt::Display for CombatType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An attack declared against a target, not yet applied.
///
/// Carries the raw damage only. Mitigation is the defender's business,
/// applied when the command reaches the defender's `defend`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackCommand {
    pub attacker: String,
    pub target: String,
    pub damage: i64,
    pub combat_type: CombatType,
}

/// Outcome of a defender absorbing incoming damage.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefenseReport {
    pub defender: String,
    pub damage_taken: i64,
    pub damage_blocked: i64,
    pub still_alive: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatStats {
    pub health: i64,
    pub attack: i64,
    pub armor: i64,
}

impl CombatStats {
    #[must_use]
    pub fn to_record(&self) -> Record {
        Record::new()
            .with("health", self.health)
            .with("attack", self.attack)
            .with("armor", self.armor)
    }
}

/// Something that can attack, be attacked, and report combat stats.
///
/// Independent of card identity: a type may implement this without being
/// a card, and a card kind may or may not implement it.
pub trait Combatable {
    /// Display name used in combat reports; `None` for anonymous combatants.
    fn combat_name(&self) -> Option<&str> {
        None
    }

    /// Declare an attack on `target`. Does not mutate the target.
    fn attack(&self, target: &dyn Combatable) -> AttackCommand;

    /// Absorb `incoming_damage`, applying this combatant's own mitigation.
    fn defend(&mut self, incoming_damage: i64) -> DefenseReport;

    fn combat_stats(&self) -> CombatStats;
}

/// Name to show for a combatant, falling back to `fallback`.
pub(crate) fn label_of(combatant: &dyn Combatable, fallback: &str) -> String {
    combatant
        .combat_name()
        .map_or_else(|| fallback.to_string(), str::to_string)
}
