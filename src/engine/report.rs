//! Per-turn and per-session engine reports.

use serde::{Deserialize, Serialize};

use crate::cards::Record;
use crate::combat::Engagement;
use crate::strategy::TurnSummary;

/// Everything that happened in one simulated turn.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TurnReport {
    /// 1-based turn number.
    pub turn: u32,
    pub summary: TurnSummary,
    /// Attacks made by played fighters, in play order.
    pub engagements: Vec<Engagement>,
    /// Names of enemies removed from the battlefield this turn.
    pub enemies_defeated: Vec<String>,
}

/// Running totals for an engine session.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineStatus {
    pub turns_simulated: u32,
    /// Name of the configured strategy, if any.
    pub strategy_used: Option<String>,
    /// Damage enemies actually took, summed over every engagement.
    pub total_damage: i64,
    /// Cards built by the factory so far.
    pub cards_created: usize,
}

impl EngineStatus {
    #[must_use]
    pub fn to_record(&self) -> Record {
        Record::new()
            .with("turns_simulated", self.turns_simulated)
            .with("strategy_used", self.strategy_used.as_deref().unwrap_or("None"))
            .with("total_damage", self.total_damage)
            .with("cards_created", self.cards_created)
    }
}
