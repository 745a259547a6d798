//! Aggressive strategy: spend as much mana as possible, cheapest first.

use super::{combatants, GameStrategy, TurnSummary};
use crate::abilities::combatable::label_of;
use crate::cards::{Card, CardIdentity};
use crate::core::{EngineConfig, GameState};

/// Greedy cheapest-first play within a fixed mana budget.
///
/// This is not an optimal knapsack: a cheap card is always played before a
/// pricier one, even if skipping it would spend the budget more fully.
#[derive(Clone, Debug)]
pub struct AggressiveStrategy {
    mana_budget: u32,
}

impl Default for AggressiveStrategy {
    fn default() -> Self {
        Self { mana_budget: 10 }
    }
}

impl AggressiveStrategy {
    #[must_use]
    pub fn new(mana_budget: u32) -> Self {
        Self { mana_budget }
    }

    /// Budget taken from the session configuration.
    #[must_use]
    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(config.mana_budget)
    }

    #[must_use]
    pub fn mana_budget(&self) -> u32 {
        self.mana_budget
    }
}

impl GameStrategy for AggressiveStrategy {
    fn execute_turn(&self, hand: &[Card], battlefield: &[Card]) -> TurnSummary {
        let mut order: Vec<usize> = (0..hand.len()).collect();
        order.sort_by_key(|&i| hand[i].cost());

        let mut state = GameState::new(0, self.mana_budget);
        let mut summary = TurnSummary {
            strategy: self.strategy_name().to_string(),
            ..TurnSummary::default()
        };

        for index in order {
            let card = &hand[index];
            if !card.is_playable(state.available_mana) {
                continue;
            }
            summary.play_results.push(card.play(&state));
            summary.cards_played.push(card.name().to_string());
            summary.hand_indices.push(index);
            summary.damage_dealt += card.threat();
            state.spend(card.cost());
        }

        summary.mana_remaining = state.available_mana;
        summary.mana_used = self.mana_budget - state.available_mana;
        summary.targets = self
            .prioritize_targets(combatants(battlefield))
            .into_iter()
            .map(|target| label_of(target, "Enemy"))
            .collect();

        log::debug!(
            "{}: played {:?} for {} mana, targets {:?}",
            summary.strategy,
            summary.cards_played,
            summary.mana_used,
            summary.targets
        );
        summary
    }

    fn strategy_name(&self) -> &str {
        "AggressiveStrategy"
    }
}
