//! Turn strategies.
//!
//! A strategy looks at a hand and the opposing battlefield and decides what
//! to play and what to hit. It only decides; applying the decisions (moving
//! cards, resolving combat) is the engine's job.

mod aggressive;

pub use aggressive::AggressiveStrategy;

use serde::{Deserialize, Serialize};

use crate::abilities::Combatable;
use crate::cards::{Card, Record};

/// Decisions made for one turn.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TurnSummary {
    pub strategy: String,
    /// Names of played cards, in play order.
    pub cards_played: Vec<String>,
    /// Hand positions of the played cards, in play order.
    pub hand_indices: Vec<usize>,
    pub mana_used: u32,
    pub mana_remaining: u32,
    /// `play` record of each played card, in play order.
    pub play_results: Vec<Record>,
    /// Battlefield targets, most urgent first.
    pub targets: Vec<String>,
    /// Damage the played cards threaten.
    pub damage_dealt: i64,
}

/// Policy for playing a turn.
pub trait GameStrategy {
    /// Decide which cards from `hand` to play against `battlefield`.
    fn execute_turn(&self, hand: &[Card], battlefield: &[Card]) -> TurnSummary;

    fn strategy_name(&self) -> &str;

    /// Order targets weakest first (ascending current health).
    ///
    /// The sort is stable: equally healthy targets keep their input order.
    fn prioritize_targets<'a>(
        &self,
        candidates: Vec<&'a dyn Combatable>,
    ) -> Vec<&'a dyn Combatable> {
        let mut ordered = candidates;
        ordered.sort_by_key(|target| target.combat_stats().health);
        ordered
    }
}

/// Combat-capable cards of a battlefield, in battlefield order.
pub fn combatants(battlefield: &[Card]) -> Vec<&dyn Combatable> {
    battlefield.iter().filter_map(Card::as_combatable).collect()
}
