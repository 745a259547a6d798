//! Turn context handed to cards when they are played.

use serde::{Deserialize, Serialize};

/// Snapshot of the turn a card is played in.
///
/// Cards read it but never own it; the engine advances it between turns.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// 1-based turn number (0 before the first turn).
    pub turn: u32,

    /// Mana still unspent this turn.
    pub available_mana: u32,
}

impl GameState {
    #[must_use]
    pub fn new(turn: u32, available_mana: u32) -> Self {
        Self {
            turn,
            available_mana,
        }
    }

    /// Deduct mana for a played card, saturating at zero.
    pub fn spend(&mut self, cost: u32) {
        self.available_mana = self.available_mana.saturating_sub(cost);
    }
}
