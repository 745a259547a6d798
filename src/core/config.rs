//! Engine configuration parameters.

use serde::{Deserialize, Serialize};

/// Tunables for a game session.
///
/// Every value has a default; use the `with_*` builders to override.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Cards drawn into the hand at the start of each simulated turn.
    pub hand_size: usize,

    /// Size of the themed deck built when the draw pile runs out.
    pub deck_size: usize,

    /// Mana available to a strategy each turn.
    pub mana_budget: u32,

    /// Seed for the shuffle RNG. Same seed, same game.
    pub seed: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            hand_size: 5,
            deck_size: 15,
            mana_budget: 10,
            seed: 42,
        }
    }
}

impl EngineConfig {
    pub fn with_hand_size(mut self, size: usize) -> Self {
        self.hand_size = size;
        self
    }

    pub fn with_deck_size(mut self, size: usize) -> Self {
        self.deck_size = size;
        self
    }

    pub fn with_mana_budget(mut self, mana: u32) -> Self {
        self.mana_budget = mana;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.hand_size, 5);
        assert_eq!(config.mana_budget, 10);
        assert_eq!(config.deck_size, 15);
    }

    #[test]
    fn test_builder() {
        let config = EngineConfig::default()
            .with_hand_size(3)
            .with_deck_size(6)
            .with_mana_budget(7)
            .with_seed(9);

        assert_eq!(config.hand_size, 3);
        assert_eq!(config.deck_size, 6);
        assert_eq!(config.mana_budget, 7);
        assert_eq!(config.seed, 9);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: EngineConfig = serde_json::from_str(r#"{"hand_size": 2}"#).unwrap();
        assert_eq!(config.hand_size, 2);
        assert_eq!(config.deck_size, 15);
        assert_eq!(config.seed, 42);
    }
}
