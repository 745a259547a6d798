//! Turn simulation.
//!
//! `GameEngine` wires a [`CardFactory`] and a [`GameStrategy`] together.
//! Each simulated turn:
//!
//! 1. builds and shuffles a fresh themed deck if the draw pile is empty,
//! 2. tops the hand up to `hand_size`,
//! 3. lets the strategy pick plays against the enemy battlefield,
//! 4. moves played cards out of the hand (permanents are recorded as allies),
//! 5. has every played fighter attack the weakest enemy, removing the dead.
//!
//! Only the fighters played this turn attack. Allies from earlier turns are
//! a record of what has been played and take no further part in combat.
//!
//! ```
//! use deck_engine::core::EngineConfig;
//! use deck_engine::engine::GameEngine;
//! use deck_engine::factory::FantasyCardFactory;
//! use deck_engine::strategy::AggressiveStrategy;
//!
//! let mut engine = GameEngine::new(EngineConfig::default());
//! engine.configure_engine(
//!     Box::new(FantasyCardFactory::new()),
//!     Box::new(AggressiveStrategy::default()),
//! );
//!
//! let report = engine.simulate_turn().unwrap();
//! assert_eq!(report.turn, 1);
//! assert_eq!(engine.engine_status().turns_simulated, 1);
//! ```

mod report;

pub use report::{EngineStatus, TurnReport};

use crate::cards::{Card, CardIdentity};
use crate::combat::strike_into;
use crate::core::{EngineConfig, GameRng};
use crate::deck::Deck;
use crate::error::{GameError, Result};
use crate::factory::CardFactory;
use crate::strategy::GameStrategy;

pub struct GameEngine {
    config: EngineConfig,
    rng: GameRng,
    factory: Option<Box<dyn CardFactory>>,
    strategy: Option<Box<dyn GameStrategy>>,
    deck: Deck,
    hand: Vec<Card>,
    allies: Vec<Card>,
    enemies: Vec<Card>,
    decks_built: u32,
    turns_simulated: u32,
    total_damage: i64,
    cards_created: usize,
}

impl GameEngine {
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        let rng = GameRng::new(config.seed);
        Self {
            config,
            rng,
            factory: None,
            strategy: None,
            deck: Deck::new(),
            hand: Vec::new(),
            allies: Vec::new(),
            enemies: Vec::new(),
            decks_built: 0,
            turns_simulated: 0,
            total_damage: 0,
            cards_created: 0,
        }
    }

    /// Install the card source and the turn policy.
    ///
    /// Replaces any previous configuration; the deck, hand and battlefields
    /// are kept.
    pub fn configure_engine(
        &mut self,
        factory: Box<dyn CardFactory>,
        strategy: Box<dyn GameStrategy>,
    ) {
        log::info!(
            "engine configured: {} factory, {}",
            factory.theme(),
            strategy.strategy_name()
        );
        self.factory = Some(factory);
        self.strategy = Some(strategy);
    }

    /// Put an opposing card on the enemy battlefield.
    pub fn add_enemy(&mut self, card: Card) {
        log::debug!("enemy joins: {}", card.name());
        self.enemies.push(card);
    }

    pub fn simulate_turn(&mut self) -> Result<TurnReport> {
        let factory = self
            .factory
            .as_deref()
            .ok_or(GameError::NotConfigured("card factory"))?;
        let strategy = self
            .strategy
            .as_deref()
            .ok_or(GameError::NotConfigured("strategy"))?;

        if self.deck.is_empty() {
            let mut deck = factory.create_themed_deck(self.config.deck_size)?;
            deck.shuffle(&mut self.rng.for_context(&format!("deck-{}", self.decks_built)));
            self.decks_built += 1;
            self.cards_created += deck.len();
            self.deck = deck;
        }

        let missing = self.config.hand_size.saturating_sub(self.hand.len());
        self.hand.extend(self.deck.draw_hand(missing));

        let turn = self.turns_simulated + 1;
        let summary = strategy.execute_turn(&self.hand, &self.enemies);

        let mut slots: Vec<Option<Card>> = std::mem::take(&mut self.hand)
            .into_iter()
            .map(Some)
            .collect();
        let played: Vec<Card> = summary
            .hand_indices
            .iter()
            .filter_map(|&i| slots.get_mut(i).and_then(Option::take))
            .collect();
        self.hand = slots.into_iter().flatten().collect();

        let mut engagements = Vec::new();
        let mut enemies_defeated = Vec::new();
        for card in played {
            if let Some(target) = weakest_enemy(&self.enemies) {
                if let Some(engagement) = strike_into(&card, &mut self.enemies, target) {
                    if !engagement.defense.still_alive {
                        let fallen = self.enemies.remove(target);
                        log::debug!("{} defeated {}", card.name(), fallen.name());
                        enemies_defeated.push(fallen.name().to_string());
                    }
                    engagements.push(engagement);
                }
            }
            if card.is_permanent() {
                self.allies.push(card);
            }
        }

        self.turns_simulated = turn;
        self.total_damage += engagements
            .iter()
            .map(|e| e.defense.damage_taken)
            .sum::<i64>();
        log::info!(
            "turn {}: {} played {:?}, {} engagements, {} enemies defeated",
            turn,
            summary.strategy,
            summary.cards_played,
            engagements.len(),
            enemies_defeated.len()
        );

        Ok(TurnReport {
            turn,
            summary,
            engagements,
            enemies_defeated,
        })
    }

    #[must_use]
    pub fn engine_status(&self) -> EngineStatus {
        EngineStatus {
            turns_simulated: self.turns_simulated,
            strategy_used: self.strategy.as_ref().map(|s| s.strategy_name().to_string()),
            total_damage: self.total_damage,
            cards_created: self.cards_created,
        }
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    /// Every permanent played so far, in play order.
    ///
    /// Allies do not attack again after the turn they were played.
    #[must_use]
    pub fn allies(&self) -> &[Card] {
        &self.allies
    }

    #[must_use]
    pub fn enemies(&self) -> &[Card] {
        &self.enemies
    }
}

/// Index of the enemy fighter with the lowest health; first wins ties.
fn weakest_enemy(enemies: &[Card]) -> Option<usize> {
    enemies
        .iter()
        .enumerate()
        .filter_map(|(i, card)| card.as_combatable().map(|c| (i, c.combat_stats().health)))
        .min_by_key(|&(_, health)| health)
        .map(|(i, _)| i)
}
