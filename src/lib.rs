//! # deck-engine
//!
//! A small turn-based card game engine.
//!
//! ## Design Principles
//!
//! 1. **Closed Card Model**: `Card` is an enum over the four card kinds.
//!    Capabilities are looked up by exhaustive match, so adding a kind is a
//!    compile error everywhere it matters.
//!
//! 2. **Orthogonal Capabilities**: Fighting (`Combatable`) and spellcasting
//!    (`Magical`) are separate traits. A card has either, both, or neither.
//!
//! 3. **Commands Over Shared Mutation**: An attack is computed from the
//!    attacker as a value and then applied to the defender. Two cards are
//!    never borrowed mutably at once.
//!
//! ## Modules
//!
//! - `core`: RNG, configuration, turn state
//! - `cards`: Card kinds, records, the `Card` enum
//! - `abilities`: `Combatable` and `Magical` capability traits
//! - `combat`: Attack resolution between cards
//! - `deck`: Deck pile and statistics
//! - `strategy`: Turn policies
//! - `factory`: Themed card factories
//! - `engine`: Turn simulation tying factory and strategy together

pub mod abilities;
pub mod cards;
pub mod combat;
pub mod core;
pub mod deck;
pub mod engine;
pub mod error;
pub mod factory;
pub mod strategy;

// Re-export commonly used types
pub use crate::core::{EngineConfig, GameRng, GameState};

pub use crate::error::{GameError, Resource, Result};

pub use crate::cards::{
    ArtifactCard, Card, CardBase, CardIdentity, CardType, CreatureCard, EliteCard, EliteStats,
    Rarity, Record, SpellCard, SpellEffect, Value,
};

pub use crate::abilities::{
    AttackCommand, CombatStats, CombatType, Combatable, DefenseReport, MagicStats, Magical,
    ManaChannel, SpellCast, SPELL_MANA_COST,
};

pub use crate::combat::Engagement;

pub use crate::deck::{Deck, DeckStats};

pub use crate::strategy::{AggressiveStrategy, GameStrategy, TurnSummary};

pub use crate::factory::{
    CardFactory, CardSpec, FantasyCardFactory, MechanicalCardFactory, SupportedTypes,
};

pub use crate::engine::{EngineStatus, GameEngine, TurnReport};
