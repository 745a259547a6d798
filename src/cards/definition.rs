//! Card identity shared by every card kind.
//!
//! `CardBase` holds the fields every card has (name, cost, rarity).
//! Each concrete kind embeds one and exposes it through `CardIdentity`,
//! whose provided methods produce the base play and info records that
//! kinds extend by merging.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::attributes::Record;
use crate::core::GameState;
use crate::error::{GameError, Result};

/// Descriptive rarity tag. Has no mechanical effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Uncommon => "Uncommon",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Legendary => "Legendary",
        }
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Card kind tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardType {
    Creature,
    Spell,
    Artifact,
    Elite,
}

impl CardType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            CardType::Creature => "Creature",
            CardType::Spell => "Spell",
            CardType::Artifact => "Artifact",
            CardType::Elite => "Elite",
        }
    }
}

impl fmt::Display for CardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity fields common to all cards.
///
/// The name is fixed at construction; there is no setter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardBase {
    name: String,
    cost: u32,
    rarity: Rarity,
}

impl CardBase {
    #[must_use]
    pub fn new(name: impl Into<String>, cost: u32, rarity: Rarity) -> Self {
        Self {
            name: name.into(),
            cost,
            rarity,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn cost(&self) -> u32 {
        self.cost
    }

    #[must_use]
    pub const fn rarity(&self) -> Rarity {
        self.rarity
    }

    /// Minimal effect record every play starts from.
    #[must_use]
    pub fn play_record(&self, state: &GameState) -> Record {
        log::trace!("turn {}: {} played for {} mana", state.turn, self.name, self.cost);
        Record::new()
            .with("card_played", self.name.as_str())
            .with("mana_used", self.cost)
    }

    /// Base info record: name, cost, rarity.
    #[must_use]
    pub fn info_record(&self) -> Record {
        Record::new()
            .with("name", self.name.as_str())
            .with("cost", self.cost)
            .with("rarity", self.rarity.as_str())
    }
}

/// Reject a construction-time value that is not strictly positive.
pub(crate) fn positive(card: &str, field: &'static str, value: i64) -> Result<()> {
    if value > 0 {
        return Ok(());
    }
    log::debug!("rejecting {card}: {field} = {value}");
    Err(GameError::Construction {
        card: card.to_string(),
        field,
        value,
        requirement: "must be positive",
    })
}

/// Reject a construction-time value below zero.
pub(crate) fn non_negative(card: &str, field: &'static str, value: i64) -> Result<()> {
    if value >= 0 {
        return Ok(());
    }
    log::debug!("rejecting {card}: {field} = {value}");
    Err(GameError::Construction {
        card: card.to_string(),
        field,
        value,
        requirement: "must not be negative",
    })
}

/// Behaviour shared by every card kind.
///
/// Implementors supply `base`; overrides of `play` and `card_info` must
/// merge onto the base record rather than build a fresh one.
pub trait CardIdentity {
    fn base(&self) -> &CardBase;

    fn name(&self) -> &str {
        self.base().name()
    }

    fn cost(&self) -> u32 {
        self.base().cost()
    }

    fn rarity(&self) -> Rarity {
        self.base().rarity()
    }

    /// Whether the card can be paid for with `available_mana`.
    fn is_playable(&self, available_mana: u32) -> bool {
        self.cost() <= available_mana
    }

    /// Play the card, describing its effect.
    fn play(&self, state: &GameState) -> Record {
        self.base().play_record(state)
    }

    fn card_info(&self) -> Record {
        self.base().info_record()
    }
}

impl CardIdentity for CardBase {
    fn base(&self) -> &CardBase {
        self
    }
}
