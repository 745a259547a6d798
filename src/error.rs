//! Error types for the card engine.
//!
//! Only genuine faults are errors. Expected misses (removing a card that is
//! not in the deck, drawing from an empty deck) are reported through `bool`
//! and `Option` results instead.

use std::fmt;

use thiserror::Error;

use crate::cards::CardType;

/// A consumable resource that can run out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Resource {
    /// Mana pool of a spellcaster.
    Mana,
    /// Remaining activations of an artifact.
    Durability,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resource::Mana => write!(f, "mana"),
            Resource::Durability => write!(f, "durability"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// A card was given an attribute outside its valid range.
    #[error("cannot construct {card}: {field} = {value} ({requirement})")]
    Construction {
        card: String,
        field: &'static str,
        value: i64,
        requirement: &'static str,
    },

    #[error("{card} has insufficient {resource}: needs {required}, has {available}")]
    InsufficientResource {
        card: String,
        resource: Resource,
        required: i64,
        available: i64,
    },

    /// A factory was asked for an archetype outside its manifest.
    #[error("{theme} factory cannot create {kind} archetype '{name}'")]
    UnsupportedType {
        theme: String,
        kind: CardType,
        name: String,
    },

    #[error("engine is not configured: missing {0}")]
    NotConfigured(&'static str),
}

pub type Result<T> = std::result::Result<T, GameError>;
