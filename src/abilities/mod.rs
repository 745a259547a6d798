//! Capability contracts that cards can opt into.
//!
//! - `Combatable`: attack, defend, combat stats
//! - `Magical`: cast spells, channel mana, magic stats
//!
//! The contracts are orthogonal to card identity and to each other. A card
//! kind implements none, one, or both; `Card` exposes them through
//! exhaustive matches (`as_combatable`, `as_magical_mut`).

pub mod combatable;
pub mod magical;

pub use combatable::{AttackCommand, CombatStats, CombatType, Combatable, DefenseReport};
pub use magical::{MagicStats, Magical, ManaChannel, SpellCast, SPELL_MANA_COST};
