//! Card model: identity, kinds, and records.
//!
//! ## Key Types
//!
//! - `CardBase` / `CardIdentity`: name, cost, rarity, `play`, `card_info`
//! - `CreatureCard`: attack and health, unmitigated strikes
//! - `SpellCard`: an enumerated `SpellEffect`
//! - `ArtifactCard`: durability-limited ability
//! - `EliteCard`: both the combat and magic capability contracts
//! - `Card`: tagged union over the kinds above
//! - `Record`: key-value map returned by info and play

pub mod artifact;
pub mod attributes;
pub mod card;
pub mod creature;
pub mod definition;
pub mod elite;
pub mod spell;

pub use artifact::{AbilityActivation, ArtifactCard};
pub use attributes::{Record, Value};
pub use card::Card;
pub use creature::{CreatureCard, Strike, StrikeOutcome};
pub use definition::{CardBase, CardIdentity, CardType, Rarity};
pub use elite::{EliteCard, EliteStats};
pub use spell::{EffectResolution, SpellCard, SpellEffect};
