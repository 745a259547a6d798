//! Magic capability contract.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::combatable::Combatable;
use crate::cards::Record;
use crate::error::Result;

/// Mana consumed by any spell, whatever the spell.
pub const SPELL_MANA_COST: i64 = 4;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellCast {
    pub caster: String,
    pub spell: String,
    pub targets: SmallVec<[String; 4]>,
    pub mana_used: i64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManaChannel {
    pub channeled: i64,
    pub total_mana: i64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MagicStats {
    pub mana: i64,
}

impl MagicStats {
    #[must_use]
    pub fn to_record(&self) -> Record {
        Record::new().with("mana", self.mana)
    }
}

/// Something that holds a mana pool and casts spells from it.
pub trait Magical {
    /// Cast `spell_name` at `targets`, paying `SPELL_MANA_COST`.
    ///
    /// Fails with `InsufficientResource` when the pool cannot pay; the pool
    /// is left untouched in that case.
    fn cast_spell(&mut self, spell_name: &str, targets: &[&dyn Combatable]) -> Result<SpellCast>;

    /// Add `amount` to the mana pool.
    ///
    /// Channeling only ever grows the pool; it saturates at `i64::MAX`
    /// instead of overflowing.
    fn channel_mana(&mut self, amount: u32) -> ManaChannel;

    fn magic_stats(&self) -> MagicStats;
}
