//! The `Card` tagged union.
//!
//! Decks, hands and battlefields hold `Card` values. Every question about
//! what a card can do (its kind, whether it can fight or cast) is answered
//! by an exhaustive match here, so adding a kind is a compile error until
//! every dispatch site handles it.

use serde::{Deserialize, Serialize};

use super::artifact::ArtifactCard;
use super::attributes::Record;
use super::creature::CreatureCard;
use super::definition::{CardBase, CardIdentity, CardType};
use super::elite::EliteCard;
use super::spell::{SpellCard, SpellEffect};
use crate::abilities::{Combatable, Magical};
use crate::core::GameState;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Card {
    Creature(CreatureCard),
    Spell(SpellCard),
    Artifact(ArtifactCard),
    Elite(EliteCard),
}

impl Card {
    #[must_use]
    pub const fn card_type(&self) -> CardType {
        match self {
            Card::Creature(_) => CardType::Creature,
            Card::Spell(_) => CardType::Spell,
            Card::Artifact(_) => CardType::Artifact,
            Card::Elite(_) => CardType::Elite,
        }
    }

    /// Combat view of this card, if it can fight.
    #[must_use]
    pub fn as_combatable(&self) -> Option<&dyn Combatable> {
        match self {
            Card::Creature(c) => Some(c),
            Card::Elite(e) => Some(e),
            Card::Spell(_) | Card::Artifact(_) => None,
        }
    }

    #[must_use]
    pub fn as_combatable_mut(&mut self) -> Option<&mut dyn Combatable> {
        match self {
            Card::Creature(c) => Some(c),
            Card::Elite(e) => Some(e),
            Card::Spell(_) | Card::Artifact(_) => None,
        }
    }

    /// Magic view of this card, if it holds a mana pool.
    #[must_use]
    pub fn as_magical(&self) -> Option<&dyn Magical> {
        match self {
            Card::Elite(e) => Some(e),
            Card::Creature(_) | Card::Spell(_) | Card::Artifact(_) => None,
        }
    }

    #[must_use]
    pub fn as_magical_mut(&mut self) -> Option<&mut dyn Magical> {
        match self {
            Card::Elite(e) => Some(e),
            Card::Creature(_) | Card::Spell(_) | Card::Artifact(_) => None,
        }
    }

    /// Damage this card can put on the board when played.
    ///
    /// Fighters contribute their attack; damage spells their cost; everything
    /// else nothing.
    #[must_use]
    pub fn threat(&self) -> i64 {
        match self {
            Card::Creature(c) => c.attack_power(),
            Card::Elite(e) => e.attack_power(),
            Card::Spell(s) if *s.effect_type() == SpellEffect::Damage => i64::from(s.cost()),
            Card::Spell(_) | Card::Artifact(_) => 0,
        }
    }

    /// Whether the card stays on the battlefield after being played.
    #[must_use]
    pub const fn is_permanent(&self) -> bool {
        match self {
            Card::Creature(_) | Card::Elite(_) | Card::Artifact(_) => true,
            Card::Spell(_) => false,
        }
    }
}

impl CardIdentity for Card {
    fn base(&self) -> &CardBase {
        match self {
            Card::Creature(c) => c.base(),
            Card::Spell(s) => s.base(),
            Card::Artifact(a) => a.base(),
            Card::Elite(e) => e.base(),
        }
    }

    fn play(&self, state: &GameState) -> Record {
        match self {
            Card::Creature(c) => c.play(state),
            Card::Spell(s) => s.play(state),
            Card::Artifact(a) => a.play(state),
            Card::Elite(e) => e.play(state),
        }
    }

    fn card_info(&self) -> Record {
        match self {
            Card::Creature(c) => c.card_info(),
            Card::Spell(s) => s.card_info(),
            Card::Artifact(a) => a.card_info(),
            Card::Elite(e) => e.card_info(),
        }
    }
}

impl From<CreatureCard> for Card {
    fn from(card: CreatureCard) -> Self {
        Card::Creature(card)
    }
}

impl From<SpellCard> for Card {
    fn from(card: SpellCard) -> Self {
        Card::Spell(card)
    }
}

impl From<ArtifactCard> for Card {
    fn from(card: ArtifactCard) -> Self {
        Card::Artifact(card)
    }
}

impl From<EliteCard> for Card {
    fn from(card: EliteCard) -> Self {
        Card::Elite(card)
    }
}
