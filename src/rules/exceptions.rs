//! Named exceptions to the base placement rule.
//!
//! Each exception is a plain record: a trigger on the card and a placement
//! condition on the slot. The table is evaluated top to bottom and the first
//! triggered rule is decisive, so the order of `STANDARD_RULES` is part of
//! the rules themselves.

use crate::cards::{Card, Rarity};
use crate::roster::{CharacterIdentity, Generation, Groups, Unit};
use crate::topology::{SlotEntry, SlotRole};

/// A generation or unit a composite card must resolve to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GroupMatch {
    Generation(Generation),
    Unit(Unit),
}

impl GroupMatch {
    fn matches(self, groups: Groups) -> bool {
        match self {
            GroupMatch::Generation(g) => groups.generation == Some(g),
            GroupMatch::Unit(u) => groups.unit == Some(u),
        }
    }
}

/// Which cards an exception applies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RuleTrigger {
    /// Exact character name.
    Character(&'static str),
    /// Composite card whose members all share the group.
    Composite(GroupMatch),
    /// Card of a specific rarity from a specific generation.
    RarityOf {
        rarity: Rarity,
        generation: Generation,
    },
}

impl RuleTrigger {
    /// Check the trigger against a card and its resolved groups.
    #[must_use]
    pub fn matches(&self, card: &Card, groups: Groups) -> bool {
        match *self {
            RuleTrigger::Character(name) => card.character_name == name,
            RuleTrigger::Composite(group) => card.is_composite() && group.matches(groups),
            RuleTrigger::RarityOf { rarity, generation } => {
                card.rarity == rarity && groups.generation == Some(generation)
            }
        }
    }
}

/// Which slots a triggered card may occupy.
///
/// The slot's role must be listed in `roles`, and its character must belong
/// to one of `generations` or one of `units`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlacementCondition {
    pub roles: &'static [SlotRole],
    pub generations: &'static [Generation],
    pub units: &'static [Unit],
}

impl PlacementCondition {
    /// Check a slot against this condition.
    ///
    /// `character` is the roster entry of the slot's assigned character.
    #[must_use]
    pub fn admits(&self, entry: &SlotEntry, character: Option<&CharacterIdentity>) -> bool {
        if !self.roles.contains(&entry.role) {
            return false;
        }
        let Some(character) = character else {
            return false;
        };
        character.generation.is_some_and(|g| self.generations.contains(&g))
            || character.unit.is_some_and(|u| self.units.contains(&u))
    }
}

/// One named exception.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExceptionRule {
    pub name: &'static str,
    pub trigger: RuleTrigger,
    pub placement: PlacementCondition,
    /// Reported when the trigger matches but the placement does not.
    pub reason: &'static str,
}

const SIDE_ONLY: &[SlotRole] = &[SlotRole::Side];

/// Exceptions in priority order.
pub static STANDARD_RULES: &[ExceptionRule] = &[
    ExceptionRule {
        name: "second-gen-legend",
        trigger: RuleTrigger::RarityOf {
            rarity: Rarity::TOP,
            generation: Generation::Second,
        },
        placement: PlacementCondition {
            roles: SIDE_ONLY,
            generations: &[Generation::First, Generation::Second, Generation::Third],
            units: &[],
        },
        reason: "2nd generation LR cards may only be placed in side slots of the 1st, 2nd or 3rd generation",
    },
    ExceptionRule {
        name: "guest-izumi",
        trigger: RuleTrigger::Character("Izumi Katsuragi"),
        placement: PlacementCondition {
            roles: SIDE_ONLY,
            generations: &[Generation::Third, Generation::Fourth],
            units: &[],
        },
        reason: "Izumi Katsuragi may only be placed in side slots of the 3rd or 4th generation",
    },
    ExceptionRule {
        name: "third-gen-duo",
        trigger: RuleTrigger::Composite(GroupMatch::Generation(Generation::Third)),
        placement: PlacementCondition {
            roles: SIDE_ONLY,
            generations: &[Generation::Second, Generation::Third, Generation::Fourth],
            units: &[],
        },
        reason: "3rd generation duo cards may only be placed in side slots of the 2nd, 3rd or 4th generation",
    },
    ExceptionRule {
        name: "nocturne-duo",
        trigger: RuleTrigger::Composite(GroupMatch::Unit(Unit::Nocturne)),
        placement: PlacementCondition {
            roles: SIDE_ONLY,
            generations: &[],
            units: &[Unit::Nocturne],
        },
        reason: "Nocturne duo cards may only be placed in Nocturne side slots",
    },
];
