//! Character identity table and group resolution.

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Delimiter joining character names on a composite card.
pub const COMPOSITE_DELIMITER: char = '&';

/// Character cohort used as a placement-eligibility group.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Generation {
    First,
    Second,
    Third,
    Fourth,
}

impl Generation {
    /// Ordinal label used in rule messages ("2nd").
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Generation::First => "1st",
            Generation::Second => "2nd",
            Generation::Third => "3rd",
            Generation::Fourth => "4th",
        }
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} generation", self.label())
    }
}

/// Cross-generation grouping, also a placement-eligibility group.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    Aurora,
    Nocturne,
    Prism,
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Unit::Aurora => "Aurora",
            Unit::Nocturne => "Nocturne",
            Unit::Prism => "Prism",
        };
        f.write_str(name)
    }
}

/// One row of the roster table.
///
/// Guest characters have neither a generation nor a unit; they only reach
/// slots other than their own through an exception rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CharacterIdentity {
    pub name: &'static str,
    pub generation: Option<Generation>,
    pub unit: Option<Unit>,
}

const fn member(name: &'static str, generation: Generation, unit: Unit) -> CharacterIdentity {
    CharacterIdentity {
        name,
        generation: Some(generation),
        unit: Some(unit),
    }
}

const fn guest(name: &'static str) -> CharacterIdentity {
    CharacterIdentity {
        name,
        generation: None,
        unit: None,
    }
}

/// Every known character.
pub static ROSTER: &[CharacterIdentity] = &[
    member("Aiko Hoshino", Generation::First, Unit::Aurora),
    member("Mei Tachibana", Generation::First, Unit::Nocturne),
    member("Rin Kasuga", Generation::First, Unit::Prism),
    member("Hana Mizuki", Generation::Second, Unit::Aurora),
    member("Sora Takeda", Generation::Second, Unit::Nocturne),
    member("Yui Amano", Generation::Second, Unit::Prism),
    member("Kokoro Ishida", Generation::Third, Unit::Aurora),
    member("Nana Fujii", Generation::Third, Unit::Nocturne),
    member("Tsubaki Mori", Generation::Third, Unit::Prism),
    member("Ayane Sakaki", Generation::Third, Unit::Nocturne),
    member("Emi Sakuraba", Generation::Fourth, Unit::Aurora),
    member("Ran Oda", Generation::Fourth, Unit::Nocturne),
    member("Chiyo Kuroda", Generation::Fourth, Unit::Prism),
    guest("Izumi Katsuragi"),
];

/// Look up a single character by exact name.
#[must_use]
pub fn lookup(name: &str) -> Option<&'static CharacterIdentity> {
    ROSTER.iter().find(|c| c.name == name)
}

/// Check if a character name is a composite of several names.
#[must_use]
pub fn is_composite(name: &str) -> bool {
    name.contains(COMPOSITE_DELIMITER)
}

/// Split a character name into its constituent names.
///
/// A plain name yields a single element. Surrounding whitespace is trimmed
/// and empty fragments are dropped.
#[must_use]
pub fn split_composite(name: &str) -> SmallVec<[&str; 4]> {
    name.split(COMPOSITE_DELIMITER)
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect()
}

/// Generation and unit a character name resolves to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Groups {
    pub generation: Option<Generation>,
    pub unit: Option<Unit>,
}

/// Resolve the groups of a (possibly composite) character name.
///
/// Each group is resolved independently: a composite card spanning two
/// generations but a single unit still resolves to that unit.
#[must_use]
pub fn resolve_groups(name: &str) -> Groups {
    if !is_composite(name) {
        return lookup(name)
            .map(|c| Groups {
                generation: c.generation,
                unit: c.unit,
            })
            .unwrap_or_default();
    }

    let parts = split_composite(name);
    let identities: Option<SmallVec<[&CharacterIdentity; 4]>> =
        parts.iter().map(|part| lookup(part)).collect();

    match identities {
        Some(ids) if !ids.is_empty() => Groups {
            generation: common(ids.iter().map(|c| c.generation)),
            unit: common(ids.iter().map(|c| c.unit)),
        },
        _ => Groups::default(),
    }
}

/// The shared value of every item, or `None` if any differs or is missing.
fn common<T: Copy + PartialEq>(mut items: impl Iterator<Item = Option<T>>) -> Option<T> {
    let first = items.next()??;
    items.all(|item| item == Some(first)).then_some(first)
}
