//! Stat categories and per-creature stat blocks

use std::fmt;
use std::str::FromStr;

/// One of the six hidden stat categories
///
/// Variant order is the display order. Selection during play is unordered,
/// but tie-breaks and listings follow this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StatCategory {
    Hp,
    Attack,
    Defense,
    SpecialAttack,
    SpecialDefense,
    Speed,
}

impl StatCategory {
    /// Number of categories, and therefore rounds in a session
    pub const COUNT: usize = 6;

    /// All categories in display order
    pub const ALL: [StatCategory; Self::COUNT] = [
        StatCategory::Hp,
        StatCategory::Attack,
        StatCategory::Defense,
        StatCategory::SpecialAttack,
        StatCategory::SpecialDefense,
        StatCategory::Speed,
    ];

    /// Display label
    pub fn label(self) -> &'static str {
        match self {
            StatCategory::Hp => "HP",
            StatCategory::Attack => "Attack",
            StatCategory::Defense => "Defense",
            StatCategory::SpecialAttack => "Sp. Atk",
            StatCategory::SpecialDefense => "Sp. Def",
            StatCategory::Speed => "Speed",
        }
    }

    /// Position in display order
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for StatCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when text names no stat category
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown stat category: {0:?}")]
pub struct ParseCategoryError(pub String);

impl FromStr for StatCategory {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Fold case and drop separators so "Sp. Atk", "sp-atk" and "SpAtk" agree
        let key: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();

        let category = match key.as_str() {
            "hp" | "hitpoints" => StatCategory::Hp,
            "attack" | "atk" => StatCategory::Attack,
            "defense" | "defence" | "def" => StatCategory::Defense,
            "spatk" | "spa" | "specialattack" => StatCategory::SpecialAttack,
            "spdef" | "spd" | "specialdefense" | "specialdefence" => StatCategory::SpecialDefense,
            "speed" | "spe" => StatCategory::Speed,
            _ => return Err(ParseCategoryError(s.to_string())),
        };
        Ok(category)
    }
}

/// Six stat values indexed by category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stats([u32; StatCategory::COUNT]);

impl Stats {
    /// Build from values in display order
    pub const fn new(values: [u32; StatCategory::COUNT]) -> Self {
        Self(values)
    }

    pub fn get(&self, category: StatCategory) -> u32 {
        self.0[category.index()]
    }

    /// Highest stat, earliest category winning ties
    pub fn best(&self) -> (StatCategory, u32) {
        let mut best = (StatCategory::ALL[0], self.0[0]);
        for category in StatCategory::ALL.into_iter().skip(1) {
            let value = self.get(category);
            if value > best.1 {
                best = (category, value);
            }
        }
        best
    }
}
