//! Generation filters over creature identifiers

use std::fmt;

/// Closed interval `[start, end]` of creature ids
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationRange {
    pub key: &'static str,
    pub start: u32,
    pub end: u32,
}

impl GenerationRange {
    pub fn contains(&self, id: u32) -> bool {
        self.start <= id && id <= self.end
    }
}

/// Canonical generation table, in selection order
pub const GENERATIONS: [GenerationRange; 9] = [
    GenerationRange { key: "1", start: 1, end: 151 },
    GenerationRange { key: "2", start: 152, end: 252 },
    GenerationRange { key: "3", start: 253, end: 386 },
    GenerationRange { key: "4", start: 387, end: 493 },
    GenerationRange { key: "5", start: 494, end: 649 },
    GenerationRange { key: "6", start: 650, end: 721 },
    GenerationRange { key: "7", start: 722, end: 809 },
    GenerationRange { key: "8", start: 810, end: 905 },
    GenerationRange { key: "9", start: 906, end: 1025 },
];

/// Key of the no-filter sentinel
pub const ALL_KEY: &str = "all";

/// A session's generation filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Generation {
    /// No filtering
    #[default]
    All,
    Range(GenerationRange),
}

impl Generation {
    /// Exact lookup: `"all"` or a key from `GENERATIONS`
    pub fn from_key(key: &str) -> Option<Generation> {
        if key == ALL_KEY {
            return Some(Generation::All);
        }
        GENERATIONS
            .iter()
            .find(|range| range.key == key)
            .map(|range| Generation::Range(*range))
    }

    /// Lookup that treats unknown keys as `All`
    ///
    /// Front-ends call this before handing a selection to the engine.
    pub fn resolve(key: &str) -> Generation {
        Self::from_key(key.trim()).unwrap_or_else(|| {
            tracing::debug!(key, "Unknown generation key, using all generations");
            Generation::All
        })
    }

    pub fn key(&self) -> &'static str {
        match self {
            Generation::All => ALL_KEY,
            Generation::Range(range) => range.key,
        }
    }

    pub fn admits(&self, id: u32) -> bool {
        match self {
            Generation::All => true,
            Generation::Range(range) => range.contains(id),
        }
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Generation::All => f.write_str("All"),
            Generation::Range(r) => write!(f, "Gen {} ({}-{})", r.key, r.start, r.end),
        }
    }
}
