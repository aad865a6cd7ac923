//! Immutable creature catalog
//!
//! The catalog is loaded once, before the first session starts, and is only
//! ever read afterwards. Sessions share it through an `Arc`.

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::generation::Generation;
use crate::stats::Stats;

/// A creature with its six stats
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Creature {
    pub id: u32,
    pub name: String,
    pub stats: Stats,
}

impl Creature {
    pub fn new(id: u32, name: impl Into<String>, stats: Stats) -> Self {
        Self {
            id,
            name: name.into(),
            stats,
        }
    }
}

/// Error type for catalog construction and loading
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Catalog contains no creatures")]
    Empty,
    #[error("Duplicate creature id: {0}")]
    DuplicateId(u32),
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] toml::de::Error),
}

/// On-disk shape of one catalog entry
#[derive(Debug, Deserialize)]
struct CreatureRecord {
    id: u32,
    name: String,
    hp: u32,
    attack: u32,
    defense: u32,
    sp_atk: u32,
    sp_def: u32,
    speed: u32,
}

impl From<CreatureRecord> for Creature {
    fn from(r: CreatureRecord) -> Self {
        Creature::new(
            r.id,
            r.name,
            Stats::new([r.hp, r.attack, r.defense, r.sp_atk, r.sp_def, r.speed]),
        )
    }
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    creature: Vec<CreatureRecord>,
}

static BUILTIN: Lazy<Arc<Catalog>> = Lazy::new(|| {
    let creatures = vec![
        Creature::new(981, "Farigiraf", Stats::new([120, 90, 70, 110, 70, 60])),
        Creature::new(1, "Bulbasaur", Stats::new([45, 49, 49, 65, 65, 45])),
        Creature::new(4, "Charmander", Stats::new([39, 52, 43, 60, 50, 65])),
        Creature::new(7, "Squirtle", Stats::new([44, 48, 65, 50, 64, 43])),
        Creature::new(25, "Pikachu", Stats::new([35, 55, 40, 50, 50, 90])),
    ];
    Arc::new(Catalog { creatures })
});

/// Ordered, non-empty list of creatures with unique ids
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    creatures: Vec<Creature>,
}

impl Catalog {
    /// Build a catalog, rejecting empty input and repeated ids
    pub fn new(creatures: Vec<Creature>) -> Result<Self, CatalogError> {
        if creatures.is_empty() {
            return Err(CatalogError::Empty);
        }
        let mut seen = HashSet::with_capacity(creatures.len());
        for creature in &creatures {
            if !seen.insert(creature.id) {
                return Err(CatalogError::DuplicateId(creature.id));
            }
        }
        Ok(Self { creatures })
    }

    /// The small dataset compiled into the binary
    pub fn builtin() -> Arc<Catalog> {
        Arc::clone(&BUILTIN)
    }

    /// Parse `[[creature]]` tables
    pub fn from_toml_str(text: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(text)?;
        Self::new(file.creature.into_iter().map(Creature::from).collect())
    }

    /// Read and parse a catalog file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let catalog = Self::from_toml_str(&text)?;
        tracing::debug!(
            path = %path.as_ref().display(),
            creatures = catalog.len(),
            "Loaded catalog"
        );
        Ok(catalog)
    }

    /// Every creature, in catalog order
    pub fn all(&self) -> &[Creature] {
        &self.creatures
    }

    /// Creatures admitted by `generation`, in catalog order
    ///
    /// May be empty when a range matches nothing in this catalog.
    pub fn filter_by_range(&self, generation: Generation) -> Vec<&Creature> {
        self.creatures
            .iter()
            .filter(|c| generation.admits(c.id))
            .collect()
    }

    /// First creature in catalog order; catalogs are never empty
    pub fn first(&self) -> &Creature {
        &self.creatures[0]
    }

    pub fn get(&self, id: u32) -> Option<&Creature> {
        self.creatures.iter().find(|c| c.id == id)
    }

    pub fn len(&self) -> usize {
        self.creatures.len()
    }

    /// Whether the catalog has no creatures
    pub fn is_empty(&self) -> bool {
        self.creatures.is_empty()
    }
}

/// Stable sprite location for a creature id
pub fn sprite_url(id: u32) -> String {
    format!("https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/{id}.png")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::StatCategory;

    const SAMPLE: &str = r#"
        [[creature]]
        id = 152
        name = "Chikorita"
        hp = 45
        attack = 49
        defense = 65
        sp_atk = 49
        sp_def = 65
        speed = 45

        [[creature]]
        id = 1
        name = "Bulbasaur"
        hp = 45
        attack = 49
        defense = 49
        sp_atk = 65
        sp_def = 65
        speed = 45
    "#;

    #[test]
    fn test_builtin_catalog() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 5);
        assert!(!catalog.is_empty());
        assert_eq!(catalog.all()[0].name, "Farigiraf");

        let farigiraf = catalog.get(981).unwrap();
        assert_eq!(farigiraf.stats.get(StatCategory::Hp), 120);
        assert_eq!(farigiraf.stats.get(StatCategory::SpecialAttack), 110);
    }

    #[test]
    fn test_builtin_is_shared() {
        assert!(Arc::ptr_eq(&Catalog::builtin(), &Catalog::builtin()));
    }

    #[test]
    fn test_filter_all_returns_everything_in_order() {
        let catalog = Catalog::builtin();
        let ids: Vec<u32> = catalog.filter_by_range(Generation::All).iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![981, 1, 4, 7, 25]);
    }

    #[test]
    fn test_filter_by_range() {
        let catalog = Catalog::builtin();

        let gen1 = catalog.filter_by_range(Generation::from_key("1").unwrap());
        let ids: Vec<u32> = gen1.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 4, 7, 25]);

        let gen9 = catalog.filter_by_range(Generation::from_key("9").unwrap());
        assert_eq!(gen9.len(), 1);
        assert_eq!(gen9[0].name, "Farigiraf");
    }

    #[test]
    fn test_filter_may_be_empty() {
        let catalog = Catalog::builtin();
        assert!(catalog.filter_by_range(Generation::from_key("5").unwrap()).is_empty());
    }

    #[test]
    fn test_new_rejects_empty() {
        assert!(matches!(Catalog::new(Vec::new()), Err(CatalogError::Empty)));
    }

    #[test]
    fn test_new_rejects_duplicate_ids() {
        let stats = Stats::new([1; 6]);
        let result = Catalog::new(vec![
            Creature::new(7, "Squirtle", stats),
            Creature::new(7, "Imposter", stats),
        ]);
        assert!(matches!(result, Err(CatalogError::DuplicateId(7))));
    }

    #[test]
    fn test_from_toml_str() {
        let catalog = Catalog::from_toml_str(SAMPLE).unwrap();
        assert_eq!(catalog.len(), 2);

        let chikorita = catalog.get(152).unwrap();
        assert_eq!(chikorita.stats, Stats::new([45, 49, 65, 49, 65, 45]));
        assert_eq!(catalog.all()[1].name, "Bulbasaur");
    }

    #[test]
    fn test_from_toml_str_errors() {
        assert!(matches!(Catalog::from_toml_str(""), Err(CatalogError::Empty)));

        let missing_speed = r#"
            [[creature]]
            id = 1
            name = "Bulbasaur"
            hp = 45
            attack = 49
            defense = 49
            sp_atk = 65
            sp_def = 65
        "#;
        assert!(matches!(Catalog::from_toml_str(missing_speed), Err(CatalogError::Parse(_))));
    }

    #[test]
    fn test_shipped_data_file_parses() {
        let catalog = Catalog::from_toml_str(include_str!("../data/creatures.toml")).unwrap();
        assert!(catalog.len() > StatCategory::COUNT);
        for generation in crate::generation::GENERATIONS {
            assert!(!catalog.filter_by_range(Generation::Range(generation)).is_empty());
        }
    }

    #[test]
    fn test_load_missing_file() {
        let result = Catalog::load("/nonexistent/creatures.toml");
        assert!(matches!(result, Err(CatalogError::Io(_))));
    }

    #[test]
    fn test_sprite_url() {
        assert_eq!(
            sprite_url(25),
            "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/25.png"
        );
    }
}
