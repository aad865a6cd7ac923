//! No-repeat draw policy with widening fallback

use std::collections::HashSet;

use engine_core::draw::{choose, DrawSource};

use crate::catalog::{Catalog, Creature};

/// Which step of the fallback chain produced a draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawTier {
    /// Unused creature from the session pool
    Pool,
    /// Pool exhausted; unused creature from the whole catalog
    Catalog,
    /// Whole catalog exhausted; any creature, repeats allowed
    Repeat,
}

/// Result of one draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Draw<'a> {
    pub creature: &'a Creature,
    pub tier: DrawTier,
}

/// Draw the next creature for a session
///
/// Tries, in order: unused pool entries, unused catalog entries, then any
/// catalog entry. Each step picks uniformly among its candidates. The result
/// repeats an id from `used` only in the last step.
pub fn draw_next<'a, D>(
    used: &HashSet<u32>,
    pool: &[&'a Creature],
    catalog: &'a Catalog,
    source: &mut D,
) -> Draw<'a>
where
    D: DrawSource + ?Sized,
{
    let fresh: Vec<&'a Creature> = pool
        .iter()
        .copied()
        .filter(|c| !used.contains(&c.id))
        .collect();
    if let Some(creature) = choose(source, &fresh) {
        return Draw { creature, tier: DrawTier::Pool };
    }

    let fresh: Vec<&'a Creature> = catalog
        .all()
        .iter()
        .filter(|c| !used.contains(&c.id))
        .collect();
    if let Some(creature) = choose(source, &fresh) {
        tracing::debug!(
            pool = pool.len(),
            used = used.len(),
            id = creature.id,
            "Pool exhausted, drawing from the full catalog"
        );
        return Draw { creature, tier: DrawTier::Catalog };
    }

    let creature = choose(source, catalog.all()).unwrap_or_else(|| catalog.first());
    tracing::warn!(
        catalog = catalog.len(),
        id = creature.id,
        "Catalog exhausted, repeating a creature"
    );
    Draw { creature, tier: DrawTier::Repeat }
}
