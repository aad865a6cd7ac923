//! Round engine: the session state machine
//!
//! ```text
//! Setup --start(valid)--> Playing --choose (6th)--> Finished
//! Playing --choose (1st..5th)--> Playing (round + 1)
//! any --reset--> Setup
//! ```
//!
//! The engine is the only writer of its `Session`. Every operation runs to
//! completion and leaves the session consistent; invalid or stale requests
//! are ignored rather than reported.

use std::collections::{BTreeSet, HashSet};
use std::sync::Arc;

use engine_core::draw::{DrawSource, SeededDraw};
use tracing::{debug, info};

use crate::catalog::{Catalog, Creature};
use crate::draw::draw_next;
use crate::generation::Generation;
use crate::stats::StatCategory;

/// Session lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Setup,
    Playing,
    Finished,
}

/// Highest stat of a creature
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BestStat {
    pub category: StatCategory,
    pub value: u32,
}

/// One completed round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pick {
    pub creature_id: u32,
    pub creature_name: String,
    pub category: StatCategory,
    /// The chosen stat, revealed when it was picked
    pub value: u32,
    pub best: BestStat,
}

/// End-of-session verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    pub did_win: bool,
    pub total: u64,
    pub target: u32,
}

/// Mutable state of a single game
///
/// While playing, `picks().len() == locked_categories().len() == round() - 1`.
/// Once finished all three equal six.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    target: u32,
    generation: Generation,
    locked: BTreeSet<StatCategory>,
    used_ids: HashSet<u32>,
    picks: Vec<Pick>,
    running_total: u64,
    round: u32,
    phase: Phase,
    current: Creature,
}

impl Session {
    fn setup(generation: Generation, preview: Creature) -> Self {
        Self {
            target: 0,
            generation,
            locked: BTreeSet::new(),
            used_ids: HashSet::new(),
            picks: Vec::new(),
            running_total: 0,
            round: 1,
            phase: Phase::Setup,
            current: preview,
        }
    }

    /// Target total; zero until a session starts
    pub fn target(&self) -> u32 {
        self.target
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn locked_categories(&self) -> &BTreeSet<StatCategory> {
        &self.locked
    }

    pub fn is_locked(&self, category: StatCategory) -> bool {
        self.locked.contains(&category)
    }

    /// Unlocked categories in display order
    pub fn remaining_categories(&self) -> Vec<StatCategory> {
        StatCategory::ALL
            .into_iter()
            .filter(|c| !self.locked.contains(c))
            .collect()
    }

    pub fn used_ids(&self) -> &HashSet<u32> {
        &self.used_ids
    }

    pub fn picks(&self) -> &[Pick] {
        &self.picks
    }

    pub fn running_total(&self) -> u64 {
        self.running_total
    }

    /// One-based round number
    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Creature on offer, or the preview in `Setup`; `None` once finished
    pub fn current_creature(&self) -> Option<&Creature> {
        (self.phase != Phase::Finished).then_some(&self.current)
    }
}

/// Parse a target the way the start form accepts it
///
/// Surrounding whitespace is ignored; anything other than a base-10 integer
/// in `1..=u32::MAX` is rejected.
pub fn parse_target(input: &str) -> Option<u32> {
    let input = input.trim();
    if input.is_empty() || !input.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    input.parse::<u32>().ok().filter(|&t| t > 0)
}

fn draw_creature<D: DrawSource + ?Sized>(
    catalog: &Catalog,
    generation: Generation,
    used: &HashSet<u32>,
    source: &mut D,
) -> Creature {
    let pool = catalog.filter_by_range(generation);
    let draw = draw_next(used, &pool, catalog, source);
    debug!(id = draw.creature.id, tier = ?draw.tier, "Drew creature");
    draw.creature.clone()
}

/// Owner of the session and the only code that mutates it
#[derive(Debug)]
pub struct RoundEngine<D = SeededDraw> {
    catalog: Arc<Catalog>,
    source: D,
    session: Session,
}

impl RoundEngine<SeededDraw> {
    /// Engine whose draws replay exactly for the same seed
    pub fn with_seed(catalog: Arc<Catalog>, seed: u64) -> Self {
        Self::new(catalog, SeededDraw::from_seed(seed))
    }
}

impl<D: DrawSource> RoundEngine<D> {
    /// Create an engine in `Setup` with a preview creature drawn from the
    /// whole catalog
    pub fn new(catalog: Arc<Catalog>, mut source: D) -> Self {
        let preview = draw_creature(&catalog, Generation::All, &HashSet::new(), &mut source);
        Self {
            catalog,
            source,
            session: Session::setup(Generation::All, preview),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Creatures eligible under the session's generation filter
    pub fn pool(&self) -> Vec<&Creature> {
        self.catalog.filter_by_range(self.session.generation)
    }

    /// Change the generation filter before starting
    ///
    /// Re-draws the preview creature from the new pool. Ignored outside
    /// `Setup`.
    pub fn select_generation(&mut self, generation: Generation) {
        if self.session.phase != Phase::Setup {
            debug!(phase = ?self.session.phase, "Ignoring generation change outside setup");
            return;
        }
        self.session.generation = generation;
        self.session.current =
            draw_creature(&self.catalog, generation, &HashSet::new(), &mut self.source);
    }

    /// Start a session
    ///
    /// Ignored unless the session is in `Setup` and `target_input` parses
    /// with [`parse_target`].
    pub fn start(&mut self, target_input: &str, generation: Generation) {
        if self.session.phase != Phase::Setup {
            debug!(phase = ?self.session.phase, "Ignoring start outside setup");
            return;
        }
        let Some(target) = parse_target(target_input) else {
            debug!(input = target_input, "Rejected target");
            return;
        };

        let used = HashSet::new();
        let current = draw_creature(&self.catalog, generation, &used, &mut self.source);
        self.session = Session {
            target,
            generation,
            locked: BTreeSet::new(),
            used_ids: used,
            picks: Vec::new(),
            running_total: 0,
            round: 1,
            phase: Phase::Playing,
            current,
        };
        info!(target, generation = %generation, "Session started");
    }

    /// Lock `category` for the current creature and reveal its value
    ///
    /// Ignored unless playing and `category` is still unlocked. Produces
    /// exactly one pick otherwise.
    pub fn choose_category(&mut self, category: StatCategory) {
        let session = &mut self.session;
        if session.phase != Phase::Playing || session.locked.contains(&category) {
            debug!(%category, phase = ?session.phase, "Ignoring category choice");
            return;
        }

        let creature = &session.current;
        let value = creature.stats.get(category);
        let (best_category, best_value) = creature.stats.best();
        session.picks.push(Pick {
            creature_id: creature.id,
            creature_name: creature.name.clone(),
            category,
            value,
            best: BestStat {
                category: best_category,
                value: best_value,
            },
        });
        session.locked.insert(category);
        session.used_ids.insert(creature.id);
        session.running_total += u64::from(value);

        if session.locked.len() == StatCategory::COUNT {
            session.phase = Phase::Finished;
            info!(
                total = session.running_total,
                target = session.target,
                "Session finished"
            );
        } else {
            session.round += 1;
            session.current = draw_creature(
                &self.catalog,
                session.generation,
                &session.used_ids,
                &mut self.source,
            );
        }
    }

    /// Discard the session and return to `Setup` with all fields cleared
    pub fn reset(&mut self) {
        let preview = draw_creature(&self.catalog, Generation::All, &HashSet::new(), &mut self.source);
        self.session = Session::setup(Generation::All, preview);
        debug!("Session reset");
    }

    /// Win/loss verdict, only defined once finished
    ///
    /// Meeting the target exactly counts as a win.
    pub fn evaluate(&self) -> Option<Evaluation> {
        if self.session.phase != Phase::Finished {
            return None;
        }
        Some(Evaluation {
            did_win: self.session.running_total >= u64::from(self.session.target),
            total: self.session.running_total,
            target: self.session.target,
        })
    }
}
