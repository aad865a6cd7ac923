//! Hidden stat challenge for the game engine
//!
//! The player sets a target total and an optional generation filter. Over
//! six rounds a random creature is drawn (never the same one twice while
//! fresh creatures remain) and the player locks one still-unused stat
//! category for it, revealing the value. After the sixth pick the revealed
//! values are summed and compared against the target.
//!
//! - [`catalog`]: immutable creature list and range filtering
//! - [`generation`]: the generation table and filter type
//! - [`draw`]: no-repeat draw policy with its fallback chain
//! - [`engine`]: the session state machine

pub mod catalog;
pub mod draw;
pub mod engine;
pub mod generation;
pub mod stats;

pub use catalog::{sprite_url, Catalog, CatalogError, Creature};
pub use draw::{draw_next, Draw, DrawTier};
pub use engine::{parse_target, BestStat, Evaluation, Phase, Pick, RoundEngine, Session};
pub use generation::{Generation, GenerationRange, GENERATIONS};
pub use stats::{ParseCategoryError, StatCategory, Stats};

use engine_core::draw::DrawSource;
use engine_core::typed::{ActionSpace, Capabilities, EngineId, Game};

/// Environment id reported by [`RoundEngine::engine_id`]
pub const ENV_ID: &str = "stat-challenge";

/// Everything the start form collects
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartRequest {
    /// Raw target text, validated by the engine
    pub target: String,
    pub generation: Generation,
}

impl StartRequest {
    pub fn new(target: impl Into<String>, generation: Generation) -> Self {
        Self {
            target: target.into(),
            generation,
        }
    }
}

impl<D: DrawSource + 'static> Game for RoundEngine<D> {
    type Setup = StartRequest;
    type Action = StatCategory;
    type Outcome = Evaluation;

    fn engine_id(&self) -> EngineId {
        EngineId {
            env_id: ENV_ID.to_string(),
            build_id: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities {
            id: self.engine_id(),
            max_horizon: StatCategory::COUNT as u32,
            action_space: ActionSpace::Discrete(StatCategory::COUNT as u32),
        }
    }

    fn start(&mut self, setup: Self::Setup) {
        RoundEngine::start(self, &setup.target, setup.generation);
    }

    fn step(&mut self, action: Self::Action) -> bool {
        self.choose_category(action);
        self.is_done()
    }

    fn reset(&mut self) {
        RoundEngine::reset(self);
    }

    fn is_done(&self) -> bool {
        self.session().phase() == Phase::Finished
    }

    fn outcome(&self) -> Option<Self::Outcome> {
        self.evaluate()
    }
}
