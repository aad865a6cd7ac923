//! Typed Game trait providing an ergonomic interface for turn-based games
//!
//! A game owns its session state outright. Front-ends drive it through the
//! four player-facing operations (`start`, `step`, `reset`, `outcome`) and
//! read whatever game-specific state they need to render.

/// Engine identification information
#[derive(Debug, Clone, PartialEq)]
pub struct EngineId {
    pub env_id: String,
    pub build_id: String,
}

/// Action space variants
#[derive(Debug, Clone, PartialEq)]
pub enum ActionSpace {
    /// `n` distinct actions, each usable at most once per session or not
    Discrete(u32),
}

/// Game capabilities and configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Capabilities {
    pub id: EngineId,
    /// Number of successful steps after which a session is always finished
    pub max_horizon: u32,
    pub action_space: ActionSpace,
}

/// Main trait for game implementations
///
/// Games implement this trait with their specific setup, action and outcome
/// types. Invalid or stale requests are rejected as no-ops rather than
/// errors: a caller that needs to know whether an action landed inspects the
/// game's state afterwards.
///
/// # Type Parameters
///
/// * `Setup` - Everything the player supplies before the first step
/// * `Action` - A single player move, should be small and Copy
/// * `Outcome` - End-of-session verdict, only defined once the game is done
///
/// # Example
///
/// ```rust
/// # use engine_core::typed::*;
/// struct Countdown {
///     remaining: u32,
///     running: bool,
/// }
///
/// impl Game for Countdown {
///     type Setup = u32;
///     type Action = ();
///     type Outcome = bool;
///
///     fn engine_id(&self) -> EngineId {
///         EngineId { env_id: "countdown".to_string(), build_id: "0.1.0".to_string() }
///     }
///     fn capabilities(&self) -> Capabilities {
///         Capabilities { id: self.engine_id(), max_horizon: 10, action_space: ActionSpace::Discrete(1) }
///     }
///     fn start(&mut self, setup: u32) {
///         if setup > 0 {
///             self.remaining = setup;
///             self.running = true;
///         }
///     }
///     fn step(&mut self, _action: ()) -> bool {
///         if self.running {
///             self.remaining -= 1;
///             self.running = self.remaining > 0;
///         }
///         self.is_done()
///     }
///     fn reset(&mut self) {
///         self.remaining = 0;
///         self.running = false;
///     }
///     fn is_done(&self) -> bool {
///         !self.running && self.remaining == 0
///     }
///     fn outcome(&self) -> Option<bool> {
///         self.is_done().then_some(true)
///     }
/// }
/// ```
pub trait Game: Send + Sync + 'static {
    /// Player-supplied configuration accepted by `start`
    type Setup;

    /// Action type - should be small and Copy
    type Action: Copy;

    /// End-of-session result
    type Outcome;

    /// Get engine identification information
    fn engine_id(&self) -> EngineId;

    /// Get game capabilities and configuration
    fn capabilities(&self) -> Capabilities;

    /// Begin a new session
    ///
    /// Invalid setups leave the game untouched.
    fn start(&mut self, setup: Self::Setup);

    /// Apply one player action
    ///
    /// # Returns
    ///
    /// Whether the session is finished after the action. Rejected actions
    /// leave the state unchanged and report the current `is_done()`.
    fn step(&mut self, action: Self::Action) -> bool;

    /// Discard the current session and return to the pre-start state
    fn reset(&mut self);

    /// Whether the session has reached its terminal state
    fn is_done(&self) -> bool;

    /// The session verdict, `None` until `is_done()` holds
    fn outcome(&self) -> Option<Self::Outcome>;
}
