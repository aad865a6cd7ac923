//! Core traits and types shared by turn-based games
//! 
//! This crate provides the fundamental abstractions used by game crates and
//! their front-ends:
//! - `Game`: Typed trait describing a single-session, turn-based game
//! - `DrawSource`: Injectable source of uniform random draws
//! - `SeededDraw`: ChaCha-backed draw source for reproducible sessions

pub mod typed;
pub mod draw;

// Re-export main types for convenience
pub use typed::{Game, EngineId, Capabilities, ActionSpace};
pub use draw::{DrawSource, SeededDraw, choose};
