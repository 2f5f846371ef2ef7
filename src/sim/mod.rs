//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Injected randomness only
//! - Stable iteration order (insertion order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod rng;
pub mod score;
pub mod state;
pub mod tick;

pub use collision::{clamp_to_playfield, entities_overlap, rects_overlap};
pub use rng::{RandomSource, SequenceRandom};
pub use score::ScoreBridge;
pub use state::{Entity, GameEvent, GamePhase, GameState, Particle, Player};
pub use tick::{HeldKeys, Steering, TickInput, TickOutcome, tick};
