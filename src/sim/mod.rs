//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed per-tick increments only
//! - Seeded RNG only
//! - No rendering or platform dependencies; collaborator side effects are
//!   emitted as [`state::GameEvent`]s for the session to drain

pub mod collision;
pub mod effects;
pub mod spawn;
pub mod state;
pub mod tick;

pub use effects::{Particle, ScorePopup};
pub use state::{Bell, BellKind, Character, Decoration, GameEvent, GameMode, GameState};
pub use tick::{TickInput, tick};
