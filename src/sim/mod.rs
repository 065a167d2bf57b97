//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed per-frame stepping only
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod reveal;
pub mod state;
pub mod tick;

pub use reveal::RevealState;
pub use state::{Fruit, FruitKind, GameState, SliceEvent, TrailPoint};
pub use tick::{TickInput, spawn_fruit, tick};
