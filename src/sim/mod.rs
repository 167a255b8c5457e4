//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed per-tick steps only
//! - Seeded RNG only
//! - No rendering, audio, or platform dependencies
//!
//! Observers (render/audio/UI) call [`tick`] and then read state snapshots
//! and the [`GameEvent`]s emitted during that tick.

pub mod collision;
pub mod grid;
pub mod policy;
pub mod state;
pub mod tick;

pub use collision::{Aabb, cell_at, separation_push};
pub use grid::{Grid, LAYOUT, ObstacleKind};
pub use policy::drive_enemy;
pub use state::{
    Direction, ExplosionTint, GameEvent, GamePhase, GameState, Projectile, Side, Tank,
};
pub use tick::{TickInput, tick};
