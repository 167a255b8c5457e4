//! Tank Arena - a top-down tile-based arena combat game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (grid, tanks, projectiles, collisions, session state)
//!
//! Rendering, audio, and UI are external: they drive [`sim::tick`] at their
//! own cadence and read state snapshots and [`sim::GameEvent`]s after each tick.

pub mod sim;

pub use sim::{GameEvent, GamePhase, GameState, TickInput, tick};

/// Game configuration constants
pub mod consts {
    /// Simulation rate (ticks per second); speeds below are per-tick
    pub const TICK_RATE: u32 = 60;

    /// Tile grid dimensions
    pub const TILE_SIZE: f32 = 40.0;
    pub const COLS: usize = 20;
    pub const ROWS: usize = 15;

    /// Arena dimensions in world units
    pub const ARENA_WIDTH: f32 = COLS as f32 * TILE_SIZE;
    pub const ARENA_HEIGHT: f32 = ROWS as f32 * TILE_SIZE;

    /// Tank bounding box (square) and the inset defining the collision hitbox
    pub const TANK_SIZE: f32 = 36.0;
    pub const TANK_HITBOX_INSET: f32 = 4.0;

    /// Movement speeds (world units per tick)
    pub const PLAYER_SPEED: f32 = 3.0;
    pub const ENEMY_SPEED: f32 = 1.5;

    /// Projectile defaults
    pub const BULLET_SPEED: f32 = 8.0;
    pub const BULLET_RADIUS: f32 = 4.0;

    /// Fire cooldowns in ticks (300 ms / 1500 ms at 60 Hz)
    pub const PLAYER_FIRE_COOLDOWN: u64 = 18;
    pub const ENEMY_FIRE_COOLDOWN: u64 = 90;

    /// Enemy AI tuning
    pub const ENEMY_TURN_CHANCE: f32 = 0.02;
    pub const ENEMY_FIRE_CHANCE: f32 = 0.3;
    pub const ENEMY_MOVE_COOLDOWN: u32 = 30;

    /// Session rules
    pub const START_LIVES: u8 = 3;
    pub const KILL_SCORE: u32 = 100;
    /// Soft push applied when the player overlaps an enemy tank
    pub const SEPARATION_PUSH: f32 = 2.0;

    /// Win bonus: full amount within the grace window, then decaying per step
    pub const WIN_BONUS_MAX: u32 = 500;
    pub const WIN_BONUS_GRACE_SECS: f32 = 60.0;
    pub const WIN_BONUS_DECAY_STEP_SECS: f32 = 10.0;
    pub const WIN_BONUS_DECAY: u32 = 50;

    /// Player spawn (top-left corner of the box), facing Up
    pub const PLAYER_SPAWN: (f32, f32) = (380.0, 520.0);
    /// Enemy spawns, facing Down
    pub const ENEMY_SPAWNS: [(f32, f32); 5] = [
        (60.0, 60.0),
        (380.0, 60.0),
        (700.0, 60.0),
        (60.0, 200.0),
        (700.0, 200.0),
    ];
}
