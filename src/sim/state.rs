//! Game state and core simulation types
//!
//! Everything needed to reproduce a session deterministically lives here:
//! the grid, the tank roster, scoring, and the seeded RNG.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use super::grid::Grid;
use crate::consts::*;

/// Cardinal facing directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// Unit vector in world coordinates (y grows downward)
    pub fn unit_vec(self) -> Vec2 {
        match self {
            Direction::Up => Vec2::new(0.0, -1.0),
            Direction::Right => Vec2::new(1.0, 0.0),
            Direction::Down => Vec2::new(0.0, 1.0),
            Direction::Left => Vec2::new(-1.0, 0.0),
        }
    }

    /// Map an index in 0..4 to a direction (for uniform random picks)
    pub fn from_index(i: u32) -> Self {
        match i % 4 {
            0 => Direction::Up,
            1 => Direction::Right,
            2 => Direction::Down,
            _ => Direction::Left,
        }
    }
}

/// Which side fired a projectile / owns a tank
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Player,
    Enemy,
}

/// A single in-flight shot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub pos: Vec2,
    pub dir: Direction,
    pub side: Side,
    pub active: bool,
}

impl Projectile {
    pub fn new(pos: Vec2, dir: Direction, side: Side) -> Self {
        Self {
            pos,
            dir,
            side,
            active: true,
        }
    }

    /// Advance one tick and deactivate on leaving the arena. Exactly reaching
    /// the far edge coordinate counts as outside.
    pub fn advance(&mut self) {
        self.pos += self.dir.unit_vec() * BULLET_SPEED;
        if !(0.0..ARENA_WIDTH).contains(&self.pos.x) || !(0.0..ARENA_HEIGHT).contains(&self.pos.y)
        {
            self.active = false;
        }
    }
}

/// A tank, controlled or autonomous
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tank {
    /// Top-left corner of the 36x36 bounding box
    pub pos: Vec2,
    pub dir: Direction,
    pub side: Side,
    /// Movement speed in world units per tick
    pub speed: f32,
    /// Minimum ticks between shots
    pub fire_cooldown: u64,
    /// Tick of the last successful shot (None = never fired)
    pub last_shot: Option<u64>,
    pub active: bool,
    /// Shots this tank has fired and still owns
    pub bullets: Vec<Projectile>,
    /// AI movement pause (unused for the player tank)
    pub move_cooldown: u32,
}

impl Tank {
    pub fn new(pos: Vec2, dir: Direction, side: Side) -> Self {
        let (speed, fire_cooldown) = match side {
            Side::Player => (PLAYER_SPEED, PLAYER_FIRE_COOLDOWN),
            Side::Enemy => (ENEMY_SPEED, ENEMY_FIRE_COOLDOWN),
        };
        Self {
            pos,
            dir,
            side,
            speed,
            fire_cooldown,
            last_shot: None,
            active: true,
            bullets: Vec::new(),
            move_cooldown: 0,
        }
    }

    /// Center of the bounding box
    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(TANK_SIZE / 2.0)
    }

    /// Inset collision hitbox
    pub fn hitbox(&self) -> Aabb {
        Aabb::new(
            self.pos + Vec2::splat(TANK_HITBOX_INSET),
            Vec2::splat(TANK_SIZE - 2.0 * TANK_HITBOX_INSET),
        )
    }

    /// Whether the full bounding box could sit at `pos` without leaving the
    /// arena or overlapping a blocked cell
    pub fn can_move_to(&self, pos: Vec2, grid: &Grid) -> bool {
        if pos.x < 0.0
            || pos.x > ARENA_WIDTH - TANK_SIZE
            || pos.y < 0.0
            || pos.y > ARENA_HEIGHT - TANK_SIZE
        {
            return false;
        }

        let left = (pos.x / TILE_SIZE).floor() as usize;
        let right = ((pos.x + TANK_SIZE) / TILE_SIZE).floor() as usize;
        let top = (pos.y / TILE_SIZE).floor() as usize;
        let bottom = ((pos.y + TANK_SIZE) / TILE_SIZE).floor() as usize;

        for row in top..=bottom {
            for col in left..=right {
                if grid.is_blocked(row, col) {
                    return false;
                }
            }
        }
        true
    }

    /// Attempt one step in `dir`. Facing always follows the intent; position
    /// changes only if the whole displacement is legal (no partial sliding).
    /// Returns whether the tank moved.
    pub fn try_move(&mut self, dir: Direction, grid: &Grid) -> bool {
        if !self.active {
            return false;
        }
        self.dir = dir;
        let target = self.pos + dir.unit_vec() * self.speed;
        if self.can_move_to(target, grid) {
            self.pos = target;
            true
        } else {
            false
        }
    }

    /// Whether the fire cooldown has elapsed at tick `now`
    pub fn can_fire(&self, now: u64) -> bool {
        self.active
            && self
                .last_shot
                .is_none_or(|last| now.saturating_sub(last) >= self.fire_cooldown)
    }

    /// Fire a projectile from the muzzle point: at the box edge along the
    /// facing axis, centered on the perpendicular axis. No-op while inactive
    /// or on cooldown. Returns whether a shot was spawned.
    pub fn shoot(&mut self, now: u64) -> bool {
        if !self.can_fire(now) {
            return false;
        }
        let center = self.center();
        let muzzle = match self.dir {
            Direction::Up => Vec2::new(center.x, self.pos.y),
            Direction::Right => Vec2::new(self.pos.x + TANK_SIZE, center.y),
            Direction::Down => Vec2::new(center.x, self.pos.y + TANK_SIZE),
            Direction::Left => Vec2::new(self.pos.x, center.y),
        };
        self.bullets.push(Projectile::new(muzzle, self.dir, self.side));
        self.last_shot = Some(now);
        true
    }

    /// Drop inert projectiles, then advance the rest one tick
    pub fn update_bullets(&mut self) {
        self.bullets.retain(|b| b.active);
        for bullet in &mut self.bullets {
            bullet.advance();
        }
    }
}

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// All enemies destroyed
    Won,
    /// Player out of lives
    Lost,
}

impl GamePhase {
    pub fn is_over(self) -> bool {
        self != GamePhase::Running
    }
}

/// Color/category tag for explosion events (render layer picks the palette)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExplosionTint {
    Player,
    Enemy,
    Brick,
}

/// Transient notifications for the render/audio/UI layers, emitted at the
/// moment the core performs the corresponding action. Cleared at the start
/// of every tick; observers read them after the tick returns.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A tank fired
    Shot { side: Side },
    /// Something blew up at a point
    Explosion { pos: Vec2, tint: ExplosionTint },
    /// A shot bounced off steel (spark, no destruction)
    SteelImpact { pos: Vec2 },
    /// The player was hit and respawned
    PlayerHit { lives_left: u8 },
    /// Session won, with the time bonus that was added to the score
    Won { bonus: u32 },
    /// Session lost
    Lost,
}

/// Complete session state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Seeded RNG driving all enemy decisions
    pub rng: Pcg32,
    pub grid: Grid,
    pub player: Tank,
    pub enemies: Vec<Tank>,
    /// Monotonically non-decreasing
    pub score: u32,
    pub lives: u8,
    pub kills: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub phase: GamePhase,
    /// Events emitted during the most recent tick
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a fresh session with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            grid: Grid::arena(),
            player: Self::spawn_player(),
            enemies: ENEMY_SPAWNS
                .iter()
                .map(|&(x, y)| Tank::new(Vec2::new(x, y), Direction::Down, Side::Enemy))
                .collect(),
            score: 0,
            lives: START_LIVES,
            kills: 0,
            time_ticks: 0,
            phase: GamePhase::Running,
            events: Vec::new(),
        }
    }

    fn spawn_player() -> Tank {
        let (x, y) = PLAYER_SPAWN;
        Tank::new(Vec2::new(x, y), Direction::Up, Side::Player)
    }

    /// Reinitialize everything and return to `Running`, keeping the seed
    pub fn restart(&mut self) {
        *self = Self::new(self.seed);
    }

    /// Put the player back at its spawn point facing the default direction
    pub fn respawn_player(&mut self) {
        let (x, y) = PLAYER_SPAWN;
        self.player.pos = Vec2::new(x, y);
        self.player.dir = Direction::Up;
    }

    /// Count of enemies still in play (for the status layer and win check)
    pub fn active_enemies(&self) -> usize {
        self.enemies.iter().filter(|e| e.active).count()
    }

    /// Seconds since session start
    pub fn elapsed_secs(&self) -> f32 {
        self.time_ticks as f32 / TICK_RATE as f32
    }

    /// Elapsed time formatted as M:SS for the status layer
    pub fn format_elapsed(&self) -> String {
        let total = self.time_ticks / TICK_RATE as u64;
        format!("{}:{:02}", total / 60, total % 60)
    }
}
