//! Fixed-step simulation tick
//!
//! One call advances the whole session by one discrete step: player intents,
//! enemy AI, projectile flight, collision resolution, then the win check.
//! Terminal phases are sticky; a finished session ignores further ticks.

use super::collision::{cell_at, separation_push};
use super::grid::{Grid, ObstacleKind};
use super::policy::drive_enemy;
use super::state::{Direction, ExplosionTint, GameEvent, GamePhase, GameState, Side};
use crate::consts::*;

/// Held input intents, sampled once per tick by the driver
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub fire: bool,
}

/// Advance the session by one tick
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.events.clear();

    if state.phase.is_over() {
        return;
    }

    state.time_ticks += 1;
    let now = state.time_ticks;

    // Player motion: each held direction is a separate move attempt
    if input.up {
        state.player.try_move(Direction::Up, &state.grid);
    }
    if input.down {
        state.player.try_move(Direction::Down, &state.grid);
    }
    if input.left {
        state.player.try_move(Direction::Left, &state.grid);
    }
    if input.right {
        state.player.try_move(Direction::Right, &state.grid);
    }
    if input.fire && state.player.shoot(now) {
        state.events.push(GameEvent::Shot { side: Side::Player });
    }

    // Enemy AI
    {
        let GameState {
            enemies,
            grid,
            rng,
            events,
            ..
        } = state;
        for enemy in enemies.iter_mut() {
            if drive_enemy(enemy, grid, rng, now) {
                events.push(GameEvent::Shot { side: Side::Enemy });
            }
        }
    }

    // Projectile flight. Shots from destroyed tanks keep flying until they
    // leave the arena or hit something.
    state.player.update_bullets();
    for enemy in &mut state.enemies {
        enemy.update_bullets();
    }

    resolve_collisions(state);

    // Win check: last enemy down ends the session with a time bonus
    if state.phase == GamePhase::Running && state.active_enemies() == 0 {
        let bonus = time_bonus(state.elapsed_secs());
        state.score += bonus;
        state.phase = GamePhase::Won;
        state.events.push(GameEvent::Won { bonus });
    }
}

/// Score bonus for finishing fast: the full amount within the grace window,
/// then one decay step per additional 10 seconds, floored at zero
fn time_bonus(elapsed_secs: f32) -> u32 {
    if elapsed_secs <= WIN_BONUS_GRACE_SECS {
        return WIN_BONUS_MAX;
    }
    let steps = ((elapsed_secs - WIN_BONUS_GRACE_SECS) / WIN_BONUS_DECAY_STEP_SECS).floor() as u32;
    WIN_BONUS_MAX.saturating_sub(steps * WIN_BONUS_DECAY)
}

/// Run the per-tick collision passes in their fixed order. Every check is
/// gated on the projectile's `active` flag, so a shot consumed by an earlier
/// pass is invisible to later ones. A transition to `Lost` stops resolution
/// immediately; nothing after it runs that tick.
fn resolve_collisions(state: &mut GameState) {
    // Pass 1: player shots vs enemy tanks
    for bullet in &mut state.player.bullets {
        if !bullet.active {
            continue;
        }
        for enemy in &mut state.enemies {
            if !enemy.active || !bullet.active {
                continue;
            }
            if enemy.hitbox().contains_point(bullet.pos) {
                bullet.active = false;
                enemy.active = false;
                state.score += KILL_SCORE;
                state.kills += 1;
                state.events.push(GameEvent::Explosion {
                    pos: enemy.center(),
                    tint: ExplosionTint::Enemy,
                });
            }
        }
    }

    // Pass 2: surviving player shots vs the grid
    for bullet in &mut state.player.bullets {
        if bullet.active {
            hit_obstacle(bullet, &mut state.grid, &mut state.events);
        }
    }

    // Pass 3: enemy shots vs the player. Indexed iteration because a hit
    // moves the player back to spawn mid-loop.
    for i in 0..state.enemies.len() {
        if !state.enemies[i].active {
            continue;
        }
        for j in 0..state.enemies[i].bullets.len() {
            let bullet = &state.enemies[i].bullets[j];
            if !bullet.active || !state.player.hitbox().contains_point(bullet.pos) {
                continue;
            }
            state.enemies[i].bullets[j].active = false;
            state.lives -= 1;
            state.events.push(GameEvent::Explosion {
                pos: state.player.center(),
                tint: ExplosionTint::Player,
            });
            state.events.push(GameEvent::PlayerHit {
                lives_left: state.lives,
            });
            if state.lives == 0 {
                state.phase = GamePhase::Lost;
                state.events.push(GameEvent::Lost);
                return;
            }
            state.respawn_player();
        }
    }

    // Pass 4: surviving enemy shots vs the grid
    {
        let GameState {
            enemies,
            grid,
            events,
            ..
        } = state;
        for enemy in enemies.iter_mut() {
            if !enemy.active {
                continue;
            }
            for bullet in &mut enemy.bullets {
                if bullet.active {
                    hit_obstacle(bullet, grid, events);
                }
            }
        }
    }

    // Soft tank separation: nudge the player out of any enemy it overlaps
    for enemy in &state.enemies {
        if !enemy.active {
            continue;
        }
        let push = separation_push(
            &state.player.hitbox(),
            &enemy.hitbox(),
            SEPARATION_PUSH,
        );
        state.player.pos += push;
    }
}

/// Obstacle interaction for one shot: bricks are destroyed with an explosion,
/// steel survives with a spark. Either way the shot is spent.
fn hit_obstacle(
    bullet: &mut super::state::Projectile,
    grid: &mut Grid,
    events: &mut Vec<GameEvent>,
) {
    let Some((row, col)) = cell_at(bullet.pos) else {
        return;
    };
    match grid.obstacle_at(row, col) {
        Some(ObstacleKind::Brick) => {
            bullet.active = false;
            grid.destroy(row, col);
            events.push(GameEvent::Explosion {
                pos: Grid::cell_center(row, col),
                tint: ExplosionTint::Brick,
            });
        }
        Some(ObstacleKind::Steel) => {
            bullet.active = false;
            events.push(GameEvent::SteelImpact { pos: bullet.pos });
        }
        None => {}
    }
}
