//! Tank Arena entry point
//!
//! Headless demo driver: runs one autoplayed session at the simulation rate
//! and logs events as they happen. A real frontend would replace the
//! autopilot with sampled keyboard state and render between ticks.

use std::time::{Duration, Instant};

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use tank_arena::consts::TICK_RATE;
use tank_arena::sim::{Direction, GameEvent, GamePhase, GameState, Side, TickInput, tick};

/// Cap the demo session so a stalemate cannot run forever
const MAX_TICKS: u64 = 5 * 60 * TICK_RATE as u64;

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or_else(|| rand::rng().random());
    log::info!("Tank Arena (headless) starting, seed {seed}");

    let mut state = GameState::new(seed);
    // Autopilot gets its own stream so it never disturbs the session RNG
    let mut pilot = Pcg32::seed_from_u64(seed ^ 0x5EED);
    let mut held = Direction::Up;

    let tick_interval = Duration::from_secs_f32(1.0 / TICK_RATE as f32);
    while !state.phase.is_over() && state.time_ticks < MAX_TICKS {
        let frame_start = Instant::now();

        // Hold each direction for a short burst, firing continuously
        if pilot.random::<f32>() < 0.03 {
            held = Direction::from_index(pilot.random_range(0..4));
        }
        let input = TickInput {
            up: held == Direction::Up,
            down: held == Direction::Down,
            left: held == Direction::Left,
            right: held == Direction::Right,
            fire: true,
        };
        tick(&mut state, &input);

        for event in &state.events {
            match event {
                GameEvent::Shot { side: Side::Player } => log::trace!("player fired"),
                GameEvent::Shot { side: Side::Enemy } => log::trace!("enemy fired"),
                GameEvent::Explosion { pos, tint } => {
                    log::debug!("explosion ({tint:?}) at {:.0},{:.0}", pos.x, pos.y);
                }
                GameEvent::SteelImpact { pos } => {
                    log::trace!("spark at {:.0},{:.0}", pos.x, pos.y);
                }
                GameEvent::PlayerHit { lives_left } => {
                    log::info!("player hit, {lives_left} lives left");
                }
                GameEvent::Won { bonus } => log::info!("victory, time bonus {bonus}"),
                GameEvent::Lost => log::info!("defeat"),
            }
        }

        if let Some(remaining) = tick_interval.checked_sub(frame_start.elapsed()) {
            std::thread::sleep(remaining);
        }
    }

    println!(
        "{} in {} | score {} | kills {} | lives {}",
        match state.phase {
            GamePhase::Won => "Victory",
            GamePhase::Lost => "Defeat",
            GamePhase::Running => "Stalemate (capped)",
        },
        state.format_elapsed(),
        state.score,
        state.kills,
        state.lives,
    );
}
