//! Headless симуляция Gravekeeper
//!
//! Запускает Bevy App без рендера: игрок стоит в центре, орда зомби
//! кольцом вокруг. Первый аргумент (опционально) — путь к JSON ZombieConfig.

use bevy::prelude::*;
use gravekeeper_simulation::{
    create_headless_app, log_info, run_fixed_tick, spawn_zombie, ConfigError, Player, SimulationPlugin,
    ZombieBrain, ZombieConfig, ZombieState,
};

const SEED: u64 = 42;
const TICKS: u32 = 1000;
const HORDE_SIZE: usize = 12;
const FIXED_DELTA: f32 = 1.0 / 60.0;

fn main() -> Result<(), ConfigError> {
    let config = match std::env::args().nth(1) {
        Some(path) => ZombieConfig::load(path)?,
        None => ZombieConfig::default(),
    };

    let mut app = create_headless_app(SEED);
    app.add_plugins(SimulationPlugin);
    log_info(&format!("🚀 Starting Gravekeeper headless simulation (seed: {})", SEED));

    app.world_mut().spawn((Player, Transform::default()));
    for i in 0..HORDE_SIZE {
        let angle = i as f32 / HORDE_SIZE as f32 * std::f32::consts::TAU;
        // Чередуем кольца: часть орды за дальним ярусом, часть внутри
        let ring = if i % 2 == 0 { 25.0 } else { 12.0 };
        let position = Vec3::new(angle.cos() * ring, 0.0, angle.sin() * ring);
        spawn_zombie(app.world_mut(), position, &config);
    }

    for tick in 0..TICKS {
        run_fixed_tick(&mut app, FIXED_DELTA);

        if tick % 100 == 0 {
            let summary = state_summary(app.world_mut());
            log_info(&format!(
                "Tick {}: random_walk={} approach={} direct={}",
                tick, summary[0], summary[1], summary[2]
            ));
        }
    }

    log_info("Simulation complete!");
    Ok(())
}

/// Сколько зомби в каждом состоянии (RandomWalk, Approach, Direct)
fn state_summary(world: &mut World) -> [usize; 3] {
    let mut counts = [0; 3];
    let mut brains = world.query::<&ZombieBrain>();
    for brain in brains.iter(world) {
        let slot = match brain.state {
            ZombieState::RandomWalk => 0,
            ZombieState::Approach => 1,
            ZombieState::Direct => 2,
        };
        counts[slot] += 1;
    }
    counts
}
