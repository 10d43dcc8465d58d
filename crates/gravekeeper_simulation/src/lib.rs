//! Gravekeeper Simulation Core
//!
//! ECS-симуляция на Bevy 0.16: зомби, преследующие игрока по ярусам дистанции,
//! и их реакция на удары (стан, толчок, смерть).
//!
//! HYBRID ARCHITECTURE:
//! - ECS = game state, AI, combat rules (этот crate, headless)
//! - Хост-движок = physics, rendering, pathfinding, audio
//!   (общение через NavigationPort и presentation события)

use bevy::prelude::*;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::Duration;

// Публичные модули
pub mod ai;
pub mod combat;
pub mod components;
pub mod config;
pub mod game_state;
pub mod hud;
pub mod logger;
pub mod motion;
pub mod navigation;
pub mod presentation;

// Re-export базовых типов для удобства
pub use ai::{AIPlugin, ZombieBrain, ZombieState};
pub use combat::{CombatPlugin, DeathCause, GraveClosed, ZombieContact, ZombieDied, ZombieHit};
pub use components::*;
pub use config::{ConfigError, ZombieConfig};
pub use game_state::{GameResult, GameState};
pub use hud::{HudCommand, HudPlugin, HudView};
pub use logger::{log, log_error, log_info, log_warning};
pub use motion::MotionPlugin;
pub use navigation::{HeadlessNavigation, Navigation, NavigationPort};

/// Фазы fixed tick (строго последовательно)
///
/// Combat до Decision: удар полностью применён до того, как decision/motion
/// прочитают health/stun/impulse. Decision до Motion: motion берёт уже
/// пересчитанную target_point.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SimulationSet {
    Combat,
    Decision,
    Motion,
}

/// Главный plugin симуляции (объединяет все подсистемы)
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GameState>()
            // Хост мог поставить свою навигацию/seed до plugin'а
            .init_resource::<Navigation>()
            .init_resource::<DeterministicRng>()
            .add_event::<presentation::SoundRequested>()
            .add_event::<presentation::AnimationTriggered>()
            .add_event::<presentation::HitEffectRequested>()
            .configure_sets(
                FixedUpdate,
                (SimulationSet::Combat, SimulationSet::Decision, SimulationSet::Motion).chain(),
            )
            .add_plugins((CombatPlugin, AIPlugin, MotionPlugin, HudPlugin));
    }
}

/// Детерминистичный RNG resource (seeded)
#[derive(Resource)]
pub struct DeterministicRng {
    pub rng: ChaCha8Rng,
    pub seed: u64,
}

impl DeterministicRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }
}

impl Default for DeterministicRng {
    fn default() -> Self {
        Self::new(42)
    }
}

/// Создаёт minimal Bevy App для headless симуляции
pub fn create_headless_app(seed: u64) -> App {
    let mut app = App::new();
    logger::init_logger();
    app.add_plugins(MinimalPlugins)
        .insert_resource(DeterministicRng::new(seed))
        .insert_resource(Time::<Fixed>::from_hz(60.0)); // 60Hz FixedUpdate

    app
}

/// Один fixed tick с явным delta (test-controlled driver)
///
/// Не зависит от реального времени: двигаем `Time<Fixed>` ровно на `delta`
/// и прогоняем FixedUpdate один раз.
pub fn run_fixed_tick(app: &mut App, delta: f32) {
    let world = app.world_mut();
    world
        .resource_mut::<Time<Fixed>>()
        .advance_by(Duration::from_secs_f32(delta));
    world.run_schedule(FixedUpdate);
}

/// Компоненты нового зомби
///
/// minimal_approach_distance роллится здесь (трус или нет).
pub fn zombie_bundle<R: Rng + ?Sized>(position: Vec3, config: &ZombieConfig, rng: &mut R) -> impl Bundle {
    let minimal_distance = ai::roll_minimal_approach_distance(config, rng);
    (
        Zombie,
        Transform::from_translation(position),
        Health::new(config.health),
        ZombieBrain::new(position, minimal_distance),
        config.clone(),
    )
}

/// Spawn зомби прямо в World (RNG берётся из DeterministicRng)
pub fn spawn_zombie(world: &mut World, position: Vec3, config: &ZombieConfig) -> Entity {
    let bundle = {
        let mut rng = world.resource_mut::<DeterministicRng>();
        zombie_bundle(position, config, &mut rng.rng)
    };
    world.spawn(bundle).id()
}

/// Snapshot мира для сравнения детерминизма
pub fn world_snapshot<T: Component>(world: &mut World) -> Vec<u8>
where
    T: std::fmt::Debug,
{
    let mut snapshot = Vec::new();

    let mut query = world.query::<(Entity, &T)>();
    let mut entities: Vec<_> = query.iter(world).collect();

    // Сортируем по Entity ID для детерминизма
    entities.sort_by_key(|(entity, _)| entity.index());

    for (entity, component) in entities {
        snapshot.extend_from_slice(&entity.index().to_le_bytes());
        snapshot.extend_from_slice(format!("{:?}", component).as_bytes());
    }

    snapshot
}
