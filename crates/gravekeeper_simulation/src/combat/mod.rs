//! Combat / hit protocol
//!
//! Ответственность:
//! - ZombieHit → оглушение, урон, толчок, триггеры, смерть (ровно одна)
//! - ZombieContact → толкотня зомби (hit с нулевым уроном) или ловушка-могила
//! - ZombieDied → деспавн, release из навигации, счётчик убийств
//!
//! Хост-движок пишет ZombieHit/ZombieContact асинхронно; обработка идёт
//! в начале fixed tick, до decision engine.

use bevy::prelude::*;

pub mod events;
pub mod hit;
pub mod systems;

pub use events::{DeathCause, GraveClosed, ZombieContact, ZombieDied, ZombieHit};
pub use hit::{apply_hit, HitReaction};

/// Combat Plugin
///
/// Порядок выполнения (FixedUpdate, SimulationSet::Combat):
/// 1. route_zombie_contacts: коллизии → ZombieHit / смерть в ловушке
/// 2. process_zombie_hits: применение ударов
pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<ZombieHit>()
            .add_event::<ZombieContact>()
            .add_event::<ZombieDied>()
            .add_event::<GraveClosed>();

        app.add_systems(
            FixedUpdate,
            (systems::route_zombie_contacts, systems::process_zombie_hits)
                .chain()
                .in_set(crate::SimulationSet::Combat),
        );
    }
}
