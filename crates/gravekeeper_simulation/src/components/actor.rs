//! Базовые компоненты зомби: Zombie, Health

use bevy::prelude::*;

use crate::ai::ZombieBrain;
use crate::components::{Knockback, StunState, ZombieAnimator};
use crate::config::ZombieConfig;

/// Зомби — автономный агент, преследующий игрока
///
/// Required Components добавляют всё состояние агента; реальные значения
/// (health, minimal approach distance) выставляет `spawn_zombie`.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
#[require(
    Transform,
    Health,
    StunState,
    Knockback,
    ZombieBrain,
    ZombieAnimator,
    ZombieConfig
)]
pub struct Zombie;

/// Здоровье
///
/// Может уйти в минус: смерть = переход через 0 (current <= 0).
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct Health {
    pub current: f32,
    pub max: f32,
}

impl Default for Health {
    fn default() -> Self {
        Self::new(50.0)
    }
}

impl Health {
    pub fn new(max: f32) -> Self {
        Self { current: max, max }
    }

    pub fn is_alive(&self) -> bool {
        self.current > 0.0
    }

    pub fn take_damage(&mut self, amount: f32) {
        self.current -= amount.max(0.0);
    }

    /// Мгновенная смерть (ловушки окружения)
    pub fn kill(&mut self) {
        self.current = self.current.min(0.0);
    }
}
