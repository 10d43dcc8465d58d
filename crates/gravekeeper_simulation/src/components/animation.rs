//! Флаги для анимационного слоя
//!
//! Симуляция пишет, Animator (внешний) читает. One-shot триггеры идут
//! событиями (см. `presentation::AnimationTriggered`).

use bevy::prelude::*;

#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct ZombieAnimator {
    /// Зомби идёт (edge → footsteps start/stop)
    pub walking: bool,
    /// Зеркало StunState::is_stunned
    pub stunned: bool,
}

impl ZombieAnimator {
    /// Обновить walking. Some(new_value) только на фронте (edge-triggered)
    pub fn set_walking(&mut self, walking: bool) -> Option<bool> {
        if self.walking == walking {
            return None;
        }
        self.walking = walking;
        Some(walking)
    }
}
