//! Реакция на удары: оглушение и толчок

use bevy::prelude::*;

/// Оглушение
///
/// Инвариант: timer >= 0; is_stunned == false → timer не тикает.
/// Повторный удар по оглушённому НЕ продлевает таймер (только edge 0 → 1).
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct StunState {
    pub is_stunned: bool,
    pub timer: f32,
}

impl StunState {
    /// Войти в оглушение. Возвращает true только на переходе not stunned → stunned
    pub fn try_enter(&mut self, duration: f32) -> bool {
        if self.is_stunned {
            return false;
        }
        self.is_stunned = true;
        self.timer = duration.max(0.0);
        true
    }

    /// Тик таймера. Возвращает true в момент выхода из оглушения
    pub fn tick(&mut self, delta: f32) -> bool {
        if !self.is_stunned {
            return false;
        }

        self.timer = (self.timer - delta).max(0.0);
        if self.timer <= 0.0 {
            self.is_stunned = false;
            return true;
        }
        false
    }
}

/// Остаточный толчок (units per tick)
///
/// Прибавляется к позиции каждый fixed tick и затухает к нулю
/// с фиксированным шагом (без перелёта через 0).
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct Knockback {
    pub impulse: Vec3,
}

impl Knockback {
    /// Новый толчок перезаписывает старый (не накапливается)
    pub fn push(&mut self, direction: Vec3, force: f32) {
        self.impulse = direction.normalize_or_zero() * force;
    }

    /// Затухание на один tick: как MoveTowards(impulse, 0, decay)
    pub fn decay(&mut self, decay: f32) {
        let magnitude = self.impulse.length();
        if magnitude <= decay || magnitude <= f32::EPSILON {
            self.impulse = Vec3::ZERO;
        } else {
            self.impulse -= self.impulse / magnitude * decay;
        }
    }

    pub fn is_active(&self) -> bool {
        self.impulse != Vec3::ZERO
    }
}
