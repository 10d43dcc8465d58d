//! Presentation events — fire-and-forget запросы к аудио/VFX/анимации
//!
//! Симуляция только пишет события; хост-движок читает их и проигрывает
//! звук, спавнит particles, дёргает триггеры Animator'а.

use bevy::prelude::*;

/// Звуковые подсказки зомби
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SoundCue {
    /// Удар волной (area hit)
    Wave,
    /// Случайный звук боли из пула (индекс в пуле)
    Pain(usize),
    /// Начать шаги со смещением в цикле [0, 1)
    FootstepsStart { cycle_offset: f32 },
    FootstepsStop,
}

/// One-shot триггеры Animator'а
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationTrigger {
    Hit,
    Stun,
}

#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct SoundRequested {
    pub entity: Entity,
    pub cue: SoundCue,
}

#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct AnimationTriggered {
    pub entity: Entity,
    pub trigger: AnimationTrigger,
}

/// Запрос particles в точке удара
///
/// `rotation` поворачивает "up" (Y) эффекта против направления удара.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct HitEffectRequested {
    pub position: Vec3,
    pub rotation: Quat,
}

impl HitEffectRequested {
    pub fn facing_against(position: Vec3, impact_direction: Vec3) -> Self {
        let reverse = -impact_direction.normalize_or_zero();
        let rotation = if reverse == Vec3::ZERO {
            Quat::IDENTITY
        } else {
            Quat::from_rotation_arc(Vec3::Y, reverse)
        };
        Self { position, rotation }
    }
}
