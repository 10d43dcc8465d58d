//! Combat события

use bevy::prelude::*;

/// Удар по зомби (лопата, волна, толкотня)
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct ZombieHit {
    pub target: Entity,
    /// Урон (>= 0, отрицательный игнорируется)
    pub damage: f32,
    /// Точка удара (для particles)
    pub impact_point: Vec3,
    /// Направление удара (нормализуется при применении)
    pub impact_direction: Vec3,
    /// Удар волной — другой звук
    pub is_area_hit: bool,
}

/// Коллизия зомби с чем-то (от физики хоста)
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct ZombieContact {
    pub zombie: Entity,
    pub other: Entity,
    pub contact_point: Vec3,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeathCause {
    /// Health упал до <= 0 от удара
    Damage,
    /// Смертельная зона окружения (могила)
    DeadlyArea,
}

/// Событие: зомби умер (ровно одно на зомби)
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct ZombieDied {
    pub entity: Entity,
    pub cause: DeathCause,
}

/// Событие: могила-ловушка сработала и закрылась
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct GraveClosed {
    pub grave: Entity,
    pub victim: Entity,
}
