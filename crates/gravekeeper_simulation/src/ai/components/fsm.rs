//! FSM AI components (состояние зомби, ярусы дистанций).

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Состояния зомби (ярусы по дистанции до игрока)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect, Serialize, Deserialize)]
pub enum ZombieState {
    /// RandomWalk — игрок далеко, бродим по случайным точкам
    RandomWalk,
    /// Approach — игрок в зоне обнаружения, идём к фланговой точке
    Approach,
    /// Direct — игрок рядом, идём прямо, держим minimal_approach_distance
    Direct,
}

impl Default for ZombieState {
    fn default() -> Self {
        Self::Direct
    }
}

/// Ярус: distance < radius → state
///
/// Ярусы проверяются по порядку, первый совпавший выигрывает.
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub struct ZoneTier {
    pub radius: f32,
    pub state: ZombieState,
}

/// "Мозг" зомби: текущее состояние и точка назначения
#[derive(Component, Debug, Clone, PartialEq, Reflect)]
#[reflect(Component)]
pub struct ZombieBrain {
    pub state: ZombieState,
    /// Куда идём прямо сейчас (отдаётся в NavigationPort каждый tick)
    pub target_point: Vec3,
    /// Ближе к игроку не подходим (роллится при спавне, трусы держатся дальше)
    pub minimal_approach_distance: f32,
}

impl Default for ZombieBrain {
    fn default() -> Self {
        Self {
            state: ZombieState::default(),
            target_point: Vec3::ZERO,
            minimal_approach_distance: 2.0,
        }
    }
}

impl ZombieBrain {
    pub fn new(position: Vec3, minimal_approach_distance: f32) -> Self {
        Self {
            state: ZombieState::default(),
            target_point: position,
            minimal_approach_distance,
        }
    }
}
