//! Decision engine — чистые функции, без ECS
//!
//! Алгоритм (каждый tick):
//! 1. desired_state по ярусам дистанции до игрока
//! 2. Переход если desired != state ИЛИ пришли в текущую точку (reroll в том же ярусе)
//! 3. RandomWalk: случайное направление × random_radius от себя
//!    Approach: направление "от игрока к нам", повёрнутое на ±approach_angle, × close_radius от игрока
//! 4. Кандидат snap'ается на navmesh (неудача → оставляем как есть)
//! 5. Direct: точка пересчитывается КАЖДЫЙ tick = player − dir × minimal_approach_distance

use bevy::prelude::*;
use rand::Rng;

use super::{ZombieBrain, ZombieState, ZoneTier};
use crate::config::ZombieConfig;
use crate::navigation::NavigationPort;

/// Базовое направление "вперёд" для случайных поворотов (вокруг оси Y)
const FORWARD: Vec3 = Vec3::NEG_Z;

/// Результат пересчёта: смена яруса или reroll точки в том же ярусе
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: ZombieState,
    pub to: ZombieState,
}

impl Transition {
    pub fn is_reroll(&self) -> bool {
        self.from == self.to
    }
}

/// Желаемое состояние для дистанции до игрока
///
/// Первый ярус с `distance < radius` выигрывает; ни один не подошёл → RandomWalk.
pub fn desired_state(distance: f32, tiers: &[ZoneTier]) -> ZombieState {
    tiers
        .iter()
        .find(|tier| distance < tier.radius)
        .map(|tier| tier.state)
        .unwrap_or(ZombieState::RandomWalk)
}

/// Minimal approach distance для нового зомби
///
/// С вероятностью coward_probability — случайно в [minimal, coward_minimal].
pub fn roll_minimal_approach_distance<R: Rng + ?Sized>(config: &ZombieConfig, rng: &mut R) -> f32 {
    if rng.gen::<f32>() < config.coward_probability {
        let low = config.minimal_distance.min(config.coward_minimal_distance);
        let high = config.minimal_distance.max(config.coward_minimal_distance);
        rng.gen_range(low..=high)
    } else {
        config.minimal_distance
    }
}

/// Один tick decision engine
///
/// Мутирует brain (state + target_point). Возвращает Some(Transition),
/// если в этом tick'е роллилась новая точка.
pub fn think<R: Rng + ?Sized>(
    brain: &mut ZombieBrain,
    position: Vec3,
    target: Vec3,
    config: &ZombieConfig,
    navigation: &dyn NavigationPort,
    rng: &mut R,
) -> Option<Transition> {
    let to_target = target - position;
    let dir_to_target = to_target.normalize_or_zero();
    let dist_to_target = to_target.length();
    let dist_to_current = brain.target_point.distance(position);

    let desired = desired_state(dist_to_target, &config.zone_tiers());
    let arrived = brain.state == desired && dist_to_current < config.arrival_distance;

    let mut transition = None;

    if desired != brain.state || arrived {
        if let Some(candidate) = candidate_point(desired, position, target, dir_to_target, config, rng) {
            brain.target_point = snap_to_surface(candidate, navigation, config.nav_sample_radius);
        }

        transition = Some(Transition {
            from: brain.state,
            to: desired,
        });
        brain.state = desired;
    }

    if brain.state == ZombieState::Direct {
        // dir == ZERO (стоим на игроке) → точка = сам игрок
        brain.target_point = target - dir_to_target * brain.minimal_approach_distance;
    }

    transition
}

/// Кандидат новой точки для яруса (Direct точку не роллит)
fn candidate_point<R: Rng + ?Sized>(
    state: ZombieState,
    position: Vec3,
    target: Vec3,
    dir_to_target: Vec3,
    config: &ZombieConfig,
    rng: &mut R,
) -> Option<Vec3> {
    match state {
        ZombieState::RandomWalk => {
            let heading = rng.gen_range(0.0..360.0_f32);
            let offset = Quat::from_rotation_y(heading.to_radians()) * FORWARD * config.random_radius;
            Some(position + offset)
        }
        ZombieState::Approach => {
            let spread = config.approach_angle.abs();
            let angle = rng.gen_range(-spread..=spread);
            let offset = Quat::from_rotation_y(angle.to_radians()) * -dir_to_target * config.close_radius;
            Some(target + offset)
        }
        ZombieState::Direct => None,
    }
}

/// Snap на проходимую поверхность; неудача → best-effort исходная точка
fn snap_to_surface(candidate: Vec3, navigation: &dyn NavigationPort, radius: f32) -> Vec3 {
    match navigation.sample_nearest_valid_point(candidate, radius) {
        Some(snapped) => snapped,
        None => {
            crate::log(&format!(
                "Navigation: no walkable point near {:?} (radius {:.1}), keeping raw target",
                candidate, radius
            ));
            candidate
        }
    }
}
