//! Motion & stun controller
//!
//! Порядок внутри fixed tick (после decision engine):
//! 1. zombie_motion: destination/stopped в NavigationPort, walking edge, stun таймер
//! 2. apply_knockback: позиция += impulse, затухание impulse
//! 3. advance_navigation_agents: шаг агента через NavigationPort
//!
//! Пауза: motion полностью заморожен (stop + таймеры не тикают).
//! Knockback физический — двигает и затухает всегда, даже на паузе и в стане.

use bevy::prelude::*;
use rand::Rng;

use crate::ai::ZombieBrain;
use crate::components::{Knockback, StunState, ZombieAnimator};
use crate::config::ZombieConfig;
use crate::navigation::Navigation;
use crate::presentation::{SoundCue, SoundRequested};
use crate::{DeterministicRng, GameState, Player, SimulationSet, Zombie};

/// Motion Plugin
///
/// advance_navigation_agents последним: агент едет к уже выставленной цели.
pub struct MotionPlugin;

impl Plugin for MotionPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            FixedUpdate,
            (
                zombie_motion,
                apply_knockback,
                crate::navigation::advance_navigation_agents,
            )
                .chain()
                .in_set(SimulationSet::Motion),
        );
    }
}

/// Система: зомби следует за brain.target_point
pub fn zombie_motion(
    mut zombies: Query<
        (
            Entity,
            &Transform,
            &ZombieBrain,
            &mut StunState,
            &mut ZombieAnimator,
            &ZombieConfig,
        ),
        (With<Zombie>, Without<Player>),
    >,
    mut navigation: ResMut<Navigation>,
    game_state: Res<GameState>,
    mut rng: ResMut<DeterministicRng>,
    mut sounds: EventWriter<SoundRequested>,
    time: Res<Time<Fixed>>,
) {
    let port = navigation.port_mut();

    if game_state.is_paused {
        for (entity, ..) in zombies.iter() {
            port.set_stopped(entity, true);
        }
        return;
    }

    let delta = time.delta_secs();

    for (entity, transform, brain, mut stun, mut animator, config) in zombies.iter_mut() {
        port.set_destination(entity, brain.target_point);
        // Оглушённый стоит, даже если не пауза
        port.set_stopped(entity, stun.is_stunned);

        let is_walking = brain.target_point.distance(transform.translation) > config.walking_threshold;
        if let Some(started) = animator.set_walking(is_walking) {
            let cue = if started {
                SoundCue::FootstepsStart {
                    cycle_offset: rng.rng.gen_range(0.0..1.0),
                }
            } else {
                SoundCue::FootstepsStop
            };
            sounds.write(SoundRequested { entity, cue });
        }

        if stun.tick(delta) {
            crate::log(&format!("💫 {:?} recovered from stun", entity));
        }
        if animator.stunned != stun.is_stunned {
            animator.stunned = stun.is_stunned;
        }
    }
}

/// Система: физический толчок
///
/// Шаг затухания фиксирован на tick (push_force_decay), без перелёта через 0.
///
/// Не смотрит на паузу: на паузе толчок и двигает, и затухает. Остальной
/// motion на паузе заморожен, но замороженный impulse без затухания
/// уносил бы зомби бесконечно.
pub fn apply_knockback(
    mut zombies: Query<(&mut Transform, &mut Knockback, &ZombieConfig), (With<Zombie>, Without<Player>)>,
) {
    for (mut transform, mut knockback, config) in zombies.iter_mut() {
        if !knockback.is_active() {
            continue;
        }

        transform.translation += knockback.impulse;
        knockback.decay(config.push_force_decay);
    }
}
