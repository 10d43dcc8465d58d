//! Применение ZombieHit событий.

use bevy::prelude::*;

use crate::combat::{apply_hit, DeathCause, ZombieDied, ZombieHit};
use crate::components::{Health, Knockback, StunState};
use crate::config::ZombieConfig;
use crate::navigation::Navigation;
use crate::presentation::{AnimationTrigger, AnimationTriggered, HitEffectRequested, SoundRequested};
use crate::{DeterministicRng, GameState, Zombie};

use super::kill_zombie;

/// Система: apply hits
///
/// 1. Читаем ZombieHit
/// 2. apply_hit → HitReaction
/// 3. Реакция → presentation события (particles, звук, Stun/Hit триггеры)
/// 4. Переход через 0 → kill_zombie (повторные удары по мёртвому: no-op)
pub fn process_zombie_hits(
    mut commands: Commands,
    mut hits: EventReader<ZombieHit>,
    mut zombies: Query<(&mut Health, &mut StunState, &mut Knockback, &ZombieConfig), With<Zombie>>,
    mut navigation: ResMut<Navigation>,
    mut game_state: ResMut<GameState>,
    mut rng: ResMut<DeterministicRng>,
    mut effects: EventWriter<HitEffectRequested>,
    mut sounds: EventWriter<SoundRequested>,
    mut animations: EventWriter<AnimationTriggered>,
    mut died: EventWriter<ZombieDied>,
) {
    for hit in hits.read() {
        let Ok((mut health, mut stun, mut knockback, config)) = zombies.get_mut(hit.target) else {
            crate::log_warning(&format!("ZombieHit: target {:?} is not a live zombie", hit.target));
            continue;
        };

        let Some(reaction) = apply_hit(hit, &mut health, &mut stun, &mut knockback, config, &mut rng.rng) else {
            // Умирает в этом tick'е, деспавн ещё не применён
            continue;
        };

        effects.write(reaction.effect);
        if let Some(cue) = reaction.sound {
            sounds.write(SoundRequested {
                entity: hit.target,
                cue,
            });
        }

        if reaction.entered_stun {
            crate::log(&format!("💫 Zombie {:?} is stunned", hit.target));
            animations.write(AnimationTriggered {
                entity: hit.target,
                trigger: AnimationTrigger::Stun,
            });
        }

        crate::log(&format!(
            "🗡️ Zombie {:?} took {:.1} damage (health {:.1})",
            hit.target, hit.damage, health.current
        ));
        animations.write(AnimationTriggered {
            entity: hit.target,
            trigger: AnimationTrigger::Hit,
        });

        if reaction.killed {
            kill_zombie(
                &mut commands,
                hit.target,
                DeathCause::Damage,
                navigation.port_mut(),
                &mut game_state,
                &mut died,
            );
        }
    }
}
