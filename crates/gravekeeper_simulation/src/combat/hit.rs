//! Применение удара к зомби (без ECS)
//!
//! Шаги:
//! 1. Particles, "up" против направления удара
//! 2. Звук: волна или случайный pain из пула
//! 3. Оглушение — только если ещё не оглушён (таймер не продлевается)
//! 4. health -= damage
//! 5. Толчок = dir × push_force (перезаписывает прошлый)
//! 6. Триггер Hit (независимо от Stun)
//! 7. health <= 0 → смерть

use rand::Rng;

use super::ZombieHit;
use crate::components::{Health, Knockback, StunState};
use crate::config::ZombieConfig;
use crate::presentation::{HitEffectRequested, SoundCue};

/// Что произошло в результате удара (системa превращает в события)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitReaction {
    pub effect: HitEffectRequested,
    pub sound: Option<SoundCue>,
    /// Вошли в оглушение этим ударом (→ StunTrigger)
    pub entered_stun: bool,
    /// Этот удар убил (переход alive → dead)
    pub killed: bool,
}

/// Применить удар
///
/// Уже мёртвый (health <= 0, ждёт деспавна) → None, ничего не трогаем.
pub fn apply_hit<R: Rng + ?Sized>(
    hit: &ZombieHit,
    health: &mut Health,
    stun: &mut StunState,
    knockback: &mut Knockback,
    config: &ZombieConfig,
    rng: &mut R,
) -> Option<HitReaction> {
    if !health.is_alive() {
        return None;
    }

    let effect = HitEffectRequested::facing_against(hit.impact_point, hit.impact_direction);

    let sound = if hit.is_area_hit {
        Some(SoundCue::Wave)
    } else if config.pain_cue_count > 0 {
        Some(SoundCue::Pain(rng.gen_range(0..config.pain_cue_count)))
    } else {
        None
    };

    let entered_stun = stun.try_enter(config.stun_duration);

    health.take_damage(hit.damage);
    knockback.push(hit.impact_direction, config.push_force);

    Some(HitReaction {
        effect,
        sound,
        entered_stun,
        killed: !health.is_alive(),
    })
}
