//! Decision system: пересчёт ZombieBrain каждый fixed tick.

use bevy::prelude::*;

use crate::ai::think;
use crate::ai::ZombieBrain;
use crate::config::ZombieConfig;
use crate::navigation::Navigation;
use crate::{DeterministicRng, GameState, Player, Zombie};

/// Система: zombie decision engine
///
/// - Пауза → не думаем вообще (brain заморожен)
/// - Нет игрока → пропускаем tick
/// - Иначе `think` для каждого зомби, логируем смену яруса
pub fn zombie_decision(
    mut zombies: Query<
        (Entity, &Transform, &mut ZombieBrain, &ZombieConfig),
        (With<Zombie>, Without<Player>),
    >,
    players: Query<&Transform, With<Player>>,
    navigation: Res<Navigation>,
    game_state: Res<GameState>,
    mut rng: ResMut<DeterministicRng>,
) {
    if game_state.is_paused {
        return;
    }

    let Ok(player) = players.single() else {
        return;
    };
    let target = player.translation;

    for (entity, transform, mut brain, config) in zombies.iter_mut() {
        let transition = think(
            &mut brain,
            transform.translation,
            target,
            config,
            navigation.port(),
            &mut rng.rng,
        );

        if let Some(transition) = transition {
            if !transition.is_reroll() {
                crate::log(&format!(
                    "🧟 {:?} {:?} → {:?} (target {:?})",
                    entity, transition.from, transition.to, brain.target_point
                ));
            }
        }
    }
}
