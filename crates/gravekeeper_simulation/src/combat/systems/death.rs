//! Смерть зомби (общая для ударов и ловушек).

use bevy::prelude::*;

use crate::combat::{DeathCause, ZombieDied};
use crate::navigation::NavigationPort;
use crate::GameState;

/// Завершить жизнь зомби
///
/// Вызывающий гарантирует, что это переход alive → dead (ровно один раз).
/// Деспавн через Commands (применится на ближайшем sync point).
pub fn kill_zombie(
    commands: &mut Commands,
    entity: Entity,
    cause: DeathCause,
    navigation: &mut dyn NavigationPort,
    game_state: &mut GameState,
    died: &mut EventWriter<ZombieDied>,
) {
    navigation.release(entity);
    game_state.register_kill();
    died.write(ZombieDied { entity, cause });

    if let Ok(mut entity_commands) = commands.get_entity(entity) {
        entity_commands.despawn();
    }

    crate::log_info(&format!(
        "⚰️ Zombie {:?} died ({:?}), kills: {}",
        entity, cause, game_state.skeletons_killed
    ));
}
