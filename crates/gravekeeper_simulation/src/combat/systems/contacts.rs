//! Коллизии зомби: толкотня и могилы-ловушки.

use bevy::prelude::*;

use crate::combat::{DeathCause, GraveClosed, ZombieContact, ZombieDied, ZombieHit};
use crate::components::{Grave, Health};
use crate::navigation::Navigation;
use crate::{GameState, Zombie};

use super::kill_zombie;

/// Система: route contacts
///
/// - зомби → зомби: удар по `other` с нулевым уроном (стан + толчок + звук)
/// - зомби → открытая могила: могила закрывается, зомби умирает без ZombieHit
pub fn route_zombie_contacts(
    mut commands: Commands,
    mut contacts: EventReader<ZombieContact>,
    mut zombies: Query<(&Transform, &mut Health), With<Zombie>>,
    mut graves: Query<&mut Grave>,
    mut navigation: ResMut<Navigation>,
    mut game_state: ResMut<GameState>,
    mut hits: EventWriter<ZombieHit>,
    mut graves_closed: EventWriter<GraveClosed>,
    mut died: EventWriter<ZombieDied>,
) {
    for contact in contacts.read() {
        let Ok((transform, health)) = zombies.get(contact.zombie) else {
            continue;
        };
        if !health.is_alive() {
            continue;
        }
        let position = transform.translation;

        if zombies.contains(contact.other) {
            hits.write(ZombieHit {
                target: contact.other,
                damage: 0.0,
                impact_point: contact.contact_point,
                impact_direction: contact.contact_point - position,
                is_area_hit: false,
            });
            continue;
        }

        let Ok(mut grave) = graves.get_mut(contact.other) else {
            continue;
        };
        if !grave.close() {
            // Уже сработала, инертна
            continue;
        }

        graves_closed.write(GraveClosed {
            grave: contact.other,
            victim: contact.zombie,
        });
        crate::log_info(&format!("🪦 Grave {:?} closed on {:?}", contact.other, contact.zombie));

        if let Ok((_, mut health)) = zombies.get_mut(contact.zombie) {
            health.kill();
        }
        kill_zombie(
            &mut commands,
            contact.zombie,
            DeathCause::DeadlyArea,
            navigation.port_mut(),
            &mut game_state,
            &mut died,
        );
    }
}
