//! Объекты окружения: Grave (смертельная зона)

use bevy::prelude::*;

/// Могила-ловушка
///
/// Пока `is_deadly == true`, зомби, коснувшийся её DieArea, умирает,
/// а могила закрывается. Закрытая могила инертна (одноразовая ловушка).
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct Grave {
    pub is_deadly: bool,
}

impl Default for Grave {
    fn default() -> Self {
        Self { is_deadly: true }
    }
}

impl Grave {
    /// Закрыть могилу. Возвращает true, если она была открыта (сработала)
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.is_deadly, false)
    }
}
