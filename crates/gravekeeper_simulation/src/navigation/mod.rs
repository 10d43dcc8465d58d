//! Navigation domain — порт к pathfinding сервису движка
//!
//! # Architecture
//!
//! Pathfinding/navmesh — забота хост-движка. Симуляция общается с ним через
//! узкий trait `NavigationPort`:
//! - `set_destination` / `set_stopped`: per-agent команды
//! - `sample_nearest_valid_point`: snap точки на проходимую поверхность
//! - `advance`: сдвиг агента за tick (движок обычно двигает тело сам → no-op)
//!
//! Для headless симуляции и тестов есть `HeadlessNavigation`
//! (прямоугольная проходимая область, движение по прямой).

pub mod headless;

pub use headless::{HeadlessNavigation, NavBounds};

use bevy::prelude::*;

/// Порт навигации (реализуется хост-движком)
pub trait NavigationPort: Send + Sync {
    fn set_destination(&mut self, agent: Entity, point: Vec3);

    fn set_stopped(&mut self, agent: Entity, stopped: bool);

    /// Ближайшая точка на проходимой поверхности в радиусе `max_distance`
    fn sample_nearest_valid_point(&self, point: Vec3, max_distance: f32) -> Option<Vec3>;

    /// Новая позиция агента после `delta` секунд движения
    fn advance(&mut self, _agent: Entity, position: Vec3, _delta: f32) -> Vec3 {
        position
    }

    /// Агент умер/деспавнен — забыть про него
    fn release(&mut self, _agent: Entity) {}
}

/// Resource-обёртка над портом (wiring при создании App, без поиска по имени)
#[derive(Resource)]
pub struct Navigation {
    port: Box<dyn NavigationPort>,
}

impl Navigation {
    pub fn new(port: impl NavigationPort + 'static) -> Self {
        Self {
            port: Box::new(port),
        }
    }

    pub fn port(&self) -> &dyn NavigationPort {
        self.port.as_ref()
    }

    pub fn port_mut(&mut self) -> &mut dyn NavigationPort {
        self.port.as_mut()
    }
}

impl Default for Navigation {
    fn default() -> Self {
        Self::new(HeadlessNavigation::default())
    }
}

/// Система: сдвиг агентов через порт (headless режим)
///
/// На паузе никто не идёт. Оглушённых держит сам порт (set_stopped).
pub fn advance_navigation_agents(
    mut agents: Query<(Entity, &mut Transform), (With<crate::Zombie>, Without<crate::Player>)>,
    mut navigation: ResMut<Navigation>,
    game_state: Res<crate::GameState>,
    time: Res<Time<Fixed>>,
) {
    if game_state.is_paused {
        return;
    }

    let delta = time.delta_secs();
    let port = navigation.port_mut();

    for (entity, mut transform) in agents.iter_mut() {
        let next = port.advance(entity, transform.translation, delta);
        if next != transform.translation {
            transform.translation = next;
        }
    }
}
