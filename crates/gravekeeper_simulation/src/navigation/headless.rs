//! Headless реализация NavigationPort
//!
//! Проходимая поверхность = прямоугольник на плоскости XZ (y = floor_height).
//! Snap: clamp в прямоугольник, неудача если clamped точка дальше радиуса.

use bevy::prelude::*;
use std::collections::HashMap;

use super::NavigationPort;

/// Проходимая область (XZ прямоугольник)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavBounds {
    pub min: Vec2,
    pub max: Vec2,
    pub floor_height: f32,
}

impl Default for NavBounds {
    fn default() -> Self {
        Self {
            min: Vec2::splat(-100.0),
            max: Vec2::splat(100.0),
            floor_height: 0.0,
        }
    }
}

impl NavBounds {
    pub fn clamp(&self, point: Vec3) -> Vec3 {
        Vec3::new(
            point.x.clamp(self.min.x, self.max.x),
            self.floor_height,
            point.z.clamp(self.min.y, self.max.y),
        )
    }
}

/// Запись агента внутри headless навигации
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AgentRecord {
    pub destination: Option<Vec3>,
    pub stopped: bool,
}

#[derive(Debug, Clone)]
pub struct HeadlessNavigation {
    pub bounds: NavBounds,
    /// Скорость движения (m/s)
    pub speed: f32,
    agents: HashMap<Entity, AgentRecord>,
}

impl Default for HeadlessNavigation {
    fn default() -> Self {
        Self::new(NavBounds::default(), 2.0)
    }
}

impl HeadlessNavigation {
    pub fn new(bounds: NavBounds, speed: f32) -> Self {
        Self {
            bounds,
            speed,
            agents: HashMap::new(),
        }
    }

    pub fn agent(&self, agent: Entity) -> Option<&AgentRecord> {
        self.agents.get(&agent)
    }
}

impl NavigationPort for HeadlessNavigation {
    fn set_destination(&mut self, agent: Entity, point: Vec3) {
        self.agents.entry(agent).or_default().destination = Some(point);
    }

    fn set_stopped(&mut self, agent: Entity, stopped: bool) {
        self.agents.entry(agent).or_default().stopped = stopped;
    }

    fn sample_nearest_valid_point(&self, point: Vec3, max_distance: f32) -> Option<Vec3> {
        let snapped = self.bounds.clamp(point);
        (snapped.distance(point) <= max_distance).then_some(snapped)
    }

    fn advance(&mut self, agent: Entity, position: Vec3, delta: f32) -> Vec3 {
        let Some(record) = self.agents.get(&agent) else {
            return position;
        };
        if record.stopped {
            return position;
        }
        let Some(destination) = record.destination else {
            return position;
        };

        let to_destination = destination - position;
        let distance = to_destination.length();
        let step = self.speed * delta;

        if distance <= step {
            destination
        } else {
            position + to_destination / distance * step
        }
    }

    fn release(&mut self, agent: Entity) {
        self.agents.remove(&agent);
    }
}
