//! Zombie decision engine
//!
//! Ярусный proximity FSM: RandomWalk / Approach / Direct.
//! Каждый fixed tick пересчитываем ближайшую точку назначения —
//! никакого сохранённого пути, только текущая target_point.

use bevy::prelude::*;

pub mod components;
pub mod decision;
pub mod systems;

// Re-export основных типов
pub use components::{ZombieBrain, ZombieState, ZoneTier};
pub use decision::{desired_state, roll_minimal_approach_distance, think, Transition};

/// AI Plugin
pub struct AIPlugin;

impl Plugin for AIPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            FixedUpdate,
            systems::zombie_decision.in_set(crate::SimulationSet::Decision),
        );
    }
}
