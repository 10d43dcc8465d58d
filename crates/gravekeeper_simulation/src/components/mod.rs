//! ECS Components для игровых entity
//!
//! Организация по доменам:
//! - actor: зомби и его здоровье (Zombie, Health)
//! - combat: реакция на удары (StunState, Knockback)
//! - animation: флаги для анимационного слоя (ZombieAnimator)
//! - player: цель для зомби (Player)
//! - world: объекты окружения (Grave)

pub mod actor;
pub mod animation;
pub mod combat;
pub mod player;
pub mod world;

// Re-exports для удобного импорта
pub use actor::*;
pub use animation::*;
pub use combat::*;
pub use player::*;
pub use world::*;
