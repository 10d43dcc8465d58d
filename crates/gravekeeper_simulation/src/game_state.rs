//! Общее состояние игры (единственная shared mutable запись)
//!
//! Живёт как Bevy Resource: агенты и HUD получают его через `Res`/`ResMut`,
//! никакого глобального singleton'а и поиска по имени.
//! Все записи идут из систем одного schedule → single-writer на tick.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Итог партии
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Reflect, Serialize, Deserialize)]
pub enum GameResult {
    #[default]
    Playing,
    Won,
    Lost,
}

#[derive(Resource, Debug, Clone, Reflect, Serialize, Deserialize)]
#[reflect(Resource)]
pub struct GameState {
    /// Глобальная пауза: зомби стоят, таймеры заморожены
    pub is_paused: bool,
    /// Сердечки игрока (целое число слотов)
    pub player_health: u32,
    /// Заряд power shovel [0, 1]
    pub power_shovel_strength: f32,
    pub skeletons_killed: u32,
    pub graves_number: u32,
    pub game_result: GameResult,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            is_paused: false,
            player_health: 5,
            power_shovel_strength: 0.0,
            skeletons_killed: 0,
            graves_number: 0,
            game_result: GameResult::Playing,
        }
    }
}

impl GameState {
    pub fn is_playing(&self) -> bool {
        self.game_result == GameResult::Playing
    }

    /// Учёт убийства (вызывается ровно один раз на смерть)
    pub fn register_kill(&mut self) {
        self.skeletons_killed = self.skeletons_killed.saturating_add(1);
    }

    pub fn add_shovel_power(&mut self, amount: f32) {
        self.power_shovel_strength = (self.power_shovel_strength + amount).clamp(0.0, 1.0);
    }
}
