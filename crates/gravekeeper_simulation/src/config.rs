//! Конфигурация зомби (per-agent константы)
//!
//! Копируется на каждого зомби при спавне как компонент.
//! Можно загрузить из JSON (`ZombieConfig::from_json`), отсутствующие поля
//! берутся из Default.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ai::{ZoneTier, ZombieState};

/// Ошибки загрузки/валидации конфига
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse zombie config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("failed to read zombie config: {0}")]
    Io(#[from] std::io::Error),

    #[error("`{field}` must be a finite non-negative number, got {value}")]
    InvalidValue { field: &'static str, value: f32 },

    #[error("`{field}` must not exceed {max}, got {value}")]
    OutOfRange { field: &'static str, value: f32, max: f32 },

    #[error("`{inner}` ({inner_value}) must not exceed `{outer}` ({outer_value})")]
    UnorderedRadii {
        inner: &'static str,
        inner_value: f32,
        outer: &'static str,
        outer_value: f32,
    },
}

/// Параметры зомби
///
/// Зоны:
/// - distance < super_close_radius → Direct (идём прямо на игрока)
/// - distance < far_radius → Approach (фланговая точка на close_radius)
/// - иначе → RandomWalk (случайная точка на random_radius)
#[derive(Component, Debug, Clone, PartialEq, Reflect, Serialize, Deserialize)]
#[reflect(Component)]
#[serde(default)]
pub struct ZombieConfig {
    /// Начальное здоровье
    pub health: f32,
    /// Длительность оглушения (секунды)
    pub stun_duration: f32,
    /// Сила толчка при ударе (units per tick)
    pub push_force: f32,
    /// Насколько быстро толчок затухает (units per tick)
    pub push_force_decay: f32,

    /// Ближе этого к игроку не подходим
    pub minimal_distance: f32,
    /// Верхняя граница дистанции для "трусов"
    pub coward_minimal_distance: f32,
    /// Вероятность трусливого зомби [0, 1]
    pub coward_probability: f32,

    pub super_close_radius: f32,
    pub close_radius: f32,
    pub far_radius: f32,
    pub random_radius: f32,
    /// Градусы, разброс фланга в Approach
    pub approach_angle: f32,

    /// Радиус поиска ближайшей точки на navmesh
    pub nav_sample_radius: f32,
    /// Ближе этого к текущей цели = "пришли", роллим новую точку
    pub arrival_distance: f32,
    /// Дальше этого от цели = "идём" (анимация + шаги)
    pub walking_threshold: f32,

    /// Количество pain звуков в пуле
    pub pain_cue_count: usize,
}

impl Default for ZombieConfig {
    fn default() -> Self {
        Self {
            health: 50.0,
            stun_duration: 3.0,
            push_force: 0.7,
            push_force_decay: 0.01,
            minimal_distance: 2.0,
            coward_minimal_distance: 3.0,
            coward_probability: 0.5,
            super_close_radius: 7.0,
            close_radius: 6.0,
            far_radius: 20.0,
            random_radius: 10.0,
            approach_angle: 75.0,
            nav_sample_radius: 100.0,
            arrival_distance: 1.0,
            walking_threshold: 0.1,
            pain_cue_count: 3,
        }
    }
}

impl ZombieConfig {
    /// Парсит JSON и валидирует результат
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Читает JSON файл
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let values = [
            ("health", self.health),
            ("stun_duration", self.stun_duration),
            ("push_force", self.push_force),
            ("push_force_decay", self.push_force_decay),
            ("minimal_distance", self.minimal_distance),
            ("coward_minimal_distance", self.coward_minimal_distance),
            ("coward_probability", self.coward_probability),
            ("super_close_radius", self.super_close_radius),
            ("close_radius", self.close_radius),
            ("far_radius", self.far_radius),
            ("random_radius", self.random_radius),
            ("approach_angle", self.approach_angle),
            ("nav_sample_radius", self.nav_sample_radius),
            ("arrival_distance", self.arrival_distance),
            ("walking_threshold", self.walking_threshold),
        ];

        for (field, value) in values {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidValue { field, value });
            }
        }

        if self.coward_probability > 1.0 {
            return Err(ConfigError::OutOfRange {
                field: "coward_probability",
                value: self.coward_probability,
                max: 1.0,
            });
        }

        // super_close > close допустимо (дефолты 7 > 6)
        check_order("super_close_radius", self.super_close_radius, "far_radius", self.far_radius)?;
        check_order("close_radius", self.close_radius, "far_radius", self.far_radius)?;
        check_order(
            "minimal_distance",
            self.minimal_distance,
            "coward_minimal_distance",
            self.coward_minimal_distance,
        )?;

        Ok(())
    }

    /// Зоны в порядке приоритета (первая совпавшая выигрывает)
    pub fn zone_tiers(&self) -> [ZoneTier; 2] {
        [
            ZoneTier {
                radius: self.super_close_radius,
                state: ZombieState::Direct,
            },
            ZoneTier {
                radius: self.far_radius,
                state: ZombieState::Approach,
            },
        ]
    }
}

fn check_order(
    inner: &'static str,
    inner_value: f32,
    outer: &'static str,
    outer_value: f32,
) -> Result<(), ConfigError> {
    if inner_value > outer_value {
        return Err(ConfigError::UnorderedRadii {
            inner,
            inner_value,
            outer,
            outer_value,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ZombieConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.health, 50.0);
        assert_eq!(config.stun_duration, 3.0);
        assert_eq!(config.super_close_radius, 7.0);
        assert_eq!(config.far_radius, 20.0);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = ZombieConfig::from_json(r#"{ "health": 80.0, "far_radius": 25.0 }"#)
            .expect("partial config should parse");

        assert_eq!(config.health, 80.0);
        assert_eq!(config.far_radius, 25.0);
        assert_eq!(config.close_radius, 6.0);
        assert_eq!(config.pain_cue_count, 3);
    }

    #[test]
    fn test_unordered_radii_rejected() {
        let result = ZombieConfig::from_json(r#"{ "super_close_radius": 30.0 }"#);
        assert!(matches!(
            result,
            Err(ConfigError::UnorderedRadii { inner: "super_close_radius", .. })
        ));
    }

    #[test]
    fn test_negative_value_rejected() {
        let config = ZombieConfig {
            push_force: -1.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { field: "push_force", .. })
        ));
    }

    #[test]
    fn test_probability_above_one_is_out_of_range() {
        let error = ZombieConfig::from_json(r#"{ "coward_probability": 1.5 }"#)
            .expect_err("probability 1.5 must be rejected");

        assert!(matches!(
            error,
            ConfigError::OutOfRange { field: "coward_probability", max, .. } if max == 1.0
        ));
        assert_eq!(error.to_string(), "`coward_probability` must not exceed 1, got 1.5");
    }

    #[test]
    fn test_garbage_json_is_parse_error() {
        assert!(matches!(
            ZombieConfig::from_json("not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_zone_tiers_priority_order() {
        let tiers = ZombieConfig::default().zone_tiers();
        assert_eq!(tiers[0].state, ZombieState::Direct);
        assert_eq!(tiers[1].state, ZombieState::Approach);
    }
}
