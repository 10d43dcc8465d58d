//! Player marker component
//!
//! Цель для всех зомби. Позицию игрока двигает внешний input/physics слой,
//! симуляция её только читает.

use bevy::prelude::*;

/// Marker component для игрока
///
/// # Архитектурная заметка
/// - Зомби-системы используют `Without<Player>` filter на своих Transform
/// - В single-player ровно один entity с этим компонентом
#[derive(Component, Debug, Clone, Copy, Default)]
#[require(Transform)]
pub struct Player;
