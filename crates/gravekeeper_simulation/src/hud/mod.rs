//! HUD view model — зеркало GameState для UI слоя
//!
//! Никакого рендера: UI хоста читает `HudView` и рисует сердечки, деления
//! лопаты, счётчик скелетов. Работает в Update (переменная частота),
//! не в FixedUpdate.

use bevy::prelude::*;

use crate::game_state::{GameResult, GameState};

/// Шаг debug-буста лопаты
pub const SHOVEL_DEBUG_BOOST: f32 = 0.2;
/// Множитель заряда → индекс последнего активного деления
const SHOVEL_PIP_SCALE: f32 = 5.05;

/// Команды от input слоя (меню + debug shortcuts)
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HudCommand {
    /// Escape: открыть/закрыть меню (только в уровне и пока идёт игра)
    ToggleMenu,
    /// F5/F6: принудительный итог
    ForceResult(GameResult),
    /// F7: +0.2 к заряду лопаты
    BoostShovel,
}

/// Раскладка HUD (сколько слотов нарисовано)
#[derive(Resource, Debug, Clone, Copy)]
pub struct HudLayout {
    pub heart_slots: usize,
    pub shovel_pips: usize,
    /// Меню внутри уровня. false: стартовое меню перед уровнем, открыто
    /// с самого начала (игра на паузе), Escape его не закрывает
    pub in_level: bool,
}

impl Default for HudLayout {
    fn default() -> Self {
        Self {
            heart_slots: 5,
            shovel_pips: 5,
            in_level: true,
        }
    }
}

/// Что показывает HUD прямо сейчас
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct HudView {
    /// true — живое сердце, false — пустое
    pub hearts: Vec<bool>,
    pub shovel_pips: Vec<bool>,
    pub power_fill: f32,
    /// "убито/всего"
    pub kills_label: String,
    pub menu_open: bool,
    /// Экран конца игры (фиксируется один раз)
    pub end_screen: Option<GameResult>,
}

impl HudView {
    /// Пересчитать зеркальные поля из GameState (меню/end screen не трогаем)
    pub fn mirror(&mut self, state: &GameState, layout: &HudLayout) {
        let hearts: Vec<bool> = (0..layout.heart_slots)
            .map(|i| (i as u32) < state.player_health)
            .collect();

        let last_active = (state.power_shovel_strength * SHOVEL_PIP_SCALE).floor() as i64;
        let pips: Vec<bool> = (0..layout.shovel_pips)
            .map(|i| (i as i64) <= last_active)
            .collect();

        let label = format!("{}/{}", state.skeletons_killed, state.graves_number);
        let fill = state.power_shovel_strength.clamp(0.0, 1.0);

        if self.hearts != hearts {
            self.hearts = hearts;
        }
        if self.shovel_pips != pips {
            self.shovel_pips = pips;
        }
        if self.kills_label != label {
            self.kills_label = label;
        }
        self.power_fill = fill;
    }
}

/// HUD Plugin (Update schedule)
///
/// 1. handle_hud_commands: меню/пауза, debug shortcuts
/// 2. latch_end_screen: один раз показать итог
/// 3. refresh_hud_view: зеркало GameState
pub struct HudPlugin;

impl Plugin for HudPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<HudCommand>()
            .init_resource::<HudLayout>()
            .init_resource::<HudView>()
            .add_systems(Startup, open_initial_menu)
            .add_systems(
                Update,
                (handle_hud_commands, latch_end_screen, refresh_hud_view).chain(),
            );
    }
}

/// Система (Startup): меню открыто сразу только вне уровня
///
/// Закрывает стартовое меню хост (переход в сцену уровня с новым HudLayout).
pub fn open_initial_menu(
    mut game_state: ResMut<GameState>,
    mut view: ResMut<HudView>,
    layout: Res<HudLayout>,
) {
    set_menu(&mut view, &mut game_state, !layout.in_level);
}

/// Система: команды HUD
pub fn handle_hud_commands(
    mut hud_commands: EventReader<HudCommand>,
    mut game_state: ResMut<GameState>,
    mut view: ResMut<HudView>,
    layout: Res<HudLayout>,
) {
    for command in hud_commands.read() {
        match command {
            HudCommand::ToggleMenu => {
                if !layout.in_level || !game_state.is_playing() {
                    continue;
                }
                let open = !view.menu_open;
                set_menu(&mut view, &mut game_state, open);
            }
            HudCommand::ForceResult(result) => {
                crate::log_info(&format!("HUD debug: forcing result {:?}", result));
                game_state.game_result = *result;
            }
            HudCommand::BoostShovel => {
                game_state.add_shovel_power(SHOVEL_DEBUG_BOOST);
            }
        }
    }
}

/// Система: экран конца игры (edge, только первый раз)
pub fn latch_end_screen(mut game_state: ResMut<GameState>, mut view: ResMut<HudView>) {
    if view.end_screen.is_some() || game_state.is_playing() {
        return;
    }

    view.end_screen = Some(game_state.game_result);
    set_menu(&mut view, &mut game_state, true);
    crate::log_info(&format!("Game over: {:?}", game_state.game_result));
}

/// Система: зеркало GameState → HudView
pub fn refresh_hud_view(game_state: Res<GameState>, layout: Res<HudLayout>, mut view: ResMut<HudView>) {
    view.mirror(&game_state, &layout);
}

/// Открытое меню = пауза
fn set_menu(view: &mut HudView, game_state: &mut GameState, open: bool) {
    view.menu_open = open;
    game_state.is_paused = open;
}
