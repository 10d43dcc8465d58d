//! Zombie integration tests
//!
//! Полный SimulationPlugin, тики гоняем вручную через run_fixed_tick:
//! - ярусы decision engine и слежение в Direct
//! - удары: стан, толчок, ровно одна смерть
//! - коллизии: толкотня зомби, могилы-ловушки
//! - пауза, шаги, HUD

use bevy::prelude::*;
use gravekeeper_simulation::hud::{HudLayout, HudView};
use gravekeeper_simulation::presentation::{AnimationTrigger, AnimationTriggered, HitEffectRequested, SoundCue, SoundRequested};
use gravekeeper_simulation::*;
use std::sync::{Arc, Mutex};

const DT: f32 = 1.0 / 60.0;

/// Helper: App со всеми plugins
fn create_zombie_app(seed: u64) -> App {
    let mut app = create_headless_app(seed);
    app.add_plugins(SimulationPlugin);
    app
}

fn spawn_default_zombie(app: &mut App, position: Vec3) -> Entity {
    spawn_zombie(app.world_mut(), position, &ZombieConfig::default())
}

fn shovel_hit(target: Entity, damage: f32, direction: Vec3) -> ZombieHit {
    ZombieHit {
        target,
        damage,
        impact_point: Vec3::new(0.0, 1.0, 0.0),
        impact_direction: direction,
        is_area_hit: false,
    }
}

fn brain(app: &App, zombie: Entity) -> ZombieBrain {
    app.world()
        .get::<ZombieBrain>(zombie)
        .cloned()
        .expect("zombie has a brain")
}

fn event_count<E: Event>(app: &App) -> usize {
    app.world().resource::<Events<E>>().len()
}

#[test]
fn test_far_zombie_wanders_then_tracks_player_up_close() {
    let mut app = create_zombie_app(42);
    let player = app.world_mut().spawn(Player).id();
    let start = Vec3::new(0.0, 0.0, 25.0);
    let zombie = spawn_default_zombie(&mut app, start);

    // 25 > far_radius → RandomWalk, точка на random_radius от себя
    run_fixed_tick(&mut app, DT);
    let wandering = brain(&app, zombie);
    assert_eq!(wandering.state, ZombieState::RandomWalk);
    assert!((wandering.target_point.distance(start) - 10.0).abs() < 1e-3);

    // Телепорт на 5m → Direct
    app.world_mut()
        .get_mut::<Transform>(zombie)
        .expect("zombie transform")
        .translation = Vec3::new(0.0, 0.0, 5.0);
    run_fixed_tick(&mut app, DT);

    let direct = brain(&app, zombie);
    assert_eq!(direct.state, ZombieState::Direct);
    assert!((direct.target_point.distance(Vec3::ZERO) - direct.minimal_approach_distance).abs() < 1e-4);
    assert!(direct.target_point.z > 0.0, "Direct point sits between player and zombie");

    // Игрок сместился → точка пересчитывается в том же tick'е
    app.world_mut()
        .get_mut::<Transform>(player)
        .expect("player transform")
        .translation = Vec3::new(3.0, 0.0, 0.0);
    run_fixed_tick(&mut app, DT);

    let tracked = brain(&app, zombie);
    assert_eq!(tracked.state, ZombieState::Direct);
    assert!((tracked.target_point.distance(Vec3::new(3.0, 0.0, 0.0)) - tracked.minimal_approach_distance).abs() < 1e-4);
    assert_ne!(tracked.target_point, direct.target_point);
}

#[test]
fn test_mid_range_zombie_approaches_flank_point() {
    let mut app = create_zombie_app(7);
    app.world_mut().spawn(Player);
    let zombie = spawn_default_zombie(&mut app, Vec3::new(15.0, 0.0, 0.0));

    run_fixed_tick(&mut app, DT);

    let approach = brain(&app, zombie);
    assert_eq!(approach.state, ZombieState::Approach);
    // close_radius от игрока, с нашей стороны (угол <= 75°)
    assert!((approach.target_point.length() - 6.0).abs() < 1e-3);
    assert!(approach.target_point.x > 0.0);
}

#[test]
fn test_non_lethal_hit_stuns_and_pushes() {
    let mut app = create_zombie_app(42);
    let zombie = spawn_default_zombie(&mut app, Vec3::ZERO);

    app.world_mut()
        .send_event(shovel_hit(zombie, 30.0, Vec3::new(0.0, 0.0, -3.0)));
    run_fixed_tick(&mut app, DT);

    let world = app.world();
    assert_eq!(world.get::<Health>(zombie).map(|h| h.current), Some(20.0));

    let stun = world.get::<StunState>(zombie).expect("stun state");
    assert!(stun.is_stunned);
    assert!(stun.timer < 3.0 && stun.timer > 2.9);

    // Толчок уже применён один раз и затух на push_force_decay
    let knockback = world.get::<Knockback>(zombie).expect("knockback");
    assert!((knockback.impulse.length() - 0.69).abs() < 1e-5);
    let position = world.get::<Transform>(zombie).expect("transform").translation;
    assert!((position - Vec3::new(0.0, 0.0, -0.7)).length() < 1e-5);

    assert!(world.get::<ZombieAnimator>(zombie).expect("animator").stunned);
    assert_eq!(event_count::<HitEffectRequested>(&app), 1);

    let triggers: Vec<AnimationTrigger> = app
        .world()
        .resource::<Events<AnimationTriggered>>()
        .iter_current_update_events()
        .map(|event| event.trigger)
        .collect();
    assert_eq!(triggers, vec![AnimationTrigger::Stun, AnimationTrigger::Hit]);
    assert_eq!(event_count::<ZombieDied>(&app), 0);
}

#[test]
fn test_two_lethal_hits_in_one_tick_kill_once() {
    let mut app = create_zombie_app(42);
    let zombie = spawn_default_zombie(&mut app, Vec3::ZERO);

    app.world_mut().send_event(shovel_hit(zombie, 60.0, Vec3::X));
    app.world_mut().send_event(shovel_hit(zombie, 60.0, Vec3::X));
    run_fixed_tick(&mut app, DT);

    assert_eq!(event_count::<ZombieDied>(&app), 1);
    assert_eq!(app.world().resource::<GameState>().skeletons_killed, 1);
    assert!(app.world().get_entity(zombie).is_err());

    // Удар по уже деспавненному — тихий no-op
    app.world_mut().send_event(shovel_hit(zombie, 60.0, Vec3::X));
    run_fixed_tick(&mut app, DT);
    assert_eq!(event_count::<ZombieDied>(&app), 1);
    assert_eq!(app.world().resource::<GameState>().skeletons_killed, 1);
}

#[test]
fn test_zombie_bump_is_zero_damage_hit_on_other() {
    let mut app = create_zombie_app(42);
    let pusher = spawn_default_zombie(&mut app, Vec3::ZERO);
    let bumped = spawn_default_zombie(&mut app, Vec3::new(1.0, 0.0, 0.0));

    app.world_mut().send_event(ZombieContact {
        zombie: pusher,
        other: bumped,
        contact_point: Vec3::new(0.5, 0.0, 0.0),
    });
    run_fixed_tick(&mut app, DT);

    let world = app.world();
    assert_eq!(world.get::<Health>(bumped).map(|h| h.current), Some(50.0));
    assert!(world.get::<StunState>(bumped).expect("stun").is_stunned);
    assert!(!world.get::<StunState>(pusher).expect("stun").is_stunned);

    // Толчок по +X, оглушённого навигация не двигает
    let position = world.get::<Transform>(bumped).expect("transform").translation;
    assert!((position - Vec3::new(1.7, 0.0, 0.0)).length() < 1e-5);
    assert_eq!(event_count::<ZombieDied>(&app), 0);
}

#[test]
fn test_deadly_grave_closes_once() {
    let mut app = create_zombie_app(42);
    let first = spawn_default_zombie(&mut app, Vec3::ZERO);
    let second = spawn_default_zombie(&mut app, Vec3::new(2.0, 0.0, 0.0));
    let grave = app.world_mut().spawn(Grave::default()).id();

    app.world_mut().send_event(ZombieContact {
        zombie: first,
        other: grave,
        contact_point: Vec3::ZERO,
    });
    run_fixed_tick(&mut app, DT);

    assert_eq!(event_count::<GraveClosed>(&app), 1);
    let deaths: Vec<ZombieDied> = app
        .world()
        .resource::<Events<ZombieDied>>()
        .iter_current_update_events()
        .copied()
        .collect();
    assert_eq!(
        deaths,
        vec![ZombieDied {
            entity: first,
            cause: DeathCause::DeadlyArea,
        }]
    );
    assert!(app.world().get_entity(first).is_err());
    assert!(!app.world().get::<Grave>(grave).expect("grave").is_deadly);

    // Закрытая могила инертна
    app.world_mut().send_event(ZombieContact {
        zombie: second,
        other: grave,
        contact_point: Vec3::new(2.0, 0.0, 0.0),
    });
    run_fixed_tick(&mut app, DT);

    assert_eq!(event_count::<GraveClosed>(&app), 1);
    assert_eq!(event_count::<ZombieDied>(&app), 1);
    assert!(app.world().get::<Health>(second).expect("health").is_alive());
    assert_eq!(app.world().resource::<GameState>().skeletons_killed, 1);
}

#[test]
fn test_pause_freezes_decision_and_stun_timer() {
    let mut app = create_zombie_app(42);
    app.world_mut().spawn(Player);
    let zombie = spawn_default_zombie(&mut app, Vec3::new(0.0, 0.0, 30.0));

    app.world_mut().send_event(shovel_hit(zombie, 5.0, Vec3::X));
    run_fixed_tick(&mut app, DT);
    let before = brain(&app, zombie);
    let timer_before = app.world().get::<StunState>(zombie).expect("stun").timer;

    // Двойная пауза == одна пауза
    app.world_mut().resource_mut::<GameState>().is_paused = true;
    app.world_mut().resource_mut::<GameState>().is_paused = true;
    for _ in 0..30 {
        run_fixed_tick(&mut app, DT);
    }

    assert_eq!(brain(&app, zombie), before);
    let stun = app.world().get::<StunState>(zombie).expect("stun");
    assert!(stun.is_stunned);
    assert_eq!(stun.timer, timer_before);

    // Толчок физический — продолжает затухать и на паузе
    let knockback = app.world().get::<Knockback>(zombie).expect("knockback");
    assert!((knockback.impulse.length() - (0.7 - 31.0 * 0.01)).abs() < 1e-4);

    app.world_mut().resource_mut::<GameState>().is_paused = false;
    run_fixed_tick(&mut app, DT);
    let timer_after = app.world().get::<StunState>(zombie).expect("stun").timer;
    assert!(timer_after < timer_before);
}

/// Что motion отдал в порт навигации
#[derive(Debug, Default)]
struct PortCalls {
    stopped: Vec<(Entity, bool)>,
    destinations: Vec<(Entity, Vec3)>,
}

/// Порт хост-движка: тело двигает сам движок, `advance` остаётся no-op
struct RecordingNavigation {
    calls: Arc<Mutex<PortCalls>>,
}

impl NavigationPort for RecordingNavigation {
    fn set_destination(&mut self, agent: Entity, point: Vec3) {
        self.calls.lock().unwrap().destinations.push((agent, point));
    }

    fn set_stopped(&mut self, agent: Entity, stopped: bool) {
        self.calls.lock().unwrap().stopped.push((agent, stopped));
    }

    fn sample_nearest_valid_point(&self, point: Vec3, _max_distance: f32) -> Option<Vec3> {
        Some(point)
    }
}

fn take_port_calls(calls: &Arc<Mutex<PortCalls>>) -> PortCalls {
    std::mem::take(&mut *calls.lock().unwrap())
}

#[test]
fn test_pause_engages_navigation_stop_on_host_port() {
    let calls = Arc::new(Mutex::new(PortCalls::default()));
    let mut app = create_headless_app(42);
    app.insert_resource(Navigation::new(RecordingNavigation {
        calls: Arc::clone(&calls),
    }));
    app.add_plugins(SimulationPlugin);

    app.world_mut().spawn(Player);
    let zombie = spawn_default_zombie(&mut app, Vec3::new(0.0, 0.0, 30.0));

    // Пауза: только stop, никаких destination
    app.world_mut().resource_mut::<GameState>().is_paused = true;
    app.world_mut().send_event(shovel_hit(zombie, 0.0, Vec3::X));
    for _ in 0..3 {
        run_fixed_tick(&mut app, DT);
    }

    let paused = take_port_calls(&calls);
    assert_eq!(paused.stopped, vec![(zombie, true); 3]);
    assert!(paused.destinations.is_empty());

    // Снята пауза, но зомби оглушён → stopped == is_stunned
    app.world_mut().resource_mut::<GameState>().is_paused = false;
    run_fixed_tick(&mut app, DT);

    let stunned = take_port_calls(&calls);
    assert!(app.world().get::<StunState>(zombie).expect("stun").is_stunned);
    assert_eq!(stunned.stopped, vec![(zombie, true)]);
    assert_eq!(stunned.destinations, vec![(zombie, brain(&app, zombie).target_point)]);

    // Стан снят → идёт, destination каждый tick = текущая цель мозга
    *app.world_mut().get_mut::<StunState>(zombie).expect("stun") = StunState::default();
    for _ in 0..2 {
        run_fixed_tick(&mut app, DT);
        let walking = take_port_calls(&calls);
        assert_eq!(walking.stopped, vec![(zombie, false)]);
        assert_eq!(walking.destinations, vec![(zombie, brain(&app, zombie).target_point)]);
    }
}

#[test]
fn test_knockback_slides_and_decays_while_paused() {
    let mut app = create_zombie_app(42);
    let zombie = spawn_default_zombie(&mut app, Vec3::ZERO);

    app.world_mut().resource_mut::<GameState>().is_paused = true;
    app.world_mut().send_event(shovel_hit(zombie, 0.0, Vec3::X));
    for _ in 0..3 {
        run_fixed_tick(&mut app, DT);
    }

    // Пауза не останавливает толчок: 0.7 + 0.69 + 0.68, impulse затух до 0.67
    let world = app.world();
    let position = world.get::<Transform>(zombie).expect("transform").translation;
    assert!((position - Vec3::new(2.07, 0.0, 0.0)).length() < 1e-4);
    let knockback = world.get::<Knockback>(zombie).expect("knockback");
    assert!((knockback.impulse.length() - 0.67).abs() < 1e-5);

    // А таймер стана стоит
    assert_eq!(world.get::<StunState>(zombie).expect("stun").timer, 3.0);
}

#[test]
fn test_footsteps_follow_walking_edges() {
    let mut app = create_zombie_app(42);
    let zombie = spawn_default_zombie(&mut app, Vec3::ZERO);

    // Без игрока decision молчит, цель задаём руками
    app.world_mut()
        .get_mut::<ZombieBrain>(zombie)
        .expect("brain")
        .target_point = Vec3::new(5.0, 0.0, 0.0);
    run_fixed_tick(&mut app, DT);
    run_fixed_tick(&mut app, DT);

    let position = app
        .world()
        .get::<Transform>(zombie)
        .expect("transform")
        .translation;
    assert!(position.x > 0.0, "headless navigation moved the agent");
    app.world_mut()
        .get_mut::<ZombieBrain>(zombie)
        .expect("brain")
        .target_point = position;
    run_fixed_tick(&mut app, DT);

    let cues: Vec<SoundCue> = app
        .world()
        .resource::<Events<SoundRequested>>()
        .iter_current_update_events()
        .map(|event| event.cue)
        .collect();
    assert_eq!(cues.len(), 2);
    assert!(matches!(
        cues[0],
        SoundCue::FootstepsStart { cycle_offset } if (0.0..1.0).contains(&cycle_offset)
    ));
    assert_eq!(cues[1], SoundCue::FootstepsStop);
    assert!(!app.world().get::<ZombieAnimator>(zombie).expect("animator").walking);
}

#[test]
fn test_hud_menu_toggle_pauses_and_end_screen_latches() {
    let mut app = create_zombie_app(42);

    app.world_mut().send_event(HudCommand::ToggleMenu);
    app.world_mut().run_schedule(Update);
    assert!(app.world().resource::<GameState>().is_paused);
    assert!(app.world().resource::<HudView>().menu_open);

    app.world_mut().send_event(HudCommand::ToggleMenu);
    app.world_mut().run_schedule(Update);
    assert!(!app.world().resource::<GameState>().is_paused);

    app.world_mut().send_event(HudCommand::ForceResult(GameResult::Lost));
    app.world_mut().run_schedule(Update);
    let view = app.world().resource::<HudView>();
    assert_eq!(view.end_screen, Some(GameResult::Lost));
    assert!(view.menu_open);
    assert!(app.world().resource::<GameState>().is_paused);

    // Игра кончилась: Escape не закрывает меню, итог не перезаписывается
    app.world_mut().send_event(HudCommand::ToggleMenu);
    app.world_mut().send_event(HudCommand::ForceResult(GameResult::Won));
    app.world_mut().run_schedule(Update);
    let view = app.world().resource::<HudView>();
    assert_eq!(view.end_screen, Some(GameResult::Lost));
    assert!(view.menu_open);
}

#[test]
fn test_pre_level_menu_opens_paused_and_ignores_escape() {
    let mut app = create_headless_app(42);
    app.insert_resource(HudLayout {
        in_level: false,
        ..Default::default()
    });
    app.add_plugins(SimulationPlugin);

    app.world_mut().run_schedule(Startup);
    assert!(app.world().resource::<HudView>().menu_open);
    assert!(app.world().resource::<GameState>().is_paused);

    app.world_mut().send_event(HudCommand::ToggleMenu);
    app.world_mut().run_schedule(Update);
    assert!(app.world().resource::<HudView>().menu_open);
    assert!(app.world().resource::<GameState>().is_paused);
}

#[test]
fn test_in_level_start_leaves_menu_closed() {
    let mut app = create_zombie_app(42);

    app.world_mut().run_schedule(Startup);
    assert!(!app.world().resource::<HudView>().menu_open);
    assert!(!app.world().resource::<GameState>().is_paused);
}

#[test]
fn test_hud_mirrors_kills_and_shovel_boost() {
    let mut app = create_zombie_app(42);
    app.world_mut().resource_mut::<GameState>().graves_number = 3;
    let zombie = spawn_default_zombie(&mut app, Vec3::ZERO);

    app.world_mut().send_event(shovel_hit(zombie, 100.0, Vec3::Z));
    run_fixed_tick(&mut app, DT);

    app.world_mut().send_event(HudCommand::BoostShovel);
    app.world_mut().run_schedule(Update);

    let view = app.world().resource::<HudView>();
    assert_eq!(view.kills_label, "1/3");
    assert!((view.power_fill - 0.2).abs() < 1e-6);
    // floor(0.2 * 5.05) = 1 → два деления
    assert_eq!(view.shovel_pips, vec![true, true, false, false, false]);
    assert_eq!(view.hearts, vec![true; 5]);
}
