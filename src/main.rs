//! Showroom main entry point.
//!
//! An interactive portfolio scene written in Rust using:
//! - **raylib** for windowing, input, and 2D rendering
//! - **bevy_ecs** for entity-component-system architecture
//! - **rapier2d** for rigid-body physics behind the props
//!
//! A room of grabbable props sits behind an animated overlay: a column of
//! section labels that swaps sides, sliding text panels, and a hide
//! button, all choreographed through one shared tween schedule.
//!
//! # Main Loop
//!
//! 1. Initialize the raylib window, ECS world, and resources
//! 2. Register observers and the per-frame system schedule
//! 3. Enter the Setup state, which builds the overlay and scene
//! 4. Run the frame loop:
//!    - input, pointer routing, tween advance
//!    - physics step, sign coordinator, spawn queue, pose sync
//!    - render (world pass, overlay pass, diagnostics)
//! 5. A hidden/minimized window switches the loop to a throttled
//!    background cadence that renders only a fraction of ticks
//!
//! # Running
//!
//! ```sh
//! cargo run --release
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

mod components;
mod events;
mod game;
mod resources;
mod systems;

use bevy_ecs::message::Messages;
use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

use crate::components::persistent::Persistent;
use crate::events::gamestate::{GameStateChangedEvent, observe_gamestate_change_event};
use crate::events::pointer::PointerMessage;
use crate::events::switchdebug::switch_debug_observer;
use crate::resources::appconfig::AppConfig;
use crate::resources::assetmanifest::AssetManifest;
use crate::resources::camera2d::Camera2DRes;
use crate::resources::diagnostics::{Diagnostics, InitStage};
use crate::resources::framescheduler::{FrameMode, FrameScheduler};
use crate::resources::gamestate::{GameState, GameStates, NextGameState};
use crate::resources::overlaystate::OverlayState;
use crate::resources::physics::{PhysicsPause, PhysicsWorld};
use crate::resources::pointer::{Grabbed, PointerState};
use crate::resources::screensize::ScreenSize;
use crate::resources::signs::SignCoordinator;
use crate::resources::spawnqueue::SpawnQueue;
use crate::resources::systemsstore::SystemsStore;
use crate::resources::texturestore::TextureStore;
use crate::resources::tweens::TweenSchedule;
use crate::resources::uicamera::UiCamera;
use crate::resources::worldsignals::WorldSignals;
use crate::resources::worldtime::WorldTime;
use crate::systems::background::{background_update_system, sign_release_system};
use crate::systems::focuspause::focus_pause_system;
use crate::systems::gamestate::check_pending_state;
use crate::systems::hover::hover_system;
use crate::systems::gamestate::state_is_playing;
use crate::systems::input::{
    diagnostic_keys_system, diagnostics_watchdog_system, update_input_state,
    update_pointer_messages,
};
use crate::systems::overlay::resize_system;
use crate::systems::physics::{grabbed_translate_system, physics_pose_sync_system, physics_step_system};
use crate::systems::pointer::pointer_router_system;
use crate::systems::render::render_system;
use crate::systems::spawn::{loading_progress_system, spawn_queue_system};
use crate::systems::time::update_world_time;
use crate::systems::tween::tween_update_system;

/// Showroom - an interactive portfolio scene
#[derive(Parser)]
#[command(version, about = "Showroom: a physics-backed portfolio scene with an animated overlay")]
struct Cli {
    /// Path to the INI configuration file (default: ./config.ini).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Path to the JSON prop manifest (default: ./props.json).
    #[arg(long, value_name = "PATH")]
    manifest: Option<PathBuf>,

    /// Start in degraded mode (skip the asset-loading gate).
    #[arg(long)]
    degraded: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = match cli.config {
        Some(path) => AppConfig::with_path(path),
        None => AppConfig::new(),
    };
    if let Err(message) = config.load_from_file() {
        log::warn!("{}; using defaults", message);
    }
    if let Some(manifest) = cli.manifest {
        config.manifest_path = manifest;
    }

    let mut diagnostics = Diagnostics::new(0.0);
    diagnostics.set_stage(InitStage::ConfigLoaded);

    // --------------- Raylib window ---------------
    let (window_width, window_height) = config.window_size();
    let (mut rl, thread) = raylib::init()
        .size(window_width as i32, window_height as i32)
        .resizable()
        .title("Showroom")
        .build();
    rl.set_target_fps(config.target_fps);
    // Disable ESC to exit
    rl.set_exit_key(None);
    diagnostics.set_stage(InitStage::WindowReady);
    if cli.degraded {
        diagnostics.continue_degraded();
    }

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(WorldTime::default().with_time_scale(1.0));
    world.insert_resource(WorldSignals::default());
    world.insert_resource(ScreenSize {
        w: rl.get_screen_width(),
        h: rl.get_screen_height(),
    });
    world.insert_resource(UiCamera::new(
        config.fov_y,
        window_width as f32 / window_height.max(1) as f32,
        config.ui_distance,
    ));
    world.insert_resource(Camera2DRes::new(
        raylib::prelude::Vector2 { x: 0.0, y: 30.0 },
        3.0,
    ));
    world.insert_resource(PhysicsWorld::from_config(&config));
    world.insert_resource(PhysicsPause::default());
    world.insert_resource(OverlayState::default());
    world.insert_resource(TweenSchedule::new());
    world.insert_resource(SignCoordinator::default());
    world.insert_resource(SpawnQueue::default());
    world.insert_resource(AssetManifest::default());
    world.insert_resource(FrameScheduler::default());
    world.insert_resource(PointerState::default());
    world.insert_resource(Grabbed::default());
    world.insert_resource(TextureStore::new());
    world.insert_resource(GameState::new());
    world.insert_resource(NextGameState::new());
    world.insert_resource(diagnostics);
    world.insert_resource(config);
    world.init_resource::<Messages<PointerMessage>>();

    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);

    world.spawn((Observer::new(observe_gamestate_change_event), Persistent));
    world.spawn((Observer::new(switch_debug_observer), Persistent));

    // Scene flow hooks, addressable by name from the state observer.
    // NOTE: registered systems are stored as entities; mark them Persistent
    // so they survive scene teardown on a diagnostic retry.
    let mut systems_store = SystemsStore::new();

    let setup_system_id = world.register_system(game::setup);
    world.entity_mut(setup_system_id.entity()).insert(Persistent);
    systems_store.insert("setup", setup_system_id);

    let enter_play_system_id = world.register_system(game::enter_play);
    world
        .entity_mut(enter_play_system_id.entity())
        .insert(Persistent);
    systems_store.insert("enter_play", enter_play_system_id);

    let quit_game_system_id = world.register_system(game::quit_game);
    world
        .entity_mut(quit_game_system_id.entity())
        .insert(Persistent);
    systems_store.insert("quit_game", quit_game_system_id);

    world.insert_resource(systems_store);
    world.flush();

    // Enter Setup immediately.
    {
        let mut next_state = world.resource_mut::<NextGameState>();
        next_state.set(GameStates::Setup);
    }
    world.trigger(GameStateChangedEvent {});
    world.flush();

    // --------------- Per-frame schedule ---------------
    let mut update = Schedule::default();
    update.add_systems(update_pointer_messages);
    update.add_systems(update_input_state.after(update_pointer_messages));
    update.add_systems(check_pending_state);
    update.add_systems(diagnostics_watchdog_system);
    update.add_systems(diagnostic_keys_system);
    update.add_systems(resize_system.after(update_input_state));
    update.add_systems(pointer_router_system.after(update_input_state).after(resize_system));
    update.add_systems(hover_system.after(pointer_router_system));
    update.add_systems(focus_pause_system.after(pointer_router_system));
    update.add_systems(
        tween_update_system
            .after(pointer_router_system)
            .after(hover_system),
    );
    update.add_systems(grabbed_translate_system.after(tween_update_system));
    // Frame order contract: physics step, then the background coordinator,
    // then pose sync, then render.
    update.add_systems(
        physics_step_system
            .after(grabbed_translate_system)
            .after(focus_pause_system),
    );
    update.add_systems(
        background_update_system
            .run_if(state_is_playing)
            .after(physics_step_system),
    );
    update.add_systems(spawn_queue_system.after(background_update_system));
    update.add_systems(sign_release_system.after(spawn_queue_system));
    update.add_systems(loading_progress_system.after(spawn_queue_system));
    update.add_systems(
        physics_pose_sync_system
            .after(spawn_queue_system)
            .after(physics_step_system),
    );
    update.add_systems(render_system.after(physics_pose_sync_system));

    update
        .initialize(&mut world)
        .expect("Failed to initialize schedule");

    log::info!("Showroom starting up");

    // --------------- Main loop ---------------
    loop {
        let (should_close, visible, dt, screen_w, screen_h) = {
            let rl = world.non_send_resource::<raylib::RaylibHandle>();
            (
                rl.window_should_close(),
                !(rl.is_window_minimized() || rl.is_window_hidden()),
                rl.get_frame_time(),
                rl.get_screen_width(),
                rl.get_screen_height(),
            )
        };
        if should_close || world.resource::<WorldSignals>().has_flag("quit_game") {
            break;
        }

        {
            let mut screen = world.resource_mut::<ScreenSize>();
            screen.w = screen_w;
            screen.h = screen_h;
        }

        if let Some(mode) = world
            .resource_mut::<FrameScheduler>()
            .handle_visibility_change(visible)
        {
            log::info!("Frame cadence -> {:?}", mode);
        }
        let (interval_ms, render_rate) = {
            let config = world.resource::<AppConfig>();
            (
                config.background_frame_interval_ms,
                config.background_render_rate,
            )
        };
        match world.resource::<FrameScheduler>().mode() {
            FrameMode::Foreground => {
                world.resource_mut::<FrameScheduler>().begin_foreground_tick();
            }
            FrameMode::Background => {
                // Throttled cadence; the same update pipeline runs, only
                // rendering is probabilistic.
                std::thread::sleep(Duration::from_millis(interval_ms));
                world
                    .resource_mut::<FrameScheduler>()
                    .begin_background_tick(fastrand::f32(), render_rate);
            }
        }

        update_world_time(&mut world, dt);
        update.run(&mut world);
        world.clear_trackers();
    }

    log::info!("Showroom shut down");
}
