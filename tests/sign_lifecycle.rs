//! Integration tests for the instruction-sign lifecycle: spawn guarding,
//! chain-break idempotence, body release, and spawn-failure retry.

#![allow(dead_code)]

use bevy_ecs::prelude::*;
use rapier2d::prelude::*;
use raylib::prelude::Vector2;

use showroom::components::mapposition::MapPosition;
use showroom::components::physicsbody::PhysicsBody;
use showroom::components::sign::SignRole;
use showroom::resources::appconfig::AppConfig;
use showroom::resources::assetmanifest::AssetManifest;
use showroom::resources::camera2d::Camera2DRes;
use showroom::resources::diagnostics::Diagnostics;
use showroom::resources::overlaystate::OverlayState;
use showroom::resources::physics::PhysicsWorld;
use showroom::resources::pointer::Grabbed;
use showroom::resources::signs::{SignCoordinator, SignPhase};
use showroom::resources::spawnqueue::{SpawnQueue, SpawnRequest};
use showroom::resources::texturestore::TextureStore;
use showroom::resources::tweens::{TweenKey, TweenSchedule};
use showroom::resources::worldtime::WorldTime;
use showroom::systems::background::{background_update_system, sign_release_system};
use showroom::systems::spawn::spawn_queue_system;
use showroom::systems::tween::tween_update_system;

fn make_world() -> World {
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.insert_resource(OverlayState::default());
    world.insert_resource(TweenSchedule::new());
    world.insert_resource(SignCoordinator::default());
    world.insert_resource(SpawnQueue::default());
    world.insert_resource(Grabbed::default());
    world.insert_resource(Camera2DRes::new(Vector2 { x: 0.0, y: 30.0 }, 3.0));
    world.insert_resource(AppConfig::new());
    world.insert_resource(PhysicsWorld::from_config(&AppConfig::new()));
    world.insert_resource(AssetManifest::default());
    world.insert_resource(Diagnostics::new(0.0));
    world.insert_resource(TextureStore::new());
    world
}

fn tick_background(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(background_update_system);
    schedule.run(world);
}

fn tick_spawn(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(spawn_queue_system);
    schedule.run(world);
}

fn tick_release(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(sign_release_system);
    schedule.run(world);
}

fn run_tweens(world: &mut World, seconds: f32) {
    let mut schedule = Schedule::default();
    schedule.add_systems(tween_update_system);
    let steps = (seconds / 0.05).ceil() as usize;
    for _ in 0..steps {
        world.resource_mut::<WorldTime>().delta = 0.05;
        schedule.run(world);
    }
}

/// Spawn a sign entity with a fixed body, as the spawn system would.
fn spawn_sign_entity(world: &mut World) -> Entity {
    let body = RigidBodyBuilder::fixed()
        .translation(vector![0.0, 60.0])
        .build();
    let collider = ColliderBuilder::cuboid(22.0, 13.0).build();
    let (body_handle, collider_handle) = {
        let mut physics = world.resource_mut::<PhysicsWorld>();
        physics.insert(body, collider)
    };
    world
        .spawn((
            MapPosition::new(0.0, 60.0),
            PhysicsBody {
                body: body_handle,
                collider: collider_handle,
            },
        ))
        .id()
}

#[test]
fn double_trigger_requests_exactly_one_spawn() {
    let mut world = make_world();
    {
        let mut state = world.resource_mut::<OverlayState>();
        state.primary_trigger = true;
        state.overlay_hidden = true;
    }

    // Two coordinator passes before the spawn queue gets drained: the
    // second must see the in-flight spawn and do nothing.
    tick_background(&mut world);
    tick_background(&mut world);

    assert_eq!(world.resource::<SpawnQueue>().len(), 1);
    assert_eq!(
        world.resource::<SignCoordinator>().primary.phase,
        SignPhase::Spawning
    );
}

#[test]
fn chain_break_is_idempotent_and_releases_body() {
    let mut world = make_world();
    let sign = spawn_sign_entity(&mut world);
    {
        let mut state = world.resource_mut::<OverlayState>();
        state.primary_trigger = true;
        state.overlay_hidden = false;
        let mut signs = world.resource_mut::<SignCoordinator>();
        signs.primary.begin_spawn(SignRole::Primary);
        signs.primary.finish_spawn(sign);
    }

    // Overlay visible + intact sign: the ladder starts the break.
    tick_background(&mut world);
    assert_eq!(
        world.resource::<SignCoordinator>().primary.phase,
        SignPhase::Breaking
    );
    assert!(
        world
            .resource::<TweenSchedule>()
            .contains(TweenKey::Sign(SignRole::Primary))
    );

    // A second pass mid-animation must not restart anything.
    run_tweens(&mut world, 0.05);
    tick_background(&mut world);
    assert_eq!(
        world.resource::<SignCoordinator>().primary.phase,
        SignPhase::Breaking
    );

    // Completion moves the slot to Broken and queues the body release.
    run_tweens(&mut world, 1.0);
    assert_eq!(
        world.resource::<SignCoordinator>().primary.phase,
        SignPhase::Broken
    );
    assert!(
        !world
            .resource::<SignCoordinator>()
            .pending_release
            .is_empty()
    );

    tick_release(&mut world);
    let body_handle = world.get::<PhysicsBody>(sign).unwrap().body;
    let physics = world.resource::<PhysicsWorld>();
    assert!(physics.bodies[body_handle].is_dynamic());

    // Broken sign: further ladder passes start no new animation.
    tick_background(&mut world);
    assert!(
        !world
            .resource::<TweenSchedule>()
            .contains(TweenKey::Sign(SignRole::Primary))
    );
    assert_eq!(
        world.resource::<SignCoordinator>().primary.phase,
        SignPhase::Broken
    );
}

#[test]
fn failed_sign_spawn_rolls_back_for_retry() {
    let mut world = make_world();
    {
        let mut signs = world.resource_mut::<SignCoordinator>();
        signs.primary.begin_spawn(SignRole::Primary);
        let mut queue = world.resource_mut::<SpawnQueue>();
        queue.push(SpawnRequest::Sign {
            role: SignRole::Primary,
            position: Vector2 { x: 0.0, y: 60.0 },
        });
    }

    // The texture store is empty, so the spawn fails; the slot must roll
    // back so a later cycle can retry.
    tick_spawn(&mut world);

    assert_eq!(
        world.resource::<SignCoordinator>().primary.phase,
        SignPhase::NotSpawned
    );
    assert!(!world.resource::<Diagnostics>().errors.is_empty());
    assert!(world.resource::<AssetManifest>().is_empty());
}

#[test]
fn grabbing_a_prop_arms_the_secondary_sign() {
    let mut world = make_world();
    let prop = world.spawn(MapPosition::new(0.0, 0.0)).id();
    {
        // Primary already broken; overlay hidden so the break branch does
        // not swallow the ladder.
        let sign = world.spawn(MapPosition::new(0.0, 60.0)).id();
        let mut signs = world.resource_mut::<SignCoordinator>();
        signs.primary.begin_spawn(SignRole::Primary);
        signs.primary.finish_spawn(sign);
        signs.primary.begin_break(SignRole::Primary);
        signs.primary.finish_break();
        let mut state = world.resource_mut::<OverlayState>();
        state.primary_trigger = true;
        state.overlay_hidden = true;
        world.resource_mut::<Grabbed>().0 = Some(prop);
    }

    tick_background(&mut world);

    assert_eq!(
        world.resource::<SignCoordinator>().secondary.phase,
        SignPhase::Spawning
    );
    assert_eq!(world.resource::<SpawnQueue>().len(), 1);
}
