//! Integration tests for the frame-loop plumbing: visibility-driven
//! cadence transitions and the text-focus physics pause.

use bevy_ecs::prelude::*;
use rapier2d::prelude::*;

use showroom::components::uikind::Section;
use showroom::resources::appconfig::AppConfig;
use showroom::resources::framescheduler::{FrameMode, FrameScheduler};
use showroom::resources::overlaystate::OverlayState;
use showroom::resources::physics::{PhysicsPause, PhysicsWorld};
use showroom::resources::worldtime::WorldTime;
use showroom::systems::focuspause::focus_pause_system;
use showroom::systems::physics::physics_step_system;

fn make_focus_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.add_systems(focus_pause_system);
    schedule
}

fn make_pause_world() -> World {
    let mut world = World::new();
    world.insert_resource(OverlayState::default());
    world.insert_resource(PhysicsPause::default());
    world
}

#[test]
fn visibility_transitions_schedule_exactly_once() {
    let mut scheduler = FrameScheduler::default();

    // Foreground -> background: one transition, then silence.
    assert_eq!(
        scheduler.handle_visibility_change(false),
        Some(FrameMode::Background)
    );
    assert_eq!(scheduler.handle_visibility_change(false), None);
    assert_eq!(scheduler.handle_visibility_change(false), None);

    // Background -> foreground cancels the pending cadence first.
    scheduler.begin_background_tick(0.5, 0.1);
    assert_eq!(
        scheduler.handle_visibility_change(true),
        Some(FrameMode::Foreground)
    );
    assert_eq!(scheduler.background_ticks(), 0);
    assert_eq!(scheduler.handle_visibility_change(true), None);
    scheduler.begin_foreground_tick();
    assert!(scheduler.render_this_frame);
}

#[test]
fn focus_pauses_physics_and_defocus_resumes() {
    let mut world = make_pause_world();
    let mut schedule = make_focus_schedule();

    world.resource_mut::<OverlayState>().focused_section = Some(Section::About);
    schedule.run(&mut world);
    let pause = *world.resource::<PhysicsPause>();
    assert!(pause.paused);
    assert!(pause.paused_by_focus);

    world.resource_mut::<OverlayState>().focused_section = None;
    schedule.run(&mut world);
    let pause = *world.resource::<PhysicsPause>();
    assert!(!pause.paused);
    assert!(!pause.paused_by_focus);
}

#[test]
fn defocus_does_not_resume_unrelated_pause() {
    let mut world = make_pause_world();
    let mut schedule = make_focus_schedule();

    // Physics paused by something else (debug toggle).
    world.resource_mut::<PhysicsPause>().toggle();
    assert!(!world.resource::<PhysicsPause>().paused_by_focus);

    // Focusing while already paused must not claim the pause...
    world.resource_mut::<OverlayState>().focused_section = Some(Section::Work);
    schedule.run(&mut world);
    assert!(world.resource::<PhysicsPause>().paused);
    assert!(!world.resource::<PhysicsPause>().paused_by_focus);

    // ...so defocusing must not resume it either.
    world.resource_mut::<OverlayState>().focused_section = None;
    schedule.run(&mut world);
    assert!(
        world.resource::<PhysicsPause>().paused,
        "physics paused for another reason stays paused"
    );
}

#[test]
fn physics_step_is_skipped_while_paused() {
    let mut world = World::new();
    let config = AppConfig::new();
    world.insert_resource(WorldTime {
        elapsed: 0.0,
        delta: 1.0 / 60.0,
        time_scale: 1.0,
    });
    world.insert_resource(PhysicsPause {
        paused: true,
        paused_by_focus: false,
    });
    let mut physics = PhysicsWorld::from_config(&config);
    let body = RigidBodyBuilder::dynamic()
        .translation(vector![0.0, 100.0])
        .build();
    let collider = ColliderBuilder::cuboid(1.0, 1.0).build();
    let (handle, _) = physics.insert(body, collider);
    world.insert_resource(physics);

    let mut schedule = Schedule::default();
    schedule.add_systems(physics_step_system);
    for _ in 0..30 {
        schedule.run(&mut world);
    }
    let y_paused = world.resource::<PhysicsWorld>().bodies[handle].translation().y;
    assert_eq!(y_paused, 100.0, "no motion while paused");

    world.resource_mut::<PhysicsPause>().paused = false;
    for _ in 0..30 {
        schedule.run(&mut world);
    }
    let y_running = world.resource::<PhysicsWorld>().bodies[handle].translation().y;
    assert!(y_running < 100.0, "gravity applies once resumed");
}

#[test]
fn background_cadence_renders_a_fraction_of_ticks() {
    let mut scheduler = FrameScheduler::default();
    scheduler.handle_visibility_change(false);

    let mut rendered = 0;
    for i in 0..100 {
        // Deterministic sweep through [0, 1).
        let roll = i as f32 / 100.0;
        scheduler.begin_background_tick(roll, 0.1);
        if scheduler.render_this_frame {
            rendered += 1;
        }
    }
    assert_eq!(rendered, 10, "10% of a uniform sweep falls under the rate");
}
