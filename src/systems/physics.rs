//! Physics systems: world stepping, pose sync, grabbed-prop dragging.
//!
//! Per-frame order is load-bearing: the step runs before the background
//! coordinator, and the pose sync runs after it, so sprites always show
//! the positions the physics world produced this frame.

use bevy_ecs::prelude::*;
use rapier2d::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::physicsbody::PhysicsBody;
use crate::components::rotation::Rotation;
use crate::resources::physics::{PhysicsPause, PhysicsWorld};
use crate::resources::pointer::{Grabbed, PointerState};
use crate::resources::worldtime::WorldTime;

/// How hard a grabbed prop is pulled toward the cursor.
const GRAB_PULL: f32 = 10.0;

/// Step the physics world unless paused.
pub fn physics_step_system(
    time: Res<WorldTime>,
    pause: Res<PhysicsPause>,
    mut physics: ResMut<PhysicsWorld>,
) {
    if pause.paused {
        return;
    }
    physics.step(time.delta.max(0.0));
}

/// Copy body poses into sprite transforms.
///
/// While physics is paused only the grabbed prop keeps syncing, so
/// dragging stays responsive behind a focused text panel. Fixed bodies are
/// skipped; their entities may be animated directly (sign chain lifts).
pub fn physics_pose_sync_system(
    pause: Res<PhysicsPause>,
    grabbed: Res<Grabbed>,
    physics: Res<PhysicsWorld>,
    mut query: Query<(Entity, &PhysicsBody, &mut MapPosition, &mut Rotation)>,
) {
    for (entity, physics_body, mut position, mut rotation) in query.iter_mut() {
        if pause.paused && grabbed.0 != Some(entity) {
            continue;
        }
        let Some(body) = physics.bodies.get(physics_body.body) else {
            continue;
        };
        if body.is_fixed() {
            continue;
        }
        let translation = body.translation();
        position.pos.x = translation.x;
        position.pos.y = translation.y;
        rotation.degrees = body.rotation().angle().to_degrees();
    }
}

/// Pull the grabbed prop toward the cursor.
pub fn grabbed_translate_system(
    grabbed: Res<Grabbed>,
    pointer: Res<PointerState>,
    mut physics: ResMut<PhysicsWorld>,
    bodies: Query<&PhysicsBody>,
) {
    let Some(entity) = grabbed.0 else {
        return;
    };
    let Ok(physics_body) = bodies.get(entity) else {
        return;
    };
    let Some(body) = physics.bodies.get_mut(physics_body.body) else {
        return;
    };
    let target = vector![pointer.world.x, pointer.world.y];
    let delta = target - body.translation();
    body.set_linvel(delta * GRAB_PULL, true);
    body.set_angvel(0.0, true);
}
