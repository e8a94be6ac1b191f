//! Background coordinator: instruction-sign lifecycle and body release.
//!
//! Runs the per-frame decision ladder over the sign state machines:
//! spawn the primary sign once it is armed, break its chains when the
//! overlay is visible, spawn the secondary sign when the user starts
//! interacting, break its chains in turn. All lifecycle bookkeeping lives
//! in [`SignCoordinator`]; this system only reads the overlay/grab state
//! and turns transitions into spawn requests and break tweens.

use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;
use rapier2d::prelude::RigidBodyType;

use crate::components::mapposition::MapPosition;
use crate::components::physicsbody::PhysicsBody;
use crate::components::sign::SignRole;
use crate::resources::camera2d::Camera2DRes;
use crate::resources::overlaystate::OverlayState;
use crate::resources::physics::PhysicsWorld;
use crate::resources::pointer::Grabbed;
use crate::resources::signs::{BreakStart, SignCoordinator};
use crate::resources::spawnqueue::{SpawnQueue, SpawnRequest};
use crate::resources::tweens::{
    Easing, OnFinish, Tween, TweenGroup, TweenKey, TweenSchedule, TweenTrack,
};

/// Where the primary sign hangs, world units.
const PRIMARY_SIGN_POS: Vector2 = Vector2 { x: 0.0, y: 60.0 };
/// Secondary sign offset above the camera target, world units.
const SECONDARY_SIGN_LIFT: f32 = 35.0;
/// Chain-break lift height, world units.
const CHAIN_LIFT: f32 = 4.0;
/// Chain-break animation duration, seconds.
const BREAK_SECS: f32 = 0.6;

fn start_break_tween(
    role: SignRole,
    entity: Entity,
    tweens: &mut TweenSchedule,
    world_positions: &Query<&MapPosition>,
) {
    let from = world_positions.get(entity).map(|p| p.pos.y).unwrap_or(0.0);
    tweens.start(
        TweenKey::Sign(role),
        Tween::new(
            entity,
            TweenTrack::WorldY {
                from,
                to: from + CHAIN_LIFT,
            },
            BREAK_SECS,
        )
        .with_easing(Easing::SineIn)
        .with_group(TweenGroup::Ambient)
        .with_on_finish(OnFinish::FinishSignBreak { role }),
    );
}

/// The sign decision ladder, mirroring the overlay and grab state.
pub fn background_update_system(
    state: Res<OverlayState>,
    grabbed: Res<Grabbed>,
    camera: Res<Camera2DRes>,
    mut signs: ResMut<SignCoordinator>,
    mut queue: ResMut<SpawnQueue>,
    mut tweens: ResMut<TweenSchedule>,
    world_positions: Query<&MapPosition>,
) {
    if state.primary_trigger && !signs.primary.is_spawned() {
        if signs.primary.begin_spawn(SignRole::Primary) {
            queue.push(SpawnRequest::Sign {
                role: SignRole::Primary,
                position: PRIMARY_SIGN_POS,
            });
        }
    } else if !state.overlay_hidden && signs.primary.is_intact() {
        if let Some(entity) = signs.primary.entity {
            if signs.primary.begin_break(SignRole::Primary) == BreakStart::Started {
                start_break_tween(SignRole::Primary, entity, &mut tweens, &world_positions);
            }
        }
    } else if !signs.secondary.is_spawning()
        && !signs.secondary.is_spawned()
        && (grabbed.0.is_some() || state.secondary_trigger)
    {
        // The primary sign's chains go first so both signs don't hang at
        // once.
        if signs.primary.is_intact() {
            if let Some(entity) = signs.primary.entity {
                if signs.primary.begin_break(SignRole::Primary) == BreakStart::Started {
                    start_break_tween(SignRole::Primary, entity, &mut tweens, &world_positions);
                }
            }
        }
        if signs.secondary.begin_spawn(SignRole::Secondary) {
            queue.push(SpawnRequest::Sign {
                role: SignRole::Secondary,
                position: Vector2 {
                    x: camera.target.x,
                    y: camera.target.y + SECONDARY_SIGN_LIFT,
                },
            });
        }
    } else if signs.secondary.is_spawned() && !state.overlay_hidden {
        if let Some(entity) = signs.secondary.entity {
            if signs.secondary.begin_break(SignRole::Secondary) == BreakStart::Started {
                start_break_tween(SignRole::Secondary, entity, &mut tweens, &world_positions);
            }
        }
    }
}

/// Turn signs whose break animation completed into dynamic bodies.
pub fn sign_release_system(
    mut signs: ResMut<SignCoordinator>,
    mut physics: ResMut<PhysicsWorld>,
    bodies: Query<&PhysicsBody>,
) {
    if signs.pending_release.is_empty() {
        return;
    }
    let released: Vec<Entity> = signs.pending_release.drain(..).collect();
    for entity in released {
        let Ok(physics_body) = bodies.get(entity) else {
            continue;
        };
        if let Some(body) = physics.bodies.get_mut(physics_body.body) {
            body.set_body_type(RigidBodyType::Dynamic, true);
        }
    }
}
