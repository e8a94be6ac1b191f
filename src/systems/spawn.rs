//! Spawn queue processing.
//!
//! Drains the [`SpawnQueue`] once per frame, turning requests into sprite
//! entities with rapier bodies. A failed request is logged and skipped —
//! the rest of the scene stays usable. Sign failures also roll the owning
//! sign slot back so a later cycle can retry.

use bevy_ecs::prelude::*;
use log::{debug, error};
use rapier2d::prelude::*;
use raylib::prelude::{Color, Vector2};

use crate::components::dynamictext::DynamicText;
use crate::components::mapposition::MapPosition;
use crate::components::physicsbody::PhysicsBody;
use crate::components::rotation::Rotation;
use crate::components::sign::SignRole;
use crate::components::sprite::Sprite;
use crate::components::uikind::{PropKind, UiKind};
use crate::components::zindex::ZIndex;
use crate::resources::appconfig::AppConfig;
use crate::resources::assetmanifest::{AssetId, AssetManifest};
use crate::resources::diagnostics::{Diagnostics, InitStage};
use crate::resources::physics::PhysicsWorld;
use crate::resources::signs::SignCoordinator;
use crate::resources::spawnqueue::{SpawnQueue, SpawnRequest};
use crate::resources::texturestore::TextureStore;

/// Sign quad size in world units.
pub const SIGN_WIDTH: f32 = 44.0;
pub const SIGN_HEIGHT: f32 = 26.0;

fn spawn_prop(
    commands: &mut Commands,
    physics: &mut PhysicsWorld,
    textures: &TextureStore,
    config: &AppConfig,
    kind: PropKind,
    position: Vector2,
    rotation: f32,
    enable_physics: bool,
) -> Result<Entity, String> {
    let tex_key = kind.tex_key();
    if !textures.contains(tex_key) {
        return Err(format!("missing texture '{}' for {:?}", tex_key, kind));
    }
    let (width, height) = kind.size();
    let z = if kind == PropKind::Room { -10 } else { 0 };
    let mut entity_commands = commands.spawn((
        Sprite::new(tex_key, width, height),
        MapPosition::new(position.x, position.y),
        Rotation::from_radians(rotation),
        ZIndex(z),
        UiKind::Interactable(kind),
    ));
    if enable_physics {
        let body = RigidBodyBuilder::dynamic()
            .translation(vector![position.x, position.y])
            .rotation(rotation)
            .can_sleep(config.allow_sleep)
            .build();
        let collider = ColliderBuilder::cuboid(width * 0.5, height * 0.5)
            .friction(0.8)
            .restitution(0.2)
            .build();
        let (body_handle, collider_handle) = physics.insert(body, collider);
        physics.apply_sleep_tuning(body_handle, config);
        entity_commands.insert(PhysicsBody {
            body: body_handle,
            collider: collider_handle,
        });
    }
    debug!("Spawned {:?} at ({}, {})", kind, position.x, position.y);
    Ok(entity_commands.id())
}

fn spawn_sign(
    commands: &mut Commands,
    physics: &mut PhysicsWorld,
    textures: &TextureStore,
    config: &AppConfig,
    role: SignRole,
    position: Vector2,
) -> Result<Entity, String> {
    if !textures.contains("sign") {
        return Err("missing texture 'sign'".to_string());
    }
    // Signs hang fixed until their chains break; the release system makes
    // them dynamic afterwards.
    let body = RigidBodyBuilder::fixed()
        .translation(vector![position.x, position.y])
        .can_sleep(config.allow_sleep)
        .build();
    let collider = ColliderBuilder::cuboid(SIGN_WIDTH * 0.5, SIGN_HEIGHT * 0.5)
        .friction(0.8)
        .build();
    let (body_handle, collider_handle) = physics.insert(body, collider);
    physics.apply_sleep_tuning(body_handle, config);
    let entity = commands
        .spawn((
            Sprite::new("sign", SIGN_WIDTH, SIGN_HEIGHT),
            MapPosition::new(position.x, position.y),
            Rotation::default(),
            ZIndex(5),
            UiKind::Sign(role),
            role,
            DynamicText::new(role.label(), 18.0, Color::RAYWHITE),
            PhysicsBody {
                body: body_handle,
                collider: collider_handle,
            },
        ))
        .id();
    debug!("Spawned {} sign at ({}, {})", role.label(), position.x, position.y);
    Ok(entity)
}

/// Drain the queue, spawning props and signs.
pub fn spawn_queue_system(
    mut commands: Commands,
    mut queue: ResMut<SpawnQueue>,
    mut physics: ResMut<PhysicsWorld>,
    mut signs: ResMut<SignCoordinator>,
    mut manifest: ResMut<AssetManifest>,
    mut diagnostics: ResMut<Diagnostics>,
    config: Res<AppConfig>,
    textures: Res<TextureStore>,
) {
    for request in queue.drain() {
        match request {
            SpawnRequest::Prop {
                kind,
                position,
                rotation,
                physics: enable_physics,
            } => match spawn_prop(
                &mut commands,
                &mut physics,
                &textures,
                &config,
                kind,
                position,
                rotation,
                enable_physics,
            ) {
                Ok(_) => manifest.add(AssetId::Prop(kind)),
                Err(message) => {
                    error!("Error spawning {:?}: {}", kind, message);
                    diagnostics.record_error(message);
                }
            },
            SpawnRequest::Sign { role, position } => match spawn_sign(
                &mut commands,
                &mut physics,
                &textures,
                &config,
                role,
                position,
            ) {
                Ok(entity) => {
                    signs.slot_mut(role).finish_spawn(entity);
                    manifest.add(AssetId::Sign(role));
                }
                Err(message) => {
                    error!("Error spawning {} sign: {}", role.label(), message);
                    diagnostics.record_error(message);
                    signs.slot_mut(role).fail_spawn(role);
                }
            },
        }
    }
}

/// Mark startup ready once the initial spawn queue has drained.
pub fn loading_progress_system(queue: Res<SpawnQueue>, mut diagnostics: ResMut<Diagnostics>) {
    if diagnostics.stage == InitStage::AssetsLoading && queue.is_empty() {
        diagnostics.set_stage(InitStage::Ready);
    }
}
