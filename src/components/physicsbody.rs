use bevy_ecs::prelude::Component;
use rapier2d::prelude::{ColliderHandle, RigidBodyHandle};

/// Handles linking an entity to its rapier rigid body and collider.
///
/// The pose sync system copies the body's translation/rotation into the
/// entity's [`MapPosition`](super::mapposition::MapPosition) and
/// [`Rotation`](super::rotation::Rotation) after every physics step.
#[derive(Component, Clone, Copy, Debug)]
pub struct PhysicsBody {
    pub body: RigidBodyHandle,
    pub collider: ColliderHandle,
}
