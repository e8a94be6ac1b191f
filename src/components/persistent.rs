//! Persistent entity marker component.
//!
//! Entities with the [`Persistent`] component will not be despawned when
//! the scene is torn down (e.g. a diagnostic retry). Use this for
//! observers and any entity that must survive scene transitions.

use bevy_ecs::prelude::Component;

/// Tag component used to mark entities that should persist across scene changes.
#[derive(Component, Clone, Debug)]
pub struct Persistent;
