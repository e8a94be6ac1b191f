//! Per-frame mouse state and the grabbed prop.
//!
//! [`PointerState`] is refreshed by the input system each frame with the
//! cursor in all three coordinate spaces the app works in. [`Grabbed`]
//! holds the prop the user is dragging, if any.

use bevy_ecs::prelude::{Entity, Resource};
use raylib::prelude::Vector2;

/// Current mouse state in screen pixels, UI-plane units, and world units.
#[derive(Resource, Clone, Copy, Debug)]
pub struct PointerState {
    /// Cursor position in screen pixels.
    pub screen: Vector2,
    /// Cursor position in UI-plane units.
    pub plane: Vector2,
    /// Cursor position in world units (through the 2D camera).
    pub world: Vector2,
    /// Left button currently held.
    pub left_down: bool,
}

impl Default for PointerState {
    fn default() -> Self {
        Self {
            screen: Vector2 { x: 0.0, y: 0.0 },
            plane: Vector2 { x: 0.0, y: 0.0 },
            world: Vector2 { x: 0.0, y: 0.0 },
            left_down: false,
        }
    }
}

/// The prop currently being dragged, if any.
#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct Grabbed(pub Option<Entity>);
