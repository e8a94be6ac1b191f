use bevy_ecs::prelude::Component;

/// Rotation angle in degrees, applied when drawing the entity's sprite.
#[derive(Component, Clone, Debug, Copy, Default)]
pub struct Rotation {
    pub degrees: f32,
}

impl Rotation {
    pub fn from_radians(radians: f32) -> Self {
        Self {
            degrees: radians.to_degrees(),
        }
    }
}
