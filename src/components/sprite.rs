use bevy_ecs::prelude::Component;

/// Sprite identified by a texture key and its size in world units.
///
/// The pivot is the sprite's center; the renderer stretches the texture to
/// the given world size, so flat placeholder textures can be tiny.
#[derive(Component, Clone, Debug)]
pub struct Sprite {
    pub tex_key: String,
    pub width: f32,
    pub height: f32,
}

impl Sprite {
    pub fn new(tex_key: impl Into<String>, width: f32, height: f32) -> Self {
        Self {
            tex_key: tex_key.into(),
            width,
            height,
        }
    }
}
