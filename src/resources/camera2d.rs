//! Shared 2D world camera.
//!
//! The scene lives in a y-up world coordinate frame (matching the physics
//! world); this camera converts between world units and screen pixels for
//! rendering and pointer picking. The overlay does not use this camera —
//! it projects through [`UiCamera`](crate::resources::uicamera::UiCamera).

use bevy_ecs::prelude::Resource;
use raylib::prelude::Vector2;

use crate::resources::screensize::ScreenSize;

/// World camera: a target point and a zoom (pixels per world unit).
#[derive(Resource, Clone, Copy, Debug)]
pub struct Camera2DRes {
    /// World point shown at the screen center.
    pub target: Vector2,
    /// Pixels per world unit.
    pub zoom: f32,
}

impl Camera2DRes {
    pub fn new(target: Vector2, zoom: f32) -> Self {
        Self { target, zoom }
    }

    /// World point -> screen pixels (y axis flips).
    pub fn world_to_screen(&self, world: Vector2, screen: &ScreenSize) -> Vector2 {
        Vector2 {
            x: screen.w as f32 * 0.5 + (world.x - self.target.x) * self.zoom,
            y: screen.h as f32 * 0.5 - (world.y - self.target.y) * self.zoom,
        }
    }

    /// Screen pixels -> world point.
    pub fn screen_to_world(&self, pixels: Vector2, screen: &ScreenSize) -> Vector2 {
        Vector2 {
            x: self.target.x + (pixels.x - screen.w as f32 * 0.5) / self.zoom,
            y: self.target.y - (pixels.y - screen.h as f32 * 0.5) / self.zoom,
        }
    }
}
