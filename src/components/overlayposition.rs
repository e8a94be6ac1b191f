//! Camera-plane position component for overlay widgets.
//!
//! Overlay widgets live on the UI plane in front of the camera and are laid
//! out in camera-plane units (origin at screen center, +y up), not pixels.
//! The [`UiCamera`](crate::resources::uicamera::UiCamera) resource converts
//! between the two when rendering and hit-testing.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Position of an overlay widget in camera-plane units.
#[derive(Component, Clone, Copy, Debug)]
pub struct OverlayPosition {
    /// Coordinates on the UI plane; origin at screen center, +y up.
    pub pos: Vector2,
}

impl Default for OverlayPosition {
    fn default() -> Self {
        Self {
            pos: Vector2 { x: 0.0, y: 0.0 },
        }
    }
}

impl OverlayPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vector2 { x, y },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_stores_coordinates() {
        let p = OverlayPosition::new(-6.0, 2.5);
        assert_eq!(p.pos.x, -6.0);
        assert_eq!(p.pos.y, 2.5);
    }

    #[test]
    fn test_default_is_origin() {
        let p = OverlayPosition::default();
        assert_eq!(p.pos.x, 0.0);
        assert_eq!(p.pos.y, 0.0);
    }
}
