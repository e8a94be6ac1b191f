//! UI-plane geometry helpers.
//!
//! The overlay is laid out in the units of a modeled perspective camera's
//! view plane at a fixed distance. [`UiCamera`] derives the plane's extent
//! from the camera's field of view and aspect ratio, provides the
//! fully-offscreen coordinate for each compass direction, and converts
//! between plane units and screen pixels for rendering and hit-testing.

use bevy_ecs::prelude::Resource;
use raylib::prelude::Vector2;

use crate::resources::screensize::ScreenSize;

/// Compass directions used for offscreen parking and defocus animations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

/// Modeled perspective camera whose view plane hosts the overlay.
#[derive(Resource, Clone, Copy, Debug)]
pub struct UiCamera {
    /// Vertical field of view in degrees.
    pub fov_y_deg: f32,
    /// Width / height of the viewport.
    pub aspect: f32,
    /// Distance from the camera to the UI plane, in world units.
    pub ui_distance: f32,
}

impl UiCamera {
    pub fn new(fov_y_deg: f32, aspect: f32, ui_distance: f32) -> Self {
        Self {
            fov_y_deg,
            aspect,
            ui_distance,
        }
    }

    /// Extent of the viewport on the UI plane, in world units.
    pub fn screen_size(&self) -> Vector2 {
        let h = 2.0 * (self.fov_y_deg.to_radians() * 0.5).tan() * self.ui_distance;
        Vector2 {
            x: h * self.aspect,
            y: h,
        }
    }

    /// Coordinate fully offscreen in the given direction: one viewport
    /// extent past center. West/East are x values, North/South y values.
    pub fn associated_position(&self, direction: Direction) -> f32 {
        let size = self.screen_size();
        match direction {
            Direction::West => -size.x,
            Direction::East => size.x,
            Direction::North => size.y,
            Direction::South => -size.y,
        }
    }

    /// Convert a UI-plane point to screen pixels.
    ///
    /// Plane origin maps to the screen center; +y up on the plane maps to
    /// -y on the screen.
    pub fn plane_to_pixels(&self, plane: Vector2, screen: &ScreenSize) -> Vector2 {
        let size = self.screen_size();
        let sx = screen.w as f32;
        let sy = screen.h as f32;
        Vector2 {
            x: sx * 0.5 + plane.x / size.x * sx,
            y: sy * 0.5 - plane.y / size.y * sy,
        }
    }

    /// Convert a screen-pixel point to UI-plane units.
    pub fn pixels_to_plane(&self, pixels: Vector2, screen: &ScreenSize) -> Vector2 {
        let size = self.screen_size();
        let sx = (screen.w as f32).max(1.0);
        let sy = (screen.h as f32).max(1.0);
        Vector2 {
            x: (pixels.x - sx * 0.5) / sx * size.x,
            y: -(pixels.y - sy * 0.5) / sy * size.y,
        }
    }

    /// Pixels per UI-plane unit, horizontally.
    pub fn pixels_per_unit_x(&self, screen: &ScreenSize) -> f32 {
        screen.w as f32 / self.screen_size().x
    }

    /// Pixels per UI-plane unit, vertically.
    pub fn pixels_per_unit_y(&self, screen: &ScreenSize) -> f32 {
        screen.h as f32 / self.screen_size().y
    }
}
