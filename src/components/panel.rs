use bevy_ecs::prelude::Component;
use raylib::prelude::Color;

/// Flat colored quad for overlay backdrops and buttons, sized in
/// camera-plane units and centered on the widget's
/// [`OverlayPosition`](super::overlayposition::OverlayPosition).
#[derive(Component, Clone, Copy, Debug)]
pub struct Panel {
    pub width: f32,
    pub height: f32,
    pub color: Color,
}

impl Panel {
    pub fn new(width: f32, height: f32, color: Color) -> Self {
        Self {
            width,
            height,
            color,
        }
    }
}
