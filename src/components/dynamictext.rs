use bevy_ecs::prelude::Component;

/// Text rendered with raylib's default font, either in world space (next
/// to a [`MapPosition`](super::mapposition::MapPosition)) or on the overlay
/// plane (next to an
/// [`OverlayPosition`](super::overlayposition::OverlayPosition)).
#[derive(Component, Clone, Debug)]
pub struct DynamicText {
    /// The text content to render.
    pub content: String,
    /// Font size in pixels.
    pub font_size: f32,
    /// Color of the text.
    pub color: raylib::prelude::Color,
}

impl DynamicText {
    /// Creates a new DynamicText component.
    pub fn new(content: impl Into<String>, font_size: f32, color: raylib::prelude::Color) -> Self {
        Self {
            content: content.into(),
            font_size,
            color,
        }
    }

    /// Updates the text content.
    #[allow(dead_code)]
    pub fn set_content(&mut self, new_content: impl Into<String>) {
        self.content = new_content.into();
    }
}
