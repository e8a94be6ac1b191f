use bevy_ecs::prelude::Component;

/// Y-axis swivel angle in radians for an overlay widget.
///
/// The label column swivels toward the viewer depending on which side of
/// the screen it sits on, and individual labels swivel on hover. Rendering
/// approximates the swivel by foreshortening the widget's width.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Swivel {
    pub y: f32,
}

impl Swivel {
    pub fn new(y: f32) -> Self {
        Self { y }
    }
}
