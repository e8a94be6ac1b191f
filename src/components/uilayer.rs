//! Overlay layer component.
//!
//! Widgets on [`UiLayer::INTERACTIVE`] are rendered and hit-tested; widgets
//! on [`UiLayer::HIDDEN`] are neither. Layer flips are deferred to tween
//! completion so content that is animating offscreen still renders but a
//! fully hidden widget cannot swallow clicks.

use bevy_ecs::prelude::Component;

/// Overlay layer flag.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct UiLayer(pub u8);

impl UiLayer {
    /// Rendered and hit-tested.
    pub const INTERACTIVE: UiLayer = UiLayer(0);
    /// Excluded from rendering and hit-testing.
    pub const HIDDEN: UiLayer = UiLayer(1);

    pub fn is_interactive(&self) -> bool {
        self.0 == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interactive_layer() {
        assert!(UiLayer::INTERACTIVE.is_interactive());
        assert!(!UiLayer::HIDDEN.is_interactive());
    }
}
