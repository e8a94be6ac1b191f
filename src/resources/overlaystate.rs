//! Overlay state resource.
//!
//! Tracks which side of the screen the label column sits on, whether the
//! overlay is hidden, which section's text panel has focus, and whether a
//! side swap is in flight. The `is_animating` guard combines the swap flag
//! with the shared schedule's hide-transition group; all pointer input is
//! a no-op while it reports true.

use bevy_ecs::prelude::Resource;

use crate::components::uikind::Section;
use crate::resources::tweens::{TweenGroup, TweenSchedule};

/// Focus/side/visibility state of the overlay.
#[derive(Resource, Clone, Copy, Debug)]
pub struct OverlayState {
    /// Whether the label column sits on the left half of the viewport.
    pub column_left: bool,
    /// Whether the overlay is hidden (parked offscreen).
    pub overlay_hidden: bool,
    /// Section whose text panel currently has focus, if any.
    ///
    /// Invariant: at most one panel is focused at a time.
    pub focused_section: Option<Section>,
    /// Whether a column side-swap animation is in flight.
    pub swapping_sides: bool,
    /// Label currently swiveled toward the viewer, if any.
    pub hovered_label: Option<Section>,
    /// Arms the primary instruction sign spawn.
    pub primary_trigger: bool,
    /// Arms the secondary instruction sign spawn.
    pub secondary_trigger: bool,
}

impl Default for OverlayState {
    fn default() -> Self {
        Self {
            column_left: true,
            overlay_hidden: false,
            focused_section: None,
            swapping_sides: false,
            hovered_label: None,
            primary_trigger: false,
            secondary_trigger: false,
        }
    }
}

impl OverlayState {
    /// Whether an overlay transition is in flight.
    ///
    /// Swap and hide/show transitions are mutually exclusive with new
    /// pointer input while this is true.
    pub fn is_animating(&self, tweens: &TweenSchedule) -> bool {
        self.swapping_sides || tweens.any_in_group(TweenGroup::HideTransition)
    }

    /// Whether a text panel currently has focus.
    pub fn is_text_active(&self) -> bool {
        self.focused_section.is_some()
    }
}
