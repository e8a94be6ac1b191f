//! Text-focus physics pause synchronization.
//!
//! Focusing a text panel pauses the physics world so the scene holds still
//! behind the text; defocusing resumes it. The attribution bit on
//! [`PhysicsPause`] ensures this system only resumes a pause it created —
//! physics paused for any other reason stays paused.

use bevy_ecs::prelude::*;

use crate::resources::overlaystate::OverlayState;
use crate::resources::physics::PhysicsPause;

/// Edge-detect text focus and pause/resume physics accordingly.
pub fn focus_pause_system(
    state: Res<OverlayState>,
    mut pause: ResMut<PhysicsPause>,
    mut previous_active: Local<bool>,
) {
    let text_active = state.is_text_active();
    if !*previous_active && text_active && !pause.paused {
        pause.paused = true;
        pause.paused_by_focus = true;
    } else if *previous_active && !text_active && pause.paused && pause.paused_by_focus {
        pause.paused = false;
        pause.paused_by_focus = false;
    }
    *previous_active = text_active;
}
