//! Overlay composition.
//!
//! The functions here fan an operation out across the cooperating widgets
//! (label column, text panels, hide button) through the shared tween
//! schedule, and own the overlay-wide state flips. The resize system keeps
//! the layout consistent with the window size.

use bevy_ecs::prelude::*;
use log::info;

use crate::components::overlayposition::OverlayPosition;
use crate::components::panel::Panel;
use crate::components::swivel::Swivel;
use crate::components::uilayer::UiLayer;
use crate::resources::overlaylayout::OverlayLayout;
use crate::resources::overlaystate::OverlayState;
use crate::resources::screensize::ScreenSize;
use crate::resources::tweens::TweenSchedule;
use crate::resources::uicamera::UiCamera;
use crate::systems::{hidebutton, labelcolumn, textpanels};

/// Toggle the overlay hidden/shown and animate every widget accordingly.
///
/// The first hide arms the primary instruction sign; later hides arm the
/// secondary one.
pub fn trigger_overlay(
    state: &mut OverlayState,
    tweens: &mut TweenSchedule,
    layout: &OverlayLayout,
    ui: &UiCamera,
    positions: &mut Query<&mut OverlayPosition>,
    layers: &mut Query<&mut UiLayer>,
) {
    state.overlay_hidden = !state.overlay_hidden;
    let hidden = state.overlay_hidden;
    if hidden {
        if state.primary_trigger {
            state.secondary_trigger = true;
        }
        state.primary_trigger = true;
    }
    info!("Overlay {}", if hidden { "hidden" } else { "shown" });

    labelcolumn::trigger_overlay(hidden, tweens, layout, ui, positions, layers);
    textpanels::trigger_overlay(hidden, tweens, layout, ui, positions, layers);
}

/// Swap the label column to the other side, hide button following.
pub fn swap_column_sides(
    state: &mut OverlayState,
    tweens: &mut TweenSchedule,
    layout: &OverlayLayout,
    ui: &UiCamera,
    positions: &mut Query<&mut OverlayPosition>,
    swivels: &mut Query<&mut Swivel>,
    layers: &mut Query<&mut UiLayer>,
) {
    labelcolumn::swap_sides(state, tweens, layout, ui, positions, swivels);
    hidebutton::swap_sides(state.column_left, tweens, layout, ui, positions, layers);
}

/// Track window resizes: refresh the UI camera's aspect and reposition
/// every widget (offscreen variants while the overlay is hidden).
pub fn resize_system(
    screen: Res<ScreenSize>,
    mut ui: ResMut<UiCamera>,
    mut state: ResMut<OverlayState>,
    mut tweens: ResMut<TweenSchedule>,
    layout: Option<Res<OverlayLayout>>,
    mut positions: Query<&mut OverlayPosition>,
    mut layers: Query<&mut UiLayer>,
    mut panels: Query<&mut Panel>,
    mut previous: Local<Option<(i32, i32)>>,
) {
    let current = (screen.w, screen.h);
    if *previous == Some(current) {
        return;
    }
    let first_frame = previous.is_none();
    *previous = Some(current);
    if first_frame {
        return;
    }
    let Some(layout) = layout else {
        return;
    };

    ui.aspect = screen.w as f32 / screen.h.max(1) as f32;
    info!("Resized to {}x{}", screen.w, screen.h);

    // Panels track the viewport size.
    let width = textpanels::panel_width(&ui);
    let height = textpanels::panel_height(&ui);
    for (_, panel_entity) in layout.panels.iter() {
        if let Ok(mut panel) = panels.get_mut(*panel_entity) {
            panel.width = width;
            panel.height = height;
        }
    }

    if state.overlay_hidden {
        labelcolumn::offscreen_reposition(&layout, &ui, &mut positions);
        textpanels::offscreen_reposition(&state, &mut tweens, &layout, &ui, &mut positions);
    } else {
        labelcolumn::reposition(&state, &mut tweens, &layout, &ui, &mut positions);
        textpanels::reposition(
            &mut state,
            &mut tweens,
            &layout,
            &ui,
            &mut positions,
            &mut layers,
        );
        hidebutton::reposition(state.column_left, &mut tweens, &layout, &ui, &mut positions);
    }
}
