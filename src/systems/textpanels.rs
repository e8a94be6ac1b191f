//! Text panel choreography.
//!
//! One sliding panel per portfolio section. Panels park offscreen west of
//! the viewport and slide in when focused; defocusing animates the panel
//! off in a compass direction, then parks it once the motion completes.
//! Panel positions are stored relative to the panel rack, which itself
//! slides south when the overlay hides.
//!
//! Invariant: at most one panel is focused at a time. Focusing a new
//! panel defocuses the old one first.

use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use crate::components::overlayposition::OverlayPosition;
use crate::components::uikind::Section;
use crate::components::uilayer::UiLayer;
use crate::resources::overlaylayout::OverlayLayout;
use crate::resources::overlaystate::OverlayState;
use crate::resources::tweens::{
    Easing, OnFinish, Tween, TweenGroup, TweenKey, TweenSchedule, TweenTrack,
};
use crate::resources::uicamera::{Direction, UiCamera};

/// Focus slide duration, seconds.
pub const FOCUS_SECS: f32 = 0.285;
/// Defocus slide duration, seconds (a fifth of the side-swap pan).
pub const DEFOCUS_SECS: f32 = 0.16;
/// Overlay hide/show duration, seconds.
pub const OVERLAY_TOGGLE_SECS: f32 = 0.68;

/// X position of the focused panel.
pub fn focused_text_x(ui: &UiCamera) -> f32 {
    -(ui.screen_size().x / 2.0) * 0.36
}

/// Y position of every panel, relative to the rack.
pub fn text_y(ui: &UiCamera) -> f32 {
    -(ui.screen_size().y * 0.05)
}

/// Panel width, clamped so extreme aspect ratios stay readable.
pub fn panel_width(ui: &UiCamera) -> f32 {
    (ui.screen_size().x * 0.5).clamp(12.0, 18.0)
}

/// Panel height.
pub fn panel_height(ui: &UiCamera) -> f32 {
    ui.screen_size().y * 0.6
}

/// Standard offscreen parking spot for unfocused panels.
pub fn park_position(ui: &UiCamera) -> Vector2 {
    Vector2 {
        x: 2.0 * ui.associated_position(Direction::West),
        y: text_y(ui),
    }
}

/// Bring a section's panel into focus.
///
/// Only meaningful while the column is on the right side; with the column
/// on the left this defocuses west instead (the panel has nowhere to go).
/// A previously focused panel is sent off south before the new one slides
/// in; the two motions overlap but the focus bookkeeping switches
/// immediately, so no frame observes two focused panels.
pub fn focus(
    section: Section,
    state: &mut OverlayState,
    tweens: &mut TweenSchedule,
    layout: &OverlayLayout,
    ui: &UiCamera,
    positions: &mut Query<&mut OverlayPosition>,
    layers: &mut Query<&mut UiLayer>,
) {
    if state.column_left {
        lose_focus(Direction::West, state, tweens, layout, ui, positions);
        return;
    }

    if state.focused_section != Some(section) {
        if state.focused_section.is_some() {
            lose_focus(Direction::South, state, tweens, layout, ui, positions);
        }
        state.focused_section = Some(section);
    }

    let Some(panel) = layout.panel(section) else {
        return;
    };
    if let Ok(mut layer) = layers.get_mut(panel) {
        *layer = UiLayer::INTERACTIVE;
    }
    let from = match positions.get_mut(panel) {
        Ok(mut position) => {
            // A panel mid-defocus may have drifted; restore its row before
            // sliding in.
            position.pos.y = text_y(ui);
            position.pos.x
        }
        Err(_) => return,
    };
    tweens.start(
        TweenKey::Panel(section),
        Tween::new(
            panel,
            TweenTrack::X {
                from,
                to: focused_text_x(ui),
            },
            FOCUS_SECS,
        )
        .with_easing(Easing::SineOut)
        .with_group(TweenGroup::Focus),
    );
}

/// Animate the focused panel offscreen in `direction` and clear focus.
///
/// The panel's layer flip and final parking are deferred to the tween's
/// completion; the focus bookkeeping clears immediately.
pub fn lose_focus(
    direction: Direction,
    state: &mut OverlayState,
    tweens: &mut TweenSchedule,
    layout: &OverlayLayout,
    ui: &UiCamera,
    positions: &mut Query<&mut OverlayPosition>,
) {
    let Some(section) = state.focused_section.take() else {
        return;
    };
    let Some(panel) = layout.panel(section) else {
        return;
    };
    let Ok(current) = positions.get(panel).map(|p| p.pos) else {
        return;
    };

    let park = park_position(ui);
    let on_finish = OnFinish::SetLayerAndPark {
        layer: UiLayer::HIDDEN.0,
        park,
    };
    let offscreen = ui.associated_position(direction);
    let track = match direction {
        Direction::North | Direction::South => TweenTrack::Y {
            from: current.y,
            to: offscreen,
        },
        Direction::East | Direction::West => TweenTrack::X {
            from: current.x,
            to: offscreen,
        },
    };
    tweens.start(
        TweenKey::Panel(section),
        Tween::new(panel, track, DEFOCUS_SECS)
            .with_easing(Easing::SineOut)
            .with_group(TweenGroup::Focus)
            .with_on_finish(on_finish),
    );
}

/// Slide the panel rack south (hiding) or back (showing).
pub fn trigger_overlay(
    hidden: bool,
    tweens: &mut TweenSchedule,
    layout: &OverlayLayout,
    ui: &UiCamera,
    positions: &mut Query<&mut OverlayPosition>,
    layers: &mut Query<&mut UiLayer>,
) {
    if !hidden {
        if let Ok(mut layer) = layers.get_mut(layout.text_rack) {
            *layer = UiLayer::INTERACTIVE;
        }
    }
    let target_y = if hidden {
        ui.associated_position(Direction::South)
    } else {
        0.0
    };
    let from = positions
        .get(layout.text_rack)
        .map(|p| p.pos.y)
        .unwrap_or(0.0);
    let on_finish = if hidden {
        OnFinish::SetLayer {
            layer: UiLayer::HIDDEN.0,
        }
    } else {
        OnFinish::None
    };
    tweens.start(
        TweenKey::TextRack,
        Tween::new(
            layout.text_rack,
            TweenTrack::Y {
                from,
                to: target_y,
            },
            OVERLAY_TOGGLE_SECS,
        )
        .with_easing(Easing::ElasticInOut)
        .with_group(TweenGroup::HideTransition)
        .with_on_finish(on_finish),
    );
}

/// After a resize: re-focus the focused panel and park the rest.
pub fn reposition(
    state: &mut OverlayState,
    tweens: &mut TweenSchedule,
    layout: &OverlayLayout,
    ui: &UiCamera,
    positions: &mut Query<&mut OverlayPosition>,
    layers: &mut Query<&mut UiLayer>,
) {
    if let Some(section) = state.focused_section {
        focus(section, state, tweens, layout, ui, positions, layers);
    }
    let park = park_position(ui);
    for (section, panel) in layout.panels.iter() {
        if state.focused_section == Some(*section) {
            continue;
        }
        if let Ok(mut position) = positions.get_mut(*panel) {
            position.pos = park;
        }
    }
}

/// Ease every panel toward its offscreen spot (focused panel keeps its
/// place) while the overlay is hidden during a resize.
pub fn offscreen_reposition(
    state: &OverlayState,
    tweens: &mut TweenSchedule,
    layout: &OverlayLayout,
    ui: &UiCamera,
    positions: &mut Query<&mut OverlayPosition>,
) {
    let y = text_y(ui);
    for (section, panel) in layout.panels.iter() {
        let Ok(current) = positions.get(*panel).map(|p| p.pos) else {
            continue;
        };
        let target_x = if state.focused_section == Some(*section) {
            focused_text_x(ui)
        } else {
            -(panel_width(ui) * 3.0)
        };
        tweens.start(
            TweenKey::Panel(*section),
            Tween::new(
                *panel,
                TweenTrack::Position {
                    from: current,
                    to: Vector2 { x: target_x, y },
                },
                FOCUS_SECS,
            )
            .with_easing(Easing::ElasticOut)
            .with_group(TweenGroup::Focus),
        );
    }
}
