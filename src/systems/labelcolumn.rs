//! Label column choreography.
//!
//! The column of section labels lives on the UI plane and swaps between
//! the left and right halves of the viewport. All motion goes through the
//! shared [`TweenSchedule`]; layer flips are deferred to tween completion.
//!
//! Label positions are stored relative to the column root; the renderer
//! and hit-testing compose them with the column's position.

use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use crate::components::overlayposition::OverlayPosition;
use crate::components::swivel::Swivel;
use crate::components::uilayer::UiLayer;
use crate::resources::overlaylayout::OverlayLayout;
use crate::resources::overlaystate::OverlayState;
use crate::resources::tweens::{
    Easing, OnFinish, Tween, TweenGroup, TweenKey, TweenSchedule, TweenTrack,
};
use crate::resources::uicamera::{Direction, UiCamera};

/// Label quad size on the UI plane.
pub const LABEL_WIDTH: f32 = 5.0;
pub const LABEL_HEIGHT: f32 = 3.0;
/// Vertical distance between stacked labels.
pub const LABEL_SPACING: f32 = 3.0;
/// Column swivel magnitude, radians.
pub const COLUMN_SWIVEL: f32 = 1.0;
/// Side-swap pan duration, seconds.
pub const PAN_SECS: f32 = 0.8;
/// Side-swap swivel duration, seconds.
pub const ROTATE_SECS: f32 = 0.6;
/// Overlay hide/show duration, seconds.
pub const OVERLAY_TOGGLE_SECS: f32 = 0.68;

/// X position of the column for the given side.
pub fn column_x_position(ui: &UiCamera, column_left: bool) -> f32 {
    (if column_left { -1.0 } else { 1.0 }) * (ui.screen_size().x / 2.0) * 0.6
}

/// Y position of the column for the given side.
pub fn column_y_position(ui: &UiCamera, column_left: bool) -> f32 {
    (if column_left { -1.0 } else { -0.6 }) * (ui.screen_size().y / 2.0) * 0.6
}

/// Swivel of the column for the given side.
pub fn column_swivel(column_left: bool) -> f32 {
    if column_left {
        COLUMN_SWIVEL
    } else {
        -COLUMN_SWIVEL
    }
}

/// Relative position of the i-th label within the column.
pub fn label_offset(index: usize) -> Vector2 {
    Vector2 {
        x: 0.0,
        y: index as f32 * LABEL_SPACING,
    }
}

/// Move the column across the screen and swivel it toward the viewer.
///
/// Flips `column_left`, raises `swapping_sides`, and schedules the pan and
/// swivel tweens. The pan tween's completion clears the swap guard.
pub fn swap_sides(
    state: &mut OverlayState,
    tweens: &mut TweenSchedule,
    layout: &OverlayLayout,
    ui: &UiCamera,
    positions: &mut Query<&mut OverlayPosition>,
    swivels: &mut Query<&mut Swivel>,
) {
    state.column_left = !state.column_left;
    state.swapping_sides = true;

    let target = Vector2 {
        x: column_x_position(ui, state.column_left),
        y: column_y_position(ui, state.column_left),
    };
    let from = positions
        .get(layout.column)
        .map(|p| p.pos)
        .unwrap_or(Vector2 { x: 0.0, y: 0.0 });
    tweens.start(
        TweenKey::Column,
        Tween::new(
            layout.column,
            TweenTrack::Position { from, to: target },
            PAN_SECS,
        )
        .with_easing(Easing::ElasticOut)
        .with_group(TweenGroup::Swap)
        .with_on_finish(OnFinish::ClearColumnSwap),
    );

    let swivel_from = swivels.get(layout.column).map(|s| s.y).unwrap_or(0.0);
    tweens.start(
        TweenKey::ColumnSwivel,
        Tween::new(
            layout.column,
            TweenTrack::Swivel {
                from: swivel_from,
                to: column_swivel(state.column_left),
            },
            ROTATE_SECS,
        )
        .with_easing(Easing::ExpoOut)
        .with_group(TweenGroup::Swap),
    );
}

/// Slide the column offscreen west (hiding) or back to its place (showing).
///
/// When showing, the column becomes interactive immediately; when hiding,
/// the layer flip waits for the tween to complete so the column cannot
/// swallow clicks once parked.
pub fn trigger_overlay(
    hidden: bool,
    tweens: &mut TweenSchedule,
    layout: &OverlayLayout,
    ui: &UiCamera,
    positions: &mut Query<&mut OverlayPosition>,
    layers: &mut Query<&mut UiLayer>,
) {
    if !hidden {
        if let Ok(mut layer) = layers.get_mut(layout.column) {
            *layer = UiLayer::INTERACTIVE;
        }
    }
    let target_x = if hidden {
        ui.associated_position(Direction::West)
    } else {
        column_x_position(ui, true)
    };
    let from = positions
        .get(layout.column)
        .map(|p| p.pos.x)
        .unwrap_or(0.0);
    let on_finish = if hidden {
        OnFinish::SetLayer {
            layer: UiLayer::HIDDEN.0,
        }
    } else {
        OnFinish::None
    };
    tweens.start(
        TweenKey::Column,
        Tween::new(
            layout.column,
            TweenTrack::X {
                from,
                to: target_x,
            },
            OVERLAY_TOGGLE_SECS,
        )
        .with_easing(Easing::ElasticInOut)
        .with_group(TweenGroup::HideTransition)
        .with_on_finish(on_finish),
    );
}

/// Ease the column back to its computed position after a resize.
pub fn reposition(
    state: &OverlayState,
    tweens: &mut TweenSchedule,
    layout: &OverlayLayout,
    ui: &UiCamera,
    positions: &mut Query<&mut OverlayPosition>,
) {
    let target = Vector2 {
        x: column_x_position(ui, state.column_left),
        y: column_y_position(ui, state.column_left),
    };
    let from = positions
        .get(layout.column)
        .map(|p| p.pos)
        .unwrap_or(Vector2 { x: 0.0, y: 0.0 });
    tweens.start(
        TweenKey::Column,
        Tween::new(
            layout.column,
            TweenTrack::Position { from, to: target },
            PAN_SECS,
        )
        .with_easing(Easing::ElasticOut)
        .with_group(TweenGroup::Swap),
    );
}

/// Snap the column to the west offscreen position without animating.
pub fn offscreen_reposition(
    layout: &OverlayLayout,
    ui: &UiCamera,
    positions: &mut Query<&mut OverlayPosition>,
) {
    if let Ok(mut position) = positions.get_mut(layout.column) {
        position.pos.x = ui.associated_position(Direction::West);
    }
}
