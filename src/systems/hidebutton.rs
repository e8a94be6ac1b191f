//! Hide button choreography.
//!
//! A small square toggle in the top corner of the viewport. It follows the
//! label column's side: visible near the top-right edge while the column
//! is left, parked east offscreen otherwise. Its color reflects the
//! overlay's hidden state at render time.

use bevy_ecs::prelude::*;
use raylib::prelude::Color;

use crate::components::overlayposition::OverlayPosition;
use crate::components::uilayer::UiLayer;
use crate::resources::overlaylayout::OverlayLayout;
use crate::resources::tweens::{
    Easing, OnFinish, Tween, TweenGroup, TweenKey, TweenSchedule, TweenTrack,
};
use crate::resources::uicamera::{Direction, UiCamera};

/// Button quad size on the UI plane.
pub const HIDE_WIDTH: f32 = 1.0;
pub const HIDE_HEIGHT: f32 = 1.0;
/// Slide duration when following a side swap, seconds.
pub const SWAP_SECS: f32 = 0.25;
/// Edge inset from the viewport corner.
const CORNER_INSET: f32 = 2.5;

/// X position of the button for the given column side.
pub fn hide_button_x(ui: &UiCamera, column_left: bool) -> f32 {
    if column_left {
        (ui.screen_size().x / 2.0) - CORNER_INSET
    } else {
        ui.associated_position(Direction::East)
    }
}

/// Y position of the button.
pub fn hide_button_y(ui: &UiCamera) -> f32 {
    (ui.screen_size().y / 2.0) - CORNER_INSET
}

/// Button color for the given overlay state.
pub fn hide_button_color(overlay_hidden: bool) -> Color {
    if overlay_hidden {
        Color::new(0x68, 0x9f, 0x38, 255)
    } else {
        Color::new(0x77, 0x79, 0x81, 255)
    }
}

/// Follow the column to the given side.
///
/// Returning to the left edge makes the button interactive immediately;
/// leaving east defers the layer flip to completion.
pub fn swap_sides(
    column_left: bool,
    tweens: &mut TweenSchedule,
    layout: &OverlayLayout,
    ui: &UiCamera,
    positions: &mut Query<&mut OverlayPosition>,
    layers: &mut Query<&mut UiLayer>,
) {
    if column_left {
        if let Ok(mut layer) = layers.get_mut(layout.hide_button) {
            *layer = UiLayer::INTERACTIVE;
        }
    }
    let from = positions
        .get(layout.hide_button)
        .map(|p| p.pos.x)
        .unwrap_or(0.0);
    let on_finish = if column_left {
        OnFinish::None
    } else {
        OnFinish::SetLayer {
            layer: UiLayer::HIDDEN.0,
        }
    };
    tweens.start(
        TweenKey::HideButton,
        Tween::new(
            layout.hide_button,
            TweenTrack::X {
                from,
                to: hide_button_x(ui, column_left),
            },
            SWAP_SECS,
        )
        .with_easing(Easing::SineOut)
        .with_group(TweenGroup::Swap)
        .with_on_finish(on_finish),
    );
}

/// Ease the button back to its corner after a resize.
pub fn reposition(
    column_left: bool,
    tweens: &mut TweenSchedule,
    layout: &OverlayLayout,
    ui: &UiCamera,
    positions: &mut Query<&mut OverlayPosition>,
) {
    let from = positions
        .get(layout.hide_button)
        .map(|p| p.pos)
        .unwrap_or(raylib::prelude::Vector2 { x: 0.0, y: 0.0 });
    tweens.start(
        TweenKey::HideButton,
        Tween::new(
            layout.hide_button,
            TweenTrack::Position {
                from,
                to: raylib::prelude::Vector2 {
                    x: hide_button_x(ui, column_left),
                    y: hide_button_y(ui),
                },
            },
            SWAP_SECS,
        )
        .with_easing(Easing::ElasticOut)
        .with_group(TweenGroup::Swap),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-4;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn twenty_wide() -> UiCamera {
        UiCamera::new(90.0, 2.0, 5.0)
    }

    #[test]
    fn test_button_sits_inside_top_right_when_column_left() {
        let ui = twenty_wide();
        assert!(approx_eq(hide_button_x(&ui, true), 7.5));
        assert!(approx_eq(hide_button_y(&ui), 2.5));
    }

    #[test]
    fn test_button_parks_east_when_column_right() {
        let ui = twenty_wide();
        assert!(approx_eq(
            hide_button_x(&ui, false),
            ui.associated_position(Direction::East)
        ));
    }

    #[test]
    fn test_color_reflects_hidden_state() {
        assert_ne!(
            hide_button_color(true).g,
            hide_button_color(false).g
        );
    }
}
