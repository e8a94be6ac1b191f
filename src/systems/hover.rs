//! Label hover handling.
//!
//! Hovering a label swivels it toward the viewer; hovering a different
//! label resets the previous one first. One in-flight swivel tween per
//! label, superseded cleanly through the shared schedule. Hover processing
//! is a no-op while the column is swapping sides.

use bevy_ecs::prelude::*;

use crate::components::overlayposition::OverlayPosition;
use crate::components::swivel::Swivel;
use crate::components::uilayer::UiLayer;
use crate::resources::overlaylayout::OverlayLayout;
use crate::resources::overlaystate::OverlayState;
use crate::resources::pointer::PointerState;
use crate::resources::tweens::{
    Easing, OnFinish, Tween, TweenGroup, TweenKey, TweenSchedule, TweenTrack,
};
use crate::systems::labelcolumn::{LABEL_HEIGHT, LABEL_WIDTH};
use crate::systems::pointer::point_in_rect;

/// Swivel magnitude of a hovered label, radians.
pub const FOCUS_SWIVEL: f32 = 0.5;
/// Hover swivel duration, seconds.
pub const HOVER_SECS: f32 = 0.4;

/// Swivel the previously hovered label back to rest.
///
/// Stops its in-flight tween first so the reset starts from the current
/// angle; the completion effect snaps the angle to exactly zero.
pub fn reset_hover(
    state: &mut OverlayState,
    tweens: &mut TweenSchedule,
    layout: &OverlayLayout,
    swivels: &mut Query<&mut Swivel>,
) {
    let Some(previous) = state.hovered_label.take() else {
        return;
    };
    let Some(label) = layout.label(previous) else {
        return;
    };
    tweens.stop(TweenKey::Label(previous));
    let from = swivels.get(label).map(|s| s.y).unwrap_or(0.0);
    tweens.start(
        TweenKey::Label(previous),
        Tween::new(
            label,
            TweenTrack::Swivel { from, to: 0.0 },
            HOVER_SECS,
        )
        .with_easing(Easing::ElasticOut)
        .with_group(TweenGroup::Hover)
        .with_on_finish(OnFinish::SnapSwivel { value: 0.0 }),
    );
}

/// Per-frame hover tracking over the label column.
pub fn hover_system(
    pointer: Res<PointerState>,
    layout: Option<Res<OverlayLayout>>,
    mut state: ResMut<OverlayState>,
    mut tweens: ResMut<TweenSchedule>,
    positions: Query<&OverlayPosition>,
    layers: Query<&UiLayer>,
    mut swivels: Query<&mut Swivel>,
) {
    let Some(layout) = layout else {
        return;
    };
    // Don't process hovers while swapping sides.
    if state.swapping_sides {
        return;
    }
    if !layers
        .get(layout.column)
        .map(|l| l.is_interactive())
        .unwrap_or(false)
    {
        return;
    }
    let Ok(column_pos) = positions.get(layout.column).map(|p| p.pos) else {
        return;
    };

    let mut hovered = None;
    for (section, label) in layout.labels.iter() {
        let Ok(offset) = positions.get(*label).map(|p| p.pos) else {
            continue;
        };
        let center = raylib::prelude::Vector2 {
            x: column_pos.x + offset.x,
            y: column_pos.y + offset.y,
        };
        if point_in_rect(pointer.plane, center, LABEL_WIDTH, LABEL_HEIGHT) {
            hovered = Some(*section);
            break;
        }
    }

    let Some(section) = hovered else {
        // The swivel persists until the next hover or a click resets it.
        return;
    };
    // An in-flight swivel for this label finishes first.
    if tweens.contains(TweenKey::Label(section)) {
        return;
    }
    if state.hovered_label == Some(section) {
        return;
    }

    reset_hover(&mut state, &mut tweens, &layout, &mut swivels);
    state.hovered_label = Some(section);

    let Some(label) = layout.label(section) else {
        return;
    };
    let target = if state.column_left {
        -FOCUS_SWIVEL
    } else {
        FOCUS_SWIVEL
    };
    let from = swivels.get(label).map(|s| s.y).unwrap_or(0.0);
    tweens.start(
        TweenKey::Label(section),
        Tween::new(
            label,
            TweenTrack::Swivel { from, to: target },
            HOVER_SECS,
        )
        .with_easing(Easing::SineIn)
        .with_group(TweenGroup::Hover)
        .with_on_finish(OnFinish::SnapSwivel { value: target }),
    );
}
