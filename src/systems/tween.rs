//! Tween scheduler system.
//!
//! [`tween_update_system`] advances every tween in the shared
//! [`TweenSchedule`](crate::resources::tweens::TweenSchedule) once per
//! frame, writes the interpolated values into the target components, and
//! applies completion effects on the frame a tween finishes. Completion
//! effects are where deferred state lands: layer flips, offscreen parking,
//! the column-swap guard, and sign break completion.

use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use crate::components::mapposition::MapPosition;
use crate::components::overlayposition::OverlayPosition;
use crate::components::swivel::Swivel;
use crate::components::uilayer::UiLayer;
use crate::resources::overlaystate::OverlayState;
use crate::resources::signs::SignCoordinator;
use crate::resources::tweens::{Easing, OnFinish, Tween, TweenKey, TweenSchedule, TweenTrack};
use crate::resources::worldtime::WorldTime;

/// Apply an easing function to a normalized time value.
///
/// The input `t` is clamped to [0.0, 1.0] and transformed according to the
/// easing curve. Every curve maps 0 to 0 and 1 to 1; the elastic curves
/// overshoot in between.
pub(crate) fn ease(e: Easing, t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    match e {
        Easing::Linear => t,
        Easing::QuadIn => t * t,
        Easing::QuadOut => t * (2.0 - t),
        Easing::QuadInOut => {
            if t < 0.5 {
                2.0 * t * t
            } else {
                -1.0 + (4.0 - 2.0 * t) * t
            }
        }
        Easing::CubicIn => t * t * t,
        Easing::CubicOut => {
            let p = t - 1.0;
            p * p * p + 1.0
        }
        Easing::CubicInOut => {
            if t < 0.5 {
                4.0 * t * t * t
            } else {
                let p = 2.0 * t - 2.0;
                0.5 * p * p * p + 1.0
            }
        }
        Easing::SineIn => 1.0 - (t * std::f32::consts::FRAC_PI_2).cos(),
        Easing::SineOut => (t * std::f32::consts::FRAC_PI_2).sin(),
        Easing::ExpoOut => {
            if t >= 1.0 {
                1.0
            } else {
                1.0 - 2f32.powf(-10.0 * t)
            }
        }
        Easing::ElasticOut => {
            if t <= 0.0 {
                0.0
            } else if t >= 1.0 {
                1.0
            } else {
                let c4 = (2.0 * std::f32::consts::PI) / 3.0;
                2f32.powf(-10.0 * t) * ((t * 10.0 - 0.75) * c4).sin() + 1.0
            }
        }
        Easing::ElasticInOut => {
            if t <= 0.0 {
                0.0
            } else if t >= 1.0 {
                1.0
            } else {
                let c5 = (2.0 * std::f32::consts::PI) / 4.5;
                if t < 0.5 {
                    -(2f32.powf(20.0 * t - 10.0) * ((20.0 * t - 11.125) * c5).sin()) / 2.0
                } else {
                    2f32.powf(-20.0 * t + 10.0) * ((20.0 * t - 11.125) * c5).sin() / 2.0 + 1.0
                }
            }
        }
    }
}

/// Linearly interpolate between two 2D vectors.
pub(crate) fn lerp_v2(a: Vector2, b: Vector2, t: f32) -> Vector2 {
    Vector2 {
        x: a.x + (b.x - a.x) * t,
        y: a.y + (b.y - a.y) * t,
    }
}

/// Linearly interpolate between two floats.
pub(crate) fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Advance all scheduled tweens and apply completion effects.
///
/// Interpolated values are written every frame; a finished tween writes
/// its exact end value (every easing maps 1 to 1), is removed from the
/// schedule, and then its [`OnFinish`] effect runs.
pub fn tween_update_system(
    time: Res<WorldTime>,
    mut tweens: ResMut<TweenSchedule>,
    mut positions: Query<&mut OverlayPosition>,
    mut world_positions: Query<&mut MapPosition>,
    mut swivels: Query<&mut Swivel>,
    mut layers: Query<&mut UiLayer>,
    mut overlay: ResMut<OverlayState>,
    mut signs: ResMut<SignCoordinator>,
) {
    let dt = time.delta.max(0.0);
    let mut finished: Vec<(TweenKey, Tween)> = Vec::new();

    for (key, tween) in tweens.tweens_mut().iter_mut() {
        tween.elapsed += dt;
        let t = ease(tween.easing, tween.elapsed / tween.duration);
        match tween.track {
            TweenTrack::Position { from, to } => {
                if let Ok(mut position) = positions.get_mut(tween.target) {
                    position.pos = lerp_v2(from, to, t);
                }
            }
            TweenTrack::X { from, to } => {
                if let Ok(mut position) = positions.get_mut(tween.target) {
                    position.pos.x = lerp_f32(from, to, t);
                }
            }
            TweenTrack::Y { from, to } => {
                if let Ok(mut position) = positions.get_mut(tween.target) {
                    position.pos.y = lerp_f32(from, to, t);
                }
            }
            TweenTrack::Swivel { from, to } => {
                if let Ok(mut swivel) = swivels.get_mut(tween.target) {
                    swivel.y = lerp_f32(from, to, t);
                }
            }
            TweenTrack::WorldY { from, to } => {
                if let Ok(mut position) = world_positions.get_mut(tween.target) {
                    position.pos.y = lerp_f32(from, to, t);
                }
            }
        }
        if tween.elapsed >= tween.duration {
            finished.push((*key, *tween));
        }
    }

    for (key, tween) in finished {
        tweens.tweens_mut().remove(&key);
        match tween.on_finish {
            OnFinish::None => {}
            OnFinish::ClearColumnSwap => {
                overlay.swapping_sides = false;
            }
            OnFinish::SetLayer { layer } => {
                if let Ok(mut ui_layer) = layers.get_mut(tween.target) {
                    ui_layer.0 = layer;
                }
            }
            OnFinish::SetLayerAndPark { layer, park } => {
                if let Ok(mut ui_layer) = layers.get_mut(tween.target) {
                    ui_layer.0 = layer;
                }
                if let Ok(mut position) = positions.get_mut(tween.target) {
                    position.pos = park;
                }
            }
            OnFinish::SnapSwivel { value } => {
                if let Ok(mut swivel) = swivels.get_mut(tween.target) {
                    swivel.y = value;
                }
            }
            OnFinish::FinishSignBreak { role } => {
                signs.finish_break(role);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    const ALL_EASINGS: [Easing; 12] = [
        Easing::Linear,
        Easing::QuadIn,
        Easing::QuadOut,
        Easing::QuadInOut,
        Easing::CubicIn,
        Easing::CubicOut,
        Easing::CubicInOut,
        Easing::SineIn,
        Easing::SineOut,
        Easing::ExpoOut,
        Easing::ElasticOut,
        Easing::ElasticInOut,
    ];

    #[test]
    fn test_ease_all_types_at_zero() {
        for easing in ALL_EASINGS {
            assert!(
                approx_eq(ease(easing, 0.0), 0.0),
                "{:?} at t=0.0 should be 0.0",
                easing
            );
        }
    }

    #[test]
    fn test_ease_all_types_at_one() {
        for easing in ALL_EASINGS {
            assert!(
                approx_eq(ease(easing, 1.0), 1.0),
                "{:?} at t=1.0 should be 1.0",
                easing
            );
        }
    }

    #[test]
    fn test_ease_clamps_out_of_range_input() {
        for easing in ALL_EASINGS {
            assert!(
                approx_eq(ease(easing, -0.5), 0.0),
                "{:?} at t=-0.5 should clamp to 0.0",
                easing
            );
            assert!(
                approx_eq(ease(easing, 1.5), 1.0),
                "{:?} at t=1.5 should clamp to 1.0",
                easing
            );
        }
    }

    #[test]
    fn test_ease_linear_midpoint() {
        assert!(approx_eq(ease(Easing::Linear, 0.5), 0.5));
    }

    #[test]
    fn test_ease_quad_curves() {
        assert!(approx_eq(ease(Easing::QuadIn, 0.5), 0.25));
        assert!(approx_eq(ease(Easing::QuadOut, 0.5), 0.75));
        assert!(approx_eq(ease(Easing::QuadInOut, 0.25), 0.125));
        assert!(approx_eq(ease(Easing::QuadInOut, 0.75), 0.875));
    }

    #[test]
    fn test_ease_cubic_curves() {
        assert!(approx_eq(ease(Easing::CubicIn, 0.5), 0.125));
        assert!(approx_eq(ease(Easing::CubicOut, 0.5), 0.875));
        assert!(approx_eq(ease(Easing::CubicInOut, 0.25), 0.0625));
    }

    #[test]
    fn test_ease_sine_curves() {
        assert!(approx_eq(ease(Easing::SineIn, 0.5), 1.0 - (0.25f32 * std::f32::consts::PI).cos()));
        assert!(approx_eq(ease(Easing::SineOut, 0.5), (0.25f32 * std::f32::consts::PI).sin()));
    }

    #[test]
    fn test_ease_expo_out_near_one_quickly() {
        assert!(ease(Easing::ExpoOut, 0.5) > 0.95);
    }

    #[test]
    fn test_elastic_out_overshoots() {
        // Springs past the target somewhere in the second half.
        let overshoots = (50..100).any(|i| ease(Easing::ElasticOut, i as f32 / 100.0) > 1.0);
        assert!(overshoots);
    }

    #[test]
    fn test_monotonic_easings() {
        // The elastic curves intentionally overshoot; everything else is
        // monotonically increasing.
        let monotonic = [
            Easing::Linear,
            Easing::QuadIn,
            Easing::QuadOut,
            Easing::QuadInOut,
            Easing::CubicIn,
            Easing::CubicOut,
            Easing::CubicInOut,
            Easing::SineIn,
            Easing::SineOut,
            Easing::ExpoOut,
        ];
        for easing in monotonic {
            let mut prev = ease(easing, 0.0);
            for i in 1..=100 {
                let t = i as f32 / 100.0;
                let curr = ease(easing, t);
                assert!(
                    curr >= prev - EPSILON,
                    "{:?} should be monotonic at t={}",
                    easing,
                    t
                );
                prev = curr;
            }
        }
    }

    #[test]
    fn test_lerp_f32_basic() {
        assert!(approx_eq(lerp_f32(0.0, 10.0, 0.5), 5.0));
        assert!(approx_eq(lerp_f32(0.0, 10.0, 0.0), 0.0));
        assert!(approx_eq(lerp_f32(0.0, 10.0, 1.0), 10.0));
        assert!(approx_eq(lerp_f32(-10.0, 10.0, 0.25), -5.0));
    }

    #[test]
    fn test_lerp_v2_component_independence() {
        let a = Vector2 { x: 0.0, y: 100.0 };
        let b = Vector2 { x: 100.0, y: 0.0 };
        let result = lerp_v2(a, b, 0.25);
        assert!(approx_eq(result.x, 25.0));
        assert!(approx_eq(result.y, 75.0));
    }
}
