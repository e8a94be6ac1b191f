//! Shared tween schedule.
//!
//! All overlay and sign animations run through one registry advanced once
//! per frame by [`crate::systems::tween::tween_update_system`]. Tweens are
//! keyed by [`TweenKey`] so cooperating widgets can de-duplicate and
//! supersede each other's animations without tight coupling: starting a
//! tween under an occupied key stops the previous tween for that target
//! before the new end state is written.
//!
//! Side effects that must not happen mid-transition (layer flips, parking
//! a panel offscreen, clearing the column-swap guard) are described by
//! [`OnFinish`] and applied by the scheduler on the frame a tween
//! completes.

use bevy_ecs::prelude::{Entity, Resource};
use raylib::prelude::Vector2;
use rustc_hash::FxHashMap;

use crate::components::sign::SignRole;
use crate::components::uikind::Section;

/// Easing functions for smooth interpolation.
///
/// These functions transform a linear `t` value (0.0 to 1.0) to create
/// different acceleration/deceleration curves. The elastic curves
/// overshoot their endpoints.
#[derive(Copy, Clone, Debug)]
pub enum Easing {
    /// Constant speed (no easing).
    Linear,
    /// Starts slow, accelerates (quadratic).
    QuadIn,
    /// Starts fast, decelerates (quadratic).
    QuadOut,
    /// Slow start and end (quadratic).
    QuadInOut,
    /// Starts slow, accelerates (cubic).
    CubicIn,
    /// Starts fast, decelerates (cubic).
    CubicOut,
    /// Slow start and end (cubic).
    CubicInOut,
    /// Sinusoidal ease-in.
    SineIn,
    /// Sinusoidal ease-out.
    SineOut,
    /// Exponential ease-out.
    ExpoOut,
    /// Springy overshoot toward the end value.
    ElasticOut,
    /// Springy overshoot on both ends.
    ElasticInOut,
}

/// Identity of a tween in the shared schedule.
///
/// One key per animatable target: starting a new tween under the same key
/// supersedes the old one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TweenKey {
    /// The label column's position.
    Column,
    /// The label column's swivel.
    ColumnSwivel,
    /// The whole text-panel rack (overlay hide/show).
    TextRack,
    /// A single section's text panel.
    Panel(Section),
    /// A single label's hover swivel.
    Label(Section),
    /// The hide button's position.
    HideButton,
    /// An instruction sign's break animation.
    Sign(SignRole),
}

/// Coarse classification used by the animation guard.
///
/// `OverlayState::is_animating` treats any in-flight `HideTransition`
/// tween as blocking input, mirroring the hide-transition registry of the
/// overlay container.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TweenGroup {
    /// Overlay hide/show transitions; block input while in flight.
    HideTransition,
    /// Column side swaps (also guarded through the swap flag).
    Swap,
    /// Text panel focus/defocus movement.
    Focus,
    /// Label hover swivels.
    Hover,
    /// Everything else (sign breaks, ambient motion).
    Ambient,
}

/// The property a tween interpolates on its target entity.
#[derive(Clone, Copy, Debug)]
pub enum TweenTrack {
    /// Both components of an overlay position.
    Position { from: Vector2, to: Vector2 },
    /// Only the x coordinate.
    X { from: f32, to: f32 },
    /// Only the y coordinate.
    Y { from: f32, to: f32 },
    /// The y swivel angle, in radians.
    Swivel { from: f32, to: f32 },
    /// A world-space y coordinate (sign chain-break lift).
    WorldY { from: f32, to: f32 },
}

/// Deferred effect applied when a tween finishes.
#[derive(Clone, Copy, Debug)]
pub enum OnFinish {
    /// No completion effect.
    None,
    /// Clear `OverlayState::swapping_sides`.
    ClearColumnSwap,
    /// Move the target to the given UI layer.
    SetLayer { layer: u8 },
    /// Move the target to the given layer, then park it at `park`.
    SetLayerAndPark { layer: u8, park: Vector2 },
    /// Snap the target's swivel to an exact final value.
    SnapSwivel { value: f32 },
    /// Mark a sign's chain-break animation as finished.
    FinishSignBreak { role: SignRole },
}

/// A scheduled interpolation of one property of one entity.
#[derive(Clone, Copy, Debug)]
pub struct Tween {
    /// Entity whose component the tween mutates.
    pub target: Entity,
    /// Property and endpoints.
    pub track: TweenTrack,
    /// Duration in seconds.
    pub duration: f32,
    /// Time accumulated so far.
    pub elapsed: f32,
    /// Easing curve.
    pub easing: Easing,
    /// Guard classification.
    pub group: TweenGroup,
    /// Effect applied on completion.
    pub on_finish: OnFinish,
}

impl Tween {
    pub fn new(target: Entity, track: TweenTrack, duration: f32) -> Self {
        Self {
            target,
            track,
            duration: duration.max(f32::EPSILON),
            elapsed: 0.0,
            easing: Easing::Linear,
            group: TweenGroup::Ambient,
            on_finish: OnFinish::None,
        }
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn with_group(mut self, group: TweenGroup) -> Self {
        self.group = group;
        self
    }

    pub fn with_on_finish(mut self, on_finish: OnFinish) -> Self {
        self.on_finish = on_finish;
        self
    }
}

/// Global registry of in-flight tweens, advanced once per frame.
#[derive(Resource, Default)]
pub struct TweenSchedule {
    tweens: FxHashMap<TweenKey, Tween>,
}

impl TweenSchedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start (or supersede) the tween under `key`.
    ///
    /// Any previous tween for the same key is stopped; its completion
    /// effect does not run.
    pub fn start(&mut self, key: TweenKey, tween: Tween) {
        self.tweens.insert(key, tween);
    }

    /// Stop the tween under `key` without running its completion effect.
    pub fn stop(&mut self, key: TweenKey) -> Option<Tween> {
        self.tweens.remove(&key)
    }

    /// Whether a tween is in flight under `key`.
    pub fn contains(&self, key: TweenKey) -> bool {
        self.tweens.contains_key(&key)
    }

    /// Whether any in-flight tween belongs to `group`.
    pub fn any_in_group(&self, group: TweenGroup) -> bool {
        self.tweens.values().any(|t| t.group == group)
    }

    /// Number of in-flight tweens.
    pub fn len(&self) -> usize {
        self.tweens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tweens.is_empty()
    }

    /// Mutable access for the scheduler system.
    pub(crate) fn tweens_mut(&mut self) -> &mut FxHashMap<TweenKey, Tween> {
        &mut self.tweens
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy_ecs::prelude::World;

    fn dummy_entity() -> Entity {
        World::new().spawn_empty().id()
    }

    fn x_tween(target: Entity) -> Tween {
        Tween::new(target, TweenTrack::X { from: 0.0, to: 10.0 }, 1.0)
    }

    #[test]
    fn test_new_clamps_zero_duration() {
        let tw = Tween::new(
            dummy_entity(),
            TweenTrack::X { from: 0.0, to: 1.0 },
            0.0,
        );
        assert!(tw.duration > 0.0);
    }

    #[test]
    fn test_builder_chaining() {
        let tw = x_tween(dummy_entity())
            .with_easing(Easing::ElasticOut)
            .with_group(TweenGroup::HideTransition)
            .with_on_finish(OnFinish::SetLayer { layer: 1 });
        assert!(matches!(tw.easing, Easing::ElasticOut));
        assert_eq!(tw.group, TweenGroup::HideTransition);
        assert!(matches!(tw.on_finish, OnFinish::SetLayer { layer: 1 }));
    }

    #[test]
    fn test_start_replaces_previous_tween() {
        let target = dummy_entity();
        let mut schedule = TweenSchedule::new();
        schedule.start(TweenKey::Column, x_tween(target));
        schedule.start(
            TweenKey::Column,
            Tween::new(target, TweenTrack::X { from: 5.0, to: -5.0 }, 2.0),
        );
        assert_eq!(schedule.len(), 1);
        let tw = schedule.stop(TweenKey::Column).unwrap();
        assert_eq!(tw.duration, 2.0);
    }

    #[test]
    fn test_stop_removes_tween() {
        let mut schedule = TweenSchedule::new();
        schedule.start(TweenKey::HideButton, x_tween(dummy_entity()));
        assert!(schedule.contains(TweenKey::HideButton));
        assert!(schedule.stop(TweenKey::HideButton).is_some());
        assert!(!schedule.contains(TweenKey::HideButton));
        assert!(schedule.stop(TweenKey::HideButton).is_none());
    }

    #[test]
    fn test_any_in_group() {
        let mut schedule = TweenSchedule::new();
        assert!(!schedule.any_in_group(TweenGroup::HideTransition));
        schedule.start(
            TweenKey::TextRack,
            x_tween(dummy_entity()).with_group(TweenGroup::HideTransition),
        );
        assert!(schedule.any_in_group(TweenGroup::HideTransition));
        assert!(!schedule.any_in_group(TweenGroup::Hover));
    }
}
