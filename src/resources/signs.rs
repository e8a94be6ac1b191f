//! Instruction-sign lifecycle state machines.
//!
//! Each sign advances through an explicit phase machine with atomic
//! transition checks; there are no boolean re-entrancy flags to race.
//! Transitions that arrive in the wrong phase are logged no-ops, never
//! errors: a second concurrent spawn request or a chain break on an
//! already-broken sign must leave the state untouched.

use bevy_ecs::prelude::{Entity, Resource};
use log::{info, warn};

use crate::components::sign::SignRole;

/// Lifecycle phase of one instruction sign.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SignPhase {
    /// Nothing requested yet (or a failed spawn rolled back here).
    #[default]
    NotSpawned,
    /// A spawn request is in flight.
    Spawning,
    /// Spawned with its chains intact.
    Intact,
    /// The chain-break animation is running.
    Breaking,
    /// Chains broken; the sign is free.
    Broken,
}

/// Outcome of a chain-break request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BreakStart {
    /// The break animation should start now.
    Started,
    /// Already breaking or broken; nothing to do.
    NoOp,
    /// The sign has not spawned; nothing to break.
    NotSpawned,
}

/// State of one sign slot.
#[derive(Clone, Copy, Debug, Default)]
pub struct SignSlot {
    pub phase: SignPhase,
    pub entity: Option<Entity>,
}

impl SignSlot {
    /// Try to move `NotSpawned -> Spawning`.
    ///
    /// Returns `false` (and logs) when the sign is already spawning or
    /// spawned; the caller must not issue a second spawn request.
    pub fn begin_spawn(&mut self, role: SignRole) -> bool {
        match self.phase {
            SignPhase::NotSpawned => {
                self.phase = SignPhase::Spawning;
                true
            }
            SignPhase::Spawning => {
                info!("Already spawning {} sign", role.label());
                false
            }
            _ => false,
        }
    }

    /// Move `Spawning -> Intact`, recording the spawned entity.
    pub fn finish_spawn(&mut self, entity: Entity) {
        debug_assert_eq!(self.phase, SignPhase::Spawning);
        self.phase = SignPhase::Intact;
        self.entity = Some(entity);
    }

    /// Roll a failed spawn back to `NotSpawned` so a later cycle can retry.
    pub fn fail_spawn(&mut self, role: SignRole) {
        warn!("Spawn of {} sign failed; will retry", role.label());
        self.phase = SignPhase::NotSpawned;
        self.entity = None;
    }

    /// Try to move `Intact -> Breaking`.
    pub fn begin_break(&mut self, role: SignRole) -> BreakStart {
        match self.phase {
            SignPhase::Intact => {
                self.phase = SignPhase::Breaking;
                BreakStart::Started
            }
            SignPhase::Breaking => BreakStart::NoOp,
            SignPhase::Broken => {
                info!("{} sign chains are already broken", role.label());
                BreakStart::NoOp
            }
            SignPhase::NotSpawned | SignPhase::Spawning => {
                warn!(
                    "{} sign chains cannot be broken as it has not spawned",
                    role.label()
                );
                BreakStart::NotSpawned
            }
        }
    }

    /// Move `Breaking -> Broken` (called by the tween completion effect).
    pub fn finish_break(&mut self) {
        if self.phase == SignPhase::Breaking {
            self.phase = SignPhase::Broken;
        }
    }

    pub fn is_spawned(&self) -> bool {
        matches!(
            self.phase,
            SignPhase::Intact | SignPhase::Breaking | SignPhase::Broken
        )
    }

    pub fn is_spawning(&self) -> bool {
        self.phase == SignPhase::Spawning
    }

    /// Spawned with chains not yet broken (and not mid-break).
    pub fn is_intact(&self) -> bool {
        self.phase == SignPhase::Intact
    }
}

/// Both sign slots plus the bodies waiting to be released by the physics
/// side once their break animation completes.
#[derive(Resource, Default)]
pub struct SignCoordinator {
    pub primary: SignSlot,
    pub secondary: SignSlot,
    /// Sign entities whose bodies should become dynamic this frame.
    pub pending_release: Vec<Entity>,
}

impl SignCoordinator {
    pub fn slot(&self, role: SignRole) -> &SignSlot {
        match role {
            SignRole::Primary => &self.primary,
            SignRole::Secondary => &self.secondary,
        }
    }

    pub fn slot_mut(&mut self, role: SignRole) -> &mut SignSlot {
        match role {
            SignRole::Primary => &mut self.primary,
            SignRole::Secondary => &mut self.secondary,
        }
    }

    /// Called by the tween scheduler when a break animation finishes.
    pub fn finish_break(&mut self, role: SignRole) {
        let entity = {
            let slot = self.slot_mut(role);
            slot.finish_break();
            slot.entity
        };
        if let Some(entity) = entity {
            self.pending_release.push(entity);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy_ecs::prelude::World;

    fn entity() -> Entity {
        World::new().spawn_empty().id()
    }

    #[test]
    fn test_begin_spawn_only_once() {
        let mut slot = SignSlot::default();
        assert!(slot.begin_spawn(SignRole::Primary));
        // Second concurrent request is a no-op.
        assert!(!slot.begin_spawn(SignRole::Primary));
        assert_eq!(slot.phase, SignPhase::Spawning);
    }

    #[test]
    fn test_spawn_failure_allows_retry() {
        let mut slot = SignSlot::default();
        assert!(slot.begin_spawn(SignRole::Secondary));
        slot.fail_spawn(SignRole::Secondary);
        assert_eq!(slot.phase, SignPhase::NotSpawned);
        assert!(slot.begin_spawn(SignRole::Secondary));
    }

    #[test]
    fn test_break_requires_spawned_sign() {
        let mut slot = SignSlot::default();
        assert_eq!(slot.begin_break(SignRole::Primary), BreakStart::NotSpawned);
    }

    #[test]
    fn test_break_is_idempotent() {
        let mut slot = SignSlot::default();
        slot.begin_spawn(SignRole::Primary);
        slot.finish_spawn(entity());
        assert_eq!(slot.begin_break(SignRole::Primary), BreakStart::Started);
        // Mid-animation and post-animation requests both do nothing.
        assert_eq!(slot.begin_break(SignRole::Primary), BreakStart::NoOp);
        slot.finish_break();
        assert_eq!(slot.phase, SignPhase::Broken);
        assert_eq!(slot.begin_break(SignRole::Primary), BreakStart::NoOp);
    }

    #[test]
    fn test_finish_break_queues_release() {
        let mut signs = SignCoordinator::default();
        let sign_entity = entity();
        signs.primary.begin_spawn(SignRole::Primary);
        signs.primary.finish_spawn(sign_entity);
        signs.primary.begin_break(SignRole::Primary);
        signs.finish_break(SignRole::Primary);
        assert_eq!(signs.primary.phase, SignPhase::Broken);
        assert_eq!(signs.pending_release, vec![sign_entity]);
    }
}
