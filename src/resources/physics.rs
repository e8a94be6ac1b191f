//! Physics world wrapper and pause flags.
//!
//! [`PhysicsWorld`] owns the rapier sets and pipeline; gravity, sleep
//! tuning and solver iterations come from
//! [`AppConfig`](crate::resources::appconfig::AppConfig) as plain data.
//! [`PhysicsPause`] is the single shared pause flag with an attribution
//! bit so the text-focus path cannot be resumed by an unrelated caller.

use bevy_ecs::prelude::Resource;
use rapier2d::prelude::*;
use std::num::NonZeroUsize;

use crate::resources::appconfig::AppConfig;

/// Upper bound on a single physics timestep, in seconds. Long frames
/// (tab switches, debugger pauses) are clamped instead of exploding the
/// simulation.
pub const MAX_TIMESTEP: f32 = 0.1;

/// Rapier world state stepped once per frame.
#[derive(Resource)]
pub struct PhysicsWorld {
    pub bodies: RigidBodySet,
    pub colliders: ColliderSet,
    pub gravity: Vector<Real>,
    pub integration_parameters: IntegrationParameters,
    pipeline: PhysicsPipeline,
    islands: IslandManager,
    broad_phase: DefaultBroadPhase,
    narrow_phase: NarrowPhase,
    impulse_joints: ImpulseJointSet,
    multibody_joints: MultibodyJointSet,
    ccd_solver: CCDSolver,
}

impl PhysicsWorld {
    /// Build a world from configuration values.
    pub fn from_config(config: &AppConfig) -> Self {
        let mut integration_parameters = IntegrationParameters::default();
        if let Some(iterations) = NonZeroUsize::new(config.solver_iterations as usize) {
            integration_parameters.num_solver_iterations = iterations;
        }
        Self {
            bodies: RigidBodySet::new(),
            colliders: ColliderSet::new(),
            gravity: vector![config.gravity_x, config.gravity_y],
            integration_parameters,
            pipeline: PhysicsPipeline::new(),
            islands: IslandManager::new(),
            broad_phase: DefaultBroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            impulse_joints: ImpulseJointSet::new(),
            multibody_joints: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
        }
    }

    /// Advance the simulation by `dt` seconds (clamped to [`MAX_TIMESTEP`]).
    pub fn step(&mut self, dt: f32) {
        self.integration_parameters.dt = dt.min(MAX_TIMESTEP);
        self.pipeline.step(
            &self.gravity,
            &self.integration_parameters,
            &mut self.islands,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.bodies,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            &mut self.ccd_solver,
            None,
            &(),
            &(),
        );
    }

    /// Insert a body and attach a collider to it.
    pub fn insert(
        &mut self,
        body: RigidBody,
        collider: Collider,
    ) -> (RigidBodyHandle, ColliderHandle) {
        let body_handle = self.bodies.insert(body);
        let collider_handle =
            self.colliders
                .insert_with_parent(collider, body_handle, &mut self.bodies);
        (body_handle, collider_handle)
    }

    /// Remove a body and its attached colliders.
    pub fn remove_body(&mut self, handle: RigidBodyHandle) {
        self.bodies.remove(
            handle,
            &mut self.islands,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            true,
        );
    }

    /// Apply configured sleep tuning to a body.
    pub fn apply_sleep_tuning(&mut self, handle: RigidBodyHandle, config: &AppConfig) {
        if let Some(body) = self.bodies.get_mut(handle) {
            let activation = body.activation_mut();
            activation.normalized_linear_threshold = config.linear_sleep_threshold;
            activation.angular_threshold = config.angular_sleep_threshold;
        }
    }
}

/// Single shared physics pause flag with attribution.
///
/// `paused_by_focus` records that the text-focus path paused physics, so
/// only that path's defocus resumes it; an unrelated resume cannot
/// reactivate physics paused for another reason.
#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct PhysicsPause {
    pub paused: bool,
    pub paused_by_focus: bool,
}

impl PhysicsPause {
    /// Flip the pause flag (debug/manual path). A manual resume also
    /// drops any focus attribution so a later defocus cannot double-resume.
    pub fn toggle(&mut self) {
        self.paused = !self.paused;
        if !self.paused {
            self.paused_by_focus = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_world_from_config_uses_gravity() {
        let config = AppConfig::new();
        let world = PhysicsWorld::from_config(&config);
        assert_eq!(world.gravity.x, config.gravity_x);
        assert_eq!(world.gravity.y, config.gravity_y);
    }

    #[test]
    fn test_step_clamps_timestep() {
        let config = AppConfig::new();
        let mut world = PhysicsWorld::from_config(&config);
        world.step(5.0);
        assert!(world.integration_parameters.dt <= MAX_TIMESTEP);
    }

    #[test]
    fn test_dynamic_body_falls_under_gravity() {
        let config = AppConfig::new();
        let mut world = PhysicsWorld::from_config(&config);
        let body = RigidBodyBuilder::dynamic()
            .translation(vector![0.0, 100.0])
            .build();
        let collider = ColliderBuilder::cuboid(1.0, 1.0).build();
        let (handle, _) = world.insert(body, collider);
        for _ in 0..60 {
            world.step(1.0 / 60.0);
        }
        let y = world.bodies[handle].translation().y;
        assert!(y < 100.0, "body should have fallen, y = {}", y);
    }

    #[test]
    fn test_remove_body() {
        let config = AppConfig::new();
        let mut world = PhysicsWorld::from_config(&config);
        let body = RigidBodyBuilder::fixed().build();
        let collider = ColliderBuilder::cuboid(1.0, 1.0).build();
        let (handle, _) = world.insert(body, collider);
        world.remove_body(handle);
        assert!(world.bodies.get(handle).is_none());
    }

    #[test]
    fn test_pause_toggle() {
        let mut pause = PhysicsPause::default();
        assert!(!pause.paused);
        pause.toggle();
        assert!(pause.paused);
        pause.toggle();
        assert!(!pause.paused);
    }
}
