use bevy::prelude::*;
use constants::physics::{FIXED_TIMESTEP, GRAVITY, GROUND_HEIGHT, MAX_SUBSTEPS};
use rapier3d::math::Real;
use rapier3d::prelude::*;
use serde::{Deserialize, Serialize};

use super::body::{BodyPose, BodyShape, BodySpec, SurfaceMaterial};

pub type BodyHandle = RigidBodyHandle;

/// Solver configuration for the scene.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsSettings {
    pub gravity: f32,
    pub fixed_timestep: f32,
    pub max_substeps: u32,
    pub ground_height: f32,
    pub material: SurfaceMaterial,
}

impl Default for PhysicsSettings {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            fixed_timestep: FIXED_TIMESTEP,
            max_substeps: MAX_SUBSTEPS,
            ground_height: GROUND_HEIGHT,
            material: SurfaceMaterial::default(),
        }
    }
}

/// Rapier world plus the time accumulator driving fixed sub-steps.
pub struct PhysicsWorld {
    gravity: Vector<Real>,
    integration_parameters: IntegrationParameters,
    physics_pipeline: PhysicsPipeline,
    island_manager: IslandManager,
    broad_phase: DefaultBroadPhase,
    narrow_phase: NarrowPhase,
    rigid_body_set: RigidBodySet,
    collider_set: ColliderSet,
    impulse_joint_set: ImpulseJointSet,
    multibody_joint_set: MultibodyJointSet,
    ccd_solver: CCDSolver,
    query_pipeline: QueryPipeline,
    accumulator: f32,
    substeps_taken: u64,
}

impl PhysicsWorld {
    pub fn new(gravity: f32) -> Self {
        Self {
            gravity: vector![0.0, gravity, 0.0],
            integration_parameters: IntegrationParameters::default(),
            physics_pipeline: PhysicsPipeline::new(),
            island_manager: IslandManager::new(),
            broad_phase: DefaultBroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            rigid_body_set: RigidBodySet::new(),
            collider_set: ColliderSet::new(),
            impulse_joint_set: ImpulseJointSet::new(),
            multibody_joint_set: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
            query_pipeline: QueryPipeline::new(),
            accumulator: 0.0,
            substeps_taken: 0,
        }
    }

    /// World with gravity and the static ground plane from `settings`.
    pub fn from_settings(settings: &PhysicsSettings) -> Self {
        let mut world = Self::new(settings.gravity);
        world.add_ground_plane(settings.ground_height, &settings.material);
        world
    }

    /// Infinite static plane facing +Y at `height`.
    pub fn add_ground_plane(&mut self, height: f32, material: &SurfaceMaterial) -> ColliderHandle {
        let collider = ColliderBuilder::halfspace(Vector::y_axis())
            .translation(vector![0.0, height, 0.0])
            .friction(material.friction)
            .restitution(material.restitution)
            .build();
        self.collider_set.insert(collider)
    }

    pub fn add_body(&mut self, spec: &BodySpec) -> BodyHandle {
        let body = RigidBodyBuilder::dynamic()
            .translation(vector![spec.position.x, spec.position.y, spec.position.z])
            .linear_damping(spec.linear_damping)
            .angular_damping(spec.angular_damping)
            .build();
        let handle = self.rigid_body_set.insert(body);

        let collider = match spec.shape {
            BodyShape::Ball { radius } => ColliderBuilder::ball(radius),
        }
        .mass(spec.mass)
        .friction(spec.material.friction)
        .restitution(spec.material.restitution)
        .build();
        self.collider_set
            .insert_with_parent(collider, handle, &mut self.rigid_body_set);

        handle
    }

    /// Advance by `frame_dt` using sub-steps of `fixed_dt`, taking at most
    /// `max_substeps`. Time left over is carried modulo `fixed_dt`, so a slow
    /// frame drops simulated time instead of spiralling. Returns sub-steps taken.
    pub fn step(&mut self, fixed_dt: f32, frame_dt: f32, max_substeps: u32) -> u32 {
        if fixed_dt <= 0.0 {
            return 0;
        }

        self.integration_parameters.dt = fixed_dt;
        self.accumulator += frame_dt.max(0.0);

        let mut substeps = 0;
        while self.accumulator >= fixed_dt && substeps < max_substeps {
            self.step_once();
            self.accumulator -= fixed_dt;
            substeps += 1;
        }
        self.accumulator %= fixed_dt;
        self.substeps_taken += u64::from(substeps);

        substeps
    }

    fn step_once(&mut self) {
        self.physics_pipeline.step(
            &self.gravity,
            &self.integration_parameters,
            &mut self.island_manager,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.rigid_body_set,
            &mut self.collider_set,
            &mut self.impulse_joint_set,
            &mut self.multibody_joint_set,
            &mut self.ccd_solver,
            Some(&mut self.query_pipeline),
            &(),
            &(),
        );
    }

    pub fn pose(&self, handle: BodyHandle) -> Option<BodyPose> {
        let body = self.rigid_body_set.get(handle)?;
        let t = body.translation();
        let q = body.rotation();
        Some(BodyPose {
            translation: Vec3::new(t.x, t.y, t.z),
            rotation: Quat::from_xyzw(q.i, q.j, q.k, q.w),
        })
    }

    pub fn translation(&self, handle: BodyHandle) -> Option<Vec3> {
        self.pose(handle).map(|pose| pose.translation)
    }

    pub fn velocity(&self, handle: BodyHandle) -> Option<Vec3> {
        let v = self.rigid_body_set.get(handle)?.linvel();
        Some(Vec3::new(v.x, v.y, v.z))
    }

    pub fn set_velocity(&mut self, handle: BodyHandle, velocity: Vec3) {
        if let Some(body) = self.rigid_body_set.get_mut(handle) {
            body.set_linvel(vector![velocity.x, velocity.y, velocity.z], true);
        }
    }

    pub fn set_translation(&mut self, handle: BodyHandle, translation: Vec3) {
        if let Some(body) = self.rigid_body_set.get_mut(handle) {
            body.set_translation(vector![translation.x, translation.y, translation.z], true);
        }
    }

    /// Overwrite only the vertical coordinate, keeping x and z.
    pub fn set_height(&mut self, handle: BodyHandle, y: f32) {
        if let Some(body) = self.rigid_body_set.get_mut(handle) {
            let mut t = *body.translation();
            t.y = y;
            body.set_translation(t, true);
        }
    }

    /// Pin the body where it is: zero motion and exclude it from integration.
    pub fn freeze(&mut self, handle: BodyHandle) {
        if let Some(body) = self.rigid_body_set.get_mut(handle) {
            body.set_linvel(Vector::zeros(), false);
            body.set_angvel(Vector::zeros(), false);
            body.set_body_type(RigidBodyType::Fixed, true);
        }
    }

    pub fn is_frozen(&self, handle: BodyHandle) -> bool {
        self.rigid_body_set
            .get(handle)
            .is_some_and(|body| body.is_fixed())
    }

    pub fn body_count(&self) -> usize {
        self.rigid_body_set.len()
    }

    /// Solver sub-steps taken since construction.
    pub fn substeps_taken(&self) -> u64 {
        self.substeps_taken
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const DT: f32 = 1.0 / 60.0;

    #[test]
    fn step_caps_substeps_and_drops_excess_time() {
        let mut world = PhysicsWorld::new(GRAVITY);
        assert_eq!(world.step(DT, 1.0, 3), 3);
        // The second of backlog was discarded, not carried.
        assert_eq!(world.step(DT, 0.0, 3), 0);
        assert_eq!(world.substeps_taken(), 3);
    }

    #[test]
    fn step_accumulates_short_frames() {
        let mut world = PhysicsWorld::new(GRAVITY);
        assert_eq!(world.step(DT, DT * 0.5, 3), 0);
        assert_eq!(world.step(DT, DT * 0.6, 3), 1);
    }

    #[test]
    fn non_positive_fixed_step_is_ignored() {
        let mut world = PhysicsWorld::new(GRAVITY);
        assert_eq!(world.step(0.0, 0.1, 3), 0);
    }

    #[test]
    fn dynamic_body_falls_under_gravity() {
        let mut world = PhysicsWorld::from_settings(&PhysicsSettings::default());
        let handle = world.add_body(&BodySpec::ball_at(Vec3::new(-5.0, 22.0, 0.0)));

        let mut last = world.translation(handle).unwrap().y;
        for _ in 0..30 {
            world.step(DT, DT, 3);
            let y = world.translation(handle).unwrap().y;
            assert!(y < last);
            last = y;
        }
        assert!(world.velocity(handle).unwrap().y < 0.0);
    }

    #[test]
    fn undamped_body_accelerates_at_configured_gravity() {
        let mut world = PhysicsWorld::new(GRAVITY);
        let spec = BodySpec {
            linear_damping: 0.0,
            angular_damping: 0.0,
            ..BodySpec::ball_at(Vec3::new(0.0, 100.0, 0.0))
        };
        let handle = world.add_body(&spec);

        for _ in 0..60 {
            world.step(DT, DT, 3);
        }
        assert_relative_eq!(world.velocity(handle).unwrap().y, GRAVITY, epsilon = 1e-3);
    }

    #[test]
    fn set_height_keeps_horizontal_position() {
        let mut world = PhysicsWorld::new(GRAVITY);
        let handle = world.add_body(&BodySpec::ball_at(Vec3::new(3.0, 10.0, -4.0)));
        world.set_height(handle, 2.5);
        let t = world.translation(handle).unwrap();
        assert_relative_eq!(t.x, 3.0);
        assert_relative_eq!(t.y, 2.5);
        assert_relative_eq!(t.z, -4.0);
    }

    #[test]
    fn frozen_body_ignores_gravity() {
        let mut world = PhysicsWorld::new(GRAVITY);
        let handle = world.add_body(&BodySpec::ball_at(Vec3::new(0.0, 10.0, 0.0)));
        world.freeze(handle);
        for _ in 0..20 {
            world.step(DT, DT, 3);
        }
        assert!(world.is_frozen(handle));
        assert_relative_eq!(world.translation(handle).unwrap().y, 10.0);
    }
}
