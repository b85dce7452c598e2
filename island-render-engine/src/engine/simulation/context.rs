use bevy::prelude::*;

use super::spawner::{ObjectId, TimedSpawner};
use crate::engine::physics::{BodyHandle, BodyPose, PhysicsWorld};
use crate::engine::scene::height_field::HeightField;

/// Mutable world state shared by the spawner and the per-object controllers.
///
/// Passed by reference into each controller update; nothing here is global.
pub struct SimulationContext {
    pub physics: PhysicsWorld,
    pub field: HeightField,
    pub spawner: TimedSpawner,
    active: bool,
}

impl SimulationContext {
    pub fn new(physics: PhysicsWorld, field: HeightField) -> Self {
        Self {
            physics,
            field,
            spawner: TimedSpawner::default(),
            active: true,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Stop the simulation for good: pending spawns are dropped and later
    /// fire attempts are no-ops.
    pub fn deactivate(&mut self) {
        if self.active {
            self.active = false;
            self.spawner.cancel_all();
            info!("Simulation deactivated");
        }
    }

    /// Fire due spawns. Does nothing once deactivated.
    pub fn fire_due_spawns(&mut self, now: f64) -> Vec<ObjectId> {
        if !self.active {
            return Vec::new();
        }
        self.spawner
            .fire_due(now, &mut self.physics)
            .into_iter()
            .map(|(object, _)| object)
            .collect()
    }

    pub fn body_of(&self, object: ObjectId) -> Option<BodyHandle> {
        self.spawner.body_of(object)
    }

    pub fn pose_of(&self, object: ObjectId) -> Option<BodyPose> {
        self.body_of(object)
            .and_then(|handle| self.physics.pose(handle))
    }
}
