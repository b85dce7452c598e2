use bevy::prelude::*;

use super::spawner::ObjectId;
use crate::engine::physics::BodyPose;

/// Everything the frame loop pushes out to the renderer side.
///
/// The Bevy implementation lives in `systems::frame_driver`; tests record calls.
pub trait SceneHost {
    /// Feed the sky model the sun position.
    fn update_sky(&mut self, sun_position: Vec3);

    /// Feed the water model the normalised sun direction.
    fn update_water_sun(&mut self, sun_direction: Vec3);

    /// Rebuild environment lighting from the current sky state.
    fn regenerate_environment(&mut self);

    /// Copy a body's pose onto its visual object.
    fn mirror_body(&mut self, object: ObjectId, pose: BodyPose);

    /// Set a leaf's local position relative to the trunk.
    fn place_leaf(&mut self, leaf: usize, offset: Vec3);

    /// Set the trunk's rotation about X.
    fn bend_trunk(&mut self, angle: f32);

    /// Set the island's rotation about Y.
    fn spin_island(&mut self, angle: f32);

    /// Advance the water time uniform.
    fn advance_water(&mut self, step: f32);

    fn request_render(&mut self);
}
