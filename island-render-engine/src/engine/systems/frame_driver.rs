use bevy::ecs::system::SystemParam;
use bevy::prelude::*;
use bevy::window::RequestRedraw;

use crate::engine::physics::BodyPose;
use crate::engine::scene::nodes::{EnvironmentMap, SceneNode, SkyModel, WaterSurface};
use crate::engine::simulation::{FrameClock, IslandSimulation, ObjectId, SceneHost};

/// ECS side of [`SceneHost`]: writes simulation output onto scene entities.
#[derive(SystemParam)]
pub struct SceneBridge<'w, 's> {
    nodes: Query<'w, 's, (&'static SceneNode, &'static mut Transform)>,
    water: Query<'w, 's, &'static mut WaterSurface>,
    sky: ResMut<'w, SkyModel>,
    environment: ResMut<'w, EnvironmentMap>,
    redraw: EventWriter<'w, RequestRedraw>,
}

impl SceneBridge<'_, '_> {
    fn with_node(&mut self, node: SceneNode, apply: impl FnOnce(&mut Transform)) {
        if let Some((_, mut transform)) = self.nodes.iter_mut().find(|(n, _)| **n == node) {
            apply(&mut *transform);
        }
    }
}

impl SceneHost for SceneBridge<'_, '_> {
    fn update_sky(&mut self, sun_position: Vec3) {
        self.sky.sun_position = sun_position;
    }

    fn update_water_sun(&mut self, sun_direction: Vec3) {
        for mut water in &mut self.water {
            water.sun_direction = sun_direction;
        }
    }

    fn regenerate_environment(&mut self) {
        let sky = self.sky.clone();
        self.environment.regenerate(&sky);
    }

    fn mirror_body(&mut self, object: ObjectId, pose: BodyPose) {
        self.with_node(SceneNode::Coconut(object), |transform| {
            transform.translation = pose.translation;
            transform.rotation = pose.rotation;
        });
    }

    fn place_leaf(&mut self, leaf: usize, offset: Vec3) {
        self.with_node(SceneNode::Leaf(leaf), |transform| {
            transform.translation = offset;
        });
    }

    fn bend_trunk(&mut self, angle: f32) {
        self.with_node(SceneNode::Trunk, |transform| {
            transform.rotation = Quat::from_rotation_x(angle);
        });
    }

    fn spin_island(&mut self, angle: f32) {
        self.with_node(SceneNode::Island, |transform| {
            transform.rotation = Quat::from_rotation_y(angle);
        });
    }

    fn advance_water(&mut self, step: f32) {
        for mut water in &mut self.water {
            water.time += step;
        }
    }

    fn request_render(&mut self) {
        self.redraw.write(RequestRedraw);
    }
}

/// Run one simulation frame against the live scene.
pub fn drive_frame(
    time: Res<Time>,
    mut simulation: ResMut<IslandSimulation>,
    mut bridge: SceneBridge,
) {
    let clock = FrameClock {
        elapsed: time.elapsed_secs_f64(),
        delta: time.delta_secs(),
    };
    let report = simulation.advance(clock, &mut bridge);

    for object in &report.spawned {
        debug!("Frame {}: body created for {:?}", simulation.frames(), object);
    }
}
