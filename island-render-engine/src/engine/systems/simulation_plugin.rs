use bevy::prelude::*;
use bevy::window::RequestRedraw;

use super::environment::apply_environment;
use super::frame_driver::drive_frame;
use super::teardown::shutdown_on_exit;
use crate::engine::scene::nodes::{EnvironmentMap, SkyModel};
use crate::engine::simulation::IslandSimulation;

/// Drives [`IslandSimulation`] once per frame whenever the resource exists.
///
/// Works headless: it needs `Time` and nothing from the renderer.
pub struct IslandSimulationPlugin;

impl Plugin for IslandSimulationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SkyModel>()
            .init_resource::<EnvironmentMap>()
            .init_resource::<ClearColor>()
            .add_event::<RequestRedraw>()
            .add_event::<AppExit>()
            .add_systems(
                Update,
                (drive_frame, apply_environment)
                    .chain()
                    .run_if(resource_exists::<IslandSimulation>),
            )
            .add_systems(Last, shutdown_on_exit);
    }
}
