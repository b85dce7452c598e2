use bevy::prelude::*;

use crate::engine::simulation::IslandSimulation;

/// Stop the simulation once the app is asked to exit.
pub fn shutdown_on_exit(
    mut exits: EventReader<AppExit>,
    simulation: Option<ResMut<IslandSimulation>>,
) {
    if exits.is_empty() {
        return;
    }
    exits.clear();

    if let Some(mut simulation) = simulation {
        if simulation.is_active() {
            info!(
                "Exit requested after {} frames, shutting down simulation",
                simulation.frames()
            );
            simulation.shutdown();
        }
    }
}
