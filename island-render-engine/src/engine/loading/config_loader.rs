use bevy::asset::LoadState;
use bevy::prelude::*;

use crate::engine::assets::scene_config::SceneConfig;
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::scene::nodes::SkyModel;
use crate::engine::simulation::IslandSimulation;

pub const SCENE_CONFIG_PATH: &str = "island.scene.json";

#[derive(Resource, Default)]
pub struct ConfigLoader {
    handle: Option<Handle<SceneConfig>>,
}

// Start the loading process
pub fn start_loading(
    mut config_loader: ResMut<ConfigLoader>,
    mut loading_progress: ResMut<LoadingProgress>,
    asset_server: Res<AssetServer>,
) {
    info!("Loading scene config from: {}", SCENE_CONFIG_PATH);
    config_loader.handle = Some(asset_server.load(SCENE_CONFIG_PATH));
    loading_progress.config_requested = true;
}

/// Wait for the config asset, then build the simulation from it. A config
/// that fails to load or validate is replaced by the defaults.
pub fn load_scene_config(
    mut loading_progress: ResMut<LoadingProgress>,
    config_loader: Res<ConfigLoader>,
    configs: Res<Assets<SceneConfig>>,
    asset_server: Res<AssetServer>,
    time: Res<Time>,
    mut commands: Commands,
) {
    if loading_progress.config_loaded {
        return;
    }
    let Some(handle) = config_loader.handle.as_ref() else {
        return;
    };

    let config = if let Some(config) = configs.get(handle) {
        match config.validate() {
            Ok(()) => {
                info!("✓ Scene config loaded");
                config.clone()
            }
            Err(error) => {
                warn!("Invalid scene config ({error}), using defaults");
                loading_progress.used_fallback = true;
                SceneConfig::default()
            }
        }
    } else if let LoadState::Failed(error) = asset_server.load_state(handle) {
        warn!("Could not load {SCENE_CONFIG_PATH} ({error}), using defaults");
        loading_progress.used_fallback = true;
        SceneConfig::default()
    } else {
        return;
    };

    install_simulation(&mut commands, config, time.elapsed_secs_f64());
    loading_progress.config_loaded = true;
}

/// Insert the config, the sky parameters and a simulation whose clock starts at `origin`.
pub fn install_simulation(commands: &mut Commands, config: SceneConfig, origin: f64) {
    commands.insert_resource(SkyModel::from_config(&config.sky));
    commands.insert_resource(IslandSimulation::new(&config, origin));
    commands.insert_resource(config);
}
