use bevy::asset::AssetMetaCheck;
use bevy::log::{Level, LogPlugin};
use bevy::prelude::*;
use bevy_common_assets::json::JsonAssetPlugin;

use crate::engine::assets::scene_config::SceneConfig;
use crate::engine::core::app_state::{AppState, transition_to_running};
use crate::engine::core::window_config::create_window_config;
use crate::engine::loading::config_loader::{ConfigLoader, load_scene_config, start_loading};
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::scene::nodes::EnvironmentMap;
use crate::engine::scene::spawn::spawn_scene;
use crate::engine::systems::IslandSimulationPlugin;

const LOG_FILTER: &str = "wgpu=error,naga=warn,island_render_engine=debug";

pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .init_state::<AppState>()
        // Registers SceneConfig as a loadable asset type from `.scene.json` files.
        .add_plugins(JsonAssetPlugin::<SceneConfig>::new(&["scene.json"]))
        .add_plugins(IslandSimulationPlugin)
        .insert_resource(ClearColor(EnvironmentMap::default().sky_colour));

    app.init_resource::<LoadingProgress>()
        .init_resource::<ConfigLoader>();

    app.add_systems(Startup, start_loading)
        .add_systems(
            Update,
            (load_scene_config, transition_to_running)
                .chain()
                .run_if(in_state(AppState::Loading)),
        )
        .add_systems(OnEnter(AppState::Running), spawn_scene);

    app
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    let log_config = LogPlugin {
        level: Level::INFO,
        filter: LOG_FILTER.into(),
        ..default()
    };

    DefaultPlugins
        .set(window_config)
        .set(asset_config)
        .set(log_config)
}
