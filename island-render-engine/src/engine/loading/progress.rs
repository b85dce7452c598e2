use bevy::prelude::*;

#[derive(Resource, Default, Debug)]
pub struct LoadingProgress {
    pub config_requested: bool,
    pub config_loaded: bool,
    pub used_fallback: bool,
}
