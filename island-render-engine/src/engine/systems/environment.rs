use bevy::prelude::*;

use crate::engine::scene::nodes::{EnvironmentMap, SunLight};

/// Push a freshly regenerated environment onto the clear colour, ambient
/// light and sun.
pub fn apply_environment(
    environment: Res<EnvironmentMap>,
    mut clear_colour: ResMut<ClearColor>,
    ambient: Option<ResMut<AmbientLight>>,
    mut sun: Query<(&mut DirectionalLight, &mut Transform), With<SunLight>>,
) {
    if !environment.is_changed() {
        return;
    }

    clear_colour.0 = environment.sky_colour;

    if let Some(mut ambient) = ambient {
        ambient.color = environment.sky_colour;
        ambient.brightness = environment.ambient_brightness;
    }

    for (mut light, mut transform) in &mut sun {
        light.illuminance = environment.sun_illuminance;
        *transform = Transform::from_translation(environment.sun_direction)
            .looking_at(Vec3::ZERO, Vec3::Y);
    }
}
