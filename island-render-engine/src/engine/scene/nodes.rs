use bevy::prelude::*;

use constants::lighting::{SKY_RAYLEIGH, SKY_TURBIDITY, WATER_DISTORTION_SCALE};
use constants::render_settings::{AMBIENT_BRIGHTNESS, SUN_COLOUR, SUN_ILLUMINANCE, WATER_COLOUR};

use crate::engine::assets::scene_config::{SkyConfig, WaterConfig};
use crate::engine::simulation::ObjectId;

/// Visual object the frame driver writes transforms to.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneNode {
    Island,
    Trunk,
    Leaf(usize),
    Coconut(ObjectId),
}

#[derive(Component)]
pub struct SunLight;

/// Water shading inputs. Only `time` and `sun_direction` change after spawn.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct WaterSurface {
    pub sun_direction: Vec3,
    pub sun_colour: Color,
    pub water_colour: Color,
    pub distortion_scale: f32,
    pub time: f32,
}

impl WaterSurface {
    pub fn from_config(config: &WaterConfig) -> Self {
        Self {
            distortion_scale: config.distortion_scale,
            ..default()
        }
    }
}

impl Default for WaterSurface {
    fn default() -> Self {
        Self {
            sun_direction: Vec3::Y,
            sun_colour: SUN_COLOUR,
            water_colour: WATER_COLOUR,
            distortion_scale: WATER_DISTORTION_SCALE,
            time: 0.0,
        }
    }
}

/// Analytic sky state fed with the sun position every frame.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct SkyModel {
    pub sun_position: Vec3,
    pub turbidity: f32,
    pub rayleigh: f32,
}

impl Default for SkyModel {
    fn default() -> Self {
        Self {
            sun_position: Vec3::Y,
            turbidity: SKY_TURBIDITY,
            rayleigh: SKY_RAYLEIGH,
        }
    }
}

impl SkyModel {
    pub fn from_config(config: &SkyConfig) -> Self {
        Self {
            turbidity: config.turbidity,
            rayleigh: config.rayleigh,
            ..default()
        }
    }

    /// Sine of the sun's elevation, clamped to the upper hemisphere.
    pub fn sun_height(&self) -> f32 {
        self.sun_position.normalize_or_zero().y.clamp(0.0, 1.0)
    }

    /// Cheap stand-in for the scattering integral: a hazy blue at noon that
    /// warms and darkens as the sun approaches the horizon.
    pub fn zenith_colour(&self) -> Color {
        let haze = (self.turbidity / 20.0).clamp(0.0, 1.0);
        let scatter = (self.rayleigh / 4.0).clamp(0.0, 1.0);
        let noon = Vec3::new(0.2 + 0.3 * haze, 0.4 + 0.25 * haze, 0.55 + 0.4 * scatter);
        let dusk = Vec3::new(0.85, 0.42, 0.22);

        let day = self.sun_height().sqrt();
        let rgb = dusk.lerp(noon, day) * (0.25 + 0.75 * day);
        Color::srgb(rgb.x, rgb.y, rgb.z)
    }

    /// Light scale in `[0.05, 1]` applied to sun and ambient intensity.
    pub fn daylight(&self) -> f32 {
        self.sun_height().max(0.05)
    }
}

/// Lighting derived from the sky, rebuilt whenever the sun moves.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct EnvironmentMap {
    pub generation: u64,
    pub sun_direction: Vec3,
    pub sky_colour: Color,
    pub sun_illuminance: f32,
    pub ambient_brightness: f32,
}

impl Default for EnvironmentMap {
    fn default() -> Self {
        Self {
            generation: 0,
            sun_direction: Vec3::Y,
            sky_colour: SkyModel::default().zenith_colour(),
            sun_illuminance: SUN_ILLUMINANCE,
            ambient_brightness: AMBIENT_BRIGHTNESS,
        }
    }
}

impl EnvironmentMap {
    /// Replace the derived lighting with a fresh bake of `sky`.
    pub fn regenerate(&mut self, sky: &SkyModel) {
        let daylight = sky.daylight();
        self.generation += 1;
        self.sun_direction = sky.sun_position.normalize_or(Vec3::Y);
        self.sky_colour = sky.zenith_colour();
        self.sun_illuminance = SUN_ILLUMINANCE * daylight;
        self.ambient_brightness = AMBIENT_BRIGHTNESS * daylight;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::simulation::sun::sun_direction;

    #[test]
    fn sky_dims_towards_the_horizon() {
        let noon = SkyModel::default();
        let dusk = SkyModel {
            sun_position: sun_direction(5.0, 180.0),
            ..default()
        };
        assert!(dusk.daylight() < noon.daylight());

        let noon = noon.zenith_colour().to_srgba();
        let dusk = dusk.zenith_colour().to_srgba();
        assert!(noon.blue > dusk.blue);
        assert!(dusk.red / dusk.blue > noon.red / noon.blue);
    }

    #[test]
    fn sun_below_horizon_keeps_a_floor() {
        let sky = SkyModel {
            sun_position: Vec3::NEG_Y,
            ..default()
        };
        assert_eq!(sky.daylight(), 0.05);
    }

    #[test]
    fn regenerate_bumps_generation() {
        let mut environment = EnvironmentMap::default();
        let sky = SkyModel {
            sun_position: Vec3::new(0.0, 2.0, 0.0),
            ..default()
        };
        environment.regenerate(&sky);
        environment.regenerate(&sky);
        assert_eq!(environment.generation, 2);
        assert_eq!(environment.sun_direction, Vec3::Y);
        assert_eq!(environment.sun_illuminance, SUN_ILLUMINANCE);
    }
}
