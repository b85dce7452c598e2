use bevy::color::Color;

pub const ISLAND_COLOUR: Color = Color::srgb(244.0 / 255.0, 162.0 / 255.0, 97.0 / 255.0);
pub const BARK_COLOUR: Color = Color::srgb(139.0 / 255.0, 69.0 / 255.0, 19.0 / 255.0);
pub const LEAF_COLOUR: Color = Color::srgb(34.0 / 255.0, 139.0 / 255.0, 34.0 / 255.0);
pub const WATER_COLOUR: Color = Color::srgb(0.0, 30.0 / 255.0, 15.0 / 255.0);
pub const SUN_COLOUR: Color = Color::WHITE;

pub const ISLAND_SEGMENTS: u32 = 32;
pub const COCONUT_SEGMENTS: u32 = 16;
pub const TRUNK_SEGMENTS: u32 = 8;

pub const CAMERA_POSITION: [f32; 3] = [30.0, 30.0, 100.0];
pub const CAMERA_TARGET: [f32; 3] = [0.0, 10.0, 0.0];
pub const CAMERA_FOV_DEGREES: f32 = 55.0;
pub const CAMERA_NEAR: f32 = 1.0;
pub const CAMERA_FAR: f32 = 20_000.0;

/// Directional light illuminance with the sun at the zenith (lux).
pub const SUN_ILLUMINANCE: f32 = 10_000.0;

/// Ambient brightness with the sun at the zenith.
pub const AMBIENT_BRIGHTNESS: f32 = 400.0;
