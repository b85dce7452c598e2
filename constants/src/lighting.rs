/// Initial sun elevation (degrees above the horizon).
pub const SUN_ELEVATION: f32 = 90.0;

/// Sun azimuth (degrees).
pub const SUN_AZIMUTH: f32 = 180.0;

/// Elevation reached at the end of the sunset animation.
pub const SUNSET_ELEVATION: f32 = 5.0;

/// Sunset animation length (seconds).
pub const SUNSET_DURATION: f64 = 10.0;

/// Delay before the sunset animation is armed (seconds).
pub const SUNSET_DELAY: f64 = 1.0;

pub const SKY_TURBIDITY: f32 = 10.0;
pub const SKY_RAYLEIGH: f32 = 2.0;

/// Water time uniform increment per frame, independent of frame delta.
pub const WATER_TIME_STEP: f32 = 1.0 / 60.0;
pub const WATER_SIZE: f32 = 10_000.0;
pub const WATER_DISTORTION_SCALE: f32 = 3.7;
